mod fs_image_source;
mod mock_completion;
mod openai_client;

pub use fs_image_source::*;
pub use mock_completion::*;
pub use openai_client::*;
