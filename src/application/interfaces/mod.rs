mod completion_client;
mod image_source;

pub use completion_client::*;
pub use image_source::*;
