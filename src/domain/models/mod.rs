mod completion;
mod message;
mod session;
mod staged_image;

pub use completion::*;
pub use message::*;
pub use session::*;
pub use staged_image::*;
