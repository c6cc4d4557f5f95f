mod analyze_image;
mod chat;
mod encode_image;

pub use analyze_image::*;
pub use chat::*;
pub use encode_image::*;
