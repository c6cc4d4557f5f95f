use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::application::ImageSource;
use crate::domain::{EncodeError, StagedImage};

/// Maximum accepted image size: 4 MiB.
pub const MAX_IMAGE_BYTES: u64 = 4 * 1024 * 1024;

/// Validates a file-like input and converts it to a staged base64 image.
///
/// Validation happens before any read: a source with a non-image content type
/// or one over the size limit is rejected without touching its bytes. The
/// result is a pure function of the file content, so encoding the same file
/// twice yields the same string. Invocations are independent; there is no
/// shared state between concurrent encodes.
pub struct EncodeImageUseCase;

impl EncodeImageUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, source: &dyn ImageSource) -> Result<StagedImage, EncodeError> {
        if !source.content_type().starts_with("image/") {
            return Err(EncodeError::InvalidType);
        }

        if source.len() > MAX_IMAGE_BYTES {
            return Err(EncodeError::TooLarge);
        }

        let bytes = source.read()?;
        debug!(
            "Encoded {} image ({} bytes)",
            source.content_type(),
            bytes.len()
        );

        Ok(StagedImage::new(STANDARD.encode(bytes)))
    }
}

impl Default for EncodeImageUseCase {
    fn default() -> Self {
        Self::new()
    }
}
