use serde::{Deserialize, Serialize};

/// One pending base64-encoded image, held without its data-URI prefix.
///
/// Owned by a client session: cleared after being attached to an outgoing
/// message or explicitly removed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StagedImage {
    base64: String,
}

impl StagedImage {
    pub fn new(base64: impl Into<String>) -> Self {
        Self {
            base64: base64.into(),
        }
    }

    pub fn as_base64(&self) -> &str {
        &self.base64
    }

    pub fn into_base64(self) -> String {
        self.base64
    }

    pub fn data_uri(&self) -> String {
        format!("data:image/jpeg;base64,{}", self.base64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_carries_jpeg_prefix() {
        let image = StagedImage::new("QUJD");
        assert_eq!(image.data_uri(), "data:image/jpeg;base64,QUJD");
    }

    #[test]
    fn serializes_as_bare_string() {
        let image = StagedImage::new("QUJD");
        assert_eq!(serde_json::to_string(&image).unwrap(), "\"QUJD\"");
    }
}
