/// A file-like input to the image encoder.
///
/// The declared content type and length are cheap metadata; `read` is only
/// called once both have passed validation, so a rejected source is never
/// read.
pub trait ImageSource {
    /// Declared MIME type, e.g. `image/png`.
    fn content_type(&self) -> &str;

    /// Declared byte length.
    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the full content. Called at most once per encode.
    fn read(&self) -> std::io::Result<Vec<u8>>;
}
