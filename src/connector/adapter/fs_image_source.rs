use std::path::{Path, PathBuf};

use crate::application::ImageSource;

/// Filesystem-backed [`ImageSource`].
///
/// The content type is guessed from the file extension and the length comes
/// from metadata; the file itself is only read once the encoder has accepted
/// both.
pub struct FsImageFile {
    path: PathBuf,
    content_type: &'static str,
    len: u64,
}

impl FsImageFile {
    pub fn open(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let len = std::fs::metadata(&path)?.len();
        let content_type = guess_content_type(&path);
        Ok(Self {
            path,
            content_type,
            len,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSource for FsImageFile {
    fn content_type(&self) -> &str {
        self.content_type
    }

    fn len(&self) -> u64 {
        self.len
    }

    fn read(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}

fn guess_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::application::EncodeImageUseCase;
    use crate::domain::EncodeError;

    #[test]
    fn guesses_content_type_from_extension() {
        assert_eq!(guess_content_type(Path::new("photo.JPG")), "image/jpeg");
        assert_eq!(guess_content_type(Path::new("icon.png")), "image/png");
        assert_eq!(
            guess_content_type(Path::new("notes.txt")),
            "application/octet-stream"
        );
        assert_eq!(
            guess_content_type(Path::new("no_extension")),
            "application/octet-stream"
        );
    }

    #[test]
    fn encodes_a_real_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"ABC").unwrap();

        let source = FsImageFile::open(&path).unwrap();
        let image = EncodeImageUseCase::new().execute(&source).unwrap();
        assert_eq!(image.as_base64(), "QUJD");
    }

    #[test]
    fn rejects_a_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "not an image").unwrap();

        let source = FsImageFile::open(&path).unwrap();
        let err = EncodeImageUseCase::new().execute(&source).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidType));
    }

    #[test]
    fn open_fails_for_missing_file() {
        assert!(FsImageFile::open("/definitely/not/here.png").is_err());
    }
}
