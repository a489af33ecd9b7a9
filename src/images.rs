//! Image attachments for catalog-item uploads.
//!
//! The image directory is read once at startup via [`init`] and shared
//! read-only across all virtual users. Bytes are held in memory and cloned
//! into each multipart form.

use anyhow::Context;
use once_cell::sync::OnceCell;
use std::path::Path;
use walkdir::WalkDir;

static IMAGES: OnceCell<ImageSet> = OnceCell::new();

/// One loaded image file.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// The fixed set of images available to uploads, in file-name order.
#[derive(Debug, Default)]
pub struct ImageSet {
    files: Vec<ImageFile>,
}

impl ImageSet {
    /// Read every recognized image file directly under `dir`.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.with_context(|| format!("reading {}", dir.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            let Some(mime) = mime_for_extension(ext) else {
                continue;
            };
            let bytes = std::fs::read(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            files.push(ImageFile {
                file_name,
                mime,
                bytes,
            });
        }
        Ok(Self { files })
    }

    /// The first `n` images (fewer when the set is smaller).
    pub fn first(&self, n: usize) -> &[ImageFile] {
        &self.files[..self.files.len().min(n)]
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Load the shared image set from `dir`. Later calls keep the first set.
pub fn init(dir: &Path) -> anyhow::Result<&'static ImageSet> {
    IMAGES.get_or_try_init(|| ImageSet::load(dir))
}

/// The shared image set, if [`init`] has run.
pub fn get() -> Option<&'static ImageSet> {
    IMAGES.get()
}

/// The attachments an upload should carry: the first three shared images,
/// or nothing when the set was never initialized.
pub fn attachments() -> &'static [ImageFile] {
    get().map(|set| set.first(3)).unwrap_or(&[])
}

/// MIME type for a recognized image extension.
fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.jpg"), b"bbb").unwrap();
        fs::write(dir.path().join("a.png"), b"aaa").unwrap();
        fs::write(dir.path().join("notes.txt"), b"not an image").unwrap();

        let set = ImageSet::load(dir.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.first(3)[0].file_name, "a.png");
        assert_eq!(set.first(3)[0].mime, "image/png");
        assert_eq!(set.first(3)[1].file_name, "b.jpg");
    }

    #[test]
    fn test_first_caps_at_available() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one.jpg"), b"1").unwrap();

        let set = ImageSet::load(dir.path()).unwrap();
        assert_eq!(set.first(3).len(), 1);
        assert_eq!(set.first(0).len(), 0);
    }

    #[test]
    fn test_load_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let set = ImageSet::load(dir.path()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("JPG"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("png"), Some("image/png"));
        assert_eq!(mime_for_extension("txt"), None);
    }
}
