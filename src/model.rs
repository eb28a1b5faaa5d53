use std::ops::Range;
use std::path::Path;

/// The post being prepared, before anything is written to the stub.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    pub body: String,
    pub title: String,
    pub slug: Option<String>,
    pub publish: bool,
    pub header_image: Option<String>,
}

/// Where an image reference points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// `http://` or `https://` URL, downloaded into the asset tree.
    Remote,
    /// Absolute filesystem path, copied into the asset tree.
    AbsoluteLocal,
    /// Anything else; left as written.
    Relative,
}

impl ImageKind {
    pub fn classify(target: &str) -> Self {
        let lower = target.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ImageKind::Remote
        } else if target.starts_with('/') {
            ImageKind::AbsoluteLocal
        } else {
            ImageKind::Relative
        }
    }

    /// Whether localization moves the image into the asset tree.
    pub fn is_localized(self) -> bool {
        !matches!(self, ImageKind::Relative)
    }
}

/// A markdown image `![alt](target)` found in a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Byte range of the whole `![alt](target)` construct.
    pub span: Range<usize>,
    /// Byte range of `target` alone.
    pub target_span: Range<usize>,
    pub alt: String,
    pub target: String,
    pub kind: ImageKind,
}

impl ImageRef {
    /// File extension of the target including the dot, or empty.
    pub fn extension(&self) -> String {
        Path::new(&self.target)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }
}
