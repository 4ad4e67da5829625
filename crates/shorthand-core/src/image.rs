//! Image intake: validation, loading from disk and data-URI encoding.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use tracing::debug;

use shorthand_types::{ImageFile, Result, ShorthandError};

/// MIME types accepted for decoding and training.
pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Largest accepted upload (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Result of [`validate_image_for_shorthand`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImageValidation {
    fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn rejected(msg: &str) -> Self {
        Self {
            valid: false,
            error: Some(msg.to_owned()),
        }
    }

    /// Convert into a `Result`, mapping rejection to a validation error.
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(msg) if !self.valid => Err(ShorthandError::Validation(msg)),
            _ => Ok(()),
        }
    }
}

/// Check that `file` is a JPEG or PNG no larger than [`MAX_IMAGE_BYTES`].
pub fn validate_image_for_shorthand(file: &ImageFile) -> ImageValidation {
    if !ACCEPTED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return ImageValidation::rejected("Please upload a JPEG or PNG image");
    }
    if file.size() > MAX_IMAGE_BYTES {
        return ImageValidation::rejected("Image size must be less than 5MB");
    }
    ImageValidation::ok()
}

/// Guess a MIME type from the file extension.
pub fn mime_from_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Read an image from disk. The MIME type comes from the extension.
pub fn load_image(path: &Path) -> Result<ImageFile> {
    let bytes = std::fs::read(path).map_err(|e| {
        ShorthandError::validation(format!("failed to read image {}: {e}", path.display()))
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    debug!(path = %path.display(), size = bytes.len(), "loaded image");
    Ok(ImageFile::new(name, mime_from_path(path), bytes))
}

/// Render `file` as a `data:<mime>;base64,<payload>` URI.
pub fn to_data_uri(file: &ImageFile) -> String {
    format!("data:{};base64,{}", file.mime_type, STANDARD.encode(&file.bytes))
}

/// Hook for contrast enhancement, denoising and normalisation before the
/// image is sent for decoding. Currently a pass-through.
pub fn preprocess_image_for_ai(data_uri: String) -> String {
    data_uri
}
