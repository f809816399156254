//! Reference image types.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use scenecraft_error::InputError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Image formats accepted as a visual reference.
///
/// # Examples
///
/// ```
/// use scenecraft_core::ImageMime;
///
/// assert_eq!(ImageMime::from_extension("JPG"), Some(ImageMime::Jpeg));
/// assert_eq!(ImageMime::Webp.to_string(), "image/webp");
/// assert_eq!(ImageMime::from_extension("gif"), None);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum ImageMime {
    /// JPEG image
    #[serde(rename = "image/jpeg")]
    #[display("image/jpeg")]
    Jpeg,
    /// PNG image
    #[serde(rename = "image/png")]
    #[display("image/png")]
    Png,
    /// WebP image
    #[serde(rename = "image/webp")]
    #[display("image/webp")]
    Webp,
}

impl ImageMime {
    /// MIME type string as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Png => "image/png",
            ImageMime::Webp => "image/webp",
        }
    }

    /// Look up a format by file extension (case-insensitive, no leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageMime::Jpeg),
            "png" => Some(ImageMime::Png),
            "webp" => Some(ImageMime::Webp),
            _ => None,
        }
    }
}

/// An optional visual reference for the main character and setting.
///
/// The payload is kept base64-encoded, exactly as it is sent to the model.
/// No size validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceImage {
    /// Base64-encoded image bytes
    pub data: String,
    /// Image format
    #[serde(alias = "mimeType")]
    pub mime_type: ImageMime,
}

impl ReferenceImage {
    /// Wrap already-encoded data.
    pub fn new(data: impl Into<String>, mime_type: ImageMime) -> Self {
        Self {
            data: data.into(),
            mime_type,
        }
    }

    /// Encode raw image bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenecraft_core::{ImageMime, ReferenceImage};
    ///
    /// let image = ReferenceImage::from_bytes(b"\x89PNG", ImageMime::Png);
    /// assert_eq!(image.data, "iVBORw==");
    /// ```
    pub fn from_bytes(bytes: &[u8], mime_type: ImageMime) -> Self {
        Self::new(STANDARD.encode(bytes), mime_type)
    }

    /// Encode raw image bytes, inferring the format from a file name.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] when the extension is missing or not one of
    /// `jpg`, `jpeg`, `png`, `webp`.
    pub fn from_named_bytes(file_name: impl AsRef<Path>, bytes: &[u8]) -> Result<Self, InputError> {
        let file_name = file_name.as_ref();
        let mime = file_name
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImageMime::from_extension)
            .ok_or_else(|| {
                InputError::new(format!(
                    "Unsupported image type for {}: expected JPEG, PNG or WebP.",
                    file_name.display()
                ))
            })?;
        Ok(Self::from_bytes(bytes, mime))
    }

    /// Read and encode an image file.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] when the file cannot be read or its
    /// extension is not a supported image type.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            InputError::new(format!("Failed to read image {}: {}", path.display(), e))
        })?;
        let image = Self::from_named_bytes(path, &bytes)?;
        debug!(mime = %image.mime_type, bytes = bytes.len(), "Loaded reference image");
        Ok(image)
    }
}
