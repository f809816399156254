//! Request part types.

use crate::{ImageMime, ReferenceImage};
use serde::{Deserialize, Serialize};

/// One unit of multimodal request content.
///
/// Parts are submitted in a fixed order; that order is the context order the
/// model conditions on.
///
/// # Examples
///
/// ```
/// use scenecraft_core::RequestPart;
///
/// let part = RequestPart::Text("ACTION TIMELINE:\n- 0–2 sec: Knight walks".to_string());
/// assert!(part.as_text().unwrap().starts_with("ACTION TIMELINE"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum RequestPart {
    /// Inline image content.
    Image {
        /// Base64-encoded bytes
        data: String,
        /// Image format
        mime_type: ImageMime,
    },

    /// Plain text content.
    Text(String),
}

impl RequestPart {
    /// Text content, if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RequestPart::Text(text) => Some(text),
            RequestPart::Image { .. } => None,
        }
    }

    /// Whether this part carries an image.
    pub fn is_image(&self) -> bool {
        matches!(self, RequestPart::Image { .. })
    }
}

impl From<&ReferenceImage> for RequestPart {
    fn from(image: &ReferenceImage) -> Self {
        RequestPart::Image {
            data: image.data.clone(),
            mime_type: image.mime_type,
        }
    }
}
