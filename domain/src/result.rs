use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Raw outcome of one request against the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    /// Binary image payload; content type taken from the response.
    Image { bytes: Vec<u8>, content_type: String },
    /// Non-binary payload, only produced by the fonts listing.
    Listing { body: String },
}

/// One rendered submission result. Exactly one result is live at a time:
/// rendering a new image releases the display resource of the previous one,
/// while rendering an error leaves the previous image untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderedResult {
    Image { path: PathBuf },
    Listing { body: String },
    Error { message: String },
}

/// Metadata shown as the live preview after the user picks an image file.
/// Serializes for structured logs; never deserialized, the tag is a
/// compiled-in string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImagePreview {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormatName,
    pub byte_len: usize,
}

/// Short format tag for previews ("png", "jpg", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageFormatName(pub &'static str);

impl fmt::Display for ImageFormatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
