use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP method used when submitting a form to the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of remote image-processing operations. The set is compiled
/// in, never fetched; names outside it are not an error (they simply carry no
/// endpoint-specific fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    Resize,
    Crop,
    Rotate,
    Grayscale,
    Brightness,
    Contrast,
    Flip,
    Filter,
    Convert,
    ListFonts,
    AddText,
}

impl Endpoint {
    /// Menu order, as presented to the user.
    pub const ALL: [Endpoint; 11] = [
        Self::Resize,
        Self::Crop,
        Self::Rotate,
        Self::Grayscale,
        Self::Brightness,
        Self::Contrast,
        Self::Flip,
        Self::Filter,
        Self::Convert,
        Self::ListFonts,
        Self::AddText,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Resize => "resize",
            Self::Crop => "crop",
            Self::Rotate => "rotate",
            Self::Grayscale => "grayscale",
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::Flip => "flip",
            Self::Filter => "filter",
            Self::Convert => "convert",
            Self::ListFonts => "list_fonts",
            Self::AddText => "add_text",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|e| e.name() == name).copied()
    }

    /// `list_fonts` is a read-only query; everything else uploads a payload.
    #[must_use]
    pub fn method(&self) -> HttpMethod {
        match self {
            Self::ListFonts => HttpMethod::Get,
            _ => HttpMethod::Post,
        }
    }

    /// Whether the form for this endpoint carries the common `image` file
    /// field.
    #[must_use]
    pub fn takes_image(&self) -> bool {
        !matches!(self, Self::ListFonts)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn all_preserves_menu_order() {
        let names: Vec<&str> = Endpoint::ALL.iter().map(Endpoint::name).collect();
        assert_eq!(
            names,
            vec![
                "resize",
                "crop",
                "rotate",
                "grayscale",
                "brightness",
                "contrast",
                "flip",
                "filter",
                "convert",
                "list_fonts",
                "add_text",
            ]
        );
    }

    #[test]
    fn from_name_round_trips_the_closed_set() {
        for endpoint in Endpoint::ALL {
            assert_eq!(Endpoint::from_name(endpoint.name()), Some(endpoint));
        }
        assert_eq!(Endpoint::from_name("sharpen_everything"), None);
        assert_eq!(Endpoint::from_name(""), None);
    }

    #[test]
    fn only_list_fonts_is_read_only() {
        for endpoint in Endpoint::ALL {
            let expected = if endpoint == Endpoint::ListFonts {
                HttpMethod::Get
            } else {
                HttpMethod::Post
            };
            assert_eq!(endpoint.method(), expected);
        }
        assert!(!Endpoint::ListFonts.takes_image());
        assert!(Endpoint::Grayscale.takes_image());
    }
}
