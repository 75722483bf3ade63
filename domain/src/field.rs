use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Input kind for one form field. Select fields carry their closed option
/// list; the first option is the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    File,
    Number,
    Text,
    Select { options: Vec<String> },
}

/// Static description of one form input: name, user-facing label, kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    #[must_use]
    pub fn file(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::File,
        }
    }

    #[must_use]
    pub fn number(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Number,
        }
    }

    #[must_use]
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text,
        }
    }

    #[must_use]
    pub fn select(name: &str, label: &str, options: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Select {
                options: options.iter().map(ToString::to_string).collect(),
            },
        }
    }

    /// Select fields fall back to their default option; everything else must
    /// be supplied by the user before submission.
    #[must_use]
    pub fn is_required(&self) -> bool {
        !matches!(self.kind, FieldKind::Select { .. })
    }

    #[must_use]
    pub fn default_option(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Select { options } => options.first().map(String::as_str),
            _ => None,
        }
    }
}

/// A value captured from the form for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    File(PathBuf),
    Number(f64),
    Text(String),
    Choice(String),
}

impl FieldValue {
    /// Serialized form of the value as it appears in a multipart text part.
    #[must_use]
    pub fn as_part_value(&self) -> Option<String> {
        match self {
            Self::File(_) => None,
            Self::Number(n) => Some(format!("{n}")),
            Self::Text(s) | Self::Choice(s) => Some(s.clone()),
        }
    }

    #[must_use]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path.as_path()),
            _ => None,
        }
    }

    /// A value counts as empty when it would serialize to nothing the remote
    /// service could use.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::File(path) => path.as_os_str().is_empty(),
            Self::Number(_) => false,
            Self::Text(s) | Self::Choice(s) => s.trim().is_empty(),
        }
    }
}
