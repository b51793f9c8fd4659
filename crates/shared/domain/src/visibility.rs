use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Visibility of an optional input field on the card form.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldVisibility {
    Show,
    #[default]
    Hide,
}

impl From<&str> for FieldVisibility {
    /// Only the exact string `"show"` makes a field visible.
    fn from(raw: &str) -> Self {
        match raw {
            "show" => Self::Show,
            _ => Self::Hide,
        }
    }
}
