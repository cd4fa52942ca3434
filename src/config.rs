//! Rendering parameters.
//!
//! The main entry point is [`Parameters`], which you pass to
//! [`UiBuilder::parameters`](crate::UiBuilder::parameters) to control how
//! markup is generated.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a link target is told apart from a symbolic route name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UrlClassification {
    /// A target starting with `/` or containing `://` is a URL.
    #[default]
    Standard,
    /// A target starting with `/` or `http` is a URL.
    Legacy,
}

impl UrlClassification {
    /// Whether `target` is a literal URL rather than a route name.
    pub fn is_url(&self, target: &str) -> bool {
        if target.starts_with('/') {
            return true;
        }
        match self {
            UrlClassification::Standard => target.contains("://"),
            UrlClassification::Legacy => target.starts_with("http"),
        }
    }
}

/// Parameters for markup generation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Parameters {
    /// How link targets are classified as URL or route.
    pub url_classification: UrlClassification,
    /// Escape `&`, `<`, `>` and `"` in attribute values.
    ///
    /// Off by default: attribute values are emitted exactly as given, which
    /// makes them a trust boundary for the caller.
    pub escape_attributes: bool,
    /// Element used for buttons when the options don't name one.
    pub default_tag: String,
    /// Label of an info box when none is given.
    pub info_label: String,
    /// Label of an error box when none is given.
    pub error_label: String,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            url_classification: UrlClassification::default(),
            escape_attributes: false,
            default_tag: "button".to_string(),
            info_label: "Info:".to_string(),
            error_label: "Error:".to_string(),
        }
    }
}
