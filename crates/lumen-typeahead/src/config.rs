//! Field configuration.
//!
//! All numeric knobs of the suggestions field live in [`FieldConfig`], which
//! can be persisted as JSON so host applications can ship layout tuning in
//! their settings files.

use serde::{Deserialize, Serialize};

use crate::error::FieldResult;
use crate::filter::CaseSensitivity;
use crate::geometry::EdgeInsets;

/// Configuration for a [`SuggestionsField`](crate::field::SuggestionsField).
///
/// Values are accepted as-is: negative insets or spacing produce visually
/// wrong but well-defined layout (computed geometry is clamped at zero where
/// it matters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Insets applied to the field bounds before text is placed.
    pub text_insets: EdgeInsets,
    /// The minimum width required for suggestion text to be legible.
    pub min_suggestion_text_width: f32,
    /// The minimum width required for typed text to stay visible while the
    /// field scrolls the caret into view.
    pub min_editing_text_width: f32,
    /// The space between typed text and the suggestion label.
    pub suggestion_spacing: f32,
    /// Whether the content view attaches to the host window automatically
    /// when editing begins. When false, the host's callbacks own attachment.
    pub attach_content_view: bool,
    /// How candidate matching treats letter case.
    pub case_sensitivity: CaseSensitivity,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            text_insets: EdgeInsets::ZERO,
            min_suggestion_text_width: 24.0,
            min_editing_text_width: 10.0,
            suggestion_spacing: 0.0,
            attach_content_view: true,
            case_sensitivity: CaseSensitivity::CaseSensitive,
        }
    }
}

impl FieldConfig {
    /// Deserialize a configuration from JSON.
    pub fn from_json(json: &str) -> FieldResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this configuration to pretty-printed JSON.
    pub fn to_json(&self) -> FieldResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = FieldConfig::default();
        assert_eq!(config.min_suggestion_text_width, 24.0);
        assert_eq!(config.min_editing_text_width, 10.0);
        assert_eq!(config.suggestion_spacing, 0.0);
        assert!(config.attach_content_view);
        assert_eq!(config.case_sensitivity, CaseSensitivity::CaseSensitive);
    }

    #[test]
    fn test_json_round_trip() {
        let config = FieldConfig {
            text_insets: EdgeInsets::symmetric(8.0, 4.0),
            suggestion_spacing: 2.0,
            ..Default::default()
        };

        let json = config.to_json().unwrap();
        let back = FieldConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = FieldConfig::from_json(r#"{ "suggestion_spacing": 3.0 }"#).unwrap();
        assert_eq!(config.suggestion_spacing, 3.0);
        assert_eq!(config.min_suggestion_text_width, 24.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(FieldConfig::from_json("{ not json").is_err());
    }
}
