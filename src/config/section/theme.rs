//! `theme` section.
//!
//! Colors are optional: an absent color is left untouched on the page rather
//! than cleared.

use serde::{Deserialize, Serialize};

use super::Extra;
use crate::config::ConfigDiagnostics;
use crate::config::types::config_fields;
use crate::config::util::is_css_color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Bound to `--primary-500`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Bound to `--primary-700`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color_dark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

config_fields!(ThemeConfig => ThemeConfigFields, "theme" {
    primary_color => "primaryColor",
    primary_color_dark => "primaryColorDark",
    accent_color => "accentColor",
    background_color => "backgroundColor",
    text_color => "textColor",
});

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: Some("#3b82f6".into()),
            primary_color_dark: Some("#2563eb".into()),
            accent_color: Some("#60a5fa".into()),
            background_color: Some("#ffffff".into()),
            text_color: Some("#111827".into()),
            extra: Extra::new(),
        }
    }
}

impl ThemeConfig {
    /// Colors paired with their field paths, absent ones included.
    fn colors(&self) -> [(crate::config::FieldPath, Option<&str>); 5] {
        [
            (Self::FIELDS.primary_color, self.primary_color.as_deref()),
            (Self::FIELDS.primary_color_dark, self.primary_color_dark.as_deref()),
            (Self::FIELDS.accent_color, self.accent_color.as_deref()),
            (Self::FIELDS.background_color, self.background_color.as_deref()),
            (Self::FIELDS.text_color, self.text_color.as_deref()),
        ]
    }

    /// Validate that every configured color is a css color.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, color) in self.colors() {
            if let Some(color) = color
                && !is_css_color(color)
            {
                diag.error_with_hint(
                    field,
                    format!("'{color}' is not a css color"),
                    "use a hex value like \"#3b82f6\" or a function like \"rgb(59 130 246)\"",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_color_not_serialized() {
        let theme = ThemeConfig {
            primary_color: None,
            ..ThemeConfig::default()
        };
        let value = serde_json::to_value(&theme).unwrap();
        assert!(value.get("primaryColor").is_none());
        assert_eq!(value["primaryColorDark"], "#2563eb");
    }

    #[test]
    fn test_validate_rejects_bad_color() {
        let theme = ThemeConfig {
            accent_color: Some("blue-ish".into()),
            ..ThemeConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, "theme.accentColor");
    }

    #[test]
    fn test_validate_default_is_clean() {
        let mut diag = ConfigDiagnostics::new();
        ThemeConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
    }
}
