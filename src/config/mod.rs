//! Page configuration management.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One struct per top-level section
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── preset.rs      # Default / product / feature pages
//! ├── util.rs        # Color and endpoint checks, config file lookup
//! └── mod.rs         # PageConfig (this file)
//! ```
//!
//! # Override file
//!
//! `lander.toml` holds a partial page configuration using the same camelCase
//! keys as the serialized tree:
//!
//! ```toml
//! [theme]
//! primaryColor = "#16a34a"
//!
//! [hero.title]
//! main = "Ship support answers"
//! ```
//!
//! It is read as an untyped override and merged onto a preset, so only the
//! keys it names change.

pub mod preset;
pub mod section;
pub mod types;
pub mod util;

pub use preset::Preset;
pub use section::{
    BrandConfig, ButtonStyle, CtaButton, CtaConfig, CtaForm, Extra, FeatureItem, FeaturesConfig,
    FooterConfig, FooterSection, FormsConfig, HeroBadge, HeroConfig, HeroTitle, HowItWorksConfig,
    Link, LogoType, MetaConfig, NavigationConfig, SocialLink, Stat, Step, ThemeConfig, TrustBadge,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fs, path::Path};

/// Default override file name, searched upward from the working directory.
pub const CONFIG_FILE: &str = "lander.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root of the page configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub brand: BrandConfig,
    pub theme: ThemeConfig,
    pub navigation: NavigationConfig,
    pub hero: HeroConfig,
    pub features: FeaturesConfig,
    pub how_it_works: HowItWorksConfig,
    pub cta: CtaConfig,
    pub footer: FooterConfig,
    pub meta: MetaConfig,
    pub forms: FormsConfig,

    /// Top-level sections this crate does not model.
    #[serde(flatten)]
    pub extra: Extra,
}

impl PageConfig {
    /// Serialize into the untyped tree used by merging and path access.
    pub fn to_value(&self) -> Value {
        // Every field is a string, number, list or map: serialization cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Rebuild the typed tree from a (merged) value tree.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(ConfigError::Override)
    }

    /// Parse a complete configuration from TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Render as TOML (for `lander show --format toml`).
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the merged configuration.
    ///
    /// Collects all validation errors and returns them at once. Warnings are
    /// printed as a group and do not fail validation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.collect_diagnostics(&mut diag);

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Run every section check, pushing errors and warnings into `diag`.
    pub fn collect_diagnostics(&self, diag: &mut ConfigDiagnostics) {
        self.theme.validate(diag);
        self.navigation.validate(diag);
        self.hero.validate(diag);
        self.how_it_works.validate(diag);
        self.meta.validate(diag);
        self.forms.validate(diag);
        self.report_unknown_keys(diag);
    }

    /// Unknown keys are kept, but are usually typos.
    fn report_unknown_keys(&self, diag: &mut ConfigDiagnostics) {
        let sections: [(&str, &Extra); 11] = [
            ("", &self.extra),
            ("brand", &self.brand.extra),
            ("theme", &self.theme.extra),
            ("navigation", &self.navigation.extra),
            ("hero", &self.hero.extra),
            ("features", &self.features.extra),
            ("howItWorks", &self.how_it_works.extra),
            ("cta", &self.cta.extra),
            ("footer", &self.footer.extra),
            ("meta", &self.meta.extra),
            ("forms", &self.forms.extra),
        ];

        for (section, extra) in sections {
            for key in extra.keys() {
                let field = if section.is_empty() {
                    key.clone()
                } else {
                    format!("{section}.{key}")
                };
                diag.warn_at(field, "unknown key, kept as is");
            }
        }
    }
}

// ============================================================================
// override loading
// ============================================================================

/// Load an override tree from a TOML file.
pub fn load_override(path: &Path) -> Result<Value, ConfigError> {
    let content =
        fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
    parse_override(&content)
}

/// Parse an override tree from TOML content.
pub fn parse_override(content: &str) -> Result<Value, ConfigError> {
    let table: toml::Table = toml::from_str(content)?;
    serde_json::to_value(table).map_err(ConfigError::Override)
}

/// Find and load the override file, searching upward from cwd.
///
/// A missing file is an empty override.
pub fn discover_override(config_name: &Path) -> Result<Value, ConfigError> {
    match util::find_config_file(config_name) {
        Some(path) => {
            debug!("config"; "using {}", path.display());
            load_override(&path)
        }
        None => {
            debug!("config"; "no {} found, using empty override", config_name.display());
            Ok(Value::Object(Default::default()))
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_matches_landing_defaults() {
        let config = PageConfig::default();
        assert_eq!(config.brand.name, "GetVidai");
        assert_eq!(config.theme.primary_color.as_deref(), Some("#3b82f6"));
        assert_eq!(config.theme.primary_color_dark.as_deref(), Some("#2563eb"));
        assert_eq!(config.navigation.links.len(), 3);
        assert_eq!(config.hero.title.highlight, "AI support Agent");
        assert_eq!(config.how_it_works.steps[2].number, 3);
        assert_eq!(config.cta.form.button_text, "Join Waitlist");
        assert_eq!(config.footer.sections.len(), 3);
        assert_eq!(config.forms.early_access_endpoint, "/api/early-access");
    }

    #[test]
    fn test_value_uses_camel_case_keys() {
        let value = PageConfig::default().to_value();
        assert_eq!(value["howItWorks"]["sectionTitle"], "How GetVidai Works");
        assert_eq!(value["cta"]["form"]["buttonText"], "Join Waitlist");
        assert_eq!(value["brand"]["logoType"], "chat-bubble");
        assert_eq!(value["cta"]["trustBadges"][0]["icon"], "shield");
        assert!(value.get("extra").is_none());
    }

    #[test]
    fn test_value_round_trip_keeps_unknown_keys() {
        let mut value = PageConfig::default().to_value();
        value["pricing"] = json!({ "plans": ["free"] });
        value["theme"]["fontFamily"] = json!("Inter");

        let config = PageConfig::from_value(value).unwrap();
        assert_eq!(config.extra["pricing"], json!({ "plans": ["free"] }));
        assert_eq!(config.theme.extra["fontFamily"], "Inter");

        let back = config.to_value();
        assert_eq!(back["pricing"]["plans"][0], "free");
        assert_eq!(back["theme"]["fontFamily"], "Inter");
    }

    #[test]
    fn test_from_value_rejects_wrong_shape() {
        let mut value = PageConfig::default().to_value();
        value["navigation"]["links"] = json!("not a list");
        assert!(matches!(
            PageConfig::from_value(value),
            Err(ConfigError::Override(_))
        ));
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(PageConfig::from_toml("[theme\nprimaryColor = \"#fff\"").is_err());
    }

    #[test]
    fn test_parse_override() {
        let value = parse_override(
            r##"
[theme]
primaryColor = "#16a34a"

[hero.title]
main = "Ship support answers"

[[navigation.links]]
text = "Docs"
href = "#docs"
"##,
        )
        .unwrap();
        assert_eq!(value["theme"]["primaryColor"], "#16a34a");
        assert_eq!(value["hero"]["title"]["main"], "Ship support answers");
        assert_eq!(value["navigation"]["links"][0]["href"], "#docs");
    }

    #[test]
    fn test_load_override_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_override(&dir.path().join("lander.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_load_override_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lander.toml");
        fs::write(&path, "[meta]\ntitle = \"Pro\"\n").unwrap();
        let value = load_override(&path).unwrap();
        assert_eq!(value, json!({ "meta": { "title": "Pro" } }));
    }

    #[test]
    fn test_validate_default_passes() {
        let config = PageConfig::default();
        config.validate().unwrap();

        let mut diag = ConfigDiagnostics::new();
        config.collect_diagnostics(&mut diag);
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_validate_collects_errors_and_unknown_keys() {
        let mut config = PageConfig::default();
        config.theme.primary_color = Some("not a color".into());
        config.forms.early_access_endpoint = "relative".into();
        config.extra.insert("pricing".into(), json!({}));

        let err = config.validate().unwrap_err();
        let ConfigError::Diagnostics(found) = err else {
            panic!("expected diagnostics");
        };
        assert_eq!(found.len(), 2);
        assert!(found.warnings().iter().any(|w| w.field == "pricing"));
    }
}
