//! Merged page configuration with path access.
//!
//! A [`LandingPage`] is built once from a base configuration plus a partial
//! override, merged with [`PAGE_MERGE`]. After that it is read through
//! dotted paths or typed fields, and changed only through [`LandingPage::set`].
//!
//! The merged value tree is what paths read and write. The typed
//! [`PageConfig`] is checked against it and kept in step, so `get` never
//! reports a default the merge did not produce.
//!
//! ```text
//! base (typed) ──to_value──┐
//!                          ├─ merge_value(PAGE_MERGE) ─> tree ─ from_value ─> PageConfig
//! override (untyped) ──────┘
//! ```

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::config::{ConfigError, FieldPath, PageConfig};
use crate::interact::{NoticeHandler, SubmissionHandler};
use crate::merge::{PAGE_MERGE, get_path, merge_value, set_path};

/// The page configuration in use, plus the form submission handler.
#[derive(Clone)]
pub struct LandingPage {
    tree: Value,
    config: PageConfig,
    handler: Option<Rc<dyn SubmissionHandler>>,
}

impl LandingPage {
    /// Merge `overrides` onto the default configuration.
    pub fn new(overrides: Value) -> Result<Self, ConfigError> {
        Self::from_base(&PageConfig::default(), overrides)
    }

    /// Merge `overrides` onto `base`.
    pub fn from_base(base: &PageConfig, overrides: Value) -> Result<Self, ConfigError> {
        let mut tree = base.to_value();
        merge_value(&mut tree, overrides, &PAGE_MERGE);
        let config = PageConfig::from_value(tree.clone())?;
        Ok(Self::with_tree(tree, config))
    }

    /// Use `config` as is.
    pub fn from_config(config: PageConfig) -> Self {
        Self::with_tree(config.to_value(), config)
    }

    fn with_tree(tree: Value, config: PageConfig) -> Self {
        Self {
            tree,
            config,
            handler: Some(Rc::new(NoticeHandler)),
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn into_config(self) -> PageConfig {
        self.config
    }

    /// The merged value tree, including keys no section declares.
    pub fn tree(&self) -> &Value {
        &self.tree
    }

    // ========================================================================
    // path access
    // ========================================================================

    /// Value at a dotted path such as `hero.title.main` or `hero.stats.0.value`.
    ///
    /// Any missing segment yields `None`, including optional fields the
    /// merged configuration never set.
    pub fn get(&self, path: &str) -> Option<Value> {
        get_path(&self.tree, path).cloned()
    }

    /// Value of a known field.
    pub fn get_field(&self, field: FieldPath) -> Option<Value> {
        self.get(field.as_str())
    }

    /// Set the value at a dotted path, creating missing maps on the way.
    ///
    /// The result must still fit the typed configuration: a value of the
    /// wrong type is rejected and the configuration is left unchanged.
    pub fn set(&mut self, path: &str, value: Value) -> Result<(), ConfigError> {
        let mut tree = self.tree.clone();
        set_path(&mut tree, path, value)?;
        let config =
            serde_json::from_value(tree.clone()).map_err(|source| ConfigError::InvalidValue {
                path: path.to_string(),
                source,
            })?;
        self.tree = tree;
        self.config = config;
        Ok(())
    }

    /// Apply `path=json` assignments, as given on the command line.
    ///
    /// A value that is not valid JSON is taken as a plain string.
    pub fn set_all<'a>(
        &mut self,
        assignments: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), ConfigError> {
        for assignment in assignments {
            let (path, raw) = assignment.split_once('=').ok_or_else(|| {
                ConfigError::Validation(format!("expected `path=value`, got `{assignment}`"))
            })?;
            let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.into()));
            self.set(path.trim(), value)?;
        }
        Ok(())
    }

    // ========================================================================
    // submission handler
    // ========================================================================

    /// Replace the handler called with submitted form data.
    pub fn with_handler(mut self, handler: impl SubmissionHandler + 'static) -> Self {
        self.handler = Some(Rc::new(handler));
        self
    }

    /// Forms are still intercepted, but nothing is called.
    pub fn without_handler(mut self) -> Self {
        self.handler = None;
        self
    }

    pub fn submission_handler(&self) -> Option<Rc<dyn SubmissionHandler>> {
        self.handler.clone()
    }
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::from_config(PageConfig::default())
    }
}

impl fmt::Debug for LandingPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LandingPage")
            .field("config", &self.config)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CtaForm, HeroTitle, ThemeConfig};
    use crate::merge::PathError;
    use serde_json::json;

    #[test]
    fn test_theme_override_keeps_other_colors() {
        let landing = LandingPage::new(json!({ "theme": { "primaryColor": "#16a34a" } })).unwrap();
        let theme = &landing.config().theme;
        assert_eq!(theme.primary_color.as_deref(), Some("#16a34a"));
        assert_eq!(
            theme.primary_color_dark,
            PageConfig::default().theme.primary_color_dark
        );
    }

    #[test]
    fn test_hero_title_second_level_merge() {
        let landing = LandingPage::new(json!({ "hero": { "title": { "main": "X" } } })).unwrap();
        let default = PageConfig::default();
        assert_eq!(landing.config().hero.title.main, "X");
        assert_eq!(landing.config().hero.title.highlight, default.hero.title.highlight);
        assert_eq!(landing.config().hero.description, default.hero.description);
    }

    #[test]
    fn test_links_replaced_wholesale() {
        let landing = LandingPage::new(json!({ "navigation": { "links": [] } })).unwrap();
        assert!(landing.config().navigation.links.is_empty());
        assert_eq!(
            landing.config().navigation.cta_text,
            PageConfig::default().navigation.cta_text
        );
    }

    #[test]
    fn test_cta_form_scenario() {
        let landing =
            LandingPage::new(json!({ "cta": { "form": { "disclaimer": "New text" } } })).unwrap();
        let form: &CtaForm = &landing.config().cta.form;
        assert_eq!(form.button_text, "Join Waitlist");
        assert_eq!(form.disclaimer, "New text");
    }

    #[test]
    fn test_unknown_sections_pass_through() {
        let landing = LandingPage::new(json!({ "pricing": { "plans": 3 } })).unwrap();
        assert_eq!(landing.get("pricing.plans"), Some(json!(3)));
        assert_eq!(landing.tree()["pricing"]["plans"], 3);
    }

    #[test]
    fn test_wrong_override_shape() {
        let err = LandingPage::new(json!({ "hero": { "stats": "many" } })).unwrap_err();
        assert!(matches!(err, ConfigError::Override(_)));
    }

    #[test]
    fn test_get_missing_is_none() {
        let landing = LandingPage::default();
        assert_eq!(landing.get("hero.nothing.here"), None);
        assert_eq!(landing.get("brand.name.deeper"), None);
        assert_eq!(landing.get("hero.stats.9"), None);
        assert_eq!(landing.get(""), None);
        assert_eq!(landing.get("brand..name"), None);
    }

    #[test]
    fn test_get_skips_fields_the_merge_did_not_set() {
        let landing = LandingPage::new(json!({ "hero": { "ctas": [{ "text": "Go" }] } })).unwrap();
        assert_eq!(landing.get("hero.ctas.0.text"), Some(json!("Go")));
        assert_eq!(landing.get("hero.ctas.0.href"), None);
        assert_eq!(landing.get("hero.ctas.0.style"), None);
        assert_eq!(landing.config().hero.ctas[0].text, "Go");
    }

    #[test]
    fn test_get_after_replacing_a_map() {
        let mut landing = LandingPage::default();
        landing.set("hero.title", json!({ "main": "X" })).unwrap();
        assert_eq!(landing.get("hero.title.main"), Some(json!("X")));
        assert_eq!(landing.get("hero.title.highlight"), None);
    }

    #[test]
    fn test_get_null_color() {
        let mut landing = LandingPage::default();
        landing.set("theme.primaryColor", Value::Null).unwrap();
        assert_eq!(landing.get("theme.primaryColor"), Some(Value::Null));
        assert!(landing.config().theme.primary_color.is_none());
    }

    #[test]
    fn test_get_field() {
        let landing = LandingPage::default();
        assert_eq!(
            landing.get_field(ThemeConfig::FIELDS.primary_color),
            Some(json!("#3b82f6"))
        );
        assert_eq!(landing.get("hero.stats.2.value"), Some(json!("24/7")));
    }

    #[test]
    fn test_set_creates_intermediate_nodes() {
        let mut landing = LandingPage::default();
        landing.set("a.b.c", json!(42)).unwrap();
        assert_eq!(landing.get("a.b.c"), Some(json!(42)));

        landing.set("theme.fontFamily", json!("Inter")).unwrap();
        assert_eq!(landing.get("theme.fontFamily"), Some(json!("Inter")));
        assert_eq!(landing.config().theme.extra["fontFamily"], "Inter");
    }

    #[test]
    fn test_set_typed_field() {
        let mut landing = LandingPage::default();
        landing.set("hero.title.main", json!("New")).unwrap();
        assert_eq!(
            landing.config().hero.title,
            HeroTitle {
                main: "New".into(),
                ..PageConfig::default().hero.title
            }
        );
    }

    #[test]
    fn test_set_wrong_type_leaves_config() {
        let mut landing = LandingPage::default();
        let err = landing.set("brand.name", json!(["not", "a", "string"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref path, .. } if path == "brand.name"));
        assert_eq!(landing.config(), &PageConfig::default());
        assert_eq!(landing.get("brand.name"), Some(json!("GetVidai")));
    }

    #[test]
    fn test_set_bad_path() {
        let mut landing = LandingPage::default();
        let err = landing.set("brand..name", json!("x")).unwrap_err();
        assert!(matches!(err, ConfigError::Path(PathError::EmptySegment(_))));
        let err = landing.set("brand.name.first", json!("x")).unwrap_err();
        assert!(matches!(err, ConfigError::Path(PathError::NotContainer { .. })));
    }

    #[test]
    fn test_set_all() {
        let mut landing = LandingPage::default();
        landing
            .set_all(["meta.title=Pro page", "hero.stats.0.value=\"99%\"", "x.count=3"])
            .unwrap();
        assert_eq!(landing.config().meta.title, "Pro page");
        assert_eq!(landing.config().hero.stats[0].value, "99%");
        assert_eq!(landing.get("x.count"), Some(json!(3)));
        assert!(landing.set_all(["no equals sign"]).is_err());
    }

    #[test]
    fn test_handler_default_and_removed() {
        let landing = LandingPage::default();
        assert!(landing.submission_handler().is_some());
        assert!(landing.without_handler().submission_handler().is_none());
    }
}
