//! Push configuration values into a loaded page.
//!
//! | Config                   | Page                                      |
//! |--------------------------|-------------------------------------------|
//! | `theme.primaryColor`     | `--primary-500` on the root element       |
//! | `theme.primaryColorDark` | `--primary-700` on the root element       |
//! | `meta.title`             | document title                            |
//! | `meta.description`       | `content` of `meta[name="description"]`   |
//!
//! Missing config values and missing elements are skipped silently.

use serde_json::Value;

use crate::config::ConfigError;
use crate::debug;
use crate::dom::{AttrOp, Page, Selector};
use crate::landing::LandingPage;

pub const PRIMARY_VAR: &str = "--primary-500";
pub const PRIMARY_DARK_VAR: &str = "--primary-700";

impl LandingPage {
    /// Set the theme color variables on the root element.
    ///
    /// A color that is absent or empty leaves its variable untouched.
    pub fn apply_theme(&self, page: &mut Page) {
        let Some(root) = page.document_element() else {
            return;
        };
        let theme = &self.config().theme;
        let colors = [
            (PRIMARY_VAR, &theme.primary_color),
            (PRIMARY_DARK_VAR, &theme.primary_color_dark),
        ];
        for (var, color) in colors {
            let Some(color) = color.as_deref().filter(|c| !c.is_empty()) else {
                continue;
            };
            page.set_style_property(root, var, color);
        }
    }

    /// Set the title and, when the page has one, the description meta tag.
    pub fn update_meta_tags(&self, page: &mut Page) {
        let meta = &self.config().meta;
        page.set_title(&meta.title);

        let selector = Selector::tag("meta").with_attr_value("name", AttrOp::Equals, "description");
        match page.select_first(&selector) {
            Some(tag) => page.set_attr(tag, "content", &meta.description),
            None => debug!("apply"; "no description meta tag, skipped"),
        }
    }

    /// Apply theme and meta tags.
    pub fn bind(&self, page: &mut Page) {
        self.apply_theme(page);
        self.update_meta_tags(page);
    }
}

/// Merge `overrides` onto the default configuration and bind it to `page`.
pub fn init_landing_page(page: &mut Page, overrides: Value) -> Result<LandingPage, ConfigError> {
    let landing = LandingPage::new(overrides)?;
    landing.bind(page);
    Ok(landing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en" style="--primary-500: #000000; color: red">
<head>
<title>Placeholder</title>
<meta name="description" content="placeholder">
</head>
<body></body>
</html>"#;

    #[test]
    fn test_init_binds_defaults() {
        let mut page = Page::parse(PAGE).unwrap();
        let landing = init_landing_page(&mut page, json!({})).unwrap();

        let root = page.document_element().unwrap();
        assert_eq!(page.style_property(root, PRIMARY_VAR).as_deref(), Some("#3b82f6"));
        assert_eq!(page.style_property(root, PRIMARY_DARK_VAR).as_deref(), Some("#2563eb"));
        assert_eq!(page.style_property(root, "color").as_deref(), Some("red"));
        assert_eq!(page.title(), landing.config().meta.title);

        let meta = page.first_by_tag("meta").unwrap();
        assert_eq!(page.attr(meta, "content"), Some(landing.config().meta.description.as_str()));
    }

    #[test]
    fn test_overrides_reach_the_page() {
        let mut page = Page::parse(PAGE).unwrap();
        init_landing_page(
            &mut page,
            json!({
                "theme": { "primaryColor": "#16a34a" },
                "meta": { "title": "Pro & Co" }
            }),
        )
        .unwrap();

        let root = page.document_element().unwrap();
        assert_eq!(page.style_property(root, PRIMARY_VAR).as_deref(), Some("#16a34a"));
        assert_eq!(page.style_property(root, PRIMARY_DARK_VAR).as_deref(), Some("#2563eb"));
        assert_eq!(page.title(), "Pro & Co");
        assert!(page.to_html().contains("<title>Pro &amp; Co</title>"));
    }

    #[test]
    fn test_absent_color_leaves_variable() {
        let mut page = Page::parse(PAGE).unwrap();
        let mut landing = LandingPage::default();
        landing.set("theme.primaryColor", Value::Null).unwrap();
        assert!(landing.config().theme.primary_color.is_none());

        landing.apply_theme(&mut page);
        let root = page.document_element().unwrap();
        assert_eq!(page.style_property(root, PRIMARY_VAR).as_deref(), Some("#000000"));
        assert_eq!(page.style_property(root, PRIMARY_DARK_VAR).as_deref(), Some("#2563eb"));
    }

    #[test]
    fn test_empty_color_leaves_variable() {
        let mut page = Page::parse(PAGE).unwrap();
        init_landing_page(&mut page, json!({ "theme": { "primaryColor": "" } })).unwrap();

        let root = page.document_element().unwrap();
        assert_eq!(page.style_property(root, PRIMARY_VAR).as_deref(), Some("#000000"));
        assert_eq!(page.style_property(root, PRIMARY_DARK_VAR).as_deref(), Some("#2563eb"));
    }

    #[test]
    fn test_missing_description_is_not_created() {
        let mut page =
            Page::parse("<html><head><title>Old</title></head><body></body></html>").unwrap();
        let landing = init_landing_page(&mut page, json!({ "meta": { "title": "New" } })).unwrap();

        assert_eq!(page.title(), "New");
        assert!(page.first_by_tag("meta").is_none());
        assert_eq!(landing.config().meta.title, "New");
    }

    #[test]
    fn test_title_created_when_missing() {
        let mut page = Page::parse("<html><head></head><body></body></html>").unwrap();
        init_landing_page(&mut page, json!({})).unwrap();
        assert_eq!(page.title(), LandingPage::default().config().meta.title);
    }

    #[test]
    fn test_bad_override_binds_nothing() {
        let mut page = Page::parse(PAGE).unwrap();
        assert!(init_landing_page(&mut page, json!({ "meta": { "title": 3 } })).is_err());
        assert_eq!(page.title(), "Placeholder");
    }
}
