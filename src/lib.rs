//! Lander - configuration layer for marketing landing pages.
//!
//! A typed page configuration with a declarative merge policy, dotted-path
//! access, and the page-side wiring that uses it.
//!
//! # Module Structure
//!
//! ```text
//! config/     PageConfig, sections, presets, validation
//! merge/      Merge policy table, path get/set over value trees
//! landing     LandingPage: merged config + submission handler
//! dom/        In-memory page: parse, select, events, window
//! binder      Theme variables, title and description on a page
//! interact/   Form, mobile menu and smooth scroll wiring
//! cli/        `lander` command
//! ```
//!
//! # Example
//!
//! ```ignore
//! let mut page = Page::parse(&html)?;
//! let landing = init_landing_page(&mut page, json!({ "theme": { "primaryColor": "#16a34a" } }))?;
//! setup_form_handlers(&mut page, &landing);
//! setup_mobile_menu(&mut page);
//! setup_smooth_scroll(&mut page);
//! ```

pub mod binder;
pub mod cli;
pub mod config;
pub mod dom;
pub mod interact;
pub mod landing;
pub mod logger;
pub mod merge;

pub use binder::init_landing_page;
pub use config::{PageConfig, Preset};
pub use dom::Page;
pub use interact::{
    FormData, NoticeHandler, SubmissionHandler, SubmitError, setup_form_handlers,
    setup_mobile_menu, setup_smooth_scroll,
};
pub use landing::LandingPage;

/// The default page configuration.
pub fn default_config() -> PageConfig {
    PageConfig::default()
}

/// Enterprise product page.
pub fn product_page_config() -> Result<PageConfig, config::ConfigError> {
    Preset::Product.config()
}

/// Page focused on ticket reduction.
pub fn feature_page_config() -> Result<PageConfig, config::ConfigError> {
    Preset::Feature.config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const LANDING: &str = r##"<!DOCTYPE html>
<html lang="en">
<head><title>Loading</title><meta name="description" content=""></head>
<body>
<nav><a href="#how-it-works">How it works</a><button data-mobile-toggle>Menu</button>
<ul data-mobile-menu><li><a href="#cta">Join</a></li></ul></nav>
<section id="how-it-works"></section>
<section id="cta"><form data-landing-form><input name="email" value="a@b.co"></form></section>
</body>
</html>"##;

    #[test]
    fn test_full_page_wiring() {
        let mut page = Page::parse(LANDING).unwrap();
        let cta = page.element_by_id("cta").unwrap();
        page.set_offset_top(cta, 1200.0);

        let landing = init_landing_page(&mut page, json!({ "meta": { "title": "Join us" } })).unwrap();
        assert_eq!(setup_form_handlers(&mut page, &landing), 1);
        assert_eq!(setup_mobile_menu(&mut page), 1);
        assert_eq!(setup_smooth_scroll(&mut page), 2);
        assert_eq!(page.title(), "Join us");

        let join = page.query_selector(r##"a[href="#cta"]"##).unwrap().unwrap();
        page.click(join);
        assert_eq!(page.window().scroll_y(), 1120.0);

        let form = page.query_selector("[data-landing-form]").unwrap().unwrap();
        page.submit(form);
        assert_eq!(page.window().alerts().len(), 1);
    }

    #[test]
    fn test_export_surface_presets() {
        assert_eq!(default_config().brand.name, "GetVidai");
        assert_eq!(product_page_config().unwrap().brand.name, "GetVidai Pro");
        assert_eq!(feature_page_config().unwrap().hero.stats[0].label, "Ticket Reduction");
    }
}
