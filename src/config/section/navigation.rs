//! `navigation` section.

use serde::{Deserialize, Serialize};

use super::{Extra, Link};
use crate::config::ConfigDiagnostics;
use crate::config::types::config_fields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationConfig {
    /// Replaced wholesale by an override, never merged item by item.
    pub links: Vec<Link>,
    pub cta_text: String,
    pub cta_href: String,
    #[serde(flatten)]
    pub extra: Extra,
}

config_fields!(NavigationConfig => NavigationConfigFields, "navigation" {
    links => "links",
    cta_text => "ctaText",
    cta_href => "ctaHref",
});

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            links: vec![
                Link::new("How It Works", "#how-it-works"),
                Link::new("Features", "#features"),
                Link::new("Pricing", "#pricing"),
            ],
            cta_text: "Get Started".into(),
            cta_href: "#early-access".into(),
            extra: Extra::new(),
        }
    }
}

impl NavigationConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for link in self.links.iter().filter(|l| l.is_bare_fragment()) {
            diag.warn(
                Self::FIELDS.links,
                format!("'{}' links to a bare '#' and will not scroll", link.text),
            );
        }
        if self.cta_href == "#" {
            diag.warn(Self::FIELDS.cta_href, "links to a bare '#' and will not scroll");
        }
    }
}
