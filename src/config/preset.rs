//! Ready-made page configurations.
//!
//! Presets are overrides on top of [`PageConfig::default`], merged with the
//! page merge policy, so they only name what differs. Keys a preset leaves
//! out keep their default: the product page still has `brand.logoType`.

use clap::ValueEnum;
use serde_json::{Value, json};

use super::{ConfigError, PageConfig};
use crate::merge::{PAGE_MERGE, merge_value};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// The default landing page.
    #[default]
    Default,
    /// Enterprise product page.
    Product,
    /// Page focused on ticket reduction.
    Feature,
}

impl Preset {
    /// Partial configuration this preset applies to the default.
    pub fn overrides(self) -> Value {
        match self {
            Preset::Default => json!({}),
            Preset::Product => json!({
                "brand": {
                    "name": "GetVidai Pro",
                    "tagline": "Enterprise AI Support Solution"
                },
                "hero": {
                    "title": {
                        "main": "Scale customer support",
                        "highlight": "AI-powered automation",
                        "suffix": "with"
                    },
                    "description": "Enterprise-grade AI support that integrates with your \
                                    existing tools and scales with your business."
                }
            }),
            Preset::Feature => json!({
                "hero": {
                    "title": {
                        "main": "Eliminate repetitive support tickets",
                        "highlight": "intelligent automation",
                        "suffix": "with"
                    },
                    "stats": [
                        { "value": "90%", "label": "Ticket Reduction" },
                        { "value": "5min", "label": "Setup Time" },
                        { "value": "∞", "label": "Scalability" }
                    ]
                }
            }),
        }
    }

    /// The default configuration with this preset applied.
    pub fn config(self) -> Result<PageConfig, ConfigError> {
        let mut value = PageConfig::default().to_value();
        merge_value(&mut value, self.overrides(), &PAGE_MERGE);
        PageConfig::from_value(value)
    }
}
