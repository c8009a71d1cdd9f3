//! `footer` section.

use serde::{Deserialize, Serialize};

use super::{Extra, Link};
use crate::config::types::config_fields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub description: String,
    pub sections: Vec<FooterSection>,
    pub social: Vec<SocialLink>,
    pub copyright: String,
    #[serde(flatten)]
    pub extra: Extra,
}

config_fields!(FooterConfig => FooterConfigFields, "footer" {
    description => "description",
    sections => "sections",
    social => "social",
    copyright => "copyright",
});

/// A titled column of links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<Link>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub platform: String,
    pub href: String,
    pub icon: String,
    #[serde(flatten)]
    pub extra: Extra,
}

fn column(title: &str, links: &[(&str, &str)]) -> FooterSection {
    FooterSection {
        title: title.into(),
        links: links.iter().map(|(t, h)| Link::new(*t, *h)).collect(),
        extra: Extra::new(),
    }
}

impl Default for FooterConfig {
    fn default() -> Self {
        let social = |platform: &str| SocialLink {
            platform: platform.into(),
            href: "#".into(),
            icon: platform.into(),
            extra: Extra::new(),
        };
        Self {
            description: "Transform your content into an intelligent AI support agent that \
                          delights customers 24/7."
                .into(),
            sections: vec![
                column(
                    "Product",
                    &[
                        ("Features", "#features"),
                        ("Pricing", "#pricing"),
                        ("Use Cases", "#use-cases"),
                        ("Documentation", "#docs"),
                    ],
                ),
                column(
                    "Company",
                    &[
                        ("About", "#about"),
                        ("Blog", "#blog"),
                        ("Careers", "#careers"),
                        ("Contact", "#contact"),
                    ],
                ),
                column(
                    "Legal",
                    &[
                        ("Privacy Policy", "#privacy"),
                        ("Terms of Service", "#terms"),
                        ("Security", "#security"),
                        ("GDPR", "#gdpr"),
                    ],
                ),
            ],
            social: vec![social("twitter"), social("github"), social("linkedin")],
            copyright: "© 2026 GetVidai. All rights reserved.".into(),
            extra: Extra::new(),
        }
    }
}
