//! `hero` section.
//!
//! `badge` and `title` are merged key by key, everything else is replaced.

use serde::{Deserialize, Serialize};

use super::Extra;
use crate::config::ConfigDiagnostics;
use crate::config::types::config_fields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroConfig {
    pub badge: HeroBadge,
    pub title: HeroTitle,
    pub description: String,
    pub ctas: Vec<CtaButton>,
    pub stats: Vec<Stat>,
    #[serde(flatten)]
    pub extra: Extra,
}

config_fields!(HeroConfig => HeroConfigFields, "hero" {
    badge => "badge",
    title => "title",
    description => "description",
    ctas => "ctas",
    stats => "stats",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroBadge {
    pub text: String,
    pub icon: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Headline split into the plain lead, the connecting word and the
/// highlighted phrase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroTitle {
    pub main: String,
    pub highlight: String,
    pub suffix: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl HeroTitle {
    pub fn new(
        main: impl Into<String>,
        highlight: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            main: main.into(),
            highlight: highlight.into(),
            suffix: suffix.into(),
            extra: Extra::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaButton {
    pub text: String,
    pub href: String,
    pub style: ButtonStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub value: String,
    pub label: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Stat {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            extra: Extra::new(),
        }
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            badge: HeroBadge {
                text: "Now in Beta - Limited Spots Available".into(),
                icon: "pulse-dot".into(),
                extra: Extra::new(),
            },
            title: HeroTitle::new(
                "Turn your website, docs, and PDFs",
                "AI support Agent",
                "into an",
            ),
            description: "No coding. No hallucinations. Just powerful AI that knows your \
                          business and helps customers instantly."
                .into(),
            ctas: vec![
                CtaButton {
                    text: "Get Early Access".into(),
                    href: "#early-access".into(),
                    style: ButtonStyle::Primary,
                    icon: Some("arrow-right".into()),
                    extra: Extra::new(),
                },
                CtaButton {
                    text: "See How It Works".into(),
                    href: "#how-it-works".into(),
                    style: ButtonStyle::Secondary,
                    icon: None,
                    extra: Extra::new(),
                },
            ],
            stats: vec![
                Stat::new("80%", "Support Load Reduced"),
                Stat::new("<2s", "Average Response Time"),
                Stat::new("24/7", "Always Available"),
            ],
            extra: Extra::new(),
        }
    }
}

impl HeroConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for cta in self.ctas.iter().filter(|c| c.href == "#") {
            diag.warn(
                Self::FIELDS.ctas,
                format!("'{}' links to a bare '#' and will not scroll", cta.text),
            );
        }
    }
}
