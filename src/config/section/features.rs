//! `features` section.

use serde::{Deserialize, Serialize};

use super::Extra;
use crate::config::types::config_fields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturesConfig {
    pub section_title: String,
    pub section_subtitle: String,
    pub badge: String,
    pub items: Vec<FeatureItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

config_fields!(FeaturesConfig => FeaturesConfigFields, "features" {
    section_title => "sectionTitle",
    section_subtitle => "sectionSubtitle",
    badge => "badge",
    items => "items",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl FeatureItem {
    fn new(title: &str, description: &str, icon: &str) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            extra: Extra::new(),
        }
    }
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            section_title: "Customer Support Is Broken".into(),
            section_subtitle: "Teams waste hours answering the same questions while customers \
                               wait for help"
                .into(),
            badge: "THE PROBLEM".into(),
            items: vec![
                FeatureItem::new(
                    "Repeated Questions",
                    "Your team answers the same FAQs dozens of times per day, burning valuable \
                     hours that could be spent building.",
                    "refresh",
                ),
                FeatureItem::new(
                    "Scattered Knowledge",
                    "Answers exist in docs, blogs & PDFs — but customers can't find them, \
                     leading to frustration and churn.",
                    "question",
                ),
                FeatureItem::new(
                    "Unreliable AI Bots",
                    "Generic chatbots hallucinate wrong answers, damaging trust and creating \
                     more support tickets.",
                    "alert",
                ),
            ],
            extra: Extra::new(),
        }
    }
}
