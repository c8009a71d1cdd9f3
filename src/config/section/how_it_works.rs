//! `howItWorks` section.

use serde::{Deserialize, Serialize};

use super::Extra;
use crate::config::ConfigDiagnostics;
use crate::config::types::config_fields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HowItWorksConfig {
    pub section_title: String,
    pub section_subtitle: String,
    pub badge: String,
    pub steps: Vec<Step>,
    #[serde(flatten)]
    pub extra: Extra,
}

config_fields!(HowItWorksConfig => HowItWorksConfigFields, "howItWorks" {
    section_title => "sectionTitle",
    section_subtitle => "sectionSubtitle",
    badge => "badge",
    steps => "steps",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    pub number: u32,
    pub label: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Step {
    fn new(number: u32, label: &str, title: &str, description: &str, tags: &[&str]) -> Self {
        Self {
            number,
            label: label.into(),
            title: title.into(),
            description: description.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            extra: Extra::new(),
        }
    }
}

impl Default for HowItWorksConfig {
    fn default() -> Self {
        Self {
            section_title: "How GetVidai Works".into(),
            section_subtitle: "Go from content to AI support agent in minutes, not weeks".into(),
            badge: "SIMPLE 3-STEP PROCESS".into(),
            steps: vec![
                Step::new(
                    1,
                    "STEP ONE",
                    "Add Your Content",
                    "Upload your PDFs, documentation, website links, or any knowledge base. \
                     GetVidai accepts any format.",
                    &["PDFs", "Docs", "Websites", "FAQs"],
                ),
                Step::new(
                    2,
                    "STEP TWO",
                    "AI Learns Instantly",
                    "Our advanced AI automatically indexes, embeds, and structures your content \
                     for accurate retrieval.",
                    &["Auto-Index", "Semantic Search", "No Training"],
                ),
                Step::new(
                    3,
                    "STEP THREE",
                    "Deploy Anywhere",
                    "Embed on your website, integrate with your apps, or use our dashboard. \
                     Start helping customers instantly.",
                    &["Widget", "API", "Dashboard"],
                ),
            ],
            extra: Extra::new(),
        }
    }
}

impl HowItWorksConfig {
    /// Steps are shown in order; numbering should count up from 1.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, step) in self.steps.iter().enumerate() {
            let expected = i as u32 + 1;
            if step.number != expected {
                diag.warn(
                    Self::FIELDS.steps,
                    format!(
                        "step '{}' is numbered {} but shown at position {}",
                        step.title, step.number, expected
                    ),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_step_numbering() {
        let mut config = HowItWorksConfig::default();
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.warnings().is_empty());

        config.steps.swap(0, 1);
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.warnings().len(), 2);
    }
}
