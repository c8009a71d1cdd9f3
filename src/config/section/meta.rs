//! `meta` section: document title and SEO tags.

use serde::{Deserialize, Serialize};

use super::Extra;
use crate::config::ConfigDiagnostics;
use crate::config::types::config_fields;

/// Longest description search engines show without truncating.
const DESCRIPTION_SOFT_LIMIT: usize = 160;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetaConfig {
    /// Written to the document title.
    pub title: String,
    /// Written to `<meta name="description">` when the page has one.
    pub description: String,
    pub keywords: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

config_fields!(MetaConfig => MetaConfigFields, "meta" {
    title => "title",
    description => "description",
    keywords => "keywords",
    og_image => "ogImage",
});

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            title: "GetVidai – AI Support Agent from Your Content".into(),
            description: "Transform your website, docs, and PDFs into an AI support agent. \
                          No coding required. 24/7 instant answers for your customers."
                .into(),
            keywords: "AI support, chatbot, customer service, automation".into(),
            og_image: Some("/assets/images/og-image.jpg".into()),
            extra: Extra::new(),
        }
    }
}

impl MetaConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "page title must not be empty");
        }

        let len = self.description.chars().count();
        if len > DESCRIPTION_SOFT_LIMIT {
            diag.warn(
                Self::FIELDS.description,
                format!("{len} characters, search results cut off after {DESCRIPTION_SOFT_LIMIT}"),
            );
        }
    }
}
