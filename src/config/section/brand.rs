//! `brand` section.

use serde::{Deserialize, Serialize};

use super::Extra;
use crate::config::types::config_fields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrandConfig {
    /// Product name shown in the header and footer.
    pub name: String,
    pub tagline: String,
    pub logo_type: LogoType,
    #[serde(flatten)]
    pub extra: Extra,
}

config_fields!(BrandConfig => BrandConfigFields, "brand" {
    name => "name",
    tagline => "tagline",
    logo_type => "logoType",
});

/// How the header logo is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoType {
    #[default]
    ChatBubble,
    Text,
    Image,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "GetVidai".into(),
            tagline: "AI Support Agent from Your Content".into(),
            logo_type: LogoType::ChatBubble,
            extra: Extra::new(),
        }
    }
}
