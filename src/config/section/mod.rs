//! Configuration section definitions.
//!
//! Each module corresponds to a top-level section of the page configuration:
//!
//! | Module         | Key            | Purpose                                |
//! |----------------|----------------|----------------------------------------|
//! | `brand`        | `brand`        | Product name, tagline, logo style      |
//! | `theme`        | `theme`        | Colors pushed into css variables       |
//! | `navigation`   | `navigation`   | Header links and call to action        |
//! | `hero`         | `hero`         | Badge, title, ctas, stats              |
//! | `features`     | `features`     | Problem/feature cards                  |
//! | `how_it_works` | `howItWorks`   | Numbered steps                         |
//! | `cta`          | `cta`          | Signup block and its form copy         |
//! | `footer`       | `footer`       | Link columns, social links, copyright  |
//! | `meta`         | `meta`         | Document title and description         |
//! | `forms`        | `forms`        | Form submission settings               |

mod brand;
mod cta;
mod features;
mod footer;
mod forms;
mod hero;
mod how_it_works;
mod meta;
mod navigation;
mod theme;

pub use brand::{BrandConfig, LogoType};
pub use cta::{CtaConfig, CtaForm, TrustBadge};
pub use features::{FeatureItem, FeaturesConfig};
pub use footer::{FooterConfig, FooterSection, SocialLink};
pub use forms::FormsConfig;
pub use hero::{ButtonStyle, CtaButton, HeroBadge, HeroConfig, HeroTitle, Stat};
pub use how_it_works::{HowItWorksConfig, Step};
pub use meta::MetaConfig;
pub use navigation::NavigationConfig;
pub use theme::ThemeConfig;

use serde::{Deserialize, Serialize};

/// Keys a section does not know about. Kept verbatim so they survive merges
/// and path access.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// A plain text + href link (navigation, footer columns).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub text: String,
    pub href: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Link {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            extra: Extra::new(),
        }
    }

    /// Whether the link points at a bare `#` (goes nowhere).
    pub fn is_bare_fragment(&self) -> bool {
        self.href == "#"
    }
}
