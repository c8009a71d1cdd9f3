//! `cta` section.
//!
//! `form` is merged key by key, everything else is replaced.

use serde::{Deserialize, Serialize};

use super::Extra;
use crate::config::types::config_fields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtaConfig {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub form: CtaForm,
    pub trust_badges: Vec<TrustBadge>,
    #[serde(flatten)]
    pub extra: Extra,
}

config_fields!(CtaConfig => CtaConfigFields, "cta" {
    badge => "badge",
    title => "title",
    subtitle => "subtitle",
    description => "description",
    form => "form",
    trust_badges => "trustBadges",
});

/// Copy for the signup form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtaForm {
    pub placeholder: String,
    pub button_text: String,
    pub disclaimer: String,
    #[serde(flatten)]
    pub extra: Extra,
}

config_fields!(CtaForm => CtaFormFields, "cta.form" {
    placeholder => "placeholder",
    button_text => "buttonText",
    disclaimer => "disclaimer",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustBadge {
    pub text: String,
    pub icon: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Default for CtaForm {
    fn default() -> Self {
        Self {
            placeholder: "Enter your email address".into(),
            button_text: "Join Waitlist".into(),
            disclaimer: "By signing up, you agree to receive updates about GetVidai. \
                         Unsubscribe anytime."
                .into(),
            extra: Extra::new(),
        }
    }
}

impl Default for CtaConfig {
    fn default() -> Self {
        let badge = |text: &str, icon: &str| TrustBadge {
            text: text.into(),
            icon: icon.into(),
            extra: Extra::new(),
        };
        Self {
            badge: "Limited Beta Access - Only 100 Spots Left".into(),
            title: "Get Early Access Today".into(),
            subtitle: "Join the waitlist and be among the first to launch your AI support agent."
                .into(),
            description: "No credit card required. Setup in 5 minutes.".into(),
            form: CtaForm::default(),
            trust_badges: vec![
                badge("SOC 2 Compliant", "shield"),
                badge("GDPR Compliant", "lock"),
                badge("Enterprise Ready", "badge"),
            ],
            extra: Extra::new(),
        }
    }
}
