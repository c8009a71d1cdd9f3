//! `forms` section.
//!
//! Only data lives here. What happens on submit is decided by the
//! [`SubmissionHandler`](crate::interact::SubmissionHandler) attached to the
//! landing page, not by a config field.

use serde::{Deserialize, Serialize};

use super::Extra;
use crate::config::ConfigDiagnostics;
use crate::config::types::config_fields;
use crate::config::util::is_endpoint;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormsConfig {
    /// Where early access signups are meant to go. Not called by this crate.
    pub early_access_endpoint: String,
    #[serde(flatten)]
    pub extra: Extra,
}

config_fields!(FormsConfig => FormsConfigFields, "forms" {
    early_access_endpoint => "earlyAccessEndpoint",
});

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            early_access_endpoint: "/api/early-access".into(),
            extra: Extra::new(),
        }
    }
}

impl FormsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !is_endpoint(&self.early_access_endpoint) {
            diag.error_with_hint(
                Self::FIELDS.early_access_endpoint,
                format!("'{}' is not an endpoint", self.early_access_endpoint),
                "use an absolute path (\"/api/early-access\") or a full url",
            );
        }
    }
}
