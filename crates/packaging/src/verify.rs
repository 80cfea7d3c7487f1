//! Release readiness verification
//!
//! The loader itself tolerates absent or partial signing data; an
//! unsigned release only fails once the external build reaches the
//! signing step. This pass surfaces those gaps up front. It produces a
//! report rather than an error: an incomplete configuration is a finding
//! for the caller to act on, not a failure of the check itself.

use crate::evaluate::BuildConfiguration;
use serde::{Deserialize, Serialize};

/// Severity of a verification finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Release packaging will fail
    Error,
    /// Suspicious but not fatal
    Warning,
}

/// One verification finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Finding severity
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
}

/// Result of verifying a configuration for release
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReport {
    /// All findings, errors first
    pub findings: Vec<Finding>,
}

impl VerifyReport {
    /// Whether a release build can be expected to sign successfully
    pub fn is_ready(&self) -> bool {
        !self
            .findings
            .iter()
            .any(|f| f.severity == Severity::Error)
    }

    fn error(&mut self, message: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Error,
            message: message.into(),
        });
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Warning,
            message: message.into(),
        });
    }
}

/// Verify that `config` can carry a release build through signing.
///
/// Checks the signing profile for missing keys and the keystore path
/// for existence. Empty passwords are flagged as warnings; some teams
/// do protect keystores with empty passwords, so they are not fatal.
pub fn verify_release(config: &BuildConfiguration) -> VerifyReport {
    let mut report = VerifyReport::default();

    for key in config.signing.missing_keys() {
        report.error(format!("key.properties is missing `{key}`"));
    }

    if let Some(store_file) = &config.signing.store_file {
        if !store_file.exists() {
            report.error(format!(
                "keystore file does not exist: {}",
                store_file.display()
            ));
        }
    }

    if config.signing.key_password.as_deref() == Some("") {
        report.warning("keyPassword is empty");
    }
    if config.signing.store_password.as_deref() == Some("") {
        report.warning("storePassword is empty");
    }

    report
}
