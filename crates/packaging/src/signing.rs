//! Release signing profile
//!
//! Maps the four well-known keys of `key.properties` into a structured
//! profile. Every field is optional: a missing file or a missing key
//! yields `None`, and the failure (if any) happens later, when the
//! external build actually tries to sign. This module performs no
//! validation of its own.

use nonsmoking_core::properties::PropertySet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Property key holding the key alias
pub const KEY_ALIAS: &str = "keyAlias";
/// Property key holding the key password
pub const KEY_PASSWORD: &str = "keyPassword";
/// Property key holding the keystore file path
pub const STORE_FILE: &str = "storeFile";
/// Property key holding the keystore password
pub const STORE_PASSWORD: &str = "storePassword";

/// Credentials for signing a release artifact, all optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningProfile {
    /// Alias of the signing key inside the keystore
    pub key_alias: Option<String>,
    /// Password for the signing key
    pub key_password: Option<String>,
    /// Path to the keystore file, tilde-expanded
    pub store_file: Option<PathBuf>,
    /// Password for the keystore itself
    pub store_password: Option<String>,
}

impl SigningProfile {
    /// Build a profile from a loaded property set.
    ///
    /// Values are taken verbatim; only `storeFile` gets tilde expansion
    /// so a home-relative keystore path works from any checkout.
    pub fn from_properties(props: &PropertySet) -> Self {
        Self {
            key_alias: props.get(KEY_ALIAS).map(str::to_string),
            key_password: props.get(KEY_PASSWORD).map(str::to_string),
            store_file: props
                .get(STORE_FILE)
                .map(|raw| PathBuf::from(shellexpand::tilde(raw).into_owned())),
            store_password: props.get(STORE_PASSWORD).map(str::to_string),
        }
    }

    /// Whether all four credentials are present
    pub fn is_complete(&self) -> bool {
        self.key_alias.is_some()
            && self.key_password.is_some()
            && self.store_file.is_some()
            && self.store_password.is_some()
    }

    /// Names of the properties keys that are missing from this profile
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.key_alias.is_none() {
            missing.push(KEY_ALIAS);
        }
        if self.key_password.is_none() {
            missing.push(KEY_PASSWORD);
        }
        if self.store_file.is_none() {
            missing.push(STORE_FILE);
        }
        if self.store_password.is_none() {
            missing.push(STORE_PASSWORD);
        }
        missing
    }
}
