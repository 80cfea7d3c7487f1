//! Application metadata
//!
//! Fixed constants describing the app to the packaging step. Pure data,
//! independent of the environment the tool runs in.

use crate::toolchain::ToolchainVersions;
use serde::{Deserialize, Serialize};

/// Kotlin package namespace of the app
pub const NAMESPACE: &str = "com.cjw.nonsmoking";
/// Published application id
pub const APPLICATION_ID: &str = "com.cjw.nonsmoking";
/// Lowest supported Android API level
pub const MIN_SDK: u32 = 24;
/// API level the app targets
pub const TARGET_SDK: u32 = 35;
/// Monotonic store version code
pub const VERSION_CODE: u32 = 1;
/// Human-readable semantic version
pub const VERSION_NAME: &str = "1.0.0";

/// Static application metadata handed to the packaging step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDescriptor {
    /// Kotlin package namespace
    pub namespace: String,
    /// Published application id
    pub application_id: String,
    /// Lowest supported API level
    pub min_sdk: u32,
    /// Targeted API level
    pub target_sdk: u32,
    /// API level compiled against, owned by the toolchain
    pub compile_sdk: u32,
    /// Store version code
    pub version_code: u32,
    /// Semantic version string
    pub version_name: String,
}

impl ApplicationDescriptor {
    /// The NonSmoking app descriptor.
    ///
    /// The compile SDK comes from the toolchain descriptor rather than
    /// being pinned here, mirroring how the Flutter toolchain owns it.
    pub fn nonsmoking(toolchain: &ToolchainVersions) -> Self {
        Self {
            namespace: NAMESPACE.to_string(),
            application_id: APPLICATION_ID.to_string(),
            min_sdk: MIN_SDK,
            target_sdk: TARGET_SDK,
            compile_sdk: toolchain.compile_sdk,
            version_code: VERSION_CODE,
            version_name: VERSION_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_constants() {
        let descriptor = ApplicationDescriptor::nonsmoking(&ToolchainVersions::default());

        assert_eq!(descriptor.application_id, "com.cjw.nonsmoking");
        assert_eq!(descriptor.namespace, "com.cjw.nonsmoking");
        assert_eq!(descriptor.min_sdk, 24);
        assert_eq!(descriptor.target_sdk, 35);
        assert_eq!(descriptor.version_code, 1);
        assert_eq!(descriptor.version_name, "1.0.0");
    }

    #[test]
    fn test_compile_sdk_follows_toolchain() {
        let toolchain = ToolchainVersions {
            compile_sdk: 36,
            ..ToolchainVersions::default()
        };
        let descriptor = ApplicationDescriptor::nonsmoking(&toolchain);
        assert_eq!(descriptor.compile_sdk, 36);
    }

    #[test]
    fn test_min_sdk_not_above_target() {
        let descriptor = ApplicationDescriptor::nonsmoking(&ToolchainVersions::default());
        assert!(descriptor.min_sdk <= descriptor.target_sdk);
    }
}
