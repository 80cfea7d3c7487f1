//! Toolchain-owned versions
//!
//! The Flutter toolchain, not the app, decides which SDK the app
//! compiles against and which NDK builds the native pieces. These are
//! the versions the current toolchain pins.

use serde::{Deserialize, Serialize};

/// Compile SDK supplied by the current Flutter toolchain
pub const COMPILE_SDK: u32 = 35;
/// NDK revision the toolchain pins
pub const NDK_VERSION: &str = "27.0.12077973";

/// Versions sourced from the external toolchain descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainVersions {
    /// API level to compile against
    pub compile_sdk: u32,
    /// Full NDK revision string
    pub ndk_version: String,
}

impl Default for ToolchainVersions {
    fn default() -> Self {
        Self {
            compile_sdk: COMPILE_SDK,
            ndk_version: NDK_VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_versions() {
        let toolchain = ToolchainVersions::default();
        assert_eq!(toolchain.compile_sdk, 35);
        assert_eq!(toolchain.ndk_version, "27.0.12077973");
    }
}
