//! Release build variant and language compatibility
//!
//! The release variant asks the external build for code minification,
//! unused-resource shrinking, and two ProGuard rule files; debug builds
//! are left at tool defaults and are not modelled here.

use serde::{Deserialize, Serialize};

/// Name of the signing config the release variant references
pub const RELEASE_SIGNING_CONFIG: &str = "release";
/// ProGuard defaults file shipped with the Android toolchain
pub const PROGUARD_DEFAULT_FILE: &str = "proguard-android-optimize.txt";
/// Project-local ProGuard rules file
pub const PROGUARD_RULES_FILE: &str = "proguard-rules.pro";
/// Java language level for source and target compatibility
pub const JAVA_COMPATIBILITY: &str = "11";

/// Release build variant behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseVariant {
    /// Name of the signing config this variant signs with
    pub signing_config: String,
    /// Whether code minification is requested
    pub minify_enabled: bool,
    /// Whether unused-resource shrinking is requested
    pub shrink_resources: bool,
    /// ProGuard rule files, in application order
    pub proguard_files: Vec<String>,
}

impl Default for ReleaseVariant {
    fn default() -> Self {
        Self {
            signing_config: RELEASE_SIGNING_CONFIG.to_string(),
            minify_enabled: true,
            shrink_resources: true,
            proguard_files: vec![
                PROGUARD_DEFAULT_FILE.to_string(),
                PROGUARD_RULES_FILE.to_string(),
            ],
        }
    }
}

/// Language and runtime compatibility markers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Java source compatibility level
    pub source_compatibility: String,
    /// Java target compatibility level
    pub target_compatibility: String,
    /// Kotlin JVM bytecode target
    pub kotlin_jvm_target: String,
    /// Whether core-library desugaring is enabled
    pub core_library_desugaring: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            source_compatibility: JAVA_COMPATIBILITY.to_string(),
            target_compatibility: JAVA_COMPATIBILITY.to_string(),
            kotlin_jvm_target: JAVA_COMPATIBILITY.to_string(),
            core_library_desugaring: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_variant_shrinks_and_minifies() {
        let variant = ReleaseVariant::default();
        assert!(variant.minify_enabled);
        assert!(variant.shrink_resources);
        assert_eq!(variant.signing_config, "release");
    }

    #[test]
    fn test_proguard_files_ordered() {
        let variant = ReleaseVariant::default();
        assert_eq!(
            variant.proguard_files,
            vec!["proguard-android-optimize.txt", "proguard-rules.pro"]
        );
    }

    #[test]
    fn test_compile_options_java_11_with_desugaring() {
        let options = CompileOptions::default();
        assert_eq!(options.source_compatibility, "11");
        assert_eq!(options.target_compatibility, "11");
        assert_eq!(options.kotlin_jvm_target, "11");
        assert!(options.core_library_desugaring);
    }
}
