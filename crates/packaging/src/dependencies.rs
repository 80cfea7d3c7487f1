//! Declared external dependencies
//!
//! A fixed, ordered list of library coordinates handed to the external
//! dependency resolver. Nothing is resolved, fetched, or deduplicated
//! here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gradle configuration a dependency is declared under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyScope {
    /// Runtime/compile classpath dependency
    Implementation,
    /// Library backing core-library desugaring
    CoreLibraryDesugaring,
}

impl fmt::Display for DependencyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Implementation => write!(f, "implementation"),
            Self::CoreLibraryDesugaring => write!(f, "coreLibraryDesugaring"),
        }
    }
}

/// One external library coordinate with a pinned version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDeclaration {
    /// Declaration scope
    pub scope: DependencyScope,
    /// Maven group id
    pub group: String,
    /// Maven artifact name
    pub name: String,
    /// Exact pinned version
    pub version: String,
}

impl DependencyDeclaration {
    fn new(scope: DependencyScope, group: &str, name: &str, version: &str) -> Self {
        Self {
            scope,
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    /// Full `group:name:version` coordinate string
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group, self.name, self.version)
    }
}

/// The app's declared dependencies, in declaration order
pub fn declared_dependencies() -> Vec<DependencyDeclaration> {
    vec![
        DependencyDeclaration::new(
            DependencyScope::CoreLibraryDesugaring,
            "com.android.tools",
            "desugar_jdk_libs",
            "2.1.4",
        ),
        DependencyDeclaration::new(
            DependencyScope::Implementation,
            "com.google.android.gms",
            "play-services-ads",
            "22.6.0",
        ),
    ]
}
