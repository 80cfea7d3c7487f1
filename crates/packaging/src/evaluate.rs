//! Full configuration evaluation
//!
//! One linear pass: load the optional `key.properties` file from the
//! project root, derive the signing profile, and attach the fixed
//! descriptor, toolchain versions, variant behavior, and dependency
//! list. The conditional read of `key.properties` is the only side
//! effect; evaluating the same tree twice produces identical output.

use crate::dependencies::{declared_dependencies, DependencyDeclaration};
use crate::descriptor::ApplicationDescriptor;
use crate::signing::SigningProfile;
use crate::toolchain::ToolchainVersions;
use crate::variant::{CompileOptions, ReleaseVariant};
use crate::KEY_PROPERTIES_FILE;
use nonsmoking_core::error::{Result, ResultExt};
use nonsmoking_core::properties::PropertySet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The evaluated packaging configuration handed to the external build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfiguration {
    /// Fixed application metadata
    pub application: ApplicationDescriptor,
    /// Toolchain-owned versions
    pub toolchain: ToolchainVersions,
    /// Resolved signing profile, fields absent when not configured
    pub signing: SigningProfile,
    /// Release variant behavior
    pub release: ReleaseVariant,
    /// Language compatibility markers
    pub compile_options: CompileOptions,
    /// Declared dependency coordinates, in order
    pub dependencies: Vec<DependencyDeclaration>,
}

impl BuildConfiguration {
    /// Evaluate the configuration for the project at `project_root`.
    ///
    /// Reads `key.properties` from the project root if it exists; a
    /// missing file means an unconfigured signing profile, not an
    /// error. An unreadable file is propagated.
    pub fn evaluate(project_root: &Path) -> Result<Self> {
        let props = PropertySet::load(&project_root.join(KEY_PROPERTIES_FILE))
            .context("While evaluating the packaging configuration")?;
        Ok(Self::from_properties(&props))
    }

    /// Assemble the configuration from an already-loaded property set
    pub fn from_properties(props: &PropertySet) -> Self {
        let toolchain = ToolchainVersions::default();
        let signing = SigningProfile::from_properties(props);
        tracing::debug!(
            signing_complete = signing.is_complete(),
            "evaluated build configuration"
        );

        Self {
            application: ApplicationDescriptor::nonsmoking(&toolchain),
            toolchain,
            signing,
            release: ReleaseVariant::default(),
            compile_options: CompileOptions::default(),
            dependencies: declared_dependencies(),
        }
    }

    /// Serialize to pretty JSON.
    ///
    /// Field order is fixed by the struct definitions, so equal
    /// configurations always render byte-identically.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
