//! Android packaging configuration model for the NonSmoking app
//!
//! This crate models the inputs the external Android build needs to
//! compile, shrink, and sign a release artifact of `com.cjw.nonsmoking`:
//!
//! - **Signing**: the optional `key.properties` override file mapped into
//!   a signing profile
//! - **Descriptor**: fixed application metadata (id, SDK bounds, version)
//! - **Toolchain**: versions owned by the Flutter toolchain (compile SDK,
//!   NDK)
//! - **Variant**: release build behavior (minification, resource
//!   shrinking, ProGuard rules) and language compatibility markers
//! - **Dependencies**: the pinned external library coordinates
//!
//! Evaluation is a single linear pass with one conditional file read.
//! The loader never validates signing data; [`verify`] is the separate,
//! explicitly-invoked readiness check used before a release build.
//!
//! # Example
//!
//! ```rust,no_run
//! use nonsmoking_packaging::BuildConfiguration;
//! use std::path::Path;
//!
//! let config = BuildConfiguration::evaluate(Path::new("android/app"))?;
//! if !config.signing.is_complete() {
//!     eprintln!("release builds will fail at the signing step");
//! }
//! # Ok::<(), nonsmoking_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dependencies;
pub mod descriptor;
pub mod evaluate;
pub mod signing;
pub mod toolchain;
pub mod variant;
pub mod verify;

pub use dependencies::{declared_dependencies, DependencyDeclaration, DependencyScope};
pub use descriptor::ApplicationDescriptor;
pub use evaluate::BuildConfiguration;
pub use signing::SigningProfile;
pub use toolchain::ToolchainVersions;
pub use variant::{CompileOptions, ReleaseVariant};
pub use verify::{verify_release, Finding, Severity, VerifyReport};

/// File name of the optional signing override file, relative to the
/// Android project root
pub const KEY_PROPERTIES_FILE: &str = "key.properties";
