//! Core utilities for NonSmoking Android build tooling
//!
//! This crate provides the shared functionality used by the packaging
//! tools:
//!
//! - **Error handling**: structured errors with codes, context, and
//!   recovery suggestions
//! - **Properties files**: reading the Java-style `key=value` files the
//!   Android build consumes (`key.properties`)
//!
//! # Example
//!
//! ```rust,no_run
//! use nonsmoking_core::properties::PropertySet;
//! use std::path::Path;
//!
//! // A missing file is not an error: it loads as an empty set.
//! let props = PropertySet::load(Path::new("android/key.properties"))
//!     .expect("key.properties exists but could not be read");
//! if let Some(alias) = props.get("keyAlias") {
//!     println!("signing as {alias}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod properties;

pub use error::{Error, ErrorCode, Result, ResultExt};
pub use properties::PropertySet;
