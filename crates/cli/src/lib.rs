//! CLI utilities for NonSmoking Android build tooling
//!
//! Shared terminal output helpers so every binary renders status lines
//! and configuration fields the same way.

#![warn(missing_docs)]

pub mod output;
