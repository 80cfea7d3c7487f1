//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.len()));
    }
}

/// Print a labelled configuration field, dimming the label
pub fn print_field(label: &str, value: &str) {
    println!("  {:<22} {}", format!("{label}:").dimmed(), value);
}

/// Print a labelled optional field, showing a dimmed placeholder when absent
pub fn print_optional_field(label: &str, value: Option<&str>) {
    match value {
        Some(v) => print_field(label, v),
        None => println!("  {:<22} {}", format!("{label}:").dimmed(), "(not set)".dimmed()),
    }
}

/// Render a boolean as `enabled`/`disabled`
pub fn format_enabled(value: bool) -> &'static str {
    if value { "enabled" } else { "disabled" }
}

/// Mask a secret for human-readable output
pub fn redact(value: Option<&str>) -> Option<String> {
    value.map(|v| {
        if v.is_empty() {
            String::new()
        } else {
            "•".repeat(v.chars().count().min(8))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_enabled() {
        assert_eq!(format_enabled(true), "enabled");
        assert_eq!(format_enabled(false), "disabled");
    }

    #[test]
    fn test_redact_masks_value() {
        let masked = redact(Some("hunter2")).unwrap();
        assert!(!masked.contains("hunter2"));
        assert_eq!(masked.chars().count(), 7);
    }

    #[test]
    fn test_redact_caps_length() {
        // Mask length must not leak long password lengths.
        let masked = redact(Some("a-very-long-password")).unwrap();
        assert_eq!(masked.chars().count(), 8);
    }

    #[test]
    fn test_redact_absent() {
        assert_eq!(redact(None), None);
    }
}
