//! Pure formatting functions for terminal output.
//!
//! Diagnostics go to stderr so stdout stays reserved for the resolved
//! version string.

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}
