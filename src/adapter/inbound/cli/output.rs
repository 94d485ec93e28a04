//! Terminal output helpers for CLI handlers.

use std::fmt::Display;

use owo_colors::OwoColorize;

/// Print a section heading.
pub fn section(title: &str) {
    println!("\n{}", title.bold());
}

/// Print an aligned `label: value` line.
pub fn field(label: &str, value: impl Display) {
    println!("  {:<12} {}", format!("{label}:").dimmed(), value);
}

/// Print a success line.
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
