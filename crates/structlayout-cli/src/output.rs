// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Stderr styling for diagnostics and verbose reports.
//!
//! Respects NO_COLOR and FORCE_COLOR environment variables.

use colored::{ColoredString, Colorize};

/// Initialize color support based on environment.
/// Call once at startup.
pub fn init() {
    if std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
    } else if std::env::var("FORCE_COLOR").is_ok() {
        colored::control::set_override(true);
    }
}

// === Error Output ===

pub fn error_label() -> ColoredString {
    "error".red().bold()
}

pub fn file_path(path: &str) -> ColoredString {
    path.underline()
}

// === Verbose Output ===

pub fn stage(name: &str) -> ColoredString {
    format!("{:>9}", name).cyan().bold()
}

pub fn banner_ok(before: i64, after: i64) -> String {
    let saved = before - after;
    let msg = if saved > 0 {
        format!("{} -> {} bytes, saved {}", before, after, saved).green().bold()
    } else {
        format!("{} -> {} bytes", before, after).normal()
    };
    format!("{} {} {}", "===".dimmed(), msg, "===".dimmed())
}

// === Help Output ===

pub fn title(name: &str) -> ColoredString {
    name.bold()
}

pub fn version(v: &str) -> ColoredString {
    v.dimmed()
}

pub fn section_header(header: &str) -> ColoredString {
    header.yellow().bold()
}

pub fn command(name: &str) -> ColoredString {
    name.green()
}

pub fn arg(name: &str) -> ColoredString {
    name.cyan()
}
