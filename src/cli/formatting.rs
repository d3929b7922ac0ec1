//! Formatting utilities for CLI output.
//!
//! Provides consistent, colored rendering for inventories, the active
//! selection, and apply reports.

use crate::services::theme::{ApplyReport, CategoryStatus, ThemeCategory, ThemeSelection};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats a category header with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats an error message for stderr
pub fn format_error(text: &str) -> String {
    format!(
        "{}{}error:{} {text}",
        Colors::BOLD,
        Colors::RED,
        Colors::RESET
    )
}

/// Renders the installed themes of one category, one name per line.
pub fn format_inventory(category: ThemeCategory, themes: &[String]) -> String {
    let mut out = format_header(&format!("{category} themes"));
    if themes.is_empty() {
        out.push_str(&format!(
            "\n  {}(none installed){}",
            Colors::DIM,
            Colors::RESET
        ));
    } else {
        for theme in themes {
            out.push_str(&format!("\n  {theme}"));
        }
    }
    out
}

/// Renders the active selection, one category per line.
pub fn format_selection(selection: &ThemeSelection) -> String {
    ThemeCategory::ALL
        .iter()
        .map(|category| match selection.get(*category) {
            Some(theme) => format!("{category}: {theme}"),
            None => format!("{category}: {}(unset){}", Colors::DIM, Colors::RESET),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders an apply report with one colored line per category.
pub fn format_report(report: &ApplyReport) -> String {
    let mut lines: Vec<String> = ThemeCategory::ALL
        .iter()
        .map(|category| {
            let status = report.status(*category);
            let color = match status {
                CategoryStatus::Unselected => Colors::DIM,
                CategoryStatus::Applied(_) => Colors::GREEN,
                CategoryStatus::SkippedInvalid(_) => Colors::YELLOW,
                CategoryStatus::Failed { .. } => Colors::RED,
            };
            format!("{category}: {color}{status}{}", Colors::RESET)
        })
        .collect();

    if report.any_applied() {
        lines.push(String::new());
        lines.push(format!(
            "{}Restart applications to pick up the new themes.{}",
            Colors::DIM,
            Colors::RESET
        ));
    }

    lines.join("\n")
}
