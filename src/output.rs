//! CLI output formatting for the generator.
//!
//! # Information-First Display
//!
//! Every item is shown by its semantic identity first (positional index and
//! canonical name), with the descriptor it came from as an indented
//! `Source:` line. The output reads as an inventory of what the README will
//! contain while still pointing back at the files that define it.
//!
//! # Output Format
//!
//! ## Assembly (shared by `build` and `check`)
//!
//! ```text
//! feature (3 items)
//!     001 intro
//!         Source: feature/01_intro/feature.yaml
//!     002 usage
//!         Source: feature/02_usage/feature.yaml
//!     003 intro
//!         Source: feature/03_intro/feature.yaml
//!         Replaces: 01_intro
//! flavour (0 items)
//! ```
//!
//! ## Build
//!
//! ```text
//! README.md.handlebars → README.md (1234 bytes)
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure —
//! no I/O, no side effects.

use crate::generate::{CategoryReport, GenerateReport, LoadedItem};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn category_header(report: &CategoryReport) -> String {
    let n = report.items.len();
    let noun = if n == 1 { "item" } else { "items" };
    format!("{} ({} {})", report.category, n, noun)
}

fn item_lines(index: usize, item: &LoadedItem) -> Vec<String> {
    let mut lines = vec![
        format!("{}{} {}", indent(1), format_index(index), item.canonical_name),
        format!("{}Source: {}", indent(2), item.descriptor_path.display()),
    ];
    if let Some(earlier) = &item.replaces {
        lines.push(format!("{}Replaces: {}", indent(2), earlier));
    }
    lines
}

// ============================================================================
// Assembly output
// ============================================================================

/// Format the merged categories and their items.
pub fn format_assembly_output(categories: &[CategoryReport]) -> Vec<String> {
    let mut lines = Vec::new();
    for report in categories {
        lines.push(category_header(report));
        for (i, item) in report.items.iter().enumerate() {
            lines.extend(item_lines(i + 1, item));
        }
    }
    lines
}

/// Print assembly output to stdout.
pub fn print_assembly_output(categories: &[CategoryReport]) {
    for line in format_assembly_output(categories) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format the result of a full build.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = format_assembly_output(&report.categories);
    lines.push(format!(
        "{} → {} ({} bytes)",
        report.template.display(),
        report.output.display(),
        report.bytes_written
    ));
    lines
}

/// Print build output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
