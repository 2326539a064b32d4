//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output describes the *page*, not the files: each section that made it into
//! the document is listed with its positional index and item count, followed
//! by the script fragments that ship and, last, the files written. This reads
//! as a content inventory of the landing page.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Acme (colorful, split)
//!     Tools for every plan
//! Sections
//! 001 Hero
//! 002 Benefits (3 items)
//! 003 Testimonials (2 items, carousel)
//! 004 Call to action
//! 005 Footer
//! Script
//!     reveal, carousel, forms
//! Files
//!     dist/index.html (6120 bytes)
//!     dist/styles.css (9874 bytes)
//!     dist/script.js (3012 bytes)
//!     dist/preview.html (15994 bytes)
//! Fingerprint 9f2c…
//! ```
//!
//! ## Check
//!
//! ```text
//! 2 issues
//!     unknown style "neon", falling back to "minimal"
//!     sections.pricing is accepted but produces no markup
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use std::path::PathBuf;

use crate::behavior::script_modules;
use crate::config::{Issue, PageConfig};
use crate::plan::PagePlan;
use crate::types::{GeneratedArtifact, SectionKind};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Section header: positional index + label, with item count and the
/// interactive behavior attached to it, if any.
///
/// ```text
/// 002 Benefits (3 items)
/// 004 Gallery (6 items, lightbox)
/// 001 Hero
/// ```
fn section_line(index: usize, kind: SectionKind, config: &PageConfig, plan: &PagePlan) -> String {
    let count = match kind {
        SectionKind::Benefits => Some(config.visible_benefits().len()),
        SectionKind::Stats => Some(config.visible_stats().len()),
        SectionKind::Testimonials => Some(config.visible_testimonials().len()),
        SectionKind::Faq => Some(config.visible_faq().len()),
        SectionKind::Gallery => Some(config.visible_gallery().len()),
        SectionKind::Hero | SectionKind::CallToAction | SectionKind::Footer => None,
    };
    let behavior = match kind {
        SectionKind::Stats if plan.behaviors.counters => Some("counters"),
        SectionKind::Testimonials if plan.behaviors.carousel => Some("carousel"),
        SectionKind::Faq if plan.behaviors.accordion => Some("accordion"),
        SectionKind::Gallery if plan.behaviors.lightbox => Some("lightbox"),
        _ => None,
    };

    let detail = match (count, behavior) {
        (Some(n), Some(b)) => format!(" ({}, {b})", plural(n, "item", "items")),
        (Some(n), None) => format!(" ({})", plural(n, "item", "items")),
        (None, _) => String::new(),
    };
    format!("{} {}{}", format_index(index), kind, detail)
}

// ============================================================================
// Build
// ============================================================================

/// Inventory of one `build` run.
pub fn format_build_output(
    config: &PageConfig,
    plan: &PagePlan,
    artifact: &GeneratedArtifact,
    written: &[PathBuf],
) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({}, {})",
        config.product_name,
        plan.token.keyword.as_str(),
        plan.layout.as_str()
    )];
    if !config.product_description.trim().is_empty() {
        lines.push(format!(
            "{}{}",
            indent(1),
            truncate_desc(config.product_description.trim(), 60)
        ));
    }

    lines.push("Sections".to_string());
    for (i, kind) in plan.sections(config).into_iter().enumerate() {
        lines.push(section_line(i + 1, kind, config, plan));
    }

    lines.push("Script".to_string());
    let modules = script_modules(&plan.behaviors);
    if modules.is_empty() {
        lines.push(format!("{}none", indent(1)));
    } else {
        let names: Vec<String> = modules.iter().map(|m| m.to_string()).collect();
        lines.push(format!("{}{}", indent(1), names.join(", ")));
    }

    if !written.is_empty() {
        lines.push("Files".to_string());
        for path in written {
            let bytes = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| file_bytes(artifact, name));
            match bytes {
                Some(n) => lines.push(format!("{}{} ({} bytes)", indent(1), path.display(), n)),
                None => lines.push(format!("{}{}", indent(1), path.display())),
            }
        }
    }

    lines.push(format!("Fingerprint {}", artifact.fingerprint()));
    lines
}

/// Size of the artifact part written under `file_name`, if it is one of ours.
fn file_bytes(artifact: &GeneratedArtifact, file_name: &str) -> Option<usize> {
    use crate::types::ArtifactKind::*;
    [Markup, Stylesheet, Script, Preview]
        .into_iter()
        .find(|kind| kind.file_name() == file_name)
        .map(|kind| artifact.part(kind).len())
}

pub fn print_build_output(
    config: &PageConfig,
    plan: &PagePlan,
    artifact: &GeneratedArtifact,
    written: &[PathBuf],
) {
    for line in format_build_output(config, plan, artifact, written) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(issues: &[Issue]) -> Vec<String> {
    if issues.is_empty() {
        return vec!["No issues found".to_string()];
    }
    let mut lines = vec![plural(issues.len(), "issue", "issues")];
    for issue in issues {
        lines.push(format!("{}{}", indent(1), issue));
    }
    lines
}

pub fn print_check_output(issues: &[Issue]) {
    for line in format_check_output(issues) {
        println!("{}", line);
    }
}
