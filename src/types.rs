//! Shared types passed between the engine, the download action and the CLI.
//!
//! The engine's only output is a [`GeneratedArtifact`]. Every collaborator
//! (file writer, `print`, the browser tests) consumes these four strings
//! verbatim and never transforms them.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

/// The four synchronized text outputs of one generation call.
///
/// Immutable once produced; regenerating means building a fresh value and
/// dropping the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    /// Full HTML document referencing `styles.css` externally.
    pub markup: String,
    /// Complete stylesheet for `markup`.
    pub stylesheet: String,
    /// Client behavior script. Empty when no interactive feature is enabled.
    pub script: String,
    /// `markup` with the stylesheet inlined, renderable without network access.
    pub preview: String,
}

impl GeneratedArtifact {
    /// SHA-256 over all four strings, hex encoded.
    ///
    /// Each part is length-prefixed so moving bytes between parts changes the digest.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for part in [&self.markup, &self.stylesheet, &self.script, &self.preview] {
            hasher.update((part.len() as u64).to_le_bytes());
            hasher.update(part.as_bytes());
        }
        format!("{:x}", hasher.finalize())
    }

    /// Look up one of the four strings by kind.
    pub fn part(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Markup => &self.markup,
            ArtifactKind::Stylesheet => &self.stylesheet,
            ArtifactKind::Script => &self.script,
            ArtifactKind::Preview => &self.preview,
        }
    }
}

/// Names one string of a [`GeneratedArtifact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArtifactKind {
    Markup,
    Stylesheet,
    Script,
    Preview,
}

impl ArtifactKind {
    /// File name used by the download action.
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Markup => "index.html",
            ArtifactKind::Stylesheet => "styles.css",
            ArtifactKind::Script => "script.js",
            ArtifactKind::Preview => "preview.html",
        }
    }
}

/// Semantic blocks of the generated page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    Hero,
    Benefits,
    Stats,
    Testimonials,
    Faq,
    Gallery,
    CallToAction,
    Footer,
}

impl SectionKind {
    /// Every section, in the order the document assembles them.
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Hero,
        SectionKind::Benefits,
        SectionKind::Stats,
        SectionKind::Testimonials,
        SectionKind::Faq,
        SectionKind::Gallery,
        SectionKind::CallToAction,
        SectionKind::Footer,
    ];

    /// Value of the `data-section` marker carried by the section's root element.
    pub fn marker(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Benefits => "benefits",
            SectionKind::Stats => "stats",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Faq => "faq",
            SectionKind::Gallery => "gallery",
            SectionKind::CallToAction => "cta",
            SectionKind::Footer => "footer",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SectionKind::Hero => "Hero",
            SectionKind::Benefits => "Benefits",
            SectionKind::Stats => "Stats",
            SectionKind::Testimonials => "Testimonials",
            SectionKind::Faq => "FAQ",
            SectionKind::Gallery => "Gallery",
            SectionKind::CallToAction => "Call to action",
            SectionKind::Footer => "Footer",
        };
        f.write_str(label)
    }
}
