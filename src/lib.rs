//! # Simple Landing
//!
//! A generator for single-page product landing sites. One configuration
//! record describes the product, its visual style, which optional sections to
//! show and which interactive features to enable; one call turns it into four
//! synchronized text outputs: an HTML document, its stylesheet, its behavior
//! script, and a self-contained preview.
//!
//! # Architecture: Resolve Once, Render Four Ways
//!
//! ```text
//! PageConfig ─→ PagePlan ─┬→ sections (maud) ─┐
//!                         ├→ behavior script ─┼→ document ─┐
//!                         └→ stylesheet ──────┴────────────┴→ preview
//! ```
//!
//! Every lenient decision (unknown style, unknown layout, unknown intensity,
//! toggled-on section without content) is made exactly once, while resolving
//! the [`plan::PagePlan`]. The section composer, stylesheet synthesizer and
//! behavior synthesizer only read the plan. That is what keeps the outputs in
//! step: markup never carries a `data-*` hook whose script is not shipped, and
//! the script never looks for markup that was not rendered.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `page.toml` / JSON loading, layering, linting |
//! | [`style`] | Style keyword + color overrides → [`style::StyleToken`], layout resolution |
//! | [`features`] | Animation intensity, feature flags, and the script [`features::Behaviors`] |
//! | [`plan`] | [`plan::PagePlan`], the one-shot resolution of a config |
//! | [`sections`] | Per-section markup in document order |
//! | [`stylesheet`] | Custom properties, base rules, per-feature rule blocks |
//! | [`behavior`] | Behavior script assembled from `static/*.js` fragments |
//! | [`interaction`] | The script's state machines as pure Rust values |
//! | [`document`] | Document assembly and the single-file preview |
//! | [`generate`] | Entry point: config → [`GeneratedArtifact`]; writing it to disk |
//! | [`types`] | [`GeneratedArtifact`] and the section / artifact enums |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## No Script Unless Something Is Interactive
//!
//! A page with animations and every interactive feature off ships an empty
//! script and no `<script>` element. Parallax and hover effects are done in
//! the stylesheet alone and never force a script. Without a script the page
//! must still be complete: elements are never hidden waiting for a reveal, and
//! the FAQ renders expanded.
//!
//! ## Durations Live in the Stylesheet
//!
//! The animation intensity maps to `--animation-duration`; the counter length
//! is `--counter-duration`. The script reads the latter at run time instead of
//! carrying its own copy, and a reduced-motion media query zeroes both.
//!
//! ## Maud for Markup
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). All interpolated
//! user text is escaped; the only raw insertions are the stylesheet link and
//! the engine's own script.
//!
//! ## Deterministic Output
//!
//! The only wall-clock input is the footer year. [`generate_with_year`] takes
//! it explicitly and is a pure function of its arguments; [`generate`] reads
//! the local year and delegates.

pub mod behavior;
pub mod config;
pub mod document;
pub mod features;
pub mod generate;
pub mod interaction;
pub mod output;
pub mod plan;
pub mod sections;
pub mod style;
pub mod stylesheet;
pub mod types;

pub use config::PageConfig;
pub use generate::{generate, generate_with_year};
pub use types::GeneratedArtifact;

#[cfg(test)]
pub(crate) mod test_helpers;
