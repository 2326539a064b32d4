//! Landing page generation.
//!
//! The single entry point of the engine. One call takes a [`PageConfig`] and
//! produces all four outputs of a [`GeneratedArtifact`] from one resolved
//! [`PagePlan`]:
//!
//! ```text
//! PageConfig ─→ PagePlan ─┬→ sections ──┐
//!                         ├→ script ────┼→ markup ─┐
//!                         └→ stylesheet ┴──────────┴→ preview
//! ```
//!
//! Generation itself is pure and infallible: every lenient fallback (unknown
//! style, layout, or intensity) is resolved while building the plan. The only
//! wall-clock input is the footer year, which [`generate_with_year`] takes
//! explicitly.
//!
//! ## Output Structure
//!
//! [`write_site`] lays the artifact out as a deployable directory:
//!
//! ```text
//! dist/
//! ├── index.html      # markup, links styles.css
//! ├── styles.css      # stylesheet
//! ├── script.js       # behavior script (only when non-empty)
//! └── preview.html    # self-contained preview
//! ```
//!
//! The script is embedded inline in `index.html` as well; `script.js` is a
//! convenience copy for inspection and caching setups.

use chrono::Datelike;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::behavior::synthesize_script;
use crate::config::PageConfig;
use crate::document::{assemble_document, inline_stylesheet};
use crate::plan::PagePlan;
use crate::sections::compose_all;
use crate::stylesheet::synthesize_stylesheet;
use crate::types::{ArtifactKind, GeneratedArtifact};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Generate the page, stamping the footer with the current local year.
pub fn generate(config: &PageConfig) -> GeneratedArtifact {
    generate_with_year(config, chrono::Local::now().year())
}

/// Generate the page with an explicit footer year. Deterministic.
pub fn generate_with_year(config: &PageConfig, year: i32) -> GeneratedArtifact {
    let plan = PagePlan::resolve(config);
    let sections = compose_all(config, &plan, year);
    let stylesheet = synthesize_stylesheet(&plan);
    let script = synthesize_script(&plan.behaviors);
    let markup = assemble_document(config, &plan, &sections, &script);
    let preview = inline_stylesheet(&markup, &stylesheet);

    tracing::debug!(
        sections = sections.len(),
        markup_bytes = markup.len(),
        stylesheet_bytes = stylesheet.len(),
        script_bytes = script.len(),
        "generated page"
    );

    GeneratedArtifact {
        markup,
        stylesheet,
        script,
        preview,
    }
}

/// Write the artifact into `output_dir`, creating it if needed.
///
/// Returns the written paths in write order. `script.js` is skipped when the
/// page ships no script.
pub fn write_site(
    artifact: &GeneratedArtifact,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::new();
    for kind in [
        ArtifactKind::Markup,
        ArtifactKind::Stylesheet,
        ArtifactKind::Script,
        ArtifactKind::Preview,
    ] {
        let contents = artifact.part(kind);
        if kind == ArtifactKind::Script && contents.is_empty() {
            tracing::debug!("no behavior script, skipping {}", kind.file_name());
            continue;
        }
        let path = output_dir.join(kind.file_name());
        fs::write(&path, contents)?;
        tracing::info!(path = %path.display(), bytes = contents.len(), "wrote");
        written.push(path);
    }
    Ok(written)
}

/// Write the artifact as a single JSON document with the four outputs as keys.
pub fn write_artifact_json(artifact: &GeneratedArtifact, path: &Path) -> Result<(), GenerateError> {
    let json = serde_json::to_string_pretty(artifact)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "wrote artifact json");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    // =========================================================================
    // generate_with_year
    // =========================================================================

    #[test]
    fn generation_is_deterministic_for_fixed_year() {
        let config = full_config();
        assert_eq!(
            generate_with_year(&config, 2024),
            generate_with_year(&config, 2024)
        );
    }

    #[test]
    fn year_only_changes_footer() {
        let config = base_config();
        let a = generate_with_year(&config, 2024);
        let b = generate_with_year(&config, 2031);
        assert_eq!(a.stylesheet, b.stylesheet);
        assert_eq!(a.script, b.script);
        assert_eq!(a.markup.replace("© 2024", "© 2031"), b.markup);
    }

    #[test]
    fn current_year_generation_has_footer() {
        let artifact = generate(&base_config());
        let year = chrono::Local::now().year();
        assert!(artifact.markup.contains(&format!("© {year} Acme")));
    }

    #[test]
    fn static_config_ships_no_script() {
        let artifact = generate_with_year(&static_config(), 2024);
        assert_eq!(artifact.script, "");
        assert!(!artifact.markup.contains("<script"));
        assert!(!artifact.markup.contains("data-animate"));
    }

    #[test]
    fn script_in_markup_matches_script_output() {
        let artifact = generate_with_year(&full_config(), 2024);
        assert!(!artifact.script.is_empty());
        assert!(artifact.markup.contains(&artifact.script));
    }

    #[test]
    fn preview_inlines_the_stylesheet() {
        let artifact = generate_with_year(&full_config(), 2024);
        assert!(artifact.markup.contains(r#"href="styles.css""#));
        assert!(!artifact.preview.contains(r#"href="styles.css""#));
        assert!(
            artifact
                .preview
                .contains(&format!("<style>{}</style>", artifact.stylesheet))
        );
    }

    #[test]
    fn custom_properties_are_all_defined() {
        assert_custom_properties_defined(&generate_with_year(&full_config(), 2024));
        assert_custom_properties_defined(&generate_with_year(&base_config(), 2024));
        assert_custom_properties_defined(&generate_with_year(&static_config(), 2024));
    }

    // =========================================================================
    // write_site
    // =========================================================================

    #[test]
    fn write_site_writes_all_parts() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");
        let artifact = generate_with_year(&full_config(), 2024);

        let written = write_site(&artifact, &out).unwrap();

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["index.html", "styles.css", "script.js", "preview.html"]);
        assert_eq!(
            fs::read_to_string(out.join("styles.css")).unwrap(),
            artifact.stylesheet
        );
        assert_eq!(
            fs::read_to_string(out.join("index.html")).unwrap(),
            artifact.markup
        );
    }

    #[test]
    fn write_site_skips_empty_script() {
        let tmp = TempDir::new().unwrap();
        let artifact = generate_with_year(&static_config(), 2024);

        let written = write_site(&artifact, tmp.path()).unwrap();

        assert_eq!(written.len(), 3);
        assert!(!tmp.path().join("script.js").exists());
    }

    #[test]
    fn write_artifact_json_has_four_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("artifact.json");
        let artifact = generate_with_year(&base_config(), 2024);

        write_artifact_json(&artifact, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        for key in ["markup", "stylesheet", "script", "preview"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
