//! Document assembly and single-file preview.
//!
//! The assembled document links `styles.css` and embeds the behavior script
//! inline. The preview is the same document with that one link replaced by an
//! inline `<style>` block, so it opens standalone without the stylesheet file.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::config::PageConfig;
use crate::plan::PagePlan;
use crate::sections::lightbox_overlay;
use crate::types::SectionKind;

/// Exact stylesheet reference emitted by [`assemble_document`]. The preview
/// inliner looks for this string and nothing else.
pub const STYLESHEET_LINK: &str = r#"<link rel="stylesheet" href="styles.css">"#;

/// Wrap composed sections into a complete HTML document.
///
/// The lightbox overlay is appended only when the plan ships the lightbox
/// behavior, and the script element only when `script` is non-empty.
pub fn assemble_document(
    config: &PageConfig,
    plan: &PagePlan,
    sections: &[(SectionKind, Markup)],
    script: &str,
) -> String {
    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.product_name) " - Landing Page" }
                meta name="description" content=(config.product_description);
                (PreEscaped(STYLESHEET_LINK))
            }
            body {
                main.container {
                    @for (_, section) in sections {
                        (section)
                    }
                }
                @if plan.has_lightbox_overlay() {
                    (lightbox_overlay())
                }
                @if !script.is_empty() {
                    script { (PreEscaped(script)) }
                }
            }
        }
    };
    page.into_string()
}

/// Replace the stylesheet link in `markup` with the stylesheet text inline.
///
/// Only the first occurrence is replaced. A document without the link is
/// returned unchanged.
pub fn inline_stylesheet(markup: &str, stylesheet: &str) -> String {
    match markup.find(STYLESHEET_LINK) {
        Some(at) => {
            let mut preview = String::with_capacity(markup.len() + stylesheet.len());
            preview.push_str(&markup[..at]);
            preview.push_str("<style>");
            preview.push_str(stylesheet);
            preview.push_str("</style>");
            preview.push_str(&markup[at + STYLESHEET_LINK.len()..]);
            preview
        }
        None => {
            tracing::debug!("no stylesheet link in markup, preview left unchanged");
            markup.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::compose_all;
    use crate::test_helpers::*;

    fn assemble(config: &PageConfig, script: &str) -> String {
        let plan = PagePlan::resolve(config);
        let sections = compose_all(config, &plan, 2024);
        assemble_document(config, &plan, &sections, script)
    }

    // =========================================================================
    // assemble_document
    // =========================================================================

    #[test]
    fn document_head_carries_title_description_and_link() {
        let doc = assemble(&base_config(), "");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<html lang="en">"#));
        assert!(doc.contains("<title>Acme - Landing Page</title>"));
        assert!(doc.contains(r#"<meta name="description" content="Tools for every plan">"#));
        assert_eq!(doc.matches(STYLESHEET_LINK).count(), 1);
    }

    #[test]
    fn empty_script_omits_script_element() {
        let doc = assemble(&static_config(), "");
        assert!(!doc.contains("<script"));
    }

    #[test]
    fn script_is_embedded_verbatim() {
        let doc = assemble(&base_config(), "if (a < b && c) {}");
        assert!(doc.contains("<script>if (a < b && c) {}</script>"));
    }

    #[test]
    fn sections_appear_in_given_order() {
        let config = full_config();
        let doc = assemble(&config, "");
        let positions: Vec<usize> = SectionKind::ALL
            .iter()
            .map(|kind| {
                doc.find(&format!(r#"data-section="{}""#, kind.marker()))
                    .unwrap_or_else(|| panic!("missing {kind}"))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn lightbox_overlay_only_with_lightbox_behavior() {
        let mut config = with_gallery(base_config(), &["a.jpg"]);
        assert!(!assemble(&config, "").contains("data-lightbox-image"));

        config.features.lightbox = true;
        let doc = assemble(&config, "");
        assert_eq!(doc.matches(r#"id="lightbox""#).count(), 1);
    }

    #[test]
    fn product_name_is_escaped() {
        let mut config = base_config();
        config.product_name = "<b>Acme</b>".into();
        let doc = assemble(&config, "");
        assert!(!doc.contains("<b>Acme</b>"));
        assert!(doc.contains("&lt;b&gt;Acme&lt;/b&gt;"));
    }

    // =========================================================================
    // inline_stylesheet
    // =========================================================================

    #[test]
    fn inline_replaces_link_with_style_block() {
        let doc = assemble(&base_config(), "");
        let preview = inline_stylesheet(&doc, "body { color: red; }");
        assert!(!preview.contains(STYLESHEET_LINK));
        assert!(preview.contains("<style>body { color: red; }</style>"));
        assert_eq!(
            preview.replace("<style>body { color: red; }</style>", STYLESHEET_LINK),
            doc
        );
    }

    #[test]
    fn inline_without_link_is_identity() {
        let markup = "<html><head></head></html>";
        assert_eq!(inline_stylesheet(markup, "x"), markup);
    }
}
