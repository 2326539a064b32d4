//! Shared test utilities for the simple-landing test suite.
//!
//! Config builders that start from a small, valid page and switch on one
//! section at a time, plus stylesheet inspection helpers used to check that
//! markup and script only reference custom properties the stylesheet defines.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let mut config = with_gallery(base_config(), &["a.jpg", "b.jpg"]);
//! config.features.lightbox = true;
//! let artifact = generate_with_year(&config, 2024);
//! assert_custom_properties_defined(&artifact);
//! ```

use std::collections::BTreeSet;

use crate::config::{FaqEntry, PageConfig, Stat, Testimonial};
use crate::types::GeneratedArtifact;

// =========================================================================
// Config builders
// =========================================================================

/// A minimal, valid page: name, description, CTA, animations on, nothing optional.
pub fn base_config() -> PageConfig {
    PageConfig {
        product_name: "Acme".to_string(),
        product_description: "Tools for every plan".to_string(),
        call_to_action: "Buy now".to_string(),
        cta_link: "https://acme.test/buy".to_string(),
        ..PageConfig::default()
    }
}

/// Enable testimonials with one record per text.
pub fn with_testimonials(mut config: PageConfig, texts: &[&str]) -> PageConfig {
    config.sections.testimonials = true;
    config.testimonials = texts
        .iter()
        .enumerate()
        .map(|(i, text)| Testimonial {
            text: text.to_string(),
            name: format!("Customer {}", i + 1),
            role: "Buyer".to_string(),
        })
        .collect();
    config
}

/// Enable the FAQ with `(question, answer)` pairs.
pub fn with_faq(mut config: PageConfig, entries: &[(&str, &str)]) -> PageConfig {
    config.sections.faq = true;
    config.faq = entries
        .iter()
        .map(|(q, a)| FaqEntry {
            question: q.to_string(),
            answer: a.to_string(),
        })
        .collect();
    config
}

/// Enable the gallery with the given image references.
pub fn with_gallery(mut config: PageConfig, images: &[&str]) -> PageConfig {
    config.sections.gallery = true;
    config.gallery = images.iter().map(|s| s.to_string()).collect();
    config
}

/// Append one stat to the stats strip.
pub fn with_stat(mut config: PageConfig, value: u32, suffix: &str, label: &str) -> PageConfig {
    config.stats.push(Stat {
        value,
        suffix: suffix.to_string(),
        label: label.to_string(),
    });
    config
}

/// Every section and every feature switched on.
pub fn full_config() -> PageConfig {
    let mut config = base_config();
    config.benefits = vec!["Fast".into(), "Cheap".into(), "Good".into()];
    config.contact = Some("hello@acme.test".into());
    config.hero_image = Some("hero.jpg".into());
    config = with_testimonials(config, &["Great", "Superb", "Fine"]);
    config = with_faq(config, &[("Why?", "Because."), ("How?", "Like so.")]);
    config = with_gallery(config, &["1.jpg", "2.jpg", "3.jpg"]);
    config = with_stat(config, 1200, "+", "customers");
    config.features.carousel = true;
    config.features.lightbox = true;
    config.features.parallax = true;
    config.features.counters = true;
    config.features.micro_interactions = true;
    config
}

/// All features off: the page must ship without a script.
pub fn static_config() -> PageConfig {
    let mut config = base_config();
    config.animations = false;
    config
}

// =========================================================================
// Custom property inspection
// =========================================================================

/// Names `--x` of every custom property *defined* (`--x:`) in `css`.
pub fn defined_custom_properties(css: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for (start, _) in css.match_indices("--") {
        let name = read_property_name(&css[start..]);
        let rest = css[start + name.len()..].trim_start();
        if name.len() > 2 && rest.starts_with(':') {
            names.insert(name.to_string());
        }
    }
    names
}

/// Names of every custom property *referenced* through `var(--x)` in `text`.
pub fn referenced_custom_properties(text: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for (start, _) in text.match_indices("var(--") {
        let name = read_property_name(&text[start + 4..]);
        if name.len() > 2 {
            names.insert(name.to_string());
        }
    }
    // Script lookups by quoted name: cssTimeMs('--x', ...)
    for (start, _) in text.match_indices("'--") {
        let name = read_property_name(&text[start + 1..]);
        if name.len() > 2 {
            names.insert(name.to_string());
        }
    }
    names
}

fn read_property_name(text: &str) -> &str {
    let end = text
        .char_indices()
        .skip(2)
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    &text[..end]
}

/// Assert every custom property referenced anywhere is defined in the stylesheet.
pub fn assert_custom_properties_defined(artifact: &GeneratedArtifact) {
    let defined = defined_custom_properties(&artifact.stylesheet);
    for (label, text) in [
        ("markup", &artifact.markup),
        ("stylesheet", &artifact.stylesheet),
        ("script", &artifact.script),
    ] {
        let missing: Vec<_> = referenced_custom_properties(text)
            .difference(&defined)
            .cloned()
            .collect();
        assert!(
            missing.is_empty(),
            "{label} references undefined custom properties: {missing:?}"
        );
    }
}
