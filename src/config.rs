//! Page configuration module.
//!
//! A [`PageConfig`] is the single input of the engine: product copy, the
//! chosen visual style, optional content sections and the animation and
//! interactivity flags. It is loaded from `page.toml` (or `page.json`) and is
//! never mutated once generation starts.
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! product_name = ""
//! product_description = ""
//! benefits = []
//! call_to_action = "Get started"
//! cta_link = "#"
//! # contact = "hello@example.com"
//! # hero_image = "hero.jpg"
//! style = "minimal"            # minimal | colorful | professional | playful
//! # layout = "split"           # centered | split | fullwidth (default: from style)
//! animations = true
//! animation_intensity = "moderate"  # subtle | moderate | dynamic
//! gallery = []
//!
//! [sections]
//! testimonials = false
//! faq = false
//! gallery = false
//! pricing = false
//!
//! [features]
//! carousel = false
//! lightbox = false
//! parallax = false
//! counters = false
//! micro_interactions = false
//!
//! [colors]                     # each key optional, empty keeps the style default
//! # primary = "#000000"
//! ```
//!
//! ## Layering
//!
//! Several files can be stacked with [`load_layered`]: a shared brand file
//! (style, colors) followed by a per-page file. Tables merge key-by-key,
//! later files win.
//!
//! Unknown keys are rejected to catch typos early. Unknown *keyword values*
//! (style, layout, intensity) are accepted here and resolved with fallbacks by
//! the engine; [`lint`] reports them.

use crate::features::AnimationIntensity;
use crate::style::{Layout, StyleKeyword, is_color_value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML conversion error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Landing page configuration.
///
/// All fields have defaults; a config file only names what it sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub product_name: String,
    pub product_description: String,
    /// Benefit lines in display order. Blank entries are ignored.
    pub benefits: Vec<String>,
    /// Label of the call-to-action buttons.
    pub call_to_action: String,
    /// Target URL of the call-to-action buttons.
    pub cta_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    /// Hero image reference (URL or data URI).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    /// Style keyword, see [`StyleKeyword`].
    pub style: String,
    /// Explicit layout keyword. Absent means "use the style's default layout".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    pub animations: bool,
    /// Intensity keyword, see [`AnimationIntensity`].
    pub animation_intensity: String,
    pub sections: SectionToggles,
    pub features: FeatureToggles,
    pub testimonials: Vec<Testimonial>,
    pub faq: Vec<FaqEntry>,
    /// Gallery image references in display order.
    pub gallery: Vec<String>,
    /// Figures for the stats strip (animated when counters are enabled).
    pub stats: Vec<Stat>,
    pub colors: ColorOverrides,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            product_description: String::new(),
            benefits: Vec::new(),
            call_to_action: "Get started".to_string(),
            cta_link: "#".to_string(),
            contact: None,
            hero_image: None,
            style: "minimal".to_string(),
            layout: None,
            animations: true,
            animation_intensity: "moderate".to_string(),
            sections: SectionToggles::default(),
            features: FeatureToggles::default(),
            testimonials: Vec::new(),
            faq: Vec::new(),
            gallery: Vec::new(),
            stats: Vec::new(),
            colors: ColorOverrides::default(),
        }
    }
}

/// Which optional sections the author asked for.
///
/// A toggle alone never produces markup: the matching collection must also
/// hold at least one non-blank record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionToggles {
    pub testimonials: bool,
    pub faq: bool,
    pub gallery: bool,
    /// Accepted for compatibility; pricing presentation is rendered elsewhere.
    pub pricing: bool,
}

/// Interactive feature switches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureToggles {
    pub carousel: bool,
    pub lightbox: bool,
    pub parallax: bool,
    pub counters: bool,
    pub micro_interactions: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Testimonial {
    pub text: String,
    pub name: String,
    pub role: String,
}

impl Testimonial {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn is_blank(&self) -> bool {
        self.question.trim().is_empty()
    }
}

/// One figure of the stats strip, e.g. `1200` + `"+"` + `"happy customers"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Stat {
    pub value: u32,
    pub suffix: String,
    pub label: String,
}

impl Stat {
    pub fn is_blank(&self) -> bool {
        self.label.trim().is_empty()
    }
}

/// Optional color overrides. Absent or empty values keep the style default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl ColorOverrides {
    /// `(key, value)` for every override that is present.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
    }
}

impl PageConfig {
    /// Non-blank benefits in input order.
    pub fn visible_benefits(&self) -> Vec<&str> {
        self.benefits
            .iter()
            .map(|b| b.trim())
            .filter(|b| !b.is_empty())
            .collect()
    }

    pub fn visible_testimonials(&self) -> Vec<&Testimonial> {
        self.testimonials.iter().filter(|t| !t.is_blank()).collect()
    }

    pub fn visible_faq(&self) -> Vec<&FaqEntry> {
        self.faq.iter().filter(|f| !f.is_blank()).collect()
    }

    pub fn visible_gallery(&self) -> Vec<&str> {
        self.gallery
            .iter()
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
            .collect()
    }

    pub fn visible_stats(&self) -> Vec<&Stat> {
        self.stats.iter().filter(|s| !s.is_blank()).collect()
    }

    /// Contact line, if present and non-blank.
    pub fn contact_line(&self) -> Option<&str> {
        self.contact
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    pub fn hero_image_ref(&self) -> Option<&str> {
        self.hero_image
            .as_deref()
            .map(str::trim)
            .filter(|i| !i.is_empty())
    }
}

// =============================================================================
// Lint
// =============================================================================

/// Something the engine will tolerate but the author probably did not intend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    EmptyProductName,
    UnknownStyle(String),
    UnknownLayout(String),
    UnknownIntensity(String),
    /// Color override the stylesheet cannot carry; the style default is used.
    InvalidColor(&'static str, String),
    /// Section toggled on with no non-blank content; it will be omitted.
    EmptySection(&'static str),
    PricingNotRendered,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::EmptyProductName => write!(f, "product_name is empty"),
            Issue::UnknownStyle(s) => {
                write!(f, "unknown style \"{s}\", falling back to \"minimal\"")
            }
            Issue::UnknownLayout(l) => {
                write!(f, "unknown layout \"{l}\", using the style's default layout")
            }
            Issue::UnknownIntensity(i) => {
                write!(f, "unknown animation_intensity \"{i}\", using \"moderate\"")
            }
            Issue::InvalidColor(key, value) => {
                write!(f, "colors.{key} {value:?} is not a color value, using the style default")
            }
            Issue::EmptySection(name) => {
                write!(f, "sections.{name} is enabled but has no content; it will be omitted")
            }
            Issue::PricingNotRendered => {
                write!(f, "sections.pricing is accepted but produces no markup")
            }
        }
    }
}

/// Report everything the engine's fallback policies would silently absorb.
pub fn lint(config: &PageConfig) -> Vec<Issue> {
    let mut issues = Vec::new();
    if config.product_name.trim().is_empty() {
        issues.push(Issue::EmptyProductName);
    }
    if StyleKeyword::parse(&config.style).is_none() {
        issues.push(Issue::UnknownStyle(config.style.clone()));
    }
    if let Some(layout) = &config.layout {
        if Layout::parse(layout).is_none() {
            issues.push(Issue::UnknownLayout(layout.clone()));
        }
    }
    if AnimationIntensity::parse(&config.animation_intensity).is_none() {
        issues.push(Issue::UnknownIntensity(config.animation_intensity.clone()));
    }
    for (key, value) in config.colors.present() {
        if !value.trim().is_empty() && !is_color_value(value) {
            issues.push(Issue::InvalidColor(key, value.to_string()));
        }
    }
    if config.sections.testimonials && config.visible_testimonials().is_empty() {
        issues.push(Issue::EmptySection("testimonials"));
    }
    if config.sections.faq && config.visible_faq().is_empty() {
        issues.push(Issue::EmptySection("faq"));
    }
    if config.sections.gallery && config.visible_gallery().is_empty() {
        issues.push(Issue::EmptySection("gallery"));
    }
    if config.sections.pricing {
        issues.push(Issue::PricingNotRendered);
    }
    issues
}

/// Fail on the first lint issue. Used by `check --strict`.
pub fn validate_strict(config: &PageConfig) -> Result<(), ConfigError> {
    match lint(config).into_iter().next() {
        Some(issue) => Err(ConfigError::Validation(issue.to_string())),
        None => Ok(()),
    }
}

// =============================================================================
// Config loading and merging
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user files on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(PageConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, arrays included.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read one config file as a raw TOML value.
///
/// `.json` files are parsed as JSON and converted; anything else is TOML.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        let json: serde_json::Value = serde_json::from_str(&content)?;
        Ok(toml::Value::try_from(strip_nulls(json))?)
    } else {
        Ok(toml::from_str(&content)?)
    }
}

/// TOML has no null: drop null object members and array items so optional
/// fields sent as `null` read as absent.
fn strip_nulls(value: serde_json::Value) -> serde_json::Value {
    use serde_json::Value;
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|v| !v.is_null())
                .map(strip_nulls)
                .collect(),
        ),
        other => other,
    }
}

/// Load and merge several config files in order on top of the stock defaults.
pub fn load_layered<P: AsRef<Path>>(paths: &[P]) -> Result<PageConfig, ConfigError> {
    let mut merged = stock_defaults_value()?;
    for path in paths {
        let layer = load_raw_config(path.as_ref())?;
        merged = merge_toml(merged, layer);
    }
    Ok(merged.try_into()?)
}

/// Load a single config file.
pub fn load_config(path: &Path) -> Result<PageConfig, ConfigError> {
    load_layered(&[path])
}

/// Returns a fully-commented stock `page.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Landing Configuration
# ============================
# All settings are optional. Values shown are either defaults or examples.
#
# Several files can be layered: `--config brand.toml --config page.toml`.
# Later files override earlier ones, tables merge key by key.
# Unknown keys will cause an error.

product_name = "Acme Rocket Skates"
product_description = "Skates that get you there before you left."

# Benefit lines, in order. Blank lines are skipped.
benefits = [
    "Zero to sixty in two seconds",
    "Runs on ordinary birdseed",
    "Lifetime warranty against cliffs",
]

call_to_action = "Get started"
cta_link = "https://example.com/signup"

# Optional contact line shown under the final call to action.
# contact = "hello@example.com"

# Optional hero image (URL or data URI).
# hero_image = "https://example.com/hero.jpg"

# minimal | colorful | professional | playful
# Unknown values fall back to "minimal".
style = "minimal"

# centered | split | fullwidth
# Omit to use the style's default (minimal/colorful: centered,
# professional: split, playful: fullwidth).
# layout = "split"

# Reveal-on-scroll animations.
animations = true

# subtle (0.3s) | moderate (0.6s) | dynamic (0.9s)
animation_intensity = "moderate"

# Gallery images, in order. Shown only when sections.gallery is true.
gallery = []

# ---------------------------------------------------------------------------
# Optional sections (each also needs content below)
# ---------------------------------------------------------------------------
[sections]
testimonials = false
faq = false
gallery = false
pricing = false

# ---------------------------------------------------------------------------
# Interactive features
# ---------------------------------------------------------------------------
[features]
carousel = false            # testimonials as a one-slide carousel
lightbox = false            # click gallery tiles to enlarge
parallax = false            # fixed hero background (stylesheet only)
counters = false            # stats count up when scrolled into view
micro_interactions = false  # ripple and hover lift on buttons and cards

# ---------------------------------------------------------------------------
# Color overrides (empty or absent keeps the style default)
# ---------------------------------------------------------------------------
[colors]
# primary = "#000000"
# secondary = "#ffffff"
# accent = "#666666"
# background = "#ffffff"

# ---------------------------------------------------------------------------
# Content collections
# ---------------------------------------------------------------------------
# [[testimonials]]
# text = "Best purchase I ever made."
# name = "W. E. Coyote"
# role = "Genius"

# [[faq]]
# question = "Do they come in my size?"
# answer = "Every size, including mesa."

# [[stats]]
# value = 1200
# suffix = "+"
# label = "happy customers"
"##
}
