//! Style resolution: style keyword + color overrides → concrete visual tokens.
//!
//! Four built-in styles exist. An unknown or empty keyword resolves to
//! `minimal` instead of failing, so generation always has a usable token;
//! [`crate::config::lint`] reports the fallback to the author.

use crate::config::ColorOverrides;

/// The closed set of built-in visual styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKeyword {
    Minimal,
    Colorful,
    Professional,
    Playful,
}

impl StyleKeyword {
    /// Strict parse. Case and surrounding whitespace are ignored.
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "minimal" => Some(StyleKeyword::Minimal),
            "colorful" => Some(StyleKeyword::Colorful),
            "professional" => Some(StyleKeyword::Professional),
            "playful" => Some(StyleKeyword::Playful),
            _ => None,
        }
    }

    /// Lenient parse used by the engine: anything unknown is `Minimal`.
    pub fn resolve(keyword: &str) -> Self {
        Self::parse(keyword).unwrap_or_else(|| {
            tracing::debug!(keyword, "unknown style keyword, using minimal");
            StyleKeyword::Minimal
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StyleKeyword::Minimal => "minimal",
            StyleKeyword::Colorful => "colorful",
            StyleKeyword::Professional => "professional",
            StyleKeyword::Playful => "playful",
        }
    }

    pub fn default_layout(self) -> Layout {
        match self {
            StyleKeyword::Minimal | StyleKeyword::Colorful => Layout::Centered,
            StyleKeyword::Professional => Layout::Split,
            StyleKeyword::Playful => Layout::Fullwidth,
        }
    }
}

/// Structural arrangement of the hero and section bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    Centered,
    Split,
    Fullwidth,
}

impl Layout {
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "centered" => Some(Layout::Centered),
            "split" => Some(Layout::Split),
            "fullwidth" => Some(Layout::Fullwidth),
            _ => None,
        }
    }

    /// CSS class suffix, e.g. `hero-split`.
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Centered => "centered",
            Layout::Split => "split",
            Layout::Fullwidth => "fullwidth",
        }
    }
}

/// Resolved visual tokens for one generation call.
///
/// Only produced by [`resolve_style`]; read-only for every composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleToken {
    /// The style actually applied, after fallback.
    pub keyword: StyleKeyword,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub font: &'static str,
    pub default_layout: Layout,
    pub gradient: String,
}

/// Whether `value` can stand as a single color value in a declaration.
///
/// Hex, named and functional notations pass. Anything that could end the
/// declaration, the rule or the enclosing `<style>` element does not.
pub fn is_color_value(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty()
        && value.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ' | '-' | '+' | '/')
        })
}

/// Resolve the style keyword and apply any usable color overrides.
///
/// Empty overrides and values rejected by [`is_color_value`] keep the style
/// default.
pub fn resolve_style(keyword: &str, overrides: &ColorOverrides) -> StyleToken {
    let style = StyleKeyword::resolve(keyword);
    let base = palette(style);

    let pick = |over: &Option<String>, default: &str| -> String {
        match over.as_deref().map(str::trim) {
            Some(color) if is_color_value(color) => color.to_string(),
            Some(color) if !color.is_empty() => {
                tracing::debug!(color, "unusable color override, using style default");
                default.to_string()
            }
            _ => default.to_string(),
        }
    };

    StyleToken {
        keyword: style,
        primary: pick(&overrides.primary, base.primary),
        secondary: pick(&overrides.secondary, base.secondary),
        accent: pick(&overrides.accent, base.accent),
        background: pick(&overrides.background, base.background),
        font: base.font,
        default_layout: style.default_layout(),
        gradient: format!(
            "linear-gradient(135deg, {}, {})",
            base.gradient_from, base.gradient_to
        ),
    }
}

/// Resolve the layout: an explicit, recognized keyword wins over the style default.
pub fn resolve_layout(explicit: Option<&str>, token: &StyleToken) -> Layout {
    match explicit {
        Some(keyword) => Layout::parse(keyword).unwrap_or_else(|| {
            tracing::debug!(keyword, "unknown layout keyword, using style default");
            token.default_layout
        }),
        None => token.default_layout,
    }
}

struct Palette {
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
    background: &'static str,
    font: &'static str,
    gradient_from: &'static str,
    gradient_to: &'static str,
}

const SANS: &str = "Inter, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif";
const SERIF: &str = "'Playfair Display', Georgia, 'Times New Roman', serif";

fn palette(style: StyleKeyword) -> Palette {
    match style {
        StyleKeyword::Minimal => Palette {
            primary: "#000000",
            secondary: "#ffffff",
            accent: "#666666",
            background: "#ffffff",
            font: SANS,
            gradient_from: "#000000",
            gradient_to: "#333333",
        },
        StyleKeyword::Colorful => Palette {
            primary: "#ff6b6b",
            secondary: "#4ecdc4",
            accent: "#45b7d1",
            background: "#f8f9fa",
            font: SANS,
            gradient_from: "#ff6b6b",
            gradient_to: "#4ecdc4",
        },
        StyleKeyword::Professional => Palette {
            primary: "#2c3e50",
            secondary: "#3498db",
            accent: "#e74c3c",
            background: "#ffffff",
            font: SERIF,
            gradient_from: "#2c3e50",
            gradient_to: "#3498db",
        },
        StyleKeyword::Playful => Palette {
            primary: "#e74c3c",
            secondary: "#f39c12",
            accent: "#9b59b6",
            background: "#ffeaa7",
            font: SANS,
            gradient_from: "#e74c3c",
            gradient_to: "#f39c12",
        },
    }
}
