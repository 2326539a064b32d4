//! Animation and interactivity flags as one value object.
//!
//! [`FeatureFlags`] is the only place that decides whether a page needs a
//! script at all. [`Behaviors`] narrows the flags down to the behaviors that
//! actually have markup to act on; both the section composer (which emits the
//! `data-*` hooks) and the behavior synthesizer (which reads them) consume the
//! same `Behaviors` value, so the two can never disagree.

use crate::config::PageConfig;

/// How pronounced reveal animations are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationIntensity {
    Subtle,
    #[default]
    Moderate,
    Dynamic,
}

impl AnimationIntensity {
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "subtle" => Some(AnimationIntensity::Subtle),
            "moderate" => Some(AnimationIntensity::Moderate),
            "dynamic" => Some(AnimationIntensity::Dynamic),
            _ => None,
        }
    }

    /// Lenient parse: unknown keywords are `Moderate`.
    pub fn resolve(keyword: &str) -> Self {
        Self::parse(keyword).unwrap_or_else(|| {
            tracing::debug!(keyword, "unknown animation intensity, using moderate");
            AnimationIntensity::Moderate
        })
    }

    /// Value of `--animation-duration`. Fixed mapping.
    pub fn duration(self) -> &'static str {
        match self {
            AnimationIntensity::Subtle => "0.3s",
            AnimationIntensity::Moderate => "0.6s",
            AnimationIntensity::Dynamic => "0.9s",
        }
    }

    /// Travel distance of a revealed element, `--reveal-distance`.
    pub fn reveal_distance(self) -> &'static str {
        match self {
            AnimationIntensity::Subtle => "12px",
            AnimationIntensity::Moderate => "30px",
            AnimationIntensity::Dynamic => "60px",
        }
    }

    /// Starting scale of `scale-up` reveals, `--reveal-scale`.
    pub fn reveal_scale(self) -> &'static str {
        match self {
            AnimationIntensity::Subtle => "0.97",
            AnimationIntensity::Moderate => "0.9",
            AnimationIntensity::Dynamic => "0.8",
        }
    }
}

/// Every animation/interactivity switch of one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureFlags {
    pub animations: bool,
    pub intensity: AnimationIntensity,
    pub carousel: bool,
    pub lightbox: bool,
    pub parallax: bool,
    pub counters: bool,
    pub micro_interactions: bool,
}

impl FeatureFlags {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            animations: config.animations,
            intensity: AnimationIntensity::resolve(&config.animation_intensity),
            carousel: config.features.carousel,
            lightbox: config.features.lightbox,
            parallax: config.features.parallax,
            counters: config.features.counters,
            micro_interactions: config.features.micro_interactions,
        }
    }

    /// Whether the page ships a script. Parallax is stylesheet-only.
    pub fn needs_script(&self) -> bool {
        self.animations
            || self.carousel
            || self.lightbox
            || self.counters
            || self.micro_interactions
    }
}

/// Script behaviors that will run on the page.
///
/// All false when [`FeatureFlags::needs_script`] is false. Otherwise each one
/// is on only if its flag is set and its markup is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Behaviors {
    pub script: bool,
    pub reveal: bool,
    pub accordion: bool,
    pub carousel: bool,
    pub lightbox: bool,
    pub counters: bool,
    pub ripple: bool,
}

/// Which content-bearing sections made it into the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presence {
    pub stats: bool,
    pub testimonials: bool,
    pub faq: bool,
    pub gallery: bool,
}

impl Behaviors {
    pub fn resolve(flags: &FeatureFlags, present: &Presence) -> Self {
        if !flags.needs_script() {
            return Behaviors::default();
        }
        Behaviors {
            script: true,
            reveal: flags.animations,
            // The accordion is not a flag of its own: it rides along whenever a
            // script ships and there is an FAQ to collapse.
            accordion: present.faq,
            carousel: flags.carousel && present.testimonials,
            lightbox: flags.lightbox && present.gallery,
            counters: flags.counters && present.stats,
            ripple: flags.micro_interactions,
        }
    }
}
