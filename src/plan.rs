//! The composition plan: everything resolved once per generation call.
//!
//! Resolution happens here and nowhere else. Section, stylesheet and script
//! synthesis only read a [`PagePlan`], which keeps the four outputs in step.

use crate::config::PageConfig;
use crate::features::{Behaviors, FeatureFlags, Presence};
use crate::style::{Layout, StyleToken, resolve_layout, resolve_style};
use crate::types::SectionKind;

#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    pub token: StyleToken,
    pub layout: Layout,
    pub flags: FeatureFlags,
    pub present: Presence,
    pub behaviors: Behaviors,
}

impl PagePlan {
    pub fn resolve(config: &PageConfig) -> Self {
        let token = resolve_style(&config.style, &config.colors);
        let layout = resolve_layout(config.layout.as_deref(), &token);
        let flags = FeatureFlags::from_config(config);
        let present = Presence {
            stats: !config.visible_stats().is_empty(),
            testimonials: config.sections.testimonials
                && !config.visible_testimonials().is_empty(),
            faq: config.sections.faq && !config.visible_faq().is_empty(),
            gallery: config.sections.gallery && !config.visible_gallery().is_empty(),
        };
        let behaviors = Behaviors::resolve(&flags, &present);
        tracing::debug!(
            ?layout,
            script = behaviors.script,
            ?present,
            "resolved page plan"
        );
        Self {
            token,
            layout,
            flags,
            present,
            behaviors,
        }
    }

    /// Whether a section contributes markup. Benefits still depends on content
    /// and is decided by the composer.
    pub fn includes(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Stats => self.present.stats,
            SectionKind::Testimonials => self.present.testimonials,
            SectionKind::Faq => self.present.faq,
            SectionKind::Gallery => self.present.gallery,
            SectionKind::Hero
            | SectionKind::Benefits
            | SectionKind::CallToAction
            | SectionKind::Footer => true,
        }
    }

    /// Sections that will appear on the page, in document order.
    pub fn sections(&self, config: &PageConfig) -> Vec<SectionKind> {
        SectionKind::ALL
            .into_iter()
            .filter(|&kind| match kind {
                SectionKind::Benefits => !config.visible_benefits().is_empty(),
                other => self.includes(other),
            })
            .collect()
    }

    /// The lightbox overlay ships iff the gallery is on the page with lightbox enabled.
    pub fn has_lightbox_overlay(&self) -> bool {
        self.behaviors.lightbox
    }
}
