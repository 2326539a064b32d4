//! Section markup.
//!
//! One function per [`SectionKind`]. Optional sections return `None` when their
//! precondition fails (toggle off, or no non-blank content), and the document
//! assembler simply skips them: no placeholder containers are ever emitted.
//!
//! ## Behavior hooks
//!
//! Elements that a script behavior acts on carry `data-*` hooks. They are only
//! emitted when the matching behavior in [`crate::features::Behaviors`] is on,
//! so markup never references script code that is not shipped:
//!
//! | Hook | Behavior |
//! |------|----------|
//! | `data-animate`, `data-delay` | reveal on scroll, delay in ms |
//! | `data-accordion`, `data-faq-index` | FAQ accordion |
//! | `data-carousel`, `data-carousel-slide`, `data-carousel-prev/next/to` | testimonial carousel |
//! | `data-lightbox-index` | gallery tile opening the lightbox |
//! | `data-counter-target`, `data-counter-suffix` | stat counters |
//!
//! Every section root also carries a `data-section` marker naming its kind.

use crate::config::{PageConfig, Testimonial};
use crate::plan::PagePlan;
use crate::types::SectionKind;
use maud::{Markup, html};

/// Decorative benefit icons, assigned round-robin.
pub const BENEFIT_ICONS: [&str; 6] = ["✓", "🎯", "⚡", "🚀", "💎", "🏆"];

/// Reveal stagger quanta, milliseconds per item.
pub const BENEFIT_STAGGER_MS: usize = 100;
pub const STAT_STAGGER_MS: usize = 100;
pub const TESTIMONIAL_STAGGER_MS: usize = 150;
pub const FAQ_STAGGER_MS: usize = 100;
pub const GALLERY_STAGGER_MS: usize = 100;

/// Icon for the benefit at `index`, wrapping around the palette.
pub fn benefit_icon(index: usize) -> &'static str {
    BENEFIT_ICONS[index % BENEFIT_ICONS.len()]
}

/// Render one section, or `None` if it contributes nothing.
pub fn compose(kind: SectionKind, config: &PageConfig, plan: &PagePlan, year: i32) -> Option<Markup> {
    if !plan.includes(kind) {
        tracing::debug!(section = %kind, "section omitted");
        return None;
    }
    match kind {
        SectionKind::Hero => Some(hero(config, plan)),
        SectionKind::Benefits => benefits(config, plan),
        SectionKind::Stats => Some(stats(config, plan)),
        SectionKind::Testimonials => Some(testimonials(config, plan)),
        SectionKind::Faq => Some(faq(config, plan)),
        SectionKind::Gallery => Some(gallery(config, plan)),
        SectionKind::CallToAction => Some(call_to_action(config, plan)),
        SectionKind::Footer => Some(footer(config, year)),
    }
}

/// Every contributing section in document order.
pub fn compose_all(config: &PageConfig, plan: &PagePlan, year: i32) -> Vec<(SectionKind, Markup)> {
    plan.sections(config)
        .into_iter()
        .filter_map(|kind| compose(kind, config, plan, year).map(|m| (kind, m)))
        .collect()
}

/// `data-animate` value when reveal is on.
fn reveal(plan: &PagePlan, effect: &'static str) -> Option<&'static str> {
    plan.behaviors.reveal.then_some(effect)
}

/// `data-delay` value for the item at `index` when reveal is on.
fn stagger(plan: &PagePlan, index: usize, quantum_ms: usize) -> Option<usize> {
    plan.behaviors.reveal.then_some(index * quantum_ms)
}

// ============================================================================
// Mandatory sections
// ============================================================================

fn hero(config: &PageConfig, plan: &PagePlan) -> Markup {
    let mut class = format!("hero hero-{}", plan.layout.as_str());
    if plan.flags.parallax {
        class.push_str(" hero-parallax");
    }

    html! {
        header class=(class) data-section=(SectionKind::Hero.marker()) data-animate=[reveal(plan, "fade-up")] {
            div.hero-content {
                h1.hero-title { (config.product_name) }
                p.hero-description { (config.product_description) }
                div.hero-cta {
                    a.cta-button.primary href=(config.cta_link) target="_blank" rel="noopener" {
                        (config.call_to_action)
                    }
                }
            }
            @if let Some(image) = config.hero_image_ref() {
                div.hero-image {
                    img src=(image) alt=(config.product_name);
                }
            }
        }
    }
}

/// Benefits grid. `None` when no non-blank benefit exists.
fn benefits(config: &PageConfig, plan: &PagePlan) -> Option<Markup> {
    let items = config.visible_benefits();
    if items.is_empty() {
        tracing::debug!("no benefits, section omitted");
        return None;
    }

    Some(html! {
        section.benefits data-section=(SectionKind::Benefits.marker()) data-animate=[reveal(plan, "fade-up")] {
            h2.section-title { "Why choose " (config.product_name) "?" }
            div.benefits-grid {
                @for (index, benefit) in items.iter().enumerate() {
                    div.benefit-item
                        data-animate=[reveal(plan, "fade-up")]
                        data-delay=[stagger(plan, index, BENEFIT_STAGGER_MS)] {
                        div.benefit-icon aria-hidden="true" { (benefit_icon(index)) }
                        p.benefit-text { (benefit) }
                    }
                }
            }
        }
    })
}

fn call_to_action(config: &PageConfig, plan: &PagePlan) -> Markup {
    html! {
        section.cta-section data-section=(SectionKind::CallToAction.marker()) data-animate=[reveal(plan, "fade-up")] {
            h2.cta-title { "Ready to get started?" }
            a.cta-button href=(config.cta_link) target="_blank" rel="noopener" {
                (config.call_to_action)
            }
            @if let Some(contact) = config.contact_line() {
                p.contact-info { "Contact: " (contact) }
            }
        }
    }
}

/// Footer. `year` is the only wall-clock input of the whole engine.
fn footer(config: &PageConfig, year: i32) -> Markup {
    html! {
        footer.footer data-section=(SectionKind::Footer.marker()) {
            div.footer-content {
                p { "© " (year) " " (config.product_name) ". All rights reserved." }
            }
        }
    }
}

// ============================================================================
// Content sections
// ============================================================================

fn stats(config: &PageConfig, plan: &PagePlan) -> Markup {
    let counters = plan.behaviors.counters;

    html! {
        section.stats data-section=(SectionKind::Stats.marker()) data-animate=[reveal(plan, "fade-up")] {
            div.stats-grid {
                @for (index, stat) in config.visible_stats().into_iter().enumerate() {
                    div.stat-item
                        data-animate=[reveal(plan, "fade-up")]
                        data-delay=[stagger(plan, index, STAT_STAGGER_MS)] {
                        @if counters {
                            span.stat-value
                                data-counter-target=(stat.value)
                                data-counter-suffix=(stat.suffix) {
                                "0" (stat.suffix)
                            }
                        } @else {
                            span.stat-value { (stat.value) (stat.suffix) }
                        }
                        span.stat-label { (stat.label) }
                    }
                }
            }
        }
    }
}

fn testimonials(config: &PageConfig, plan: &PagePlan) -> Markup {
    let items = config.visible_testimonials();

    html! {
        section.testimonials data-section=(SectionKind::Testimonials.marker()) data-animate=[reveal(plan, "fade-up")] {
            h2.section-title { "What our customers say" }
            @if plan.behaviors.carousel {
                (carousel(&items))
            } @else {
                div.testimonials-grid {
                    @for (index, testimonial) in items.iter().enumerate() {
                        div.testimonial-item
                            data-animate=[reveal(plan, "fade-up")]
                            data-delay=[stagger(plan, index, TESTIMONIAL_STAGGER_MS)] {
                            (testimonial_card(testimonial))
                        }
                    }
                }
            }
        }
    }
}

/// Single-active-slide carousel. Slide 0 starts active.
fn carousel(items: &[&Testimonial]) -> Markup {
    html! {
        div.carousel data-carousel aria-roledescription="carousel" {
            div.carousel-track {
                @for (index, testimonial) in items.iter().enumerate() {
                    div.carousel-slide.active[index == 0]
                        data-carousel-slide=(index)
                        aria-hidden=(if index == 0 { "false" } else { "true" }) {
                        (testimonial_card(testimonial))
                    }
                }
            }
            button.carousel-prev type="button" data-carousel-prev aria-label="Previous testimonial" { "‹" }
            button.carousel-next type="button" data-carousel-next aria-label="Next testimonial" { "›" }
            div.carousel-indicators {
                @for index in 0..items.len() {
                    button.carousel-indicator.active[index == 0]
                        type="button"
                        data-carousel-to=(index)
                        aria-label={ "Show testimonial " (index + 1) } {}
                }
            }
        }
    }
}

fn testimonial_card(testimonial: &Testimonial) -> Markup {
    html! {
        blockquote.testimonial-text { "“" (testimonial.text) "”" }
        div.testimonial-author {
            strong { (testimonial.name) }
            @if !testimonial.role.trim().is_empty() {
                span { (testimonial.role) }
            }
        }
    }
}

/// FAQ entries. Entry `i` answers live in `#faq-{i}`.
///
/// Without the accordion behavior the answers render expanded; the collapsing
/// rules only apply under `[data-accordion]`.
fn faq(config: &PageConfig, plan: &PagePlan) -> Markup {
    let accordion = plan.behaviors.accordion;

    html! {
        section.faq data-section=(SectionKind::Faq.marker()) data-animate=[reveal(plan, "fade-up")] {
            h2.section-title { "Frequently asked questions" }
            div.faq-container data-accordion[accordion] {
                @for (index, entry) in config.visible_faq().into_iter().enumerate() {
                    div.faq-item
                        data-animate=[reveal(plan, "fade-up")]
                        data-delay=[stagger(plan, index, FAQ_STAGGER_MS)] {
                        button.faq-question
                            type="button"
                            id={ "faq-q-" (index) }
                            data-faq-index=[accordion.then_some(index)]
                            aria-controls={ "faq-" (index) }
                            aria-expanded=[accordion.then_some("false")] {
                            span { (entry.question) }
                            span.faq-icon aria-hidden="true" { "+" }
                        }
                        div.faq-answer id={ "faq-" (index) } role="region" aria-labelledby={ "faq-q-" (index) } {
                            p { (entry.answer) }
                        }
                    }
                }
            }
        }
    }
}

fn gallery(config: &PageConfig, plan: &PagePlan) -> Markup {
    let lightbox = plan.behaviors.lightbox;

    html! {
        section.gallery data-section=(SectionKind::Gallery.marker()) data-animate=[reveal(plan, "fade-up")] {
            h2.section-title { "Gallery" }
            div.gallery-grid {
                @for (index, image) in config.visible_gallery().into_iter().enumerate() {
                    figure.gallery-item.zoomable[lightbox]
                        data-animate=[reveal(plan, "scale-up")]
                        data-delay=[stagger(plan, index, GALLERY_STAGGER_MS)]
                        data-lightbox-index=[lightbox.then_some(index)]
                        role=[lightbox.then_some("button")]
                        tabindex=[lightbox.then_some(0)] {
                        img src=(image) alt={ "Gallery image " (index + 1) } loading="lazy";
                    }
                }
            }
        }
    }
}

/// Lightbox overlay, appended once after the sections when the lightbox ships.
pub fn lightbox_overlay() -> Markup {
    html! {
        div.lightbox id="lightbox" data-lightbox hidden role="dialog" aria-modal="true" aria-label="Image viewer" {
            button.lightbox-close type="button" data-lightbox-close aria-label="Close" { "×" }
            button.lightbox-prev type="button" data-lightbox-prev aria-label="Previous image" { "‹" }
            img.lightbox-image data-lightbox-image alt="";
            button.lightbox-next type="button" data-lightbox-next aria-label="Next image" { "›" }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
