//! Stylesheet synthesis.
//!
//! The stylesheet is assembled from:
//!
//! 1. `:root` custom properties bound to the [`StyleToken`], the layout and the
//!    animation intensity (`--animation-duration` et al.)
//! 2. `static/base.css`, embedded at compile time, which only reads variables
//! 3. layout rules for the resolved layout (centered / split / fullwidth)
//! 4. feature rules for the behaviors and flags that are on
//! 5. the fixed two-breakpoint responsive scheme
//! 6. the reduced-motion override, always last so it wins unconditionally
//!
//! [`StyleToken`]: crate::style::StyleToken

use crate::plan::PagePlan;
use crate::style::Layout;

const CSS_BASE: &str = include_str!("../static/base.css");

/// Breakpoints of the responsive scheme, in px.
pub const TABLET_BREAKPOINT: u32 = 768;
pub const PHONE_BREAKPOINT: u32 = 480;

/// Build the complete stylesheet for one plan.
pub fn synthesize_stylesheet(plan: &PagePlan) -> String {
    let mut parts = vec![
        generate_root_css(plan),
        CSS_BASE.trim_end().to_string(),
        generate_layout_css(plan.layout),
    ];

    let behaviors = &plan.behaviors;
    if behaviors.reveal {
        parts.push(REVEAL_CSS.to_string());
    }
    if behaviors.accordion {
        parts.push(ACCORDION_CSS.to_string());
    }
    if behaviors.carousel {
        parts.push(CAROUSEL_CSS.to_string());
    }
    if behaviors.lightbox {
        parts.push(LIGHTBOX_CSS.to_string());
    }
    if plan.flags.parallax {
        parts.push(PARALLAX_CSS.to_string());
    }
    if plan.flags.micro_interactions {
        parts.push(MICRO_CSS.to_string());
    }
    if behaviors.ripple {
        parts.push(RIPPLE_CSS.to_string());
    }

    parts.push(generate_responsive_css());
    parts.push(REDUCED_MOTION_CSS.to_string());
    parts.join("\n\n") + "\n"
}

/// Generate the `:root` custom properties for one plan.
pub fn generate_root_css(plan: &PagePlan) -> String {
    let token = &plan.token;
    let intensity = plan.flags.intensity;
    let content_width = match plan.layout {
        Layout::Centered | Layout::Split => "1200px",
        Layout::Fullwidth => "100%",
    };
    format!(
        r#":root {{
    --primary-color: {primary};
    --secondary-color: {secondary};
    --accent-color: {accent};
    --background-color: {background};
    --text-color: {primary};
    --on-gradient-color: #ffffff;
    --surface-color: #ffffff;
    --surface-muted: rgba(255, 255, 255, 0.5);
    --font-family: {font};
    --gradient: {gradient};
    --content-width: {content_width};
    --border-radius: 12px;
    --shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
    --shadow-strong: 0 15px 40px rgba(0, 0, 0, 0.2);
    --animation-duration: {duration};
    --reveal-distance: {distance};
    --reveal-scale: {scale};
    --counter-duration: 1.6s;
    --transition: all var(--animation-duration) cubic-bezier(0.4, 0, 0.2, 1);
}}"#,
        primary = token.primary,
        secondary = token.secondary,
        accent = token.accent,
        background = token.background,
        font = token.font,
        gradient = token.gradient,
        duration = intensity.duration(),
        distance = intensity.reveal_distance(),
        scale = intensity.reveal_scale(),
    )
}

/// Structural rules for the resolved layout only.
pub fn generate_layout_css(layout: Layout) -> String {
    match layout {
        Layout::Centered => r#"/* Layout: centered */
.hero-centered {
    text-align: center;
    flex-direction: column;
    justify-content: center;
}

.hero-centered .hero-description {
    margin-left: auto;
    margin-right: auto;
}

.hero-centered .hero-image {
    margin-top: 3rem;
    max-width: 720px;
}"#
        .to_string(),
        Layout::Split => r#"/* Layout: split */
.hero-split {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: center;
}

.hero-split .hero-content {
    text-align: left;
}"#
        .to_string(),
        Layout::Fullwidth => r#"/* Layout: fullwidth */
.container {
    padding: 0;
}

.hero-fullwidth {
    background: var(--gradient);
    color: var(--on-gradient-color);
    text-align: center;
    flex-direction: column;
    justify-content: center;
    padding: 80px 20px;
}

.hero-fullwidth .hero-title {
    color: var(--on-gradient-color);
    -webkit-text-fill-color: var(--on-gradient-color);
}

.hero-fullwidth .hero-description {
    margin-left: auto;
    margin-right: auto;
}

.benefits,
.stats,
.testimonials,
.faq,
.gallery {
    padding-left: 5vw;
    padding-right: 5vw;
}"#
        .to_string(),
    }
}

/// The fixed two-breakpoint responsive scheme.
pub fn generate_responsive_css() -> String {
    format!(
        r#"/* Responsive */
@media (max-width: {tablet}px) {{
    .hero-split {{
        grid-template-columns: 1fr;
        text-align: center;
    }}

    .hero-split .hero-content {{
        text-align: center;
    }}

    .benefits-grid,
    .testimonials-grid {{
        grid-template-columns: 1fr;
    }}

    .gallery-grid {{
        grid-template-columns: repeat(2, 1fr);
    }}
}}

@media (max-width: {phone}px) {{
    .container {{
        padding: 0 15px;
    }}

    .hero {{
        padding: 60px 0;
    }}

    .benefits,
    .stats,
    .testimonials,
    .faq,
    .gallery,
    .cta-section {{
        padding-top: 60px;
        padding-bottom: 60px;
    }}

    .gallery-grid {{
        grid-template-columns: 1fr;
    }}
}}"#,
        tablet = TABLET_BREAKPOINT,
        phone = PHONE_BREAKPOINT,
    )
}

const REVEAL_CSS: &str = r#"/* Reveal on scroll */
[data-animate] {
    opacity: 0;
    transform: translateY(var(--reveal-distance));
    transition: opacity var(--animation-duration) cubic-bezier(0.4, 0, 0.2, 1),
        transform var(--animation-duration) cubic-bezier(0.4, 0, 0.2, 1);
}

[data-animate].animate {
    opacity: 1;
    transform: none;
}

[data-animate="scale-up"] {
    transform: scale(var(--reveal-scale));
}"#;

const ACCORDION_CSS: &str = r#"/* Accordion */
[data-accordion] .faq-question {
    cursor: pointer;
}

[data-accordion] .faq-answer {
    max-height: 0;
    overflow: hidden;
    transition: max-height var(--animation-duration) ease;
}

[data-accordion] .faq-answer.active {
    max-height: 40rem;
}

[data-accordion] .faq-question.active .faq-icon {
    transform: rotate(45deg);
}"#;

const CAROUSEL_CSS: &str = r#"/* Carousel */
.carousel {
    position: relative;
    max-width: 760px;
    margin: 0 auto;
    padding: 0 3.5rem;
}

.carousel-slide {
    display: none;
}

.carousel-slide.active {
    display: block;
    animation: carousel-in var(--animation-duration) ease;
}

@keyframes carousel-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

.carousel-prev,
.carousel-next {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    width: 2.75rem;
    height: 2.75rem;
    border-radius: 50%;
    border: none;
    background: var(--primary-color);
    color: var(--on-gradient-color);
    font-size: 1.5rem;
    cursor: pointer;
}

.carousel-prev {
    left: 0;
}

.carousel-next {
    right: 0;
}

.carousel-indicators {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    margin-top: 1.5rem;
}

.carousel-indicator {
    width: 0.75rem;
    height: 0.75rem;
    border-radius: 50%;
    border: none;
    background: var(--accent-color);
    opacity: 0.35;
    cursor: pointer;
}

.carousel-indicator.active {
    opacity: 1;
}"#;

const LIGHTBOX_CSS: &str = r#"/* Lightbox */
.gallery-item.zoomable {
    cursor: zoom-in;
}

.lightbox {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.9);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1000;
}

.lightbox[hidden] {
    display: none;
}

.lightbox-image {
    max-width: 90vw;
    max-height: 85vh;
    border-radius: var(--border-radius);
}

.lightbox-close,
.lightbox-prev,
.lightbox-next {
    position: absolute;
    background: none;
    border: none;
    color: #ffffff;
    font-size: 2.5rem;
    cursor: pointer;
    padding: 0.5rem 1rem;
}

.lightbox-close {
    top: 1rem;
    right: 1rem;
}

.lightbox-prev {
    left: 1rem;
}

.lightbox-next {
    right: 1rem;
}"#;

const PARALLAX_CSS: &str = r#"/* Parallax */
.hero-parallax::before {
    background-attachment: fixed;
    background-size: 100% 100vh;
    opacity: 0.12;
}

.hero-fullwidth.hero-parallax {
    background-attachment: fixed;
    background-size: 100% 100vh;
}"#;

const MICRO_CSS: &str = r#"/* Micro-interactions */
.benefit-item:hover,
.testimonial-item:hover,
.stat-item:hover {
    transform: translateY(-5px);
    box-shadow: var(--shadow-strong);
}

.gallery-item:hover img {
    transform: scale(1.05);
}

.cta-button:active {
    transform: translateY(0) scale(0.98);
}"#;

const RIPPLE_CSS: &str = r#".ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.45);
    transform: scale(0);
    animation: ripple var(--animation-duration) linear;
    pointer-events: none;
}

@keyframes ripple {
    to {
        transform: scale(4);
        opacity: 0;
    }
}"#;

const REDUCED_MOTION_CSS: &str = r#"/* Reduced motion */
@media (prefers-reduced-motion: reduce) {
    :root {
        --animation-duration: 0s;
        --counter-duration: 0s;
    }

    html {
        scroll-behavior: auto;
    }

    *,
    *::before,
    *::after {
        animation-duration: 0s !important;
        animation-delay: 0s !important;
        animation-iteration-count: 1 !important;
        transition-duration: 0s !important;
        transition-delay: 0s !important;
    }

    [data-animate] {
        opacity: 1;
        transform: none;
    }
}"#;
