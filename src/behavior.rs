//! Client-side behavior script synthesis.
//!
//! The script is assembled from fixed fragments in `static/`, compiled into
//! the binary. Which fragments ship is decided entirely by [`Behaviors`]: a
//! page with no scripted behavior gets an empty script, and each fragment is
//! included only if the markup carries the `data-*` hooks it binds to.
//!
//! The required-field guard is the one exception to hook gating. The generator
//! never emits a `<form>`; the guard listens on the document so forms an
//! author adds to the delivered page are covered whenever a script ships.
//!
//! All fragments live inside one strict-mode IIFE. Durations are never baked
//! in here: the counter reads `--counter-duration` from the stylesheet at run
//! time, and reveal stagger comes from each element's `data-delay`.

use std::fmt;

use crate::features::Behaviors;

const JS_PRELUDE: &str = include_str!("../static/prelude.js");
const JS_REVEAL: &str = include_str!("../static/reveal.js");
const JS_ACCORDION: &str = include_str!("../static/accordion.js");
const JS_CAROUSEL: &str = include_str!("../static/carousel.js");
const JS_LIGHTBOX: &str = include_str!("../static/lightbox.js");
const JS_COUNTERS: &str = include_str!("../static/counters.js");
const JS_RIPPLE: &str = include_str!("../static/ripple.js");
const JS_FORMS: &str = include_str!("../static/forms.js");

/// One fragment of the behavior script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptModule {
    Reveal,
    Accordion,
    Carousel,
    Lightbox,
    Counters,
    Ripple,
    /// Document-level guard for author-added forms. Ships with every script.
    Forms,
}

impl ScriptModule {
    fn source(self) -> &'static str {
        match self {
            ScriptModule::Reveal => JS_REVEAL,
            ScriptModule::Accordion => JS_ACCORDION,
            ScriptModule::Carousel => JS_CAROUSEL,
            ScriptModule::Lightbox => JS_LIGHTBOX,
            ScriptModule::Counters => JS_COUNTERS,
            ScriptModule::Ripple => JS_RIPPLE,
            ScriptModule::Forms => JS_FORMS,
        }
    }

    /// Name of the function the fragment defines and the ready hook calls.
    fn init_fn(self) -> &'static str {
        match self {
            ScriptModule::Reveal => "initReveal",
            ScriptModule::Accordion => "initAccordion",
            ScriptModule::Carousel => "initCarousels",
            ScriptModule::Lightbox => "initLightbox",
            ScriptModule::Counters => "initCounters",
            ScriptModule::Ripple => "initRipple",
            ScriptModule::Forms => "initForms",
        }
    }
}

impl fmt::Display for ScriptModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScriptModule::Reveal => "reveal",
            ScriptModule::Accordion => "accordion",
            ScriptModule::Carousel => "carousel",
            ScriptModule::Lightbox => "lightbox",
            ScriptModule::Counters => "counters",
            ScriptModule::Ripple => "ripple",
            ScriptModule::Forms => "forms",
        };
        f.write_str(name)
    }
}

/// Fragments that ship for `behaviors`, in script order. Empty iff no script.
pub fn script_modules(behaviors: &Behaviors) -> Vec<ScriptModule> {
    if !behaviors.script {
        return Vec::new();
    }
    [
        (behaviors.reveal, ScriptModule::Reveal),
        (behaviors.accordion, ScriptModule::Accordion),
        (behaviors.carousel, ScriptModule::Carousel),
        (behaviors.lightbox, ScriptModule::Lightbox),
        (behaviors.counters, ScriptModule::Counters),
        (behaviors.ripple, ScriptModule::Ripple),
        (true, ScriptModule::Forms),
    ]
    .into_iter()
    .filter_map(|(on, module)| on.then_some(module))
    .collect()
}

/// Build the page script. Returns an empty string when nothing is scripted.
pub fn synthesize_script(behaviors: &Behaviors) -> String {
    let modules = script_modules(behaviors);
    if modules.is_empty() {
        return String::new();
    }

    let mut script = String::from(JS_PRELUDE);
    for module in &modules {
        script.push_str(module.source());
    }
    script.push_str("\n    ready(function () {\n");
    for module in &modules {
        script.push_str("        ");
        script.push_str(module.init_fn());
        script.push_str("();\n");
    }
    script.push_str("    });\n})();\n");
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted() -> Behaviors {
        Behaviors {
            script: true,
            ..Behaviors::default()
        }
    }

    // =========================================================================
    // Gating
    // =========================================================================

    #[test]
    fn no_script_behaviors_yield_empty_script() {
        assert_eq!(synthesize_script(&Behaviors::default()), "");
        assert!(script_modules(&Behaviors::default()).is_empty());
    }

    #[test]
    fn any_script_carries_forms_guard() {
        let script = synthesize_script(&scripted());
        assert!(script.contains("function initForms"));
        assert!(script.contains("initForms();"));
        assert!(script.contains("document.addEventListener('submit'"));
        assert!(!script.contains("initReveal"));
        assert!(!script.contains("initCarousels"));
    }

    #[test]
    fn disabled_modules_are_absent() {
        let behaviors = Behaviors {
            reveal: true,
            ripple: true,
            ..scripted()
        };
        let script = synthesize_script(&behaviors);
        assert!(script.contains("initReveal();"));
        assert!(script.contains("initRipple();"));
        assert!(!script.contains("[data-carousel]"));
        assert!(!script.contains("[data-lightbox]"));
        assert!(!script.contains("[data-counter-target]"));
        assert!(!script.contains("[data-accordion]"));
    }

    #[test]
    fn full_behaviors_include_every_module_in_order() {
        let behaviors = Behaviors {
            script: true,
            reveal: true,
            accordion: true,
            carousel: true,
            lightbox: true,
            counters: true,
            ripple: true,
        };
        let modules = script_modules(&behaviors);
        assert_eq!(
            modules,
            vec![
                ScriptModule::Reveal,
                ScriptModule::Accordion,
                ScriptModule::Carousel,
                ScriptModule::Lightbox,
                ScriptModule::Counters,
                ScriptModule::Ripple,
                ScriptModule::Forms,
            ]
        );
        let script = synthesize_script(&behaviors);
        for module in modules {
            assert!(script.contains(&format!("function {}", module.init_fn())));
            assert!(script.contains(&format!("{}();", module.init_fn())));
        }
    }

    // =========================================================================
    // Shape
    // =========================================================================

    #[test]
    fn script_is_a_single_strict_iife() {
        let script = synthesize_script(&scripted());
        assert!(script.starts_with("(function () {\n    'use strict';"));
        assert!(script.trim_end().ends_with("})();"));
        assert_eq!(script.matches("'use strict'").count(), 1);
        assert_eq!(script.matches("})();").count(), 1);
    }

    #[test]
    fn counters_read_duration_from_stylesheet() {
        let behaviors = Behaviors {
            counters: true,
            ..scripted()
        };
        let script = synthesize_script(&behaviors);
        assert!(script.contains("cssTimeMs('--counter-duration'"));
        assert!(script.contains("unobserve"));
    }

    #[test]
    fn reveal_uses_element_delay() {
        let behaviors = Behaviors {
            reveal: true,
            ..scripted()
        };
        let script = synthesize_script(&behaviors);
        assert!(script.contains("el.dataset.delay"));
        assert!(script.contains("classList.add('animate')"));
    }

    #[test]
    fn lightbox_closes_only_on_backdrop_target() {
        let behaviors = Behaviors {
            lightbox: true,
            ..scripted()
        };
        let script = synthesize_script(&behaviors);
        assert!(script.contains("e.target === overlay"));
        assert!(script.contains("[data-lightbox-close]"));
    }

    #[test]
    fn module_names_display() {
        assert_eq!(ScriptModule::Counters.to_string(), "counters");
        assert_eq!(ScriptModule::Forms.to_string(), "forms");
    }
}
