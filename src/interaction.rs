//! Interaction state machines.
//!
//! The behavior script runs later, inside the rendered page. Its state
//! machines are modelled here as plain values with pure transitions so their
//! rules can be tested without a browser; `static/*.js` implements the same
//! transitions over the DOM.

/// One revealable element. Revealed at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Hidden,
    Revealed,
}

impl Reveal {
    /// Intersection callback. Leaving the viewport never hides it again.
    pub fn on_intersection(self, intersecting: bool) -> Self {
        match (self, intersecting) {
            (Reveal::Hidden, true) => Reveal::Revealed,
            (state, _) => state,
        }
    }
}

/// FAQ accordion: at most one entry open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accordion {
    #[default]
    Closed,
    Open(usize),
}

impl Accordion {
    /// Click on entry `index`: opens it and closes any other, or closes it if
    /// it was the open one.
    pub fn toggle(self, index: usize) -> Self {
        match self {
            Accordion::Open(open) if open == index => Accordion::Closed,
            _ => Accordion::Open(index),
        }
    }

    pub fn is_open(self, index: usize) -> bool {
        self == Accordion::Open(index)
    }
}

/// Testimonial carousel over `len` slides, exactly one active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    active: usize,
    len: usize,
}

impl Carousel {
    /// `None` for an empty carousel, which is never rendered.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Carousel { active: 0, len })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn next(self) -> Self {
        Carousel {
            active: (self.active + 1) % self.len,
            ..self
        }
    }

    pub fn previous(self) -> Self {
        Carousel {
            active: (self.active + self.len - 1) % self.len,
            ..self
        }
    }

    /// Indicator click. Out-of-range indices leave the state unchanged.
    pub fn go_to(self, index: usize) -> Self {
        if index < self.len {
            Carousel {
                active: index,
                ..self
            }
        } else {
            self
        }
    }
}

/// What a click inside the open lightbox landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxTarget {
    Image,
    CloseControl,
    Backdrop,
}

/// Gallery lightbox over `len` images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lightbox {
    Closed,
    Open(usize),
}

impl Lightbox {
    pub fn open(index: usize, len: usize) -> Self {
        if index < len {
            Lightbox::Open(index)
        } else {
            Lightbox::Closed
        }
    }

    pub fn next(self, len: usize) -> Self {
        match self {
            Lightbox::Open(i) if len > 0 => Lightbox::Open((i + 1) % len),
            other => other,
        }
    }

    pub fn previous(self, len: usize) -> Self {
        match self {
            Lightbox::Open(i) if len > 0 => Lightbox::Open((i + len - 1) % len),
            other => other,
        }
    }

    /// Clicking the displayed image keeps it open; the close control or the
    /// backdrop closes it.
    pub fn click(self, target: LightboxTarget) -> Self {
        match target {
            LightboxTarget::Image => self,
            LightboxTarget::CloseControl | LightboxTarget::Backdrop => Lightbox::Closed,
        }
    }
}

/// A stat counter that counts up once, the first time it is seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Counter {
    #[default]
    Idle,
    Running,
    Done,
}

impl Counter {
    pub fn on_visible(self) -> Self {
        match self {
            Counter::Idle => Counter::Running,
            other => other,
        }
    }

    pub fn on_finished(self) -> Self {
        match self {
            Counter::Running => Counter::Done,
            other => other,
        }
    }

    /// Displayed value at `progress` in `[0, 1]`, eased out, never above `target`.
    pub fn value_at(target: u32, progress: f64) -> u32 {
        let t = progress.clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        (f64::from(target) * eased).round().min(f64::from(target)) as u32
    }
}

/// Required-field guard: submission proceeds only if no required field is blank.
pub fn form_may_submit<'a>(required_values: impl IntoIterator<Item = &'a str>) -> bool {
    required_values.into_iter().all(|v| !v.trim().is_empty())
}
