//! Entrance animations, expressed as CSS transitions.
//!
//! An element starts in its initial pose (faded out, offset, maybe scaled
//! down) and transitions to its resting pose once revealed. Nothing here
//! affects pointer events, so content is interactive mid-animation.

/// Stagger between cards in a list, in seconds.
pub const CARD_STAGGER: f64 = 0.2;
/// Stagger between social links, in seconds.
pub const LINK_STAGGER: f64 = 0.1;

/// Share of an element that must be on screen before an in-view entrance plays.
pub const IN_VIEW_THRESHOLD: f64 = 0.3;

const DEFAULT_DURATION: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Reveal as soon as the element is mounted.
    Mount,
    /// Reveal the first time the element scrolls into view.
    InView,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub delay: f64,
    pub duration: f64,
    pub trigger: Trigger,
}

impl Default for Entrance {
    fn default() -> Self {
        Self::fade_up()
    }
}

impl Entrance {
    pub fn fade_up() -> Self {
        Self::offset(0.0, 20.0)
    }

    pub fn from_left() -> Self {
        Self::offset(-20.0, 0.0)
    }

    pub fn from_right() -> Self {
        Self::offset(20.0, 0.0)
    }

    /// Grows in from 80%.
    pub fn pop() -> Self {
        Self {
            scale: 0.8,
            ..Self::offset(0.0, 0.0)
        }
    }

    fn offset(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            scale: 1.0,
            delay: 0.0,
            duration: DEFAULT_DURATION,
            trigger: Trigger::Mount,
        }
    }

    pub fn rise(self, y: f64) -> Self {
        Self { y, ..self }
    }

    pub fn delay(self, secs: f64) -> Self {
        Self { delay: secs, ..self }
    }

    pub fn in_view(self) -> Self {
        Self {
            trigger: Trigger::InView,
            ..self
        }
    }

    /// Adds `index * step` seconds on top of the current delay.
    pub fn staggered(self, index: usize, step: f64) -> Self {
        Self {
            delay: self.delay + index as f64 * step,
            ..self
        }
    }

    /// Whether an element showing `visible_ratio` of itself should play.
    pub fn reveals_at(&self, visible_ratio: f64) -> bool {
        match self.trigger {
            Trigger::Mount => true,
            Trigger::InView => visible_ratio >= IN_VIEW_THRESHOLD,
        }
    }

    /// Inline style for the hidden or revealed pose.
    pub fn style(&self, revealed: bool) -> String {
        let transition = format!(
            "transition: opacity {d:.2}s ease-out {delay:.2}s, transform {d:.2}s cubic-bezier(0.34, 1.3, 0.64, 1) {delay:.2}s;",
            d = self.duration,
            delay = self.delay,
        );
        if revealed {
            format!("opacity: 1; transform: none; {transition}")
        } else {
            format!(
                "opacity: 0; transform: translate({}px, {}px) scale({}); {transition}",
                self.x, self.y, self.scale
            )
        }
    }
}
