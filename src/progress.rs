/// Fraction of the document scrolled, in `[0, 1]`.
///
/// Returns 0 when the document is no taller than the viewport.
pub fn scroll_ratio(offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let span = scroll_height - viewport_height;
    if !offset.is_finite() || !span.is_finite() || span <= 0.0 {
        return 0.0;
    }
    (offset / span).clamp(0.0, 1.0)
}

// Frame gaps longer than this (e.g. a backgrounded tab) are treated as this long.
const MAX_FRAME_SECS: f64 = 0.064;
const SUBSTEP_SECS: f64 = 1.0 / 120.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpringState {
    pub position: f64,
    pub velocity: f64,
}

impl SpringState {
    pub fn is_resting(&self, target: f64, spring: &Spring) -> bool {
        (target - self.position).abs() < spring.rest_delta
            && self.velocity.abs() < spring.rest_delta
    }
}

impl Spring {
    /// Advances `state` toward `target` by `dt_secs`.
    pub fn step(&self, state: &mut SpringState, target: f64, dt_secs: f64) {
        if state.is_resting(target, self) {
            state.position = target;
            state.velocity = 0.0;
            return;
        }
        let mut remaining = dt_secs.clamp(0.0, MAX_FRAME_SECS);
        while remaining > 0.0 {
            let dt = remaining.min(SUBSTEP_SECS);
            let force =
                -self.stiffness * (state.position - target) - self.damping * state.velocity;
            state.velocity += force / self.mass * dt;
            state.position += state.velocity * dt;
            remaining -= dt;
        }
        if state.is_resting(target, self) {
            state.position = target;
            state.velocity = 0.0;
        }
    }
}
