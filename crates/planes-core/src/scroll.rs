use crate::constants::{
    SCROLL_EASE, SCROLL_SNAP_EPSILON, SCROLL_SPEED_SMOOTHING, SCROLL_VELOCITY_MAX,
    SCROLL_VELOCITY_NORM,
};

/// Scroll position/velocity source. `advance` runs exactly once per frame.
pub trait ScrollProvider {
    fn advance(&mut self);
    /// Rendered offset in pixels; grows as the page scrolls down.
    fn offset(&self) -> f32;
    /// Smoothed, signed velocity (negative while scrolling back up).
    fn velocity(&self) -> f32;
}

/// Offsets around a scroll-limit change. `applied` is what the content is
/// still translated by when the DOM is measured; `clamped` is where rendering
/// resumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LimitChange {
    pub applied: f32,
    pub clamped: f32,
}

impl LimitChange {
    /// Document-space top of a box measured while the content sits at
    /// `applied`.
    #[inline]
    pub fn document_top(&self, client_top: f32) -> f32 {
        client_top + self.applied
    }
}

/// Eased virtual scroll driven by wheel deltas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SmoothScroll {
    target: f32,
    current: f32,
    limit: f32,
    speed: f32,
}

impl SmoothScroll {
    pub fn new(limit: f32) -> Self {
        Self {
            limit: limit.max(0.0),
            ..Self::default()
        }
    }

    pub fn add_delta(&mut self, delta: f32) {
        if delta.is_finite() {
            self.target = (self.target + delta).clamp(0.0, self.limit);
        }
    }

    /// Updates the scrollable range (content height minus viewport height).
    pub fn set_limit(&mut self, limit: f32) -> LimitChange {
        let applied = self.current;
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.current = self.current.clamp(0.0, self.limit);
        LimitChange {
            applied,
            clamped: self.current,
        }
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn limit(&self) -> f32 {
        self.limit
    }
}

impl ScrollProvider for SmoothScroll {
    fn advance(&mut self) {
        let previous = self.current;
        let diff = self.target - self.current;
        if diff.abs() < SCROLL_SNAP_EPSILON {
            self.current = self.target;
        } else {
            self.current += diff * SCROLL_EASE;
        }
        let delta = self.current - previous;
        self.speed += (delta - self.speed) * SCROLL_SPEED_SMOOTHING;
    }

    fn offset(&self) -> f32 {
        self.current
    }

    fn velocity(&self) -> f32 {
        (self.speed / SCROLL_VELOCITY_NORM).clamp(-SCROLL_VELOCITY_MAX, SCROLL_VELOCITY_MAX)
    }
}
