//! Per-image hover transition.
//!
//! Two uniforms are animated: `hover` (tint/intensity) and `progress` (the
//! reveal). Entering eases both toward 1. Leaving eases `hover` back to 0 but
//! drops `progress` to 0 at once, so the reveal never plays in reverse.

use crate::constants::HOVER_DURATION_SEC;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-in-out.
    Power2InOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let k = -2.0 * t + 2.0;
                    1.0 - k * k / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tween {
    from: f32,
    to: f32,
    start: f32,
    duration: f32,
    easing: Easing,
}

impl Tween {
    fn value_at(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (now - self.start) / self.duration;
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    fn is_running(&self, now: f32) -> bool {
        self.from != self.to && now < self.start + self.duration
    }
}

/// A scalar that is either at rest or following a tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedValue {
    rest: f32,
    tween: Option<Tween>,
}

impl AnimatedValue {
    pub const fn new(value: f32) -> Self {
        Self {
            rest: value,
            tween: None,
        }
    }

    pub fn sample(&self, now: f32) -> f32 {
        match &self.tween {
            Some(tw) => tw.value_at(now),
            None => self.rest,
        }
    }

    /// Starts a new tween from the current value, replacing any in flight.
    pub fn animate_to(&mut self, target: f32, now: f32, duration: f32, easing: Easing) {
        let from = self.sample(now);
        self.rest = target;
        self.tween = Some(Tween {
            from,
            to: target,
            start: now,
            duration,
            easing,
        });
    }

    /// Jumps to `value`, cancelling any tween.
    pub fn set(&mut self, value: f32) {
        self.rest = value;
        self.tween = None;
    }

    pub fn is_animating(&self, now: f32) -> bool {
        self.tween.map(|tw| tw.is_running(now)).unwrap_or(false)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Enter,
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverPhase {
    Idle,
    Entering,
    Hovered,
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HoverState {
    hover: AnimatedValue,
    progress: AnimatedValue,
    duration: f32,
    easing: Easing,
    last_event: Option<HoverEvent>,
}

impl Default for HoverState {
    fn default() -> Self {
        Self::new(HOVER_DURATION_SEC)
    }
}

impl HoverState {
    pub fn new(duration: f32) -> Self {
        Self {
            hover: AnimatedValue::new(0.0),
            progress: AnimatedValue::new(0.0),
            duration,
            easing: Easing::Power2InOut,
            last_event: None,
        }
    }

    /// Applies an enter/leave from any phase. The latest event wins.
    pub fn apply(&mut self, event: HoverEvent, now: f32) {
        match event {
            HoverEvent::Enter => {
                self.hover.animate_to(1.0, now, self.duration, self.easing);
                self.progress.animate_to(1.0, now, self.duration, self.easing);
            }
            HoverEvent::Leave => {
                self.hover.animate_to(0.0, now, self.duration, self.easing);
                self.progress.set(0.0);
            }
        }
        self.last_event = Some(event);
    }

    /// `(hover, progress)` at `now`, both within [0, 1].
    pub fn sample(&self, now: f32) -> (f32, f32) {
        (
            self.hover.sample(now).clamp(0.0, 1.0),
            self.progress.sample(now).clamp(0.0, 1.0),
        )
    }

    pub fn phase(&self, now: f32) -> HoverPhase {
        let moving = self.hover.is_animating(now);
        match (self.last_event, moving) {
            (None, _) => HoverPhase::Idle,
            (Some(HoverEvent::Enter), true) => HoverPhase::Entering,
            (Some(HoverEvent::Enter), false) => HoverPhase::Hovered,
            (Some(HoverEvent::Leave), true) => HoverPhase::Leaving,
            (Some(HoverEvent::Leave), false) => HoverPhase::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_and_midpoint() {
        let e = Easing::Power2InOut;
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(1.0), 1.0);
        assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(e.apply(-3.0), 0.0);
        assert_eq!(e.apply(7.0), 1.0);
    }

    #[test]
    fn enter_settles_in_one_second() {
        let mut h = HoverState::default();
        h.apply(HoverEvent::Enter, 2.0);
        assert_eq!(h.phase(2.5), HoverPhase::Entering);
        assert_eq!(h.sample(3.0), (1.0, 1.0));
        assert_eq!(h.phase(3.0), HoverPhase::Hovered);
    }

    #[test]
    fn leave_snaps_progress_but_eases_hover() {
        let mut h = HoverState::default();
        h.apply(HoverEvent::Enter, 0.0);
        h.apply(HoverEvent::Leave, 1.5);
        let (hover, progress) = h.sample(1.5);
        assert_eq!(progress, 0.0);
        assert_eq!(hover, 1.0);
        assert_eq!(h.phase(2.0), HoverPhase::Leaving);
        assert_eq!(h.sample(2.5), (0.0, 0.0));
        assert_eq!(h.phase(2.5), HoverPhase::Idle);
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(1.0, 0.0, 1.0, Easing::Linear);
        v.animate_to(0.0, 0.25, 1.0, Easing::Linear);
        assert!((v.sample(0.25) - 0.25).abs() < 1e-6);
        assert!((v.sample(0.75) - 0.125).abs() < 1e-6);
    }

    #[test]
    fn leave_without_enter_stays_idle() {
        let mut h = HoverState::default();
        h.apply(HoverEvent::Leave, 0.0);
        assert_eq!(h.phase(0.0), HoverPhase::Idle);
        assert_eq!(h.phase(0.5), HoverPhase::Idle);
        assert_eq!(h.sample(0.5), (0.0, 0.0));
    }

    #[test]
    fn enter_while_hovered_reports_hovered() {
        let mut h = HoverState::default();
        h.apply(HoverEvent::Enter, 0.0);
        h.apply(HoverEvent::Enter, 2.0);
        assert_eq!(h.phase(2.5), HoverPhase::Hovered);
    }
}
