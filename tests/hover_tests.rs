// Host-side tests for the hover transition.

use planes_core::{HoverEvent, HoverPhase, HoverState};

#[test]
fn enter_then_immediate_leave() {
    let mut h = HoverState::default();
    h.apply(HoverEvent::Enter, 0.0);
    h.apply(HoverEvent::Leave, 0.3);

    let (hover_at_leave, progress) = h.sample(0.3);
    assert_eq!(progress, 0.0);
    assert!(hover_at_leave > 0.0 && hover_at_leave < 1.0);

    // hover eases down from where it was, progress stays at zero
    let mut last = hover_at_leave;
    for i in 1..=20 {
        let (hover, progress) = h.sample(0.3 + i as f32 * 0.05);
        assert!(hover <= last + 1e-6);
        assert_eq!(progress, 0.0);
        last = hover;
    }
    assert_eq!(h.sample(1.5), (0.0, 0.0));
    assert_eq!(h.phase(1.5), HoverPhase::Idle);
}

#[test]
fn rapid_toggling_stays_in_range() {
    let mut h = HoverState::default();
    let mut now = 0.0_f32;
    for i in 0..200 {
        let event = if i % 2 == 0 {
            HoverEvent::Enter
        } else {
            HoverEvent::Leave
        };
        h.apply(event, now);
        now += 0.013;
        let (hover, progress) = h.sample(now);
        assert!((0.0..=1.0).contains(&hover));
        assert!((0.0..=1.0).contains(&progress));
    }
}

#[test]
fn full_enter_reaches_one() {
    let mut h = HoverState::default();
    h.apply(HoverEvent::Enter, 2.0);
    assert_eq!(h.phase(2.5), HoverPhase::Entering);
    assert_eq!(h.sample(3.0), (1.0, 1.0));
    assert_eq!(h.phase(3.0), HoverPhase::Hovered);
}
