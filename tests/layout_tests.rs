// Host-side tests for mapping DOM boxes onto plane positions.

use planes_core::{plane_position, BoundingBox, ScrollProvider, SmoothScroll, ViewportState};

#[test]
fn end_to_end_example_box() {
    let viewport = ViewportState::new(1000.0, 800.0, 1.0);
    let bbox = BoundingBox {
        top: 100.0,
        left: 50.0,
        width: 200.0,
        height: 300.0,
    };
    let p = plane_position(&bbox, None, &viewport, 0.0);
    assert_eq!(p.x, -350.0);
    assert_eq!(p.y, 150.0);
}

#[test]
fn scrolling_moves_planes_up_one_to_one() {
    let viewport = ViewportState::new(1000.0, 800.0, 1.0);
    let bbox = BoundingBox {
        top: 900.0,
        left: 0.0,
        width: 100.0,
        height: 100.0,
    };
    let a = plane_position(&bbox, None, &viewport, 0.0);
    let b = plane_position(&bbox, None, &viewport, 250.0);
    assert_eq!(b.y - a.y, 250.0);
    assert_eq!(a.x, b.x);
}

#[test]
fn width_attribute_shifts_horizontal_centre() {
    let viewport = ViewportState::new(1000.0, 800.0, 1.0);
    let bbox = BoundingBox {
        top: 0.0,
        left: 0.0,
        width: 200.0,
        height: 100.0,
    };
    let with_attr = plane_position(&bbox, Some(400.0), &viewport, 0.0);
    assert_eq!(with_attr.x, -300.0);
}

#[test]
fn positions_are_deterministic() {
    let viewport = ViewportState::new(1440.0, 900.0, 2.0);
    let bbox = BoundingBox {
        top: 1234.5,
        left: 77.25,
        width: 333.0,
        height: 222.0,
    };
    let first = plane_position(&bbox, Some(320.0), &viewport, 512.75);
    for _ in 0..10 {
        assert_eq!(plane_position(&bbox, Some(320.0), &viewport, 512.75), first);
    }
}

#[test]
fn shrinking_scroll_limit_keeps_planes_on_their_images() {
    let viewport = ViewportState::new(1000.0, 800.0, 1.0);
    let mut scroll = SmoothScroll::new(3000.0);
    scroll.add_delta(2000.0);
    for _ in 0..300 {
        scroll.advance();
    }
    let document_top = 2500.0;
    // what getBoundingClientRect reports while translated by -2000
    let client_top = document_top - scroll.offset();

    let change = scroll.set_limit(1500.0);
    let bbox = BoundingBox {
        top: change.document_top(client_top),
        left: 0.0,
        width: 200.0,
        height: 200.0,
    };
    assert_eq!(bbox.top, document_top);

    let p = plane_position(&bbox, None, &viewport, change.clamped);
    assert_eq!(p.y, 1500.0 - 2500.0 + 400.0 - 100.0);
}
