// Host-side tests for the per-frame pipeline and mesh rebuilds.

mod common;

use common::{image, CountingFactory, RecordingRenderer, SteppingScroll};
use planes_core::{HoverEvent, HoverPhase, ImageId, PlaneScene, SceneEvent, StaticImage, ViewportState};

fn three_images() -> Vec<StaticImage> {
    vec![
        image(100.0, 50.0, 200.0, 300.0),
        image(500.0, 400.0, 200.0, 200.0),
        image(900.0, 100.0, 300.0, 150.0),
    ]
}

#[test]
fn resize_rebuilds_exactly_one_mesh_per_image() {
    let mut factory = CountingFactory::default();
    let mut scene = PlaneScene::new(ViewportState::new(1000.0, 800.0, 1.0));
    let images = three_images();
    assert_eq!(
        scene.resize(ViewportState::new(1000.0, 800.0, 1.0), &images, &mut factory, 0.0),
        3
    );
    let before: Vec<_> = scene.records().iter().map(|r| r.position).collect();

    // layout changed: every image moved down by 40px
    let moved: Vec<_> = images
        .iter()
        .map(|s| image(s.bbox.top + 40.0, s.bbox.left, s.bbox.width, s.bbox.height))
        .collect();
    scene.resize(ViewportState::new(1200.0, 800.0, 1.0), &moved, &mut factory, 0.0);

    assert_eq!(scene.records().len(), 3);
    assert_eq!(factory.created, 6);
    assert_eq!(factory.released, vec![1, 2, 3]);
    let handles: Vec<_> = scene.records().iter().map(|r| r.handle).collect();
    assert_eq!(handles, vec![4, 5, 6]);
    for (old, rec) in before.iter().zip(scene.records()) {
        assert_eq!(rec.position.y, old.y - 40.0);
        assert_eq!(rec.position.x, old.x - 100.0);
    }
}

#[test]
fn empty_scene_renders_post_pass() {
    let mut factory = CountingFactory::default();
    let mut renderer = RecordingRenderer::default();
    let mut scroll = SteppingScroll::new(0.0);
    let mut scene = PlaneScene::new(ViewportState::new(800.0, 600.0, 1.0));
    let none: [StaticImage; 0] = [];
    scene.resize(ViewportState::new(800.0, 600.0, 1.0), &none, &mut factory, 0.0);
    assert!(scene.frame(0.25, &mut scroll, &mut renderer).is_ok());
    assert_eq!(renderer.frames.len(), 1);
    assert!(renderer.frames[0].positions.is_empty());
    assert_eq!(renderer.frames[0].post_time, 0.25);
}

#[test]
fn renderer_sees_positions_after_scroll_advance() {
    let mut factory = CountingFactory::default();
    let mut renderer = RecordingRenderer::default();
    let mut scroll = SteppingScroll::new(100.0);
    let viewport = ViewportState::new(1000.0, 800.0, 1.0);
    let mut scene = PlaneScene::new(viewport);
    scene.resize(viewport, &three_images()[..1], &mut factory, 0.0);
    assert_eq!(scene.records()[0].position.y, 150.0);

    scene.frame(0.0, &mut scroll, &mut renderer).unwrap();
    let f = &renderer.frames[0];
    assert_eq!(f.positions[0].y, 250.0);
    assert_eq!(f.offsets[0], [-350.0, 250.0]);
    // velocity is read before the advance
    assert_eq!(f.post_speed, 0.0);

    scene.frame(0.016, &mut scroll, &mut renderer).unwrap();
    assert_eq!(renderer.frames[1].post_speed, 1.0);
    assert_eq!(renderer.frames[1].positions[0].y, 350.0);
}

#[test]
fn pointer_writes_uv_of_plane_under_it() {
    let mut factory = CountingFactory::default();
    let mut renderer = RecordingRenderer::default();
    let mut scroll = SteppingScroll::new(0.0);
    let viewport = ViewportState::new(1000.0, 800.0, 1.0);
    let mut scene = PlaneScene::new(viewport);
    // centred 200x200 image plus one far below the fold
    let images = [image(300.0, 400.0, 200.0, 200.0), image(2000.0, 0.0, 100.0, 100.0)];
    scene.resize(viewport, &images, &mut factory, 0.0);

    scene.handle_events([SceneEvent::PointerMove { x: 550.0, y: 350.0 }], 0.0);
    scene.frame(0.0, &mut scroll, &mut renderer).unwrap();

    assert_eq!(scene.last_hit(), Some(ImageId(0)));
    let uv = scene.records()[0].material.uniforms.pointer_uv;
    assert!((uv[0] - 0.75).abs() < 1e-3, "{uv:?}");
    assert!((uv[1] - 0.75).abs() < 1e-3, "{uv:?}");
    assert_eq!(scene.records()[1].material.uniforms.pointer_uv, [0.5, 0.5]);

    // moving off every plane leaves the last written value alone
    scene.handle_events([SceneEvent::PointerMove { x: 5.0, y: 5.0 }], 0.0);
    scene.frame(0.016, &mut scroll, &mut renderer).unwrap();
    assert_eq!(scene.last_hit(), None);
    assert_eq!(scene.records()[0].material.uniforms.pointer_uv, uv);
}

#[test]
fn hover_events_drive_material_uniforms() {
    let mut factory = CountingFactory::default();
    let mut renderer = RecordingRenderer::default();
    let mut scroll = SteppingScroll::new(0.0);
    let viewport = ViewportState::new(1000.0, 800.0, 1.0);
    let mut scene = PlaneScene::new(viewport);
    scene.resize(viewport, &three_images(), &mut factory, 0.0);

    let events = [
        SceneEvent::Hover {
            image: ImageId(1),
            event: HoverEvent::Enter,
        },
        SceneEvent::Hover {
            image: ImageId(42),
            event: HoverEvent::Enter,
        },
    ];
    assert_eq!(scene.handle_events(events, 0.0), None);
    scene.frame(1.0, &mut scroll, &mut renderer).unwrap();

    let hovered: Vec<_> = scene
        .records()
        .iter()
        .map(|r| (r.material.uniforms.hovered, r.material.uniforms.progress))
        .collect();
    assert_eq!(hovered, vec![(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
    assert!(scene.records().iter().all(|r| r.material.uniforms.time == 1.0));

    scene.handle_events(
        [SceneEvent::Hover {
            image: ImageId(1),
            event: HoverEvent::Leave,
        }],
        1.0,
    );
    scene.frame(1.1, &mut scroll, &mut renderer).unwrap();
    let u = scene.records()[1].material.uniforms;
    assert_eq!(u.progress, 0.0);
    assert!(u.hovered > 0.0 && u.hovered < 1.0);
}

#[test]
fn latest_hover_event_in_a_frame_wins() {
    let mut factory = CountingFactory::default();
    let mut renderer = RecordingRenderer::default();
    let mut scroll = SteppingScroll::new(0.0);
    let viewport = ViewportState::new(1000.0, 800.0, 1.0);
    let mut scene = PlaneScene::new(viewport);
    scene.resize(viewport, &three_images(), &mut factory, 0.0);

    scene.handle_events(
        [SceneEvent::Hover {
            image: ImageId(0),
            event: HoverEvent::Enter,
        }],
        0.0,
    );
    scene.frame(0.5, &mut scroll, &mut renderer).unwrap();
    assert_eq!(scene.records()[0].material.uniforms.hovered, 0.5);

    let events = [
        SceneEvent::Hover {
            image: ImageId(0),
            event: HoverEvent::Enter,
        },
        SceneEvent::Hover {
            image: ImageId(0),
            event: HoverEvent::Leave,
        },
    ];
    scene.handle_events(events, 0.5);
    scene.frame(0.5, &mut scroll, &mut renderer).unwrap();
    let u = scene.records()[0].material.uniforms;
    assert_eq!(u.progress, 0.0);
    assert_eq!(u.hovered, 0.5);

    scene.frame(1.0, &mut scroll, &mut renderer).unwrap();
    let u = scene.records()[0].material.uniforms;
    assert_eq!(u.progress, 0.0);
    assert!(u.hovered > 0.0 && u.hovered < 0.5);
    assert_eq!(scene.records()[0].material.hover.phase(1.0), HoverPhase::Leaving);
}

#[test]
fn dispose_releases_every_mesh() {
    let mut factory = CountingFactory::default();
    let viewport = ViewportState::new(1000.0, 800.0, 1.0);
    let mut scene = PlaneScene::new(viewport);
    scene.resize(viewport, &three_images(), &mut factory, 0.0);
    assert_eq!(scene.dispose(&mut factory), 3);
    assert!(scene.records().is_empty());
    assert_eq!(factory.released.len(), 3);
}
