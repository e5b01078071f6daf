// Host-side tests for scroll progress, the scroll-linked pose and the
// pointer followers that smooth both.

use folio_core::{
    alpha_for, normalize_pointer, scroll_progress, CameraConfig, CameraRig, Camera, Follower,
    PointerState, ScrollConfig, ScrollMapping, ScrollScrub, Viewport,
};
use std::f32::consts::{PI, TAU};

fn mapping() -> ScrollMapping {
    ScrollMapping::new(&CameraConfig::default(), &ScrollConfig::default(), 6)
}

#[test]
fn progress_is_fraction_of_scrollable_range() {
    assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
    assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
    assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
    assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
}

#[test]
fn short_documents_report_zero() {
    assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
    assert_eq!(scroll_progress(f64::NAN, 3000.0, 800.0), 0.0);
}

#[test]
fn camera_recedes_with_progress() {
    let m = mapping();
    assert_eq!(m.camera_z(0.0), 5.0);
    assert_eq!(m.camera_z(0.5), 6.5);
    assert_eq!(m.camera_z(1.0), 8.0);
    assert_eq!(m.camera_z(2.0), 8.0);
}

#[test]
fn particle_rotation_follows_progress() {
    let pose = mapping().at(0.5);
    assert!((pose.particle_rotation_x - PI / 2.0).abs() < 1e-6);
    assert!((pose.particle_rotation_y - PI).abs() < 1e-6);
}

#[test]
fn mesh_opacity_and_depth_waves() {
    let m = mapping();
    assert!((m.mesh_opacity(0.0) - 0.2).abs() < 1e-6);
    assert!((m.mesh_opacity(0.125) - 0.4).abs() < 1e-5);
    assert!(m.mesh_opacity(0.375).abs() < 1e-5);
    for i in 0..6 {
        let expected = (0.25 * TAU + i as f32).sin() * 2.0;
        assert!((m.mesh_z(0.25, i) - expected).abs() < 1e-5);
    }
    assert_eq!(m.at(0.7).meshes.len(), 6);
}

#[test]
fn scrolling_back_retraces_the_same_pose() {
    let m = mapping();
    let forward: Vec<_> = (0..=20).map(|i| m.at(i as f32 / 20.0)).collect();
    let backward: Vec<_> = (0..=20).rev().map(|i| m.at(i as f32 / 20.0)).collect();
    for (a, b) in forward.iter().zip(backward.iter().rev()) {
        assert_eq!(a, b);
    }
}

#[test]
fn scrub_lags_then_settles_on_target() {
    let mut scrub = ScrollScrub::new(1.0, 0.0);
    let first = scrub.step(1.0, 1.0 / 60.0);
    assert!(first > 0.0 && first < 0.05);
    for _ in 0..2000 {
        scrub.step(1.0, 1.0 / 60.0);
    }
    assert_eq!(scrub.value(), 1.0);
}

#[test]
fn zero_scrub_follows_immediately() {
    let mut scrub = ScrollScrub::new(0.0, 0.0);
    assert_eq!(scrub.step(0.6, 1.0 / 60.0), 0.6);
}

#[test]
fn pointer_normalizes_to_unit_square() {
    assert_eq!(normalize_pointer(500.0, 400.0, 1000.0, 800.0), PointerState { x: 0.0, y: 0.0 });
    assert_eq!(normalize_pointer(0.0, 0.0, 1000.0, 800.0), PointerState { x: -1.0, y: 1.0 });
    assert_eq!(normalize_pointer(1000.0, 800.0, 1000.0, 800.0), PointerState { x: 1.0, y: -1.0 });
    assert_eq!(normalize_pointer(5000.0, -10.0, 1000.0, 800.0), PointerState { x: 1.0, y: 1.0 });
    assert_eq!(normalize_pointer(10.0, 10.0, 0.0, 0.0), PointerState::default());
}

#[test]
fn pixel_ratio_is_capped_but_not_raised() {
    let vp = |dpr: f64| Viewport {
        width: 800.0,
        height: 600.0,
        device_pixel_ratio: dpr,
    };
    assert_eq!(vp(3.0).pixel_ratio(2.0), 2.0);
    assert_eq!(vp(1.5).pixel_ratio(2.0), 1.5);
    assert_eq!(vp(0.5).pixel_ratio(2.0), 0.5);
    assert_eq!(vp(0.5).backing_size(2.0), (400, 300));
    assert_eq!(vp(3.0).backing_size(2.0), (1600, 1200));
    assert_eq!(vp(0.01).pixel_ratio(2.0), 0.25);
    assert_eq!(vp(f64::NAN).pixel_ratio(2.0), 1.0);
    assert_eq!(vp(0.0).pixel_ratio(2.0), 1.0);
}

#[test]
fn follower_converges_monotonically() {
    let mut f = Follower::new(0.0);
    let alpha = alpha_for(1.0 / 60.0, 0.5);
    let mut last_gap = 1.0f32;
    for _ in 0..300 {
        f.step(1.0, alpha);
        let gap = (1.0 - f.value).abs();
        assert!(gap <= last_gap);
        assert!(f.value <= 1.0);
        last_gap = gap;
    }
    assert!(last_gap < 1e-3);
}

#[test]
fn camera_z_is_taken_verbatim_from_scroll() {
    let config = CameraConfig::default();
    let mut camera = Camera::new(&config, 16.0 / 9.0);
    let mut rig = CameraRig::new(&config);
    rig.update(&mut camera, PointerState { x: 1.0, y: -1.0 }, 7.25, 1.0 / 60.0);
    assert_eq!(camera.position.z, 7.25);
    assert!(camera.position.x > 0.0 && camera.position.x < 0.5);
    assert!(camera.position.y < 0.0 && camera.position.y > -0.5);

    for _ in 0..600 {
        rig.update(&mut camera, PointerState { x: 1.0, y: -1.0 }, 7.25, 1.0 / 60.0);
    }
    assert!((camera.position.x - 0.5).abs() < 1e-4);
    assert!((camera.rotation.x + 0.05).abs() < 1e-4);
    assert!((camera.rotation.y - 0.05).abs() < 1e-4);
}
