// Host-side tests for the particle cloud and its drift.

use folio_core::{ParticleCloud, ParticleConfig, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

fn cloud(seed: u64) -> ParticleCloud {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleCloud::generate(&ParticleConfig::default(), &mut rng)
}

#[test]
fn default_cloud_has_two_thousand_particles() {
    let c = cloud(1);
    assert_eq!(c.len(), 2000);
    assert_eq!(c.instances().len(), 2000);
}

#[test]
fn particles_stay_inside_the_cube() {
    let c = cloud(2);
    let (lo, hi) = c.bounds();
    assert_eq!((lo, hi), (-10.0, 10.0));
    for p in c.iter() {
        for v in p.position.to_array() {
            assert!(v >= lo && v <= hi, "coordinate {} outside cube", v);
        }
    }
}

fn within(v: f32, lo: f32, hi: f32) -> bool {
    v >= lo - 1e-6 && v <= hi + 1e-6
}

#[test]
fn colors_stay_near_base_green() {
    let c = cloud(3);
    for p in c.iter() {
        let [r, g, b] = p.color;
        assert!(within(r, 0.24, 0.44), "r {}", r);
        assert!(within(g, 0.86, 0.96), "g {}", g);
        assert!(within(b, 0.52, 0.62), "b {}", b);
    }
}

#[test]
fn same_seed_same_cloud() {
    assert_eq!(cloud(42), cloud(42));
    assert_ne!(cloud(42), cloud(43));
}

#[test]
fn instances_mirror_particles() {
    let c = cloud(5);
    for (p, i) in c.iter().zip(c.instances()) {
        assert_eq!(i.position, p.position.to_array());
        assert_eq!(i.color, p.color);
    }
}

#[test]
fn drift_accumulates_per_frame_and_wraps() {
    let mut field = ParticleField::new(cloud(6), 0.0005);
    for _ in 0..100 {
        field.advance_frame();
    }
    assert!((field.drift() - 0.05).abs() < 1e-5);

    let mut fast = ParticleField::new(cloud(6), 1.0);
    for _ in 0..10 {
        fast.advance_frame();
    }
    assert!(fast.drift() >= 0.0 && fast.drift() < TAU);
}

#[test]
fn rotation_combines_scroll_and_drift() {
    let mut field = ParticleField::new(cloud(7), 0.01);
    field.advance_frame();
    field.set_scroll_rotation(0.5, 1.0);
    let r = field.rotation();
    assert!((r.x - 0.5).abs() < 1e-6);
    assert!((r.y - 1.01).abs() < 1e-6);
    assert_eq!(r.z, 0.0);

    // drift survives a new scroll position
    field.set_scroll_rotation(0.0, 0.0);
    assert!((field.rotation().y - 0.01).abs() < 1e-6);
}
