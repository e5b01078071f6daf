//! Ambient particle cloud scattered in a cube around the origin.

use crate::config::ParticleConfig;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub color: [f32; 3],
}

/// Per-instance vertex data as uploaded to the GPU.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleCloud {
    particles: Vec<Particle>,
    half_extent: f32,
}

impl ParticleCloud {
    /// Scatter `config.count` particles uniformly in `[-extent/2, extent/2)^3`.
    ///
    /// Each particle draws one shade in [0, 1) that scales the per-channel
    /// jitter, so the cloud stays close to the base color.
    pub fn generate(config: &ParticleConfig, rng: &mut impl Rng) -> Self {
        let half_extent = config.extent * 0.5;
        let particles = (0..config.count)
            .map(|_| {
                let position = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * config.extent,
                    (rng.gen::<f32>() - 0.5) * config.extent,
                    (rng.gen::<f32>() - 0.5) * config.extent,
                );
                let shade = rng.gen::<f32>();
                let mut color = [0.0; 3];
                for (c, out) in color.iter_mut().enumerate() {
                    *out = (config.base_color[c] + shade * config.color_jitter[c]).clamp(0.0, 1.0);
                }
                Particle { position, color }
            })
            .collect();
        Self {
            particles,
            half_extent,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn instances(&self) -> Vec<ParticleInstance> {
        self.particles
            .iter()
            .map(|p| ParticleInstance {
                position: p.position.to_array(),
                color: p.color,
            })
            .collect()
    }

    /// Inclusive bounds every particle coordinate lies within.
    pub fn bounds(&self) -> (f32, f32) {
        (-self.half_extent, self.half_extent)
    }
}

/// The cloud plus its whole-group rotation.
///
/// Scroll sets a base rotation; every frame adds a small drift around Y on
/// top of it. The particles themselves are never moved.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub cloud: ParticleCloud,
    drift_per_frame: f32,
    drift_y: f32,
    scroll_rotation: Vec3,
}

impl ParticleField {
    pub fn new(cloud: ParticleCloud, drift_per_frame: f32) -> Self {
        Self {
            cloud,
            drift_per_frame,
            drift_y: 0.0,
            scroll_rotation: Vec3::ZERO,
        }
    }

    pub fn advance_frame(&mut self) {
        self.drift_y = (self.drift_y + self.drift_per_frame) % std::f32::consts::TAU;
    }

    pub fn set_scroll_rotation(&mut self, x: f32, y: f32) {
        self.scroll_rotation = Vec3::new(x, y, 0.0);
    }

    pub fn drift(&self) -> f32 {
        self.drift_y
    }

    /// Euler rotation (XYZ) of the whole cloud.
    pub fn rotation(&self) -> Vec3 {
        self.scroll_rotation + Vec3::new(0.0, self.drift_y, 0.0)
    }
}
