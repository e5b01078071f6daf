//! The background scene: particle field, mesh set, camera and lights, plus
//! the per-frame update that ties them to pointer and scroll input.

use crate::camera::{Camera, CameraRig};
use crate::config::{LightConfig, SceneConfig};
use crate::error::CoreError;
use crate::input::{InputSnapshot, Viewport};
use crate::meshes::MeshSet;
use crate::particles::{ParticleCloud, ParticleField};
use crate::scroll::{ScrollMapping, ScrollScrub};
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
    pub color: [f32; 3],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Lights {
    pub ambient: f32,
    pub a: PointLight,
    pub b: PointLight,
    pub range: f32,
    base_a: f32,
    base_b: f32,
    swing: f32,
    b_rate: f32,
}

impl Lights {
    fn new(config: &LightConfig, color_a: [f32; 3], color_b: [f32; 3]) -> Self {
        Self {
            ambient: config.ambient,
            a: PointLight {
                position: Vec3::from(config.a_position),
                intensity: config.a_base,
                color: color_a,
            },
            b: PointLight {
                position: Vec3::from(config.b_position),
                intensity: config.b_base,
                color: color_b,
            },
            range: config.range,
            base_a: config.a_base,
            base_b: config.b_base,
            swing: config.swing,
            b_rate: config.b_rate,
        }
    }

    /// Pulse both lights as sinusoids of wall-clock seconds.
    pub fn pulse(&mut self, wall_clock_sec: f64) {
        let t = wall_clock_sec;
        self.a.intensity = self.base_a + (t.sin() as f32) * self.swing;
        self.b.intensity = self.base_b + ((t * f64::from(self.b_rate)).cos() as f32) * self.swing;
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct FrameSnapshot {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
    pub camera_position: Vec3,
    pub particle_model: Mat4,
    pub mesh_models: SmallVec<[Mat4; 8]>,
    pub mesh_opacity: SmallVec<[f32; 8]>,
    pub lights: Lights,
    pub elapsed_sec: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameUpdate {
    pub resized: bool,
}

pub struct SceneModel {
    config: SceneConfig,
    pub particles: ParticleField,
    pub meshes: MeshSet,
    pub camera: Camera,
    rig: CameraRig,
    mapping: ScrollMapping,
    scrub: ScrollScrub,
    pub lights: Lights,
    elapsed_sec: f32,
    frames: u64,
    viewport: Viewport,
    resize_epoch: u32,
}

impl SceneModel {
    pub fn new(config: SceneConfig, rng: &mut impl Rng, input: &InputSnapshot) -> Result<Self, CoreError> {
        config.validate()?;
        let cloud = ParticleCloud::generate(&config.particles, rng);
        let particles = ParticleField::new(cloud, config.particles.drift_per_frame);
        let meshes = MeshSet::generate(&config.meshes, rng);
        let camera = Camera::new(&config.camera, input.viewport.aspect());
        let rig = CameraRig::new(&config.camera);
        let mapping = ScrollMapping::new(&config.camera, &config.scroll, meshes.len());
        let scrub = ScrollScrub::new(config.scroll.scrub_sec, input.scroll_progress);
        let lights = Lights::new(&config.lights, config.meshes.color, config.meshes.emissive);
        log::debug!(
            "[scene] model built: {} particles, {} meshes",
            particles.cloud.len(),
            meshes.len()
        );
        Ok(Self {
            config,
            particles,
            meshes,
            camera,
            rig,
            mapping,
            scrub,
            lights,
            elapsed_sec: 0.0,
            frames: 0,
            viewport: input.viewport,
            resize_epoch: input.resize_epoch,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn mapping(&self) -> &ScrollMapping {
        &self.mapping
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Scroll progress after scrub smoothing.
    pub fn displayed_progress(&self) -> f32 {
        self.scrub.value()
    }

    /// Advance one frame with the latest input.
    pub fn advance(&mut self, dt_sec: f32, wall_clock_sec: f64, input: &InputSnapshot) -> FrameUpdate {
        let dt_sec = dt_sec.max(0.0);
        self.elapsed_sec += dt_sec;
        self.frames += 1;

        let mut update = FrameUpdate::default();
        if input.resize_epoch != self.resize_epoch {
            self.resize_epoch = input.resize_epoch;
            self.viewport = input.viewport;
            self.camera.aspect = input.viewport.aspect();
            update.resized = true;
        }

        let progress = self.scrub.step(input.scroll_progress, dt_sec);
        let pose = self.mapping.at(progress);

        self.particles
            .set_scroll_rotation(pose.particle_rotation_x, pose.particle_rotation_y);
        self.particles.advance_frame();

        self.meshes.sample(self.elapsed_sec);
        self.meshes.apply_scroll(&pose);
        self.meshes.update_group(input.pointer, dt_sec);

        self.rig
            .update(&mut self.camera, input.pointer, pose.camera_z, dt_sec);
        self.lights.pulse(wall_clock_sec);
        update
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let r = self.particles.rotation();
        FrameSnapshot {
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(),
            view_projection: self.camera.view_projection(),
            camera_position: self.camera.position,
            particle_model: Mat4::from_quat(Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z)),
            mesh_models: self.meshes.model_matrices(),
            mesh_opacity: self.meshes.iter().map(|m| m.opacity).collect(),
            lights: self.lights.clone(),
            elapsed_sec: self.elapsed_sec,
        }
    }
}
