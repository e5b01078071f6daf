//! Decorative wireframe meshes floating behind the page content.

use crate::config::MeshConfig;
use crate::ease::Easing;
use crate::pointer::{alpha_for, Follower, PointerState};
use crate::scroll::ScrollPose;
use crate::tween::{LoopMode, LoopTween};
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Torus,
    Octahedron,
    Icosahedron,
    Tetrahedron,
}

impl MeshKind {
    pub const PALETTE: [MeshKind; 4] = [
        MeshKind::Torus,
        MeshKind::Octahedron,
        MeshKind::Icosahedron,
        MeshKind::Tetrahedron,
    ];
}

#[derive(Clone, Debug, PartialEq)]
pub struct DecorativeMesh {
    pub kind: MeshKind,
    pub base_position: Vec3,
    pub base_rotation: Vec3,
    spin_x: LoopTween,
    spin_y: LoopTween,
    bob: LoopTween,
    pub position: Vec3,
    pub rotation: Vec3,
    pub opacity: f32,
}

impl DecorativeMesh {
    fn generate(config: &MeshConfig, rng: &mut impl Rng) -> Self {
        let kind = MeshKind::PALETTE[rng.gen_range(0..MeshKind::PALETTE.len())];
        let base_position = Vec3::new(
            (rng.gen::<f32>() - 0.5) * config.spread_xy,
            (rng.gen::<f32>() - 0.5) * config.spread_xy,
            (rng.gen::<f32>() - 0.5) * config.spread_z,
        );
        let base_rotation = Vec3::new(rng.gen::<f32>() * PI, rng.gen::<f32>() * PI, 0.0);

        let spin_period = config.spin_period_min + rng.gen::<f32>() * config.spin_period_jitter;
        let spin = |from: f32| LoopTween {
            from,
            to: from + TAU,
            duration: spin_period,
            easing: Easing::Linear,
            mode: LoopMode::Repeat,
        };
        let bob_to = base_position.y + (rng.gen::<f32>() - 0.5) * config.bob_range;
        let bob_period = config.bob_period_min + rng.gen::<f32>() * config.bob_period_jitter;

        Self {
            kind,
            base_position,
            base_rotation,
            spin_x: spin(base_rotation.x),
            spin_y: spin(base_rotation.y),
            bob: LoopTween {
                from: base_position.y,
                to: bob_to,
                duration: bob_period,
                easing: Easing::SineInOut,
                mode: LoopMode::Yoyo,
            },
            position: base_position,
            rotation: base_rotation,
            opacity: config.base_opacity,
        }
    }

    /// Evaluate the rotation and bob loops at `elapsed_sec`.
    pub fn sample(&mut self, elapsed_sec: f32) {
        self.rotation.x = self.spin_x.sample(elapsed_sec);
        self.rotation.y = self.spin_y.sample(elapsed_sec);
        self.position.y = self.bob.sample(elapsed_sec);
    }

    pub fn spin_period(&self) -> f32 {
        self.spin_x.duration
    }

    pub fn bob_range(&self) -> (f32, f32) {
        (self.bob.from, self.bob.to)
    }

    pub fn local_matrix(&self) -> Mat4 {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_rotation_translation(q, self.position)
    }
}

#[derive(Clone, Debug)]
pub struct MeshSet {
    meshes: SmallVec<[DecorativeMesh; 8]>,
    group_gain: f32,
    group_tau_sec: f32,
    group_spin_per_frame: f32,
    group_tilt_x: Follower,
    group_tilt_z: Follower,
    group_spin_y: f32,
}

impl MeshSet {
    pub fn generate(config: &MeshConfig, rng: &mut impl Rng) -> Self {
        let meshes = (0..config.count)
            .map(|_| DecorativeMesh::generate(config, rng))
            .collect();
        Self {
            meshes,
            group_gain: config.group_parallax_gain,
            group_tau_sec: config.group_parallax_tau_sec,
            group_spin_per_frame: config.group_spin_per_frame,
            group_tilt_x: Follower::default(),
            group_tilt_z: Follower::default(),
            group_spin_y: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DecorativeMesh> {
        self.meshes.iter()
    }

    pub fn sample(&mut self, elapsed_sec: f32) {
        for m in &mut self.meshes {
            m.sample(elapsed_sec);
        }
    }

    /// Scroll owns depth and opacity of every mesh.
    pub fn apply_scroll(&mut self, pose: &ScrollPose) {
        for (m, p) in self.meshes.iter_mut().zip(pose.meshes.iter()) {
            m.position.z = p.z;
            m.opacity = p.opacity;
        }
    }

    /// Tilt the whole group toward the pointer and advance its slow spin.
    pub fn update_group(&mut self, pointer: PointerState, dt_sec: f32) {
        let alpha = alpha_for(dt_sec, self.group_tau_sec);
        self.group_tilt_x.step(pointer.y * self.group_gain, alpha);
        self.group_tilt_z.step(pointer.x * self.group_gain, alpha);
        self.group_spin_y = (self.group_spin_y + self.group_spin_per_frame) % TAU;
    }

    pub fn group_rotation(&self) -> Vec3 {
        Vec3::new(self.group_tilt_x.value, self.group_spin_y, self.group_tilt_z.value)
    }

    pub fn group_matrix(&self) -> Mat4 {
        let r = self.group_rotation();
        Mat4::from_quat(Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z))
    }

    /// World matrices of every mesh, group transform included.
    pub fn model_matrices(&self) -> SmallVec<[Mat4; 8]> {
        let group = self.group_matrix();
        self.meshes.iter().map(|m| group * m.local_matrix()).collect()
    }
}
