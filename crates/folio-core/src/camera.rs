//! Camera description and the pointer/scroll rig that drives it.
//!
//! These types avoid platform APIs; the web renderer turns them into a
//! view-projection matrix once per frame.

use crate::config::CameraConfig;
use crate::pointer::{alpha_for, Follower3, PointerState};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Right-handed perspective camera placed by position and XYZ Euler rotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub rotation: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, config.base_z),
            rotation: Vec3::ZERO,
            aspect,
            fovy_radians: config.fov_deg.to_radians(),
            znear: config.near,
            zfar: config.far,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-3), self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        let orientation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(orientation, self.position).inverse()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Smoothly follows the pointer in x/y and takes its depth from scroll.
#[derive(Clone, Debug)]
pub struct CameraRig {
    offset_gain: f32,
    tilt_gain: f32,
    tau_sec: f32,
    offset: Follower3,
    tilt: Follower3,
}

impl CameraRig {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            offset_gain: config.pointer_offset,
            tilt_gain: config.pointer_tilt,
            tau_sec: config.follow_tau_sec,
            offset: Follower3::default(),
            tilt: Follower3::default(),
        }
    }

    /// Pose the camera for this frame: x/y and rotation ease toward the
    /// pointer target; z is taken verbatim from the scroll mapping.
    pub fn update(&mut self, camera: &mut Camera, pointer: PointerState, scroll_z: f32, dt_sec: f32) {
        let alpha = alpha_for(dt_sec, self.tau_sec);
        let offset = self.offset.step(
            Vec3::new(pointer.x * self.offset_gain, pointer.y * self.offset_gain, 0.0),
            alpha,
        );
        let tilt = self.tilt.step(
            Vec3::new(pointer.y * self.tilt_gain, pointer.x * self.tilt_gain, 0.0),
            alpha,
        );
        camera.position = Vec3::new(offset.x, offset.y, scroll_z);
        camera.rotation = tilt;
    }
}
