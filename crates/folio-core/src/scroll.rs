//! Scroll progress and the scroll-linked pose of the background scene.
//!
//! `ScrollMapping::at` depends on nothing but the progress it is given, so
//! scrolling back up retraces the forward path exactly.

use crate::config::{CameraConfig, ScrollConfig};
use crate::pointer::{alpha_for, Follower};
use smallvec::SmallVec;
use std::f32::consts::{PI, TAU};

/// Normalized scroll position in [0, 1].
///
/// Pages that are not taller than the viewport have nothing to scroll and
/// report 0 instead of dividing by a zero or negative range.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f32 {
    let range = document_height - viewport_height;
    if !(range > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    ((scroll_y / range) as f32).clamp(0.0, 1.0)
}

/// Progress of an element through a trigger window, measured from when
/// `start_edge` is hit to when `end_edge` is hit. Both edges are positions of
/// the tracked element edge in viewport pixels.
pub fn window_progress(element_edge: f64, start_edge: f64, end_edge: f64) -> f32 {
    let span = start_edge - end_edge;
    if !(span.abs() > f64::EPSILON) {
        return if element_edge <= end_edge { 1.0 } else { 0.0 };
    }
    (((start_edge - element_edge) / span) as f32).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshScrollPose {
    pub z: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollPose {
    pub camera_z: f32,
    pub particle_rotation_x: f32,
    pub particle_rotation_y: f32,
    pub meshes: SmallVec<[MeshScrollPose; 8]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollMapping {
    pub camera_base_z: f32,
    pub camera_range: f32,
    pub mesh_depth: f32,
    pub opacity_base: f32,
    pub opacity_swing: f32,
    pub mesh_count: usize,
}

impl ScrollMapping {
    pub fn new(camera: &CameraConfig, scroll: &ScrollConfig, mesh_count: usize) -> Self {
        Self {
            camera_base_z: camera.base_z,
            camera_range: camera.scroll_range,
            mesh_depth: scroll.mesh_depth,
            opacity_base: scroll.opacity_base,
            opacity_swing: scroll.opacity_swing,
            mesh_count,
        }
    }

    pub fn camera_z(&self, progress: f32) -> f32 {
        self.camera_base_z + progress.clamp(0.0, 1.0) * self.camera_range
    }

    pub fn mesh_opacity(&self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        (self.opacity_base + (p * 2.0 * TAU).sin() * self.opacity_swing).clamp(0.0, 1.0)
    }

    pub fn mesh_z(&self, progress: f32, index: usize) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        (p * TAU + index as f32).sin() * self.mesh_depth
    }

    pub fn at(&self, progress: f32) -> ScrollPose {
        let p = progress.clamp(0.0, 1.0);
        let opacity = self.mesh_opacity(p);
        ScrollPose {
            camera_z: self.camera_z(p),
            particle_rotation_x: p * PI,
            particle_rotation_y: p * TAU,
            meshes: (0..self.mesh_count)
                .map(|i| MeshScrollPose {
                    z: self.mesh_z(p, i),
                    opacity,
                })
                .collect(),
        }
    }
}

/// Lags the displayed progress behind the real one by `scrub_sec`.
#[derive(Clone, Copy, Debug)]
pub struct ScrollScrub {
    scrub_sec: f32,
    progress: Follower,
}

impl ScrollScrub {
    pub fn new(scrub_sec: f32, initial: f32) -> Self {
        Self {
            scrub_sec,
            progress: Follower::new(initial.clamp(0.0, 1.0)),
        }
    }

    pub fn value(&self) -> f32 {
        self.progress.value
    }

    pub fn step(&mut self, target: f32, dt_sec: f32) -> f32 {
        let alpha = alpha_for(dt_sec, self.scrub_sec);
        let v = self.progress.step(target.clamp(0.0, 1.0), alpha);
        // settle instead of creeping forever
        if (target - v).abs() < 1e-5 {
            self.progress.value = target.clamp(0.0, 1.0);
        }
        self.progress.value
    }
}
