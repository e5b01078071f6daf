//! Typed configuration. Every `Default` is built from `constants.rs`.

use crate::constants::*;
use crate::ease::{Direction, Easing};
use crate::error::CoreError;

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub extent: f32,
    pub base_color: [f32; 3],
    pub color_jitter: [f32; 3],
    pub drift_per_frame: f32,
    pub size: f32,
    pub opacity: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            extent: PARTICLE_EXTENT,
            base_color: PARTICLE_BASE_COLOR,
            color_jitter: PARTICLE_COLOR_JITTER,
            drift_per_frame: PARTICLE_DRIFT_PER_FRAME,
            size: PARTICLE_SIZE,
            opacity: PARTICLE_OPACITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshConfig {
    pub count: usize,
    pub spread_xy: f32,
    pub spread_z: f32,
    pub spin_period_min: f32,
    pub spin_period_jitter: f32,
    pub bob_period_min: f32,
    pub bob_period_jitter: f32,
    pub bob_range: f32,
    pub color: [f32; 3],
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub base_opacity: f32,
    pub group_parallax_gain: f32,
    pub group_parallax_tau_sec: f32,
    pub group_spin_per_frame: f32,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            count: MESH_COUNT,
            spread_xy: MESH_SPREAD_XY,
            spread_z: MESH_SPREAD_Z,
            spin_period_min: MESH_SPIN_PERIOD_MIN,
            spin_period_jitter: MESH_SPIN_PERIOD_JITTER,
            bob_period_min: MESH_BOB_PERIOD_MIN,
            bob_period_jitter: MESH_BOB_PERIOD_JITTER,
            bob_range: MESH_BOB_RANGE,
            color: MESH_COLOR,
            emissive: MESH_EMISSIVE,
            emissive_intensity: MESH_EMISSIVE_INTENSITY,
            base_opacity: MESH_BASE_OPACITY,
            group_parallax_gain: GROUP_PARALLAX_GAIN,
            group_parallax_tau_sec: GROUP_PARALLAX_TAU_SEC,
            group_spin_per_frame: GROUP_SPIN_PER_FRAME,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub base_z: f32,
    pub scroll_range: f32,
    pub pointer_offset: f32,
    pub pointer_tilt: f32,
    pub follow_tau_sec: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            base_z: CAMERA_BASE_Z,
            scroll_range: CAMERA_SCROLL_RANGE,
            pointer_offset: CAMERA_POINTER_OFFSET,
            pointer_tilt: CAMERA_POINTER_TILT,
            follow_tau_sec: CAMERA_FOLLOW_TAU_SEC,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Seconds the smoothed progress takes to catch up; 0 disables smoothing.
    pub scrub_sec: f32,
    pub mesh_depth: f32,
    pub opacity_base: f32,
    pub opacity_swing: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scrub_sec: SCROLL_SCRUB_SEC,
            mesh_depth: MESH_SCROLL_DEPTH,
            opacity_base: MESH_OPACITY_BASE,
            opacity_swing: MESH_OPACITY_SWING,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightConfig {
    pub ambient: f32,
    pub a_position: [f32; 3],
    pub a_base: f32,
    pub b_position: [f32; 3],
    pub b_base: f32,
    pub swing: f32,
    pub b_rate: f32,
    pub range: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            ambient: AMBIENT_INTENSITY,
            a_position: LIGHT_A_POSITION,
            a_base: LIGHT_A_BASE,
            b_position: LIGHT_B_POSITION,
            b_base: LIGHT_B_BASE,
            swing: LIGHT_SWING,
            b_rate: LIGHT_B_RATE,
            range: LIGHT_RANGE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub max_pixel_ratio: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_pixel_ratio: MAX_PIXEL_RATIO,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneConfig {
    pub particles: ParticleConfig,
    pub meshes: MeshConfig,
    pub camera: CameraConfig,
    pub scroll: ScrollConfig,
    pub lights: LightConfig,
    pub render: RenderConfig,
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        let bad = |msg: String| Err(CoreError::InvalidConfig(msg));
        if self.particles.count == 0 || self.particles.count > MAX_PARTICLES {
            return bad(format!(
                "particle count {} must be in 1..={MAX_PARTICLES}",
                self.particles.count
            ));
        }
        if !(self.particles.extent > 0.0) {
            return bad(format!("particle extent {} must be positive", self.particles.extent));
        }
        if self.meshes.count == 0 || self.meshes.count > MAX_MESHES {
            return bad(format!(
                "mesh count {} must be in 1..={MAX_MESHES}",
                self.meshes.count
            ));
        }
        if !(self.meshes.spin_period_min > 0.0 && self.meshes.bob_period_min > 0.0) {
            return bad("mesh loop periods must be positive".into());
        }
        if self.scroll.scrub_sec < 0.0 {
            return bad("scroll scrub must not be negative".into());
        }
        if !(self.camera.near > 0.0 && self.camera.far > self.camera.near) {
            return bad("camera clip planes must satisfy 0 < near < far".into());
        }
        if self.render.max_pixel_ratio < 1.0 {
            return bad("max pixel ratio must be at least 1".into());
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TiltConfig {
    pub divisor: f32,
    pub max_deg: f32,
    pub content_divisor: f32,
    pub lift_z: f32,
    pub lift_scale: f32,
    pub move_sec: f32,
    pub glow_sec: f32,
    pub border_sec: f32,
    pub release_sec: f32,
    pub move_easing: Easing,
    pub lift_easing: Easing,
    pub release_easing: Easing,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            divisor: TILT_DIVISOR,
            max_deg: TILT_MAX_DEG,
            content_divisor: TILT_CONTENT_DIVISOR,
            lift_z: TILT_LIFT_Z,
            lift_scale: TILT_LIFT_SCALE,
            move_sec: TILT_MOVE_SEC,
            glow_sec: TILT_GLOW_SEC,
            border_sec: TILT_BORDER_SEC,
            release_sec: TILT_RELEASE_SEC,
            move_easing: Easing::Power(2, Direction::Out),
            lift_easing: Easing::BackOut(BACK_OVERSHOOT),
            release_easing: Easing::ElasticOut(ELASTIC_AMPLITUDE, ELASTIC_PERIOD),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MagneticConfig {
    pub strength: f32,
    pub move_sec: f32,
    pub release_sec: f32,
    pub move_easing: Easing,
    pub release_easing: Easing,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            strength: MAGNET_STRENGTH,
            move_sec: MAGNET_MOVE_SEC,
            release_sec: MAGNET_RELEASE_SEC,
            move_easing: Easing::Power(2, Direction::Out),
            release_easing: Easing::ElasticOut(ELASTIC_AMPLITUDE, ELASTIC_PERIOD),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoaderConfig {
    pub delay_sec: f32,
    pub fade_sec: f32,
    pub fade_easing: Easing,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delay_sec: LOAD_DELAY_SEC,
            fade_sec: LOAD_FADE_SEC,
            fade_easing: Easing::Power(2, Direction::Out),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageLoaderConfig {
    pub bar_sec: f32,
    pub gap_sec: f32,
    pub slide_sec: f32,
    pub bar_easing: Easing,
    pub slide_easing: Easing,
}

impl Default for PageLoaderConfig {
    fn default() -> Self {
        Self {
            bar_sec: PAGE_BAR_SEC,
            gap_sec: PAGE_GAP_SEC,
            slide_sec: PAGE_SLIDE_SEC,
            bar_easing: Easing::Power(2, Direction::InOut),
            slide_easing: Easing::Power(4, Direction::InOut),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(SceneConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_too_many_meshes() {
        let mut cfg = SceneConfig::default();
        cfg.meshes.count = MAX_MESHES + 1;
        assert!(matches!(cfg.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_empty_particle_cloud() {
        let mut cfg = SceneConfig::default();
        cfg.particles.count = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_oversized_particle_cloud() {
        let mut cfg = SceneConfig::default();
        cfg.particles.count = MAX_PARTICLES + 1;
        assert!(matches!(cfg.validate(), Err(CoreError::InvalidConfig(_))));
        cfg.particles.count = usize::MAX / 8;
        assert!(cfg.validate().is_err());
        cfg.particles.count = MAX_PARTICLES;
        assert_eq!(cfg.validate(), Ok(()));
    }
}
