//! Pointer normalization and exponential smoothing.
//!
//! A follower moves a fixed fraction of the remaining distance toward its
//! target every frame, so motion stays continuous when the target jumps.

use glam::{Vec2, Vec3};

/// Pointer position in normalized device range: x right, y up, both [-1, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Map client pixel coordinates into [-1, 1] with y pointing up.
/// A zero-sized viewport yields the centre.
pub fn normalize_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> PointerState {
    if !(width > 0.0 && height > 0.0) {
        return PointerState::default();
    }
    let x = (client_x / width) * 2.0 - 1.0;
    let y = -((client_y / height) * 2.0 - 1.0);
    PointerState {
        x: (x as f32).clamp(-1.0, 1.0),
        y: (y as f32).clamp(-1.0, 1.0),
    }
}

/// Fraction of the remaining distance to cover in one frame of `dt_sec` for
/// a first-order lag with time constant `tau_sec`.
#[inline]
pub fn alpha_for(dt_sec: f32, tau_sec: f32) -> f32 {
    if tau_sec <= 0.0 {
        return 1.0;
    }
    (1.0 - (-dt_sec.max(0.0) / tau_sec).exp()).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Follower {
    pub value: f32,
}

impl Follower {
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    #[inline]
    pub fn step(&mut self, target: f32, alpha: f32) -> f32 {
        self.value += (target - self.value) * alpha.clamp(0.0, 1.0);
        self.value
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Follower3 {
    pub value: Vec3,
}

impl Follower3 {
    pub fn new(value: Vec3) -> Self {
        Self { value }
    }

    #[inline]
    pub fn step(&mut self, target: Vec3, alpha: f32) -> Vec3 {
        self.value += (target - self.value) * alpha.clamp(0.0, 1.0);
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_frame_rate_independent() {
        // Two half-steps cover the same distance as one full step.
        let full = alpha_for(1.0 / 30.0, 0.5);
        let half = alpha_for(1.0 / 60.0, 0.5);
        let two_halves = 1.0 - (1.0 - half) * (1.0 - half);
        assert!((full - two_halves).abs() < 1e-6);
    }

    #[test]
    fn zero_tau_snaps() {
        let mut f = Follower::new(0.0);
        f.step(3.0, alpha_for(0.016, 0.0));
        assert_eq!(f.value, 3.0);
    }
}
