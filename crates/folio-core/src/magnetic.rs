//! Buttons that lean toward the pointer and spring back when it leaves.

use crate::config::MagneticConfig;
use crate::tween::Animated;

pub struct MagneticButton {
    config: MagneticConfig,
    x: Animated,
    y: Animated,
}

impl MagneticButton {
    pub fn new(config: MagneticConfig) -> Self {
        Self {
            config,
            x: Animated::new(0.0),
            y: Animated::new(0.0),
        }
    }

    /// `dx`/`dy` are the pointer offset from the button centre in CSS pixels.
    pub fn pointer_move(&mut self, dx: f32, dy: f32) {
        let c = &self.config;
        self.x.animate_to(dx * c.strength, c.move_sec, c.move_easing);
        self.y.animate_to(dy * c.strength, c.move_sec, c.move_easing);
    }

    pub fn pointer_leave(&mut self) {
        let c = &self.config;
        self.x.animate_to(0.0, c.release_sec, c.release_easing);
        self.y.animate_to(0.0, c.release_sec, c.release_easing);
    }

    pub fn advance(&mut self, dt_sec: f32) -> bool {
        let x = self.x.advance(dt_sec);
        let y = self.y.advance(dt_sec);
        x || y
    }

    pub fn offset(&self) -> [f32; 2] {
        [self.x.get(), self.y.get()]
    }
}
