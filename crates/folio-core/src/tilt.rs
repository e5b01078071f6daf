//! Hover tilt for project cards.
//!
//! States: `Idle` -> `Tracking` on enter, `Tracking` retargets on every
//! move, `Tracking` -> `Releasing` on leave, `Releasing` -> `Idle` once every
//! tween has settled. Entering again while releasing picks up from wherever
//! the card currently is.

use crate::config::TiltConfig;
use crate::ease::{Direction, Easing};
use crate::tween::TweenSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltState {
    Idle,
    Tracking,
    Releasing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Prop {
    RotateX,
    RotateY,
    Z,
    Scale,
    ContentX,
    ContentY,
    GlowX,
    GlowY,
    Border,
}

impl Prop {
    const ALL: [Prop; 9] = [
        Prop::RotateX,
        Prop::RotateY,
        Prop::Z,
        Prop::Scale,
        Prop::ContentX,
        Prop::ContentY,
        Prop::GlowX,
        Prop::GlowY,
        Prop::Border,
    ];

    fn identity(self) -> f32 {
        match self {
            Prop::Scale => 1.0,
            _ => 0.0,
        }
    }
}

/// Pointer position relative to the card's top-left corner, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPointer {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub z: f32,
    pub scale: f32,
    pub content: [f32; 2],
    /// Glow offset from the card centre.
    pub glow: [f32; 2],
    pub border_opacity: f32,
}

impl CardTransform {
    pub const IDENTITY: CardTransform = CardTransform {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        z: 0.0,
        scale: 1.0,
        content: [0.0, 0.0],
        glow: [0.0, 0.0],
        border_opacity: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

pub struct TiltCard {
    config: TiltConfig,
    state: TiltState,
    tweens: TweenSet<Prop>,
}

impl TiltCard {
    pub fn new(config: TiltConfig) -> Self {
        let mut tweens = TweenSet::new();
        for p in Prop::ALL {
            tweens.set(p, p.identity());
        }
        Self {
            config,
            state: TiltState::Idle,
            tweens,
        }
    }

    pub fn state(&self) -> TiltState {
        self.state
    }

    pub fn pointer_enter(&mut self) {
        if self.state == TiltState::Tracking {
            return;
        }
        self.state = TiltState::Tracking;
        let c = &self.config;
        self.tweens.to(Prop::Z, 0.0, c.lift_z, c.move_sec, c.lift_easing);
        self.tweens
            .to(Prop::Scale, 1.0, c.lift_scale, c.move_sec, c.lift_easing);
        self.tweens.to(
            Prop::Border,
            0.0,
            1.0,
            c.border_sec,
            Easing::Power(1, Direction::Out),
        );
    }

    /// Retarget the tilt toward the pointer. Pointers over links and buttons
    /// inside the card leave the current target untouched; returns whether
    /// a new target was set.
    pub fn pointer_move(&mut self, pointer: CardPointer, over_interactive: bool) -> bool {
        if self.state != TiltState::Tracking {
            self.pointer_enter();
        }
        if over_interactive || !(pointer.width > 0.0 && pointer.height > 0.0) {
            return false;
        }
        let c = &self.config;
        let cx = pointer.width / 2.0;
        let cy = pointer.height / 2.0;
        let dx = pointer.x - cx;
        let dy = pointer.y - cy;
        let rx = ((cy - pointer.y) / c.divisor).clamp(-c.max_deg, c.max_deg);
        let ry = (dx / c.divisor).clamp(-c.max_deg, c.max_deg);

        let (move_sec, glow_sec, easing) = (c.move_sec, c.glow_sec, c.move_easing);
        let content_div = c.content_divisor;
        self.tweens.to(Prop::RotateX, 0.0, rx, move_sec, easing);
        self.tweens.to(Prop::RotateY, 0.0, ry, move_sec, easing);
        self.tweens
            .to(Prop::ContentX, 0.0, dx / content_div, move_sec, easing);
        self.tweens
            .to(Prop::ContentY, 0.0, dy / content_div, move_sec, easing);
        self.tweens.to(Prop::GlowX, 0.0, dx, glow_sec, Easing::Linear);
        self.tweens.to(Prop::GlowY, 0.0, dy, glow_sec, Easing::Linear);
        true
    }

    pub fn pointer_leave(&mut self) {
        if self.state != TiltState::Tracking {
            return;
        }
        self.state = TiltState::Releasing;
        let c = &self.config;
        let (sec, easing, border_sec) = (c.release_sec, c.release_easing, c.border_sec);
        for p in Prop::ALL {
            if p == Prop::Border {
                self.tweens.to(p, 0.0, 0.0, border_sec, Easing::Power(1, Direction::Out));
            } else {
                self.tweens.to(p, p.identity(), p.identity(), sec, easing);
            }
        }
    }

    /// Step every tween; returns `true` while the card still needs frames.
    pub fn advance(&mut self, dt_sec: f32) -> bool {
        self.tweens.advance(dt_sec);
        let animating = self.tweens.active_count() > 0;
        if self.state == TiltState::Releasing && !animating {
            self.state = TiltState::Idle;
        }
        animating || self.state == TiltState::Tracking
    }

    /// Drop every in-flight tween and snap back to identity.
    pub fn reset(&mut self) {
        self.tweens.kill_all();
        for p in Prop::ALL {
            self.tweens.set(p, p.identity());
        }
        self.state = TiltState::Idle;
    }

    pub fn transform(&self) -> CardTransform {
        let v = |p: Prop| self.tweens.value_or(p, p.identity());
        CardTransform {
            rotate_x_deg: v(Prop::RotateX),
            rotate_y_deg: v(Prop::RotateY),
            z: v(Prop::Z),
            scale: v(Prop::Scale),
            content: [v(Prop::ContentX), v(Prop::ContentY)],
            glow: [v(Prop::GlowX), v(Prop::GlowY)],
            border_opacity: v(Prop::Border),
        }
    }
}
