//! Scroll-triggered element effects: section parallax and card reveal.
//!
//! Both are pure functions of an element's position in the viewport,
//! smoothed by a scrub follower so fast scrolling does not snap.

use crate::constants::{PARALLAX_PERCENT, REVEAL_END, REVEAL_START};
use crate::ease::{Direction, Easing};
use crate::scroll::{window_progress, ScrollScrub};

/// Untransformed element box in viewport coordinates (CSS pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

/// 0 when the element's top reaches the viewport bottom, 1 when its bottom
/// leaves through the viewport top.
pub fn parallax_progress(element: ElementBox, viewport_height: f64) -> f32 {
    window_progress(element.top, viewport_height, -element.height)
}

/// Vertical shift as a percentage of the element's own height.
pub fn parallax_percent(progress: f32, speed: f32) -> f32 {
    PARALLAX_PERCENT * speed * progress.clamp(0.0, 1.0)
}

/// 0 while the element's top is below 95% of the viewport height, 1 once it
/// has reached 40%.
pub fn reveal_progress(element: ElementBox, viewport_height: f64) -> f32 {
    window_progress(
        element.top,
        viewport_height * f64::from(REVEAL_START),
        viewport_height * f64::from(REVEAL_END),
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPose {
    pub opacity: f32,
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub z: f32,
    pub scale: f32,
}

impl RevealPose {
    pub const HIDDEN: RevealPose = RevealPose {
        opacity: 0.0,
        rotate_x_deg: 45.0,
        rotate_y_deg: -15.0,
        z: -200.0,
        scale: 0.8,
    };

    pub const SHOWN: RevealPose = RevealPose {
        opacity: 1.0,
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        z: 0.0,
        scale: 1.0,
    };
}

pub fn reveal_pose(progress: f32) -> RevealPose {
    let t = Easing::Power(2, Direction::Out).apply(progress);
    let (a, b) = (RevealPose::HIDDEN, RevealPose::SHOWN);
    let lerp = |from: f32, to: f32| if t >= 1.0 { to } else { from + (to - from) * t };
    RevealPose {
        opacity: lerp(a.opacity, b.opacity),
        rotate_x_deg: lerp(a.rotate_x_deg, b.rotate_x_deg),
        rotate_y_deg: lerp(a.rotate_y_deg, b.rotate_y_deg),
        z: lerp(a.z, b.z),
        scale: lerp(a.scale, b.scale),
    }
}

/// Scroll-driven progress that trails the real value by a scrub time.
#[derive(Clone, Copy, Debug)]
pub struct ScrubbedTrigger {
    scrub: ScrollScrub,
    target: f32,
}

impl ScrubbedTrigger {
    pub fn new(scrub_sec: f32, initial: f32) -> Self {
        Self {
            scrub: ScrollScrub::new(scrub_sec, initial),
            target: initial,
        }
    }

    pub fn set_target(&mut self, progress: f32) {
        self.target = progress.clamp(0.0, 1.0);
    }

    pub fn step(&mut self, dt_sec: f32) -> f32 {
        self.scrub.step(self.target, dt_sec)
    }

    pub fn value(&self) -> f32 {
        self.scrub.value()
    }

    pub fn is_settled(&self) -> bool {
        self.scrub.value() == self.target
    }
}

/// What an entrance does when its start line is crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleActions {
    /// Play on the first crossing and stay shown.
    PlayOnce,
    /// Play when scrolled past the start line, reverse when scrolled back
    /// above it.
    PlayReverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntranceAction {
    Play,
    Reverse,
}

/// Edge detector for an element's top crossing a line at `start` times the
/// viewport height.
#[derive(Clone, Copy, Debug)]
pub struct EntranceTrigger {
    start: f32,
    actions: ToggleActions,
    active: bool,
    spent: bool,
}

impl EntranceTrigger {
    pub fn new(start: f32, actions: ToggleActions) -> Self {
        Self {
            start: start.clamp(0.0, 1.0),
            actions,
            active: false,
            spent: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed the element's current box; returns an action on a crossing.
    /// An element already past the line on the first update plays at once.
    pub fn update(&mut self, element: ElementBox, viewport_height: f64) -> Option<EntranceAction> {
        if self.spent {
            return None;
        }
        let past = element.top <= viewport_height * f64::from(self.start);
        match (self.active, past) {
            (false, true) => {
                self.active = true;
                if self.actions == ToggleActions::PlayOnce {
                    self.spent = true;
                }
                Some(EntranceAction::Play)
            }
            (true, false) => {
                self.active = false;
                Some(EntranceAction::Reverse)
            }
            _ => None,
        }
    }
}
