//! One-shot entrance animations for page content and the endless float of
//! decorative icons.
//!
//! An [`EntranceGroup`] owns a timeline keyed by `(item, property)`. Every
//! item starts at its hidden pose and animates to [`EntrancePose::REST`];
//! staggered kinds offset each item's start, the hero kind overlaps three
//! differently shaped steps.

use crate::constants::*;
use crate::ease::{Direction, Easing};
use crate::trigger::ToggleActions;
use crate::tween::{stagger_delay, LoopMode, LoopTween, Timeline, Tween};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntrancePose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

impl EntrancePose {
    pub const REST: EntrancePose = EntrancePose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
    };

    fn get(&self, prop: EntranceProp) -> f32 {
        match prop {
            EntranceProp::Opacity => self.opacity,
            EntranceProp::X => self.x,
            EntranceProp::Y => self.y,
            EntranceProp::Scale => self.scale,
            EntranceProp::RotateX => self.rotate_x_deg,
            EntranceProp::RotateY => self.rotate_y_deg,
        }
    }
}

impl Default for EntrancePose {
    fn default() -> Self {
        Self::REST
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntranceProp {
    Opacity,
    X,
    Y,
    Scale,
    RotateX,
    RotateY,
}

impl EntranceProp {
    pub const ALL: [EntranceProp; 6] = [
        EntranceProp::Opacity,
        EntranceProp::X,
        EntranceProp::Y,
        EntranceProp::Scale,
        EntranceProp::RotateX,
        EntranceProp::RotateY,
    ];
}

const fn hidden(opacity: f32, x: f32, y: f32, scale: f32, rx: f32, ry: f32) -> EntrancePose {
    EntrancePose {
        opacity,
        x,
        y,
        scale,
        rotate_x_deg: rx,
        rotate_y_deg: ry,
    }
}

/// Hero steps: headline, subtitle, call to action.
const HERO_POSES: [EntrancePose; 3] = [
    hidden(0.0, 0.0, 120.0, 0.9, -30.0, 0.0),
    hidden(0.0, 0.0, 60.0, 0.95, 0.0, 0.0),
    hidden(0.0, 0.0, 40.0, 0.8, 0.0, -20.0),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntranceKind {
    /// Overlapping headline sequence, played as soon as it mounts.
    Hero,
    Card,
    Badge,
    Social,
    /// 3D section title flipping up from below.
    Title,
    /// Staggered fade-up that reverses when scrolled back above its start.
    FadeUp,
}

impl EntranceKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "hero" => Some(Self::Hero),
            "card" => Some(Self::Card),
            "badge" => Some(Self::Badge),
            "social" => Some(Self::Social),
            "title" => Some(Self::Title),
            "fade-up" => Some(Self::FadeUp),
            _ => None,
        }
    }

    /// Viewport fraction the trigger's top must rise above; `None` plays on
    /// mount.
    pub fn start_line(&self) -> Option<f32> {
        match self {
            Self::Hero => None,
            Self::Card => Some(CARD_ENTRANCE_START),
            Self::Badge => Some(BADGE_ENTRANCE_START),
            Self::Social => Some(SOCIAL_ENTRANCE_START),
            Self::Title => Some(TITLE_ENTRANCE_START),
            Self::FadeUp => Some(FADE_UP_START),
        }
    }

    pub fn toggle_actions(&self) -> ToggleActions {
        match self {
            Self::FadeUp => ToggleActions::PlayReverse,
            _ => ToggleActions::PlayOnce,
        }
    }

    pub fn stagger_sec(&self) -> f32 {
        match self {
            Self::Badge => BADGE_STAGGER_SEC,
            Self::Social => SOCIAL_STAGGER_SEC,
            Self::FadeUp => FADE_UP_STAGGER_SEC,
            _ => 0.0,
        }
    }

    fn shape(&self) -> (EntrancePose, f32, Easing) {
        match self {
            Self::Hero => (HERO_POSES[0], HERO_STEP_SEC[0], Easing::Power(4, Direction::Out)),
            Self::Card => (
                hidden(0.0, 0.0, 80.0, 0.95, 0.0, 0.0),
                CARD_ENTRANCE_SEC,
                Easing::Power(3, Direction::Out),
            ),
            Self::Badge => (
                hidden(0.0, 0.0, 30.0, 0.0, 0.0, -180.0),
                BADGE_ENTRANCE_SEC,
                Easing::BackOut(BACK_OVERSHOOT),
            ),
            Self::Social => (
                hidden(0.0, -60.0, 0.0, 1.0, -90.0, 0.0),
                SOCIAL_ENTRANCE_SEC,
                Easing::Power(3, Direction::Out),
            ),
            Self::Title => (
                hidden(0.0, 0.0, 100.0, 0.5, -90.0, 0.0),
                TITLE_ENTRANCE_SEC,
                Easing::Power(4, Direction::Out),
            ),
            Self::FadeUp => (
                hidden(0.0, 0.0, 50.0, 1.0, 0.0, 0.0),
                FADE_UP_SEC,
                Easing::default(),
            ),
        }
    }

    /// Pose an item of this kind holds before its entrance starts.
    pub fn hidden_pose(&self, index: usize) -> EntrancePose {
        match self {
            Self::Hero => HERO_POSES[index.min(HERO_POSES.len() - 1)],
            _ => self.shape().0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Playback {
    Paused,
    Forward,
    Backward,
}

pub struct EntranceGroup {
    kind: EntranceKind,
    timeline: Timeline<(usize, EntranceProp)>,
    playback: Playback,
}

impl EntranceGroup {
    /// `stagger_sec` overrides the kind's own stagger when given.
    pub fn new(kind: EntranceKind, count: usize, stagger_sec: Option<f32>) -> Self {
        let timeline = match kind {
            EntranceKind::Hero => hero_timeline(count),
            _ => staggered_timeline(kind, count, stagger_sec.unwrap_or(kind.stagger_sec())),
        };
        Self {
            kind,
            timeline,
            playback: Playback::Paused,
        }
    }

    pub fn kind(&self) -> EntranceKind {
        self.kind
    }

    pub fn duration(&self) -> f32 {
        self.timeline.duration()
    }

    pub fn play(&mut self) {
        self.playback = Playback::Forward;
    }

    pub fn reverse(&mut self) {
        self.playback = Playback::Backward;
    }

    pub fn is_playing(&self) -> bool {
        self.playback != Playback::Paused
    }

    pub fn is_complete(&self) -> bool {
        self.timeline.is_finished()
    }

    /// Step the timeline in its current direction; returns `true` while
    /// frames are still needed.
    pub fn advance(&mut self, dt_sec: f32) -> bool {
        let settled = match self.playback {
            Playback::Paused => return false,
            Playback::Forward => self.timeline.advance(dt_sec),
            Playback::Backward => self.timeline.rewind(dt_sec),
        };
        if settled {
            self.playback = Playback::Paused;
        }
        !settled
    }

    pub fn pose(&self, index: usize) -> EntrancePose {
        let rest = EntrancePose::REST;
        let v = |p: EntranceProp| self.timeline.value((index, p)).unwrap_or(rest.get(p));
        EntrancePose {
            opacity: v(EntranceProp::Opacity),
            x: v(EntranceProp::X),
            y: v(EntranceProp::Y),
            scale: v(EntranceProp::Scale),
            rotate_x_deg: v(EntranceProp::RotateX),
            rotate_y_deg: v(EntranceProp::RotateY),
        }
    }
}

/// Properties an item actually animates; the rest sit at rest.
fn moving_props(from: EntrancePose) -> impl Iterator<Item = EntranceProp> {
    EntranceProp::ALL
        .into_iter()
        .filter(move |&p| from.get(p) != EntrancePose::REST.get(p))
}

fn staggered_timeline(
    kind: EntranceKind,
    count: usize,
    each: f32,
) -> Timeline<(usize, EntranceProp)> {
    let (from, duration, easing) = kind.shape();
    moving_props(from).fold(Timeline::new(), |tl, prop| {
        let tween = Tween::new(from.get(prop), EntrancePose::REST.get(prop), duration, easing);
        tl.stagger(0.0, each, (0..count).map(|i| (i, prop)), tween)
    })
}

/// Items past the third reuse the last step's shape and overlap.
fn hero_timeline(count: usize) -> Timeline<(usize, EntranceProp)> {
    let easing = Easing::Power(4, Direction::Out);
    let mut tl = Timeline::new();
    for i in 0..count {
        let slot = i.min(HERO_POSES.len() - 1);
        let from = HERO_POSES[slot];
        let duration = HERO_STEP_SEC[slot];
        let start = (tl.duration() + HERO_OVERLAPS_SEC[slot]).max(0.0);
        for prop in moving_props(from) {
            let tween = Tween::new(from.get(prop), EntrancePose::REST.get(prop), duration, easing);
            tl = tl.insert(start, (i, prop), tween);
        }
    }
    tl
}

/// Decorative icon bobbing on a yoyo loop. Even items drift up-left, odd
/// items down-right; each waits `index * 0.5s` before it starts.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatBob {
    delay: f32,
    x: LoopTween,
    y: LoopTween,
}

impl FloatBob {
    pub fn new(index: usize) -> Self {
        let sign = if index % 2 == 0 { -1.0 } else { 1.0 };
        let leg = |range: f32| LoopTween {
            from: 0.0,
            to: sign * range,
            duration: FLOAT_SEC,
            easing: Easing::SineInOut,
            mode: LoopMode::Yoyo,
        };
        Self {
            delay: stagger_delay(index, FLOAT_DELAY_STEP_SEC),
            x: leg(FLOAT_RANGE_X),
            y: leg(FLOAT_RANGE_Y),
        }
    }

    /// Offset in CSS pixels `elapsed_sec` after mounting.
    pub fn offset(&self, elapsed_sec: f32) -> [f32; 2] {
        let t = elapsed_sec - self.delay;
        if t <= 0.0 {
            return [0.0, 0.0];
        }
        [self.x.sample(t), self.y.sample(t)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_from_markup_names() {
        assert_eq!(EntranceKind::from_name("fade-up"), Some(EntranceKind::FadeUp));
        assert_eq!(EntranceKind::from_name(" badge "), Some(EntranceKind::Badge));
        assert_eq!(EntranceKind::from_name("spin"), None);
    }

    #[test]
    fn only_the_moving_properties_are_scheduled() {
        let props: Vec<_> = moving_props(EntranceKind::Social.hidden_pose(0)).collect();
        assert_eq!(
            props,
            [EntranceProp::Opacity, EntranceProp::X, EntranceProp::RotateX]
        );
    }
}
