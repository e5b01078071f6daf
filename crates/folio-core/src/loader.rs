//! Presentation-only loading covers. Neither gate waits on any real data;
//! they only sequence how the cover leaves the screen.

use crate::config::{LoaderConfig, PageLoaderConfig};
use crate::tween::{Timeline, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePhase {
    Covering,
    Delaying,
    Fading,
    Removed,
}

/// Full-screen cover that stays until the document `load` event, waits a
/// short delay, fades out and is removed for good.
#[derive(Clone, Debug)]
pub struct LoadingGate {
    config: LoaderConfig,
    phase: GatePhase,
    fade: Option<Tween>,
    opacity: f32,
}

impl LoadingGate {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            phase: GatePhase::Covering,
            fade: None,
            opacity: 1.0,
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn delay_ms(&self) -> u32 {
        (self.config.delay_sec.max(0.0) * 1000.0).round() as u32
    }

    /// The document finished loading (or already had when the gate mounted).
    pub fn document_loaded(&mut self) {
        if self.phase == GatePhase::Covering {
            self.phase = GatePhase::Delaying;
        }
    }

    /// The post-load delay timer fired.
    pub fn delay_elapsed(&mut self) {
        if self.phase == GatePhase::Delaying {
            self.phase = GatePhase::Fading;
            self.fade = Some(Tween::new(
                1.0,
                0.0,
                self.config.fade_sec,
                self.config.fade_easing,
            ));
        }
    }

    /// Step the fade; returns `true` while frames are still needed.
    pub fn advance(&mut self, dt_sec: f32) -> bool {
        if self.phase != GatePhase::Fading {
            return false;
        }
        let Some(fade) = self.fade.as_mut() else {
            return false;
        };
        let step = fade.advance(dt_sec);
        self.opacity = step.value;
        if step.done {
            self.fade = None;
            self.phase = GatePhase::Removed;
            log::debug!("[loader] gate removed");
        }
        !step.done
    }

    pub fn is_removed(&self) -> bool {
        self.phase == GatePhase::Removed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageLoaderPart {
    /// Progress bar width, percent.
    Bar,
    /// Cover vertical offset, percent of its own height.
    Cover,
}

/// Branded intro: fill the progress bar, pause, slide the cover up.
pub struct PageLoader {
    timeline: Timeline<PageLoaderPart>,
}

impl PageLoader {
    pub fn new(config: PageLoaderConfig) -> Self {
        let timeline = Timeline::new()
            .then(
                PageLoaderPart::Bar,
                0.0,
                100.0,
                config.bar_sec,
                config.bar_easing,
            )
            .then_after(
                config.gap_sec,
                PageLoaderPart::Cover,
                0.0,
                -100.0,
                config.slide_sec,
                config.slide_easing,
            );
        Self { timeline }
    }

    pub fn bar_percent(&self) -> f32 {
        self.timeline.value(PageLoaderPart::Bar).unwrap_or(0.0)
    }

    pub fn cover_offset_percent(&self) -> f32 {
        self.timeline.value(PageLoaderPart::Cover).unwrap_or(0.0)
    }

    /// Which part is currently animating (or waiting to), if any.
    pub fn active_part(&self) -> Option<PageLoaderPart> {
        self.timeline.current_key()
    }

    /// Returns `true` while frames are still needed.
    pub fn advance(&mut self, dt_sec: f32) -> bool {
        !self.timeline.advance(dt_sec)
    }

    pub fn is_removed(&self) -> bool {
        self.timeline.is_finished()
    }
}

impl Default for PageLoader {
    fn default() -> Self {
        Self::new(PageLoaderConfig::default())
    }
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}
