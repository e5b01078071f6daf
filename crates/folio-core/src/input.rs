//! Shared input context for the background scene.
//!
//! Event listeners write through a single [`InputDispatcher`]; animators only
//! ever see [`InputSnapshot`]s handed out by an [`InputReader`]. Writes are
//! last-write-wins: no intermediate events are queued.

use crate::constants::MIN_PIXEL_RATIO;
use crate::pointer::{normalize_pointer, PointerState};
use crate::scroll::scroll_progress;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            (self.width / self.height) as f32
        } else {
            1.0
        }
    }

    /// Device pixel ratio capped at `max`. Ratios below 1 (zoomed out) pass
    /// through down to `MIN_PIXEL_RATIO`.
    pub fn pixel_ratio(&self, max: f64) -> f64 {
        if !(self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0) {
            return 1.0;
        }
        self.device_pixel_ratio.min(max).max(MIN_PIXEL_RATIO)
    }

    /// Backing-store size in physical pixels, never zero.
    pub fn backing_size(&self, max_pixel_ratio: f64) -> (u32, u32) {
        let r = self.pixel_ratio(max_pixel_ratio);
        let w = (self.width.max(0.0) * r) as u32;
        let h = (self.height.max(0.0) * r) as u32;
        (w.max(1), h.max(1))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub pointer: PointerState,
    pub scroll_progress: f32,
    pub viewport: Viewport,
    /// Bumped on every resize so consumers can react once.
    pub resize_epoch: u32,
}

#[derive(Clone)]
pub struct InputDispatcher {
    state: Rc<RefCell<InputSnapshot>>,
}

#[derive(Clone)]
pub struct InputReader {
    state: Rc<RefCell<InputSnapshot>>,
}

/// Create a linked writer/reader pair seeded with the current viewport.
pub fn input_context(viewport: Viewport) -> (InputDispatcher, InputReader) {
    let state = Rc::new(RefCell::new(InputSnapshot {
        viewport,
        ..InputSnapshot::default()
    }));
    (
        InputDispatcher {
            state: state.clone(),
        },
        InputReader { state },
    )
}

impl InputDispatcher {
    pub fn pointer_moved(&self, client_x: f64, client_y: f64) {
        let mut s = self.state.borrow_mut();
        s.pointer = normalize_pointer(client_x, client_y, s.viewport.width, s.viewport.height);
    }

    pub fn scrolled(&self, scroll_y: f64, document_height: f64) {
        let mut s = self.state.borrow_mut();
        s.scroll_progress = scroll_progress(scroll_y, document_height, s.viewport.height);
    }

    pub fn resized(&self, viewport: Viewport) {
        let mut s = self.state.borrow_mut();
        s.viewport = viewport;
        s.resize_epoch = s.resize_epoch.wrapping_add(1);
    }
}

impl InputReader {
    pub fn snapshot(&self) -> InputSnapshot {
        *self.state.borrow()
    }
}
