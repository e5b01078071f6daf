use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Per-frame callback; gets the frame timestamp (ms) and returns whether
/// another frame should be requested.
type Tick = Box<dyn FnMut(f64) -> bool>;

struct LoopState {
    handle: Option<AnimationFrame>,
    tick: Tick,
}

/// A `requestAnimationFrame` loop that re-requests itself after each tick.
///
/// Dropping the loop cancels the pending frame; nothing runs afterwards.
pub struct FrameLoop {
    state: Rc<RefCell<LoopState>>,
}

impl FrameLoop {
    pub fn start(tick: impl FnMut(f64) -> bool + 'static) -> Self {
        let state = Rc::new(RefCell::new(LoopState {
            handle: None,
            tick: Box::new(tick),
        }));
        schedule(Rc::downgrade(&state));
        Self { state }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().handle.is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.handle = None;
        }
    }
}

fn schedule(weak: Weak<RefCell<LoopState>>) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let next = weak.clone();
    let handle = request_animation_frame(move |timestamp| {
        let Some(state) = next.upgrade() else {
            return;
        };
        let keep_going = {
            let mut s = state.borrow_mut();
            s.handle.take();
            (s.tick)(timestamp)
        };
        // only the owning FrameLoop may keep the state alive past this point
        drop(state);
        if keep_going {
            schedule(next);
        }
    });
    state.borrow_mut().handle = Some(handle);
}

/// Milliseconds between two frame timestamps as seconds, clamped so a
/// backgrounded tab does not produce one giant step.
pub fn step_seconds(last_ms: &mut Option<f64>, now_ms: f64) -> f32 {
    let dt = match *last_ms {
        Some(last) => ((now_ms - last) / 1000.0) as f32,
        None => 0.0,
    };
    *last_ms = Some(now_ms);
    dt.clamp(0.0, folio_core::MAX_FRAME_STEP_SEC)
}
