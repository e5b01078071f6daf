//! Mount/unmount of the background scene against an abstract host.
//!
//! The host hands out RAII handles: a listener stays registered while its
//! handle lives, a frame loop keeps ticking while its handle lives, and a
//! surface holds GPU resources until dropped. `SceneLifecycle` owns all of
//! them, so every exit path (early error, explicit unmount, plain drop)
//! releases everything that was acquired.

use crate::config::SceneConfig;
use crate::error::CoreError;
use crate::input::{input_context, InputDispatcher, InputReader, Viewport};
use crate::scene::{FrameSnapshot, SceneModel};
use rand::Rng;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Consecutive render failures after which the surface is released and the
/// scene keeps running without drawing.
pub const MAX_RENDER_FAILURES: u32 = 3;

/// Longest frame step fed to the animators; longer gaps (tab in background)
/// are treated as this long.
pub const MAX_FRAME_STEP_SEC: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportEvent {
    PointerMove,
    Scroll,
    Resize,
}

impl ViewportEvent {
    pub const ALL: [ViewportEvent; 3] = [Self::PointerMove, Self::Scroll, Self::Resize];

    pub fn name(&self) -> &'static str {
        match self {
            Self::PointerMove => "pointermove",
            Self::Scroll => "scroll",
            Self::Resize => "resize",
        }
    }
}

pub trait RenderSurface {
    /// Upload static geometry (particle instances, mesh wireframes) once the
    /// model has been generated.
    fn upload(&mut self, model: &SceneModel) -> Result<(), CoreError>;
    fn resize(&mut self, viewport: &Viewport, max_pixel_ratio: f64);
    fn render(&mut self, frame: &FrameSnapshot) -> Result<(), CoreError>;
}

/// Per-frame callback; receives the frame timestamp in milliseconds.
pub type FrameTick = Box<dyn FnMut(f64)>;

pub trait Host {
    /// Unregisters itself when dropped.
    type Listener;
    /// Cancels any pending frame callback when dropped.
    type FrameLoop;
    type Surface: RenderSurface;

    fn viewport(&self) -> Viewport;
    fn listen(&self, event: ViewportEvent, dispatcher: InputDispatcher) -> Result<Self::Listener, CoreError>;
    fn start_frames(&self, tick: FrameTick) -> Result<Self::FrameLoop, CoreError>;
}

struct Shared<S> {
    model: SceneModel,
    surface: Option<S>,
    last_ms: Option<f64>,
    failures: u32,
    max_pixel_ratio: f64,
}

impl<S: RenderSurface> Shared<S> {
    fn tick(&mut self, now_ms: f64, reader: &InputReader) {
        let dt_sec = match self.last_ms {
            Some(last) => (((now_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_STEP_SEC),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        let input = reader.snapshot();
        let update = self.model.advance(dt_sec, now_ms / 1000.0, &input);

        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if update.resized {
            surface.resize(&input.viewport, self.max_pixel_ratio);
        }
        match surface.render(&self.model.snapshot()) {
            Ok(()) => self.failures = 0,
            Err(e) => {
                self.failures += 1;
                log::error!("[scene] render error ({}): {}", self.failures, e);
                if self.failures >= MAX_RENDER_FAILURES {
                    log::warn!("[scene] releasing surface after repeated failures");
                    self.surface = None;
                }
            }
        }
    }
}

pub struct SceneLifecycle<H: Host> {
    shared: Rc<RefCell<Shared<H::Surface>>>,
    reader: InputReader,
    listeners: SmallVec<[H::Listener; 4]>,
    frames: Option<H::FrameLoop>,
}

impl<H: Host> SceneLifecycle<H> {
    /// Build the scene, wire pointer/scroll/resize listeners and start the
    /// frame loop. `surface` is `None` when no graphics context could be
    /// acquired; the scene then runs without drawing.
    pub fn mount(
        host: &H,
        config: SceneConfig,
        rng: &mut impl Rng,
        surface: Option<H::Surface>,
    ) -> Result<Self, CoreError>
    where
        H::Surface: 'static,
    {
        let (dispatcher, reader) = input_context(host.viewport());
        let max_pixel_ratio = config.render.max_pixel_ratio;
        let model = SceneModel::new(config, rng, &reader.snapshot())?;
        let surface = surface.and_then(|mut s| match s.upload(&model) {
            Ok(()) => {
                s.resize(&model.viewport(), max_pixel_ratio);
                Some(s)
            }
            Err(e) => {
                log::warn!("[scene] surface upload failed, running without drawing: {}", e);
                None
            }
        });
        let shared = Rc::new(RefCell::new(Shared {
            model,
            surface,
            last_ms: None,
            failures: 0,
            max_pixel_ratio,
        }));

        let mut listeners = SmallVec::new();
        for event in ViewportEvent::ALL {
            listeners.push(host.listen(event, dispatcher.clone())?);
        }

        let tick_shared = shared.clone();
        let tick_reader = reader.clone();
        let frames = host.start_frames(Box::new(move |now_ms| {
            // a re-entrant tick is skipped rather than panicking
            if let Ok(mut s) = tick_shared.try_borrow_mut() {
                s.tick(now_ms, &tick_reader);
            }
        }))?;

        log::info!("[scene] mounted ({} listeners)", listeners.len());
        Ok(Self {
            shared,
            reader,
            listeners,
            frames: Some(frames),
        })
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_rendering(&self) -> bool {
        self.shared.borrow().surface.is_some()
    }

    pub fn input(&self) -> &InputReader {
        &self.reader
    }

    pub fn with_model<R>(&self, f: impl FnOnce(&SceneModel) -> R) -> R {
        f(&self.shared.borrow().model)
    }

    pub fn unmount(self) {
        drop(self);
    }

    fn release(&mut self) {
        self.listeners.clear();
        self.frames = None;
        if let Ok(mut s) = self.shared.try_borrow_mut() {
            s.surface = None;
        }
    }
}

impl<H: Host> Drop for SceneLifecycle<H> {
    fn drop(&mut self) {
        self.release();
        log::info!("[scene] unmounted");
    }
}
