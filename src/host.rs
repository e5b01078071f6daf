use crate::dom;
use crate::frame::FrameLoop;
use crate::render::GpuSurface;
use folio_core::{CoreError, FrameTick, Host, InputDispatcher, Viewport, ViewportEvent};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Browser host for the scene lifecycle: window listeners, animation frames
/// and a WebGPU surface.
pub struct WebHost {
    window: web::Window,
    document: web::Document,
}

impl WebHost {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }
}

impl Host for WebHost {
    type Listener = EventListener;
    type FrameLoop = FrameLoop;
    type Surface = GpuSurface;

    fn viewport(&self) -> Viewport {
        dom::viewport(&self.window)
    }

    fn listen(
        &self,
        event: ViewportEvent,
        dispatcher: InputDispatcher,
    ) -> Result<EventListener, CoreError> {
        let window = self.window.clone();
        let document = self.document.clone();
        let listener = match event {
            ViewportEvent::PointerMove => {
                EventListener::new(&self.window, event.name(), move |e| {
                    if let Some(me) = e.dyn_ref::<web::MouseEvent>() {
                        dispatcher.pointer_moved(f64::from(me.client_x()), f64::from(me.client_y()));
                    }
                })
            }
            ViewportEvent::Scroll => {
                // the page may already be scrolled when the scene mounts
                dispatcher.scrolled(dom::scroll_y(&window), dom::document_height(&document));
                EventListener::new(&self.window, event.name(), move |_| {
                    dispatcher.scrolled(dom::scroll_y(&window), dom::document_height(&document));
                })
            }
            ViewportEvent::Resize => EventListener::new(&self.window, event.name(), move |_| {
                dispatcher.resized(dom::viewport(&window));
                // the scrollable range changes with the viewport height
                dispatcher.scrolled(dom::scroll_y(&window), dom::document_height(&document));
            }),
        };
        log::debug!("[input] listening for {}", event.name());
        Ok(listener)
    }

    fn start_frames(&self, mut tick: FrameTick) -> Result<FrameLoop, CoreError> {
        Ok(FrameLoop::start(move |now_ms| {
            tick(now_ms);
            true
        }))
    }
}
