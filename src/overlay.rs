use crate::constants::{LOADING_GATE_ID, PAGE_LOADER_BAR_ID, PAGE_LOADER_ID};
use crate::dom;
use crate::frame::{step_seconds, FrameLoop};
use crate::styles;
use folio_core::{LoaderConfig, LoadingGate, PageLoader, PageLoaderConfig};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

struct GateState {
    el: web::HtmlElement,
    gate: LoadingGate,
    load_listener: Option<EventListener>,
    delay: Option<Timeout>,
    frames: Option<FrameLoop>,
    last_ms: Option<f64>,
}

/// Full-screen cover that fades out shortly after the page `load` event.
/// Dropping it cancels the pending timer and frames; the element stays.
pub struct LoadingGateHandle {
    _state: Rc<RefCell<GateState>>,
}

pub fn mount_loading_gate(
    window: &web::Window,
    document: &web::Document,
    config: LoaderConfig,
) -> Option<LoadingGateHandle> {
    let el = document
        .get_element_by_id(LOADING_GATE_ID)?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    let state = Rc::new(RefCell::new(GateState {
        el,
        gate: LoadingGate::new(config),
        load_listener: None,
        delay: None,
        frames: None,
        last_ms: None,
    }));
    if document.ready_state() == "complete" {
        document_loaded(&state);
    } else {
        let weak = Rc::downgrade(&state);
        let listener = EventListener::once(window, "load", move |_| {
            if let Some(s) = weak.upgrade() {
                document_loaded(&s);
            }
        });
        state.borrow_mut().load_listener = Some(listener);
    }
    Some(LoadingGateHandle { _state: state })
}

fn document_loaded(state: &Rc<RefCell<GateState>>) {
    let delay_ms = {
        let mut s = state.borrow_mut();
        s.gate.document_loaded();
        s.gate.delay_ms()
    };
    let weak = Rc::downgrade(state);
    let timeout = Timeout::new(delay_ms, move || {
        let Some(s) = weak.upgrade() else {
            return;
        };
        s.borrow_mut().gate.delay_elapsed();
        start_fade(&s);
    });
    state.borrow_mut().delay = Some(timeout);
}

fn start_fade(state: &Rc<RefCell<GateState>>) {
    let weak: Weak<RefCell<GateState>> = Rc::downgrade(state);
    let frames = FrameLoop::start(move |now_ms| {
        let Some(s) = weak.upgrade() else {
            return false;
        };
        let Ok(mut g) = s.try_borrow_mut() else {
            return true;
        };
        let dt = step_seconds(&mut g.last_ms, now_ms);
        let fading = g.gate.advance(dt);
        dom::set_style(&g.el, "opacity", &styles::opacity(g.gate.opacity()));
        if g.gate.is_removed() {
            g.el.remove();
            log::info!("[loader] loading gate removed");
        }
        fading
    });
    let mut g = state.borrow_mut();
    g.frames = Some(frames);
}

struct PageLoaderState {
    cover: web::HtmlElement,
    bar: Option<web::HtmlElement>,
    loader: PageLoader,
    last_ms: Option<f64>,
}

/// Branded intro cover: progress bar fill, short pause, slide away.
pub struct PageLoaderHandle {
    _state: Rc<RefCell<PageLoaderState>>,
    _frames: FrameLoop,
}

pub fn mount_page_loader(
    document: &web::Document,
    config: PageLoaderConfig,
) -> Option<PageLoaderHandle> {
    let cover = document
        .get_element_by_id(PAGE_LOADER_ID)?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    let bar = document
        .get_element_by_id(PAGE_LOADER_BAR_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    let state = Rc::new(RefCell::new(PageLoaderState {
        cover,
        bar,
        loader: PageLoader::new(config),
        last_ms: None,
    }));
    let weak = Rc::downgrade(&state);
    let frames = FrameLoop::start(move |now_ms| {
        let Some(s) = weak.upgrade() else {
            return false;
        };
        let Ok(mut p) = s.try_borrow_mut() else {
            return true;
        };
        let dt = step_seconds(&mut p.last_ms, now_ms);
        let running = p.loader.advance(dt);
        if let Some(bar) = &p.bar {
            dom::set_style(bar, "width", &styles::width_percent(p.loader.bar_percent()));
        }
        dom::set_style(
            &p.cover,
            "transform",
            &styles::translate_y_percent(p.loader.cover_offset_percent()),
        );
        if p.loader.is_removed() {
            p.cover.remove();
            log::info!("[loader] page loader removed");
        }
        running
    });
    Some(PageLoaderHandle {
        _state: state,
        _frames: frames,
    })
}
