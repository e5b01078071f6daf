use crate::constants::{ATTR_PARALLAX, DEFAULT_PARALLAX_SPEED, PARALLAX_SELECTOR};
use crate::dom;
use crate::frame::{step_seconds, FrameLoop};
use crate::overrides::parse_attr;
use crate::styles;
use folio_core::constants::PARALLAX_SCRUB_SEC;
use folio_core::{parallax_percent, parallax_progress, ScrubbedTrigger};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

struct Section {
    el: web::HtmlElement,
    speed: f32,
    trigger: ScrubbedTrigger,
}

struct ParallaxState {
    sections: Vec<Section>,
    frames: Option<FrameLoop>,
    last_ms: Option<f64>,
}

/// Sections marked `data-parallax="<speed>"` drift upward as they scroll
/// through the viewport.
pub struct Parallax {
    state: Rc<RefCell<ParallaxState>>,
    _listeners: Vec<EventListener>,
}

impl Parallax {
    pub fn len(&self) -> usize {
        self.state.borrow().sections.len()
    }
}

fn measure(el: &web::HtmlElement, vh: f64) -> f32 {
    let anchor: web::Element = el.parent_element().unwrap_or_else(|| el.clone().into());
    parallax_progress(super::element_box(&anchor), vh)
}

pub fn wire_parallax(document: &web::Document) -> Parallax {
    let vh = super::viewport_height();
    let sections = document
        .body()
        .map(|body| dom::query_all(&body, PARALLAX_SELECTOR))
        .unwrap_or_default()
        .into_iter()
        .map(|el| {
            let speed = parse_attr(ATTR_PARALLAX, el.get_attribute(ATTR_PARALLAX))
                .unwrap_or(DEFAULT_PARALLAX_SPEED);
            let trigger = ScrubbedTrigger::new(PARALLAX_SCRUB_SEC, measure(&el, vh));
            Section { el, speed, trigger }
        })
        .collect::<Vec<_>>();
    let state = Rc::new(RefCell::new(ParallaxState {
        sections,
        frames: None,
        last_ms: None,
    }));
    apply_styles(&state.borrow());

    let mut listeners = Vec::new();
    if let Some(window) = web::window() {
        for event in ["scroll", "resize"] {
            let weak = Rc::downgrade(&state);
            listeners.push(EventListener::new(&window, event, move |_| {
                let Some(s) = weak.upgrade() else {
                    return;
                };
                let vh = super::viewport_height();
                for section in s.borrow_mut().sections.iter_mut() {
                    let p = measure(&section.el, vh);
                    section.trigger.set_target(p);
                }
                ensure_frames(&s);
            }));
        }
    }
    Parallax {
        state,
        _listeners: listeners,
    }
}

fn ensure_frames(state: &Rc<RefCell<ParallaxState>>) {
    if state
        .borrow()
        .frames
        .as_ref()
        .is_some_and(FrameLoop::is_running)
    {
        return;
    }
    let weak: Weak<RefCell<ParallaxState>> = Rc::downgrade(state);
    let frames = FrameLoop::start(move |now_ms| {
        let Some(s) = weak.upgrade() else {
            return false;
        };
        let Ok(mut p) = s.try_borrow_mut() else {
            return true;
        };
        let dt = step_seconds(&mut p.last_ms, now_ms);
        let mut settled = true;
        for section in p.sections.iter_mut() {
            section.trigger.step(dt);
            settled &= section.trigger.is_settled();
        }
        apply_styles(&p);
        !settled
    });
    let mut p = state.borrow_mut();
    p.last_ms = None;
    p.frames = Some(frames);
}

fn apply_styles(p: &ParallaxState) {
    for section in &p.sections {
        let percent = parallax_percent(section.trigger.value(), section.speed);
        dom::set_style(&section.el, "transform", &styles::translate_y_percent(percent));
    }
}
