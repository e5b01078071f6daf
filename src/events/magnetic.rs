use crate::constants::MAGNETIC_SELECTOR;
use crate::dom;
use crate::frame::{step_seconds, FrameLoop};
use crate::styles;
use folio_core::{MagneticButton, MagneticConfig};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

struct ButtonState {
    el: web::HtmlElement,
    button: MagneticButton,
    frames: Option<FrameLoop>,
    last_ms: Option<f64>,
}

pub struct MagneticButtons {
    buttons: Vec<Rc<RefCell<ButtonState>>>,
    _listeners: Vec<EventListener>,
}

impl MagneticButtons {
    pub fn len(&self) -> usize {
        self.buttons.len()
    }
}

pub fn wire_magnetic(document: &web::Document, config: MagneticConfig) -> MagneticButtons {
    let mut buttons = Vec::new();
    let mut listeners = Vec::new();
    let Some(body) = document.body() else {
        return MagneticButtons {
            buttons,
            _listeners: listeners,
        };
    };
    for el in dom::query_all(&body, MAGNETIC_SELECTOR) {
        let state = Rc::new(RefCell::new(ButtonState {
            el: el.clone(),
            button: MagneticButton::new(config.clone()),
            frames: None,
            last_ms: None,
        }));

        let weak = Rc::downgrade(&state);
        listeners.push(EventListener::new(&el, "pointermove", move |e| {
            let (Some(s), Some(me)) = (weak.upgrade(), e.dyn_ref::<web::MouseEvent>()) else {
                return;
            };
            {
                let mut b = s.borrow_mut();
                let rect = b.el.get_bounding_client_rect();
                let dx = f64::from(me.client_x()) - (rect.left() + rect.width() / 2.0);
                let dy = f64::from(me.client_y()) - (rect.top() + rect.height() / 2.0);
                b.button.pointer_move(dx as f32, dy as f32);
            }
            ensure_frames(&s);
        }));

        let weak = Rc::downgrade(&state);
        listeners.push(EventListener::new(&el, "pointerleave", move |_| {
            if let Some(s) = weak.upgrade() {
                s.borrow_mut().button.pointer_leave();
                ensure_frames(&s);
            }
        }));
        buttons.push(state);
    }
    MagneticButtons {
        buttons,
        _listeners: listeners,
    }
}

fn ensure_frames(state: &Rc<RefCell<ButtonState>>) {
    if state
        .borrow()
        .frames
        .as_ref()
        .is_some_and(FrameLoop::is_running)
    {
        return;
    }
    let weak: Weak<RefCell<ButtonState>> = Rc::downgrade(state);
    let frames = FrameLoop::start(move |now_ms| {
        let Some(s) = weak.upgrade() else {
            return false;
        };
        let Ok(mut b) = s.try_borrow_mut() else {
            return true;
        };
        let dt = step_seconds(&mut b.last_ms, now_ms);
        let moving = b.button.advance(dt);
        let [x, y] = b.button.offset();
        dom::set_style(&b.el, "transform", &styles::translate_px(x, y));
        moving
    });
    let mut b = state.borrow_mut();
    b.last_ms = None;
    b.frames = Some(frames);
}
