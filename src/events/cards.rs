use crate::constants::{
    CARD_BORDER_SELECTOR, CARD_CONTENT_SELECTOR, CARD_GLOW_SELECTOR, CARD_INTERACTIVE_SELECTOR,
    CARD_SELECTOR,
};
use crate::dom;
use crate::frame::{step_seconds, FrameLoop};
use crate::styles;
use folio_core::constants::REVEAL_SCRUB_SEC;
use folio_core::{reveal_pose, reveal_progress, CardPointer, ScrubbedTrigger, TiltCard, TiltConfig};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

struct CardDom {
    card: web::HtmlElement,
    content: Option<web::HtmlElement>,
    glow: Option<web::HtmlElement>,
    border: Option<web::HtmlElement>,
}

struct CardState {
    dom: CardDom,
    tilt: TiltCard,
    reveal: ScrubbedTrigger,
    frames: Option<FrameLoop>,
    last_ms: Option<f64>,
}

type SharedCard = Rc<RefCell<CardState>>;

/// Every `[data-tilt-card]` on the page: hover tilt plus scroll reveal.
/// Dropping this removes all listeners and cancels any running frames.
pub struct Cards {
    cards: Vec<SharedCard>,
    _listeners: Vec<EventListener>,
}

impl Cards {
    pub fn len(&self) -> usize {
        self.cards.len()
    }
}

pub fn wire_cards(document: &web::Document, config: TiltConfig) -> Cards {
    let Some(body) = document.body() else {
        return Cards {
            cards: Vec::new(),
            _listeners: Vec::new(),
        };
    };
    let vh = super::viewport_height();
    let mut cards = Vec::new();
    let mut listeners = Vec::new();
    for card in dom::query_all(&body, CARD_SELECTOR) {
        let initial = reveal_progress(super::element_box(&reveal_anchor(&card)), vh);
        let state = Rc::new(RefCell::new(CardState {
            dom: CardDom {
                content: dom::query_child(&card, CARD_CONTENT_SELECTOR),
                glow: dom::query_child(&card, CARD_GLOW_SELECTOR),
                border: dom::query_child(&card, CARD_BORDER_SELECTOR),
                card,
            },
            tilt: TiltCard::new(config.clone()),
            reveal: ScrubbedTrigger::new(REVEAL_SCRUB_SEC, initial),
            frames: None,
            last_ms: None,
        }));
        apply_styles(&state.borrow());
        listeners.extend(wire_card(&state));
        cards.push(state);
    }

    if let Some(window) = web::window() {
        for event in ["scroll", "resize"] {
            let weak: Vec<Weak<RefCell<CardState>>> = cards.iter().map(Rc::downgrade).collect();
            listeners.push(EventListener::new(&window, event, move |_| {
                let vh = super::viewport_height();
                for card in weak.iter().filter_map(Weak::upgrade) {
                    let changed = {
                        let mut c = card.borrow_mut();
                        let p = reveal_progress(super::element_box(&reveal_anchor(&c.dom.card)), vh);
                        c.reveal.set_target(p);
                        !c.reveal.is_settled()
                    };
                    if changed {
                        ensure_frames(&card);
                    }
                }
            }));
        }
    }
    Cards {
        cards,
        _listeners: listeners,
    }
}

/// The card's transform moves its own box, so the reveal is measured on the
/// untransformed parent.
fn reveal_anchor(card: &web::HtmlElement) -> web::Element {
    card.parent_element()
        .unwrap_or_else(|| card.clone().into())
}

fn wire_card(state: &SharedCard) -> Vec<EventListener> {
    let card = state.borrow().dom.card.clone();
    let mut out = Vec::with_capacity(3);

    let weak = Rc::downgrade(state);
    out.push(EventListener::new(&card, "pointerenter", move |_| {
        if let Some(s) = weak.upgrade() {
            s.borrow_mut().tilt.pointer_enter();
            ensure_frames(&s);
        }
    }));

    let weak = Rc::downgrade(state);
    out.push(EventListener::new(&card, "pointermove", move |e| {
        let Some(s) = weak.upgrade() else {
            return;
        };
        let Some(me) = e.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let over_interactive = e
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(CARD_INTERACTIVE_SELECTOR).ok().flatten())
            .is_some();
        let retargeted = {
            let mut c = s.borrow_mut();
            let rect = c.dom.card.get_bounding_client_rect();
            let pointer = CardPointer {
                x: (f64::from(me.client_x()) - rect.left()) as f32,
                y: (f64::from(me.client_y()) - rect.top()) as f32,
                width: rect.width() as f32,
                height: rect.height() as f32,
            };
            c.tilt.pointer_move(pointer, over_interactive)
        };
        if retargeted {
            ensure_frames(&s);
        }
    }));

    let weak = Rc::downgrade(state);
    out.push(EventListener::new(&card, "pointerleave", move |_| {
        if let Some(s) = weak.upgrade() {
            s.borrow_mut().tilt.pointer_leave();
            ensure_frames(&s);
        }
    }));
    out
}

/// Start the card's frame loop unless one is already running. The loop
/// stops by itself once the tilt is idle and the reveal has settled.
fn ensure_frames(state: &SharedCard) {
    if state
        .borrow()
        .frames
        .as_ref()
        .is_some_and(FrameLoop::is_running)
    {
        return;
    }
    let weak = Rc::downgrade(state);
    let frames = FrameLoop::start(move |now_ms| {
        let Some(s) = weak.upgrade() else {
            return false;
        };
        let Ok(mut c) = s.try_borrow_mut() else {
            return true;
        };
        let dt = step_seconds(&mut c.last_ms, now_ms);
        let tilting = c.tilt.advance(dt);
        c.reveal.step(dt);
        apply_styles(&c);
        let keep_going = tilting || !c.reveal.is_settled();
        if !keep_going {
            c.last_ms = None;
        }
        keep_going
    });
    let mut c = state.borrow_mut();
    c.last_ms = None;
    c.frames = Some(frames);
}

fn apply_styles(c: &CardState) {
    let t = c.tilt.transform();
    let reveal = reveal_pose(c.reveal.value());
    dom::set_style(&c.dom.card, "transform", &styles::card_transform(&t, &reveal));
    dom::set_style(&c.dom.card, "opacity", &styles::opacity(reveal.opacity));
    if let Some(content) = &c.dom.content {
        dom::set_style(content, "transform", &styles::translate_px(t.content[0], t.content[1]));
    }
    if let Some(glow) = &c.dom.glow {
        dom::set_style(glow, "transform", &styles::glow_transform(t.glow));
    }
    if let Some(border) = &c.dom.border {
        dom::set_style(border, "opacity", &styles::opacity(t.border_opacity));
    }
}
