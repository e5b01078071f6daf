use crate::constants::{
    ATTR_ENTRANCE, ATTR_STAGGER, CHILD_SELECTOR, ENTRANCE_SELECTOR, FLOAT_SELECTOR,
};
use crate::dom;
use crate::frame::{step_seconds, FrameLoop};
use crate::overrides::parse_attr;
use crate::styles;
use folio_core::{EntranceAction, EntranceGroup, EntranceKind, EntranceTrigger, FloatBob};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

struct Group {
    trigger_el: web::HtmlElement,
    items: Vec<web::HtmlElement>,
    group: EntranceGroup,
    trigger: Option<EntranceTrigger>,
}

struct Floater {
    el: web::HtmlElement,
    bob: FloatBob,
}

struct EntranceState {
    groups: Vec<Group>,
    floaters: Vec<Floater>,
    elapsed: f32,
    frames: Option<FrameLoop>,
    last_ms: Option<f64>,
}

/// `[data-entrance]` groups and `[data-float]` decorations.
pub struct Entrances {
    state: Rc<RefCell<EntranceState>>,
    _listeners: Vec<EventListener>,
}

impl Entrances {
    pub fn len(&self) -> usize {
        self.state.borrow().groups.len()
    }

    pub fn floater_count(&self) -> usize {
        self.state.borrow().floaters.len()
    }
}

/// With `data-stagger` (or for the hero) the children animate, otherwise
/// the marked element itself does.
fn mount_group(el: web::HtmlElement) -> Option<Group> {
    let name = el.get_attribute(ATTR_ENTRANCE).unwrap_or_default();
    let Some(kind) = EntranceKind::from_name(&name) else {
        log::warn!("[entrance] ignoring {}=\"{}\"", ATTR_ENTRANCE, name);
        return None;
    };
    let stagger_attr = el.get_attribute(ATTR_STAGGER);
    let items = if stagger_attr.is_some() || kind == EntranceKind::Hero {
        dom::query_all(&el, CHILD_SELECTOR)
    } else {
        vec![el.clone()]
    };
    let stagger = stagger_attr
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| parse_attr::<f32>(ATTR_STAGGER, Some(v)))
        .filter(|s| *s >= 0.0);
    let mut group = EntranceGroup::new(kind, items.len(), stagger);
    let trigger = kind
        .start_line()
        .map(|line| EntranceTrigger::new(line, kind.toggle_actions()));
    if trigger.is_none() {
        group.play();
    }
    Some(Group {
        trigger_el: el,
        items,
        group,
        trigger,
    })
}

pub fn wire_entrances(document: &web::Document) -> Entrances {
    let body = document.body();
    let groups = body
        .as_ref()
        .map(|b| dom::query_all(b, ENTRANCE_SELECTOR))
        .unwrap_or_default()
        .into_iter()
        .filter_map(mount_group)
        .collect::<Vec<_>>();
    let floaters = body
        .as_ref()
        .map(|b| dom::query_all(b, FLOAT_SELECTOR))
        .unwrap_or_default()
        .iter()
        .flat_map(|container| dom::query_all(container, CHILD_SELECTOR))
        .enumerate()
        .map(|(i, el)| Floater {
            el,
            bob: FloatBob::new(i),
        })
        .collect::<Vec<_>>();
    let state = Rc::new(RefCell::new(EntranceState {
        groups,
        floaters,
        elapsed: 0.0,
        frames: None,
        last_ms: None,
    }));
    {
        let mut s = state.borrow_mut();
        check_triggers(&mut s);
        s.groups.iter().for_each(paint_group);
        paint_floaters(&s);
    }
    ensure_frames(&state);

    let mut listeners = Vec::new();
    if let Some(window) = web::window() {
        for event in ["scroll", "resize"] {
            let weak = Rc::downgrade(&state);
            listeners.push(EventListener::new(&window, event, move |_| {
                let Some(s) = weak.upgrade() else {
                    return;
                };
                let fired = check_triggers(&mut s.borrow_mut());
                if fired {
                    ensure_frames(&s);
                }
            }));
        }
    }
    Entrances {
        state,
        _listeners: listeners,
    }
}

/// Returns `true` when any group started playing in either direction.
fn check_triggers(s: &mut EntranceState) -> bool {
    let vh = super::viewport_height();
    let mut fired = false;
    for g in s.groups.iter_mut() {
        let Some(trigger) = g.trigger.as_mut() else {
            continue;
        };
        match trigger.update(super::element_box(&g.trigger_el), vh) {
            Some(EntranceAction::Play) => g.group.play(),
            Some(EntranceAction::Reverse) => g.group.reverse(),
            None => continue,
        }
        log::debug!(
            "[entrance] {:?} {}",
            g.group.kind(),
            if trigger.is_active() { "play" } else { "reverse" }
        );
        fired = true;
    }
    fired
}

fn ensure_frames(state: &Rc<RefCell<EntranceState>>) {
    if state
        .borrow()
        .frames
        .as_ref()
        .is_some_and(FrameLoop::is_running)
    {
        return;
    }
    let weak: Weak<RefCell<EntranceState>> = Rc::downgrade(state);
    let frames = FrameLoop::start(move |now_ms| {
        let Some(s) = weak.upgrade() else {
            return false;
        };
        let Ok(mut e) = s.try_borrow_mut() else {
            return true;
        };
        let dt = step_seconds(&mut e.last_ms, now_ms);
        e.elapsed += dt;
        let mut busy = !e.floaters.is_empty();
        for g in e.groups.iter_mut() {
            if !g.group.is_playing() {
                continue;
            }
            busy |= g.group.advance(dt);
            paint_group(g);
        }
        paint_floaters(&e);
        busy
    });
    let mut e = state.borrow_mut();
    e.last_ms = None;
    e.frames = Some(frames);
}

fn paint_group(g: &Group) {
    for (i, el) in g.items.iter().enumerate() {
        let pose = g.group.pose(i);
        dom::set_style(el, "transform", &styles::entrance_transform(&pose));
        dom::set_style(el, "opacity", &styles::opacity(pose.opacity));
    }
}

fn paint_floaters(s: &EntranceState) {
    for f in &s.floaters {
        let [x, y] = f.bob.offset(s.elapsed);
        dom::set_style(&f.el, "transform", &styles::translate_px(x, y));
    }
}
