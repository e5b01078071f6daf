pub mod cards;
pub mod entrance;
pub mod magnetic;
pub mod parallax;

use crate::dom;
use folio_core::ElementBox;
use web_sys as web;

pub(crate) fn element_box(el: &web::Element) -> ElementBox {
    let rect = el.get_bounding_client_rect();
    ElementBox {
        top: rect.top(),
        height: rect.height(),
    }
}

pub(crate) fn viewport_height() -> f64 {
    web::window()
        .map(|w| dom::viewport(&w).height)
        .unwrap_or(0.0)
}
