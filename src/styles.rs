// Inline style values for animated elements. Pure formatting, no DOM.

use crate::constants::CARD_PERSPECTIVE_PX;
use folio_core::{CardTransform, EntrancePose, RevealPose};

/// Tilt and scroll reveal share the card's transform: rotations and depth
/// add, scales multiply.
pub fn card_transform(tilt: &CardTransform, reveal: &RevealPose) -> String {
    format!(
        "perspective({:.0}px) translate3d(0px, 0px, {:.3}px) rotateX({:.3}deg) rotateY({:.3}deg) scale({:.4})",
        CARD_PERSPECTIVE_PX,
        tilt.z + reveal.z,
        tilt.rotate_x_deg + reveal.rotate_x_deg,
        tilt.rotate_y_deg + reveal.rotate_y_deg,
        tilt.scale * reveal.scale,
    )
}

pub fn entrance_transform(pose: &EntrancePose) -> String {
    format!(
        "translate3d({:.3}px, {:.3}px, 0px) rotateX({:.3}deg) rotateY({:.3}deg) scale({:.4})",
        pose.x, pose.y, pose.rotate_x_deg, pose.rotate_y_deg, pose.scale,
    )
}

pub fn translate_px(x: f32, y: f32) -> String {
    format!("translate3d({:.3}px, {:.3}px, 0px)", x, y)
}

/// The glow is anchored on the card centre and shifted by its offset.
pub fn glow_transform(offset: [f32; 2]) -> String {
    format!(
        "translate(-50%, -50%) translate({:.3}px, {:.3}px)",
        offset[0], offset[1]
    )
}

pub fn translate_y_percent(percent: f32) -> String {
    format!("translate3d(0px, {:.3}%, 0px)", percent)
}

pub fn opacity(value: f32) -> String {
    format!("{:.4}", value.clamp(0.0, 1.0))
}

pub fn width_percent(percent: f32) -> String {
    format!("{:.3}%", percent.clamp(0.0, 100.0))
}
