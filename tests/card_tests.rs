// Host-side tests for card tilt, magnetic buttons and scroll triggers.

use folio_core::constants::{PARALLAX_SCRUB_SEC, REVEAL_SCRUB_SEC};
use folio_core::{
    parallax_percent, parallax_progress, reveal_pose, reveal_progress, CardPointer, CardTransform,
    ElementBox, MagneticButton, MagneticConfig, RevealPose, ScrubbedTrigger, TiltCard, TiltConfig,
    TiltState,
};

const DT: f32 = 1.0 / 60.0;

fn run(card: &mut TiltCard, seconds: f32) {
    let frames = (seconds / DT).ceil() as usize;
    for _ in 0..frames {
        card.advance(DT);
    }
}

fn at(x: f32, y: f32) -> CardPointer {
    CardPointer {
        x,
        y,
        width: 200.0,
        height: 100.0,
    }
}

#[test]
fn enter_lifts_the_card() {
    let mut card = TiltCard::new(TiltConfig::default());
    assert_eq!(card.state(), TiltState::Idle);
    assert!(card.transform().is_identity());

    card.pointer_enter();
    assert_eq!(card.state(), TiltState::Tracking);
    run(&mut card, 0.5);
    let t = card.transform();
    assert_eq!(t.z, 20.0);
    assert_eq!(t.scale, 1.02);
    assert_eq!(t.border_opacity, 1.0);
}

#[test]
fn tilt_tracks_pointer_offset() {
    let mut card = TiltCard::new(TiltConfig::default());
    card.pointer_enter();
    // 50px right of and 25px above the centre
    assert!(card.pointer_move(at(150.0, 25.0), false));
    run(&mut card, 0.5);
    let t = card.transform();
    assert_eq!(t.rotate_x_deg, 1.0);
    assert_eq!(t.rotate_y_deg, 2.0);
    assert_eq!(t.content, [1.25, -0.625]);
    assert_eq!(t.glow, [50.0, -25.0]);
}

#[test]
fn tilt_is_clamped() {
    let mut card = TiltCard::new(TiltConfig::default());
    card.pointer_move(at(5000.0, 5000.0), false);
    run(&mut card, 0.5);
    let t = card.transform();
    assert_eq!(t.rotate_x_deg, -15.0);
    assert_eq!(t.rotate_y_deg, 15.0);
}

#[test]
fn links_inside_the_card_keep_the_current_tilt() {
    let mut card = TiltCard::new(TiltConfig::default());
    card.pointer_move(at(150.0, 25.0), false);
    run(&mut card, 0.5);
    assert!(!card.pointer_move(at(0.0, 100.0), true));
    run(&mut card, 0.5);
    assert_eq!(card.transform().rotate_y_deg, 2.0);
}

#[test]
fn move_without_enter_starts_tracking() {
    let mut card = TiltCard::new(TiltConfig::default());
    card.pointer_move(at(100.0, 50.0), false);
    assert_eq!(card.state(), TiltState::Tracking);
}

#[test]
fn leave_springs_back_to_exact_identity() {
    let mut card = TiltCard::new(TiltConfig::default());
    card.pointer_enter();
    card.pointer_move(at(180.0, 10.0), false);
    run(&mut card, 0.2);
    card.pointer_leave();
    assert_eq!(card.state(), TiltState::Releasing);
    assert!(card.advance(DT));
    run(&mut card, 0.7);
    assert_eq!(card.state(), TiltState::Idle);
    assert_eq!(card.transform(), CardTransform::IDENTITY);
    assert!(!card.advance(DT));
}

#[test]
fn enter_then_leave_without_move_returns_to_identity() {
    let mut card = TiltCard::new(TiltConfig::default());
    card.pointer_enter();
    card.pointer_leave();
    assert_eq!(card.state(), TiltState::Releasing);
    run(&mut card, 0.7);
    assert_eq!(card.state(), TiltState::Idle);
    assert_eq!(card.transform(), CardTransform::IDENTITY);

    // partway through the lift
    card.pointer_enter();
    run(&mut card, 0.1);
    card.pointer_leave();
    run(&mut card, 0.7);
    assert_eq!(card.transform(), CardTransform::IDENTITY);
    assert!(!card.advance(DT));
}

#[test]
fn reenter_during_release_resumes_tracking() {
    let mut card = TiltCard::new(TiltConfig::default());
    card.pointer_move(at(180.0, 10.0), false);
    run(&mut card, 0.5);
    card.pointer_leave();
    run(&mut card, 0.1);
    card.pointer_enter();
    assert_eq!(card.state(), TiltState::Tracking);
    assert!(card.advance(DT));
}

#[test]
fn reset_snaps_to_identity() {
    let mut card = TiltCard::new(TiltConfig::default());
    card.pointer_move(at(180.0, 10.0), false);
    run(&mut card, 0.1);
    card.reset();
    assert_eq!(card.state(), TiltState::Idle);
    assert!(card.transform().is_identity());
    assert!(!card.advance(DT));
}

#[test]
fn magnetic_button_follows_then_returns() {
    let mut button = MagneticButton::new(MagneticConfig::default());
    button.pointer_move(100.0, -50.0);
    for _ in 0..30 {
        button.advance(DT);
    }
    let [x, y] = button.offset();
    assert!((x - 30.0).abs() < 1e-4 && (y + 15.0).abs() < 1e-4);

    button.pointer_leave();
    let mut frames = 0;
    while button.advance(DT) {
        frames += 1;
        assert!(frames < 60);
    }
    assert_eq!(button.offset(), [0.0, 0.0]);
}

#[test]
fn parallax_spans_enter_to_exit() {
    let vh = 1000.0;
    assert_eq!(parallax_progress(ElementBox { top: vh, height: 500.0 }, vh), 0.0);
    assert_eq!(parallax_progress(ElementBox { top: -500.0, height: 500.0 }, vh), 1.0);
    let mid = parallax_progress(ElementBox { top: 250.0, height: 500.0 }, vh);
    assert!((mid - 0.5).abs() < 1e-6);
    assert_eq!(parallax_percent(1.0, 0.5), -25.0);
    assert_eq!(parallax_percent(0.0, 0.5), 0.0);
}

#[test]
fn reveal_runs_between_trigger_lines() {
    let vh = 1000.0;
    assert_eq!(reveal_progress(ElementBox { top: vh, height: 300.0 }, vh), 0.0);
    assert_eq!(reveal_progress(ElementBox { top: 0.0, height: 300.0 }, vh), 1.0);
    let mid = reveal_progress(ElementBox { top: 600.0, height: 300.0 }, vh);
    assert!(mid > 0.0 && mid < 1.0);

    assert_eq!(reveal_pose(0.0), RevealPose::HIDDEN);
    assert_eq!(reveal_pose(1.0), RevealPose::SHOWN);
    let half = reveal_pose(0.5);
    assert!(half.opacity > 0.5 && half.opacity < 1.0);
}

#[test]
fn scrubbed_trigger_settles() {
    for scrub in [REVEAL_SCRUB_SEC, PARALLAX_SCRUB_SEC] {
        let mut trigger = ScrubbedTrigger::new(scrub, 0.0);
        trigger.set_target(1.0);
        assert!(!trigger.is_settled());
        let first = trigger.step(DT);
        assert!(first > 0.0 && first < 0.1);
        for _ in 0..3000 {
            trigger.step(DT);
        }
        assert!(trigger.is_settled());
        assert_eq!(trigger.value(), 1.0);
    }
}
