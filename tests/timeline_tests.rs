// Host-side tests for the tween engine and the loading covers and entrance
// animations built on it.

use folio_core::{
    stagger_delay, Animated, Easing, ElementBox, EntranceAction, EntranceGroup, EntranceKind,
    EntrancePose, EntranceTrigger, FloatBob, GatePhase, LoaderConfig, LoadingGate, LoopMode,
    LoopTween, PageLoader, PageLoaderPart, Timeline, ToggleActions, Tween, TweenSet,
};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn tween_lands_exactly_on_target() {
    let mut t = Tween::new(3.0, 7.3, 0.5, Easing::ElasticOut(1.0, 0.3));
    let mut steps = 0;
    while !t.advance(1.0 / 60.0).done {
        steps += 1;
        assert!(steps < 100);
    }
    assert_eq!(t.value(), 7.3);
    assert_eq!(t.remaining(), 0.0);
}

#[test]
fn retarget_starts_from_current_value() {
    let mut t = Tween::new(0.0, 10.0, 1.0, Easing::Linear);
    t.advance(0.5);
    t.retarget(0.0, 1.0, Easing::Linear);
    assert_eq!(t.from, 5.0);
    assert_eq!(t.progress(), 0.0);
}

#[test]
fn zero_duration_animation_snaps() {
    let mut a = Animated::new(1.0);
    a.animate_to(4.0, 0.0, Easing::Linear);
    assert_eq!(a.get(), 4.0);
    assert!(!a.is_animating());
}

#[test]
fn loop_tweens_repeat_and_yoyo() {
    let spin = LoopTween {
        from: 0.0,
        to: 10.0,
        duration: 2.0,
        easing: Easing::Linear,
        mode: LoopMode::Repeat,
    };
    assert_eq!(spin.sample(1.0), 5.0);
    assert_eq!(spin.sample(3.0), 5.0);

    let bob = LoopTween {
        mode: LoopMode::Yoyo,
        ..spin
    };
    assert_eq!(bob.sample(2.0), 10.0);
    assert_eq!(bob.sample(3.0), 5.0);
    assert_eq!(bob.sample(4.0), 0.0);
}

#[test]
fn tween_set_fires_completion_once() {
    let fired = Rc::new(Cell::new(0));
    let mut set = TweenSet::new();
    let f = fired.clone();
    set.to_then("opacity", 0.0, 1.0, 0.2, Easing::Linear, move || f.set(f.get() + 1));
    assert!(set.is_animating("opacity"));
    for _ in 0..30 {
        set.advance(1.0 / 60.0);
    }
    assert_eq!(fired.get(), 1);
    assert_eq!(set.value("opacity"), Some(1.0));
    assert_eq!(set.active_count(), 0);
}

#[test]
fn killed_tween_holds_value_and_skips_callback() {
    let fired = Rc::new(Cell::new(false));
    let mut set = TweenSet::new();
    let f = fired.clone();
    set.to_then("x", 0.0, 10.0, 1.0, Easing::Linear, move || f.set(true));
    set.advance(0.25);
    set.kill("x");
    set.advance(2.0);
    assert!(!fired.get());
    assert_eq!(set.value("x"), Some(2.5));
}

#[test]
fn retargeting_a_key_replaces_its_tween() {
    let mut set = TweenSet::new();
    set.to("x", 0.0, 10.0, 1.0, Easing::Linear);
    set.advance(0.5);
    set.to("x", 0.0, 0.0, 1.0, Easing::Linear);
    set.advance(0.5);
    assert_eq!(set.value("x"), Some(2.5));
}

#[test]
fn timeline_runs_steps_in_order_with_gap() {
    let mut tl = Timeline::new()
        .then("a", 0.0, 1.0, 1.0, Easing::Linear)
        .then_after(0.5, "b", 0.0, 1.0, 1.0, Easing::Linear);
    assert_eq!(tl.current_key(), Some("a"));
    assert!(!tl.advance(1.2));
    assert_eq!(tl.value("a"), Some(1.0));
    assert_eq!(tl.value("b"), Some(0.0));
    assert_eq!(tl.current_key(), Some("b"));
    assert!(!tl.advance(0.8));
    let b = tl.value("b").unwrap_or_default();
    assert!((b - 0.5).abs() < 1e-5);
    assert!(tl.advance(1.0));
    assert!(tl.is_finished());
    assert_eq!(tl.value("b"), Some(1.0));
}

#[test]
fn negative_offsets_overlap_the_previous_step() {
    let mut tl = Timeline::new()
        .then("title", 0.0, 1.0, 1.4, Easing::Linear)
        .then_offset(-0.8, "subtitle", 0.0, 1.0, 1.0, Easing::Linear)
        .then_offset(-0.5, "cta", 0.0, 1.0, 0.9, Easing::Linear);
    assert!((tl.duration() - 2.0).abs() < 1e-5);

    // subtitle started at 0.6, cta waits for 1.1
    assert!(!tl.advance(1.0));
    let near = |key, want: f32| (tl.value(key).unwrap_or(f32::NAN) - want).abs() < 1e-4;
    assert!(near("title", 1.0 / 1.4));
    assert!(near("subtitle", 0.4));
    assert_eq!(tl.value("cta"), Some(0.0));
    assert_eq!(tl.current_key(), Some("title"));

    assert!(!tl.advance(0.5));
    assert_eq!(tl.value("title"), Some(1.0));
    let near = |key, want: f32| (tl.value(key).unwrap_or(f32::NAN) - want).abs() < 1e-4;
    assert!(near("subtitle", 0.9));
    assert!(near("cta", 0.4 / 0.9));
    assert_eq!(tl.current_key(), Some("subtitle"));

    assert!(tl.advance(1.0));
    assert_eq!(tl.value("subtitle"), Some(1.0));
    assert_eq!(tl.value("cta"), Some(1.0));
    assert_eq!(tl.current_key(), None);
}

#[test]
fn offsets_never_start_before_zero() {
    let tl = Timeline::new().then_offset(-3.0, "a", 0.0, 1.0, 1.0, Easing::Linear);
    assert_eq!(tl.duration(), 1.0);
}

#[test]
fn stagger_spaces_out_start_times() {
    assert_eq!(stagger_delay(0, 0.25), 0.0);
    assert_eq!(stagger_delay(2, 0.25), 0.5);
    assert_eq!(stagger_delay(3, -1.0), 0.0);

    let tween = Tween::new(0.0, 1.0, 1.0, Easing::Linear);
    let mut tl = Timeline::new().stagger(0.0, 0.25, ["a", "b", "c"], tween);
    assert_eq!(tl.duration(), 1.5);
    tl.advance(0.5);
    assert_eq!(tl.value("a"), Some(0.5));
    assert_eq!(tl.value("b"), Some(0.25));
    assert_eq!(tl.value("c"), Some(0.0));
}

#[test]
fn rewinding_restores_unstarted_values() {
    let mut tl = Timeline::new()
        .then("x", 0.0, 10.0, 1.0, Easing::Linear)
        .then("y", 0.0, 10.0, 1.0, Easing::Linear);
    assert!(tl.advance(2.0));
    assert!(!tl.rewind(0.5));
    assert_eq!(tl.value("x"), Some(10.0));
    assert_eq!(tl.value("y"), Some(5.0));
    assert!(tl.rewind(5.0));
    assert!(tl.is_at_start());
    assert_eq!(tl.value("x"), Some(0.0));
    assert_eq!(tl.value("y"), Some(0.0));
    assert_eq!(tl.playhead(), 0.0);
}

fn finish(group: &mut EntranceGroup) {
    let mut frames = 0;
    while group.advance(1.0 / 60.0) {
        frames += 1;
        assert!(frames < 600);
    }
}

#[test]
fn badges_flip_in_one_after_another() {
    let kind = EntranceKind::Badge;
    let mut group = EntranceGroup::new(kind, 3, None);
    let hidden = kind.hidden_pose(0);
    assert_eq!(
        (hidden.scale, hidden.opacity, hidden.y, hidden.rotate_y_deg),
        (0.0, 0.0, 30.0, -180.0)
    );
    assert_eq!(group.pose(2), hidden);
    assert!((group.duration() - 0.92).abs() < 1e-5);

    // nothing moves until the trigger plays it
    assert!(!group.advance(0.5));
    assert_eq!(group.pose(0), hidden);

    group.play();
    assert!(group.advance(0.1));
    assert!(group.pose(0).opacity > group.pose(1).opacity);
    assert_eq!(group.pose(2), hidden);

    // back.out overshoots full size on the way in
    let mut peak = 0.0f32;
    while group.advance(1.0 / 60.0) {
        peak = peak.max(group.pose(0).scale);
    }
    assert!(peak > 1.0);
    for i in 0..3 {
        assert_eq!(group.pose(i), EntrancePose::REST);
    }
    assert!(group.is_complete());
    assert!(!group.is_playing());

    let together = EntranceGroup::new(kind, 3, Some(0.0));
    assert!((together.duration() - 0.8).abs() < 1e-6);
}

#[test]
fn hero_steps_overlap() {
    let kind = EntranceKind::Hero;
    let mut group = EntranceGroup::new(kind, 3, None);
    assert!((group.duration() - 2.0).abs() < 1e-5);
    assert_eq!(kind.start_line(), None);
    assert_eq!(group.pose(2).rotate_y_deg, -20.0);

    group.play();
    group.advance(0.5);
    let title = group.pose(0);
    assert!(title.y > 0.0 && title.y < 120.0);
    assert!(title.rotate_x_deg > -30.0 && title.rotate_x_deg < 0.0);
    assert_eq!(group.pose(1), kind.hidden_pose(1));

    // the subtitle starts 0.8s before the title ends
    group.advance(0.3);
    assert!(group.pose(1).y < 60.0);
    assert!(group.pose(0).opacity < 1.0);
    assert_eq!(group.pose(2), kind.hidden_pose(2));

    finish(&mut group);
    for i in 0..3 {
        assert_eq!(group.pose(i), EntrancePose::REST);
    }
}

#[test]
fn fade_up_reverses_back_to_hidden() {
    let kind = EntranceKind::FadeUp;
    assert_eq!(kind.toggle_actions(), ToggleActions::PlayReverse);
    let mut group = EntranceGroup::new(kind, 2, None);
    group.play();
    finish(&mut group);
    assert_eq!(group.pose(1), EntrancePose::REST);

    group.reverse();
    assert!(group.advance(0.1));
    assert_eq!(group.pose(0), EntrancePose::REST);
    assert!(group.pose(1).y > 0.0);
    finish(&mut group);
    assert_eq!(group.pose(0), kind.hidden_pose(0));
    assert_eq!(group.pose(1), kind.hidden_pose(1));
    assert!(!group.is_playing());
}

#[test]
fn entrance_kinds_carry_their_trigger_lines() {
    assert_eq!(EntranceKind::Card.start_line(), Some(0.75));
    assert_eq!(EntranceKind::Badge.start_line(), Some(0.85));
    assert_eq!(EntranceKind::Social.start_line(), Some(0.80));
    assert_eq!(EntranceKind::Title.start_line(), Some(0.80));
    assert_eq!(EntranceKind::Title.toggle_actions(), ToggleActions::PlayOnce);
    let title = EntranceKind::Title.hidden_pose(0);
    assert_eq!((title.rotate_x_deg, title.scale, title.y), (-90.0, 0.5, 100.0));
}

#[test]
fn play_once_trigger_fires_a_single_time() {
    let vh = 1000.0;
    let below = ElementBox { top: 900.0, height: 200.0 };
    let past = ElementBox { top: 700.0, height: 200.0 };
    let mut trigger = EntranceTrigger::new(0.8, ToggleActions::PlayOnce);
    assert_eq!(trigger.update(below, vh), None);
    assert_eq!(trigger.update(past, vh), Some(EntranceAction::Play));
    assert_eq!(trigger.update(past, vh), None);
    assert_eq!(trigger.update(below, vh), None);
    assert_eq!(trigger.update(past, vh), None);
}

#[test]
fn reversing_trigger_toggles_on_each_crossing() {
    let vh = 1000.0;
    let below = ElementBox { top: 900.0, height: 200.0 };
    let past = ElementBox { top: 700.0, height: 200.0 };
    let mut trigger = EntranceTrigger::new(0.8, ToggleActions::PlayReverse);
    // already past the line when first measured
    assert_eq!(trigger.update(past, vh), Some(EntranceAction::Play));
    assert!(trigger.is_active());
    assert_eq!(trigger.update(below, vh), Some(EntranceAction::Reverse));
    assert_eq!(trigger.update(below, vh), None);
    assert_eq!(trigger.update(past, vh), Some(EntranceAction::Play));
}

#[test]
fn floating_icons_bob_after_their_delay() {
    let first = FloatBob::new(0);
    let second = FloatBob::new(1);
    assert_eq!(second.offset(0.5), [0.0, 0.0]);
    // one full leg after the 0.5s delay
    assert_eq!(second.offset(4.5), [10.0, 20.0]);
    assert_eq!(first.offset(8.0), [0.0, 0.0]);
    let [x, y] = first.offset(2.0);
    assert!((x + 5.0).abs() < 1e-3 && (y + 10.0).abs() < 1e-3);
}

#[test]
fn gate_waits_for_load_then_delay() {
    let mut gate = LoadingGate::new(LoaderConfig::default());
    assert_eq!(gate.phase(), GatePhase::Covering);
    assert_eq!(gate.delay_ms(), 100);
    assert!(!gate.advance(1.0));
    assert_eq!(gate.opacity(), 1.0);

    // the timer cannot fire before the load event
    gate.delay_elapsed();
    assert_eq!(gate.phase(), GatePhase::Covering);

    gate.document_loaded();
    assert_eq!(gate.phase(), GatePhase::Delaying);
    assert!(!gate.advance(1.0));
    assert_eq!(gate.opacity(), 1.0);

    gate.delay_elapsed();
    assert_eq!(gate.phase(), GatePhase::Fading);
    assert!(gate.advance(0.25));
    assert!(gate.opacity() > 0.0 && gate.opacity() < 1.0);
    assert!(!gate.advance(0.25));
    assert!(gate.is_removed());
    assert_eq!(gate.opacity(), 0.0);

    gate.document_loaded();
    assert_eq!(gate.phase(), GatePhase::Removed);
}

#[test]
fn page_loader_fills_bar_pauses_then_slides() {
    let mut loader = PageLoader::default();
    assert_eq!(loader.active_part(), Some(PageLoaderPart::Bar));

    assert!(loader.advance(1.0));
    assert!((loader.bar_percent() - 50.0).abs() < 1e-4);
    assert_eq!(loader.cover_offset_percent(), 0.0);

    assert!(loader.advance(1.0));
    assert_eq!(loader.bar_percent(), 100.0);
    assert_eq!(loader.active_part(), Some(PageLoaderPart::Cover));

    // still inside the pause
    assert!(loader.advance(0.2));
    assert_eq!(loader.cover_offset_percent(), 0.0);

    assert!(loader.advance(0.5));
    assert!((loader.cover_offset_percent() + 50.0).abs() < 0.01);

    assert!(!loader.advance(1.0));
    assert!(loader.is_removed());
    assert_eq!(loader.cover_offset_percent(), -100.0);
    assert_eq!(loader.active_part(), None);
}
