//! Small tween engine: single tweens, looping tweens, keyed tween sets and
//! scheduled timelines. Everything is sampled from elapsed time so the
//! caller decides when a frame happens.

use crate::ease::Easing;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenStep {
    pub value: f32,
    pub done: bool,
}

/// Interpolates one scalar from `from` to `to` over `duration` seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub easing: Easing,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            easing,
            elapsed: 0.0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Current value. A finished tween reports `to` exactly.
    pub fn value(&self) -> f32 {
        if self.is_done() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }

    pub fn advance(&mut self, dt: f32) -> TweenStep {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        TweenStep {
            value: self.value(),
            done: self.is_done(),
        }
    }

    /// Jump to `elapsed` seconds into the tween, in either direction.
    pub fn seek(&mut self, elapsed: f32) -> TweenStep {
        self.elapsed = elapsed.clamp(0.0, self.duration);
        TweenStep {
            value: self.value(),
            done: self.is_done(),
        }
    }

    /// Restart toward a new target from wherever the tween currently is.
    pub fn retarget(&mut self, to: f32, duration: f32, easing: Easing) {
        *self = Tween::new(self.value(), to, duration, easing);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopMode {
    /// Jump back to `from` after each cycle.
    Repeat,
    /// Play forward, then backward with the curve mirrored in time.
    Yoyo,
}

/// An endlessly looping tween; a pure function of elapsed time.
#[derive(Clone, Debug, PartialEq)]
pub struct LoopTween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub easing: Easing,
    pub mode: LoopMode,
}

impl LoopTween {
    pub fn sample(&self, elapsed_sec: f32) -> f32 {
        if self.duration <= 0.0 {
            return self.from;
        }
        let cycles = elapsed_sec.max(0.0) / self.duration;
        let leg = cycles.floor();
        let frac = cycles - leg;
        let eased = match self.mode {
            LoopMode::Repeat => self.easing.apply(frac),
            LoopMode::Yoyo if (leg as u64) % 2 == 1 => self.easing.apply(1.0 - frac),
            LoopMode::Yoyo => self.easing.apply(frac),
        };
        self.from + (self.to - self.from) * eased
    }
}

/// A scalar that remembers its value and optionally animates toward a target.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Animated {
    value: f32,
    tween: Option<Tween>,
}

impl Animated {
    pub fn new(value: f32) -> Self {
        Self { value, tween: None }
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.tween = None;
    }

    pub fn animate_to(&mut self, to: f32, duration: f32, easing: Easing) {
        self.tween = Some(Tween::new(self.value, to, duration, easing));
        if duration <= 0.0 {
            self.set(to);
        }
    }

    /// Returns `true` while a tween is still in flight.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        let step = tween.advance(dt);
        self.value = step.value;
        if step.done {
            self.tween = None;
        }
        !step.done
    }
}

struct Entry {
    value: Animated,
    on_complete: Option<Box<dyn FnOnce()>>,
}

/// Keyed collection of animated scalars. Starting a tween on a key that is
/// already animating overwrites it from its current value.
pub struct TweenSet<K> {
    entries: FnvHashMap<K, Entry>,
}

impl<K> Default for TweenSet<K> {
    fn default() -> Self {
        Self {
            entries: FnvHashMap::default(),
        }
    }
}

impl<K: Copy + Eq + Hash> TweenSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: K, value: f32) {
        let entry = self.entry(key, value);
        entry.value.set(value);
        entry.on_complete = None;
    }

    pub fn value(&self, key: K) -> Option<f32> {
        self.entries.get(&key).map(|e| e.value.get())
    }

    pub fn value_or(&self, key: K, fallback: f32) -> f32 {
        self.value(key).unwrap_or(fallback)
    }

    /// Tween `key` from its current value (or `initial` if unseen) to `to`.
    pub fn to(&mut self, key: K, initial: f32, to: f32, duration: f32, easing: Easing) {
        let entry = self.entry(key, initial);
        entry.on_complete = None;
        entry.value.animate_to(to, duration, easing);
    }

    pub fn to_then(
        &mut self,
        key: K,
        initial: f32,
        to: f32,
        duration: f32,
        easing: Easing,
        on_complete: impl FnOnce() + 'static,
    ) {
        self.to(key, initial, to, duration, easing);
        if let Some(entry) = self.entries.get_mut(&key) {
            if entry.value.is_animating() {
                entry.on_complete = Some(Box::new(on_complete));
            } else {
                on_complete();
            }
        }
    }

    pub fn is_animating(&self, key: K) -> bool {
        self.entries
            .get(&key)
            .map_or(false, |e| e.value.is_animating())
    }

    pub fn active_count(&self) -> usize {
        self.entries
            .values()
            .filter(|e| e.value.is_animating())
            .count()
    }

    /// Advance every tween; returns the keys that finished during this step.
    /// Completion callbacks fire once, after all values were updated.
    pub fn advance(&mut self, dt: f32) -> SmallVec<[K; 8]> {
        let mut finished = SmallVec::new();
        let mut callbacks: SmallVec<[Box<dyn FnOnce()>; 4]> = SmallVec::new();
        for (key, entry) in self.entries.iter_mut() {
            if !entry.value.is_animating() {
                continue;
            }
            if !entry.value.advance(dt) {
                finished.push(*key);
                if let Some(cb) = entry.on_complete.take() {
                    callbacks.push(cb);
                }
            }
        }
        for cb in callbacks {
            cb();
        }
        finished
    }

    /// Stop the tween on `key`, leaving its value where it is. The completion
    /// callback is dropped without firing.
    pub fn kill(&mut self, key: K) {
        if let Some(entry) = self.entries.get_mut(&key) {
            let v = entry.value.get();
            entry.value.set(v);
            entry.on_complete = None;
        }
    }

    pub fn kill_all(&mut self) {
        let keys: SmallVec<[K; 16]> = self.entries.keys().copied().collect();
        for key in keys {
            self.kill(key);
        }
    }

    fn entry(&mut self, key: K, initial: f32) -> &mut Entry {
        self.entries.entry(key).or_insert_with(|| Entry {
            value: Animated::new(initial),
            on_complete: None,
        })
    }
}

struct Step<K> {
    key: K,
    start: f32,
    tween: Tween,
}

impl<K> Step<K> {
    fn end(&self) -> f32 {
        self.start + self.tween.duration
    }
}

/// Tweens placed on a shared clock. Each step has an absolute start time;
/// the `then*` builders place it relative to the current end of the
/// timeline, so negative offsets overlap the previous step.
///
/// The timeline is sampled from its playhead, so it can run forward or be
/// rewound from any point. A key that has not started yet reports the
/// `from` value of its first step.
pub struct Timeline<K> {
    steps: Vec<Step<K>>,
    playhead: f32,
    initial: FnvHashMap<K, f32>,
    values: FnvHashMap<K, f32>,
}

impl<K: Copy + Eq + Hash> Default for Timeline<K> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            playhead: 0.0,
            initial: FnvHashMap::default(),
            values: FnvHashMap::default(),
        }
    }
}

impl<K: Copy + Eq + Hash> Timeline<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(self, key: K, from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        self.then_offset(0.0, key, from, to, duration, easing)
    }

    /// Append a step that waits `gap` seconds after the timeline's end.
    pub fn then_after(
        self,
        gap: f32,
        key: K,
        from: f32,
        to: f32,
        duration: f32,
        easing: Easing,
    ) -> Self {
        self.then_offset(gap.max(0.0), key, from, to, duration, easing)
    }

    /// Append a step starting `offset` seconds after the timeline's end.
    /// A negative offset starts it before the end, never before zero.
    pub fn then_offset(
        self,
        offset: f32,
        key: K,
        from: f32,
        to: f32,
        duration: f32,
        easing: Easing,
    ) -> Self {
        let start = (self.duration() + offset).max(0.0);
        self.insert(start, key, Tween::new(from, to, duration, easing))
    }

    /// Place a step at an absolute start time.
    pub fn insert(mut self, start: f32, key: K, tween: Tween) -> Self {
        self.initial.entry(key).or_insert(tween.from);
        self.values.entry(key).or_insert(tween.from);
        self.steps.push(Step {
            key,
            start: start.max(0.0),
            tween,
        });
        self
    }

    /// Start a copy of `tween` for every key, the n-th one `n * each`
    /// seconds after `start`.
    pub fn stagger(
        mut self,
        start: f32,
        each: f32,
        keys: impl IntoIterator<Item = K>,
        tween: Tween,
    ) -> Self {
        for (i, key) in keys.into_iter().enumerate() {
            self = self.insert(start + stagger_delay(i, each), key, tween.clone());
        }
        self
    }

    /// End time of the last step to finish.
    pub fn duration(&self) -> f32 {
        self.steps.iter().map(Step::end).fold(0.0, f32::max)
    }

    pub fn playhead(&self) -> f32 {
        self.playhead
    }

    pub fn value(&self, key: K) -> Option<f32> {
        self.values.get(&key).copied()
    }

    /// Key of the earliest step that has not completed yet.
    pub fn current_key(&self) -> Option<K> {
        self.steps
            .iter()
            .filter(|s| self.playhead < s.end())
            .min_by(|a, b| a.start.total_cmp(&b.start))
            .map(|s| s.key)
    }

    pub fn is_finished(&self) -> bool {
        self.playhead >= self.duration()
    }

    pub fn is_at_start(&self) -> bool {
        self.playhead <= 0.0
    }

    /// Move the playhead to `time` and resample every key.
    pub fn seek(&mut self, time: f32) {
        self.playhead = time.clamp(0.0, self.duration());
        self.values.clone_from(&self.initial);
        for step in self.steps.iter_mut() {
            if self.playhead < step.start {
                continue;
            }
            let local = if self.playhead >= step.end() {
                step.tween.duration
            } else {
                self.playhead - step.start
            };
            let s = step.tween.seek(local);
            self.values.insert(step.key, s.value);
        }
    }

    /// Play forward; returns `true` once every step has completed.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.seek(self.playhead + dt.max(0.0));
        self.is_finished()
    }

    /// Play backward; returns `true` once the playhead is back at zero.
    pub fn rewind(&mut self, dt: f32) -> bool {
        self.seek(self.playhead - dt.max(0.0));
        self.is_at_start()
    }
}

/// Start delay of the `index`-th item in a staggered group.
pub fn stagger_delay(index: usize, each: f32) -> f32 {
    index as f32 * each.max(0.0)
}
