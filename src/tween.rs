use raylib::prelude::*;

/// Easing curves used by the slider, named after the curve they apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    QuadOut,
    CubicIn,
    CubicOut,
    ExpoOut,
}

impl Ease {
    fn curve(self) -> fn(f32, f32, f32, f32) -> f32 {
        match self {
            Ease::Linear => ease::linear_none,
            Ease::QuadOut => ease::quad_out,
            Ease::CubicIn => ease::cubic_in,
            Ease::CubicOut => ease::cubic_out,
            Ease::ExpoOut => ease::expo_out,
        }
    }

    /// Value at `elapsed` seconds of a `duration` long move from `from` to
    /// `to`. Clamped: past the end the exact `to` is returned.
    pub fn apply(self, elapsed: f32, from: f32, to: f32, duration: f32) -> f32 {
        if duration <= 0.0 || elapsed >= duration {
            return to;
        }
        if elapsed <= 0.0 {
            return from;
        }
        (self.curve())(elapsed, from, to - from, duration)
    }
}

/// Follows a target that may change every frame. Each retarget starts a
/// fresh tween from the current value, so repeated retargets toward a
/// still target converge smoothly.
pub struct Chase {
    pub value: f32,
    target: f32,
    ease: Ease,
    duration: f32,
    elapsed: f32,
    tween: Option<ease::Tween>,
}

impl Chase {
    pub fn new(value: f32, ease: Ease, duration: f32) -> Self {
        Self {
            value,
            target: value,
            ease,
            duration,
            elapsed: 0.0,
            tween: None,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.tween.is_some()
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
        self.elapsed = 0.0;
        if self.duration <= 0.0 {
            self.value = target;
            self.tween = None;
            return;
        }
        self.tween = Some(ease::Tween::new(self.ease.curve(), self.value, target, self.duration));
    }

    /// Jumps to `value` and drops any running tween.
    pub fn snap(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.tween = None;
    }

    pub fn step(&mut self, dt: f32) -> f32 {
        if let Some(tween) = self.tween.as_mut() {
            self.elapsed += dt;
            if self.elapsed >= self.duration {
                self.value = self.target;
                self.tween = None;
            } else {
                self.value = tween.apply(dt);
            }
        }
        self.value
    }
}

/// Something whose numeric properties a [`Timeline`] can drive.
pub trait Animated<K> {
    fn get(&self, key: K) -> f32;
    fn set(&mut self, key: K, value: f32);
}

/// One positioned property animation inside a [`Timeline`].
#[derive(Debug, Clone, PartialEq)]
pub struct Track<T> {
    pub target: T,
    pub start: f32,
    pub duration: f32,
    pub to: f32,
    pub ease: Ease,
    from: Option<f32>,
}

impl<T> Track<T> {
    pub fn new(target: T, start: f32, duration: f32, to: f32, ease: Ease) -> Self {
        Self {
            target,
            start,
            duration,
            to,
            ease,
            from: None,
        }
    }

    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    /// Start value, captured when the track first became active.
    pub fn from(&self) -> Option<f32> {
        self.from
    }
}

/// A set of tracks over one clock. Tracks are applied in insertion order, so
/// a later track wins when two touch the same property at the same time.
#[derive(Debug, Clone)]
pub struct Timeline<T> {
    tracks: Vec<Track<T>>,
    time: f32,
}

impl<T: Copy> Timeline<T> {
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            time: 0.0,
        }
    }

    pub fn add(&mut self, track: Track<T>) -> &mut Self {
        self.tracks.push(track);
        self
    }

    pub fn tracks(&self) -> &[Track<T>] {
        &self.tracks
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn duration(&self) -> f32 {
        self.tracks.iter().map(Track::end).fold(0.0, f32::max)
    }

    /// 0 at the start, 1 once the last track has finished.
    pub fn progress(&self) -> f32 {
        let duration = self.duration();
        if duration <= 0.0 {
            1.0
        } else {
            (self.time / duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.time >= self.duration()
    }

    /// Moves the clock by `dt` and writes every active track into `subject`.
    pub fn advance<S: Animated<T>>(&mut self, dt: f32, subject: &mut S) {
        self.time = (self.time + dt).min(self.duration());
        for track in self.tracks.iter_mut() {
            if self.time < track.start {
                continue;
            }
            let from = *track.from.get_or_insert_with(|| subject.get(track.target));
            let value = track.ease.apply(self.time - track.start, from, track.to, track.duration);
            subject.set(track.target, value);
        }
    }
}

impl<T: Copy> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_hits_both_ends_exactly() {
        for curve in [Ease::Linear, Ease::QuadOut, Ease::CubicIn, Ease::CubicOut, Ease::ExpoOut] {
            assert_eq!(curve.apply(0.0, 0.3, 1.0, 2.0), 0.3);
            assert_eq!(curve.apply(2.0, 0.3, 1.0, 2.0), 1.0);
            assert_eq!(curve.apply(5.0, 0.3, 1.0, 2.0), 1.0);
        }
    }

    #[test]
    fn ease_in_lags_and_ease_out_leads() {
        let halfway_in = Ease::CubicIn.apply(0.5, 0.0, 1.0, 1.0);
        let halfway_out = Ease::CubicOut.apply(0.5, 0.0, 1.0, 1.0);
        assert!(halfway_in < 0.5);
        assert!(halfway_out > 0.5);
    }

    #[test]
    fn zero_duration_is_instant() {
        assert_eq!(Ease::CubicOut.apply(0.0, 4.0, 9.0, 0.0), 9.0);
    }

    #[test]
    fn chase_reaches_target() {
        let mut chase = Chase::new(0.0, Ease::ExpoOut, 0.5);
        chase.set_target(10.0);
        assert!(chase.is_running());
        let first = chase.step(0.1);
        assert!(first > 0.0 && first < 10.0);
        for _ in 0..10 {
            chase.step(0.1);
        }
        assert_eq!(chase.value, 10.0);
        assert!(!chase.is_running());
    }

    #[test]
    fn chase_retarget_starts_from_current_value() {
        let mut chase = Chase::new(0.0, Ease::CubicOut, 1.0);
        chase.set_target(100.0);
        let midway = chase.step(0.5);
        chase.set_target(-100.0);
        let next = chase.step(0.01);
        assert!(next < midway);
        assert!(next > -100.0);
    }

    impl Animated<usize> for [f32; 2] {
        fn get(&self, key: usize) -> f32 {
            self[key]
        }

        fn set(&mut self, key: usize, value: f32) {
            self[key] = value;
        }
    }

    fn run(timeline: &mut Timeline<usize>, values: &mut [f32; 2], dt: f32) {
        timeline.advance(dt, values);
    }

    #[test]
    fn timeline_captures_start_values_lazily() {
        let mut values = [5.0_f32, 0.0];
        let mut timeline = Timeline::new();
        timeline
            .add(Track::new(0usize, 0.0, 1.0, 10.0, Ease::Linear))
            .add(Track::new(0usize, 1.0, 1.0, 0.0, Ease::Linear))
            .add(Track::new(1usize, 0.5, 1.0, 1.0, Ease::Linear));
        assert_eq!(timeline.duration(), 2.0);

        run(&mut timeline, &mut values, 0.25);
        assert_eq!(timeline.tracks()[0].from(), Some(5.0));
        assert!(timeline.tracks()[1].from().is_none());
        assert!(timeline.tracks()[2].from().is_none());

        run(&mut timeline, &mut values, 0.75);
        assert_eq!(values[0], 10.0);
        assert_eq!(timeline.tracks()[1].from(), Some(10.0));
        assert_eq!(values[1], 0.5);

        run(&mut timeline, &mut values, 2.0);
        assert_eq!(values, [0.0, 1.0]);
        assert!(timeline.is_complete());
        assert_eq!(timeline.progress(), 1.0);
    }
}
