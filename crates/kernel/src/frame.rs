//! Frame driver: measure elapsed time, run update callbacks, draw once.

use std::time::{Duration, Instant};

/// Measures wall-clock time between consecutive ticks.
#[derive(Debug)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Seconds since the previous call. The first call returns zero.
    pub fn delta(&mut self, now: Instant) -> f32 {
        let dt = match self.last {
            Some(prev) => now.saturating_duration_since(prev).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Rolling window of recent frame durations.
#[derive(Debug)]
pub struct FrameTimer {
    history: Vec<Duration>,
    capacity: usize,
    index: usize,
    filled: bool,
}

impl FrameTimer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            history: vec![Duration::ZERO; capacity],
            capacity,
            index: 0,
            filled: false,
        }
    }

    pub fn record(&mut self, dt: Duration) {
        self.history[self.index] = dt;
        self.index = (self.index + 1) % self.capacity;
        if self.index == 0 {
            self.filled = true;
        }
    }

    fn samples(&self) -> &[Duration] {
        let count = if self.filled { self.capacity } else { self.index };
        &self.history[..count]
    }

    pub fn average(&self) -> Duration {
        let samples = self.samples();
        if samples.is_empty() {
            return Duration::ZERO;
        }
        samples.iter().sum::<Duration>() / samples.len() as u32
    }

    pub fn max(&self) -> Duration {
        self.samples().iter().copied().max().unwrap_or(Duration::ZERO)
    }

    pub fn min(&self) -> Duration {
        self.samples().iter().copied().min().unwrap_or(Duration::ZERO)
    }

    /// Frames per second implied by the average duration.
    pub fn fps(&self) -> f32 {
        let avg = self.average().as_secs_f32();
        if avg > 0.0 { 1.0 / avg } else { 0.0 }
    }
}

type UpdateFn<S> = Box<dyn FnMut(&mut S, f32)>;

/// Per-frame scheduler. Each tick runs every registered update callback in
/// registration order, then issues exactly one render call.
///
/// The caller decides when to tick (typically on the platform's redraw
/// callback), so the rate follows the display rather than a fixed clock.
pub struct FrameLoop<S> {
    clock: FrameClock,
    timer: FrameTimer,
    callbacks: Vec<UpdateFn<S>>,
    frames: u64,
}

impl<S> FrameLoop<S> {
    pub fn new() -> Self {
        Self {
            clock: FrameClock::new(),
            timer: FrameTimer::new(120),
            callbacks: Vec::new(),
            frames: 0,
        }
    }

    /// Register a callback run once per frame with the elapsed seconds.
    pub fn on_update(&mut self, callback: impl FnMut(&mut S, f32) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Measure time since the last tick and advance by it.
    pub fn tick<R>(&mut self, now: Instant, state: &mut S, render: impl FnOnce(&S) -> R) -> R {
        let dt = self.clock.delta(now);
        self.advance(dt, state, render)
    }

    /// Advance by an explicit `dt` (seconds). Used by headless drivers.
    pub fn advance<R>(&mut self, dt: f32, state: &mut S, render: impl FnOnce(&S) -> R) -> R {
        self.timer
            .record(Duration::try_from_secs_f32(dt.max(0.0)).unwrap_or_default());
        for callback in &mut self.callbacks {
            callback(state, dt);
        }
        self.frames += 1;
        render(state)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }
}

impl<S> Default for FrameLoop<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> std::fmt::Debug for FrameLoop<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameLoop")
            .field("frames", &self.frames)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_delta_is_zero() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        assert_eq!(clock.delta(t0), 0.0);
        let dt = clock.delta(t0 + Duration::from_millis(20));
        assert!((dt - 0.02).abs() < 1e-4);
    }

    #[test]
    fn clock_never_goes_negative() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now() + Duration::from_secs(1);
        clock.delta(t0);
        assert_eq!(clock.delta(t0 - Duration::from_millis(10)), 0.0);
    }

    #[test]
    fn callbacks_run_in_order_then_render_once() {
        let mut frame_loop: FrameLoop<Vec<&'static str>> = FrameLoop::new();
        frame_loop.on_update(|log, _| log.push("first"));
        frame_loop.on_update(|log, _| log.push("second"));

        let mut log = Vec::new();
        let mut renders = 0;
        frame_loop.advance(0.016, &mut log, |log| {
            renders += 1;
            assert_eq!(log.as_slice(), ["first", "second"]);
        });
        assert_eq!(renders, 1);
        assert_eq!(frame_loop.frames(), 1);
    }

    #[test]
    fn render_presents_each_updated_state_once() {
        let mut frame_loop: FrameLoop<u32> = FrameLoop::new();
        frame_loop.on_update(|count, _| *count += 1);

        let mut count = 0;
        let mut presented = Vec::new();
        let t0 = Instant::now();
        for i in 0..3 {
            frame_loop.tick(t0 + Duration::from_millis(16 * i), &mut count, |count| {
                presented.push(*count);
            });
        }
        assert_eq!(presented, vec![1, 2, 3]);
    }

    #[test]
    fn callbacks_receive_dt() {
        let mut frame_loop: FrameLoop<f32> = FrameLoop::new();
        frame_loop.on_update(|total, dt| *total += dt);
        let mut total = 0.0;
        for _ in 0..4 {
            frame_loop.advance(0.25, &mut total, |_| ());
        }
        assert!((total - 1.0).abs() < 1e-6);
        assert_eq!(frame_loop.callback_count(), 1);
    }

    #[test]
    fn tick_measures_elapsed_time() {
        let mut frame_loop: FrameLoop<Vec<f32>> = FrameLoop::new();
        frame_loop.on_update(|seen, dt| seen.push(dt));
        let mut seen = Vec::new();
        let t0 = Instant::now();
        frame_loop.tick(t0, &mut seen, |_| ());
        frame_loop.tick(t0 + Duration::from_millis(16), &mut seen, |_| ());
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], 0.0);
        assert!((seen[1] - 0.016).abs() < 1e-4);
    }

    #[test]
    fn frame_timer_stats() {
        let mut timer = FrameTimer::new(4);
        assert_eq!(timer.average(), Duration::ZERO);
        for ms in [10, 20, 30, 40, 50] {
            timer.record(Duration::from_millis(ms));
        }
        // Oldest sample (10ms) was overwritten.
        assert_eq!(timer.min(), Duration::from_millis(20));
        assert_eq!(timer.max(), Duration::from_millis(50));
        assert_eq!(timer.average(), Duration::from_millis(35));
        assert!((timer.fps() - 1.0 / 0.035).abs() < 0.01);
    }
}
