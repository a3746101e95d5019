//! Frame and tick timing
//!
//! All timing runs off the platform's monotonic counter (`now` +
//! `clock_frequency`), never `Instant`, so tests can feed synthetic clocks.

/// Per-frame wall-clock delta against the platform counter
#[derive(Debug)]
pub struct FrameClock {
    frequency: u64,
    last: Option<u64>,
}

impl FrameClock {
    /// Create a frame clock for a counter running at `frequency` ticks/s
    #[must_use]
    pub const fn new(frequency: u64) -> Self {
        Self {
            frequency,
            last: None,
        }
    }

    /// Seconds elapsed since the previous reading
    ///
    /// The first reading yields 0.0 so the first frame does not integrate
    /// the whole startup time.
    pub fn delta(&mut self, now: u64) -> f32 {
        let delta = match self.last {
            Some(last) => {
                let ticks = now.saturating_sub(last);
                ticks as f64 / self.frequency as f64
            }
            None => 0.0,
        };
        self.last = Some(now);
        delta as f32
    }
}

/// Decides once per frame whether a fixed physics tick is due
///
/// The deadline advances additively by one period when a tick fires; it is
/// never reset to `now + period`, so slow frames do not accumulate drift.
/// The loop asks at most once per render frame, which means a stalled frame
/// makes the simulation run slow rather than spiral into catch-up ticks.
#[derive(Debug)]
pub struct FixedStepScheduler {
    period_ticks: f64,
    next_deadline: f64,
    ticks_per_second: u32,
}

impl FixedStepScheduler {
    /// Create a scheduler for `ticks_per_second` fixed steps
    ///
    /// `frequency` is the platform counter rate; `now` is the current
    /// counter value, from which the first deadline is derived.
    #[must_use]
    pub fn new(frequency: u64, ticks_per_second: u32, now: u64) -> Self {
        let period_ticks = frequency as f64 / f64::from(ticks_per_second);
        Self {
            period_ticks,
            next_deadline: now as f64 + period_ticks,
            ticks_per_second,
        }
    }

    /// Whether a fixed tick is due at counter value `now`
    ///
    /// Returns true at most once per call; on true the deadline advances by
    /// exactly one period.
    pub fn is_tick_due(&mut self, now: u64) -> bool {
        if now as f64 >= self.next_deadline {
            self.next_deadline += self.period_ticks;
            true
        } else {
            false
        }
    }

    /// Duration of one fixed tick in seconds
    #[must_use]
    pub fn tick_period(&self) -> f32 {
        1.0 / self.ticks_per_second as f32
    }
}
