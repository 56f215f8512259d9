use std::time::{Duration, Instant};

/// Paces frames at a target rate and measures the real time between them
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    last_tick: Instant,
    next_deadline: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32, now: Instant) -> Self {
        let period = Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)));
        Self {
            period,
            last_tick: now,
            next_deadline: now + period,
        }
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline
    }

    /// Seconds since the previous tick; schedules the following frame.
    ///
    /// A late frame does not cause a burst of catch-up frames: the next
    /// deadline is pushed a full period past `now`.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        self.next_deadline += self.period;
        if self.next_deadline <= now {
            self.next_deadline = now + self.period;
        }

        dt
    }
}
