use std::time::{Duration, Instant};

/// Default length of an anchor scroll.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(450);

/// Eased scroll from one offset to another.
///
/// Sampled once per display refresh; the final sample lands exactly on
/// the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, started: Instant) -> Self {
        Self::with_duration(from, to, started, SMOOTH_SCROLL_DURATION)
    }

    pub fn with_duration(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn offset_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out_cubic(t)
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}
