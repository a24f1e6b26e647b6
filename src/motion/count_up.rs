//! Animated counters for the portfolio stats block.
//!
//! The displayed value at `elapsed` milliseconds is
//! `floor(end * ease_out_cubic(min(elapsed / duration, 1)))`. Because the
//! easing curve is monotonic the sequence never goes backwards, and it lands
//! exactly on `end` once the duration has passed.
//!
//! A counter gated on visibility starts on the first frame its region is at
//! least half on screen, and never restarts.

use super::reveal::{IntersectionEntry, RevealConfig, Transition, VisibilityTrigger};

/// Fraction of the counter's region that must be visible before it starts.
pub const START_THRESHOLD: f64 = 0.5;

/// `1 - (1 - t)^3`, with `t` clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Value shown `elapsed_ms` after the animation started.
pub fn count_up_value(end: u64, duration_ms: u64, elapsed_ms: f64) -> u64 {
    if duration_ms == 0 || elapsed_ms >= duration_ms as f64 {
        return end;
    }
    let progress = (elapsed_ms.max(0.0) / duration_ms as f64).min(1.0);
    let value = (end as f64 * ease_out_cubic(progress)).floor();
    // Float rounding must never overshoot the target.
    (value.max(0.0) as u64).min(end)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Waiting,
    Running { started_at: f64 },
    Done,
}

#[derive(Debug, Clone)]
pub struct CountUp {
    end: u64,
    duration_ms: u64,
    gate: Option<VisibilityTrigger>,
    phase: Phase,
    value: u64,
}

impl CountUp {
    /// A counter that starts when [`mount`](Self::mount) is called.
    pub fn new(end: u64, duration_ms: u64) -> Self {
        Self {
            end,
            duration_ms,
            gate: None,
            phase: Phase::Waiting,
            value: 0,
        }
    }

    /// A counter that waits for its region to be half visible.
    pub fn on_visible(end: u64, duration_ms: u64) -> Self {
        Self {
            gate: Some(VisibilityTrigger::new(RevealConfig::new(START_THRESHOLD))),
            ..Self::new(end, duration_ms)
        }
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn is_started(&self) -> bool {
        !matches!(self.phase, Phase::Waiting)
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Region mounted at time `now_ms`. Ungated counters start here; gated
    /// ones begin watching for visibility.
    pub fn mount(&mut self, now_ms: f64) {
        match &mut self.gate {
            Some(gate) => gate.arm(),
            None => self.start(now_ms),
        }
    }

    /// Feed an intersection entry. Returns `true` if this started the count.
    pub fn observe(&mut self, entry: IntersectionEntry, now_ms: f64) -> bool {
        let Some(gate) = &mut self.gate else {
            return false;
        };
        if gate.observe(entry) == Transition::Triggered {
            self.start(now_ms);
            return true;
        }
        false
    }

    /// Advance to `now_ms` and return the value to display. Frames before
    /// the start show 0; frames after the end keep showing `end`.
    pub fn frame(&mut self, now_ms: f64) -> u64 {
        if let Phase::Running { started_at } = self.phase {
            let elapsed = now_ms - started_at;
            // Frames can arrive out of order; the display never goes back.
            self.value = self.value.max(count_up_value(self.end, self.duration_ms, elapsed));
            if self.value == self.end && elapsed >= self.duration_ms as f64 {
                self.phase = Phase::Done;
            }
        }
        self.value
    }

    fn start(&mut self, now_ms: f64) {
        if self.phase == Phase::Waiting {
            self.phase = Phase::Running { started_at: now_ms };
        }
    }
}
