/// A single in-flight timer driven by host timestamps.
///
/// While a timer is pending, further [`Throttle::arm`] calls are dropped (not queued). The host
/// polls [`Throttle::take_due`] from its timer/frame callback; once the interval has elapsed the
/// handle clears and the next signal re-arms it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Throttle {
    interval_ms: u64,
    armed_at_ms: Option<u64>,
}

impl Throttle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            armed_at_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_pending(&self) -> bool {
        self.armed_at_ms.is_some()
    }

    /// The timestamp at which the pending timer fires.
    pub fn due_at(&self) -> Option<u64> {
        self.armed_at_ms
            .map(|at| at.saturating_add(self.interval_ms))
    }

    /// Arms the timer unless one is already pending. Returns whether a new timer was armed.
    pub fn arm(&mut self, now_ms: u64) -> bool {
        if self.armed_at_ms.is_some() {
            return false;
        }
        self.armed_at_ms = Some(now_ms);
        true
    }

    /// Clears and reports the pending timer if it has elapsed at `now_ms`.
    pub fn take_due(&mut self, now_ms: u64) -> bool {
        let Some(at) = self.armed_at_ms else {
            return false;
        };
        if now_ms.saturating_sub(at) < self.interval_ms {
            return false;
        }
        self.armed_at_ms = None;
        true
    }

    pub fn cancel(&mut self) {
        self.armed_at_ms = None;
    }
}
