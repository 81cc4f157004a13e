use instant::Instant;
use std::time::Duration;

/// Last-writer-wins delay for resize handling.
///
/// Each `signal` pushes the deadline out to `now + window`; `poll` reports a
/// due recomputation at most once per burst of signals. The caller owns the
/// actual timer and uses `remaining` to arm it.
#[derive(Clone, Debug)]
pub struct ResizeDebounce {
    window: Duration,
    deadline: Option<Instant>,
}

impl ResizeDebounce {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    #[inline]
    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn signal(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Time left before the pending recomputation is due, if one is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| {
            if deadline > now {
                deadline - now
            } else {
                Duration::ZERO
            }
        })
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
