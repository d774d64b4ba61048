//! Cooldown gate for rate-limiting reveals.

use serde::{Deserialize, Serialize};

/// Default time between reveals, in milliseconds.
pub const DEFAULT_COOLDOWN_MS: u64 = 5000;

/// Single-timestamp rate limiter.
///
/// A request is accepted only when `now_ms` is strictly later than the stored
/// deadline. Accepting moves the deadline to `now_ms + cooldown_ms`; rejecting
/// leaves it alone.
///
/// ```
/// use monster_bingo::core::CooldownGate;
///
/// let mut gate = CooldownGate::new();
/// assert!(gate.try_consume(1, 5000));
/// assert!(!gate.try_consume(5001, 5000)); // equal to the deadline
/// assert!(gate.try_consume(5002, 5000));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownGate {
    next_allowed_ms: u64,
}

impl CooldownGate {
    /// Create a gate that is open for any `now_ms > 0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept or reject a request at `now_ms`.
    pub fn try_consume(&mut self, now_ms: u64, cooldown_ms: u64) -> bool {
        if now_ms > self.next_allowed_ms {
            self.next_allowed_ms = now_ms.saturating_add(cooldown_ms);
            true
        } else {
            false
        }
    }

    /// Milliseconds until a request would be accepted, 0 if open now.
    #[must_use]
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.next_allowed_ms.saturating_add(1).saturating_sub(now_ms)
    }

    /// The stored deadline.
    #[must_use]
    pub fn next_allowed_ms(&self) -> u64 {
        self.next_allowed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_call_within_cooldown_rejected() {
        let mut gate = CooldownGate::new();

        assert!(gate.try_consume(100, 5000));
        assert!(!gate.try_consume(2000, 5000));
        assert!(!gate.try_consume(5099, 5000));
        assert!(gate.try_consume(5101, 5000));
    }

    #[test]
    fn test_exact_deadline_rejected() {
        let mut gate = CooldownGate::new();

        assert!(gate.try_consume(1000, 5000));
        assert!(!gate.try_consume(6000, 5000));
        assert!(gate.try_consume(6001, 5000));
    }

    #[test]
    fn test_time_zero_rejected() {
        let mut gate = CooldownGate::new();
        assert!(!gate.try_consume(0, 5000));
        assert_eq!(gate.next_allowed_ms(), 0);
        assert!(gate.try_consume(1, 5000));
    }

    #[test]
    fn test_rejection_does_not_move_deadline() {
        let mut gate = CooldownGate::new();
        gate.try_consume(10, 5000);

        for now in [11, 500, 4000, 5010] {
            assert!(!gate.try_consume(now, 5000));
            assert_eq!(gate.next_allowed_ms(), 5010);
        }
    }

    #[test]
    fn test_remaining() {
        let mut gate = CooldownGate::new();
        assert_eq!(gate.remaining_ms(1), 0);

        gate.try_consume(1000, 5000);
        assert_eq!(gate.remaining_ms(1000), 5001);
        assert_eq!(gate.remaining_ms(6000), 1);
        assert_eq!(gate.remaining_ms(6001), 0);
        assert_eq!(gate.remaining_ms(9000), 0);
    }

    #[test]
    fn test_saturating_deadline() {
        let mut gate = CooldownGate::new();
        assert!(gate.try_consume(u64::MAX - 1, 5000));
        assert_eq!(gate.next_allowed_ms(), u64::MAX);
        assert!(!gate.try_consume(u64::MAX, 5000));
    }
}
