use std::time::{Duration, Instant};

/// Event-suppression gate: an attempt only takes effect if more than
/// `min_gap` has elapsed since the last effective attempt. Suppressed
/// attempts are dropped, not queued — there is nothing to flush later.
///
/// Callers pass `now` in so timing is controllable in tests.
#[derive(Debug)]
pub struct UpdateThrottle {
    min_gap: Duration,
    last_effective: Option<Instant>,
}

impl UpdateThrottle {
    pub fn new(min_gap: Duration) -> Self {
        Self {
            min_gap,
            last_effective: None,
        }
    }

    /// Returns true (and re-arms the gate) if this attempt takes effect.
    /// The very first attempt always passes.
    pub fn allow(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_effective {
            if now.duration_since(last) <= self.min_gap {
                return false;
            }
        }
        self.last_effective = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAP: Duration = Duration::from_millis(300);

    #[test]
    fn test_first_attempt_passes() {
        let mut gate = UpdateThrottle::new(GAP);
        assert!(gate.allow(Instant::now()));
    }

    #[test]
    fn test_burst_collapses_to_one() {
        let mut gate = UpdateThrottle::new(GAP);
        let t0 = Instant::now();

        let effective = (0u64..10)
            .filter(|i| gate.allow(t0 + Duration::from_millis(i * 20)))
            .count();
        assert_eq!(effective, 1);
    }

    #[test]
    fn test_spaced_attempts_all_pass() {
        let mut gate = UpdateThrottle::new(GAP);
        let t0 = Instant::now();

        let effective = (0u64..10)
            .filter(|i| gate.allow(t0 + Duration::from_millis(i * 400)))
            .count();
        assert_eq!(effective, 10);
    }

    #[test]
    fn test_gap_measured_from_last_effective_attempt() {
        let mut gate = UpdateThrottle::new(GAP);
        let t0 = Instant::now();

        assert!(gate.allow(t0));
        assert!(!gate.allow(t0 + Duration::from_millis(200)));
        // 150ms after the suppressed attempt, but 350ms after the last
        // effective one — passes.
        assert!(gate.allow(t0 + Duration::from_millis(350)));
    }
}
