use pimc_montecarlo::AcceptanceStatistics;

/// Records a mover's [`AcceptanceStatistics`] baseline so the adjuster can compute the
/// acceptance rate accrued since the last reset, rather than since the simulation began.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveSuccessTracker {
    baseline: AcceptanceStatistics,
}

impl MoveSuccessTracker {
    pub fn new() -> Self {
        Default::default()
    }

    /// Rebases the tracker onto `current`, typically called once per block.
    pub fn reset(&mut self, current: &AcceptanceStatistics) {
        self.baseline = current.clone();
    }

    pub fn accepted_since(&self, current: &AcceptanceStatistics) -> i32 {
        current.n_succ - self.baseline.n_succ
    }

    pub fn attempted_since(&self, current: &AcceptanceStatistics) -> i32 {
        self.accepted_since(current) + (current.n_failed - self.baseline.n_failed)
    }

    /// `None` when no attempts were recorded since the last reset.
    pub fn rate_since(&self, current: &AcceptanceStatistics) -> Option<f64> {
        let total = self.attempted_since(current);
        if total == 0 {
            None
        } else {
            Some(self.accepted_since(current) as f64 / total as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_none_when_nothing_attempted() {
        let tracker = MoveSuccessTracker::new();
        let stats = AcceptanceStatistics { n_succ: 0, n_failed: 0 };
        assert_eq!(tracker.rate_since(&stats), None);
    }

    #[test]
    fn rate_only_counts_attempts_since_reset() {
        let mut tracker = MoveSuccessTracker::new();
        let baseline = AcceptanceStatistics { n_succ: 10, n_failed: 5 };
        tracker.reset(&baseline);
        let later = AcceptanceStatistics { n_succ: 13, n_failed: 6 };
        assert_eq!(tracker.attempted_since(&later), 4);
        assert!((tracker.rate_since(&later).unwrap() - 0.75).abs() < 1e-12);
    }
}
