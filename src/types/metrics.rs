#[derive(Clone, Copy, Debug, Default)]
pub struct BoardMetrics {
    pub last_claim_duration_ms: f64,
    pub last_snapshot_duration_ms: f64,
}

impl BoardMetrics {
    pub fn update_claim(&mut self, duration: f64) {
        if duration >= 0.0 {
            self.last_claim_duration_ms = duration;
        }
    }

    pub fn update_snapshot(&mut self, duration: f64) {
        if duration >= 0.0 {
            self.last_snapshot_duration_ms = duration;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_negative_durations() {
        let mut metrics = BoardMetrics::default();
        metrics.update_claim(1.5);
        metrics.update_claim(-1.0);
        assert_eq!(metrics.last_claim_duration_ms, 1.5);

        metrics.update_snapshot(0.25);
        metrics.update_snapshot(-0.5);
        assert_eq!(metrics.last_snapshot_duration_ms, 0.25);
    }
}
