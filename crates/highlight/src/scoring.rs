use crate::config::HighlightConfig;

/// Rounds to two decimal places, the precision of every published time and score.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scales the base confidence down for clips outside the duration bounds.
///
/// Too short: `base * duration / min`. Too long: `base * max / duration`.
/// In bounds: `base`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceScorer {
    base: f64,
    min_duration: f64,
    max_duration: f64,
}

impl ConfidenceScorer {
    pub fn new(base: f64, min_duration: f64, max_duration: f64) -> Self {
        Self {
            base,
            min_duration,
            max_duration,
        }
    }

    pub fn from_config(config: &HighlightConfig) -> Self {
        Self::new(
            config.base_confidence,
            config.min_duration,
            config.max_duration,
        )
    }

    pub fn penalty(&self, duration: f64) -> f64 {
        if duration < self.min_duration {
            duration.max(0.0) / self.min_duration
        } else if duration > self.max_duration {
            self.max_duration / duration
        } else {
            1.0
        }
    }

    pub fn score(&self, duration: f64) -> f64 {
        round2(self.base * self.penalty(duration))
    }
}
