use std::time::Duration;

use crate::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct HighlightConfig {
    /// Number of highlights requested from the generator.
    pub clip_count: usize,
    /// Seconds.
    pub min_duration: f64,
    /// Seconds.
    pub max_duration: f64,
    /// Confidence of an in-bounds clip before any duration penalty. At most
    /// [`HighlightConfig::MAX_BASE_CONFIDENCE`], which caps every clip score.
    pub base_confidence: f64,
    /// Minimum normalized edit similarity for a fuzzy single-word match.
    /// `1.0` restricts the unigram tier to exact words.
    pub similarity_threshold: f64,
    pub request_timeout: Duration,
}

impl HighlightConfig {
    pub const DEFAULT_CLIP_COUNT: usize = 3;
    pub const DEFAULT_MIN_DURATION: f64 = 10.0;
    pub const DEFAULT_MAX_DURATION: f64 = 60.0;
    pub const DEFAULT_BASE_CONFIDENCE: f64 = 0.8;
    pub const MAX_BASE_CONFIDENCE: f64 = 0.8;
    pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    pub fn with_clip_count(mut self, clip_count: usize) -> Self {
        self.clip_count = clip_count;
        self
    }

    pub fn with_duration_bounds(mut self, min_duration: f64, max_duration: f64) -> Self {
        self.min_duration = min_duration;
        self.max_duration = max_duration;
        self
    }

    pub fn with_base_confidence(mut self, base_confidence: f64) -> Self {
        self.base_confidence = base_confidence;
        self
    }

    pub fn with_similarity_threshold(mut self, similarity_threshold: f64) -> Self {
        self.similarity_threshold = similarity_threshold;
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.clip_count == 0 {
            return Err(Error::InvalidConfig("clip_count must be at least 1".into()));
        }
        if !(self.min_duration.is_finite() && self.min_duration > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "min_duration must be positive, got {}",
                self.min_duration
            )));
        }
        if !(self.max_duration.is_finite() && self.max_duration >= self.min_duration) {
            return Err(Error::InvalidConfig(format!(
                "max_duration ({}) must not be below min_duration ({})",
                self.max_duration, self.min_duration
            )));
        }
        if !(0.0..=Self::MAX_BASE_CONFIDENCE).contains(&self.base_confidence) {
            return Err(Error::InvalidConfig(format!(
                "base_confidence must be within [0, {}], got {}",
                Self::MAX_BASE_CONFIDENCE,
                self.base_confidence
            )));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::InvalidConfig(format!(
                "similarity_threshold must be within [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(Error::InvalidConfig("request_timeout must be non-zero".into()));
        }
        Ok(())
    }

    /// Midpoint of the duration bounds, used to guess an end when the text
    /// gives no usable anchor.
    pub fn target_duration(&self) -> f64 {
        (self.min_duration + self.max_duration) / 2.0
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            clip_count: Self::DEFAULT_CLIP_COUNT,
            min_duration: Self::DEFAULT_MIN_DURATION,
            max_duration: Self::DEFAULT_MAX_DURATION,
            base_confidence: Self::DEFAULT_BASE_CONFIDENCE,
            similarity_threshold: Self::DEFAULT_SIMILARITY_THRESHOLD,
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = HighlightConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.base_confidence, 0.8);
        assert_eq!(config.target_duration(), 35.0);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let config = HighlightConfig::default().with_duration_bounds(30.0, 20.0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_non_positive_min_duration() {
        let config = HighlightConfig::default().with_duration_bounds(0.0, 20.0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_clips() {
        let config = HighlightConfig::default().with_clip_count(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        let config = HighlightConfig::default().with_similarity_threshold(1.5);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_base_confidence_above_ceiling() {
        let config = HighlightConfig::default().with_base_confidence(0.9);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = HighlightConfig::default().with_base_confidence(0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn equal_bounds_are_allowed() {
        let config = HighlightConfig::default().with_duration_bounds(15.0, 15.0);
        assert!(config.validate().is_ok());
    }
}
