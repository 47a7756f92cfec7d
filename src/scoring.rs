use crate::config::{ScoringConfig, SeverityWeights};
use crate::indicator::Indicator;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    LikelySafe,
    ModeratelySuspicious,
    HighlySuspicious,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::LikelySafe => "likely_safe",
            Verdict::ModeratelySuspicious => "moderately_suspicious",
            Verdict::HighlySuspicious => "highly_suspicious",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::LikelySafe => "Likely Safe",
            Verdict::ModeratelySuspicious => "Moderately Suspicious",
            Verdict::HighlySuspicious => "Highly Suspicious",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sums severity weights, clamps to the maximum and buckets the total.
#[derive(Debug, Clone)]
pub struct ScoreAggregator {
    weights: SeverityWeights,
    max_score: u32,
    highly_suspicious_at: u32,
    moderately_suspicious_at: u32,
}

impl Default for ScoreAggregator {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

impl ScoreAggregator {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            weights: config.weights.clone(),
            max_score: config.max_score,
            highly_suspicious_at: config.highly_suspicious_at,
            moderately_suspicious_at: config.moderately_suspicious_at,
        }
    }

    pub fn score(&self, indicators: &[Indicator]) -> u32 {
        let total = indicators
            .iter()
            .map(|i| self.weights.weight(i.severity))
            .fold(0u32, |acc, w| acc.saturating_add(w));
        total.min(self.max_score)
    }

    /// Thresholds are inclusive: a score equal to a threshold takes the upper bucket.
    pub fn verdict(&self, score: u32) -> Verdict {
        if score >= self.highly_suspicious_at {
            Verdict::HighlySuspicious
        } else if score >= self.moderately_suspicious_at {
            Verdict::ModeratelySuspicious
        } else {
            Verdict::LikelySafe
        }
    }

    pub fn aggregate(&self, indicators: &[Indicator]) -> (u32, Verdict) {
        let score = self.score(indicators);
        (score, self.verdict(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::{IndicatorKind, Severity};

    fn indicators(severities: &[Severity]) -> Vec<Indicator> {
        severities
            .iter()
            .map(|s| Indicator::new(IndicatorKind::Urgency, *s, "test"))
            .collect()
    }

    #[test]
    fn test_empty_sequence_is_safe() {
        let aggregator = ScoreAggregator::default();
        assert_eq!(aggregator.aggregate(&[]), (0, Verdict::LikelySafe));
    }

    #[test]
    fn test_weights_are_summed() {
        let aggregator = ScoreAggregator::default();
        assert_eq!(
            aggregator.score(&indicators(&[Severity::High, Severity::Medium])),
            60
        );
        assert_eq!(
            aggregator.score(&indicators(&[Severity::Low, Severity::Low, Severity::Medium])),
            40
        );
    }

    #[test]
    fn test_score_is_clamped() {
        let aggregator = ScoreAggregator::default();
        let many = indicators(&[Severity::High; 12]);
        assert_eq!(aggregator.aggregate(&many), (100, Verdict::HighlySuspicious));
    }

    #[test]
    fn test_verdict_boundaries() {
        let aggregator = ScoreAggregator::default();
        assert_eq!(aggregator.verdict(0), Verdict::LikelySafe);
        assert_eq!(aggregator.verdict(29), Verdict::LikelySafe);
        assert_eq!(aggregator.verdict(30), Verdict::ModeratelySuspicious);
        assert_eq!(aggregator.verdict(69), Verdict::ModeratelySuspicious);
        assert_eq!(aggregator.verdict(70), Verdict::HighlySuspicious);
        assert_eq!(aggregator.verdict(100), Verdict::HighlySuspicious);
    }

    #[test]
    fn test_verdict_is_monotone_in_score() {
        let aggregator = ScoreAggregator::default();
        let mut previous = aggregator.verdict(0);
        for score in 1..=100 {
            let current = aggregator.verdict(score);
            assert!(current >= previous, "verdict dropped at score {score}");
            previous = current;
        }
    }

    #[test]
    fn test_custom_weights() {
        let mut config = ScoringConfig::default();
        config.weights.low = 35;
        let aggregator = ScoreAggregator::new(&config);
        assert_eq!(
            aggregator.aggregate(&indicators(&[Severity::Low])),
            (35, Verdict::ModeratelySuspicious)
        );
    }
}
