use crate::checks::sender::SenderStatus;
use crate::checks::IndicatorExtractor;
use crate::config::Config;
use crate::error::{CheckError, Result};
use crate::indicator::Indicator;
use crate::scoring::{ScoreAggregator, Verdict};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sender: Option<String>,
    pub sender_status: SenderStatus,
    pub indicators: Vec<Indicator>,
    pub score: u32,
    pub verdict: Verdict,
}

impl AnalysisResult {
    /// No indicators and a sender from the trusted provider.
    pub fn is_clean_trusted_sender(&self) -> bool {
        self.indicators.is_empty() && self.sender_status == SenderStatus::Trusted
    }
}

/// Email text in, scored verdict out.
pub struct EmailAnalyzer {
    extractor: IndicatorExtractor,
    aggregator: ScoreAggregator,
}

impl EmailAnalyzer {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            extractor: IndicatorExtractor::new(config)?,
            aggregator: ScoreAggregator::new(&config.scoring),
        })
    }

    pub fn extractor(&self) -> &IndicatorExtractor {
        &self.extractor
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let extraction = self.extractor.extract(text);
        let (score, verdict) = self.aggregator.aggregate(&extraction.indicators);

        log::info!(
            "Analyzed email: sender={} indicators={} score={} verdict={}",
            extraction.sender.as_deref().unwrap_or("<none>"),
            extraction.indicators.len(),
            score,
            verdict
        );

        AnalysisResult {
            sender: extraction.sender,
            sender_status: extraction.sender_status,
            indicators: extraction.indicators,
            score,
            verdict,
        }
    }

    /// Like [`analyze`](Self::analyze) but refuses blank submissions.
    pub fn analyze_input(&self, text: &str) -> Result<AnalysisResult> {
        if text.trim().is_empty() {
            return Err(CheckError::input_missing("email content"));
        }
        Ok(self.analyze(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::{IndicatorKind, Severity};

    fn analyzer() -> EmailAnalyzer {
        EmailAnalyzer::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_clean_gmail_message() {
        let result = analyzer().analyze("From: user@gmail.com\nYour account is safe.");

        assert_eq!(result.sender.as_deref(), Some("user@gmail.com"));
        assert!(result.indicators.is_empty());
        assert_eq!(result.score, 0);
        assert_eq!(result.verdict, Verdict::LikelySafe);
        assert!(result.is_clean_trusted_sender());
    }

    #[test]
    fn test_trusted_link_mid_sentence_scores_zero() {
        for text in [
            "From: friend@gmail.com\nPhotos are at https://photos.google.com, enjoy.",
            "From: friend@gmail.com\nPhotos are at https://photos.google.com!",
        ] {
            let result = analyzer().analyze(text);
            assert!(result.indicators.is_empty(), "{text}: {:?}", result.indicators);
            assert_eq!(result.score, 0);
        }
    }

    #[test]
    fn test_lookalike_sender_with_urgency() {
        let result =
            analyzer().analyze("From: support@gmai1.com\nYour account is suspended, act now!");

        let found: Vec<(IndicatorKind, Severity)> = result
            .indicators
            .iter()
            .map(|i| (i.kind, i.severity))
            .collect();
        assert!(found.contains(&(IndicatorKind::SuspiciousSender, Severity::High)));
        assert!(found.contains(&(IndicatorKind::Urgency, Severity::Medium)));
        assert_eq!(result.score, 60);
        assert_eq!(result.verdict, Verdict::ModeratelySuspicious);
    }

    #[test]
    fn test_no_sender_anywhere() {
        let result = analyzer().analyze("Hi, lunch tomorrow?");

        assert_eq!(result.sender, None);
        assert_eq!(result.sender_status, SenderStatus::Missing);
        assert_eq!(result.indicators[0].kind, IndicatorKind::NoSenderDetected);
        assert_eq!(result.score, 20);
        assert_eq!(result.verdict, Verdict::LikelySafe);
    }

    #[test]
    fn test_score_is_clamped_with_many_hits() {
        let text = "From: admin@goog1e.com\n\
                    URGENT: your account is suspended. your account is suspended. \
                    your account is suspended.\n\
                    Verify at http://login-check.xyz and send your password, \
                    credit card and phone number.";
        let result = analyzer().analyze(text);

        assert_eq!(result.score, 100);
        assert_eq!(result.verdict, Verdict::HighlySuspicious);
    }

    #[test]
    fn test_trusted_sender_without_triggers_scores_zero() {
        for text in [
            "From: alice@gmail.com\nSee you on Friday.",
            "From: Bob <bob@gmail.com>\nThe slides are attached.",
            "Message from carol@gmail.com about the picnic",
        ] {
            let result = analyzer().analyze(text);
            assert_eq!(result.score, 0, "{text}");
            assert_eq!(result.verdict, Verdict::LikelySafe);
        }
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let analyzer = analyzer();
        for text in ["", "   ", "\n\t\n"] {
            match analyzer.analyze_input(text) {
                Err(CheckError::InputMissing { what }) => assert_eq!(what, "email content"),
                other => panic!("expected InputMissing, got {other:?}"),
            }
        }
        assert!(analyzer.analyze_input("From: a@gmail.com").is_ok());
    }
}
