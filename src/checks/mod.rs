pub mod content;
pub mod link;
pub mod sender;

use crate::config::Config;
use crate::indicator::{Indicator, IndicatorKind};
use regex::Regex;
use sender::{SenderClassifier, SenderDetector, SenderStatus};

/// Everything a check may look at for one analysis.
#[derive(Debug, Clone)]
pub struct EmailContext<'a> {
    pub text: &'a str,
    pub sender: Option<String>,
    pub sender_status: SenderStatus,
}

pub trait IndicatorCheck: Send + Sync {
    fn check(&self, context: &EmailContext) -> Option<Indicator>;
    fn name(&self) -> &str;
}

/// Case-insensitive "contains any of" matcher over a vocabulary list.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    regex: Option<Regex>,
}

impl TermMatcher {
    pub fn new(terms: &[String]) -> anyhow::Result<Self> {
        let alternatives: Vec<String> = terms
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return Ok(Self { regex: None });
        }

        let regex = Regex::new(&format!("(?i)(?:{})", alternatives.join("|")))?;
        Ok(Self { regex: Some(regex) })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|r| r.is_match(text))
    }

    /// First matching term as it appears in the text.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex.as_ref()?.find(text).map(|m| m.as_str())
    }
}

/// Output of the extraction stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub sender: Option<String>,
    pub sender_status: SenderStatus,
    pub indicators: Vec<Indicator>,
}

/// Runs sender detection and then every check in authored order.
pub struct IndicatorExtractor {
    detector: SenderDetector,
    classifier: SenderClassifier,
    checks: Vec<Box<dyn IndicatorCheck>>,
    collapse_verification_overlap: bool,
}

impl IndicatorExtractor {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let email = &config.email;
        let checks: Vec<Box<dyn IndicatorCheck>> = vec![
            Box::new(sender::SenderCheck::new(&config.sender)),
            Box::new(sender::VerificationRequestCheck::new(email)?),
            Box::new(content::TermCheck::urgency(email)?),
            Box::new(link::SuspiciousLinkCheck::new(email)?),
            Box::new(content::TermCheck::personal_info(email)?),
            Box::new(content::TermCheck::phone_verification(email)?),
            Box::new(content::GrammarCheck::new(email)?),
        ];

        Ok(Self {
            detector: SenderDetector::new()?,
            classifier: SenderClassifier::new(&config.sender),
            checks,
            collapse_verification_overlap: email.collapse_verification_overlap,
        })
    }

    pub fn check_names(&self) -> Vec<&str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    pub fn extract(&self, text: &str) -> Extraction {
        let sender = self.detector.detect(text);
        let sender_status = self.classifier.classify(sender.as_deref());
        let context = EmailContext {
            text,
            sender,
            sender_status,
        };

        let mut indicators = Vec::new();
        for check in &self.checks {
            if let Some(indicator) = check.check(&context) {
                log::debug!(
                    "Check '{}' fired: {} ({})",
                    check.name(),
                    indicator.kind,
                    indicator.severity
                );
                indicators.push(indicator);
            }
        }

        if self.collapse_verification_overlap
            && indicators
                .iter()
                .any(|i| i.kind == IndicatorKind::VerificationRequest)
        {
            indicators.retain(|i| i.kind != IndicatorKind::PhoneVerificationPhish);
        }

        Extraction {
            sender: context.sender,
            sender_status,
            indicators,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(extraction: &Extraction) -> Vec<IndicatorKind> {
        extraction.indicators.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_term_matcher() {
        let matcher =
            TermMatcher::new(&["act now".to_string(), "c++".to_string(), " ".to_string()])
                .unwrap();
        assert!(matcher.is_match("Please ACT NOW!"));
        assert!(matcher.is_match("learn c++ today"));
        assert!(!matcher.is_match("nothing here"));
        assert_eq!(matcher.find("You must Act Now"), Some("Act Now"));
    }

    #[test]
    fn test_empty_term_list_never_matches() {
        let matcher = TermMatcher::new(&[]).unwrap();
        assert!(!matcher.is_match("anything"));
        assert_eq!(matcher.find("anything"), None);
    }

    #[test]
    fn test_clean_gmail_message_has_no_indicators() {
        let extractor = IndicatorExtractor::new(&Config::default()).unwrap();
        let extraction = extractor.extract("From: user@gmail.com\nYour account is safe.");

        assert_eq!(extraction.sender.as_deref(), Some("user@gmail.com"));
        assert_eq!(extraction.sender_status, SenderStatus::Trusted);
        assert!(extraction.indicators.is_empty());
    }

    #[test]
    fn test_checks_fire_independently_in_authored_order() {
        let extractor = IndicatorExtractor::new(&Config::default()).unwrap();
        let text = "From: alerts@secure-mail.net\n\
                    URGENT: confirm your password and phone number at http://evil.example/login";
        let extraction = extractor.extract(text);

        assert_eq!(
            kinds(&extraction),
            vec![
                IndicatorKind::SuspiciousSender,
                IndicatorKind::Urgency,
                IndicatorKind::SuspiciousLink,
                IndicatorKind::PersonalInfoRequest,
                IndicatorKind::PhoneVerificationPhish,
            ]
        );
    }

    #[test]
    fn test_missing_sender_is_reported() {
        let extractor = IndicatorExtractor::new(&Config::default()).unwrap();
        let extraction = extractor.extract("Hello there, nothing to see.");

        assert_eq!(extraction.sender, None);
        assert_eq!(kinds(&extraction), vec![IndicatorKind::NoSenderDetected]);
    }

    #[test]
    fn test_verification_overlap_double_counts_by_default() {
        let extractor = IndicatorExtractor::new(&Config::default()).unwrap();
        let extraction =
            extractor.extract("From: friend@gmail.com\nPlease send me the verification code.");

        assert_eq!(
            kinds(&extraction),
            vec![
                IndicatorKind::VerificationRequest,
                IndicatorKind::PhoneVerificationPhish,
            ]
        );
    }

    #[test]
    fn test_verification_overlap_can_be_collapsed() {
        let mut config = Config::default();
        config.email.collapse_verification_overlap = true;
        let extractor = IndicatorExtractor::new(&config).unwrap();
        let extraction =
            extractor.extract("From: friend@gmail.com\nPlease send me the verification code.");

        assert_eq!(kinds(&extraction), vec![IndicatorKind::VerificationRequest]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = IndicatorExtractor::new(&Config::default()).unwrap();
        let text = "From: x@gmai1.com\nurgent! visit https://bit.ly/abc for your bank account";
        assert_eq!(extractor.extract(text), extractor.extract(text));
    }

    #[test]
    fn test_check_names_listed() {
        let extractor = IndicatorExtractor::new(&Config::default()).unwrap();
        let names = extractor.check_names();
        assert_eq!(names.len(), 7);
        assert_eq!(names[0], "sender");
        assert_eq!(names[6], "grammar");
    }
}
