use super::{EmailContext, IndicatorCheck, TermMatcher};
use crate::config::EmailConfig;
use crate::indicator::{Indicator, IndicatorKind, Severity};
use regex::Regex;

/// Fires when the text contains any term of a vocabulary.
pub struct TermCheck {
    name: &'static str,
    kind: IndicatorKind,
    severity: Severity,
    message: &'static str,
    terms: TermMatcher,
}

impl TermCheck {
    pub fn urgency(config: &EmailConfig) -> anyhow::Result<Self> {
        Ok(Self {
            name: "urgency",
            kind: IndicatorKind::Urgency,
            severity: Severity::Medium,
            message: "Uses urgent language to pressure quick action",
            terms: TermMatcher::new(&config.urgency_terms)?,
        })
    }

    pub fn personal_info(config: &EmailConfig) -> anyhow::Result<Self> {
        Ok(Self {
            name: "personal_info",
            kind: IndicatorKind::PersonalInfoRequest,
            severity: Severity::High,
            message: "Requests sensitive personal information",
            terms: TermMatcher::new(&config.sensitive_terms)?,
        })
    }

    pub fn phone_verification(config: &EmailConfig) -> anyhow::Result<Self> {
        Ok(Self {
            name: "phone_verification",
            kind: IndicatorKind::PhoneVerificationPhish,
            severity: Severity::High,
            message: "Requests phone number or verification codes, a common tactic \
                      to bypass account security.",
            terms: TermMatcher::new(&config.phone_verification_terms)?,
        })
    }
}

impl IndicatorCheck for TermCheck {
    fn check(&self, context: &EmailContext) -> Option<Indicator> {
        let term = self.terms.find(context.text)?;
        log::debug!("{}: matched '{}'", self.name, term);
        Some(Indicator::new(self.kind, self.severity, self.message))
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Counts matches of a crude grammar pattern.
pub struct GrammarCheck {
    pattern: Regex,
    threshold: usize,
}

impl GrammarCheck {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        Ok(Self {
            pattern: Regex::new(&format!("(?i){}", config.grammar_pattern))?,
            threshold: config.grammar_match_threshold,
        })
    }

    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

impl IndicatorCheck for GrammarCheck {
    fn check(&self, context: &EmailContext) -> Option<Indicator> {
        if self.count(context.text) <= self.threshold {
            return None;
        }
        Some(Indicator::new(
            IndicatorKind::PoorGrammar,
            Severity::Low,
            "Contains grammatical errors common in phishing emails",
        ))
    }

    fn name(&self) -> &str {
        "grammar"
    }
}
