use super::{EmailContext, IndicatorCheck, TermMatcher};
use crate::config::{EmailConfig, SenderConfig};
use crate::domain_utils::DomainUtils;
use crate::indicator::{Indicator, IndicatorKind, Severity};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderStatus {
    /// No `From:` header and no bare address in the text
    Missing,
    Trusted,
    Suspicious,
}

/// Finds the sender address: `From:` header first, then the first bare address.
pub struct SenderDetector {
    from_header: Regex,
    bare_address: Regex,
}

impl SenderDetector {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            // Optional display name before `<addr>`
            from_header: Regex::new(r"(?i)From:[ \t]*(?:[^<\r\n]*<)?[ \t]*([^<>\s@]+@[^<>\s]+)")?,
            bare_address: Regex::new(r"\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b")?,
        })
    }

    pub fn detect(&self, text: &str) -> Option<String> {
        let found = self
            .from_header
            .captures(text)
            .and_then(|caps| caps.get(1))
            .or_else(|| self.bare_address.find(text))?;

        let sender = found.as_str().trim().to_lowercase();
        if sender.is_empty() {
            None
        } else {
            Some(sender)
        }
    }
}

pub struct SenderClassifier {
    trusted_suffix: String,
    lookalike_domains: Vec<String>,
}

impl SenderClassifier {
    pub fn new(config: &SenderConfig) -> Self {
        Self {
            trusted_suffix: config.trusted_suffix.to_lowercase(),
            lookalike_domains: config
                .lookalike_domains
                .iter()
                .map(|d| DomainUtils::canonicalize_domain(d.trim_start_matches('@')))
                .collect(),
        }
    }

    pub fn classify(&self, sender: Option<&str>) -> SenderStatus {
        let Some(sender) = sender else {
            return SenderStatus::Missing;
        };
        let sender = sender.to_lowercase();

        let is_trusted = sender.ends_with(&self.trusted_suffix);
        let is_lookalike = DomainUtils::extract_domain(&sender)
            .map(|domain| DomainUtils::canonicalize_domain(&domain))
            .is_some_and(|domain| self.lookalike_domains.contains(&domain));

        if is_trusted && !is_lookalike {
            SenderStatus::Trusted
        } else {
            if is_lookalike {
                log::debug!("Sender {sender} uses a look-alike domain");
            }
            SenderStatus::Suspicious
        }
    }
}

/// Emits `no_sender_detected` or `suspicious_sender` from the classified sender.
pub struct SenderCheck {
    trusted_suffix: String,
}

impl SenderCheck {
    pub fn new(config: &SenderConfig) -> Self {
        Self {
            trusted_suffix: config.trusted_suffix.to_lowercase(),
        }
    }
}

impl IndicatorCheck for SenderCheck {
    fn check(&self, context: &EmailContext) -> Option<Indicator> {
        match (context.sender_status, context.sender.as_deref()) {
            (SenderStatus::Missing, _) | (_, None) => Some(Indicator::new(
                IndicatorKind::NoSenderDetected,
                Severity::Medium,
                "Could not detect sender email address in the provided content. \
                 Please include the \"From\" field for better analysis.",
            )),
            (SenderStatus::Suspicious, Some(sender)) => Some(Indicator::new(
                IndicatorKind::SuspiciousSender,
                Severity::High,
                format!(
                    "Sender email \"{sender}\" does not appear to be a legitimate address. \
                     Legitimate mail should come from {} addresses.",
                    self.trusted_suffix
                ),
            )),
            (SenderStatus::Trusted, Some(_)) => None,
        }
    }

    fn name(&self) -> &str {
        "sender"
    }
}

/// A trusted sender asking for phone or code verification.
pub struct VerificationRequestCheck {
    terms: TermMatcher,
}

impl VerificationRequestCheck {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        Ok(Self {
            terms: TermMatcher::new(&config.verification_terms)?,
        })
    }
}

impl IndicatorCheck for VerificationRequestCheck {
    fn check(&self, context: &EmailContext) -> Option<Indicator> {
        if context.sender_status != SenderStatus::Trusted || !self.terms.is_match(context.text) {
            return None;
        }

        Some(Indicator::new(
            IndicatorKind::VerificationRequest,
            Severity::High,
            "Email mentions phone/SMS verification, which legitimate security notifications \
             rarely request via email. This could be an attempt to steal your verification codes.",
        ))
    }

    fn name(&self) -> &str {
        "verification_request"
    }
}
