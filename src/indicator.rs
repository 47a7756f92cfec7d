use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    NoSenderDetected,
    SuspiciousSender,
    VerificationRequest,
    Urgency,
    SuspiciousLink,
    PersonalInfoRequest,
    PhoneVerificationPhish,
    PoorGrammar,
}

impl IndicatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKind::NoSenderDetected => "no_sender_detected",
            IndicatorKind::SuspiciousSender => "suspicious_sender",
            IndicatorKind::VerificationRequest => "verification_request",
            IndicatorKind::Urgency => "urgency",
            IndicatorKind::SuspiciousLink => "suspicious_link",
            IndicatorKind::PersonalInfoRequest => "personal_info_request",
            IndicatorKind::PhoneVerificationPhish => "phone_verification_phish",
            IndicatorKind::PoorGrammar => "poor_grammar",
        }
    }

    /// Heading used in reports, e.g. "Suspicious Sender".
    pub fn title(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single detected phishing signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub kind: IndicatorKind,
    pub message: String,
    pub severity: Severity,
}

impl Indicator {
    pub fn new(kind: IndicatorKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_title() {
        assert_eq!(IndicatorKind::SuspiciousSender.title(), "Suspicious Sender");
        assert_eq!(
            IndicatorKind::PhoneVerificationPhish.title(),
            "Phone Verification Phish"
        );
        assert_eq!(IndicatorKind::Urgency.title(), "Urgency");
    }

    #[test]
    fn test_serialized_names_match_kind_tags() {
        let indicator = Indicator::new(IndicatorKind::PoorGrammar, Severity::Low, "bad grammar");
        let json = serde_json::to_value(&indicator).unwrap();
        assert_eq!(json["kind"], "poor_grammar");
        assert_eq!(json["severity"], "low");
    }
}
