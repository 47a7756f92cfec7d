use crate::indicator::Severity;
use crate::render::{Language, Theme};
use anyhow::{bail, Context};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub sender: SenderConfig,
    pub email: EmailConfig,
    pub url: UrlConfig,
    pub ui: UiConfig,
    pub obfuscation: ObfuscationConfig,
}

/// Point value contributed by each indicator severity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityWeights {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl SeverityWeights {
    pub fn weight(&self, severity: Severity) -> u32 {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self {
            high: 40,
            medium: 20,
            low: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: SeverityWeights,
    pub max_score: u32,
    pub highly_suspicious_at: u32,
    pub moderately_suspicious_at: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: SeverityWeights::default(),
            max_score: 100,
            highly_suspicious_at: 70,
            moderately_suspicious_at: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderConfig {
    /// Address suffix of the only provider treated as legitimate.
    pub trusted_suffix: String,
    /// Domains that imitate the trusted provider.
    pub lookalike_domains: Vec<String>,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            trusted_suffix: "@gmail.com".to_string(),
            lookalike_domains: strings(&[
                "gmai1.com",
                "gmial.com",
                "goog1e.com",
                "gmail.co",
                "gmaill.com",
                "gmailllllll.com",
            ]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub urgency_terms: Vec<String>,
    pub sensitive_terms: Vec<String>,
    /// Vocabulary that makes a trusted sender's mail a verification request.
    pub verification_terms: Vec<String>,
    /// Broader phone/code vocabulary checked regardless of sender.
    pub phone_verification_terms: Vec<String>,
    /// Link hosts (and their subdomains) that do not count as suspicious.
    pub trusted_link_domains: Vec<String>,
    pub grammar_pattern: String,
    /// The grammar indicator fires when the match count exceeds this value.
    pub grammar_match_threshold: usize,
    /// Drop `phone_verification_phish` when `verification_request` already fired.
    pub collapse_verification_overlap: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            urgency_terms: strings(&[
                "urgent",
                "immediate",
                "act now",
                "limited time",
                "account suspended",
            ]),
            sensitive_terms: strings(&[
                "password",
                "credit card",
                "social security",
                "bank account",
            ]),
            verification_terms: strings(&[
                "phone",
                "sms",
                "verification code",
                "2fa",
                "two-factor",
                "number verification",
            ]),
            phone_verification_terms: strings(&[
                "phone number",
                "sms code",
                "verification code",
                "confirm your number",
                "2-step verification",
            ]),
            trusted_link_domains: strings(&["google.com", "gmail.com"]),
            grammar_pattern: r"\b(?:your|you're)\b.\b(?:account|password)\b.\b(?:is|are)\b.*\b(?:compromised|expired|suspended)\b".to_string(),
            grammar_match_threshold: 2,
            collapse_verification_overlap: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
    pub keywords: Vec<String>,
    pub suspicious_tlds: Vec<String>,
    pub fuzz: FuzzConfig,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            keywords: strings(&["login", "bank", "paypal", "update", "verify"]),
            suspicious_tlds: strings(&[".xyz", ".top", ".club", ".tk"]),
            fuzz: FuzzConfig::default(),
        }
    }
}

/// Random flagging of otherwise clean URLs. Off unless explicitly enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzConfig {
    pub enabled: bool,
    pub probability: f64,
    pub seed: Option<u64>,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            probability: 0.3,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub language: Language,
    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObfuscationConfig {
    pub uploads_dir: String,
    pub outputs_dir: String,
}

impl Default for ObfuscationConfig {
    fn default() -> Self {
        Self {
            uploads_dir: "uploads".to_string(),
            outputs_dir: "outputs".to_string(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Config {
    pub fn default_path() -> &'static str {
        "phishcheck.yaml"
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading configuration {path}"))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check the tables for values the analyzers cannot work with.
    pub fn validate(&self) -> anyhow::Result<()> {
        let scoring = &self.scoring;
        if scoring.moderately_suspicious_at >= scoring.highly_suspicious_at {
            bail!(
                "moderately_suspicious_at ({}) must be below highly_suspicious_at ({})",
                scoring.moderately_suspicious_at,
                scoring.highly_suspicious_at
            );
        }
        if scoring.highly_suspicious_at > scoring.max_score {
            bail!(
                "highly_suspicious_at ({}) exceeds max_score ({})",
                scoring.highly_suspicious_at,
                scoring.max_score
            );
        }
        let weights = &scoring.weights;
        if weights.high == 0 || weights.medium == 0 || weights.low == 0 {
            bail!("severity weights must be non-zero");
        }

        if !self.sender.trusted_suffix.starts_with('@') {
            bail!(
                "trusted_suffix '{}' must start with '@'",
                self.sender.trusted_suffix
            );
        }

        Regex::new(&format!("(?i){}", self.email.grammar_pattern))
            .context("compiling grammar_pattern")?;

        let fuzz = &self.url.fuzz;
        if !(0.0..=1.0).contains(&fuzz.probability) {
            bail!("fuzz probability {} is outside [0, 1]", fuzz.probability);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml(
            r#"
scoring:
  weights:
    high: 50
url:
  keywords: [signin]
"#,
        )
        .unwrap();

        assert_eq!(config.scoring.weights.high, 50);
        assert_eq!(config.scoring.weights.medium, 20);
        assert_eq!(config.scoring.highly_suspicious_at, 70);
        assert_eq!(config.url.keywords, vec!["signin".to_string()]);
        assert_eq!(config.url.suspicious_tlds.len(), 4);
        assert_eq!(config.sender.trusted_suffix, "@gmail.com");
    }

    #[test]
    fn test_yaml_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phishcheck.yaml");
        let path = path.to_str().unwrap();

        let mut config = Config::default();
        config.ui.theme = Theme::Light;
        config.url.fuzz.enabled = true;
        config.to_file(path).unwrap();

        let loaded = Config::from_file(path).unwrap();
        assert_eq!(loaded.ui.theme, Theme::Light);
        assert!(loaded.url.fuzz.enabled);
        assert_eq!(loaded.email.urgency_terms, config.email.urgency_terms);
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let config = Config::from_yaml("ui:\n  language: fr\n").unwrap();
        assert_eq!(config.ui.language, Language::En);

        let config = Config::from_yaml("ui:\n  language: UR\n  theme: light\n").unwrap();
        assert_eq!(config.ui.language, Language::Ur);
        assert_eq!(config.ui.theme, Theme::Light);
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        let mut config = Config::default();
        config.scoring.moderately_suspicious_at = 80;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_fuzz_probability() {
        let mut config = Config::default();
        config.url.fuzz.probability = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_broken_grammar_pattern() {
        let mut config = Config::default();
        config.email.grammar_pattern = "(unclosed".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_weight_lookup() {
        let weights = SeverityWeights::default();
        assert_eq!(weights.weight(Severity::High), 40);
        assert_eq!(weights.weight(Severity::Medium), 20);
        assert_eq!(weights.weight(Severity::Low), 10);
    }
}
