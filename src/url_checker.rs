use crate::config::UrlConfig;
use crate::error::{CheckError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlReason {
    KeywordDetected,
    TldDetected,
    /// Random flag from fuzz mode; no rule matched.
    HeuristicFlag,
}

impl UrlReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlReason::KeywordDetected => "keyword_detected",
            UrlReason::TldDetected => "tld_detected",
            UrlReason::HeuristicFlag => "heuristic_flag",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlCheckResult {
    pub url: String,
    pub flagged: bool,
    pub reasons: Vec<UrlReason>,
    pub matched_keywords: Vec<String>,
    pub matched_tlds: Vec<String>,
}

impl UrlCheckResult {
    /// Last `/`-separated segment of the lowered URL, used in TLD warnings.
    pub fn tail_segment(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or_default()
    }
}

pub struct UrlChecker {
    keywords: Vec<String>,
    suspicious_tlds: Vec<String>,
    fuzz_probability: Option<f64>,
    fuzz_seed: Option<u64>,
}

impl UrlChecker {
    pub fn new(config: &UrlConfig) -> Self {
        let lowered = |items: &[String]| -> Vec<String> {
            items
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect()
        };

        Self {
            keywords: lowered(&config.keywords),
            suspicious_tlds: lowered(&config.suspicious_tlds),
            fuzz_probability: config.fuzz.enabled.then(|| {
                let probability = config.fuzz.probability;
                if probability.is_finite() {
                    probability.clamp(0.0, 1.0)
                } else {
                    log::warn!("Fuzz probability {probability} is not finite, using 0");
                    0.0
                }
            }),
            fuzz_seed: config.fuzz.seed,
        }
    }

    pub fn fuzz_enabled(&self) -> bool {
        self.fuzz_probability.is_some()
    }

    /// Deterministic keyword and TLD rules only.
    pub fn check(&self, url: &str) -> UrlCheckResult {
        let url_lower = url.to_lowercase();

        let matched_keywords: Vec<String> = self
            .keywords
            .iter()
            .filter(|k| url_lower.contains(k.as_str()))
            .cloned()
            .collect();
        let matched_tlds: Vec<String> = self
            .suspicious_tlds
            .iter()
            .filter(|t| url_lower.contains(t.as_str()))
            .cloned()
            .collect();

        let mut reasons = Vec::new();
        if !matched_keywords.is_empty() {
            reasons.push(UrlReason::KeywordDetected);
        }
        if !matched_tlds.is_empty() {
            reasons.push(UrlReason::TldDetected);
        }

        UrlCheckResult {
            url: url_lower,
            flagged: !reasons.is_empty(),
            reasons,
            matched_keywords,
            matched_tlds,
        }
    }

    /// Rules plus, in fuzz mode, a random flag for URLs no rule caught.
    pub fn check_with_rng<R: Rng>(&self, url: &str, rng: &mut R) -> UrlCheckResult {
        let mut result = self.check(url);
        if let Some(probability) = self.fuzz_probability {
            if !result.flagged && rng.gen_bool(probability) {
                log::debug!("Fuzz mode flagged {}", result.url);
                result.flagged = true;
                result.reasons.push(UrlReason::HeuristicFlag);
            }
        }
        result
    }

    /// Builds the RNG for fuzz mode from the configured seed, or from entropy.
    pub fn rng(&self) -> StdRng {
        match self.fuzz_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Rejects blank input, then applies the rules (and fuzz mode when enabled).
    pub fn check_input(&self, url: &str) -> Result<UrlCheckResult> {
        if url.trim().is_empty() {
            return Err(CheckError::input_missing("URL"));
        }

        let result = if self.fuzz_enabled() {
            self.check_with_rng(url, &mut self.rng())
        } else {
            self.check(url)
        };
        log::info!(
            "Checked URL {}: flagged={} reasons={:?}",
            result.url,
            result.flagged,
            result.reasons
        );
        Ok(result)
    }
}
