use super::{EmailContext, IndicatorCheck};
use crate::config::EmailConfig;
use crate::domain_utils::DomainUtils;
use crate::indicator::{Indicator, IndicatorKind, Severity};
use regex::Regex;
use url::Url;

/// Flags `http(s)://` links whose host is outside the trusted domains.
pub struct SuspiciousLinkCheck {
    link_regex: Regex,
    trusted_domains: Vec<String>,
}

impl SuspiciousLinkCheck {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        Ok(Self {
            link_regex: Regex::new(r#"(?i)https?://[^\s<>"'()\[\]]+"#)?,
            trusted_domains: config.trusted_link_domains.clone(),
        })
    }

    /// Hosts of all untrusted links, in order of appearance.
    pub fn untrusted_hosts(&self, text: &str) -> Vec<String> {
        let mut hosts = Vec::new();

        for link in self.link_regex.find_iter(text) {
            // Sentence punctuation after a link is not part of it
            let link = link
                .as_str()
                .trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | '!' | '?'));

            // An unparseable link has no trusted host
            let host = Url::parse(link)
                .ok()
                .and_then(|url| url.host_str().map(DomainUtils::canonicalize_domain))
                .unwrap_or_else(|| link.to_lowercase());

            if !DomainUtils::matches_domain_list(&host, &self.trusted_domains)
                && !hosts.contains(&host)
            {
                hosts.push(host);
            }
        }

        hosts
    }
}

impl IndicatorCheck for SuspiciousLinkCheck {
    fn check(&self, context: &EmailContext) -> Option<Indicator> {
        let hosts = self.untrusted_hosts(context.text);
        if hosts.is_empty() {
            return None;
        }

        Some(Indicator::new(
            IndicatorKind::SuspiciousLink,
            Severity::High,
            format!("Contains links to untrusted domains: {}", hosts.join(", ")),
        ))
    }

    fn name(&self) -> &str {
        "suspicious_link"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts(text: &str) -> Vec<String> {
        SuspiciousLinkCheck::new(&EmailConfig::default())
            .unwrap()
            .untrusted_hosts(text)
    }

    #[test]
    fn test_trusted_hosts_are_ignored() {
        assert!(hosts("see https://google.com/security").is_empty());
        assert!(hosts("see https://accounts.google.com/signin").is_empty());
        assert!(hosts("see HTTP://MAIL.GMAIL.COM/").is_empty());
        assert!(hosts("no links at all").is_empty());
    }

    #[test]
    fn test_trailing_punctuation_is_not_part_of_the_host() {
        assert!(hosts("Photos are at https://photos.google.com, enjoy.").is_empty());
        assert!(hosts("Look: https://photos.google.com!").is_empty());
        assert!(hosts("Is it https://mail.gmail.com/inbox? Yes; https://google.com:").is_empty());
        assert_eq!(
            hosts("Go to http://evil.example/reset!"),
            vec!["evil.example".to_string()]
        );
    }

    #[test]
    fn test_untrusted_hosts_are_reported_once() {
        assert_eq!(
            hosts("go to http://evil.example/a and http://evil.example/b or https://other.xyz"),
            vec!["evil.example".to_string(), "other.xyz".to_string()]
        );
    }

    #[test]
    fn test_lookalike_prefix_is_not_trusted() {
        assert_eq!(
            hosts("https://google.com.verify-account.top/login"),
            vec!["google.com.verify-account.top".to_string()]
        );
        assert_eq!(
            hosts("https://user@evil.example/"),
            vec!["evil.example".to_string()]
        );
    }

    #[test]
    fn test_link_inside_angle_brackets() {
        assert_eq!(
            hosts("<a href=\"https://phish.example/x\">Google</a>"),
            vec!["phish.example".to_string()]
        );
    }

    #[test]
    fn test_indicator_mentions_hosts() {
        let check = SuspiciousLinkCheck::new(&EmailConfig::default()).unwrap();
        let context = EmailContext {
            text: "click http://bad.example now",
            sender: None,
            sender_status: crate::checks::sender::SenderStatus::Missing,
        };
        let indicator = check.check(&context).unwrap();
        assert_eq!(indicator.kind, IndicatorKind::SuspiciousLink);
        assert_eq!(indicator.severity, Severity::High);
        assert!(indicator.message.contains("bad.example"));
    }
}
