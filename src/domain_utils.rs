/// Helpers shared by the sender and link checks
pub struct DomainUtils;

impl DomainUtils {
    /// Domain part of an email address, lower-cased
    pub fn extract_domain(email: &str) -> Option<String> {
        let (_, domain) = email.trim().rsplit_once('@')?;
        if domain.is_empty() {
            None
        } else {
            Some(domain.to_lowercase())
        }
    }

    /// True when `domain` equals an entry of `domain_list` or is a subdomain of one
    pub fn matches_domain_list(domain: &str, domain_list: &[String]) -> bool {
        let domain = Self::canonicalize_domain(domain);

        domain_list.iter().any(|pattern| {
            let pattern = Self::canonicalize_domain(pattern);
            domain == pattern || domain.ends_with(&format!(".{pattern}"))
        })
    }

    /// Lower-case, drop a trailing root dot and a leading `www.`
    pub fn canonicalize_domain(domain: &str) -> String {
        let lowered = domain.trim().trim_end_matches('.').to_lowercase();
        match lowered.strip_prefix("www.") {
            Some(stripped) => stripped.to_string(),
            None => lowered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain() {
        assert_eq!(
            DomainUtils::extract_domain("User@Example.com"),
            Some("example.com".to_string())
        );
        assert_eq!(DomainUtils::extract_domain("invalid"), None);
        assert_eq!(DomainUtils::extract_domain("trailing@"), None);
    }

    #[test]
    fn test_matches_domain_list() {
        let domains = vec!["google.com".to_string(), "gmail.com".to_string()];

        assert!(DomainUtils::matches_domain_list("google.com", &domains));
        assert!(DomainUtils::matches_domain_list("accounts.google.com", &domains));
        assert!(DomainUtils::matches_domain_list("WWW.GMAIL.COM.", &domains));
        assert!(!DomainUtils::matches_domain_list("google.com.evil.xyz", &domains));
        assert!(!DomainUtils::matches_domain_list("notgoogle.com", &domains));
    }

    #[test]
    fn test_canonicalize_domain() {
        assert_eq!(
            DomainUtils::canonicalize_domain("www.Example.com."),
            "example.com"
        );
        assert_eq!(DomainUtils::canonicalize_domain("example.com"), "example.com");
    }
}
