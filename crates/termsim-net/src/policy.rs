//! Domain allow-list.

/// Accepts a host when it equals an allowed entry or is a subdomain of one.
#[derive(Debug, Clone)]
pub struct DomainPolicy {
    allowed: Vec<String>,
}

impl DomainPolicy {
    pub fn new(allowed: &[String]) -> Self {
        Self {
            allowed: allowed.iter().map(|d| d.to_ascii_lowercase()).collect(),
        }
    }

    /// Check a user-supplied host or URL against the allow-list.
    ///
    /// A leading `http://` or `https://` and anything from the first `/`
    /// onward are ignored, and the comparison is case-insensitive.
    pub fn validate_domain(&self, name: &str) -> bool {
        let host = clean_domain(name);
        self.allowed.iter().any(|allowed| {
            host == *allowed
                || (host.len() > allowed.len()
                    && host.ends_with(allowed.as_str())
                    && host.as_bytes()[host.len() - allowed.len() - 1] == b'.')
        })
    }
}

fn clean_domain(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .unwrap_or(&lower);
    match rest.find('/') {
        Some(i) => rest[..i].to_string(),
        None => rest.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> DomainPolicy {
        DomainPolicy::new(&["example.com".to_string(), "localhost".to_string()])
    }

    #[test]
    fn exact_match() {
        assert!(policy().validate_domain("example.com"));
        assert!(policy().validate_domain("localhost"));
    }

    #[test]
    fn subdomain_match() {
        assert!(policy().validate_domain("www.example.com"));
        assert!(policy().validate_domain("a.b.example.com"));
    }

    #[test]
    fn suffix_without_dot_rejected() {
        assert!(!policy().validate_domain("badexample.com"));
        assert!(!policy().validate_domain("example.com.evil.net"));
    }

    #[test]
    fn scheme_path_and_case_ignored() {
        assert!(policy().validate_domain("https://WWW.Example.com/search?q=1"));
        assert!(policy().validate_domain("http://localhost/"));
    }

    #[test]
    fn unknown_rejected() {
        assert!(!policy().validate_domain("evil.org"));
        assert!(!policy().validate_domain(""));
    }
}
