//! Candidate hostname validation
//!
//! Filters out placeholders, templating expressions, and well-known
//! vendor/documentation domains that never belong in monitoring config.

/// Substrings that disqualify a candidate hostname.
///
/// Matched case-insensitively by plain containment — no wildcard or regex
/// semantics. A legitimate domain containing one of these fragments is
/// rejected too.
const DENYLIST: &[&str] = &[
    "example.com",
    "example.local",
    "chart-example.local",
    "localhost",
    "127.0.0.1",
    "0.0.0.0",
    ".local",
    "example.org",
    "test.com",
    "httpbin.org",
    "quay.io",
    "github.com",
    "kubernetes.io",
    "argoproj.io",
    "hashicorp.com",
    "redhat.io",
    "microsoftonline.com",
];

/// Whether a candidate string is a real hostname worth monitoring.
pub fn is_valid_fqdn(candidate: &str) -> bool {
    let lowered = candidate.to_lowercase();
    if DENYLIST.iter().any(|token| lowered.contains(token)) {
        return false;
    }

    // A real hostname has at least one dot and no templating syntax
    if !candidate.contains('.')
        || candidate.contains('{')
        || candidate.contains('}')
        || candidate.starts_with("{{")
    {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_real_domains() {
        assert!(is_valid_fqdn("app.mycompany.io"));
        assert!(is_valid_fqdn("staging.app1.io"));
        assert!(is_valid_fqdn("auth.corp.example")); // "example" alone is not a token
    }

    #[test]
    fn test_rejects_denylisted_domains() {
        assert!(!is_valid_fqdn("foo.example.com"));
        assert!(!is_valid_fqdn("chart-example.local"));
        assert!(!is_valid_fqdn("my.test.com"));
        assert!(!is_valid_fqdn("registry.quay.io"));
        assert!(!is_valid_fqdn("login.microsoftonline.com"));
    }

    #[test]
    fn test_denylist_is_case_insensitive() {
        assert!(!is_valid_fqdn("foo.EXAMPLE.com"));
        assert!(!is_valid_fqdn("raw.GitHub.com"));
    }

    #[test]
    fn test_rejects_by_substring_containment() {
        // ".local" disqualifies any containing hostname
        assert!(!is_valid_fqdn("service.internal.local"));
        assert!(!is_valid_fqdn("kustomize.toolkit.fluxcd.kubernetes.io"));
    }

    #[test]
    fn test_rejects_templating_expressions() {
        assert!(!is_valid_fqdn("{{ .Values.host }}"));
        assert!(!is_valid_fqdn("{{ .Values.domain }}.io"));
        assert!(!is_valid_fqdn("host-{placeholder}.io"));
    }

    #[test]
    fn test_rejects_dotless_strings() {
        assert!(!is_valid_fqdn("just-a-hostname"));
        assert!(!is_valid_fqdn(""));
    }
}
