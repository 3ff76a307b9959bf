/// Check whether a discovered domain belongs to one of the allowed base
/// domains: either the domain itself or a subdomain of it. Labels are compared
/// from the right, so `evilgoogle.com` never matches `google.com`.
pub fn domain_ok(input: &str, domains: &[String]) -> bool {
    if input.is_empty() || domains.is_empty() {
        return false;
    }

    let labels: Vec<&str> = input.split('.').collect();
    domains.iter().any(|domain| {
        let base: Vec<&str> = domain.split('.').collect();
        labels.len() >= base.len()
            && labels
                .iter()
                .rev()
                .zip(base.iter().rev())
                .all(|(l, b)| !b.is_empty() && l.eq_ignore_ascii_case(b))
    })
}

/// Apply the allow-list to a batch of discovered domains: entries are trimmed,
/// empty ones dropped, and when `domains` is non-empty only matching ones kept.
pub fn filter_domains(found: Vec<String>, domains: &[String]) -> Vec<String> {
    found
        .into_iter()
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .filter(|d| domains.is_empty() || domain_ok(d, domains))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(domains: &[&str]) -> Vec<String> {
        domains.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_empty() {
        assert!(!domain_ok("", &[]));
        assert!(!domain_ok("", &list(&["ciao.com", "google.com"])));
        assert!(!domain_ok("google.com", &[]));
    }

    #[test]
    fn test_exact_match() {
        assert!(domain_ok("google.com", &list(&["ciao.com", "google.com"])));
        assert!(domain_ok("Google.COM", &list(&["google.com"])));
    }

    #[test]
    fn test_subdomain() {
        assert!(domain_ok("dc.google.com", &list(&["ciao.com", "google.com"])));
        assert!(domain_ok("dc.*.google.com", &list(&["ciao.com", "google.com"])));
        assert!(domain_ok("*.google.com", &list(&["google.com"])));
    }

    #[test]
    fn test_look_alike_is_rejected() {
        assert!(!domain_ok("evilgoogle.com", &list(&["google.com"])));
        assert!(!domain_ok("dc.*.google.com", &list(&["ciao.com", "goooooooogle.com"])));
        assert!(!domain_ok("google.com.evil.net", &list(&["google.com"])));
        assert!(!domain_ok("com", &list(&["google.com"])));
    }

    #[test]
    fn test_boundary_cases() {
        assert!(!domain_ok("google.com", &list(&[".com"])));
        assert!(domain_ok("a.b", &list(&["b"])));
        assert!(!domain_ok("ab", &list(&["b"])));
    }

    #[test]
    fn test_filter_domains() {
        let found = list(&[" cdn.google.com ", "", "evilgoogle.com", "google.com", "  "]);
        assert_eq!(
            filter_domains(found.clone(), &list(&["google.com"])),
            vec!["cdn.google.com", "google.com"]
        );
        assert_eq!(
            filter_domains(found, &[]),
            vec!["cdn.google.com", "evilgoogle.com", "google.com"]
        );
    }
}
