use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;

use crate::constants::{DOMAIN_REGEX, META_HTTP_EQUIV_SELECTOR};

const CSP_HTTP_EQUIV: &str = "Content-Security-Policy";

/// Pulls domain-like strings out of CSP declarations.
#[derive(Debug, Clone)]
pub struct CspParser {
    domain_regex: Regex,
}

impl CspParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            domain_regex: Regex::new(DOMAIN_REGEX)?,
        })
    }

    /// Domains from the CSP response headers followed by the ones declared in
    /// `<meta http-equiv="Content-Security-Policy">` tags, without duplicates.
    pub fn extract_domains<'a, I>(&self, headers: I, body: &str) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut found = Vec::new();
        for header in headers {
            found.extend(self.parse_csp(header));
        }
        found.extend(self.parse_body_csp(body));
        dedup_ordered(found)
    }

    /// Domains found in a raw policy string.
    pub fn parse_csp(&self, policy: &str) -> Vec<String> {
        dedup_ordered(
            self.domain_regex
                .find_iter(policy)
                .map(|m| m.as_str().to_string()),
        )
    }

    /// Domains found in every CSP meta tag of an HTML document.
    pub fn parse_body_csp(&self, html: &str) -> Vec<String> {
        if html.trim().is_empty() {
            return Vec::new();
        }

        let Ok(selector) = Selector::parse(META_HTTP_EQUIV_SELECTOR) else {
            return Vec::new();
        };

        let document = Html::parse_document(html);
        let found = document
            .select(&selector)
            .filter(|meta| {
                meta.value()
                    .attr("http-equiv")
                    .is_some_and(|v| v.trim().eq_ignore_ascii_case(CSP_HTTP_EQUIV))
            })
            .filter_map(|meta| meta.value().attr("content"))
            .flat_map(|content| self.parse_csp(content))
            .collect::<Vec<_>>();

        dedup_ordered(found)
    }
}

fn dedup_ordered(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INSTAGRAM_CSP: &str = "report-uri https://www.instagram.com/security/csp_report/; \
        default-src 'self' https://www.instagram.com; \
        img-src data: blob: https://*.fbcdn.net https://*.instagram.com https://*.cdninstagram.com https://*.facebook.com https://*.fbsbx.com https://*.giphy.com; \
        font-src data: https://*.fbcdn.net https://*.instagram.com https://*.cdninstagram.com; \
        media-src 'self' blob: https://www.instagram.com https://*.cdninstagram.com https://*.fbcdn.net; \
        manifest-src 'self' https://www.instagram.com; \
        script-src 'self' https://instagram.com https://www.instagram.com https://*.www.instagram.com https://*.cdninstagram.com wss://www.instagram.com https://*.facebook.com https://*.fbcdn.net https://*.facebook.net 'unsafe-inline' 'unsafe-eval' blob:; \
        style-src 'self' https://*.www.instagram.com https://www.instagram.com 'unsafe-inline'; \
        connect-src 'self' https://instagram.com https://www.instagram.com https://*.www.instagram.com https://graph.instagram.com https://*.graph.instagram.com https://i.instagram.com/graphql_www https://graphql.instagram.com https://*.cdninstagram.com https://api.instagram.com https://i.instagram.com https://*.i.instagram.com https://*.od.instagram.com wss://www.instagram.com wss://edge-chat.instagram.com https://*.facebook.com https://*.fbcdn.net https://*.facebook.net chrome-extension://boadgeojelhgndaghljhdicfkmllpafd blob:; \
        worker-src 'self' blob: https://www.instagram.com; \
        frame-src 'self' https://instagram.com https://www.instagram.com https://*.instagram.com https://staticxx.facebook.com https://www.facebook.com https://web.facebook.com https://connect.facebook.net https://m.facebook.com https://*.fbsbx.com; \
        object-src 'none'; \
        upgrade-insecure-requests";

    const INSTAGRAM_DOMAINS: [&str; 23] = [
        "api.instagram.com",
        "*.cdninstagram.com",
        "connect.facebook.net",
        "edge-chat.instagram.com",
        "*.facebook.com",
        "*.facebook.net",
        "*.fbcdn.net",
        "*.fbsbx.com",
        "*.giphy.com",
        "*.graph.instagram.com",
        "graph.instagram.com",
        "graphql.instagram.com",
        "*.i.instagram.com",
        "i.instagram.com",
        "*.instagram.com",
        "instagram.com",
        "m.facebook.com",
        "*.od.instagram.com",
        "staticxx.facebook.com",
        "web.facebook.com",
        "www.facebook.com",
        "*.www.instagram.com",
        "www.instagram.com",
    ];

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    fn expected() -> Vec<String> {
        sorted(INSTAGRAM_DOMAINS.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_parse_csp_empty() {
        let parser = CspParser::new().unwrap();
        assert!(parser.parse_csp("").is_empty());
    }

    #[test]
    fn test_parse_csp_header() {
        let parser = CspParser::new().unwrap();
        assert_eq!(sorted(parser.parse_csp(INSTAGRAM_CSP)), expected());
    }

    #[test]
    fn test_parse_body_csp_empty() {
        let parser = CspParser::new().unwrap();
        assert!(parser.parse_body_csp("").is_empty());
    }

    #[test]
    fn test_parse_body_csp_meta_tag() {
        let parser = CspParser::new().unwrap();
        let html = format!(
            r#"<html><head><meta http-equiv="content-security-policy" content="{}"/></head><body></body></html>"#,
            INSTAGRAM_CSP
        );
        assert_eq!(sorted(parser.parse_body_csp(&html)), expected());
    }

    #[test]
    fn test_parse_body_ignores_other_meta_tags() {
        let parser = CspParser::new().unwrap();
        let html = r#"<html><head>
            <meta http-equiv="refresh" content="5; url=https://redirect.example.com">
            <meta name="description" content="cdn.example.com">
            </head></html>"#;
        assert!(parser.parse_body_csp(html).is_empty());
    }

    #[test]
    fn test_extract_domains_merges_header_and_body() {
        let parser = CspParser::new().unwrap();
        let html = r#"<html><head>
            <meta http-equiv="Content-Security-Policy" content="script-src https://cdn.example.com https://api.example.org">
            </head></html>"#;
        let domains = parser.extract_domains(["default-src 'self' https://api.example.org"], html);
        assert_eq!(domains, vec!["api.example.org", "cdn.example.com"]);
    }
}
