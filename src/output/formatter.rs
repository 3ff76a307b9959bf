use serde::Serialize;

/// One JSON output line
#[derive(Debug, Serialize)]
pub struct JsonData<'a> {
    #[serde(rename = "URL", skip_serializing_if = "is_empty_str")]
    pub url: &'a str,
    #[serde(rename = "CSPResult", skip_serializing_if = "is_empty_list")]
    pub csp_result: &'a [String],
}

fn is_empty_str(s: &&str) -> bool {
    s.is_empty()
}

fn is_empty_list(list: &&[String]) -> bool {
    list.is_empty()
}

/// Serialize the domains found for `url` as a single JSON line (no newline)
pub fn format_json(url: &str, result: &[String]) -> serde_json::Result<String> {
    serde_json::to_string(&JsonData {
        url,
        csp_result: result,
    })
}
