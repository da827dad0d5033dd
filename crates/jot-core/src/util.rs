//! Small helpers shared across modules.

/// Trim optional text, mapping empty results to `None`.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let trimmed = value?.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Whether a value looks like an http(s) URL.
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Current Unix timestamp in milliseconds.
pub fn unix_timestamp_now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
