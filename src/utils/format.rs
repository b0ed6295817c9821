/// Maximum characters of a key or code shown in listing views
const DISPLAY_CREDENTIAL_LEN: usize = 20;

/// Human-readable remaining time for a wire expiration duration.
///
/// Zero and negative durations render as "never expires", since zero is the
/// wire encoding for no limit. Other durations render whole hours and
/// remaining minutes, with both components always present.
pub fn describe_remaining(seconds: i64) -> String {
    if seconds <= 0 {
        return "never expires".to_string();
    }
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{} hour(s) {} minute(s)", hours, minutes)
}

/// Shorten a credential string for listing views, adding ellipsis if needed
pub fn truncate_credential(s: &str) -> String {
    if s.chars().count() <= DISPLAY_CREDENTIAL_LEN {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(DISPLAY_CREDENTIAL_LEN).collect();
        format!("{}...", truncated)
    }
}
