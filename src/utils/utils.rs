use chrono::{DateTime, Utc};

// Format an optional date for display
pub fn format_time(time: Option<&DateTime<Utc>>) -> String {
    match time {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "disabled".to_string(),
    }
}

// Utility to truncate long strings for display
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len).collect();
        format!("{}...", head)
    }
}
