use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format an API date string for display as `M/D/YYYY`.
///
/// The API mostly sends plain `YYYY-MM-DD`, occasionally a full timestamp.
/// Anything unparsable renders as `Invalid Date`.
pub fn format_display_date(raw: &str) -> String {
    let raw = raw.trim();

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        });

    match date {
        Some(d) => d.format("%-m/%-d/%Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Greedy word wrap for card bodies. Words longer than `width` get their own line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
