use chrono::DateTime;

/// Upload size label, e.g. `2.41 MB`.
pub fn format_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Human-readable byte count for files on disk: 512 B, 3.4 KB, 1.2 MB.
pub fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

/// `YYYY-MM-DD` part of an upload timestamp; falls back to the raw text.
pub fn short_date(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.date_naive().to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}
