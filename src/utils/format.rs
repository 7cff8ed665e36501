//! Formatting utilities for display values.

/// Format a byte count for display (e.g., "1.2K", "3.4M").
pub fn format_size(bytes: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000_000_000, "G"), (1_000_000, "M"), (1_000, "K")];

    UNITS
        .iter()
        .find(|(scale, _)| bytes >= *scale)
        .map(|(scale, unit)| format!("{:.1}{}", bytes as f64 / *scale as f64, unit))
        .unwrap_or_else(|| format!("{}B", bytes))
}

/// Label for the uploading placeholder ("Uploading files... (1/3)").
pub fn format_upload_progress(completed: usize, total: usize) -> String {
    if total > 1 {
        format!("Uploading files... ({}/{})", completed, total)
    } else {
        "Uploading files...".to_string()
    }
}
