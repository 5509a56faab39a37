use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Append a unit to numeric values; placeholders and text fallbacks stay bare.
pub fn with_unit(value: &str, unit: &str, numeric: bool) -> String {
    if numeric && !unit.is_empty() {
        format!("{} {}", value, unit)
    } else {
        value.to_string()
    }
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// Cut text to fit `width` terminal columns, ending in `…` when shortened.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Mask a secret for display, keeping its length visible.
pub fn mask(secret: &str) -> String {
    "•".repeat(secret.chars().count())
}
