//! Turns raw backend payloads into renderable stats.
//!
//! The backend answers every stat endpoint with one loosely-shaped string: a bare
//! number, a sentence, a JSON-quoted sentence, or a `label: value, label: value`
//! record. Nothing here can fail; anything irregular degrades to a scalar.
//!
//! Structured detection is a heuristic, not a grammar: text containing both a `,`
//! and a `:` is split into records. Free text that happens to contain both (for
//! example `"Note: slow week, sorry"`) is split too. Re-formatting the rendered
//! text of a record list is therefore not guaranteed to round-trip.

use crate::models::{RawStat, FAILED_TEXT, PENDING_TEXT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRecord {
    /// Absent when the segment had no colon; render the value alone.
    pub label: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedStat {
    Scalar(String),
    RecordList(Vec<StatRecord>),
}

impl FormattedStat {
    /// Single-line text form, as shown in plain-text output.
    pub fn rendered_text(&self) -> String {
        match self {
            FormattedStat::Scalar(text) => text.clone(),
            FormattedStat::RecordList(records) => records
                .iter()
                .map(|r| match &r.label {
                    Some(label) => format!("{}: {}", label, r.value),
                    None => r.value.clone(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// The scalar text, or the value of the first record.
    pub fn primary_value(&self) -> &str {
        match self {
            FormattedStat::Scalar(text) => text,
            FormattedStat::RecordList(records) => {
                records.first().map(|r| r.value.as_str()).unwrap_or("")
            }
        }
    }
}

pub fn format(raw: &RawStat) -> FormattedStat {
    match raw {
        RawStat::Pending => FormattedStat::Scalar(PENDING_TEXT.to_string()),
        RawStat::Failed => FormattedStat::Scalar(FAILED_TEXT.to_string()),
        RawStat::Ready(text) => format_text(text),
    }
}

pub fn format_text(text: &str) -> FormattedStat {
    let cleaned = strip_quotes(text);
    if cleaned.contains(',') && cleaned.contains(':') {
        FormattedStat::RecordList(split_records(cleaned))
    } else {
        FormattedStat::Scalar(cleaned.to_string())
    }
}

/// Removes one matching pair of surrounding `"` or `'` characters.
pub fn strip_quotes(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            return &text[1..text.len() - 1];
        }
    }
    text
}

fn split_records(cleaned: &str) -> Vec<StatRecord> {
    cleaned
        .split(',')
        .map(str::trim)
        .map(|segment| match segment.split_once(':') {
            Some((label, value)) => StatRecord {
                label: Some(label.trim().to_string()),
                value: value.trim().to_string(),
            },
            None => StatRecord {
                label: None,
                value: segment.to_string(),
            },
        })
        .collect()
}

/// Display text for a numeric stat, rounded to one decimal place.
///
/// Falls back to the cleaned text when the payload is not a number.
pub fn format_numeric(raw: &RawStat) -> String {
    let formatted = format(raw);
    let RawStat::Ready(_) = raw else {
        return formatted.primary_value().to_string();
    };

    match parse_number(formatted.primary_value()) {
        // `{:.1}` alone rounds binary ties to even (104.25 -> 104.2).
        Some(value) => format!("{:.1}", (value * 10.0).round() / 10.0),
        None => {
            log::debug!(
                "numeric stat is not a number, showing as text: {:?}",
                formatted.primary_value()
            );
            formatted.rendered_text()
        }
    }
}

/// The number carried by a ready payload, if it has one.
pub fn parse_numeric(raw: &RawStat) -> Option<f64> {
    match raw {
        RawStat::Ready(text) => parse_number(format_text(text).primary_value()),
        _ => None,
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
