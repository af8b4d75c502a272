use chrono::{NaiveDate, NaiveDateTime};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::{GLYPH_BAR_EMPTY, GLYPH_BAR_FULL};

/// Truncates to `max_width` terminal columns, ending with `…` when cut.
#[must_use]
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[must_use]
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = usize::from(percent.min(100)) * width / 100;
    format!(
        "{}{}",
        GLYPH_BAR_FULL.repeat(filled),
        GLYPH_BAR_EMPTY.repeat(width - filled)
    )
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

#[must_use]
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%b %d, %H:%M").to_string()
}

/// Collects a rendered line back into plain text.
#[must_use]
pub fn line_text(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
