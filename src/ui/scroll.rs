use std::ops::Range;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line as RatatuiLine, Span},
    widgets::Paragraph,
};

use super::theme;

/// Screen content plus the lines that must stay visible when it is scrolled.
pub struct ScrollView {
    pub lines: Vec<RatatuiLine<'static>>,
    pub focus: Option<Range<usize>>,
}

impl ScrollView {
    #[must_use]
    pub fn unfocused(lines: Vec<RatatuiLine<'static>>) -> Self {
        Self { lines, focus: None }
    }
}

/// Moves `scroll_offset` the least distance that brings `focus` into the viewport.
pub fn ensure_range_visible(
    scroll_offset: &mut usize,
    focus: &Range<usize>,
    total: usize,
    visible_height: usize,
) {
    if visible_height == 0 || focus.is_empty() {
        clamp_scroll(scroll_offset, total, visible_height);
        return;
    }
    let last = focus.end - 1;
    if last >= *scroll_offset + visible_height {
        *scroll_offset = last + 1 - visible_height;
    }
    if focus.start < *scroll_offset {
        *scroll_offset = focus.start;
    }
    clamp_scroll(scroll_offset, total, visible_height);
}

/// Keeps the offset from scrolling past the last line.
pub fn clamp_scroll(scroll_offset: &mut usize, total: usize, visible_height: usize) {
    let max_scroll = total.saturating_sub(visible_height);
    if *scroll_offset > max_scroll {
        *scroll_offset = max_scroll;
    }
}

/// Draws `lines` from `scroll_offset`, with arrows in the left padding when
/// more content sits above or below.
#[allow(clippy::cast_possible_truncation)]
pub fn render_scrolled(
    f: &mut Frame<'_>,
    lines: Vec<RatatuiLine<'static>>,
    area: Rect,
    scroll_offset: usize,
) {
    let total = lines.len();
    let visible_height = area.height as usize;
    f.render_widget(
        Paragraph::new(lines).scroll((scroll_offset as u16, 0)),
        area,
    );

    let indicator_style = Style::default().fg(theme::TEXT_MUTED);
    let indicator_x = area.x.saturating_sub(2);
    let render_indicator = |f: &mut Frame<'_>, glyph: &'static str, y: u16| {
        let indicator = Paragraph::new(RatatuiLine::from(Span::styled(glyph, indicator_style)));
        f.render_widget(
            indicator,
            Rect {
                x: indicator_x,
                y,
                width: 1,
                height: 1,
            },
        );
    };

    if scroll_offset > 0 {
        render_indicator(f, theme::GLYPH_SCROLL_UP, area.y);
    }
    if total > scroll_offset + visible_height {
        render_indicator(
            f,
            theme::GLYPH_SCROLL_DOWN,
            area.y + area.height.saturating_sub(1),
        );
    }
}
