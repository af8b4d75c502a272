use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::SIDEBAR_WIDTH;

pub struct AppLayout {
    pub sidebar: Rect,
    pub main: Rect,
    pub footer: Rect,
}

/// Splits the frame into sidebar, main panel, and a one-row footer.
#[must_use]
pub fn app_layout(area: Rect, with_sidebar: bool) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let sidebar_width = if with_sidebar { SIDEBAR_WIDTH } else { 0 };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(1)])
        .split(rows[0]);

    AppLayout {
        sidebar: columns[0],
        main: columns[1],
        footer: rows[1],
    }
}

/// Inner area with two columns of horizontal padding.
#[must_use]
pub fn padded(inner: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(inner)[1]
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 50, area);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 20);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 10);
    }

    #[test]
    fn sidebar_can_be_hidden() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = app_layout(area, false);
        assert_eq!(layout.sidebar.width, 0);
        assert_eq!(layout.main.width, 80);
        assert_eq!(layout.footer.height, 1);
    }
}
