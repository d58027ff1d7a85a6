// ABOUTME: Shared color palette and block helpers for every deckmate panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders},
};

// Premium color palette (TUI Style Guide)
pub const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
pub const GOLD: Color = Color::Rgb(255, 215, 0);
pub const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
pub const WARNING_ORANGE: Color = Color::Rgb(255, 165, 0);
pub const DARK_BG: Color = Color::Rgb(25, 25, 35);
pub const PANEL_BG: Color = Color::Rgb(30, 30, 40);
pub const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
pub const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
pub const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
pub const ERROR_RED: Color = Color::Rgb(220, 80, 80);

/// Rounded panel with a gold title. Focused panels get a blue border.
pub fn panel(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { CORNFLOWER_BLUE } else { SUBDUED_BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(PANEL_BG))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
}

/// Style for a list row, highlighted when under the cursor
pub fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(SOFT_WHITE)
    }
}

/// Confidence badge color: green at 90+, gold at 80+, orange below
pub fn confidence_color(confidence: u8) -> Color {
    match confidence {
        90..=u8::MAX => SELECTION_GREEN,
        80..=89 => GOLD,
        _ => WARNING_ORANGE,
    }
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    use ratatui::layout::{Constraint, Direction, Layout};

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_color_bands() {
        assert_eq!(confidence_color(95), SELECTION_GREEN);
        assert_eq!(confidence_color(85), GOLD);
        assert_eq!(confidence_color(79), WARNING_ORANGE);
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
    }
}
