//! Layout components (header, footer, status bar)

use crate::app::App;
use crate::state::FormPhase;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions, top to bottom
pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub status: Rect,
}

/// Create the main layout
pub fn create_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Card
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
        status: chunks[3],
    }
}

/// Horizontally center a card no wider than `max_width`
pub fn centered_card(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Draw the giveaway title
pub fn draw_header(frame: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

/// Draw the copyright footer
pub fn draw_footer(frame: &mut Frame, area: Rect, organizer: &str) {
    let footer = Paragraph::new(format!("© {organizer}. All Rights Reserved"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));

    frame.render_widget(footer, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let phase = app.form.phase();

    let (marker, color) = match phase {
        FormPhase::Editing => (" ● ", Color::Cyan),
        FormPhase::Submitting => (" ◌ ", Color::Yellow),
        FormPhase::Submitted => (" ✔ ", Color::Green),
    };

    let spans = vec![
        Span::styled(marker, Style::default().fg(color)),
        Span::styled(get_view_hints(phase), Style::default().fg(Color::Gray)),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current phase
fn get_view_hints(phase: FormPhase) -> String {
    match phase {
        FormPhase::Editing => format!(
            "Tab:next  ←/→:product  {}:submit  Esc:quit",
            crate::platform::SUBMIT_SHORTCUT
        ),
        FormPhase::Submitting => "Submitting entry...".to_string(),
        FormPhase::Submitted => "Enter:submit another entry  q:quit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_footer_and_status() {
        let layout = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.body.height, 19);
    }

    #[test]
    fn test_centered_card_is_capped_and_centered() {
        let card = centered_card(Rect::new(0, 0, 100, 30), 72);
        assert_eq!(card.width, 72);
        assert_eq!(card.x, 14);
    }

    #[test]
    fn test_centered_card_narrow_area_uses_full_width() {
        let card = centered_card(Rect::new(2, 0, 40, 30), 72);
        assert_eq!(card.width, 40);
        assert_eq!(card.x, 2);
    }

    #[test]
    fn test_hints_mention_submit_shortcut() {
        assert!(get_view_hints(FormPhase::Editing).contains("Ctrl+S"));
        assert!(get_view_hints(FormPhase::Submitted).contains("submit another"));
    }
}
