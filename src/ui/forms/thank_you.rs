//! Confirmation card shown after a successful submission

use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const BUTTON_WIDTH: u16 = 26;

/// Draw the thank-you card
pub fn draw_thank_you(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Padding
            Constraint::Length(2),             // Heading
            Constraint::Length(3),             // Message
            Constraint::Length(BUTTON_HEIGHT), // Button
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Thank You!",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[1]);

    let message = Paragraph::new("Your entry has been received. We'll be in touch soon!")
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[2]);

    let button_area = Rect {
        x: chunks[3].x + chunks[3].width.saturating_sub(BUTTON_WIDTH) / 2,
        width: chunks[3].width.min(BUTTON_WIDTH),
        ..chunks[3]
    };
    render_button(
        frame,
        button_area,
        "Submit Another Entry",
        true,
        true,
        Color::Blue,
    );
}
