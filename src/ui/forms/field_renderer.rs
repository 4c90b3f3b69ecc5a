//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    is_disabled: bool,
) {
    let is_active = is_active && !is_disabled;

    let value_style = if is_disabled {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active && !field.is_select() {
        "▌"
    } else {
        ""
    };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let style = if field.is_empty() {
        placeholder_style
    } else {
        value_style
    };

    let content = if field.is_select() {
        let mut spans = vec![Span::styled(field.display_value(), style)];
        if is_active {
            spans.insert(0, Span::styled("◀ ", Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(Line::from(spans))
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = field
            .display_value()
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.display_value(), style),
            cursor_span,
        ]))
    };

    let title = Line::from(vec![
        Span::raw(format!(" {} ", field.label)),
        Span::styled("*", Style::default().fg(Color::Red)),
        Span::raw(" "),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the dimmed hint line under a field
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(format!(" {text}")).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
