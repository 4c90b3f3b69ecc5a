//! Inline error banner

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows needed to show `message` inside a banner `width` columns wide
pub fn banner_height(message: &str, width: u16) -> u16 {
    // borders take two columns and two rows
    let inner_width = width.saturating_sub(2).max(1) as usize;
    wrap_text(message, inner_width).len() as u16 + 2
}

/// Render a red-bordered banner holding one error message
pub fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let lines: Vec<Line> = wrap_text(message, inner_width)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Red))))
        .collect();

    let block = Block::default()
        .title(Span::styled(
            " Error ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.len() + word.len() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text_is_one_line() {
        assert_eq!(wrap_text("Please select a product/service", 60).len(), 1);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap_text("Please provide a reason for why you should win", 20);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.len() <= 20));
        assert_eq!(lines.join(" "), "Please provide a reason for why you should win");
    }

    #[test]
    fn test_wrap_empty_text_keeps_one_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_banner_height_counts_borders() {
        assert_eq!(banner_height("Please enter your email address", 70), 3);
        assert!(banner_height("Please enter your email address", 12) > 3);
    }
}
