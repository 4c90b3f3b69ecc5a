//! Entry form rendering

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::state::{FieldId, Form};
use crate::ui::components::{banner_height, render_button, render_error_banner, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

const INTRO: &str =
    "Fill out the form below for a chance to win one of our premium products/services.";

/// Draw the editable form card
pub fn draw_entry_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let is_loading = form.is_loading();

    let block = Block::default()
        .title(" Enter the Giveaway ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_loading {
            Color::DarkGray
        } else {
            Color::Cyan
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let error = form.form_error().map(|e| e.to_string());
    let error_height = error
        .as_deref()
        .map(|msg| banner_height(msg, inner.width.saturating_sub(2)))
        .unwrap_or(0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Intro
            Constraint::Length(error_height),  // Error banner
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // Email help
            Constraint::Length(3),             // PHCorner name
            Constraint::Length(3),             // Product
            Constraint::Min(4),                // Reason
            Constraint::Length(1),             // Reason help
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Progress
        ])
        .horizontal_margin(1)
        .split(inner);

    let intro = Paragraph::new(INTRO)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(intro, chunks[0]);

    if let Some(msg) = error.as_deref() {
        render_error_banner(frame, chunks[1], msg);
    }

    draw_form_field(frame, chunks[2], app, FieldId::Email);
    if let Some(help) = &form.email.help {
        draw_help_text(frame, chunks[3], help);
    }
    draw_form_field(frame, chunks[4], app, FieldId::CommunityName);
    draw_form_field(frame, chunks[5], app, FieldId::Product);
    draw_form_field(frame, chunks[6], app, FieldId::Reason);
    if let Some(help) = &form.reason.help {
        draw_help_text(frame, chunks[7], help);
    }

    let label = if is_loading {
        format!("{} Processing...", app.spinner_frame())
    } else {
        "Submit Entry".to_string()
    };
    render_button(
        frame,
        chunks[8],
        &label,
        form.is_submit_row_active(),
        !is_loading,
        Color::Blue,
    );

    if let Some(progress) = app.submission_progress() {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Blue).bg(Color::Black))
            .ratio(f64::from(progress).clamp(0.0, 1.0))
            .label("");
        frame.render_widget(gauge, chunks[9]);
    }
}

/// Draw one field, locked while a submission is in flight
fn draw_form_field(frame: &mut Frame, area: Rect, app: &App, id: FieldId) {
    let is_active = app.form.active_field() == id.index();
    draw_field(frame, area, app.form.field(id), is_active, app.form.is_loading());
}
