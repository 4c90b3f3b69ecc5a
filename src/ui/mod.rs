//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Widest the form card is allowed to grow
const CARD_MAX_WIDTH: u16 = 72;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());

    layout::draw_header(frame, areas.header, &app.title);

    // Exactly one of the two cards is visible
    let card = layout::centered_card(areas.body, CARD_MAX_WIDTH);
    if app.form.is_submitted() {
        forms::draw_thank_you(frame, card);
    } else {
        forms::draw_entry_form(frame, card, app);
    }

    layout::draw_footer(frame, areas.footer, &app.organizer);
    layout::draw_status_bar(frame, areas.status, app);
}
