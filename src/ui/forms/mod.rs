//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `entry_form`: The editable giveaway form
//! - `thank_you`: Confirmation after submission

mod entry_form;
mod field_renderer;
mod thank_you;

pub use entry_form::draw_entry_form;
pub use thank_you::draw_thank_you;
