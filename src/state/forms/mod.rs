//! Form domain layer
//!
//! Field model, validation pass and the entry form state machine.

mod field;
mod form_state;
mod validation;

pub use field::{FieldId, FieldKind, FormField};
pub use form_state::{EntryForm, Form, FormEffect, FormEvent, FormPhase};
#[cfg(test)]
pub use validation::FormError;
