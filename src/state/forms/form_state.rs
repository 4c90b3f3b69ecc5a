//! Entry form state and its transitions

use super::field::{FieldId, FieldKind, FormField};
use super::validation::{validate_entry, FormError};
use crate::state::{GiveawayEntry, ProductCatalog};
use crate::submission::SubmitError;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Inputs are editable
    #[default]
    Editing,
    /// A validated entry is in flight; inputs are locked
    Submitting,
    /// The thank-you view is shown until the user resets
    Submitted,
}

/// Inputs to the form's transition function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldChanged { field: FieldId, value: String },
    Submit,
    SubmissionSettled(Result<(), SubmitError>),
    Reset,
}

/// Work the caller must perform after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    /// Hand this entry to the submitter and report back with
    /// [`FormEvent::SubmissionSettled`]
    StartSubmission(GiveawayEntry),
}

/// The giveaway entry form.
///
/// All state changes go through [`EntryForm::apply`], which does no I/O
/// and never blocks.
#[derive(Debug, Clone)]
pub struct EntryForm {
    pub email: FormField,
    pub community_name: FormField,
    pub product: FormField,
    pub reason: FormField,
    /// Focused row: 0-3 are fields, 4 is the submit button
    pub active_field_index: usize,
    phase: FormPhase,
    form_error: Option<FormError>,
    catalog: ProductCatalog,
}

impl EntryForm {
    /// Index of the submit button row
    pub const SUBMIT_ROW: usize = 4;

    pub fn new(catalog: ProductCatalog) -> Self {
        Self {
            email: FormField::new(
                FieldId::Email,
                "Active Email Address",
                "your@email.com",
                FieldKind::Text,
            )
            .with_help("We'll never share your email with anyone else."),
            community_name: FormField::new(
                FieldId::CommunityName,
                "PHCorner Name",
                "Your PHCorner Username",
                FieldKind::Text,
            ),
            product: FormField::new(
                FieldId::Product,
                "Chosen Product/Service",
                "Select a product/service",
                FieldKind::Select,
            ),
            reason: FormField::new(
                FieldId::Reason,
                "Reason",
                "Tell us why you should win this product/service...",
                FieldKind::MultiLine,
            )
            .with_help("Be creative and honest with your reason for a better chance to win!"),
            active_field_index: 0,
            phase: FormPhase::Editing,
            form_error: None,
            catalog,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// True only inside the submission window
    pub fn is_loading(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    pub fn form_error(&self) -> Option<FormError> {
        self.form_error
    }

    #[cfg(test)]
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Returns true if the submit button row is focused
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    /// The focused field, if focus is on a field rather than the button
    pub fn active_form_field(&self) -> Option<&FormField> {
        self.get_field(self.active_field_index)
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Email => &self.email,
            FieldId::CommunityName => &self.community_name,
            FieldId::Product => &self.product,
            FieldId::Reason => &self.reason,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Email => &mut self.email,
            FieldId::CommunityName => &mut self.community_name,
            FieldId::Product => &mut self.product,
            FieldId::Reason => &mut self.reason,
        }
    }

    /// Snapshot of the current values
    pub fn entry(&self) -> GiveawayEntry {
        GiveawayEntry::new(
            self.email.value(),
            self.community_name.value(),
            self.product.value(),
            self.reason.value(),
        )
    }

    /// Event that moves the product selection one step
    pub fn cycle_product(&self, forward: bool) -> FormEvent {
        let current = self.product.value();
        let value = if forward {
            self.catalog.next_selection(current)
        } else {
            self.catalog.prev_selection(current)
        };
        FormEvent::FieldChanged {
            field: FieldId::Product,
            value,
        }
    }

    /// Apply one event and return the effect the caller must run, if any
    pub fn apply(&mut self, event: FormEvent) -> Option<FormEffect> {
        match event {
            FormEvent::FieldChanged { field, value } => {
                self.change_field(field, value);
                None
            }
            FormEvent::Submit => self.submit(),
            FormEvent::SubmissionSettled(result) => {
                self.settle(result);
                None
            }
            FormEvent::Reset => {
                self.reset();
                None
            }
        }
    }

    fn change_field(&mut self, field: FieldId, value: String) {
        if self.phase != FormPhase::Editing {
            tracing::debug!(?field, phase = ?self.phase, "Ignoring field change");
            return;
        }
        self.field_mut(field).set_value(value);
    }

    fn submit(&mut self) -> Option<FormEffect> {
        if self.phase != FormPhase::Editing {
            tracing::debug!(phase = ?self.phase, "Ignoring submit outside editing");
            return None;
        }

        let entry = self.entry();
        match validate_entry(&entry, &self.catalog) {
            Err(err) => {
                tracing::debug!(error = %err, "Entry rejected by validation");
                self.form_error = Some(err);
                None
            }
            Ok(()) => {
                self.form_error = None;
                self.phase = FormPhase::Submitting;
                Some(FormEffect::StartSubmission(entry))
            }
        }
    }

    fn settle(&mut self, result: Result<(), SubmitError>) {
        if self.phase != FormPhase::Submitting {
            tracing::debug!(phase = ?self.phase, "Ignoring stale submission result");
            return;
        }

        match result {
            Ok(()) => {
                self.phase = FormPhase::Submitted;
            }
            Err(err) => {
                tracing::error!(error = %err, "Entry submission failed");
                self.form_error = Some(err.into());
                self.phase = FormPhase::Editing;
            }
        }
    }

    fn reset(&mut self) {
        if self.phase != FormPhase::Submitted {
            tracing::debug!(phase = ?self.phase, "Ignoring reset outside submitted view");
            return;
        }
        for id in FieldId::ALL {
            self.field_mut(id).clear();
        }
        self.form_error = None;
        self.active_field_index = 0;
        self.phase = FormPhase::Editing;
    }
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new(ProductCatalog::default())
    }
}

impl Form for EntryForm {
    fn field_count(&self) -> usize {
        5 // email, community name, product, reason, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        // Index 4 is the submit button, no FormField for it
        FieldId::from_index(index).map(|id| self.field(id))
    }
}
