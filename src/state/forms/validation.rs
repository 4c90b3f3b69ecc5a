//! Entry validation pass and form error taxonomy

use crate::state::{GiveawayEntry, ProductCatalog};
use crate::submission::SubmitError;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Every failure the form can show. `Display` is the user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter your PHCorner name")]
    MissingCommunityName,
    #[error("Please select a product/service")]
    MissingProduct,
    #[error("Please provide a reason for why you should win")]
    MissingReason,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Something went wrong. Please try again.")]
    SubmissionFailed,
}

impl From<SubmitError> for FormError {
    fn from(_: SubmitError) -> Self {
        FormError::SubmissionFailed
    }
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
            .expect("Invalid email regex")
    })
}

/// Check an address against the `local@domain.tld` shape
///
/// # Panics
///
/// Panics if the internal regex is invalid.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Blank means nothing but whitespace, counting the byte-order mark
fn is_blank(value: &str) -> bool {
    value.chars().all(|c| c.is_whitespace() || c == '\u{FEFF}')
}

/// Run the checks in order and stop at the first failure.
///
/// Emptiness checks ignore whitespace; the format check sees the raw
/// value, so surrounding whitespace makes an address invalid.
pub fn validate_entry(entry: &GiveawayEntry, catalog: &ProductCatalog) -> Result<(), FormError> {
    if is_blank(&entry.email) {
        return Err(FormError::MissingEmail);
    }
    if is_blank(&entry.community_name) {
        return Err(FormError::MissingCommunityName);
    }
    if entry.has_no_product() || !catalog.contains(&entry.product) {
        return Err(FormError::MissingProduct);
    }
    if is_blank(&entry.reason) {
        return Err(FormError::MissingReason);
    }
    if !is_valid_email(&entry.email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}
