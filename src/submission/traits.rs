//! Trait abstraction for entry submission to enable mocking in tests

use crate::state::GiveawayEntry;
use async_trait::async_trait;
use thiserror::Error;

/// A submission that did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("entry submission failed: {message}")]
pub struct SubmitError {
    message: String,
}

impl SubmitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[cfg(test)]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Something that accepts a validated entry
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntrySubmitter: Send + Sync {
    /// Deliver one entry; resolves when the submission window ends
    async fn submit(&self, entry: &GiveawayEntry) -> Result<(), SubmitError>;
}
