//! Submitter that simulates network latency and logs the entry

use super::clock::{Clock, TokioClock};
use super::traits::{EntrySubmitter, SubmitError};
use crate::state::GiveawayEntry;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

/// Default length of the submission window
pub const DEFAULT_SUBMISSION_DELAY: Duration = Duration::from_millis(1500);

/// Waits out the submission window, then writes the entry to the log.
/// Never fails.
pub struct SimulatedSubmitter {
    clock: Arc<dyn Clock>,
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(clock: Arc<dyn Clock>, delay: Duration) -> Self {
        Self { clock, delay }
    }

    #[cfg(test)]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Arc::new(TokioClock), DEFAULT_SUBMISSION_DELAY)
    }
}

#[async_trait]
impl EntrySubmitter for SimulatedSubmitter {
    async fn submit(&self, entry: &GiveawayEntry) -> Result<(), SubmitError> {
        self.clock.sleep(self.delay).await;

        tracing::info!(
            email = %entry.email,
            community_name = %entry.community_name,
            product = %entry.product,
            reason = %entry.reason,
            received_at = %Utc::now().to_rfc3339(),
            "Giveaway entry received"
        );

        Ok(())
    }
}
