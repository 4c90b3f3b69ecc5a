//! Giveaway entry value

use serde::{Deserialize, Serialize};

/// The four values a participant supplies for one giveaway submission.
///
/// Values are kept exactly as typed. Trimming only happens inside the
/// validation pass, never on the stored strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiveawayEntry {
    pub email: String,
    pub community_name: String,
    /// Selected offering name, empty when nothing is selected
    pub product: String,
    pub reason: String,
}

impl GiveawayEntry {
    pub fn new(
        email: impl Into<String>,
        community_name: impl Into<String>,
        product: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            community_name: community_name.into(),
            product: product.into(),
            reason: reason.into(),
        }
    }

    /// True when no product has been chosen
    pub fn has_no_product(&self) -> bool {
        self.product.is_empty()
    }
}
