//! Entry submission
//!
//! There is no backend: the submitter waits out a fixed latency on an
//! injectable clock and records the entry in the log.

mod clock;
mod simulated;
mod traits;

pub use clock::TokioClock;
pub use simulated::{SimulatedSubmitter, DEFAULT_SUBMISSION_DELAY};
pub use traits::{EntrySubmitter, SubmitError};

#[cfg(test)]
pub use clock::ImmediateClock;
#[cfg(test)]
pub use traits::MockEntrySubmitter;
