//! Clock abstraction so the submission delay can be skipped in tests

use async_trait::async_trait;
use std::time::Duration;

/// Source of asynchronous delays
#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real time, backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Resolves every sleep at once and remembers what was asked for
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ImmediateClock {
    requested: std::sync::Mutex<Vec<Duration>>,
}

#[cfg(test)]
impl ImmediateClock {
    pub fn requested(&self) -> Vec<Duration> {
        self.requested
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[async_trait]
impl Clock for ImmediateClock {
    async fn sleep(&self, duration: Duration) {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(duration);
        }
    }
}
