#![cfg(feature = "std")]

use tokio::time::Duration;

/// Artificial thinking time before the CPU's shot lands.
///
/// Pure presentation: game state never depends on how long this takes.
#[async_trait::async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
pub struct TokioPacer;

#[async_trait::async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Returns immediately. For headless runs and tests.
pub struct NoDelay;

#[async_trait::async_trait]
impl Pacer for NoDelay {
    async fn pause(&self, _duration: Duration) {}
}
