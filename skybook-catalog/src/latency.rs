use async_trait::async_trait;
use std::time::Duration;

/// Stand-in for network latency. There is no real network; the pause here
/// is the only suspension point in a search.
#[async_trait]
pub trait LatencySimulator: Send + Sync {
    async fn simulate(&self);
}

/// Fixed pause on the tokio timer
pub struct FixedLatency(pub Duration);

#[async_trait]
impl LatencySimulator for FixedLatency {
    async fn simulate(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// No pause. Keeps tests deterministic.
pub struct NoLatency;

#[async_trait]
impl LatencySimulator for NoLatency {
    async fn simulate(&self) {}
}
