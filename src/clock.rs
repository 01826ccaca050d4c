use std::time::Duration;

use async_trait::async_trait;

/// Timer used for simulated latency and deferred prompts.
#[async_trait]
pub trait Clock: Send + Sync + std::fmt::Debug {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
