use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::clock::Clock;
use crate::error::Result;
use crate::mock::{Generate, MockDataGenerator};
use crate::types::{Batch, Record};

/// Where list pages come from.
#[async_trait]
pub trait RecordSource<T: Record>: Send + Sync + std::fmt::Debug {
    async fn fetch(&self, start: usize, count: usize) -> Result<Batch<T>>;

    /// A page that can be produced without waiting, if the source has one.
    fn ready_page(&self, _start: usize, _count: usize) -> Option<Batch<T>> {
        None
    }
}

/// Generates pages locally after a simulated network delay.
pub struct MockSource<T> {
    generator: Arc<Mutex<MockDataGenerator>>,
    clock: Arc<dyn Clock>,
    latency: Duration,
    _kind: PhantomData<fn() -> T>,
}

impl<T> std::fmt::Debug for MockSource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSource")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

impl<T> MockSource<T> {
    pub fn new(
        generator: Arc<Mutex<MockDataGenerator>>,
        clock: Arc<dyn Clock>,
        latency: Duration,
    ) -> Self {
        Self {
            generator,
            clock,
            latency,
            _kind: PhantomData,
        }
    }

    /// Synchronous page, used for the initial batch on view mount.
    pub fn generate_now(&self, start: usize, count: usize) -> Vec<T>
    where
        T: Generate,
    {
        let mut generator = self
            .generator
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        T::generate(&mut generator, count, start)
    }
}

#[async_trait]
impl<T: Generate> RecordSource<T> for MockSource<T> {
    async fn fetch(&self, start: usize, count: usize) -> Result<Batch<T>> {
        self.clock.sleep(self.latency).await;
        Ok(Batch {
            items: self.generate_now(start, count),
            end_of_data: false,
        })
    }

    fn ready_page(&self, start: usize, count: usize) -> Option<Batch<T>> {
        Some(Batch {
            items: self.generate_now(start, count),
            end_of_data: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TokioClock;
    use crate::types::{Campaign, Lead};

    fn source<T>() -> MockSource<T> {
        MockSource::new(
            Arc::new(Mutex::new(MockDataGenerator::seeded(1))),
            Arc::new(TokioClock),
            Duration::from_millis(500),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_waits_for_latency() {
        let before = tokio::time::Instant::now();
        let batch: Batch<Lead> = source().fetch(20, 20).await.unwrap();
        assert!(before.elapsed() >= Duration::from_millis(500));
        assert_eq!(batch.items.len(), 20);
        assert_eq!(batch.items[0].id, "lead-20");
        assert!(!batch.end_of_data);
    }

    #[test]
    fn ready_page_skips_latency() {
        let batch: Batch<Campaign> = source().ready_page(0, 15).unwrap();
        assert_eq!(batch.items.len(), 15);
        assert_eq!(batch.items[14].id, "campaign-14");
    }
}
