//! Incremental ("infinite scroll") list state.
//!
//! The controller never fetches by itself. [`ListController::maybe_load_more`]
//! hands out a [`LoadRequest`] when a page should be fetched, the caller runs
//! the fetch wherever it likes and reports back through
//! [`ListController::complete`]. Only one request is outstanding at a time and
//! completions carrying a stale load id are dropped, so a fetch that resolves
//! after the view was reset cannot touch the new state.

use std::collections::HashSet;

use crate::error::Result;
use crate::source::RecordSource;
use crate::types::{Batch, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    pub batch_size: usize,
    /// Stop paging once this many records were fetched before a load.
    pub cap: Option<usize>,
    /// Load when at most this many rows remain below the viewport.
    pub threshold: usize,
}

impl ListConfig {
    pub fn leads() -> Self {
        Self {
            batch_size: 20,
            cap: Some(180),
            threshold: 3,
        }
    }

    pub fn campaigns() -> Self {
        Self {
            batch_size: 15,
            cap: Some(135),
            threshold: 3,
        }
    }
}

/// Distance between the viewport and the end of the loaded content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSignal {
    pub remaining: usize,
}

impl ScrollSignal {
    pub fn from_cursor(cursor: usize, len: usize) -> Self {
        Self {
            remaining: len.saturating_sub(cursor + 1),
        }
    }

    /// Always within any threshold.
    pub fn at_end() -> Self {
        Self { remaining: 0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub id: u64,
    pub start: usize,
    pub count: usize,
}

#[derive(Debug)]
pub struct ListController<T> {
    config: ListConfig,
    records: Vec<T>,
    ids: HashSet<String>,
    // Records requested from the source so far, rejected ones included.
    offset: usize,
    in_flight: Option<u64>,
    has_more: bool,
    last_error: Option<String>,
    next_load_id: u64,
}

impl<T: Record> ListController<T> {
    pub fn new(config: ListConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
            ids: HashSet::new(),
            offset: 0,
            in_flight: None,
            has_more: true,
            last_error: None,
            next_load_id: 1,
        }
    }

    pub fn config(&self) -> ListConfig {
        self.config
    }

    /// Replace everything with the first page.
    pub fn initialize(&mut self, first: Vec<T>) {
        self.reset();
        self.offset = first.len();
        self.ingest(first);
        tracing::debug!(kind = T::KIND, len = self.records.len(), "list initialized");
    }

    /// Discard all state and ask for the first page through the normal
    /// load path, for sources that cannot produce one synchronously.
    pub fn request_first_page(&mut self) -> Option<LoadRequest> {
        self.reset();
        self.begin()
    }

    /// Discard all state. An outstanding load is orphaned and its result
    /// will be ignored.
    pub fn reset(&mut self) {
        if let Some(id) = self.in_flight.take() {
            tracing::debug!(kind = T::KIND, load_id = id, "dropping in-flight load");
        }
        self.records.clear();
        self.ids.clear();
        self.offset = 0;
        self.has_more = true;
        self.last_error = None;
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Start a load if the viewport is close to the end and nothing blocks it.
    pub fn maybe_load_more(&mut self, signal: ScrollSignal) -> Option<LoadRequest> {
        if signal.remaining > self.config.threshold {
            return None;
        }
        self.begin()
    }

    /// Start a load regardless of scroll position. Used after a failure.
    pub fn retry(&mut self) -> Option<LoadRequest> {
        self.last_error.as_ref()?;
        self.begin()
    }

    fn begin(&mut self) -> Option<LoadRequest> {
        if self.in_flight.is_some() || !self.has_more {
            return None;
        }

        let id = self.next_load_id;
        self.next_load_id += 1;
        self.in_flight = Some(id);
        self.last_error = None;

        let request = LoadRequest {
            id,
            start: self.offset,
            count: self.config.batch_size,
        };
        tracing::debug!(kind = T::KIND, load_id = id, start = request.start, "loading page");
        Some(request)
    }

    /// Apply the outcome of a load. Returns false when the result belongs
    /// to a load this list no longer waits for.
    pub fn complete(&mut self, load_id: u64, result: Result<Batch<T>>) -> bool {
        if self.in_flight != Some(load_id) {
            tracing::debug!(kind = T::KIND, load_id, "ignoring stale page");
            return false;
        }
        self.in_flight = None;

        let batch = match result {
            Ok(batch) => batch,
            Err(err) => {
                tracing::warn!(kind = T::KIND, load_id, error = %err, "page load failed");
                self.last_error = Some(err.to_string());
                return true;
            }
        };

        let fetched_before = self.offset;
        let exhausted = batch.end_of_data
            || batch.items.is_empty()
            || self.config.cap.is_some_and(|cap| fetched_before >= cap);

        self.offset += batch.items.len();
        self.ingest(batch.items);

        if exhausted {
            self.has_more = false;
            tracing::info!(kind = T::KIND, len = self.records.len(), "reached end of list");
        }
        true
    }

    /// Fetch and apply one page in place.
    pub async fn load_more<S>(&mut self, source: &S, signal: ScrollSignal) -> bool
    where
        S: RecordSource<T> + ?Sized,
    {
        let Some(request) = self.maybe_load_more(signal) else {
            return false;
        };
        let result = source.fetch(request.start, request.count).await;
        self.complete(request.id, result)
    }

    fn ingest(&mut self, items: Vec<T>) {
        for item in items {
            if let Err(err) = item.validate() {
                tracing::warn!(kind = T::KIND, error = %err, "rejecting record");
                continue;
            }
            if !self.ids.insert(item.id().to_string()) {
                tracing::warn!(kind = T::KIND, id = item.id(), "rejecting duplicate record");
                continue;
            }
            self.records.push(item);
        }
    }
}
