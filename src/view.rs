use crate::error::Result;
use crate::filter::{filter, Searchable};
use crate::list::{ListConfig, ListController, LoadRequest, ScrollSignal};
use crate::selection::Selection;
use crate::types::{Batch, Record};

/// One table screen: the paged records, the search box, the cursor and
/// the detail panel.
#[derive(Debug)]
pub struct ListView<T> {
    pub list: ListController<T>,
    pub query: String,
    pub searching: bool,
    pub cursor: usize,
    pub selection: Selection<T>,
}

impl<T: Record + Searchable> ListView<T> {
    pub fn new(config: ListConfig) -> Self {
        Self {
            list: ListController::new(config),
            query: String::new(),
            searching: false,
            cursor: 0,
            selection: Selection::default(),
        }
    }

    /// Reset for a fresh visit. With a ready page the list is filled at
    /// once; otherwise the returned request must be fetched.
    pub fn mount(&mut self, ready: Option<Batch<T>>) -> Option<LoadRequest> {
        self.unmount();
        match ready {
            Some(batch) => {
                self.list.initialize(batch.items);
                None
            }
            None => self.list.request_first_page(),
        }
    }

    pub fn unmount(&mut self) {
        self.list.reset();
        self.query.clear();
        self.searching = false;
        self.cursor = 0;
        self.selection.dismiss();
    }

    /// Records matching the current query, in list order.
    pub fn visible(&self) -> Vec<&T> {
        filter(self.list.records(), &self.query)
    }

    pub fn visible_len(&self) -> usize {
        self.visible().len()
    }

    pub fn scroll_signal(&self) -> ScrollSignal {
        ScrollSignal::from_cursor(self.cursor, self.visible_len())
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, len as isize - 1) as usize;
    }

    pub fn cursor_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_bottom(&mut self) {
        self.cursor = self.visible_len().saturating_sub(1);
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.visible_len().saturating_sub(1));
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.cursor = 0;
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.clamp_cursor();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.searching = false;
        self.cursor = 0;
    }

    /// Open the detail panel on the record under the cursor.
    pub fn select_current(&mut self) {
        let record = self.visible().get(self.cursor).map(|r| (*r).clone());
        self.selection.select(record);
    }

    /// Apply a finished page and keep the cursor in range.
    pub fn complete(&mut self, load_id: u64, result: Result<Batch<T>>) -> bool {
        let applied = self.list.complete(load_id, result);
        if applied {
            self.clamp_cursor();
        }
        applied
    }
}
