//! Selection and status transitions on a loaded snapshot.

use super::{KeywordRecord, QueueSnapshot, Status};

impl QueueSnapshot {
    /// The first pending record in stored order, if any.
    pub fn find_next_pending(&self) -> Option<&KeywordRecord> {
        self.records.iter().find(|r| r.is_pending())
    }

    /// Mark every record whose keyword equals `keyword` as done.
    ///
    /// Other records and the record order are left unchanged. Done is
    /// terminal: nothing here moves a record back to pending.
    pub fn mark_done(mut self, keyword: &str) -> Self {
        for record in self.records.iter_mut().filter(|r| r.keyword == keyword) {
            record.status = Status::Done;
        }
        self
    }

    pub fn pending_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_pending()).count()
    }
}
