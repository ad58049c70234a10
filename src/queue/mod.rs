//! Keyword queue model for helpgen.
//!
//! The queue is a CSV file with at least a `keyword` and a `status` column:
//!
//! ```text
//! keyword,status
//! printer offline,1
//! wifi not connecting,0
//! ```
//!
//! Status `0` is pending and `1` is done. The whole file is loaded into a
//! [`QueueSnapshot`], mutated in memory, and written back in full through an
//! atomic replace. Any other columns are carried through untouched, and the
//! header (including a leading byte order mark) is written back as read.
//!
//! A single run owns the snapshot between load and save. Nothing here locks
//! the file; two concurrent runs against the same queue can both pick the same
//! pending keyword.

mod io;
mod mutations;

/// Header name of the keyword column.
pub const KEYWORD_COLUMN: &str = "keyword";

/// Header name of the status column.
pub const STATUS_COLUMN: &str = "status";

/// Processing state of a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Not yet processed (`0`).
    Pending,
    /// Article generated and written (`1`).
    Done,
}

impl Status {
    /// Parse the on-disk status code. Surrounding whitespace is ignored.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "0" => Some(Self::Pending),
            "1" => Some(Self::Done),
            _ => None,
        }
    }

    /// The on-disk status code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Pending => "0",
            Self::Done => "1",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pending => write!(f, "pending"),
            Status::Done => write!(f, "done"),
        }
    }
}

/// One row of the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRecord {
    /// The keyword, exactly as stored. Assumed unique within the queue.
    pub keyword: String,
    /// Current processing state.
    pub status: Status,
    /// Values of any columns other than `keyword` and `status`, in column order.
    extra: Vec<String>,
}

impl KeywordRecord {
    #[cfg(test)]
    pub(crate) fn new(keyword: impl Into<String>, status: Status) -> Self {
        Self {
            keyword: keyword.into(),
            status,
            extra: Vec::new(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == Status::Pending
    }
}

/// Every record of the queue, in stored order, plus the header layout needed
/// to write it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueSnapshot {
    /// Header fields exactly as read; matched against column names after trimming.
    columns: Vec<String>,
    /// The file started with a UTF-8 byte order mark.
    bom: bool,
    keyword_col: usize,
    status_col: usize,
    records: Vec<KeywordRecord>,
}

impl QueueSnapshot {
    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub(crate) fn new(records: Vec<KeywordRecord>) -> Self {
        Self {
            columns: vec![KEYWORD_COLUMN.to_string(), STATUS_COLUMN.to_string()],
            bom: false,
            keyword_col: 0,
            status_col: 1,
            records,
        }
    }

    #[cfg(test)]
    pub(crate) fn records(&self) -> &[KeywordRecord] {
        &self.records
    }

    #[cfg(test)]
    pub(crate) fn columns(&self) -> &[String] {
        &self.columns
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
