//! # Storage Layer
//!
//! The [`QuoteStore`] trait is the only way the rest of the library touches
//! persisted quotes. It owns id generation as well as CRUD, so callers never
//! see the counter.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file per quote
//! - [`memory::InMemoryStore`]: no persistence, used by command tests
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! db/wiseSaying/
//! ├── lastId.txt      # last issued id, a single integer
//! ├── 1.json          # {"id": 1, "content": "...", "author": "..."}
//! ├── 2.json
//! └── config.json     # optional, see config.rs
//! ```
//!
//! Keeping each quote in its own file makes delete a single `remove_file` and
//! means a bad write can only ever damage the record being written.

use crate::error::Result;
use crate::model::Quote;

pub mod fs;
pub mod memory;

/// Abstract interface for quote storage.
///
/// Ids are issued by the store: they start at 1, only ever grow, and are never
/// handed out twice, deleted or not.
pub trait QuoteStore {
    /// Persist a quote, assigning the next id first when it has none.
    /// Overwrites any existing record with the same id.
    fn save(&mut self, quote: Quote) -> Result<Quote>;

    /// Look up a quote; a missing or unreadable record is `None`.
    fn find_by_id(&self, id: u64) -> Result<Option<Quote>>;

    /// Every readable quote, newest (highest id) first.
    fn find_all(&self) -> Result<Vec<Quote>>;

    /// Remove a quote. Returns whether anything was removed.
    fn delete_by_id(&mut self, id: u64) -> Result<bool>;

    /// The last id handed out, 0 if none.
    fn last_id(&self) -> Result<u64>;

    /// Remove every quote and reset the id counter.
    fn clear(&mut self) -> Result<()>;
}

/// Orders quotes newest first, the order `find_all` promises.
pub(crate) fn sort_newest_first(quotes: &mut [Quote]) {
    quotes.sort_by(|a, b| b.id_or_zero().cmp(&a.id_or_zero()));
}
