//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every quote operation, whatever UI sits on top.
//!
//! It dispatches to `commands/*.rs`, applies configuration defaults (page size,
//! export path) and returns `Result<CmdResult>`. It holds no business rules of its
//! own and never prints.
//!
//! `WiseApi<S: QuoteStore>` is generic over the storage backend:
//! - Production: `WiseApi<FileStore>`
//! - Testing: `WiseApi<InMemoryStore>`

use crate::commands;
use crate::commands::list::ListQuery;
use crate::config::WiseConfig;
use crate::error::Result;
use crate::model::Quote;
use crate::store::QuoteStore;
use std::path::Path;

/// The main API facade for quote operations.
pub struct WiseApi<S: QuoteStore> {
    store: S,
    config: WiseConfig,
}

impl<S: QuoteStore> WiseApi<S> {
    pub fn new(store: S, config: WiseConfig) -> Self {
        Self { store, config }
    }

    pub fn register(&mut self, content: &str, author: &str) -> Result<CmdResult> {
        commands::register::run(&mut self.store, content, author)
    }

    pub fn modify(&mut self, id: u64, update: &QuoteUpdate) -> Result<CmdResult> {
        commands::modify::run(&mut self.store, id, update)
    }

    pub fn delete(&mut self, id: u64) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn get(&self, id: u64) -> Result<Option<Quote>> {
        let result = commands::get::run(&self.store, id)?;
        Ok(result.affected_quotes.into_iter().next())
    }

    /// Lists one page. Keyword type and keyword come straight from user input;
    /// the page size comes from configuration.
    pub fn list(
        &self,
        keyword_type: Option<&str>,
        keyword: Option<&str>,
        page: i64,
    ) -> Result<CmdResult> {
        let query =
            ListQuery::new(keyword_type, keyword, page).with_page_size(self.config.page_size);
        commands::list::run(&self.store, &query)
    }

    /// Exports to `path`, or to the configured export path when `None`.
    pub fn build_export(&self, path: Option<&Path>) -> Result<CmdResult> {
        let path = path.unwrap_or(self.config.export_path.as_path());
        commands::export::run(&self.store, path)
    }

    pub fn seed(&mut self, count: usize) -> Result<CmdResult> {
        commands::seed::run(&mut self.store, count)
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        commands::reset::run(&mut self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::list::KeywordType;
pub use commands::{CmdMessage, CmdResult, MessageLevel, QuoteUpdate};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn api() -> WiseApi<InMemoryStore> {
        WiseApi::new(InMemoryStore::new(), WiseConfig::default())
    }

    #[test]
    fn register_then_get() {
        let mut api = api();
        let result = api.register(" 현재를 사랑하라. ", "작자미상").unwrap();
        assert_eq!(result.affected_id(), Some(1));

        let quote = api.get(1).unwrap().unwrap();
        assert_eq!(quote.content, "현재를 사랑하라.");
        assert_eq!(api.get(2).unwrap(), None);
    }

    #[test]
    fn list_uses_configured_page_size() {
        let mut config = WiseConfig::default();
        config.set_page_size(2);
        let mut api = WiseApi::new(InMemoryStore::new(), config);
        api.seed(5).unwrap();

        let result = api.list(None, None, 1).unwrap();
        let paged = result.listed_quotes.unwrap();
        assert_eq!(paged.items.len(), 2);
        assert_eq!(paged.total_pages, 3);
    }

    #[test]
    fn modify_and_delete_dispatch() {
        let mut api = api();
        api.register("a", "b").unwrap();

        let modified = api
            .modify(1, &QuoteUpdate::new(Some("c".into()), None))
            .unwrap();
        assert_eq!(modified.affected_quotes[0].content, "c");

        assert_eq!(api.delete(1).unwrap().affected_id(), Some(1));
        assert_eq!(api.delete(1).unwrap().affected_id(), None);
    }

    #[test]
    fn build_export_defaults_to_configured_path() {
        let dir = TempDir::new().unwrap();
        let config = WiseConfig {
            export_path: dir.path().join("configured.json"),
            ..WiseConfig::default()
        };
        let api = WiseApi::new(InMemoryStore::new(), config);

        api.build_export(None).unwrap();
        assert!(dir.path().join("configured.json").exists());

        let other = dir.path().join("other.json");
        let result = api.build_export(Some(&other)).unwrap();
        assert_eq!(result.export_path.as_deref(), Some(other.as_path()));
        assert!(other.exists());
    }

    #[test]
    fn reset_restarts_ids() {
        let mut api = api();
        api.seed(3).unwrap();
        api.reset().unwrap();
        assert_eq!(api.register("x", "y").unwrap().affected_id(), Some(1));
        assert_eq!(api.store().last_id().unwrap(), 1);
    }
}
