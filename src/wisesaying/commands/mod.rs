use crate::model::{Paged, Quote};
use std::path::PathBuf;

pub mod delete;
pub mod export;
pub mod get;
pub mod helpers;
pub mod list;
pub mod modify;
pub mod register;
pub mod reset;
pub mod seed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_quotes: Vec<Quote>,
    pub listed_quotes: Option<Paged<Quote>>,
    pub export_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_quotes(mut self, quotes: Vec<Quote>) -> Self {
        self.affected_quotes = quotes;
        self
    }

    pub fn with_listed_quotes(mut self, paged: Paged<Quote>) -> Self {
        self.listed_quotes = Some(paged);
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }

    /// Id of the first affected quote, if any.
    pub fn affected_id(&self) -> Option<u64> {
        self.affected_quotes.first().and_then(|q| q.id)
    }
}

/// Partial update for the modify operation. `None` or blank keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct QuoteUpdate {
    pub content: Option<String>,
    pub author: Option<String>,
}

impl QuoteUpdate {
    pub fn new(content: Option<String>, author: Option<String>) -> Self {
        Self { content, author }
    }
}
