use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Paged, Quote};
use crate::store::QuoteStore;

use super::helpers::provided;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Which field a keyword search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordType {
    Author,
    Content,
    /// Unrecognized or absent type: the keyword is ignored.
    Any,
}

impl KeywordType {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("author") => KeywordType::Author,
            Some("content") => KeywordType::Content,
            _ => KeywordType::Any,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListQuery {
    pub keyword_type: KeywordType,
    pub keyword: Option<String>,
    /// 1-based; values below 1 mean the first page.
    pub page: i64,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            keyword_type: KeywordType::Any,
            keyword: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    pub fn new(keyword_type: Option<&str>, keyword: Option<&str>, page: i64) -> Self {
        Self {
            keyword_type: KeywordType::parse(keyword_type),
            keyword: keyword.map(str::to_string),
            page,
            ..Self::default()
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

fn matches(quote: &Quote, keyword_type: KeywordType, keyword_lower: &str) -> bool {
    match keyword_type {
        KeywordType::Author => quote.author.to_lowercase().contains(keyword_lower),
        KeywordType::Content => quote.content.to_lowercase().contains(keyword_lower),
        KeywordType::Any => true,
    }
}

pub fn run<S: QuoteStore>(store: &S, query: &ListQuery) -> Result<CmdResult> {
    let mut quotes = store.find_all()?;

    if let Some(keyword) = provided(query.keyword.as_deref()) {
        let keyword_lower = keyword.to_lowercase();
        quotes.retain(|q| matches(q, query.keyword_type, &keyword_lower));
    }

    let page = usize::try_from(query.page).unwrap_or(0);
    let page_size = if query.page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        query.page_size
    };

    Ok(CmdResult::default().with_listed_quotes(Paged::paginate(quotes, page, page_size)))
}
