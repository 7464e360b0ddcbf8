use serde::{Deserialize, Serialize};

/// A stored content/author pair.
///
/// `id` is `None` until the quote is first saved; the store assigns it then and
/// never changes it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: Option<u64>,
    pub content: String,
    pub author: String,
}

impl Quote {
    pub fn new(content: String, author: String) -> Self {
        Self {
            id: None,
            content,
            author,
        }
    }

    /// Id of a persisted quote. Unsaved quotes report 0, which the store never issues.
    pub fn id_or_zero(&self) -> u64 {
        self.id.unwrap_or(0)
    }
}

/// One page of an ordered result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    /// 1-based page that `items` belongs to.
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paged<T> {
    /// Slices `all` into the requested page.
    ///
    /// A page of 0 is treated as 1. There is always at least one page, and a
    /// page past the end yields no items while still reporting `page` as asked.
    pub fn paginate(all: Vec<T>, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let page = page.max(1);
        let total_items = all.len();
        let total_pages = total_items.div_ceil(page_size).max(1);

        let start = (page - 1).saturating_mul(page_size);
        let end = page.saturating_mul(page_size).min(total_items);
        let items = if start <= end {
            all.into_iter().skip(start).take(end - start).collect()
        } else {
            Vec::new()
        };

        Self {
            items,
            page,
            total_pages,
        }
    }
}
