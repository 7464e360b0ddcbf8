use super::{sort_newest_first, QuoteStore};
use crate::error::Result;
use crate::model::Quote;
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    quotes: BTreeMap<u64, Quote>,
    last_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuoteStore for InMemoryStore {
    fn save(&mut self, mut quote: Quote) -> Result<Quote> {
        let id = match quote.id {
            Some(id) => id,
            None => {
                self.last_id += 1;
                quote.id = Some(self.last_id);
                self.last_id
            }
        };
        self.quotes.insert(id, quote.clone());
        Ok(quote)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Quote>> {
        Ok(self.quotes.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Quote>> {
        let mut quotes: Vec<Quote> = self.quotes.values().cloned().collect();
        sort_newest_first(&mut quotes);
        Ok(quotes)
    }

    fn delete_by_id(&mut self, id: u64) -> Result<bool> {
        Ok(self.quotes.remove(&id).is_some())
    }

    fn last_id(&self) -> Result<u64> {
        Ok(self.last_id)
    }

    fn clear(&mut self) -> Result<()> {
        self.quotes.clear();
        self.last_id = 0;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` quotes shaped like the startup seed: "명언 N" by "작자미상 N".
        pub fn with_quotes(mut self, count: usize) -> Self {
            for i in 1..=count {
                let quote = Quote::new(format!("명언 {}", i), format!("작자미상 {}", i));
                self.store.save(quote).unwrap();
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = InMemoryStore::new();
        store.save(Quote::new("a".into(), "b".into())).unwrap();
        store.save(Quote::new("c".into(), "d".into())).unwrap();
        store.delete_by_id(2).unwrap();
        let q = store.save(Quote::new("e".into(), "f".into())).unwrap();
        assert_eq!(q.id, Some(3));
    }

    #[test]
    fn fixture_seeds_in_order() {
        let fixture = fixtures::StoreFixture::new().with_quotes(3);
        let all = fixture.store.find_all().unwrap();
        assert_eq!(all[0].content, "명언 3");
        assert_eq!(all[2].author, "작자미상 1");
    }
}
