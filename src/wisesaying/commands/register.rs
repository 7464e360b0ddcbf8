use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Quote;
use crate::store::QuoteStore;
use tracing::debug;

use super::helpers::clean;

pub fn run<S: QuoteStore>(store: &mut S, content: &str, author: &str) -> Result<CmdResult> {
    let saved = store.save(Quote::new(clean(content), clean(author)))?;
    let id = saved.id_or_zero();
    debug!(id, "registered quote");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("{}번 명언이 등록되었습니다.", id)));
    Ok(result.with_affected_quotes(vec![saved]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn assigns_ids_in_order() {
        let mut store = InMemoryStore::new();
        let first = run(&mut store, "현재를 사랑하라.", "작자미상").unwrap();
        let second = run(&mut store, "과거에 집착하지 마라.", "작자미상").unwrap();
        assert_eq!(first.affected_id(), Some(1));
        assert_eq!(second.affected_id(), Some(2));
        assert_eq!(first.messages[0].content, "1번 명언이 등록되었습니다.");
    }

    #[test]
    fn stores_sanitized_fields() {
        let mut store = InMemoryStore::new();
        run(&mut store, "  <b>꿈</b>을 꾸어라!  ", " 누군가@ ").unwrap();

        let stored = store.find_by_id(1).unwrap().unwrap();
        assert_eq!(stored.content, "b꿈/b을 꾸어라!");
        assert_eq!(stored.author, "누군가");
    }
}
