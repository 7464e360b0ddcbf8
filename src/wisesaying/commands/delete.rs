use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Quote;
use crate::store::QuoteStore;
use tracing::debug;

/// Deletes a quote permanently. On success the removed quote is the single
/// affected quote; a record that could not be read is reported with empty fields.
pub fn run<S: QuoteStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    let existing = store.find_by_id(id)?;
    let mut result = CmdResult::default();

    if store.delete_by_id(id)? {
        debug!(id, "deleted quote");
        let removed = existing.unwrap_or(Quote {
            id: Some(id),
            content: String::new(),
            author: String::new(),
        });
        result.affected_quotes.push(removed);
        result.add_message(CmdMessage::success(format!("{}번 명언이 삭제되었습니다.", id)));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{}번 명언은 존재하지 않습니다.",
            id
        )));
    }

    Ok(result)
}
