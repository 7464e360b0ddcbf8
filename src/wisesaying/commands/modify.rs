use crate::commands::{CmdMessage, CmdResult, QuoteUpdate};
use crate::error::Result;
use crate::store::QuoteStore;
use tracing::debug;

use super::helpers::{clean, provided};

/// Applies a partial update. Blank fields keep the stored value; the quote is
/// re-saved whenever it exists, even if nothing changed.
pub fn run<S: QuoteStore>(store: &mut S, id: u64, update: &QuoteUpdate) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(mut quote) = store.find_by_id(id)? else {
        result.add_message(CmdMessage::warning(format!(
            "{}번 명언은 존재하지 않습니다.",
            id
        )));
        return Ok(result);
    };

    if let Some(content) = provided(update.content.as_deref()) {
        quote.content = clean(content);
    }
    if let Some(author) = provided(update.author.as_deref()) {
        quote.author = clean(author);
    }

    let saved = store.save(quote)?;
    debug!(id, "modified quote");

    result.add_message(CmdMessage::success(format!("{}번 명언이 수정되었습니다.", id)));
    Ok(result.with_affected_quotes(vec![saved]))
}
