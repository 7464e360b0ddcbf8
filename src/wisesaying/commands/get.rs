use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::QuoteStore;

/// Looks up a single quote. A missing id is reported, not an error.
pub fn run<S: QuoteStore>(store: &S, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.find_by_id(id)? {
        Some(quote) => result.affected_quotes.push(quote),
        None => result.add_message(CmdMessage::warning(format!(
            "{}번 명언은 존재하지 않습니다.",
            id
        ))),
    }
    Ok(result)
}
