use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::QuoteStore;

/// Removes every quote and restarts id numbering at 1.
pub fn run<S: QuoteStore>(store: &mut S) -> Result<CmdResult> {
    let removed = store.find_all()?.len();
    store.clear()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Removed {} quotes", removed)));
    Ok(result)
}
