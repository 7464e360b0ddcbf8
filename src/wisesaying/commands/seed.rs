use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::QuoteStore;

use super::register;

/// Registers `count` synthetic quotes, "명언 N" by "작자미상 N", for N in 1..=count.
pub fn run<S: QuoteStore>(store: &mut S, count: usize) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for i in 1..=count {
        let registered = register::run(store, &format!("명언 {}", i), &format!("작자미상 {}", i))?;
        result.affected_quotes.extend(registered.affected_quotes);
    }
    result.add_message(CmdMessage::info(format!("Seeded {} quotes", count)));
    Ok(result)
}
