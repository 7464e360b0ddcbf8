use colored::Colorize;
use std::io::Write;
use wisesaying::api::{CmdMessage, MessageLevel};
use wisesaying::model::{Paged, Quote};

const SEPARATOR: &str = "----------------------";

/// Success and warning lines are part of the session protocol and stay plain;
/// only informational notes are styled.
pub(super) fn print_messages<W: Write>(
    out: &mut W,
    messages: &[CmdMessage],
) -> std::io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success | MessageLevel::Warning => {
                writeln!(out, "{}", message.content)?
            }
        }
    }
    Ok(())
}

/// The block shown above search results.
pub(super) fn render_search_header(keyword_type: Option<&str>, keyword: &str) -> String {
    format!(
        "{SEPARATOR}\n검색타입 : {}\n검색어 : {}\n{SEPARATOR}\n",
        keyword_type.unwrap_or(""),
        keyword
    )
}

/// The quote table plus the page footer.
pub(super) fn render_quote_page(paged: &Paged<Quote>) -> String {
    let mut output = String::new();
    output.push_str("번호 / 작가 / 명언\n");
    output.push_str(SEPARATOR);
    output.push('\n');
    for quote in &paged.items {
        output.push_str(&format!(
            "{} / {} / {}\n",
            quote.id_or_zero(),
            quote.author,
            quote.content
        ));
    }
    output.push_str(SEPARATOR);
    output.push('\n');
    output.push_str(&format!(
        "페이지 : {}\n",
        render_page_numbers(paged.page, paged.total_pages)
    ));
    output
}

/// `1 / [2] / 3`: every page number, the current one bracketed.
fn render_page_numbers(current: usize, total: usize) -> String {
    (1..=total)
        .map(|i| {
            if i == current {
                format!("[{}]", i)
            } else {
                i.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" / ")
}
