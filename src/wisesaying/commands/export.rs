use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WiseError};
use crate::model::Quote;
use crate::store::QuoteStore;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use super::helpers::escape_json;

pub const DEFAULT_EXPORT_PATH: &str = "data.json";

/// Writes every quote, oldest first, to `path` as a JSON array. Replaces any
/// existing file.
pub fn run<S: QuoteStore>(store: &S, path: &Path) -> Result<CmdResult> {
    let mut quotes = store.find_all()?;
    quotes.sort_by_key(Quote::id_or_zero);

    let file = File::create(path).map_err(WiseError::Io)?;
    let mut writer = BufWriter::new(file);
    write_export(&mut writer, &quotes)?;
    writer.flush().map_err(WiseError::Io)?;
    debug!(path = %path.display(), count = quotes.len(), "exported quotes");

    let mut result = CmdResult::default().with_export_path(path.to_path_buf());
    result.add_message(CmdMessage::success(format!(
        "{} 파일의 내용이 갱신되었습니다.",
        path.display()
    )));
    Ok(result)
}

/// One object per line, comma separated, newline after the closing bracket.
fn write_export<W: Write>(mut writer: W, quotes: &[Quote]) -> Result<()> {
    writeln!(writer, "[").map_err(WiseError::Io)?;
    for (i, quote) in quotes.iter().enumerate() {
        write!(
            writer,
            "  {{ \"id\": {}, \"content\": \"{}\", \"author\": \"{}\" }}",
            quote.id_or_zero(),
            escape_json(&quote.content),
            escape_json(&quote.author)
        )
        .map_err(WiseError::Io)?;
        if i + 1 != quotes.len() {
            write!(writer, ",").map_err(WiseError::Io)?;
        }
        writeln!(writer).map_err(WiseError::Io)?;
    }
    writeln!(writer, "]").map_err(WiseError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::register;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn render(quotes: &[Quote]) -> String {
        let mut buf = Vec::new();
        write_export(&mut buf, quotes).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_export_is_empty_array() {
        assert_eq!(render(&[]), "[\n]\n");
    }

    #[test]
    fn escapes_quote_and_backslash() {
        let quote = Quote {
            id: Some(4),
            content: "say \"hi\"".into(),
            author: "a\\b".into(),
        };
        assert_eq!(
            render(&[quote]),
            "[\n  { \"id\": 4, \"content\": \"say \\\"hi\\\"\", \"author\": \"a\\\\b\" }\n]\n"
        );
    }

    #[test]
    fn writes_ascending_ids_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let mut store = InMemoryStore::new();
        register::run(&mut store, "현재를 사랑하라.", "작자미상").unwrap();
        register::run(&mut store, "과거에 집착하지 마라.", "작자미상").unwrap();

        let result = run(&store, &path).unwrap();
        assert_eq!(result.export_path.as_deref(), Some(path.as_path()));

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            concat!(
                "[\n",
                "  { \"id\": 1, \"content\": \"현재를 사랑하라.\", \"author\": \"작자미상\" },\n",
                "  { \"id\": 2, \"content\": \"과거에 집착하지 마라.\", \"author\": \"작자미상\" }\n",
                "]\n"
            )
        );
    }

    #[test]
    fn replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "stale content that is much longer than the export").unwrap();

        let store = InMemoryStore::new();
        run(&store, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[\n]\n");
    }

    #[test]
    fn export_is_valid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let mut store = InMemoryStore::new();
        register::run(&mut store, "one", "a").unwrap();
        register::run(&mut store, "two", "b").unwrap();
        run(&store, &path).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed[1]["content"], "two");
        assert_eq!(parsed[0]["id"], 1);
    }
}
