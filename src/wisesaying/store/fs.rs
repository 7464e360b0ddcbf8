use super::{sort_newest_first, QuoteStore};
use crate::error::{Result, WiseError};
use crate::model::Quote;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub const DEFAULT_BASE_DIR: &str = "db/wiseSaying";
const LAST_ID_FILENAME: &str = "lastId.txt";
const RECORD_EXT: &str = "json";

/// On-disk shape of a quote. Unlike [`Quote`], every field is required, so a
/// file missing any of them fails to decode and is treated as absent.
#[derive(Debug, Serialize, Deserialize)]
struct QuoteRecord {
    id: u64,
    content: String,
    author: String,
}

impl From<QuoteRecord> for Quote {
    fn from(record: QuoteRecord) -> Self {
        Quote {
            id: Some(record.id),
            content: record.content,
            author: record.author,
        }
    }
}

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens (creating if needed) a store rooted at `root`.
    ///
    /// The directory and a `lastId.txt` holding `0` are created when missing.
    pub fn open<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let store = Self { root: root.into() };
        store.ensure_layout()?;
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn record_path(&self, id: u64) -> PathBuf {
        self.root.join(format!("{}.{}", id, RECORD_EXT))
    }

    fn last_id_path(&self) -> PathBuf {
        self.root.join(LAST_ID_FILENAME)
    }

    fn ensure_layout(&self) -> Result<()> {
        if self.root.exists() && !self.root.is_dir() {
            return Err(WiseError::Store(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(WiseError::Io)?;
        }
        if !self.last_id_path().exists() {
            self.write_atomic(LAST_ID_FILENAME, "0")?;
        }
        Ok(())
    }

    /// Writes `content` to a temp file next to the target, then renames it into place.
    fn write_atomic(&self, filename: &str, content: &str) -> Result<()> {
        let target = self.root.join(filename);
        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", filename, Uuid::new_v4()));
        fs::write(&tmp, content).map_err(WiseError::Io)?;
        fs::rename(&tmp, target).map_err(WiseError::Io)?;
        Ok(())
    }

    fn next_id(&self) -> Result<u64> {
        let next = self.last_id()? + 1;
        self.write_atomic(LAST_ID_FILENAME, &next.to_string())?;
        debug!(id = next, "issued quote id");
        Ok(next)
    }

    fn read_record(&self, path: &Path) -> Result<Option<Quote>> {
        let raw = fs::read(path).map_err(WiseError::Io)?;
        match serde_json::from_slice::<QuoteRecord>(&raw) {
            Ok(record) => Ok(Some(record.into())),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping malformed quote record");
                Ok(None)
            }
        }
    }

    /// Ids of all `<id>.json` files; anything else in the directory is ignored.
    fn record_ids(&self) -> Result<Vec<u64>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(WiseError::Io)? {
            let path = entry.map_err(WiseError::Io)?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXT) {
                continue;
            }
            if let Some(id) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<u64>().ok())
            {
                ids.push(id);
            }
        }
        Ok(ids)
    }
}

impl QuoteStore for FileStore {
    fn save(&mut self, mut quote: Quote) -> Result<Quote> {
        self.ensure_layout()?;

        let id = match quote.id {
            Some(id) => id,
            None => {
                let id = self.next_id()?;
                quote.id = Some(id);
                id
            }
        };

        let record = QuoteRecord {
            id,
            content: quote.content.clone(),
            author: quote.author.clone(),
        };
        let json = serde_json::to_string_pretty(&record).map_err(WiseError::Serialization)?;
        self.write_atomic(&format!("{}.{}", id, RECORD_EXT), &json)?;
        debug!(id, "saved quote");

        Ok(quote)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Quote>> {
        let path = self.record_path(id);
        if !path.exists() {
            return Ok(None);
        }
        self.read_record(&path)
    }

    fn find_all(&self) -> Result<Vec<Quote>> {
        let mut quotes = Vec::new();
        for id in self.record_ids()? {
            if let Some(quote) = self.read_record(&self.record_path(id))? {
                quotes.push(quote);
            }
        }
        sort_newest_first(&mut quotes);
        Ok(quotes)
    }

    fn delete_by_id(&mut self, id: u64) -> Result<bool> {
        let path = self.record_path(id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path).map_err(WiseError::Io)?;
        debug!(id, "deleted quote");
        Ok(true)
    }

    fn last_id(&self) -> Result<u64> {
        let path = self.last_id_path();
        if !path.exists() {
            return Ok(0);
        }
        let raw = fs::read_to_string(path).map_err(WiseError::Io)?;
        Ok(raw.trim().parse().unwrap_or(0))
    }

    fn clear(&mut self) -> Result<()> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root).map_err(WiseError::Io)?;
        }
        debug!(root = %self.root.display(), "cleared quote store");
        self.ensure_layout()
    }
}
