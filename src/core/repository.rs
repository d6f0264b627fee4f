use crate::domain::model::{WordEntry, WordStore};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, SyncError};
use serde::Deserialize;

/// On-disk shape with entries left undecoded, so one bad entry does not
/// discard the rest.
#[derive(Deserialize)]
struct RawStore {
    words: Vec<serde_json::Value>,
}

/// Loads and saves the [`WordStore`] document at a single path.
pub struct WordRepository<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> WordRepository<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reads the store, falling back to an empty one when the file is missing
    /// or cannot be parsed. Individual malformed entries are dropped.
    pub async fn load(&self) -> WordStore {
        match self.try_load().await {
            Ok(store) => store,
            Err(SyncError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No store at {} yet, starting empty", self.path);
                WordStore::new()
            }
            Err(e) => {
                tracing::warn!(
                    "Could not read store at {} ({}), starting empty; it will be rebuilt on the next save",
                    self.path,
                    e
                );
                WordStore::new()
            }
        }
    }

    async fn try_load(&self) -> Result<WordStore> {
        let data = self.storage.read_file(&self.path).await?;
        let raw: RawStore = serde_json::from_slice(&data)?;

        let entries = raw.words.into_iter().filter_map(|value| {
            match WordEntry::deserialize(&value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Dropping malformed store entry {} ({})", value, e);
                    None
                }
            }
        });

        let mut store = WordStore::new();
        store.merge(entries);
        Ok(store)
    }

    /// Overwrites the whole file with pretty-printed JSON.
    pub async fn save(&self, store: &WordStore) -> Result<()> {
        let json = serde_json::to_string_pretty(store)?;
        tracing::debug!("Writing {} entries ({} bytes) to {}", store.len(), json.len(), self.path);
        self.storage.write_file(&self.path, json.as_bytes()).await
    }
}
