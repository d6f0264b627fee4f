//! Shared test doubles for the storage and word-source ports.

use crate::domain::date::PuzzleDate;
use crate::domain::model::WordEntry;
use crate::domain::ports::{Storage, WordSource};
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct MockStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    writes: Arc<AtomicUsize>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_file(path: &str, data: &str) -> Self {
        let storage = Self::new();
        storage
            .files
            .lock()
            .await
            .insert(path.to_string(), data.as_bytes().to_vec());
        storage
    }

    pub async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
        let files = self.files.lock().await;
        files.get(path).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Storage for MockStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let files = self.files.lock().await;
        files.get(path).cloned().ok_or_else(|| {
            SyncError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            ))
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut files = self.files.lock().await;
        files.insert(path.to_string(), data.to_vec());
        Ok(())
    }
}

/// Answers from a fixed table; dates not in the table fail.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    answers: HashMap<PuzzleDate, String>,
    calls: Arc<std::sync::Mutex<Vec<PuzzleDate>>>,
}

impl ScriptedSource {
    pub fn new(answers: &[(&str, &str)]) -> Self {
        Self {
            answers: answers
                .iter()
                .map(|(date, solution)| (date.parse().unwrap(), solution.to_string()))
                .collect(),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<PuzzleDate> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WordSource for ScriptedSource {
    async fn fetch_for_date(&self, date: PuzzleDate) -> Option<WordEntry> {
        self.calls.lock().unwrap().push(date);
        self.answers
            .get(&date)
            .map(|solution| WordEntry::new(date, solution.clone()))
    }
}

pub fn day(s: &str) -> PuzzleDate {
    s.parse().unwrap()
}
