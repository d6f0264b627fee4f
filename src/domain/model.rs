use crate::domain::date::PuzzleDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One day's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub date: PuzzleDate,
    pub solution: String,
}

impl WordEntry {
    pub fn new(date: PuzzleDate, solution: impl Into<String>) -> Self {
        Self {
            date,
            solution: solution.into(),
        }
    }
}

/// Persisted collection of answers, ascending by date with at most one entry per date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStore {
    pub words: Vec<WordEntry>,
}

impl WordStore {
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, date: PuzzleDate) -> bool {
        self.words.iter().any(|w| w.date == date)
    }

    pub fn get(&self, date: PuzzleDate) -> Option<&WordEntry> {
        self.words.iter().find(|w| w.date == date)
    }

    pub fn dates(&self) -> HashSet<PuzzleDate> {
        self.words.iter().map(|w| w.date).collect()
    }

    /// Appends entries for dates not yet present, then re-sorts.
    /// Returns how many entries were actually added.
    pub fn merge(&mut self, entries: impl IntoIterator<Item = WordEntry>) -> usize {
        let mut present = self.dates();
        let before = self.words.len();
        for entry in entries {
            if present.insert(entry.date) {
                self.words.push(entry);
            }
        }
        self.words.sort_by_key(|w| w.date);
        self.words.len() - before
    }
}
