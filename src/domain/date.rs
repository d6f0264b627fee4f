//! Calendar-day value used for every date the store and fetcher handle.
//!
//! Wraps `chrono::NaiveDate` so the rest of the crate only sees the handful of
//! operations it needs: ordering, stepping one day forward, and the
//! `YYYY-MM-DD` text form used on the wire and in the store file.

use crate::utils::error::SyncError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleDate(NaiveDate);

impl PuzzleDate {
    /// Returns `None` for impossible dates such as February 30th.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The local calendar date right now.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// The following calendar day, or `None` past the end of the representable range.
    pub fn next(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Every day from `self` through `end`, inclusive. Empty when `end < self`.
    pub fn days_through(self, end: PuzzleDate) -> DayRange {
        DayRange {
            next: Some(self),
            end,
        }
    }
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl FromStr for PuzzleDate {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), FORMAT)
            .map(Self)
            .map_err(|_| SyncError::InvalidDateError {
                value: s.to_string(),
            })
    }
}

impl Serialize for PuzzleDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PuzzleDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Ascending iterator over consecutive calendar days.
#[derive(Debug, Clone)]
pub struct DayRange {
    next: Option<PuzzleDate>,
    end: PuzzleDate,
}

impl Iterator for DayRange {
    type Item = PuzzleDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|day| *day <= self.end)?;
        self.next = current.next();
        Some(current)
    }
}
