pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{http::HttpWordSource, storage::LocalStorage};
pub use crate::config::Settings;
pub use crate::core::{
    backfill::{Backfill, BackfillReport},
    countdown::Countdown,
    engine::SyncEngine,
    poller::{CheckOutcome, DailyPoller},
    repository::WordRepository,
};
pub use crate::domain::{date::PuzzleDate, model::WordEntry, model::WordStore};
pub use crate::utils::error::{Result, SyncError};
