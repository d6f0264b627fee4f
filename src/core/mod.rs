pub mod backfill;
pub mod countdown;
pub mod engine;
pub mod poller;
pub mod repository;

pub use crate::domain::model::{WordEntry, WordStore};
pub use crate::domain::ports::{ConfigProvider, Storage, WordSource};
pub use crate::utils::error::Result;
