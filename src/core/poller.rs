use crate::core::repository::WordRepository;
use crate::domain::date::PuzzleDate;
use crate::domain::model::WordEntry;
use crate::domain::ports::{Storage, WordSource};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The store already had the day; nothing was written.
    AlreadyPresent,
    /// The day was fetched and persisted.
    Added(WordEntry),
    /// The fetch failed; the next check will try again.
    StillMissing,
}

pub struct DailyPoller<'a, S: Storage, W: WordSource> {
    repository: &'a WordRepository<S>,
    source: &'a W,
}

impl<'a, S: Storage, W: WordSource> DailyPoller<'a, S, W> {
    pub fn new(repository: &'a WordRepository<S>, source: &'a W) -> Self {
        Self { repository, source }
    }

    pub async fn check(&self, today: PuzzleDate) -> Result<CheckOutcome> {
        tracing::info!("Checking for word on {}...", today);

        let mut store = self.repository.load().await;
        if store.contains(today) {
            tracing::info!("Today's word already fetched. Starting countdown for next check...");
            return Ok(CheckOutcome::AlreadyPresent);
        }

        let Some(entry) = self.source.fetch_for_date(today).await else {
            return Ok(CheckOutcome::StillMissing);
        };

        store.merge([entry.clone()]);
        self.repository.save(&store).await?;
        tracing::info!("Added new word for {}: {}", today, entry.solution);

        Ok(CheckOutcome::Added(entry))
    }
}
