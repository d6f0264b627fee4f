use crate::core::repository::WordRepository;
use crate::domain::date::PuzzleDate;
use crate::domain::ports::{Storage, WordSource};
use crate::utils::error::Result;
use std::time::Duration;

/// Counts for one backfill pass. `fetched + failed == missing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackfillReport {
    pub missing: usize,
    pub fetched: usize,
    pub failed: usize,
}

/// Fills every gap between `start_date` and a given day, one request at a time.
pub struct Backfill<'a, S: Storage, W: WordSource> {
    repository: &'a WordRepository<S>,
    source: &'a W,
    start_date: PuzzleDate,
    request_delay: Duration,
}

impl<'a, S: Storage, W: WordSource> Backfill<'a, S, W> {
    pub fn new(
        repository: &'a WordRepository<S>,
        source: &'a W,
        start_date: PuzzleDate,
        request_delay: Duration,
    ) -> Self {
        Self {
            repository,
            source,
            start_date,
            request_delay,
        }
    }

    pub async fn run(&self, today: PuzzleDate) -> Result<BackfillReport> {
        tracing::info!("Starting Wordle word update...");

        let mut store = self.repository.load().await;
        let present = store.dates();

        let missing: Vec<PuzzleDate> = self
            .start_date
            .days_through(today)
            .filter(|date| !present.contains(date))
            .collect();
        tracing::debug!(
            "{} entries on file, {} dates missing since {}",
            store.len(),
            missing.len(),
            self.start_date
        );

        let mut report = BackfillReport {
            missing: missing.len(),
            ..Default::default()
        };
        let mut pending = Vec::new();

        for date in missing {
            match self.source.fetch_for_date(date).await {
                Some(entry) => {
                    tracing::info!("Fetched word for {}: {}", entry.date, entry.solution);
                    pending.push(entry);
                    report.fetched += 1;
                    // Only successful requests are throttled.
                    tokio::time::sleep(self.request_delay).await;
                }
                None => report.failed += 1,
            }
        }

        store.merge(pending);
        self.repository.save(&store).await?;

        tracing::info!(
            "Words updated successfully! ({} fetched, {} failed, {} total)",
            report.fetched,
            report.failed,
            store.len()
        );
        Ok(report)
    }
}
