use crate::core::backfill::{Backfill, BackfillReport};
use crate::core::countdown::Countdown;
use crate::core::poller::{CheckOutcome, DailyPoller};
use crate::core::repository::WordRepository;
use crate::config::MAX_CHECK_INTERVAL_MINUTES;
use crate::domain::date::PuzzleDate;
use crate::domain::ports::{ConfigProvider, Storage, WordSource};
use crate::utils::error::SyncError;
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};

const MIN_PERIOD: Duration = Duration::from_secs(60);
const MAX_PERIOD: Duration = Duration::from_secs(MAX_CHECK_INTERVAL_MINUTES * 60);

/// Drives the full cycle: one backfill, an immediate check, then a check on
/// every interval tick with the countdown restarted in between.
pub struct SyncEngine<S: Storage, W: WordSource, C: ConfigProvider> {
    repository: WordRepository<S>,
    source: W,
    config: C,
    countdown: Countdown,
    today: fn() -> PuzzleDate,
}

impl<S: Storage, W: WordSource, C: ConfigProvider> SyncEngine<S, W, C> {
    pub fn new(storage: S, source: W, config: C, countdown: Countdown) -> Self {
        let repository = WordRepository::new(storage, config.store_path());
        Self {
            repository,
            source,
            config,
            countdown,
            today: PuzzleDate::today,
        }
    }

    /// Overrides how the current day is determined.
    pub fn with_clock(mut self, today: fn() -> PuzzleDate) -> Self {
        self.today = today;
        self
    }

    pub fn repository(&self) -> &WordRepository<S> {
        &self.repository
    }

    pub async fn backfill(&self) -> Option<BackfillReport> {
        let backfill = Backfill::new(
            &self.repository,
            &self.source,
            self.config.start_date(),
            self.config.request_delay(),
        );
        match backfill.run((self.today)()).await {
            Ok(report) => Some(report),
            Err(e) => {
                log_failure("Backfill", &e);
                None
            }
        }
    }

    pub async fn check_today(&self) -> Option<CheckOutcome> {
        match DailyPoller::new(&self.repository, &self.source)
            .check((self.today)())
            .await
        {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                log_failure("Daily check", &e);
                None
            }
        }
    }

    /// Runs until the process is terminated.
    pub async fn run(&mut self) {
        let period = self.config.check_interval().clamp(MIN_PERIOD, MAX_PERIOD);
        tracing::info!(
            "Syncing into {} every {} minutes",
            self.repository.path(),
            period.as_secs() / 60
        );

        self.backfill().await;
        self.check_today().await;

        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.countdown.restart(Instant::now() + period);

        loop {
            ticker.tick().await;
            self.countdown.stop();
            if self.countdown.is_enabled() {
                // Leave the countdown line before logging.
                println!();
            }
            self.check_today().await;
            self.countdown.restart(Instant::now() + period);
        }
    }
}

fn log_failure(phase: &str, e: &SyncError) {
    tracing::error!("{} failed: {} (Category: {:?})", phase, e, e.category());
}
