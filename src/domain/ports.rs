use crate::domain::date::PuzzleDate;
use crate::domain::model::WordEntry;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Source of daily answers. `None` means "skip this date, retry on a later run";
/// implementations log their own failures.
#[async_trait]
pub trait WordSource: Send + Sync {
    async fn fetch_for_date(&self, date: PuzzleDate) -> Option<WordEntry>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn store_path(&self) -> &str;
    fn start_date(&self) -> PuzzleDate;
    fn check_interval(&self) -> Duration;
    fn request_delay(&self) -> Duration;
    fn request_timeout(&self) -> Option<Duration>;
}
