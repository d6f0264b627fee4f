use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at `base_path`. Absolute paths passed to
/// `read_file`/`write_file` bypass the base.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn current_dir() -> Self {
        Self::new(".")
    }

    /// Rooted at the directory holding the running executable, so relative
    /// store paths do not depend on where the program was launched from.
    /// Falls back to the working directory when that lookup fails.
    pub fn beside_executable() -> Self {
        match std::env::current_exe() {
            Ok(exe) => match exe.parent() {
                Some(dir) => Self::new(dir),
                None => Self::current_dir(),
            },
            Err(e) => {
                tracing::warn!("Could not locate executable ({}), using working directory", e);
                Self::current_dir()
            }
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(Path::new(path))
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(self.resolve(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SyncError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_file("nested/words.json", b"{}").await.unwrap();

        let data = storage.read_file("nested/words.json").await.unwrap();
        assert_eq!(data, b"{}");
    }

    #[test]
    fn test_beside_executable_ignores_working_directory() {
        let storage = LocalStorage::beside_executable();
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();

        assert_eq!(storage.base_path(), exe_dir.as_path());
        assert_eq!(
            storage.resolve("wordle-words.json"),
            exe_dir.join("wordle-words.json")
        );
    }

    #[test]
    fn test_absolute_path_bypasses_base() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("words.json");
        let storage = LocalStorage::new("/somewhere/else");

        assert_eq!(storage.resolve(target.to_str().unwrap()), target);
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_not_found() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        match storage.read_file("absent.json").await {
            Err(SyncError::IoError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_write_overwrites_whole_file() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_file("words.json", b"a much longer first payload").await.unwrap();
        storage.write_file("words.json", b"short").await.unwrap();

        assert_eq!(storage.read_file("words.json").await.unwrap(), b"short");
    }
}
