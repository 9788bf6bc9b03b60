//! File-based KeyValueStore implementation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::{KeyValueStore, RepositoryError, Result};

/// File-based implementation of [`KeyValueStore`].
///
/// Each key is stored as `{base_dir}/{key}.json`.
///
/// Writes go to a temporary file first and are then renamed over the target,
/// so a reader never observes a half-written value.
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file-based store rooted at `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    /// Get the path to the file backing `key`.
    fn item_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(RepositoryError::InvalidKey(key.to_string()));
        }
        Ok(self.base_dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key)?;

        match fs::read(&path).await {
            Ok(bytes) => {
                tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
                // Non-UTF-8 content is still a value; callers see it as malformed.
                let value = String::from_utf8(bytes).unwrap_or_else(|err| {
                    tracing::warn!("{} is not valid UTF-8", path.display());
                    String::from_utf8_lossy(err.as_bytes()).into_owned()
                });
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RepositoryError::Io(e)),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.item_path(key)?;
        let temp_path = path.with_extension("json.tmp");

        // Write to temp file
        fs::write(&temp_path, value)
            .await
            .map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path)
            .await
            .map_err(RepositoryError::Io)?;

        tracing::debug!("Wrote {} bytes to {}", value.len(), path.display());

        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.item_path(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RepositoryError::Io(e)),
        }
    }
}
