//! Implements ResultStore. One pretty-printed JSON array per save.
//!
//! Files are named `{prefix}_{YYYYMMDD_HHMMSS}.json` in the base directory. The
//! timestamp has second resolution; a save that lands on an existing name gets
//! `_1`, `_2`, ... appended instead of overwriting.

use crate::domain::{DomainError, PersistedRecord};
use crate::ports::ResultStore;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Upper bound on suffixed names tried within one second.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// File-system result store.
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// `{prefix}_{YYYYMMDD_HHMMSS}.json`, or `{prefix}_{YYYYMMDD_HHMMSS}_{n}.json` for n > 0.
    pub fn file_name(prefix: &str, at: &DateTime<Local>, attempt: u32) -> String {
        let stamp = at.format("%Y%m%d_%H%M%S");
        if attempt == 0 {
            format!("{}_{}.json", prefix, stamp)
        } else {
            format!("{}_{}_{}.json", prefix, stamp, attempt)
        }
    }

    /// Serialize as a JSON array with 4-space indentation.
    fn to_json(records: &[PersistedRecord]) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records
            .serialize(&mut ser)
            .map_err(|e| DomainError::Persist(format!("serialize records: {}", e)))?;
        Ok(buf)
    }

    /// Writes `records` using `at` as the file timestamp.
    pub async fn save_at(
        &self,
        prefix: &str,
        records: &[PersistedRecord],
        at: DateTime<Local>,
    ) -> Result<PathBuf, DomainError> {
        let json = Self::to_json(records)?;
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| DomainError::Persist(format!("create output dir: {}", e)))?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let path = self.base_dir.join(Self::file_name(prefix, &at, attempt));
            let mut f = match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(f) => f,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(DomainError::Persist(format!("create file: {}", e))),
            };
            f.write_all(&json)
                .await
                .map_err(|e| DomainError::Persist(format!("write file: {}", e)))?;
            f.flush()
                .await
                .map_err(|e| DomainError::Persist(format!("flush file: {}", e)))?;

            info!(
                path = %path.display(),
                count = records.len(),
                "Results saved to {}", path.display()
            );
            return Ok(path);
        }

        Err(DomainError::Persist(format!(
            "no free file name for prefix {} after {} attempts",
            prefix, MAX_NAME_ATTEMPTS
        )))
    }
}

#[async_trait::async_trait]
impl ResultStore for JsonFileStore {
    async fn save_records(
        &self,
        prefix: &str,
        records: &[PersistedRecord],
    ) -> Result<PathBuf, DomainError> {
        self.save_at(prefix, records, Local::now()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sentiment;
    use chrono::TimeZone;

    fn record(id: i64) -> PersistedRecord {
        PersistedRecord {
            id,
            title: format!("title {}", id),
            body: "body".to_string(),
            label: "POSITIVE".to_string(),
            score: 0.9876,
            sentiment: Sentiment::Positive,
        }
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 10, 5, 14, 3, 9).unwrap()
    }

    #[test]
    fn test_file_name_format() {
        assert_eq!(
            JsonFileStore::file_name("sentiment_results", &fixed_time(), 0),
            "sentiment_results_20241005_140309.json"
        );
        assert_eq!(
            JsonFileStore::file_name("sentiment_results", &fixed_time(), 2),
            "sentiment_results_20241005_140309_2.json"
        );
    }

    #[tokio::test]
    async fn test_save_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let path = store
            .save_at("sentiment_results", &[record(1)], fixed_time())
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n    {\n        \"id\": 1,"));
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[tokio::test]
    async fn test_same_second_saves_do_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let first = store
            .save_at("run", &[record(1)], fixed_time())
            .await
            .unwrap();
        let second = store
            .save_at("run", &[record(2), record(3)], fixed_time())
            .await
            .unwrap();

        assert_ne!(first, second);
        assert!(second.ends_with("run_20241005_140309_1.json"));
        let kept: Vec<serde_json::Value> =
            serde_json::from_str(&std::fs::read_to_string(&first).unwrap()).unwrap();
        assert_eq!(kept.len(), 1);
    }

    #[tokio::test]
    async fn test_save_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("dumps");
        let store = JsonFileStore::new(&nested);
        let path = store.save_records("x", &[record(1)]).await.unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }
}
