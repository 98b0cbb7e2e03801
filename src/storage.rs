// src/storage.rs

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tokio::fs;

use crate::error::AppError;
use crate::models::score_record::ScoreRecord;

/// Retention cap per quiz: when a record set grows past this, the oldest
/// records are dropped.
pub const MAX_SCORES_PER_QUIZ: usize = 1000;

/// File-backed store of per-quiz record sets.
///
/// One pretty-printed JSON array per quiz id, at `<dir>/<quizId>_scores.json`.
/// Writes to the same quiz id are serialized through a per-key async mutex,
/// so two concurrent saves can never lose each other's record. Each persist
/// goes through a temp file and a rename, so readers observe either the old
/// or the new array, never a torn one. Reads take no lock.
pub struct ScoreStore {
    dir: PathBuf,
    write_locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl ScoreStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            write_locks: Mutex::new(HashMap::new()),
        })
    }

    /// `quiz_id` must already be sanitized; it is embedded in the file name.
    fn scores_file(&self, quiz_id: &str) -> PathBuf {
        self.dir.join(format!("{quiz_id}_scores.json"))
    }

    fn write_lock(&self, quiz_id: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.write_locks.lock().unwrap();
        locks.entry(quiz_id.to_string()).or_default().clone()
    }

    /// Load the full record set for a quiz, oldest first.
    ///
    /// A missing file is a quiz nobody has attempted yet, and an unreadable
    /// or corrupt file degrades to the same empty set. Stats availability
    /// wins over strict correctness here; corruption is logged, not
    /// surfaced.
    pub async fn load(&self, quiz_id: &str) -> Vec<ScoreRecord> {
        let path = self.scores_file(quiz_id);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    "Corrupt score file {}, treating as empty: {}",
                    path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Append one record to a quiz's set and persist the whole set.
    ///
    /// Runs the read-modify-write cycle under the per-key lock and enforces
    /// the retention cap before writing.
    pub async fn append(&self, quiz_id: &str, record: ScoreRecord) -> Result<(), AppError> {
        let lock = self.write_lock(quiz_id);
        let _guard = lock.lock().await;

        let mut records = self.load(quiz_id).await;
        records.push(record);

        if records.len() > MAX_SCORES_PER_QUIZ {
            let excess = records.len() - MAX_SCORES_PER_QUIZ;
            records.drain(..excess);
        }

        self.persist(quiz_id, &records).await
    }

    /// Atomic replace: write the array to a sibling temp file, then rename
    /// it over the target.
    async fn persist(&self, quiz_id: &str, records: &[ScoreRecord]) -> Result<(), AppError> {
        let path = self.scores_file(quiz_id);
        let tmp = self.dir.join(format!("{quiz_id}_scores.json.tmp"));

        let json = serde_json::to_vec_pretty(records)?;
        fs::write(&tmp, &json).await?;
        fs::rename(&tmp, &path).await?;

        Ok(())
    }
}
