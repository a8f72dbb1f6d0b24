//! Snapshot repository trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::api::{StudyPlan, Subject};

/// Storage key for the raw subject list.
pub const SUBJECTS_KEY: &str = "subjects";

/// Storage key for the latest generated plan.
pub const SCHEDULE_KEY: &str = "current_schedule";

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors raised by snapshot storage backends.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("no snapshot stored under key '{key}'")]
    NotFound { key: String },
    #[error("failed to (de)serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("storage failure: {0}")]
    Storage(String),
}

impl RepositoryError {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }
}

/// Abstract snapshot storage for profiles and plans.
///
/// Implementations store plain serialized data under the fixed keys;
/// there is no versioning and no durability guarantee beyond what the
/// backend itself provides.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Store the raw subject list under [`SUBJECTS_KEY`].
    async fn store_subjects(&self, subjects: &[Subject]) -> RepositoryResult<()>;

    /// Fetch the stored subject list.
    async fn fetch_subjects(&self) -> RepositoryResult<Vec<Subject>>;

    /// Store the latest plan under [`SCHEDULE_KEY`].
    async fn store_plan(&self, plan: &StudyPlan) -> RepositoryResult<()>;

    /// Fetch the latest stored plan.
    async fn fetch_plan(&self) -> RepositoryResult<StudyPlan>;

    /// Whether the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Drop all stored snapshots.
    async fn clear(&self) -> RepositoryResult<()>;
}
