//! In-memory snapshot repository.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{StudyPlan, Subject};
use crate::db::repository::{
    RepositoryError, RepositoryResult, SnapshotRepository, SCHEDULE_KEY, SUBJECTS_KEY,
};

/// Keeps snapshots in a process-local map. Contents die with the process,
/// which is exactly the best-effort contract.
#[derive(Default)]
pub struct LocalRepository {
    store: RwLock<HashMap<String, serde_json::Value>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn put(&self, key: &str, value: serde_json::Value) {
        self.store.write().insert(key.to_string(), value);
    }

    fn get(&self, key: &str) -> RepositoryResult<serde_json::Value> {
        self.store
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(key))
    }
}

#[async_trait]
impl SnapshotRepository for LocalRepository {
    async fn store_subjects(&self, subjects: &[Subject]) -> RepositoryResult<()> {
        let value = serde_json::to_value(subjects)?;
        self.put(SUBJECTS_KEY, value);
        Ok(())
    }

    async fn fetch_subjects(&self) -> RepositoryResult<Vec<Subject>> {
        let value = self.get(SUBJECTS_KEY)?;
        Ok(serde_json::from_value(value)?)
    }

    async fn store_plan(&self, plan: &StudyPlan) -> RepositoryResult<()> {
        let value = serde_json::to_value(plan)?;
        self.put(SCHEDULE_KEY, value);
        Ok(())
    }

    async fn fetch_plan(&self) -> RepositoryResult<StudyPlan> {
        let value = self.get(SCHEDULE_KEY)?;
        Ok(serde_json::from_value(value)?)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn clear(&self) -> RepositoryResult<()> {
        self.store.write().clear();
        Ok(())
    }
}
