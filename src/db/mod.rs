//! Snapshot persistence for profiles and generated plans.
//!
//! The core itself performs no I/O: callers hand serializable plain data
//! to a [`repository::SnapshotRepository`] keyed by fixed string
//! identifiers, best-effort. The in-memory [`LocalRepository`] is the
//! default backend; alternative backends implement the same trait.

pub mod checksum;
pub mod repositories;
pub mod repository;

pub use repositories::LocalRepository;
pub use repository::{
    RepositoryError, RepositoryResult, SnapshotRepository, SCHEDULE_KEY, SUBJECTS_KEY,
};
