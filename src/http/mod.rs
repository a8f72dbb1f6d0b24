//! HTTP server module for the study-plan backend.
//!
//! Exposes the planning service as a small REST API. Handlers parse and
//! validate requests, delegate to the service layer, and snapshot results
//! through the repository; no business logic lives here.

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub use router::create_router;

#[cfg(feature = "http-server")]
pub use state::AppState;
