//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or an open transaction) as the first argument.

pub mod admission_repo;
pub mod queue_repo;
pub mod request_repo;

pub use admission_repo::{AdmissionOutcome, AdmissionRepo};
pub use queue_repo::QueueRepo;
pub use request_repo::RequestRepo;
