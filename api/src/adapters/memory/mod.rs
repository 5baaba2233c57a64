//! In-memory adapters
//!
//! Implementations of repository traits that live for the process lifetime.

pub mod score_repo;

pub use score_repo::InMemoryScoreRepository;
