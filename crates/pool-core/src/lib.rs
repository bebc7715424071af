//! # Pool Core
//!
//! Core types and collaborator contracts for the gateway pool.
//!
//! This crate provides the foundational pieces used throughout the pool:
//! - The [`Gateway`] entity and its scoring floor
//! - Task and result-submission types
//! - The [`GatewayTransport`] and [`GatewayScorer`] collaborator contracts
//! - The [`PoolObserver`] event hook
//! - Transport error taxonomy

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod events;
pub mod gateway;
pub mod identity;
pub mod scorer;
pub mod task;
pub mod transport;

// Re-export commonly used types
pub use error::TransportError;
pub use events::{NoopObserver, PoolEvent, PoolObserver, TracingObserver};
pub use gateway::Gateway;
pub use identity::Credential;
pub use scorer::{GatewayScorer, IdentityScorer};
pub use task::{GatewayTask, TaskOutcome, TaskRef};
pub use transport::{FetchedBatch, GatewayTransport};
