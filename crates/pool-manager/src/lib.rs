//! # Pool Manager
//!
//! Gateway selection and lifecycle engine for the gateway pool.
//!
//! This crate provides:
//! - [`GatewayManager`], the single owner of the in-memory gateway set
//! - Best-gateway selection with uniform-random exploration when no
//!   gateway has proven signal
//! - The fetch cycle: reset disable flags, delegate to the transport,
//!   disable on empty result, re-score
//! - Result submission forwarding
//! - [`RandomSource`] injection for deterministic selection under test

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod manager;
pub mod rng;

// Re-export main types
pub use config::PoolConfig;
pub use manager::{GatewayManager, GatewayManagerBuilder};
pub use rng::{RandomSource, SeededRngSource, ThreadRngSource};
