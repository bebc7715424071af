//! The transport collaborator contract.
//!
//! The pool owns no wire protocol. All network I/O happens behind
//! [`GatewayTransport`]; timeouts, cancellation, and wire-level retries
//! live inside implementations and surface here as [`TransportError`].

use crate::error::TransportError;
use crate::gateway::Gateway;
use crate::identity::Credential;
use crate::task::{GatewayTask, TaskOutcome, TaskRef};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result of one task-fetch call: the offered tasks plus the remote side's
/// authoritative snapshot of the gateway set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchedBatch {
    /// Tasks offered to the worker, possibly none.
    #[serde(default)]
    pub tasks: Vec<GatewayTask>,

    /// The gateway set as the remote side knows it. Replaces the pool's
    /// owned set wholesale; it is a snapshot, not a delta.
    #[serde(default)]
    pub gateways: Vec<Gateway>,
}

/// Network client the pool delegates to.
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    /// Fetch up to `task_count` tasks from `host` on behalf of `credential`.
    async fn fetch_tasks(
        &self,
        host: &str,
        credential: &Credential,
        task_count: usize,
    ) -> Result<FetchedBatch, TransportError>;

    /// Report a completed or failed task back to its originating gateway.
    async fn submit_result(
        &self,
        credential: &Credential,
        task: TaskRef,
        outcome: TaskOutcome,
    ) -> Result<(), TransportError>;
}
