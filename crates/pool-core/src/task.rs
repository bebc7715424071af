//! Task and result-submission types.
//!
//! A [`GatewayTask`] is the unit of work a gateway hands to a worker. When
//! the worker reports back, the pool translates it into the wire-level
//! [`TaskRef`] and attaches the optional [`TaskOutcome`] fields.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A unit of work offered by a gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayTask {
    /// Unique task identifier assigned by the gateway.
    pub id: String,

    /// The work content itself.
    pub prompt: String,

    /// URL of the gateway that supplied this task. Result submission is
    /// routed back to it.
    pub gateway_url: String,
}

impl GatewayTask {
    /// Create a task.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        gateway_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            gateway_url: gateway_url.into(),
        }
    }

    /// Wire-level reference for submitting this task's result.
    #[must_use]
    pub fn to_ref(&self) -> TaskRef {
        TaskRef {
            id: self.id.clone(),
            prompt: self.prompt.clone(),
            gateway_host: self.gateway_url.clone(),
        }
    }
}

/// Wire-level task reference accompanying a result submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRef {
    /// Unique task identifier assigned by the gateway.
    pub id: String,

    /// The original work content.
    pub prompt: String,

    /// Host of the gateway the task originated from.
    pub gateway_host: String,
}

/// Optional outcome fields accompanying a result submission.
///
/// Every field is optional; a submission may carry a scored artifact, a
/// bare error, or any mix the caller has on hand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskOutcome {
    /// Quality score awarded to the result.
    pub score: Option<f64>,

    /// Identifier of the worker responsible for the result.
    pub worker_id: Option<String>,

    /// Rank of that worker within its cohort.
    pub worker_rank: Option<u32>,

    /// Rating of that worker.
    pub worker_rating: Option<f64>,

    /// The produced artifact, if any.
    pub artifact: Option<Bytes>,

    /// Error description when the task failed.
    pub error: Option<String>,
}

impl TaskOutcome {
    /// Outcome with no fields set; populate with the `with_*` methods.
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    /// Outcome describing a failed task.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Set the result score.
    #[must_use]
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Set the responsible worker's identifier.
    #[must_use]
    pub fn with_worker_id(mut self, worker_id: impl Into<String>) -> Self {
        self.worker_id = Some(worker_id.into());
        self
    }

    /// Set the responsible worker's rank.
    #[must_use]
    pub fn with_worker_rank(mut self, worker_rank: u32) -> Self {
        self.worker_rank = Some(worker_rank);
        self
    }

    /// Set the responsible worker's rating.
    #[must_use]
    pub fn with_worker_rating(mut self, worker_rating: f64) -> Self {
        self.worker_rating = Some(worker_rating);
        self
    }

    /// Attach the produced artifact.
    #[must_use]
    pub fn with_artifact(mut self, artifact: Bytes) -> Self {
        self.artifact = Some(artifact);
        self
    }
}
