//! The gateway entity.
//!
//! A gateway is one remote endpoint candidate: an immutable identity (its
//! URL) plus the mutable health state the pool records against it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One remote endpoint candidate in the pool.
///
/// Identity is the `url` field. The owned set is replaced wholesale by
/// remote snapshots and by re-scoring, so two `Gateway` values describe the
/// same endpoint exactly when their URLs match — never by object identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gateway {
    /// Stable identifier, also the dial target.
    pub url: String,

    /// Comparable quality signal; higher is better. Bounded below by
    /// [`Gateway::MIN_SCORE`].
    #[serde(default)]
    pub score: f64,

    /// Cycle-scoped exclusion flag. Cleared at the start of every fetch
    /// attempt and re-derived from that attempt's outcome.
    #[serde(default)]
    pub disabled: bool,
}

impl Gateway {
    /// Score of an endpoint with no proven signal.
    pub const MIN_SCORE: f64 = 0.0;

    /// Create a gateway with no recorded signal.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            score: Self::MIN_SCORE,
            disabled: false,
        }
    }

    /// Create a gateway with a recorded score.
    #[must_use]
    pub fn with_score(url: impl Into<String>, score: f64) -> Self {
        Self {
            url: url.into(),
            score,
            disabled: false,
        }
    }

    /// Whether this gateway has no positive signal yet.
    #[must_use]
    pub fn is_unproven(&self) -> bool {
        self.score <= Self::MIN_SCORE
    }
}

impl fmt::Display for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} score={:.3} disabled={}",
            self.url, self.score, self.disabled
        )
    }
}
