//! The scoring collaborator contract.

use crate::gateway::Gateway;

/// Re-scoring policy over the gateway set.
///
/// Consumes the full set and returns a re-ordered/re-valued set of the same
/// or different cardinality. Total over any input including the empty set;
/// scoring never fails.
pub trait GatewayScorer: Send + Sync {
    /// Re-score the given gateways.
    fn score(&self, gateways: Vec<Gateway>) -> Vec<Gateway>;
}

/// Pass-through scorer that keeps every gateway exactly as recorded.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityScorer;

impl GatewayScorer for IdentityScorer {
    fn score(&self, gateways: Vec<Gateway>) -> Vec<Gateway> {
        gateways
    }
}
