//! Structured pool events.
//!
//! The pool performs no logging I/O of its own; it hands [`PoolEvent`]s to
//! an injected [`PoolObserver`]. The tracing-backed observer is the default
//! wiring, so out of the box events land in the `tracing` stream.

use crate::gateway::Gateway;
use tracing::{error, trace};

/// Events emitted by the pool at its decision points.
#[derive(Debug, Clone)]
pub enum PoolEvent {
    /// The owned gateway set was re-scored and replaced.
    GatewaySetUpdated {
        /// The set as it now stands.
        gateways: Vec<Gateway>,
    },

    /// A gateway returned no work and sits out the rest of this cycle.
    GatewayDisabled {
        /// URL of the disabled gateway.
        url: String,
    },

    /// A task fetch failed at the transport boundary and was absorbed.
    FetchFailed {
        /// Host the fetch targeted.
        host: String,
        /// Rendered transport error.
        error: String,
    },
}

/// Receiver for pool events.
pub trait PoolObserver: Send + Sync {
    /// Handle one event. Called synchronously from within the fetch cycle;
    /// implementations must not block.
    fn on_event(&self, event: &PoolEvent);
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PoolObserver for NoopObserver {
    fn on_event(&self, _event: &PoolEvent) {}
}

/// Observer that renders pool events as structured `tracing` records.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PoolObserver for TracingObserver {
    fn on_event(&self, event: &PoolEvent) {
        match event {
            PoolEvent::GatewaySetUpdated { gateways } => {
                for gateway in gateways {
                    trace!(gateway = %gateway, "gateway updated");
                }
            }
            PoolEvent::GatewayDisabled { url } => {
                trace!(url = %url, "gateway disabled for the next iteration: no tasks returned");
            }
            PoolEvent::FetchFailed { host, error } => {
                error!(host = %host, error = %error, "failed fetching gateway tasks");
            }
        }
    }
}
