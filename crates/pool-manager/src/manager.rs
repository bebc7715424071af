//! The gateway manager.
//!
//! Single authoritative owner of the in-memory gateway set. All reads
//! (selection) and writes (post-fetch updates, re-scoring) go through it.

use crate::config::PoolConfig;
use crate::rng::{RandomSource, ThreadRngSource};
use arc_swap::ArcSwap;
use pool_core::{
    Credential, Gateway, GatewayScorer, GatewayTask, GatewayTransport, PoolEvent, PoolObserver,
    TaskOutcome, TracingObserver, TransportError,
};
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Owns the gateway set and mediates every interaction with it.
///
/// The set lives in an atomically-replaceable cell: [`best_gateway`] reads
/// a lock-free snapshot, while the whole fetch cycle runs under an internal
/// async mutex so concurrent [`fetch_tasks`] calls serialize instead of
/// interleaving their reset/disable/replace steps.
///
/// [`best_gateway`]: GatewayManager::best_gateway
/// [`fetch_tasks`]: GatewayManager::fetch_tasks
pub struct GatewayManager {
    config: PoolConfig,
    transport: Arc<dyn GatewayTransport>,
    scorer: Arc<dyn GatewayScorer>,
    observer: Arc<dyn PoolObserver>,
    random: Arc<dyn RandomSource>,
    gateways: ArcSwap<Vec<Gateway>>,
    fetch_cycle: Mutex<()>,
}

impl GatewayManager {
    /// Start building a manager. Transport and scorer are required;
    /// observer and random source have tracing-backed and thread-RNG
    /// defaults.
    #[must_use]
    pub fn builder(
        config: PoolConfig,
        transport: Arc<dyn GatewayTransport>,
        scorer: Arc<dyn GatewayScorer>,
    ) -> GatewayManagerBuilder {
        GatewayManagerBuilder {
            config,
            transport,
            scorer,
            observer: Arc::new(TracingObserver),
            random: Arc::new(ThreadRngSource),
        }
    }

    /// Host used to seed an empty pool.
    #[must_use]
    pub fn bootstrap_host(&self) -> &str {
        &self.config.bootstrap_host
    }

    /// Snapshot of the currently-owned gateway set.
    #[must_use]
    pub fn gateways(&self) -> Vec<Gateway> {
        self.gateways.load().as_ref().clone()
    }

    /// The gateway with the highest recorded score, or `None` on an empty
    /// pool.
    ///
    /// When no gateway has any positive signal (every score sits at
    /// [`Gateway::MIN_SCORE`]) the pick is uniformly random over the whole
    /// set rather than the max-tie winner, so exploratory load reaches
    /// every candidate.
    #[must_use]
    pub fn best_gateway(&self) -> Option<Gateway> {
        let gateways = self.gateways.load();
        let best = gateways
            .iter()
            .max_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal))?;
        if best.is_unproven() {
            let index = self.random.pick_index(gateways.len());
            return gateways.get(index).cloned();
        }
        Some(best.clone())
    }

    /// Fetch up to `task_count` tasks from the gateway at `target_url`.
    ///
    /// One full cycle: every `disabled` flag is cleared, the transport call
    /// runs, an empty result disables the target for the rest of this
    /// cycle, and the scorer re-ranks the set. A transport failure is
    /// absorbed into an empty result; the cycle still completes and the
    /// scorer still runs.
    pub async fn fetch_tasks(
        &self,
        target_url: &str,
        credential: &Credential,
        task_count: usize,
    ) -> Vec<GatewayTask> {
        let _cycle = self.fetch_cycle.lock().await;

        // Disablement is a single-cycle penalty: clear every flag before
        // this attempt and re-derive the target's from its outcome below.
        let mut gateways = self.gateways.load().as_ref().clone();
        for gateway in &mut gateways {
            gateway.disabled = false;
        }

        let mut tasks = Vec::new();
        match self
            .transport
            .fetch_tasks(target_url, credential, task_count)
            .await
        {
            Ok(batch) => {
                tasks = batch.tasks;
                // The remote list is an authoritative snapshot, not a delta.
                gateways = batch.gateways;
            }
            Err(error) => {
                self.observer.on_event(&PoolEvent::FetchFailed {
                    host: target_url.to_owned(),
                    error: error.to_string(),
                });
            }
        }

        // An empty result is ambiguous: genuinely no work, or a failed
        // call. Either way the target sits out the rest of this cycle.
        if tasks.is_empty() {
            if let Some(gateway) = gateways.iter_mut().find(|g| g.url == target_url) {
                gateway.disabled = true;
                self.observer.on_event(&PoolEvent::GatewayDisabled {
                    url: gateway.url.clone(),
                });
            }
        }

        self.replace_scored(gateways);
        tasks
    }

    /// Fetch from the configured bootstrap host with the configured task
    /// count. The gateway list in the response seeds an empty pool.
    pub async fn fetch_from_bootstrap(&self, credential: &Credential) -> Vec<GatewayTask> {
        let host = self.config.bootstrap_host.clone();
        self.fetch_tasks(&host, credential, self.config.default_task_count)
            .await
    }

    /// Report a completed or failed task back to its originating gateway.
    ///
    /// Pure forwarding; no local state changes. Unlike [`fetch_tasks`], a
    /// transport failure propagates to the caller: a silently lost result
    /// is a correctness issue, a lost fetch opportunity is not.
    ///
    /// # Errors
    /// Returns the transport error unchanged.
    ///
    /// [`fetch_tasks`]: GatewayManager::fetch_tasks
    pub async fn submit_result(
        &self,
        credential: &Credential,
        task: &GatewayTask,
        outcome: TaskOutcome,
    ) -> Result<(), TransportError> {
        self.transport
            .submit_result(credential, task.to_ref(), outcome)
            .await
    }

    /// Run the scorer over `gateways` and install its output as the owned
    /// set. The scorer is total; its output always replaces the set.
    fn replace_scored(&self, gateways: Vec<Gateway>) {
        let scored = self.scorer.score(gateways);
        self.observer.on_event(&PoolEvent::GatewaySetUpdated {
            gateways: scored.clone(),
        });
        self.gateways.store(Arc::new(scored));
    }
}

/// Builder for [`GatewayManager`].
pub struct GatewayManagerBuilder {
    config: PoolConfig,
    transport: Arc<dyn GatewayTransport>,
    scorer: Arc<dyn GatewayScorer>,
    observer: Arc<dyn PoolObserver>,
    random: Arc<dyn RandomSource>,
}

impl GatewayManagerBuilder {
    /// Replace the default tracing-backed observer.
    #[must_use]
    pub fn observer(mut self, observer: Arc<dyn PoolObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Replace the default thread-RNG random source.
    #[must_use]
    pub fn random_source(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    /// Build the manager with an empty gateway set.
    #[must_use]
    pub fn build(self) -> GatewayManager {
        GatewayManager {
            config: self.config,
            transport: self.transport,
            scorer: self.scorer,
            observer: self.observer,
            random: self.random,
            gateways: ArcSwap::from_pointee(Vec::new()),
            fetch_cycle: Mutex::new(()),
        }
    }
}
