//! Pool configuration.

/// Configuration for a [`crate::GatewayManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Gateway-information server host. When the pool is empty, the
    /// scheduling loop targets this host for its first fetch; the gateway
    /// list in that response seeds the pool.
    pub bootstrap_host: String,

    /// Task count requested by the bootstrap fetch path.
    pub default_task_count: usize,
}

impl PoolConfig {
    /// Task count used when none is configured.
    pub const DEFAULT_TASK_COUNT: usize = 1;

    /// Create a configuration with the given bootstrap host.
    #[must_use]
    pub fn new(bootstrap_host: impl Into<String>) -> Self {
        Self {
            bootstrap_host: bootstrap_host.into(),
            default_task_count: Self::DEFAULT_TASK_COUNT,
        }
    }

    /// Set the task count requested by the bootstrap fetch path.
    #[must_use]
    pub fn with_default_task_count(mut self, count: usize) -> Self {
        self.default_task_count = count;
        self
    }
}
