//! Change-set pool configuration.

/// Change-set pool configuration.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum number of released instances kept for reuse
    pub max_pooled: usize,
    /// Record capacity preallocated for freshly constructed instances
    pub initial_capacity: usize,
    /// Record buffers larger than this are shrunk before being pooled
    pub max_retained_capacity: usize,
    /// Track per-type change statistics on acquired instances
    pub enable_stats: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_pooled: 64,
            initial_capacity: 16,
            max_retained_capacity: 1024,
            enable_stats: false,
        }
    }
}
