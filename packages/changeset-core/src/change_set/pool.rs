use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::config::PoolConfig;
use crate::error::Result;

use super::change_set::ChangeSet;

static GLOBAL_POOL: OnceLock<ChangeSetPool> = OnceLock::new();

/// Free list of reusable change sets.
///
/// `acquire` and `release` may be called concurrently from any number of
/// threads. Every acquired instance is empty with its count set to the
/// requested initial count, whether it was recycled or freshly built.
#[derive(Debug)]
pub struct ChangeSetPool {
    /// Pool configuration
    config: PoolConfig,
    /// Released instances waiting for reuse
    free: Mutex<Vec<ChangeSet>>,
    /// Instances constructed because the free list was empty
    created: AtomicUsize,
    /// Instances handed out from the free list
    reused: AtomicUsize,
}

impl ChangeSetPool {
    /// Creates an empty pool.
    pub fn new(config: PoolConfig) -> Self {
        tracing::debug!(
            max_pooled = config.max_pooled,
            initial_capacity = config.initial_capacity,
            enable_stats = config.enable_stats,
            "Creating change set pool"
        );
        Self {
            free: Mutex::new(Vec::new()),
            config,
            created: AtomicUsize::new(0),
            reused: AtomicUsize::new(0),
        }
    }

    /// Returns the process-wide pool, building it with default settings on
    /// first use.
    pub fn global() -> &'static ChangeSetPool {
        GLOBAL_POOL.get_or_init(|| ChangeSetPool::new(PoolConfig::default()))
    }

    /// Installs the process-wide pool with `config`.
    ///
    /// # Returns
    /// `false` if the global pool was already in use; its configuration is
    /// left unchanged.
    pub fn init_global(config: PoolConfig) -> bool {
        let mut installed = false;
        GLOBAL_POOL.get_or_init(|| {
            installed = true;
            ChangeSetPool::new(config)
        });
        installed
    }

    /// Takes a clean change set from the pool, constructing one if the pool
    /// is empty.
    ///
    /// # Arguments
    /// * `initial_count` - Size of the sequence before any change (default 0)
    pub fn acquire(&self, initial_count: Option<usize>) -> ChangeSet {
        let recycled = self.free.lock().pop();

        let mut change_set = match recycled {
            Some(change_set) => {
                self.reused.fetch_add(1, Ordering::Relaxed);
                change_set
            }
            None => {
                self.created.fetch_add(1, Ordering::Relaxed);
                tracing::trace!("Change set pool empty, constructing new instance");
                ChangeSet::with_capacity(self.config.initial_capacity)
            }
        };

        change_set.reset(initial_count.unwrap_or(0), self.config.enable_stats);
        change_set
    }

    /// Clears `change_set` and returns it to the free list.
    ///
    /// The instance is dropped instead when the pool already holds
    /// `max_pooled` instances.
    pub fn release(&self, mut change_set: ChangeSet) {
        change_set.clear(self.config.max_retained_capacity);

        let mut free = self.free.lock();
        if free.len() >= self.config.max_pooled {
            drop(free);
            tracing::trace!(
                max_pooled = self.config.max_pooled,
                "Change set pool full, dropping released instance"
            );
            return;
        }
        free.push(change_set);
    }

    /// Concatenates two change sets like [`ChangeSet::merge`], acquiring the
    /// result from this pool.
    ///
    /// # Errors
    /// Same as [`ChangeSet::merge`].
    pub fn merge(&self, first: &ChangeSet, second: &ChangeSet) -> Result<ChangeSet> {
        ChangeSet::merge_from(self, first, second)
    }

    /// Number of instances currently waiting for reuse.
    pub fn len(&self) -> usize {
        self.free.lock().len()
    }

    /// Returns `true` if no instance is waiting for reuse.
    pub fn is_empty(&self) -> bool {
        self.free.lock().is_empty()
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Total instances constructed by this pool.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }

    /// Total acquisitions served from the free list.
    pub fn reused(&self) -> usize {
        self.reused.load(Ordering::Relaxed)
    }
}

impl Default for ChangeSetPool {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}
