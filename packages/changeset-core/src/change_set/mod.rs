//! Change sets, their pool, and merge.

#[allow(clippy::module_inception)]
mod change_set;
mod pool;
mod stats;

pub use change_set::ChangeSet;
pub use pool::ChangeSetPool;
pub use stats::ChangeSetStats;
