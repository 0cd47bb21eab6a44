//! Change-set engine for incremental list updates.
//!
//! Records insert, update, remove and move operations (and their contiguous
//! range variants) against an ordered sequence, tracks the resulting sequence
//! length, merges independently built logs with index re-basing, and recycles
//! change-set instances through a shared pool.

pub mod change;
pub mod change_set;
pub mod config;
pub mod error;

pub use change::{Change, ChangeType, RenderInfo};
pub use change_set::{ChangeSet, ChangeSetPool, ChangeSetStats};
pub use config::PoolConfig;
pub use error::{ChangeSetError, Result};
