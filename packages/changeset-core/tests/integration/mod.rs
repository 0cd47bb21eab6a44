//! Integration test suite.
//!
//! 1. Change set counting and ranged changes
//! 2. Merge composition
//! 3. Pool lifecycle and concurrency

pub mod change_set_tests;
pub mod helpers;
