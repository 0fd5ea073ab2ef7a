//! Descriptive statistics over a list of numbers.
//!
//! [`compute_stats`] produces the full [`StatsResult`] record; [`basic_stats`]
//! is the lighter mean/max/min variant. Both are pure and safe to call from
//! any number of requests at once.

pub mod basic;
pub mod mode;
pub mod summary;
pub mod utility;

pub use basic::{BasicStats, basic_stats};
pub use summary::{StatsResult, compute_stats};
