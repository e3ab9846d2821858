//! spendboard-core
//!
//! Aggregation engine for purchasing dashboards.
//! Depends on spendboard-domain. No CLI, no terminal I/O, no direct file access.

pub mod aggregator;
pub mod buckets;
pub mod enrich;
pub mod error;
pub mod filter;
pub mod input;
pub mod reduce;
pub mod source;
pub mod time;

#[cfg(test)]
mod tests;

pub use aggregator::*;
pub use buckets::OrderedBuckets;
pub use enrich::{enrich, EnrichedItem, PurchaseIndex};
pub use error::CoreError;
pub use filter::filter_period;
pub use reduce::*;
pub use source::*;
pub use time::{Clock, FixedClock};
