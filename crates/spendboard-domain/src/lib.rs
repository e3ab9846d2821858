//! spendboard-domain
//!
//! Pure purchasing records and dashboard output types.
//! No I/O, no CLI, no aggregation logic. Only data types, parsing helpers and core enums.

pub mod common;
pub mod period;
pub mod purchase;
pub mod stats;

pub use common::*;
pub use period::*;
pub use purchase::*;
pub use stats::*;
