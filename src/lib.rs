#![doc(test(attr(deny(warnings))))]

//! Spendboard computes executive purchasing KPIs and chart-ready aggregates
//! from purchase orders and their line items, and ships a small CLI around it.

pub mod cli;
pub mod currency;
pub mod utils;

pub use cli::system_clock::SystemClock;
pub use spendboard_core;
pub use spendboard_domain;

use spendboard_domain::{DashboardStats, PeriodSelector, Purchase, PurchaseItem};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Spendboard tracing initialized.");
    });
}

/// Computes dashboard stats against the system clock.
pub fn compute_dashboard(
    items: &[PurchaseItem],
    purchases: &[Purchase],
    period: &PeriodSelector,
) -> DashboardStats {
    spendboard_core::Aggregator::new(&SystemClock).compute(items, purchases, period)
}
