//! Dashboard aggregation: join, period filter, scalar reduction, grouped reduction.

use serde_json::Value;
use spendboard_domain::{DashboardStats, PeriodSelector, Purchase, PurchaseItem};

use crate::{
    enrich::{enrich, PurchaseIndex},
    filter::filter_period,
    input::{items_from_value, period_from_value, purchases_from_value},
    reduce::{
        evolution_series, group_spend_by_buyer, group_spend_by_supplier, rank_top, ScalarTotals,
        CHART_LIMIT,
    },
    time::Clock,
    CoreError,
};

/// Stateless KPI calculator. The clock is only consulted for items whose
/// parent purchase (or its creation date) is unavailable.
#[derive(Clone, Copy)]
pub struct Aggregator<'c> {
    clock: &'c dyn Clock,
}

impl<'c> Aggregator<'c> {
    pub fn new(clock: &'c dyn Clock) -> Self {
        Self { clock }
    }

    /// Computes a fresh [`DashboardStats`] for `period`.
    ///
    /// Empty collections produce all-zero stats. Dangling purchase references
    /// and absent fields are absorbed, never reported.
    pub fn compute(
        &self,
        items: &[PurchaseItem],
        purchases: &[Purchase],
        period: &PeriodSelector,
    ) -> DashboardStats {
        let index = PurchaseIndex::build(purchases);
        let enriched = enrich(items, &index, self.clock);
        let filtered = filter_period(enriched, period);

        let totals = ScalarTotals::from_items(&filtered);
        let unresolved_items = filtered.iter().filter(|entry| !entry.is_resolved()).count();

        tracing::debug!(
            items = items.len(),
            purchases = purchases.len(),
            filtered = filtered.len(),
            unresolved = unresolved_items,
            mode = %period.mode(),
            %period,
            "computed dashboard stats"
        );

        DashboardStats {
            unique_purchases: totals.unique_purchases,
            total_spent: totals.total_spent,
            total_saving: totals.total_saving,
            unique_suppliers: totals.unique_suppliers,
            unique_materials: totals.unique_materials,
            buyer_chart_data: rank_top(group_spend_by_buyer(&filtered), CHART_LIMIT),
            supplier_chart_data: rank_top(group_spend_by_supplier(&filtered), CHART_LIMIT),
            evolution_chart_data: evolution_series(&filtered, period),
            filtered_items: filtered.len(),
            unresolved_items,
        }
    }

    /// Entry point for untyped callers: validates the record shapes and the
    /// selector before computing.
    pub fn compute_json(
        &self,
        items: &Value,
        purchases: &Value,
        period: &Value,
    ) -> Result<DashboardStats, CoreError> {
        let items = items_from_value(items)?;
        let purchases = purchases_from_value(purchases)?;
        let period = period_from_value(period)?;
        Ok(self.compute(&items, &purchases, &period))
    }
}
