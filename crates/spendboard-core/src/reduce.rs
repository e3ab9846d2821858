//! Scalar and grouped reductions over the period-filtered item set.

use std::collections::HashSet;

use spendboard_domain::{ChartPoint, EvolutionPoint, PeriodSelector, TimeBucket};

use crate::{buckets::OrderedBuckets, enrich::EnrichedItem};

/// Number of bars kept in each ranked chart.
pub const CHART_LIMIT: usize = 10;

/// Order-independent KPI scalars.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScalarTotals {
    pub unique_purchases: usize,
    pub total_spent: f64,
    pub total_saving: f64,
    pub unique_suppliers: usize,
    pub unique_materials: usize,
}

impl ScalarTotals {
    pub fn from_items(items: &[EnrichedItem<'_>]) -> Self {
        let mut purchases = HashSet::new();
        let mut suppliers = HashSet::new();
        let mut materials = HashSet::new();
        let mut totals = ScalarTotals::default();

        for entry in items {
            let item = entry.item;
            purchases.insert(item.purchase_id.as_str());
            if let Some(supplier) = item.supplier_key() {
                suppliers.insert(supplier);
            }
            materials.insert(item.material_id.as_deref());
            totals.total_spent += item.price_or_zero();
            totals.total_saving += item.saving_or_zero();
        }

        totals.unique_purchases = purchases.len();
        totals.unique_suppliers = suppliers.len();
        totals.unique_materials = materials.len();
        totals
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct SpendSaving {
    spent: f64,
    saving: f64,
}

fn group_spend<'a>(
    items: &[EnrichedItem<'a>],
    label: impl Fn(&EnrichedItem<'a>) -> &'a str,
) -> Vec<ChartPoint> {
    let mut buckets: OrderedBuckets<&'a str, f64> = OrderedBuckets::new();
    for entry in items {
        *buckets.upsert(label(entry)) += entry.item.price_or_zero();
    }
    buckets
        .into_entries()
        .into_iter()
        .map(|(name, value)| ChartPoint::new(name, value))
        .collect()
}

/// Spend per buyer of the parent purchase, untruncated, in first-encounter order.
pub fn group_spend_by_buyer(items: &[EnrichedItem<'_>]) -> Vec<ChartPoint> {
    group_spend(items, |entry| entry.buyer_label())
}

/// Spend per supplier name of the item itself, untruncated, in first-encounter order.
pub fn group_spend_by_supplier(items: &[EnrichedItem<'_>]) -> Vec<ChartPoint> {
    group_spend(items, |entry| entry.item.supplier_label())
}

/// Sorts descending by value and keeps the first `limit` points.
///
/// The sort is stable, so equal values keep their first-encounter order.
pub fn rank_top(mut points: Vec<ChartPoint>, limit: usize) -> Vec<ChartPoint> {
    points.sort_by(|a, b| b.value.total_cmp(&a.value));
    points.truncate(limit);
    points
}

/// Spend/saving time series bucketed according to the period mode.
///
/// Year mode always yields twelve points, January through December. All mode
/// yields one point per year-month that has items, in first-encounter order.
/// Month mode yields at most one point.
pub fn evolution_series(
    items: &[EnrichedItem<'_>],
    period: &PeriodSelector,
) -> Vec<EvolutionPoint> {
    let mut buckets: OrderedBuckets<TimeBucket, SpendSaving> = OrderedBuckets::new();
    if let PeriodSelector::Year { .. } = period {
        for month in 1..=12 {
            buckets.upsert(TimeBucket::Month { month });
        }
    }

    for entry in items {
        let bucket = buckets.upsert(period.bucket_for(entry.date));
        bucket.spent += entry.item.price_or_zero();
        bucket.saving += entry.item.saving_or_zero();
    }

    buckets
        .into_entries()
        .into_iter()
        .map(|(bucket, sums)| EvolutionPoint::new(bucket, sums.spent, sums.saving))
        .collect()
}
