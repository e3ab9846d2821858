use spendboard_domain::{DashboardStats, PeriodSelector, Purchase, PurchaseItem};

use crate::{aggregator::Aggregator, CoreError};

pub const DEFAULT_PURCHASE_LIMIT: usize = 1000;
pub const DEFAULT_ITEM_LIMIT: usize = 2000;

/// Upstream provider of raw purchasing records.
///
/// Implementations return at most `limit` records; callers must not assume the
/// returned collections are complete.
pub trait RecordSource {
    fn list_purchases(&self, limit: usize) -> Result<Vec<Purchase>, CoreError>;
    fn list_items(&self, limit: usize) -> Result<Vec<PurchaseItem>, CoreError>;
}

/// Upper bounds requested from a [`RecordSource`] per snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotLimits {
    pub purchases: usize,
    pub items: usize,
}

impl Default for SnapshotLimits {
    fn default() -> Self {
        Self {
            purchases: DEFAULT_PURCHASE_LIMIT,
            items: DEFAULT_ITEM_LIMIT,
        }
    }
}

/// Records fetched together from one source.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub purchases: Vec<Purchase>,
    pub items: Vec<PurchaseItem>,
}

impl Snapshot {
    pub fn fetch(source: &dyn RecordSource, limits: SnapshotLimits) -> Result<Self, CoreError> {
        let purchases = source.list_purchases(limits.purchases)?;
        let items = source.list_items(limits.items)?;
        if purchases.len() >= limits.purchases || items.len() >= limits.items {
            tracing::info!(
                purchases = purchases.len(),
                items = items.len(),
                "snapshot reached its record limit; totals may be partial"
            );
        } else {
            tracing::debug!(
                purchases = purchases.len(),
                items = items.len(),
                "snapshot fetched"
            );
        }
        Ok(Self { purchases, items })
    }

    pub fn compute(&self, aggregator: &Aggregator<'_>, period: &PeriodSelector) -> DashboardStats {
        aggregator.compute(&self.items, &self.purchases, period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use chrono::NaiveDate;

    struct InMemorySource {
        purchases: Vec<Purchase>,
        items: Vec<PurchaseItem>,
    }

    impl RecordSource for InMemorySource {
        fn list_purchases(&self, limit: usize) -> Result<Vec<Purchase>, CoreError> {
            Ok(self.purchases.iter().take(limit).cloned().collect())
        }

        fn list_items(&self, limit: usize) -> Result<Vec<PurchaseItem>, CoreError> {
            Ok(self.items.iter().take(limit).cloned().collect())
        }
    }

    #[test]
    fn fetch_respects_limits() {
        let source = InMemorySource {
            purchases: (0..5).map(|idx| Purchase::new(format!("P{idx}"))).collect(),
            items: (0..8)
                .map(|idx| PurchaseItem::new(format!("I{idx}"), "P0"))
                .collect(),
        };

        let snapshot = Snapshot::fetch(
            &source,
            SnapshotLimits {
                purchases: 3,
                items: 4,
            },
        )
        .expect("fetch succeeds");

        assert_eq!(snapshot.purchases.len(), 3);
        assert_eq!(snapshot.items.len(), 4);
    }

    #[test]
    fn truncated_snapshot_still_aggregates_orphans() {
        let source = InMemorySource {
            purchases: vec![
                Purchase::new("P0").with_created_date("2024-01-01"),
                Purchase::new("P1").with_created_date("2024-01-01"),
            ],
            items: vec![
                PurchaseItem::new("I0", "P0").with_amounts(10.0, 0.0),
                PurchaseItem::new("I1", "P1").with_amounts(5.0, 0.0),
            ],
        };
        let snapshot = Snapshot::fetch(
            &source,
            SnapshotLimits {
                purchases: 1,
                items: 10,
            },
        )
        .expect("fetch succeeds");
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());

        let stats = snapshot.compute(&Aggregator::new(&clock), &PeriodSelector::All);

        assert_eq!(stats.total_spent, 15.0);
        assert_eq!(stats.unresolved_items, 1);
    }

    #[test]
    fn default_limits_match_upstream_bounds() {
        let limits = SnapshotLimits::default();
        assert_eq!(limits.purchases, 1000);
        assert_eq!(limits.items, 2000);
    }
}
