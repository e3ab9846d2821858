//! Join stage: resolve every line item against its parent purchase.

use std::collections::HashMap;

use chrono::NaiveDate;
use once_cell::unsync::OnceCell;
use spendboard_domain::{Identifiable, Purchase, PurchaseItem, NOT_AVAILABLE};

use crate::time::Clock;

/// Lookup from purchase identifier to purchase. Later duplicates replace earlier ones.
#[derive(Debug, Default)]
pub struct PurchaseIndex<'a> {
    by_id: HashMap<&'a str, &'a Purchase>,
}

impl<'a> PurchaseIndex<'a> {
    pub fn build(purchases: &'a [Purchase]) -> Self {
        let mut by_id = HashMap::with_capacity(purchases.len());
        for purchase in purchases {
            by_id.insert(purchase.id(), purchase);
        }
        Self { by_id }
    }

    pub fn resolve(&self, purchase_id: &str) -> Option<&'a Purchase> {
        self.by_id.get(purchase_id).copied()
    }
}

/// A line item paired with its resolved parent and the calendar date it reports under.
///
/// `purchase` is `None` for the unknown-purchase sentinel: the foreign key did not resolve.
#[derive(Debug, Clone, Copy)]
pub struct EnrichedItem<'a> {
    pub item: &'a PurchaseItem,
    pub purchase: Option<&'a Purchase>,
    pub date: NaiveDate,
}

impl<'a> EnrichedItem<'a> {
    pub fn is_resolved(&self) -> bool {
        self.purchase.is_some()
    }

    pub fn buyer_label(&self) -> &'a str {
        self.purchase
            .map(Purchase::buyer_label)
            .unwrap_or(NOT_AVAILABLE)
    }
}

/// Produces exactly one [`EnrichedItem`] per input item, in input order.
///
/// The clock is read at most once, and only when some item needs the fallback
/// date: its parent is missing or carries no parseable creation timestamp.
pub fn enrich<'a>(
    items: &'a [PurchaseItem],
    index: &PurchaseIndex<'a>,
    clock: &dyn Clock,
) -> Vec<EnrichedItem<'a>> {
    let today = OnceCell::new();
    let fallback = || *today.get_or_init(|| clock.today());

    items
        .iter()
        .map(|item| {
            let purchase = index.resolve(&item.purchase_id);
            let date = match purchase {
                Some(parent) => parent.created_on().unwrap_or_else(|| {
                    tracing::debug!(
                        purchase_id = %parent.id,
                        "purchase has no usable creation date; using clock date"
                    );
                    fallback()
                }),
                None => fallback(),
            };
            EnrichedItem {
                item,
                purchase,
                date,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingClock {
        inner: FixedClock,
        reads: AtomicUsize,
    }

    impl Clock for CountingClock {
        fn now(&self) -> chrono::DateTime<chrono::Utc> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.now()
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn last_duplicate_purchase_wins() {
        let purchases = vec![
            Purchase::new("P1").with_buyer("First"),
            Purchase::new("P1").with_buyer("Second"),
        ];
        let index = PurchaseIndex::build(&purchases);

        assert_eq!(
            index.resolve("P1").map(Purchase::buyer_label),
            Some("Second")
        );
    }

    #[test]
    fn dangling_items_use_clock_date_and_sentinel_buyer() {
        let purchases = vec![Purchase::new("P1")
            .with_buyer("Alice")
            .with_created_date("2024-03-10")];
        let items = vec![
            PurchaseItem::new("I1", "P1"),
            PurchaseItem::new("I2", "missing"),
        ];
        let index = PurchaseIndex::build(&purchases);
        let clock = FixedClock::on(date(2025, 6, 1));

        let enriched = enrich(&items, &index, &clock);

        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].date, date(2024, 3, 10));
        assert_eq!(enriched[0].buyer_label(), "Alice");
        assert!(!enriched[1].is_resolved());
        assert_eq!(enriched[1].date, date(2025, 6, 1));
        assert_eq!(enriched[1].buyer_label(), NOT_AVAILABLE);
    }

    #[test]
    fn clock_is_untouched_when_every_parent_resolves() {
        let purchases = vec![Purchase::new("P1").with_created_date("2024-01-05")];
        let items = vec![PurchaseItem::new("I1", "P1"), PurchaseItem::new("I2", "P1")];
        let index = PurchaseIndex::build(&purchases);
        let clock = CountingClock {
            inner: FixedClock::on(date(2025, 1, 1)),
            reads: AtomicUsize::new(0),
        };

        enrich(&items, &index, &clock);
        assert_eq!(clock.reads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn clock_is_read_once_for_many_fallbacks() {
        let items = vec![
            PurchaseItem::new("I1", "ghost"),
            PurchaseItem::new("I2", "ghost"),
            PurchaseItem::new("I3", "other"),
        ];
        let index = PurchaseIndex::build(&[]);
        let clock = CountingClock {
            inner: FixedClock::on(date(2025, 1, 1)),
            reads: AtomicUsize::new(0),
        };

        let enriched = enrich(&items, &index, &clock);
        assert_eq!(enriched.len(), 3);
        assert_eq!(clock.reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unparsable_parent_date_falls_back_to_clock() {
        let purchases = vec![Purchase::new("P1").with_created_date("not a date")];
        let items = vec![PurchaseItem::new("I1", "P1")];
        let index = PurchaseIndex::build(&purchases);
        let clock = FixedClock::on(date(2025, 2, 2));

        let enriched = enrich(&items, &index, &clock);
        assert!(enriched[0].is_resolved());
        assert_eq!(enriched[0].date, date(2025, 2, 2));
    }
}
