use spendboard_domain::PeriodSelector;

use crate::enrich::EnrichedItem;

/// Keeps the items whose derived date falls inside `period`, preserving order.
pub fn filter_period<'a>(
    enriched: Vec<EnrichedItem<'a>>,
    period: &PeriodSelector,
) -> Vec<EnrichedItem<'a>> {
    enriched
        .into_iter()
        .filter(|entry| period.contains(entry.date))
        .collect()
}
