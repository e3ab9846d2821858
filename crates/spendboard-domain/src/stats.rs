//! Chart-ready dashboard output consumed by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::period::TimeBucket;

/// One labelled bar of a ranked chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One point of the spend/saving time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionPoint {
    pub bucket: TimeBucket,
    pub name: String,
    pub spent: f64,
    pub saving: f64,
}

impl EvolutionPoint {
    pub fn new(bucket: TimeBucket, spent: f64, saving: f64) -> Self {
        Self {
            bucket,
            name: bucket.to_string(),
            spent,
            saving,
        }
    }
}

/// Executive purchasing KPIs and chart series for one reporting period.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub unique_purchases: usize,
    pub total_spent: f64,
    pub total_saving: f64,
    pub unique_suppliers: usize,
    pub unique_materials: usize,
    pub buyer_chart_data: Vec<ChartPoint>,
    pub supplier_chart_data: Vec<ChartPoint>,
    pub evolution_chart_data: Vec<EvolutionPoint>,
    /// Items that survived the period filter.
    pub filtered_items: usize,
    /// Filtered items whose parent purchase did not resolve.
    pub unresolved_items: usize,
}

impl DashboardStats {
    pub fn is_empty(&self) -> bool {
        self.filtered_items == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_presentation_field_names() {
        let stats = DashboardStats {
            unique_purchases: 1,
            total_spent: 100.0,
            buyer_chart_data: vec![ChartPoint::new("Alice", 100.0)],
            evolution_chart_data: vec![EvolutionPoint::new(
                TimeBucket::Month { month: 3 },
                100.0,
                20.0,
            )],
            filtered_items: 1,
            ..DashboardStats::default()
        };

        let json = serde_json::to_value(&stats).expect("stats serialize");
        assert_eq!(json["uniquePurchases"], 1);
        assert_eq!(json["totalSpent"], 100.0);
        assert_eq!(json["buyerChartData"][0]["name"], "Alice");
        assert_eq!(json["evolutionChartData"][0]["name"], "03");
        assert_eq!(json["evolutionChartData"][0]["bucket"]["kind"], "month");
    }

    #[test]
    fn default_stats_are_empty() {
        assert!(DashboardStats::default().is_empty());
    }
}
