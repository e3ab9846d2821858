//! Text rendering of dashboard stats.

use spendboard_domain::{ChartPoint, DashboardStats, EvolutionPoint, PeriodSelector};

use crate::currency::{format_amount, NumberStyle};

const LABEL_WIDTH: usize = 28;

/// Currency and separators used for every amount in a report.
#[derive(Debug, Clone)]
pub struct MoneyFormat {
    pub currency: String,
    pub style: NumberStyle,
}

impl MoneyFormat {
    pub fn new(currency: impl Into<String>, locale: &str) -> Self {
        Self {
            currency: currency.into(),
            style: NumberStyle::for_locale(locale),
        }
    }

    pub fn amount(&self, value: f64) -> String {
        format_amount(value, &self.currency, self.style)
    }
}

/// A titled block of report lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub title: String,
    pub lines: Vec<String>,
}

pub fn dashboard_sections(
    stats: &DashboardStats,
    period: &PeriodSelector,
    money: &MoneyFormat,
) -> Vec<ReportSection> {
    let kpis = vec![
        kpi_line("Purchases", stats.unique_purchases.to_string()),
        kpi_line("Total spent", money.amount(stats.total_spent)),
        kpi_line("Total saving", money.amount(stats.total_saving)),
        kpi_line("Suppliers", stats.unique_suppliers.to_string()),
        kpi_line("Materials", stats.unique_materials.to_string()),
        kpi_line("Line items", stats.filtered_items.to_string()),
    ];

    vec![
        ReportSection {
            title: format!("Dashboard ({period})"),
            lines: kpis,
        },
        ReportSection {
            title: "Spend by buyer".into(),
            lines: ranked_lines(&stats.buyer_chart_data, money),
        },
        ReportSection {
            title: "Spend by supplier".into(),
            lines: ranked_lines(&stats.supplier_chart_data, money),
        },
        ReportSection {
            title: "Spend over time".into(),
            lines: evolution_lines(&stats.evolution_chart_data, money),
        },
    ]
}

fn kpi_line(label: &str, value: String) -> String {
    format!("{label:<16}{value}")
}

fn ranked_lines(points: &[ChartPoint], money: &MoneyFormat) -> Vec<String> {
    if points.is_empty() {
        return vec!["(no data)".into()];
    }
    points
        .iter()
        .enumerate()
        .map(|(idx, point)| {
            format!(
                "{:>2}. {:<width$} {}",
                idx + 1,
                truncate_label(&point.name),
                money.amount(point.value),
                width = LABEL_WIDTH
            )
        })
        .collect()
}

fn evolution_lines(points: &[EvolutionPoint], money: &MoneyFormat) -> Vec<String> {
    if points.is_empty() {
        return vec!["(no data)".into()];
    }
    points
        .iter()
        .map(|point| {
            format!(
                "{:<8} spent {}  saving {}",
                point.name,
                money.amount(point.spent),
                money.amount(point.saving)
            )
        })
        .collect()
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= LABEL_WIDTH {
        return label.to_string();
    }
    let mut shortened: String = label.chars().take(LABEL_WIDTH - 1).collect();
    shortened.push('…');
    shortened
}
