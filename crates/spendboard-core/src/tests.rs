use chrono::NaiveDate;
use serde_json::json;

use crate::{aggregator::Aggregator, time::FixedClock, CoreError};
use spendboard_domain::{ChartPoint, PeriodSelector, Purchase, PurchaseItem, NOT_AVAILABLE};

fn clock() -> FixedClock {
    FixedClock::on(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
}

fn scenario_records() -> (Vec<PurchaseItem>, Vec<Purchase>) {
    let purchases = vec![Purchase::new("P1")
        .with_buyer("Alice")
        .with_created_date("2024-03-10")];
    let items = vec![PurchaseItem::new("I1", "P1")
        .with_supplier("S1", "Acme")
        .with_material("M1")
        .with_amounts(100.0, 20.0)];
    (items, purchases)
}

#[test]
fn empty_inputs_produce_zero_stats() {
    let clock = clock();
    let aggregator = Aggregator::new(&clock);

    for period in [
        PeriodSelector::All,
        PeriodSelector::month(2024, 3).unwrap(),
    ] {
        let stats = aggregator.compute(&[], &[], &period);
        assert_eq!(stats.unique_purchases, 0);
        assert_eq!(stats.total_spent, 0.0);
        assert_eq!(stats.total_saving, 0.0);
        assert_eq!(stats.unique_suppliers, 0);
        assert_eq!(stats.unique_materials, 0);
        assert!(stats.buyer_chart_data.is_empty());
        assert!(stats.supplier_chart_data.is_empty());
        assert!(stats.evolution_chart_data.is_empty());
    }

    let stats = aggregator.compute(&[], &[], &PeriodSelector::year(2024));
    assert_eq!(stats.evolution_chart_data.len(), 12);
    assert!(stats
        .evolution_chart_data
        .iter()
        .all(|point| point.spent == 0.0 && point.saving == 0.0));
}

#[test]
fn single_purchase_in_selected_month() {
    let (items, purchases) = scenario_records();
    let clock = clock();
    let period = PeriodSelector::month(2024, 3).unwrap();

    let stats = Aggregator::new(&clock).compute(&items, &purchases, &period);

    assert_eq!(stats.unique_purchases, 1);
    assert_eq!(stats.total_spent, 100.0);
    assert_eq!(stats.total_saving, 20.0);
    assert_eq!(stats.unique_suppliers, 1);
    assert_eq!(stats.unique_materials, 1);
    assert_eq!(stats.buyer_chart_data, vec![ChartPoint::new("Alice", 100.0)]);
    assert_eq!(stats.supplier_chart_data, vec![ChartPoint::new("Acme", 100.0)]);
    assert_eq!(stats.evolution_chart_data.len(), 1);
    assert_eq!(stats.evolution_chart_data[0].name, "03");
}

#[test]
fn non_matching_month_filters_everything_out() {
    let (items, purchases) = scenario_records();
    let clock = clock();
    let period = PeriodSelector::month(2024, 4).unwrap();

    let stats = Aggregator::new(&clock).compute(&items, &purchases, &period);

    assert!(stats.is_empty());
    assert_eq!(stats.unique_purchases, 0);
    assert_eq!(stats.total_spent, 0.0);
    assert_eq!(stats.total_saving, 0.0);
    assert_eq!(stats.unique_suppliers, 0);
    assert_eq!(stats.unique_materials, 0);
}

#[test]
fn dangling_reference_is_counted_under_not_available() {
    let (mut items, purchases) = scenario_records();
    items.push(
        PurchaseItem::new("I2", "P404")
            .with_supplier("S2", "Globex")
            .with_material("M2")
            .with_amounts(50.0, 5.0),
    );
    let clock = clock();

    let stats = Aggregator::new(&clock).compute(&items, &purchases, &PeriodSelector::All);

    assert_eq!(stats.filtered_items, 2);
    assert_eq!(stats.unresolved_items, 1);
    assert_eq!(stats.unique_purchases, 2);
    assert_eq!(stats.total_spent, 150.0);
    assert_eq!(stats.total_saving, 25.0);
    assert!(stats
        .buyer_chart_data
        .contains(&ChartPoint::new(NOT_AVAILABLE, 50.0)));
}

#[test]
fn dangling_reference_reports_under_the_clock_month() {
    let items = vec![PurchaseItem::new("I1", "P404").with_amounts(7.0, 1.0)];
    let clock = clock();
    let aggregator = Aggregator::new(&clock);

    let june = aggregator.compute(&items, &[], &PeriodSelector::month(2025, 6).unwrap());
    assert_eq!(june.total_spent, 7.0);

    let march = aggregator.compute(&items, &[], &PeriodSelector::month(2024, 3).unwrap());
    assert_eq!(march.total_spent, 0.0);
}

#[test]
fn charts_are_truncated_to_ten_buckets() {
    let purchases: Vec<Purchase> = (0..12u32)
        .map(|idx| {
            Purchase::new(format!("P{idx}"))
                .with_buyer(format!("Buyer {idx}"))
                .with_created_date("2024-02-01")
        })
        .collect();
    let items: Vec<PurchaseItem> = (0..12u32)
        .map(|idx| {
            PurchaseItem::new(format!("I{idx}"), format!("P{idx}"))
                .with_supplier(format!("S{idx}"), format!("Supplier {idx}"))
                .with_amounts(f64::from(idx + 1), 0.0)
        })
        .collect();
    let clock = clock();

    let stats = Aggregator::new(&clock).compute(&items, &purchases, &PeriodSelector::year(2024));

    assert_eq!(stats.buyer_chart_data.len(), 10);
    assert_eq!(stats.supplier_chart_data.len(), 10);
    assert_eq!(stats.buyer_chart_data[0], ChartPoint::new("Buyer 11", 12.0));
    assert_eq!(stats.buyer_chart_data[9], ChartPoint::new("Buyer 2", 3.0));
    assert_eq!(stats.total_spent, 78.0);
    assert_eq!(stats.evolution_chart_data[1].spent, 78.0);
}

#[test]
fn compute_is_idempotent_when_all_parents_resolve() {
    let (items, purchases) = scenario_records();
    let clock = clock();
    let aggregator = Aggregator::new(&clock);

    let first = aggregator.compute(&items, &purchases, &PeriodSelector::year(2024));
    let second = aggregator.compute(&items, &purchases, &PeriodSelector::year(2024));

    assert_eq!(first, second);
}

#[test]
fn compute_json_accepts_presentation_layer_shapes() {
    let clock = clock();
    let stats = Aggregator::new(&clock)
        .compute_json(
            &json!([{
                "purchase_id": "P1",
                "preco_total": 100,
                "saving_reais": 20,
                "supplier_id": "S1",
                "supplier_nome": "Acme",
                "material_id": "M1"
            }]),
            &json!([{"id": "P1", "buyer_nome": "Alice", "created_date": "2024-03-10"}]),
            &json!({"mode": "month", "year": "2024", "month": "3"}),
        )
        .expect("valid input");

    assert_eq!(stats.unique_purchases, 1);
    assert_eq!(stats.total_spent, 100.0);
    assert_eq!(stats.buyer_chart_data, vec![ChartPoint::new("Alice", 100.0)]);
}

#[test]
fn compute_json_rejects_malformed_collections() {
    let clock = clock();
    let aggregator = Aggregator::new(&clock);
    let period = json!({"mode": "all"});

    let err = aggregator
        .compute_json(&json!("not an array"), &json!([]), &period)
        .expect_err("string items are invalid");
    assert!(matches!(err, CoreError::InvalidInput(_)));

    let err = aggregator
        .compute_json(&json!([]), &json!(null), &period)
        .expect_err("null purchases are invalid");
    assert!(matches!(err, CoreError::InvalidInput(_)));

    let err = aggregator
        .compute_json(&json!([]), &json!([]), &json!({"mode": "week"}))
        .expect_err("unknown mode is invalid");
    assert!(matches!(err, CoreError::InvalidInput(_)));
}

#[test]
fn supplier_name_counts_when_the_identifier_is_absent() {
    let clock = clock();
    let stats = Aggregator::new(&clock)
        .compute_json(
            &json!([{
                "purchase_id": "P1",
                "preco_total": 100,
                "saving_reais": 20,
                "supplier_nome": "Acme",
                "material_id": "M1"
            }]),
            &json!([{"id": "P1", "buyer_nome": "Alice", "created_date": "2024-03-10"}]),
            &json!({"mode": "month", "year": "2024", "month": "3"}),
        )
        .expect("valid input");

    assert_eq!(stats.unique_purchases, 1);
    assert_eq!(stats.total_spent, 100.0);
    assert_eq!(stats.total_saving, 20.0);
    assert_eq!(stats.unique_suppliers, 1);
    assert_eq!(stats.unique_materials, 1);
    assert_eq!(stats.buyer_chart_data, vec![ChartPoint::new("Alice", 100.0)]);
}

#[test]
fn non_finite_typed_amounts_count_as_zero() {
    let purchases = vec![Purchase::new("P1")
        .with_buyer("Alice")
        .with_created_date("2024-03-10")];
    let items: Vec<PurchaseItem> = (0..30u32)
        .map(|idx| {
            let price = if idx % 7 == 0 { f64::NAN } else { f64::from(idx) };
            PurchaseItem::new(format!("I{idx}"), "P1")
                .with_supplier(format!("S{idx}"), format!("Supplier {idx}"))
                .with_amounts(price, 0.0)
        })
        .collect();
    let clock = clock();

    let stats = Aggregator::new(&clock).compute(&items, &purchases, &PeriodSelector::All);

    let expected: f64 = (0..30u32).filter(|idx| idx % 7 != 0).map(f64::from).sum();
    assert_eq!(stats.total_spent, expected);
    assert_eq!(stats.supplier_chart_data.len(), 10);
    assert_eq!(stats.supplier_chart_data[0], ChartPoint::new("Supplier 29", 29.0));
    assert!(stats
        .supplier_chart_data
        .windows(2)
        .all(|pair| pair[0].value >= pair[1].value));
}
