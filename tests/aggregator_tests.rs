use fraud_lens::aggregator::{aggregate_raw, fraud_rate_by_category, summarize, CategoryStat};
use fraud_lens::dataset::{Category, Dataset, Gender, RawTransaction, Transaction};
use fraud_lens::utils::error::{AggregateError, RecordError};
use pretty_assertions::assert_eq;

fn raw(category: &str, fraud: &str) -> RawTransaction {
    RawTransaction::new(category, fraud, "10.0", "3")
}

fn tx(category: Category, fraud: bool, amount: f64, gender: Gender) -> Transaction {
    Transaction {
        category,
        fraud,
        amount,
        gender,
    }
}

#[test]
fn test_fraud_rate_example() {
    let input = vec![raw("es_food", "true"), raw("es_food", "false"), raw("es_tech", "true")];
    let stats = aggregate_raw(&input).unwrap();

    assert_eq!(
        stats.get(Category::Food),
        Some(&CategoryStat {
            fraud_count: 1,
            total_count: 2,
            fraud_rate: 50.0
        })
    );
    assert_eq!(
        stats.get(Category::Tech),
        Some(&CategoryStat {
            fraud_count: 1,
            total_count: 1,
            fraud_rate: 100.0
        })
    );

    let zero_rows = stats
        .iter()
        .filter(|(_, s)| **s == CategoryStat::default())
        .count();
    assert_eq!(zero_rows, 13);
}

#[test]
fn test_empty_input_returns_empty_mapping() {
    let stats = aggregate_raw(&[]).unwrap();
    assert!(stats.is_empty());
    assert_eq!(stats.totals(), (0, 0));
}

#[test]
fn test_unknown_category_is_invalid_record() {
    let input = vec![raw("es_food", "1"), raw("unknown_category", "1")];

    match aggregate_raw(&input) {
        Err(AggregateError::InvalidRecord { index, source }) => {
            assert_eq!(index, 1);
            assert_eq!(source, RecordError::UnknownCategory("unknown_category".to_string()));
        }
        other => panic!("expected InvalidRecord, got {:?}", other),
    }
}

#[test]
fn test_invariants_hold_for_mixed_input() {
    let mut input = Vec::new();
    for i in 0..300u32 {
        let category = (i % 15).to_string();
        let fraud = if i % 7 == 0 || i % 11 == 0 { "1" } else { "0" };
        input.push(raw(&category, fraud));
    }

    let stats = aggregate_raw(&input).unwrap();

    assert_eq!(stats.len(), 15);
    for (_, stat) in stats.iter() {
        assert!(stat.fraud_count <= stat.total_count);
        assert!((0.0..=100.0).contains(&stat.fraud_rate));
        if stat.total_count == 0 {
            assert_eq!(stat.fraud_rate, 0.0);
        }
    }
    assert_eq!(stats.totals().1, 300);
}

#[test]
fn test_aggregation_is_idempotent() {
    let input = vec![raw("3", "1"), raw("7", "0"), raw("'es_hyper'", "1"), raw("es_travel", "0")];

    let first = aggregate_raw(&input).unwrap();
    let second = aggregate_raw(&input).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_typed_and_raw_paths_agree() {
    let typed = vec![
        tx(Category::Food, true, 1.0, Gender::Male),
        tx(Category::Food, false, 1.0, Gender::Male),
        tx(Category::Tech, true, 1.0, Gender::Female),
    ];
    let raw_input = vec![raw("3", "1"), raw("3", "0"), raw("11", "1")];

    assert_eq!(fraud_rate_by_category(&typed), aggregate_raw(&raw_input).unwrap());
}

#[test]
fn test_summarize_dataset() {
    let dataset = Dataset::new(
        "memory",
        vec![
            tx(Category::Travel, true, 1500.0, Gender::Female),
            tx(Category::Travel, true, 75.0, Gender::Male),
            tx(Category::Travel, false, 20.0, Gender::Male),
            tx(Category::Food, false, 20.0, Gender::Unspecified),
        ],
    );

    let data = summarize(&dataset);

    assert_eq!(data.record_count, 4);
    assert_eq!(data.fraud_count, 2);
    assert_eq!(data.overall_fraud_rate(), 50.0);
    assert_eq!(data.gender.total, 2);
    assert_eq!(data.amounts.binned_total(), 2);
    assert_eq!(data.amounts.bins[1].count, 1);
    assert_eq!(data.amounts.bins[5].count, 1);

    let travel = data.categories.get(Category::Travel).unwrap();
    assert_eq!(travel.fraud_count, 2);
    assert_eq!(travel.total_count, 3);
}
