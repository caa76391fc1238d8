use fraud_lens::aggregator::summarize;
use fraud_lens::charts::{
    category_rate_chart, gender_chart, generate_overview, generate_text_summary, render_bar_chart, render_dashboard,
    Bar, ChartConfig, ChartOptions,
};
use fraud_lens::dataset::{Category, Dataset, Gender, Transaction};
use fraud_lens::utils::config::{GENDER_CHART_FILE, OVERVIEW_ROWS};

fn sample_dataset(with_fraud: bool) -> Dataset {
    let records = (0..30)
        .map(|i| Transaction {
            category: Category::ALL[i % 15],
            fraud: with_fraud && i % 4 == 0,
            amount: (i * 37) as f64,
            gender: Gender::ALL[i % 4],
        })
        .collect();
    Dataset::new("sample.csv", records)
}

#[test]
fn test_render_dashboard_produces_five_charts() {
    let data = summarize(&sample_dataset(true));
    let charts = render_dashboard(&data, &ChartOptions::default());

    assert_eq!(charts.len(), 5);
    for (file_name, chart) in &charts {
        let chart = chart.as_ref().unwrap();
        assert_eq!(chart.file_name, *file_name);
        assert!(chart.svg.starts_with("<svg"));
        assert!(chart.svg.ends_with("</svg>"));
    }
}

#[test]
fn test_gender_chart_needs_fraud() {
    let data = summarize(&sample_dataset(false));
    assert!(gender_chart(&data.gender, &ChartOptions::default()).is_err());

    let charts = render_dashboard(&data, &ChartOptions::default());
    let gender = charts.iter().find(|(name, _)| *name == GENDER_CHART_FILE).unwrap();
    assert!(gender.1.is_err());
}

#[test]
fn test_gender_chart_labels_and_palette() {
    let data = summarize(&sample_dataset(true));
    let svg = gender_chart(&data.gender, &ChartOptions::default()).unwrap();

    assert!(svg.contains("Fraudulent Transactions by Gender"));
    assert!(svg.contains("#ff9999"));
    assert!(svg.contains('%'));
}

#[test]
fn test_category_chart_has_every_category() {
    let data = summarize(&sample_dataset(true));
    let svg = category_rate_chart(&data.categories, &ChartOptions::default()).unwrap();

    for category in Category::ALL {
        assert!(svg.contains(category.label()), "missing {}", category);
    }
}

#[test]
fn test_bar_chart_escapes_labels() {
    let bars = vec![Bar::new("a<b", 1.0), Bar::new("c&d", 2.0)];
    let svg = render_bar_chart(&bars, &ChartConfig::new("T & C")).unwrap();

    assert!(svg.contains("a&lt;b"));
    assert!(svg.contains("c&amp;d"));
    assert!(svg.contains("T &amp; C"));
    assert!(!svg.contains("a<b"));
}

#[test]
fn test_bar_chart_rejects_no_bars() {
    assert!(render_bar_chart(&[], &ChartConfig::new("empty")).is_err());
}

#[test]
fn test_text_summary_lists_categories() {
    colored::control::set_override(false);
    let data = summarize(&sample_dataset(true));

    let summary = generate_text_summary(&data, 5);

    assert!(summary.contains("FRAUD OVERVIEW"));
    assert!(summary.contains("Transactions: 30"));
    assert!(summary.contains("Showing top 5 of 15 categories"));
}

#[test]
fn test_overview_shows_first_rows_decoded() {
    colored::control::set_override(false);
    let dataset = sample_dataset(true);

    let overview = generate_overview(dataset.head(OVERVIEW_ROWS), dataset.len());
    let rows: Vec<&str> = overview.lines().skip(2).collect();

    assert!(overview.contains("DATASET OVERVIEW"));
    assert_eq!(rows.len(), OVERVIEW_ROWS + 1);
    assert!(rows[0].contains("es_barsandrestaurants"));
    assert!(rows[0].contains("LGBTQ"));
    assert!(rows[0].trim_end().ends_with('1'));
    assert!(rows[1].contains("es_contents"));
    assert!(rows[1].contains("Female"));
    assert!(rows[1].contains("37.00"));
    assert!(rows[4].contains("es_health"));
    assert!(!overview.contains("es_home"));
    assert!(rows[5].contains("5 of 30 records"));
}

#[test]
fn test_overview_of_empty_dataset() {
    let overview = generate_overview(&[], 0);
    assert!(overview.contains("(no records)"));
}
