//! The dashboard's five charts, built from aggregated data.

use super::generator::{render_bar_chart, render_pie_chart, Bar, ChartConfig, Slice};
use crate::aggregator::{AmountHistogram, CategoryStat, CategoryStats, DashboardData, GenderDistribution};
use crate::utils::config::{
    AMOUNT_CHART_FILE, CATEGORY_FRAUD_CHART_FILE, CATEGORY_RATE_CHART_FILE,
    CATEGORY_TOTAL_CHART_FILE, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, GENDER_CHART_FILE,
    HISTOGRAM_COLOR, PIE_CHART_SIZE, PIE_PALETTE, VIRIDIS_PALETTE,
};
use crate::utils::error::ChartError;

/// Size settings shared by the preset charts
#[derive(Debug, Clone, Copy)]
pub struct ChartOptions {
    /// Width of the bar charts
    pub width: usize,
    pub height: usize,
    /// Width and height of the pie chart
    pub pie_size: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            pie_size: PIE_CHART_SIZE,
        }
    }
}

/// A rendered chart and the file name it should be written to
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub file_name: &'static str,
    pub svg: String,
}

pub fn gender_chart(dist: &GenderDistribution, options: &ChartOptions) -> Result<String, ChartError> {
    let slices: Vec<Slice> = dist
        .shares
        .iter()
        .map(|s| Slice::new(s.gender.display_name(), s.count as f64))
        .collect();

    let config = ChartConfig::new("Fraudulent Transactions by Gender")
        .with_size(options.pie_size, options.pie_size)
        .with_palette(PIE_PALETTE);

    render_pie_chart(&slices, &config)
}

pub fn amount_chart(histogram: &AmountHistogram, options: &ChartOptions) -> Result<String, ChartError> {
    let bars: Vec<Bar> = histogram
        .bins
        .iter()
        .map(|b| Bar::new(b.label.clone(), b.count as f64))
        .collect();

    let config = ChartConfig::new("Histogram of Fraudulent Transactions by Amount Range")
        .with_size(options.width, options.height)
        .with_axis_labels("Amount Range", "Number of Fraudulent Transactions")
        .with_palette(&[HISTOGRAM_COLOR]);

    render_bar_chart(&bars, &config)
}

pub fn category_fraud_chart(stats: &CategoryStats, options: &ChartOptions) -> Result<String, ChartError> {
    category_chart(
        stats,
        options,
        "Number of Fraudulent Transactions by Category",
        "Number of Fraudulent Transactions",
        |s| s.fraud_count as f64,
    )
}

pub fn category_total_chart(stats: &CategoryStats, options: &ChartOptions) -> Result<String, ChartError> {
    category_chart(
        stats,
        options,
        "Total Number of Transactions by Category",
        "Total Number of Transactions",
        |s| s.total_count as f64,
    )
}

pub fn category_rate_chart(stats: &CategoryStats, options: &ChartOptions) -> Result<String, ChartError> {
    category_chart(
        stats,
        options,
        "Fraud Rate by Category",
        "Fraud Rate (%)",
        |s| s.fraud_rate,
    )
}

fn category_chart(
    stats: &CategoryStats,
    options: &ChartOptions,
    title: &str,
    y_label: &str,
    value: impl Fn(&CategoryStat) -> f64,
) -> Result<String, ChartError> {
    let bars: Vec<Bar> = stats
        .iter()
        .map(|(category, stat)| Bar::new(category.label(), value(stat)))
        .collect();

    let config = ChartConfig::new(title)
        .with_size(options.width, options.height)
        .with_axis_labels("Category", y_label)
        .with_palette(VIRIDIS_PALETTE);

    render_bar_chart(&bars, &config)
}

/// Render every dashboard chart
///
/// **Public** - charts that have nothing to plot come back as errors
/// so the caller can decide whether to skip them.
pub fn render_dashboard(
    data: &DashboardData,
    options: &ChartOptions,
) -> Vec<(&'static str, Result<RenderedChart, ChartError>)> {
    let charts: [(&'static str, Result<String, ChartError>); 5] = [
        (GENDER_CHART_FILE, gender_chart(&data.gender, options)),
        (AMOUNT_CHART_FILE, amount_chart(&data.amounts, options)),
        (CATEGORY_FRAUD_CHART_FILE, category_fraud_chart(&data.categories, options)),
        (CATEGORY_TOTAL_CHART_FILE, category_total_chart(&data.categories, options)),
        (CATEGORY_RATE_CHART_FILE, category_rate_chart(&data.categories, options)),
    ];

    charts
        .into_iter()
        .map(|(file_name, svg)| (file_name, svg.map(|svg| RenderedChart { file_name, svg })))
        .collect()
}
