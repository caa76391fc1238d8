//! Chart generation for the fraud dashboard.
//!
//! Aggregated statistics become static SVG charts (pie and bar) and a
//! terminal text summary.

pub mod generator;
pub mod presets;
pub mod text;

// Re-export main types
pub use generator::{escape_xml, render_bar_chart, render_pie_chart, Bar, ChartConfig, Slice};
pub use presets::{
    amount_chart, category_fraud_chart, category_rate_chart, category_total_chart, gender_chart,
    render_dashboard, ChartOptions, RenderedChart,
};
pub use text::{generate_overview, generate_text_summary};
