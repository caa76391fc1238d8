//! SVG chart generation.
//!
//! Charts are built as plain SVG strings with a fixed palette.
//! Output is static: no scripts, hover only via CSS.

use crate::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, PIE_PALETTE};
use crate::utils::error::ChartError;
use log::info;
use std::f64::consts::PI;
use std::fmt::Write;

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// Fill colors, cycled over slices or bars
    pub palette: Vec<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            x_label: None,
            y_label: None,
            palette: PIE_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ChartConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    pub fn with_palette<S: AsRef<str>>(mut self, palette: &[S]) -> Self {
        self.palette = palette.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    fn color(&self, idx: usize) -> &str {
        if self.palette.is_empty() {
            "gray"
        } else {
            &self.palette[idx % self.palette.len()]
        }
    }
}

/// One pie slice
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One bar
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

// Pie slices start here and run counter-clockwise
const PIE_START_ANGLE_DEG: f64 = 140.0;

/// Render a pie chart with percentage annotations
///
/// **Public** - used for the gender distribution
///
/// # Errors
/// * `ChartError::EmptyData` - no slices, or all slices are zero
pub fn render_pie_chart(slices: &[Slice], config: &ChartConfig) -> Result<String, ChartError> {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if slices.is_empty() || total <= 0.0 {
        return Err(ChartError::EmptyData(format!("pie chart '{}'", config.title)));
    }

    info!("Rendering pie chart '{}' with {} slices", config.title, slices.len());

    let mut out = String::new();
    let (width, height) = (config.width, config.height);
    write_header(&mut out, width, height, &config.title);

    let cx = width as f64 / 2.0;
    let cy = (height as f64 + 30.0) / 2.0;
    let r = (width.min(height) as f64) * 0.35;

    let mut angle = PIE_START_ANGLE_DEG.to_radians();
    for (i, slice) in slices.iter().enumerate() {
        let value = slice.value.max(0.0);
        if value == 0.0 {
            continue;
        }
        let fraction = value / total;
        let sweep = fraction * 2.0 * PI;
        let color = config.color(i);

        if fraction >= 1.0 {
            let _ = write!(
                out,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
                cx, cy, r, color
            );
        } else {
            let (x1, y1) = polar(cx, cy, r, angle);
            let (x2, y2) = polar(cx, cy, r, angle + sweep);
            let large_arc = if sweep > PI { 1 } else { 0 };
            // sweep-flag 0 draws counter-clockwise on screen
            let _ = write!(
                out,
                r#"<path d="M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2} Z" fill="{}"><title>{}: {}</title></path>"#,
                cx, cy, x1, y1, r, r, large_arc, x2, y2, color,
                escape_xml(&slice.label), value
            );
        }

        let mid = angle + sweep / 2.0;
        let (px, py) = polar(cx, cy, r * 0.6, mid);
        let _ = write!(
            out,
            r#"<text x="{:.2}" y="{:.2}" font-size="14" text-anchor="middle">{:.1}%</text>"#,
            px, py, fraction * 100.0
        );

        let (lx, ly) = polar(cx, cy, r * 1.1, mid);
        let anchor = if lx >= cx { "start" } else { "end" };
        let _ = write!(
            out,
            r#"<text x="{:.2}" y="{:.2}" font-size="14" text-anchor="{}">{}</text>"#,
            lx, ly, anchor, escape_xml(&slice.label)
        );

        angle += sweep;
    }

    out.push_str("</svg>");

    info!("Pie chart generated ({} bytes)", out.len());
    Ok(out)
}

/// Render a vertical bar chart
///
/// **Public** - used for the amount histogram and category charts
///
/// # Errors
/// * `ChartError::EmptyData` - no bars
pub fn render_bar_chart(bars: &[Bar], config: &ChartConfig) -> Result<String, ChartError> {
    if bars.is_empty() {
        return Err(ChartError::EmptyData(format!("bar chart '{}'", config.title)));
    }

    info!("Rendering bar chart '{}' with {} bars", config.title, bars.len());

    let (width, height) = (config.width as f64, config.height as f64);
    let (left, right, top, bottom) = (90.0, 20.0, 50.0, 170.0);
    let plot_w = (width - left - right).max(1.0);
    let plot_h = (height - top - bottom).max(1.0);
    let baseline = top + plot_h;

    let max_value = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
    let step = nice_step(max_value / 5.0);
    let y_max = ((max_value / step).ceil() * step).max(step);

    let mut out = String::new();
    write_header(&mut out, config.width, config.height, &config.title);

    // Y grid and ticks
    let ticks = (y_max / step).round() as usize;
    for t in 0..=ticks {
        let value = t as f64 * step;
        let y = baseline - (value / y_max) * plot_h;
        let _ = write!(
            out,
            r##"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="#dddddd"/>"##,
            left, y, left + plot_w, y
        );
        let _ = write!(
            out,
            r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="end">{}</text>"#,
            left - 6.0, y + 4.0, format_tick(value)
        );
    }

    // Bars
    let slot = plot_w / bars.len() as f64;
    let bar_w = slot * 0.8;
    for (i, bar) in bars.iter().enumerate() {
        let value = bar.value.max(0.0);
        let h = (value / y_max) * plot_h;
        let x = left + slot * i as f64 + (slot - bar_w) / 2.0;
        let label = escape_xml(&bar.label);

        let _ = write!(
            out,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" class="bar"><title>{}: {}</title></rect>"#,
            x, baseline - h, bar_w, h, config.color(i), label, format_tick(value)
        );

        let tx = x + bar_w / 2.0;
        let ty = baseline + 14.0;
        let _ = write!(
            out,
            r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="end" transform="rotate(-45 {:.2} {:.2})">{}</text>"#,
            tx, ty, tx, ty, label
        );
    }

    // Axes
    let _ = write!(
        out,
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="black"/>"#,
        left, top, left, baseline
    );
    let _ = write!(
        out,
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="black"/>"#,
        left, baseline, left + plot_w, baseline
    );

    if let Some(x_label) = &config.x_label {
        let _ = write!(
            out,
            r#"<text x="{:.2}" y="{:.2}" font-size="13" text-anchor="middle">{}</text>"#,
            left + plot_w / 2.0, height - 10.0, escape_xml(x_label)
        );
    }
    if let Some(y_label) = &config.y_label {
        let _ = write!(
            out,
            r#"<text x="20" y="{:.2}" font-size="13" text-anchor="middle" transform="rotate(-90 20 {:.2})">{}</text>"#,
            top + plot_h / 2.0, top + plot_h / 2.0, escape_xml(y_label)
        );
    }

    out.push_str("</svg>");

    info!("Bar chart generated ({} bytes)", out.len());
    Ok(out)
}

fn write_header(out: &mut String, width: usize, height: usize, title: &str) {
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, height, width, height
    );
    out.push_str(
        r#"<style>text { font-family: sans-serif; } .bar:hover { stroke: black; stroke-width: 1; opacity: 0.9; }</style>"#,
    );
    let _ = write!(
        out,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        width, height
    );
    let _ = write!(
        out,
        r#"<text x="{}" y="28" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
        width / 2,
        escape_xml(title)
    );
}

/// Point on a circle; angles are counter-clockwise from 3 o'clock
fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy - r * angle.sin())
}

/// Round a raw tick step up to 1, 2 or 5 times a power of ten
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Escape text for SVG content and attributes
pub fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
