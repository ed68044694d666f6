// File: crates/demo/src/main.rs
// Summary: Demo loads a ticket-sales CSV and renders the two dashboard charts
// (daily sold counts as a line, top categories by revenue as bars) to PNGs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use minichart::types::{HEIGHT, WIDTH};
use minichart::{ChartRenderer, RenderOptions, Series, Surface, ValueFormat};

struct SaleRow {
    date: NaiveDate,
    category: String,
    quantity: u64,
    revenue: f64,
}

fn main() -> Result<()> {
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/sample_sales.csv".to_string());
    let path = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());

    let rows = load_sales_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if rows.is_empty() {
        anyhow::bail!("no sales rows loaded; check headers/delimiter.");
    }
    println!("Loaded {} sales rows", rows.len());

    let renderer = ChartRenderer::new().with_value_format(ValueFormat::from_tag("ru"));

    // 1) Daily sold counts over the trailing 30-day window, zero-filled
    let end = rows.iter().map(|r| r.date).max().expect("rows is non-empty");
    let start = end - Duration::days(29);
    let mut by_day: HashMap<NaiveDate, u64> = HashMap::new();
    for r in &rows {
        if r.date >= start && r.date <= end {
            *by_day.entry(r.date).or_default() += r.quantity;
        }
    }
    let mut labels = Vec::with_capacity(30);
    let mut sold = Vec::with_capacity(30);
    for i in 0..30 {
        let d = start + Duration::days(i);
        labels.push(d.format("%d.%m").to_string());
        sold.push(by_day.get(&d).copied().unwrap_or(0) as f64);
    }

    let mut surface = Surface::new(WIDTH, HEIGHT)?;
    let opts = RenderOptions { units: Some("шт.".into()), draw_labels: true };
    renderer.render_line(&mut surface, &Series::new(labels, sold), &opts)?;
    let out_line = PathBuf::from("target/out/sales_by_day.png");
    surface.write_png(&out_line)?;
    println!("Wrote {}", out_line.display());

    // 2) Top categories by revenue
    let mut by_category: HashMap<String, f64> = HashMap::new();
    for r in &rows {
        *by_category.entry(r.category.clone()).or_default() += r.revenue;
    }
    let mut top: Vec<(String, f64)> = by_category.into_iter().collect();
    top.sort_by(|a, b| b.1.total_cmp(&a.1));
    top.truncate(8);
    let (cat_labels, cat_values): (Vec<_>, Vec<_>) = top.into_iter().unzip();

    let mut surface = Surface::new(WIDTH, HEIGHT)?;
    let opts = RenderOptions { units: Some("₽".into()), draw_labels: true };
    renderer.render_hbar(&mut surface, &Series::new(cat_labels, cat_values), &opts)?;
    let out_bar = PathBuf::from("target/out/revenue_by_category.png");
    surface.write_png(&out_bar)?;
    println!("Wrote {}", out_bar.display());

    Ok(())
}

/// Resolve the CSV path, falling back to the crate's bundled sample data
/// when the given path does not exist.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join(raw);
    if bundled.exists() {
        return Ok(bundled);
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load sales rows from a CSV with date/category/quantity/revenue columns.
fn load_sales_csv(path: &Path) -> Result<Vec<SaleRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_date = idx(&["date", "day", "paid_at"]);
    let i_cat = idx(&["category", "category_name"]);
    let i_qty = idx(&["quantity", "sold", "qty"]);
    let i_rev = idx(&["revenue", "amount", "total"]);

    if i_date.is_none() || i_qty.is_none() || i_rev.is_none() {
        println!("Warning: Could not find one of date/quantity/revenue columns.");
    }

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).map(str::trim);

        let date = field(i_date).and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
        let quantity = field(i_qty).and_then(|s| s.parse::<u64>().ok());
        let revenue = field(i_rev).and_then(|s| s.parse::<f64>().ok());
        let category = match field(i_cat) {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => "Без категории".to_string(),
        };

        if let (Some(date), Some(quantity), Some(revenue)) = (date, quantity, revenue) {
            out.push(SaleRow { date, category, quantity, revenue });
        }
    }
    Ok(out)
}
