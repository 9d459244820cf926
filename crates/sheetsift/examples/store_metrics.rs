//! Print per-store metrics of a report workbook
//!
//! ```text
//! cargo run --example store_metrics -- rapport.xlsx
//! ```

use sheetsift::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: store_metrics <workbook>")?;

    let workbook = read_workbook(&path).await?;
    let config = InferenceConfig::default();

    for sheet in extract_workbook(&workbook, &config) {
        match aggregate_metrics(&sheet, &config) {
            Ok(blocks) => {
                println!("{}:", sheet.name);
                for chart in StoreChart::from_blocks(&blocks) {
                    let mark = if chart.target_met() { "*" } else { " " };
                    println!(
                        " {mark} {:<24} {:>12.2} / {:>12.2}  {}",
                        chart.label,
                        chart.actual,
                        chart.target,
                        chart.percent_label()
                    );
                }
            }
            Err(e) => println!("{}: {e}", sheet.name),
        }
    }
    Ok(())
}
