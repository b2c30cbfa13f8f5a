//! Metrics command implementation
//!
//! Prints the per-trade SA-CCR metrics of a trade file.

use std::io::Write;
use std::path::Path;

use infra_config::{OutputFormat, SaccrConfig};
use saccr_engine::hedging::MaturityBucket;
use saccr_engine::metrics::TradeMetricsTable;
use tracing::info;

use super::load_netting_set;
use crate::Result;

/// Run the metrics command
pub fn run(input: &Path, config: &SaccrConfig, out: &mut dyn Write) -> Result<()> {
    info!(input = %input.display(), "computing per-trade metrics");

    let netting_set = load_netting_set(input, None)?;
    let table = TradeMetricsTable::compute(&netting_set, &config.parallel_config())?;

    match config.output_format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, table.rows())?;
            writeln!(out)?;
        }
        OutputFormat::Table => write_table(&table, out)?,
    }
    Ok(())
}

fn write_table(table: &TradeMetricsTable, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<16} {:<4} {:>8} {:>8} {:>8} {:>9} {:>14} {:>6} {:>6} {:>6}",
        "Trade", "CCY", "S", "E", "M", "SD", "Adj notional", "Delta", "MF", "Bucket"
    )?;
    for m in table.rows() {
        writeln!(
            out,
            "{:<16} {:<4} {:>8.4} {:>8.4} {:>8.4} {:>9.4} {:>14.2} {:>6.0} {:>6.4} {:>6}",
            m.trade_id.as_str(),
            m.hedging_set.as_str(),
            m.start,
            m.end,
            m.maturity,
            m.supervisory_duration,
            m.adjusted_notional,
            m.supervisory_delta,
            m.maturity_factor,
            MaturityBucket::from_maturity(m.maturity).label()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output, trade_file, TWO_SWAPS};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_table_lists_every_trade_in_order() {
        let file = trade_file(TWO_SWAPS);
        let mut buf = Vec::new();
        run(file.path(), &SaccrConfig::default(), &mut buf).unwrap();

        let text = output(buf);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("swap_a"));
        assert!(lines[1].ends_with(">5Y"));
        assert!(lines[2].starts_with("swap_b"));
        assert!(lines[2].contains("36253.85"));
        assert!(lines[2].ends_with("1Y-5Y"));
    }

    #[test]
    fn test_json_rows() {
        let file = trade_file(TWO_SWAPS);
        let config = SaccrConfig {
            output_format: OutputFormat::Json,
            ..Default::default()
        };
        let mut buf = Vec::new();
        run(file.path(), &config, &mut buf).unwrap();

        let rows: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
        assert_eq!(rows[0]["trade_id"], "swap_a");
        assert_eq!(rows[1]["supervisory_delta"], -1.0);
        assert_abs_diff_eq!(rows[0]["supervisory_duration"].as_f64().unwrap(), 7.8686, epsilon = 1e-4);
    }
}
