//! EAD command implementation
//!
//! Loads a trade file, runs the SA-CCR calculation and prints the
//! netting-set breakdown.

use std::io::Write;
use std::path::Path;

use infra_config::{OutputFormat, SaccrConfig};
use saccr_engine::hedging::MaturityBucket;
use saccr_engine::{EadBreakdown, ExposureAtDefault};
use tracing::info;

use super::load_netting_set;
use crate::Result;

/// Run the ead command
pub fn run(
    input: &Path,
    netting_set_id: Option<&str>,
    config: &SaccrConfig,
    out: &mut dyn Write,
) -> Result<()> {
    info!(input = %input.display(), "calculating exposure at default");

    let netting_set = load_netting_set(input, netting_set_id)?;
    let ead = ExposureAtDefault::with_config(&netting_set, config.parallel_config())?;
    let breakdown = ead.breakdown();

    match config.output_format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &breakdown)?;
            writeln!(out)?;
        }
        OutputFormat::Table => write_table(&breakdown, out)?,
    }
    Ok(())
}

fn write_table(b: &EadBreakdown, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Netting set        {}", b.netting_set_id)?;
    writeln!(out, "Trades             {}", b.trade_count)?;
    writeln!(out, "Net market value   {:>14.2}", b.net_market_value)?;
    writeln!(out, "Replacement cost   {:>14.2}", b.replacement_cost)?;
    writeln!(out, "Add-on             {:>14.2}", b.addon)?;
    writeln!(out, "Multiplier         {:>14.6}", b.multiplier)?;
    writeln!(out, "PFE                {:>14.2}", b.pfe())?;
    writeln!(out, "EAD                {:>14.2}", b.ead)?;

    if b.hedging_sets.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(
        out,
        "{:<5} {:>16} {:>16} {:>16} {:>12}",
        "CCY",
        MaturityBucket::UpToOneYear.label(),
        MaturityBucket::OneToFiveYears.label(),
        MaturityBucket::OverFiveYears.label(),
        "Add-on"
    )?;
    for hs in &b.hedging_sets {
        let [d1, d2, d3] = hs.effective_notionals.as_array();
        writeln!(
            out,
            "{:<5} {:>16.2} {:>16.2} {:>16.2} {:>12.2}",
            hs.currency.as_str(),
            d1,
            d2,
            d3,
            hs.addon
        )?;
    }
    Ok(())
}
