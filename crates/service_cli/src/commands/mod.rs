//! CLI command implementations
//!
//! Each submodule implements one subcommand. Commands write their report to
//! the given sink so that tests can capture it.

pub mod ead;
pub mod metrics;
pub mod validate;

use std::path::Path;

use adapter_loader::JsonTradeLoader;
use saccr_engine::NettingSet;

use crate::{CliError, Result};

/// Loads and validates a trade file into a netting set.
pub(crate) fn load_netting_set(input: &Path, netting_set_id: Option<&str>) -> Result<NettingSet> {
    let mut loader = open(input)?;
    if let Some(id) = netting_set_id {
        loader = loader.with_netting_set_id(id);
    }
    Ok(loader.into_netting_set()?)
}

/// Opens a trade file, reporting a missing file by name.
pub(crate) fn open(input: &Path) -> Result<JsonTradeLoader> {
    if !input.exists() {
        return Err(CliError::FileNotFound(input.display().to_string()));
    }
    Ok(JsonTradeLoader::from_path(input)?)
}
