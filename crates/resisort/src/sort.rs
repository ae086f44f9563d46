use std::io::{self, Write};

use anyhow::{Context, Result};
use resisort_core::{partition, read_resistors};

use crate::config::{OutputFormat, SortConfig};
use crate::output;

pub fn execute(config: &SortConfig) -> Result<()> {
    let reader = config.input.open()?;
    let sorted = read_resistors(reader)
        .with_context(|| format!("Failed to read resistors from {}", config.input))?;
    log::debug!("Read {} resistors from {}", sorted.len(), config.input);

    let result = partition(&sorted, config.sizing)?;

    let mut writer = io::stdout().lock();
    match config.format {
        OutputFormat::Text => output::write_text(&result, &mut writer)?,
        OutputFormat::Table => output::write_table(&result, &mut writer)?,
        OutputFormat::Json => output::write_json(&result, &mut writer)?,
    };
    writer.flush()?;

    Ok(())
}
