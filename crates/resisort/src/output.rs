use std::io::{self, Write};

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, Table};
use resisort_core::{Partition, Resistance};
use serde::Serialize;

/// English ordinal of `n`: 1st, 2nd, 3rd, 4th, 11th, 21st...
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn write_summary<W: Write>(result: &Partition, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "In order to sort {} resistors you can use {} container(s) with up to {} resistor(s) each!",
        result.resistor_count, result.container_count, result.resistors_per_container
    )
}

pub fn write_text<W: Write>(result: &Partition, writer: &mut W) -> io::Result<()> {
    write_summary(result, writer)?;
    for (index, container) in result.containers.iter().enumerate() {
        writeln!(
            writer,
            "{:>5} Container: {:>10} - {:>10}",
            ordinal(index + 1),
            container.lower_bound,
            container.upper_bound
        )?;
    }
    Ok(())
}

pub fn write_table<W: Write>(result: &Partition, writer: &mut W) -> io::Result<()> {
    write_summary(result, writer)?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(comfy_table::ContentArrangement::Disabled);
    table.set_header(vec!["Container", "Lower", "Upper", "Resistors"]);

    for ((index, container), range) in result
        .containers
        .iter()
        .enumerate()
        .zip(result.index_ranges())
    {
        table.add_row(vec![
            ordinal(index + 1),
            container.lower_bound.to_string(),
            container.upper_bound.to_string(),
            range.count().to_string(),
        ]);
    }
    for column in table.column_iter_mut().skip(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    writeln!(writer, "{table}")
}

#[derive(Serialize)]
struct JsonContainer {
    lower_bound: Resistance,
    upper_bound: Resistance,
    lower: String,
    upper: String,
}

#[derive(Serialize)]
struct JsonReport {
    resistor_count: usize,
    container_count: usize,
    resistors_per_container: usize,
    containers: Vec<JsonContainer>,
}

pub fn write_json<W: Write>(result: &Partition, writer: &mut W) -> io::Result<()> {
    let report = JsonReport {
        resistor_count: result.resistor_count,
        container_count: result.container_count,
        resistors_per_container: result.resistors_per_container,
        containers: result
            .containers
            .iter()
            .map(|c| JsonContainer {
                lower_bound: c.lower_bound,
                upper_bound: c.upper_bound,
                lower: c.lower_bound.to_string(),
                upper: c.upper_bound.to_string(),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)
}
