use std::io::{self, BufRead};

use crate::{parse_resistor_value, sort, ParseError, ResistorSet};

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Failed to read input")]
    Io(#[from] io::Error),
    #[error("Invalid value on line {line}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
}

/// Read one resistor value per line and return them sorted.
///
/// Blank lines are skipped. The first line that fails to parse aborts the
/// whole read.
pub fn read_resistors<R: BufRead>(reader: R) -> Result<ResistorSet, ReadError> {
    let mut values = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let token = line.trim();
        if token.is_empty() {
            continue;
        }

        let value = parse_resistor_value(token).map_err(|source| ReadError::Parse {
            line: index + 1,
            source,
        })?;
        log::debug!("line {}: {token:?} = {} ohms", index + 1, value.ohms());
        values.push(value);
    }

    Ok(sort(values))
}
