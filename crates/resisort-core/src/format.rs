//! Human-readable rendering of resistances.
//!
//! Values of a kiloohm and above are scaled and rounded to a single
//! fractional digit, so `parse(format(x))` lands within half of the last
//! displayed digit of `x` (50 Ω in the KΩ range, 50 kΩ in the MΩ range).

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::Resistance;

const SCALES: [(u64, &str); 2] = [(1_000_000, "MΩ"), (1_000, "KΩ")];

/// Render `raw / scale` with at most one fractional digit.
fn fmt_scaled(raw: u64, scale: u64) -> String {
    let scaled = Decimal::from(raw) / Decimal::from(scale);
    scaled
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

/// Format a resistance as "4.7KΩ", "2.2MΩ" or "10Ω".
pub fn format_resistor_value(value: Resistance) -> String {
    let ohms = value.ohms();
    for &(scale, suffix) in &SCALES {
        if ohms >= scale {
            return format!("{}{}", fmt_scaled(ohms, scale), suffix);
        }
    }
    format!("{ohms}Ω")
}

impl fmt::Display for Resistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_resistor_value(*self))
    }
}
