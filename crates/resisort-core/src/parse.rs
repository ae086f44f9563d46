//! Lenient parser for resistor notation.
//!
//! A token is scanned one character at a time by [`Scan`]. Digits and a
//! single decimal separator build a numeric literal, `k`/`M` pick the
//! multiplier (and double as the decimal point in "4k7" style values), and an
//! ohm marker (`Ω`, `R`) ends the scan. Everything else is skipped.

use std::str::FromStr;

use rust_decimal::{prelude::ToPrimitive, Decimal};
use rust_decimal_macros::dec;

use crate::Resistance;

const KILO: Decimal = dec!(1000);
const MEGA: Decimal = dec!(1000000);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid resistor value '{token}': no digits found")]
    Empty { token: String },
    #[error("Invalid resistor value '{token}': '{literal}' is not a number")]
    InvalidNumber { token: String, literal: String },
    #[error("Invalid resistor value '{token}': magnitude out of range")]
    OutOfRange { token: String },
}

impl ParseError {
    /// The input token that failed to parse.
    pub fn token(&self) -> &str {
        match self {
            ParseError::Empty { token }
            | ParseError::InvalidNumber { token, .. }
            | ParseError::OutOfRange { token } => token,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// Integer part of the literal.
    ReadingDigits,
    /// A separator or unit marker has been seen.
    ReadingFraction,
    /// An ohm marker ended the scan.
    Done,
}

/// Character-level state machine behind [`parse_resistor_value`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scan {
    state: ScanState,
    literal: String,
    digits: usize,
    multiplier: Decimal,
}

impl Default for Scan {
    fn default() -> Self {
        Self::new()
    }
}

impl Scan {
    pub fn new() -> Self {
        Self {
            state: ScanState::ReadingDigits,
            literal: String::new(),
            digits: 0,
            multiplier: Decimal::ONE,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// The numeric literal collected so far, with `.` as the separator.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn multiplier(&self) -> Decimal {
        self.multiplier
    }

    /// Feed a single character.
    pub fn step(&mut self, ch: char) {
        match (self.state, ch) {
            (ScanState::Done, _) => {}
            (_, '0'..='9') => {
                self.literal.push(ch);
                self.digits += 1;
            }
            (ScanState::ReadingDigits, '.' | ',') => {
                self.literal.push('.');
                self.state = ScanState::ReadingFraction;
            }
            // A second separator can only produce an invalid literal
            (ScanState::ReadingFraction, '.' | ',') => self.literal.push('.'),
            (state, 'k' | 'K' | 'm' | 'M') => {
                self.multiplier = if ch.eq_ignore_ascii_case(&'k') {
                    KILO
                } else {
                    MEGA
                };
                if state == ScanState::ReadingDigits {
                    self.literal.push('.');
                    self.state = ScanState::ReadingFraction;
                }
            }
            (_, 'Ω' | '\u{2126}' | 'r' | 'R') => self.state = ScanState::Done,
            _ => {}
        }
    }

    /// Convert the collected literal into a magnitude, truncating toward zero.
    pub fn finish(self, token: &str) -> Result<Resistance, ParseError> {
        if self.digits == 0 {
            return Err(ParseError::Empty {
                token: token.to_string(),
            });
        }

        let mut literal = self.literal;
        if literal.ends_with('.') {
            literal.pop();
        }
        if literal.starts_with('.') {
            literal.insert(0, '0');
        }

        // A literal with a single separator is well-formed, so failing to
        // parse it means the integer part overflowed `Decimal`.
        let number = Decimal::from_str(&literal).map_err(|_| {
            if literal.matches('.').count() > 1 {
                ParseError::InvalidNumber {
                    token: token.to_string(),
                    literal: literal.clone(),
                }
            } else {
                ParseError::OutOfRange {
                    token: token.to_string(),
                }
            }
        })?;

        number
            .checked_mul(self.multiplier)
            .and_then(|value| value.trunc().to_u64())
            .map(Resistance::from_ohms)
            .ok_or_else(|| ParseError::OutOfRange {
                token: token.to_string(),
            })
    }
}

/// Parse one resistor token such as "4k7", "2.2M", "100" or "10R" into ohms.
pub fn parse_resistor_value(token: &str) -> Result<Resistance, ParseError> {
    let mut scan = Scan::new();
    for ch in token.chars() {
        scan.step(ch);
        if scan.state() == ScanState::Done {
            break;
        }
    }
    scan.finish(token)
}

impl FromStr for Resistance {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_resistor_value(s)
    }
}
