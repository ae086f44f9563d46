//! Resistor value handling for `resisort`.
//!
//! Values are parsed from resistor notation into whole ohms, sorted, and
//! split into contiguous containers whose bounds are formatted back for
//! display.
//!
//! ```
//! use resisort_core::{partition, read_resistors, Sizing};
//!
//! let input = "4k7\n10R\n220\n2M2\n";
//! let sorted = read_resistors(input.as_bytes()).unwrap();
//! let result = partition(&sorted, Sizing::ResistorsPerContainer(2)).unwrap();
//!
//! assert_eq!(result.container_count, 2);
//! assert_eq!(result.containers[0].upper_bound.to_string(), "220Ω");
//! assert_eq!(result.containers[1].lower_bound.to_string(), "4.7KΩ");
//! ```

pub mod format;
pub mod parse;
pub mod partition;
pub mod reader;
pub mod resistance;
pub mod sort;

pub use format::format_resistor_value;
pub use parse::{parse_resistor_value, ParseError, Scan, ScanState};
pub use partition::{
    partition, Container, Partition, Sizing, SizingError, DEFAULT_RESISTORS_PER_CONTAINER,
};
pub use reader::{read_resistors, ReadError};
pub use resistance::Resistance;
pub use sort::{sort, ResistorSet};
