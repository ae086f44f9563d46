//! Split a sorted set into contiguous, equally sized containers.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::{Resistance, ResistorSet};

/// Per-container size used when no sizing mode was chosen.
pub const DEFAULT_RESISTORS_PER_CONTAINER: usize = 10;

/// Which parameter drives the partition. The other one is derived.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Sizing {
    ResistorsPerContainer(usize),
    ContainerCount(usize),
    #[default]
    Unspecified,
}

impl Sizing {
    /// Resolve the per-container size for `count` resistors.
    fn resistors_per_container(self, count: usize) -> Result<usize, SizingError> {
        match self {
            Sizing::ResistorsPerContainer(0) => Err(SizingError::NonPositive {
                parameter: "resistors per container",
            }),
            Sizing::ContainerCount(0) => Err(SizingError::NonPositive {
                parameter: "container count",
            }),
            Sizing::ResistorsPerContainer(per_container) => Ok(per_container),
            Sizing::ContainerCount(containers) => Ok(count.div_ceil(containers)),
            Sizing::Unspecified => Ok(DEFAULT_RESISTORS_PER_CONTAINER),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SizingError {
    #[error("No resistors to sort")]
    NoResistors,
    #[error("The {parameter} must be at least 1")]
    NonPositive { parameter: &'static str },
}

/// Smallest and largest resistance stored together.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Container {
    pub lower_bound: Resistance,
    pub upper_bound: Resistance,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub resistor_count: usize,
    pub container_count: usize,
    pub resistors_per_container: usize,
    pub containers: Vec<Container>,
}

impl Partition {
    /// Indices into the sorted set covered by each container.
    pub fn index_ranges(&self) -> Vec<RangeInclusive<usize>> {
        index_ranges(
            self.resistor_count,
            self.resistors_per_container,
            self.container_count,
        )
    }
}

fn index_ranges(
    count: usize,
    per_container: usize,
    containers: usize,
) -> Vec<RangeInclusive<usize>> {
    (0..containers)
        .map(|i| {
            let first = i * per_container;
            let last = ((i + 1) * per_container).min(count) - 1;
            first..=last
        })
        .collect()
}

/// Partition `sorted` into containers according to `sizing`.
///
/// The container count is always recomputed from the resolved per-container
/// size, so a requested count may come back smaller (10 resistors in 4
/// containers become 4 containers of up to 3, 10 in 6 become 5 of 2). It
/// never exceeds the number of resistors.
pub fn partition(sorted: &ResistorSet, sizing: Sizing) -> Result<Partition, SizingError> {
    let count = sorted.len();
    if count == 0 {
        return Err(SizingError::NoResistors);
    }

    let per_container = sizing.resistors_per_container(count)?;
    let container_count = count.div_ceil(per_container).min(count);
    log::debug!(
        "{sizing:?}: {count} resistors -> {container_count} containers of up to {per_container}"
    );

    let values = sorted.as_slice();
    let containers = index_ranges(count, per_container, container_count)
        .into_iter()
        .map(|range| Container {
            lower_bound: values[*range.start()],
            upper_bound: values[*range.end()],
        })
        .collect();

    Ok(Partition {
        resistor_count: count,
        container_count,
        resistors_per_container: per_container,
        containers,
    })
}
