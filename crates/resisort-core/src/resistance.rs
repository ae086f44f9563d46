use serde::{Deserialize, Serialize};

/// A resistance normalized to whole ohms.
///
/// `FromStr` accepts resistor notation ("4k7", "2M2", "10R") and `Display`
/// renders the scaled form ("4.7KΩ"). The two are not exact inverses, see
/// [`crate::format`].
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Resistance(u64);

impl Resistance {
    pub const fn from_ohms(ohms: u64) -> Self {
        Self(ohms)
    }

    pub const fn ohms(self) -> u64 {
        self.0
    }
}

impl From<u64> for Resistance {
    fn from(ohms: u64) -> Self {
        Self(ohms)
    }
}

impl From<Resistance> for u64 {
    fn from(value: Resistance) -> Self {
        value.0
    }
}
