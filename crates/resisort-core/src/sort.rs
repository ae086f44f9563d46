use serde::Serialize;

use crate::Resistance;

/// Resistances in ascending order. Only built through [`sort`], so the
/// ordering always holds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResistorSet(Vec<Resistance>);

impl ResistorSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Resistance] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Resistance> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Resistance> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ResistorSet {
    type Item = &'a Resistance;
    type IntoIter = std::slice::Iter<'a, Resistance>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Resistance> for ResistorSet {
    fn from_iter<I: IntoIterator<Item = Resistance>>(iter: I) -> Self {
        sort(iter.into_iter().collect())
    }
}

/// Sort resistances ascending. Duplicates are kept.
pub fn sort(mut values: Vec<Resistance>) -> ResistorSet {
    values.sort_unstable();
    ResistorSet(values)
}
