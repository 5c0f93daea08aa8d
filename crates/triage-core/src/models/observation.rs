use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::SymptomId;

/// The set of symptom ids supplied for one diagnosis request.
///
/// May be empty and may contain ids the knowledge base does not know;
/// such ids are inert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Observation(BTreeSet<SymptomId>);

impl Observation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an observation from anything convertible into symptom ids.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SymptomId>,
    {
        Self(ids.into_iter().map(Into::into).collect())
    }

    pub fn insert(&mut self, id: impl Into<SymptomId>) -> bool {
        self.0.insert(id.into())
    }

    pub fn contains(&self, id: &SymptomId) -> bool {
        self.0.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymptomId> {
        self.0.iter()
    }
}

impl FromIterator<SymptomId> for Observation {
    fn from_iter<T: IntoIterator<Item = SymptomId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a SymptomId> for Observation {
    fn from_iter<T: IntoIterator<Item = &'a SymptomId>>(iter: T) -> Self {
        Self(iter.into_iter().cloned().collect())
    }
}
