use crate::value::Value;
use derive_more::{Deref, DerefMut, From};
use std::collections::BTreeMap;

/// A record instance: field name to value.
///
/// The same type serves fixed and named layouts. A field missing from the map
/// is unset; for fixed layouts it is encoded as if it were [`Value::Null`].
#[derive(From, Deref, DerefMut, Default, Debug)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn into_map(self) -> BTreeMap<String, Value> {
        self.0
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
