use crate::layout::{DataType, LayoutRef};
use derive_more::Deref;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct Field {
    pub name: String,
    pub data_type: DataType,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// A positional record. The field order is the wire order; no name is written.
///
/// Names are not checked for uniqueness, but a repeated name makes the
/// later field shadow the earlier one inside a [`Record`](crate::value::Record).
#[derive(Deref, Debug)]
pub struct FixedRecordLayout {
    fields: Vec<Field>,
}

impl FixedRecordLayout {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Builds a layout that can refer to itself.
    ///
    /// `build` receives a `DataType` pointing back at the layout under construction,
    /// typically to be wrapped in [`DataType::array`].
    pub fn new_cyclic<F>(build: F) -> Arc<Self>
    where
        F: FnOnce(DataType) -> Vec<Field>,
    {
        Arc::new_cyclic(|weak| {
            let this = DataType::FixedRecord(LayoutRef::back(weak.clone()));
            Self::new(build(this))
        })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
