use crate::error::{CodecError, Result};
use crate::layout::{DataType, Field, LayoutRef};
use derive_more::Deref;
use std::collections::HashMap;
use std::sync::Arc;

/// A self-describing record. Each member travels with its name, so an
/// instance may carry a subset of the fields, in any order.
///
/// The name-to-index map is frozen at construction.
#[derive(Deref, Debug)]
pub struct NamedRecordLayout {
    #[deref]
    fields: Vec<Field>,
    field_idxs: HashMap<String, usize>,
}

impl NamedRecordLayout {
    pub fn try_new(fields: Vec<Field>) -> Result<Self> {
        let mut field_idxs = HashMap::with_capacity(fields.len());
        for (field_idx, field) in fields.iter().enumerate() {
            if field_idxs.insert(field.name.clone(), field_idx).is_some() {
                return Err(CodecError::invalid_layout(format!(
                    "Field {:?} is declared more than once.",
                    field.name
                )));
            }
        }
        Ok(Self { fields, field_idxs })
    }

    /// Self-referencing counterpart of [`Self::try_new`].
    /// See [`FixedRecordLayout::new_cyclic`](crate::layout::FixedRecordLayout::new_cyclic).
    pub fn try_new_cyclic<F>(build: F) -> Result<Arc<Self>>
    where
        F: FnOnce(DataType) -> Vec<Field>,
    {
        let mut failure = None;
        let layout = Arc::new_cyclic(|weak| {
            let this = DataType::NamedRecord(LayoutRef::back(weak.clone()));
            match Self::try_new(build(this)) {
                Ok(layout) => layout,
                Err(e) => {
                    failure = Some(e);
                    Self {
                        fields: vec![],
                        field_idxs: HashMap::new(),
                    }
                }
            }
        });
        match failure {
            Some(e) => Err(e),
            None => Ok(layout),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_idxs.get(name).copied()
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.index_of(name).map(|field_idx| &self.fields[field_idx])
    }
}
