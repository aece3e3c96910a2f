use stackwire_types::error::{CodecError, Result};
use stackwire_types::layout::{DataType, FixedRecordLayout, NamedRecordLayout};
use stackwire_types::value::{Record, Value};
use std::sync::Arc;

/// Where a finished composite goes once its frame is popped.
pub(super) enum Slot {
    Root,
    /// Into the parent record, under this name.
    Field(String),
    /// Appended to the parent array.
    Elem,
}

/// A composite value still being read. The frame owns the container it is
/// filling; on pop the container moves into its parent's [`Slot`].
pub(super) struct DeserFrame {
    pub slot: Slot,
    pub state: FrameState,
}

pub(super) enum FrameState {
    FixedMember {
        layout: Arc<FixedRecordLayout>,
        record: Record,
        member_idx: usize,
    },
    /// `members_ct` came from the wire, not from the layout.
    NamedMember {
        layout: Arc<NamedRecordLayout>,
        record: Record,
        member_idx: u64,
        members_ct: u64,
    },
    ArrayMember {
        elem_type: Arc<DataType>,
        elems: Vec<Value>,
        elem_idx: u64,
        elems_ct: u64,
    },
}

impl FrameState {
    pub fn fixed(layout: Arc<FixedRecordLayout>) -> Self {
        Self::FixedMember {
            layout,
            record: Record::new(),
            member_idx: 0,
        }
    }

    pub fn named(layout: Arc<NamedRecordLayout>, members_ct: u64) -> Self {
        Self::NamedMember {
            layout,
            record: Record::new(),
            member_idx: 0,
            members_ct,
        }
    }

    pub fn array(elem_type: Arc<DataType>, elems_ct: u64, prealloc: usize) -> Self {
        Self::ArrayMember {
            elem_type,
            elems: Vec::with_capacity(prealloc),
            elem_idx: 0,
            elems_ct,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::FixedMember { .. } => "FixedMember",
            Self::NamedMember { .. } => "NamedMember",
            Self::ArrayMember { .. } => "ArrayMember",
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::FixedMember { record, .. } | Self::NamedMember { record, .. } => {
                Value::Record(record)
            }
            Self::ArrayMember { elems, .. } => Value::Array(elems),
        }
    }

    /// The finished root. Only record frames can be roots.
    pub fn into_record(self) -> Result<Record> {
        match self {
            Self::FixedMember { record, .. } | Self::NamedMember { record, .. } => Ok(record),
            Self::ArrayMember { .. } => Err(CodecError::invalid_layout(
                "The root frame produced an array instead of a record.",
            )),
        }
    }

    /// Stores a finished child. The slot must match this frame's variant.
    pub fn accept(&mut self, slot: Slot, value: Value) -> Result<()> {
        match (self, slot) {
            (Self::FixedMember { record, .. }, Slot::Field(name))
            | (Self::NamedMember { record, .. }, Slot::Field(name)) => {
                record.insert(name, value);
                Ok(())
            }
            (Self::ArrayMember { elems, .. }, Slot::Elem) => {
                elems.push(value);
                Ok(())
            }
            (parent, _) => Err(CodecError::invalid_layout(format!(
                "A finished value does not fit its parent {} frame.",
                parent.variant_name()
            ))),
        }
    }
}
