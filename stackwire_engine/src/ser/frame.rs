use stackwire_types::layout::{DataType, FixedRecordLayout, NamedRecordLayout};
use stackwire_types::value::{Record, Value};
use std::sync::Arc;

/// A composite value whose members are still being written.
///
/// Frames borrow the caller's graph for `'v`; they own only their indices
/// and a handle on the layout.
pub(super) enum SerFrame<'v> {
    FixedMember {
        layout: Arc<FixedRecordLayout>,
        record: &'v Record,
        member_idx: usize,
    },
    /// The member count was written on entry; members are written in layout
    /// order, skipping fields the record does not carry.
    NamedMember {
        layout: Arc<NamedRecordLayout>,
        record: &'v Record,
        member_idx: usize,
    },
    ArrayMember {
        elem_type: Arc<DataType>,
        elems: &'v [Value],
        elem_idx: usize,
    },
}

impl<'v> SerFrame<'v> {
    pub fn fixed(layout: Arc<FixedRecordLayout>, record: &'v Record) -> Self {
        Self::FixedMember {
            layout,
            record,
            member_idx: 0,
        }
    }

    pub fn named(layout: Arc<NamedRecordLayout>, record: &'v Record) -> Self {
        Self::NamedMember {
            layout,
            record,
            member_idx: 0,
        }
    }

    pub fn array(elem_type: Arc<DataType>, elems: &'v [Value]) -> Self {
        Self::ArrayMember {
            elem_type,
            elems,
            elem_idx: 0,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::FixedMember { .. } => "FixedMember",
            Self::NamedMember { .. } => "NamedMember",
            Self::ArrayMember { .. } => "ArrayMember",
        }
    }
}
