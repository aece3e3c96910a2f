use crate::layout::{FixedRecordLayout, LayoutRef, NamedRecordLayout, PrimitiveKind};
use std::fmt;
use std::sync::Arc;

/// A schema node. Immutable once built; freely shared between traversals.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum DataType {
    Primitive(PrimitiveKind),
    FixedRecord(LayoutRef<FixedRecordLayout>),
    NamedRecord(LayoutRef<NamedRecordLayout>),
    /// Holds the element type. Shared so that frames can keep it past their parent.
    Array(Arc<DataType>),
}

/* Constructors. */
impl DataType {
    pub fn i8() -> Self {
        Self::Primitive(PrimitiveKind::I8)
    }
    pub fn i16() -> Self {
        Self::Primitive(PrimitiveKind::I16)
    }
    pub fn i32() -> Self {
        Self::Primitive(PrimitiveKind::I32)
    }
    pub fn i64() -> Self {
        Self::Primitive(PrimitiveKind::I64)
    }
    pub fn u8() -> Self {
        Self::Primitive(PrimitiveKind::U8)
    }
    pub fn u16() -> Self {
        Self::Primitive(PrimitiveKind::U16)
    }
    pub fn u32() -> Self {
        Self::Primitive(PrimitiveKind::U32)
    }
    pub fn u64() -> Self {
        Self::Primitive(PrimitiveKind::U64)
    }
    pub fn f32() -> Self {
        Self::Primitive(PrimitiveKind::F32)
    }
    pub fn f64() -> Self {
        Self::Primitive(PrimitiveKind::F64)
    }
    pub fn string() -> Self {
        Self::Primitive(PrimitiveKind::String)
    }
    pub fn bool() -> Self {
        Self::Primitive(PrimitiveKind::Bool)
    }

    pub fn array(elem_type: DataType) -> Self {
        Self::Array(Arc::new(elem_type))
    }

    pub fn fixed(layout: impl Into<LayoutRef<FixedRecordLayout>>) -> Self {
        Self::FixedRecord(layout.into())
    }

    pub fn named(layout: impl Into<LayoutRef<NamedRecordLayout>>) -> Self {
        Self::NamedRecord(layout.into())
    }
}

impl DataType {
    /// Leaf types are consumed in place; every other type pushes a frame when present.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }
}

impl From<PrimitiveKind> for DataType {
    fn from(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }
}

/* Used in mismatch errors. Does not descend into layouts. */
impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => write!(f, "{kind}"),
            Self::FixedRecord(_) => write!(f, "fixed record"),
            Self::NamedRecord(_) => write!(f, "named record"),
            Self::Array(elem_type) => write!(f, "array of {elem_type}"),
        }
    }
}
