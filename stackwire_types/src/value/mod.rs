//! Run-time payloads exchanged with the caller.
//!
//! The engines know nothing about the caller's static types; they only check
//! each [`Value`] against the [`DataType`](crate::layout::DataType) expected at
//! its position.

mod clone;
mod drop;
mod eq;
mod record;

pub use record::*;


#[derive(Debug)]
pub enum Value {
    /// An absent record or array. Never valid for a leaf.
    Null,
    /// Any integer width. Narrowed, with a range check, only when written.
    Int(i128),
    /// `F32` fields are narrowed with `as f32` when written.
    Float(f64),
    Bool(bool),
    Str(String),
    Record(Record),
    Array(Vec<Value>),
}

pub type FixedRecordInstance = Record;
pub type NamedRecordInstance = Record;

impl Value {
    /// Used in mismatch errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::Record(_) => "record",
            Self::Array(_) => "array",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Record(_) | Self::Array(_))
    }

    pub fn as_int(&self) -> Option<i128> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(elems) => Some(elems),
            _ => None,
        }
    }
}

impl From<i128> for Value {
    fn from(i: i128) -> Self {
        Self::Int(i)
    }
}
impl From<i8> for Value {
    fn from(i: i8) -> Self {
        Self::Int(i.into())
    }
}
impl From<i16> for Value {
    fn from(i: i16) -> Self {
        Self::Int(i.into())
    }
}
impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i.into())
    }
}
impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i.into())
    }
}
impl From<u8> for Value {
    fn from(i: u8) -> Self {
        Self::Int(i.into())
    }
}
impl From<u16> for Value {
    fn from(i: u16) -> Self {
        Self::Int(i.into())
    }
}
impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Self::Int(i.into())
    }
}
impl From<u64> for Value {
    fn from(i: u64) -> Self {
        Self::Int(i.into())
    }
}
impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Float(f.into())
    }
}
impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}
impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Self::Record(r)
    }
}
impl From<Vec<Value>> for Value {
    fn from(elems: Vec<Value>) -> Self {
        Self::Array(elems)
    }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => Self::Null,
            Some(t) => t.into(),
        }
    }
}
