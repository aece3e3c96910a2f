//! Numeric range checks, applied before an integer is written and after one is read.
//!
//! Candidates are `i128`, which holds every value of every supported width,
//! so a check never loses the caller's true value. Floats and booleans are not
//! range-checked.

use crate::error::{CodecError, Result};
use crate::layout::PrimitiveKind;
use num_traits::FromPrimitive;

fn fits<T: FromPrimitive>(v: i128) -> bool {
    T::from_i128(v).is_some()
}

pub fn in_range_i8(v: i128) -> bool {
    fits::<i8>(v)
}
pub fn in_range_i16(v: i128) -> bool {
    fits::<i16>(v)
}
pub fn in_range_i32(v: i128) -> bool {
    fits::<i32>(v)
}
pub fn in_range_i64(v: i128) -> bool {
    fits::<i64>(v)
}
pub fn in_range_u8(v: i128) -> bool {
    fits::<u8>(v)
}
pub fn in_range_u16(v: i128) -> bool {
    fits::<u16>(v)
}
pub fn in_range_u32(v: i128) -> bool {
    fits::<u32>(v)
}
pub fn in_range_u64(v: i128) -> bool {
    fits::<u64>(v)
}

/// Whether `v` fits the integer `kind`. Always `false` for non-integer kinds.
pub fn in_range(kind: PrimitiveKind, v: i128) -> bool {
    match kind {
        PrimitiveKind::I8 => in_range_i8(v),
        PrimitiveKind::I16 => in_range_i16(v),
        PrimitiveKind::I32 => in_range_i32(v),
        PrimitiveKind::I64 => in_range_i64(v),
        PrimitiveKind::U8 => in_range_u8(v),
        PrimitiveKind::U16 => in_range_u16(v),
        PrimitiveKind::U32 => in_range_u32(v),
        PrimitiveKind::U64 => in_range_u64(v),
        _ => false,
    }
}

pub fn ensure_in_range(kind: PrimitiveKind, v: i128) -> Result<()> {
    if in_range(kind, v) {
        Ok(())
    } else {
        Err(CodecError::Range { kind, value: v })
    }
}

/// Range-checks `v` against `kind` and narrows it to the wire type `T`.
pub fn narrow<T: FromPrimitive>(kind: PrimitiveKind, v: i128) -> Result<T> {
    ensure_in_range(kind, v)?;
    T::from_i128(v).ok_or(CodecError::Range { kind, value: v })
}

/// A byte length or member count must fit the `u64` prefix that precedes it on the wire.
pub fn len_prefix(len: usize) -> Result<u64> {
    u64::try_from(len).map_err(|_| CodecError::Range {
        kind: PrimitiveKind::U64,
        value: len as i128,
    })
}
