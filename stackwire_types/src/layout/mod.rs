//! # Layouts
//!
//! A layout is the caller-supplied schema that both engines walk. Nothing on
//! the wire identifies a type; reader and writer must agree on the root layout.
//!
//! All integers and floats are little-endian and fixed-width. Lengths and
//! counts are `u64`.
//!
//! ```text
//! Primitive::I8 .. Primitive::U64, F32, F64 {
//!     body:               [u8; width],
//! }
//!
//! Primitive::Bool {
//!     body:               u8,     // nonzero is true
//! }
//!
//! Primitive::String {
//!     byte_len:           u64,    // UTF-8 byte length, not char count
//!     body:               [u8; byte_len],
//! }
//!
//! FixedRecord {
//!     is_present:         u8,
//!     // Only if is_present. Layout order; no names, no count.
//!     field_0:            <field_0.data_type>,
//!     field_1:            <field_1.data_type>,
//!     ...
//! }
//!
//! NamedRecord {
//!     is_present:         u8,
//!     // Only if is_present.
//!     members_count:      u64,
//!     member_0: {                 // any order, possibly partial
//!         name_len:           u64,
//!         name:               [u8; name_len],
//!         value:              <data_type of the named field>,
//!     },
//!     ...
//! }
//!
//! Array {
//!     elems_count:        u64,    // 0 for both empty and absent
//!     elem_0:             <elem_type>,
//!     ...
//! }
//! ```

mod data_type;
mod fixed;
mod layout_ref;
mod named;
mod primitive;

pub use data_type::*;
pub use fixed::*;
pub use layout_ref::*;
pub use named::*;
pub use primitive::*;
