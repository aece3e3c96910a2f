//! Schema model, run-time values and byte collaborators shared by the
//! stackwire serializer and deserializer.
//!
//! A caller describes the shape of its data with a [`layout::DataType`] tree,
//! builds a [`value::Record`] that conforms to it, and hands both to the engine.
//! Nothing here discovers shapes by itself; the layout is always explicit.

pub mod error;
pub mod io;
pub mod layout;
pub mod range;
pub mod value;

pub use error::{CodecError, Result};
