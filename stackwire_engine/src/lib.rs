//! Serializer and deserializer engines.
//!
//! Neither engine recurses on the host stack. Each call owns a context holding
//! an explicit stack of frames, one per composite value in progress, and runs a
//! single loop that advances the top frame until the stack is empty. Nesting
//! depth is bounded only by memory.
//!
//! Root records are written without a presence flag. A named root still
//! carries its member count.

pub mod config;
mod deser;
mod ser;

pub use config::DecodeLimits;
pub use deser::{deserialize_fixed, deserialize_named, from_bytes_fixed, from_bytes_named, Deserializer};
pub use ser::{serialize_fixed, serialize_named, to_bytes_fixed, to_bytes_named};
