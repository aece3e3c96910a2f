//! The byte-level collaborators the engines drive.
//!
//! The engines only ever call these traits; they never touch a buffer directly.
//! [`IoReader`] and [`IoWriter`] adapt any [`std::io::Read`]/[`std::io::Write`],
//! little-endian and fixed-width.

mod reader;
mod writer;

pub use reader::*;
pub use writer::*;
