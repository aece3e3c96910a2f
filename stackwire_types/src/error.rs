use crate::layout::PrimitiveKind;
use derive_more::{Display, Error};
use std::io;

/// Every failure of a serialize or deserialize call.
///
/// An error aborts the whole call. Partially written output and partially
/// built instances must be discarded by the caller.
#[derive(Debug, Display, Error)]
pub enum CodecError {
    #[display(fmt = "Value {} is out of range for {}.", value, kind)]
    Range { kind: PrimitiveKind, value: i128 },

    #[display(fmt = "Malformed stream: {}", reason)]
    MalformedStream { reason: String },

    #[display(fmt = "Field {:?} is not in the layout.", name)]
    UnknownField { name: String },

    #[display(fmt = "Invalid layout: {}", reason)]
    InvalidLayout { reason: String },

    #[display(fmt = "Unsupported data type kind {}.", kind)]
    UnsupportedKind { kind: String },

    #[display(fmt = "Expected {} but found {}.", expected, found)]
    TypeMismatch {
        expected: String,
        found: &'static str,
    },

    #[display(fmt = "I/O failure: {}", source)]
    Io { source: io::Error },
}

pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedStream {
            reason: reason.into(),
        }
    }

    pub fn invalid_layout(reason: impl Into<String>) -> Self {
        Self::InvalidLayout {
            reason: reason.into(),
        }
    }

    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    pub fn mismatch(expected: impl ToString, found: &'static str) -> Self {
        Self::TypeMismatch {
            expected: expected.to_string(),
            found,
        }
    }
}

/// End of stream is a data fault, not a sink fault.
impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => Self::malformed("unexpected end of stream"),
            _ => Self::Io { source: e },
        }
    }
}
