use derive_more::Display;

/// Leaf kinds. Every leaf is consumed without pushing a frame.
#[non_exhaustive]
#[derive(PartialEq, Eq, Hash, Clone, Copy, Display, Debug)]
pub enum PrimitiveKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    Bool,
}

impl PrimitiveKind {
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
        )
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Byte width on the wire. `None` for the length-prefixed `String`.
    pub fn fixed_width(self) -> Option<usize> {
        let w = match self {
            Self::I8 | Self::U8 | Self::Bool => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::F64 => 8,
            Self::String => return None,
        };
        Some(w)
    }
}
