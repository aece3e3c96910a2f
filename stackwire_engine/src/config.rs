//! Decode-side limits. Encoding has no tunables; byte order is always little-endian.

/// Largest string or field-name byte length accepted from the wire.
pub const DEFAULT_MAX_LEN: u64 = u32::MAX as u64;

/// Most elements reserved up front for an array, whatever count the wire declares.
pub const DEFAULT_PREALLOC_CAP: usize = 4096;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DecodeLimits {
    /// A longer length prefix is rejected as a malformed stream before any byte is read.
    pub max_len: u64,
    /// Arrays larger than this still decode; they grow as elements arrive.
    pub prealloc_cap: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            prealloc_cap: DEFAULT_PREALLOC_CAP,
        }
    }
}

impl DecodeLimits {
    pub(crate) fn prealloc(&self, elems_ct: u64) -> usize {
        usize::try_from(elems_ct)
            .unwrap_or(usize::MAX)
            .min(self.prealloc_cap)
    }
}
