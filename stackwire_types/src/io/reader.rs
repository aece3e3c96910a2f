use crate::error::{CodecError, Result};
use std::io::Read;

/// Reads fixed-width primitives and raw blocks. Any failure aborts the call.
pub trait ByteReader {
    /// Exactly `len` bytes, or a `MalformedStream` error if the stream ends first.
    fn read_bytes(&mut self, len: u64) -> Result<Vec<u8>>;

    fn read_i8(&mut self) -> Result<i8>;
    fn read_i16(&mut self) -> Result<i16>;
    fn read_i32(&mut self) -> Result<i32>;
    fn read_i64(&mut self) -> Result<i64>;
    fn read_u8(&mut self) -> Result<u8>;
    fn read_u16(&mut self) -> Result<u16>;
    fn read_u32(&mut self) -> Result<u32>;
    fn read_u64(&mut self) -> Result<u64>;
    fn read_f32(&mut self) -> Result<f32>;
    fn read_f64(&mut self) -> Result<f64>;
    /// One byte; nonzero is `true`.
    fn read_bool(&mut self) -> Result<bool>;
}

pub struct IoReader<R> {
    r: R,
    r_len: u64,
}

impl<R: Read> IoReader<R> {
    pub fn new(r: R) -> Self {
        Self { r, r_len: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.r_len
    }

    pub fn into_inner(self) -> R {
        self.r
    }

    fn read_array<const LEN: usize>(&mut self) -> Result<[u8; LEN]> {
        let mut buf = [0u8; LEN];
        self.r.read_exact(&mut buf)?;
        self.r_len += LEN as u64;
        Ok(buf)
    }
}

impl<R: Read> ByteReader for IoReader<R> {
    fn read_bytes(&mut self, len: u64) -> Result<Vec<u8>> {
        // Grows with the data actually present, so a lying length cannot force a huge allocation.
        let mut buf = vec![];
        let got = (&mut self.r).take(len).read_to_end(&mut buf)? as u64;
        self.r_len += got;
        if got < len {
            return Err(CodecError::malformed(format!(
                "Expected a block of {len} bytes but the stream ended after {got}."
            )));
        }
        Ok(buf)
    }

    fn read_i8(&mut self) -> Result<i8> {
        Ok(i8::from_le_bytes(self.read_array()?))
    }
    fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }
    fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }
    fn read_i64(&mut self) -> Result<i64> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }
    fn read_u8(&mut self) -> Result<u8> {
        Ok(u8::from_le_bytes(self.read_array()?))
    }
    fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }
    fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }
    fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }
    fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.read_array()?))
    }
    fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.read_array()?))
    }
    fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }
}
