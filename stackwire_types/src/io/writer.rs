use crate::error::Result;
use std::io::Write;

/// Writes fixed-width primitives and raw blocks. Any failure aborts the call,
/// leaving the sink in an unspecified partial state.
pub trait ByteWriter {
    fn write_bytes(&mut self, buf: &[u8]) -> Result<()>;

    fn write_i8(&mut self, v: i8) -> Result<()>;
    fn write_i16(&mut self, v: i16) -> Result<()>;
    fn write_i32(&mut self, v: i32) -> Result<()>;
    fn write_i64(&mut self, v: i64) -> Result<()>;
    fn write_u8(&mut self, v: u8) -> Result<()>;
    fn write_u16(&mut self, v: u16) -> Result<()>;
    fn write_u32(&mut self, v: u32) -> Result<()>;
    fn write_u64(&mut self, v: u64) -> Result<()>;
    fn write_f32(&mut self, v: f32) -> Result<()>;
    fn write_f64(&mut self, v: f64) -> Result<()>;
    fn write_bool(&mut self, v: bool) -> Result<()>;
}

pub struct IoWriter<W> {
    w: W,
    w_len: u64,
}

impl<W: Write> IoWriter<W> {
    pub fn new(w: W) -> Self {
        Self { w, w_len: 0 }
    }

    /// Bytes accepted so far.
    pub fn w_len(&self) -> u64 {
        self.w_len
    }

    pub fn flush(&mut self) -> Result<()> {
        self.w.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.w
    }
}

impl<W: Write> ByteWriter for IoWriter<W> {
    fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.w.write_all(buf)?;
        self.w_len += buf.len() as u64;
        Ok(())
    }

    fn write_i8(&mut self, v: i8) -> Result<()> {
        self.write_bytes(&v.to_le_bytes())
    }
    fn write_i16(&mut self, v: i16) -> Result<()> {
        self.write_bytes(&v.to_le_bytes())
    }
    fn write_i32(&mut self, v: i32) -> Result<()> {
        self.write_bytes(&v.to_le_bytes())
    }
    fn write_i64(&mut self, v: i64) -> Result<()> {
        self.write_bytes(&v.to_le_bytes())
    }
    fn write_u8(&mut self, v: u8) -> Result<()> {
        self.write_bytes(&v.to_le_bytes())
    }
    fn write_u16(&mut self, v: u16) -> Result<()> {
        self.write_bytes(&v.to_le_bytes())
    }
    fn write_u32(&mut self, v: u32) -> Result<()> {
        self.write_bytes(&v.to_le_bytes())
    }
    fn write_u64(&mut self, v: u64) -> Result<()> {
        self.write_bytes(&v.to_le_bytes())
    }
    fn write_f32(&mut self, v: f32) -> Result<()> {
        self.write_bytes(&v.to_le_bytes())
    }
    fn write_f64(&mut self, v: f64) -> Result<()> {
        self.write_bytes(&v.to_le_bytes())
    }
    fn write_bool(&mut self, v: bool) -> Result<()> {
        self.write_u8(u8::from(v))
    }
}
