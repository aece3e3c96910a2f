mod context;
mod frame;

use crate::config::DecodeLimits;
use context::{enter_named, DeserializeContext};
use frame::{DeserFrame, FrameState, Slot};
use stackwire_types::error::{CodecError, Result};
use stackwire_types::io::{ByteReader, IoReader};
use stackwire_types::layout::{FixedRecordLayout, NamedRecordLayout};
use stackwire_types::value::Record;
use std::sync::Arc;
use tracing::debug;

/// Decodes with the given [`DecodeLimits`]. The free functions use the defaults.
#[derive(Clone, Copy, Default, Debug)]
pub struct Deserializer {
    limits: DecodeLimits,
}

impl Deserializer {
    pub fn with_limits(limits: DecodeLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &DecodeLimits {
        &self.limits
    }

    pub fn deserialize_fixed<R: ByteReader>(
        &self,
        r: &mut R,
        layout: &Arc<FixedRecordLayout>,
    ) -> Result<Record> {
        debug!(fields = layout.len(), "deserialize fixed root");
        let mut ctx = DeserializeContext::new(r, self.limits);
        ctx.push(DeserFrame {
            slot: Slot::Root,
            state: FrameState::fixed(Arc::clone(layout)),
        });
        let root = ctx.run()?;
        debug!(max_depth = ctx.max_depth(), "deserialized fixed root");
        Ok(root)
    }

    /// The wire may carry fewer members than the layout declares, in any order.
    /// Fields it omits stay unset in the returned record.
    pub fn deserialize_named<R: ByteReader>(
        &self,
        r: &mut R,
        layout: &Arc<NamedRecordLayout>,
    ) -> Result<Record> {
        debug!(fields = layout.len(), "deserialize named root");
        let mut ctx = DeserializeContext::new(r, self.limits);
        let state = enter_named(ctx.reader(), Arc::clone(layout))?;
        ctx.push(DeserFrame {
            slot: Slot::Root,
            state,
        });
        let root = ctx.run()?;
        debug!(max_depth = ctx.max_depth(), "deserialized named root");
        Ok(root)
    }

    /// Like [`Self::deserialize_fixed`], but `buf` must hold exactly one record.
    pub fn from_bytes_fixed(&self, buf: &[u8], layout: &Arc<FixedRecordLayout>) -> Result<Record> {
        let mut r = IoReader::new(buf);
        let record = self.deserialize_fixed(&mut r, layout)?;
        ensure_consumed(&r, buf)?;
        Ok(record)
    }

    /// Like [`Self::deserialize_named`], but `buf` must hold exactly one record.
    pub fn from_bytes_named(&self, buf: &[u8], layout: &Arc<NamedRecordLayout>) -> Result<Record> {
        let mut r = IoReader::new(buf);
        let record = self.deserialize_named(&mut r, layout)?;
        ensure_consumed(&r, buf)?;
        Ok(record)
    }
}

fn ensure_consumed(r: &IoReader<&[u8]>, buf: &[u8]) -> Result<()> {
    let trailing = buf.len() as u64 - r.position();
    if trailing > 0 {
        return Err(CodecError::malformed(format!(
            "{trailing} trailing bytes after the record."
        )));
    }
    Ok(())
}

pub fn deserialize_fixed<R: ByteReader>(r: &mut R, layout: &Arc<FixedRecordLayout>) -> Result<Record> {
    Deserializer::default().deserialize_fixed(r, layout)
}

pub fn deserialize_named<R: ByteReader>(r: &mut R, layout: &Arc<NamedRecordLayout>) -> Result<Record> {
    Deserializer::default().deserialize_named(r, layout)
}

pub fn from_bytes_fixed(buf: &[u8], layout: &Arc<FixedRecordLayout>) -> Result<Record> {
    Deserializer::default().from_bytes_fixed(buf, layout)
}

pub fn from_bytes_named(buf: &[u8], layout: &Arc<NamedRecordLayout>) -> Result<Record> {
    Deserializer::default().from_bytes_named(buf, layout)
}
