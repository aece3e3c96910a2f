mod context;
mod frame;

use context::{enter_named, SerializeContext};
use frame::SerFrame;
use stackwire_types::error::Result;
use stackwire_types::io::{ByteWriter, IoWriter};
use stackwire_types::layout::{FixedRecordLayout, NamedRecordLayout};
use stackwire_types::value::Record;
use std::sync::Arc;
use tracing::debug;

/// Writes `record` positionally, in `layout` order.
///
/// On error the writer holds an unspecified prefix of the output, which the caller must discard.
pub fn serialize_fixed<W: ByteWriter>(
    w: &mut W,
    layout: &Arc<FixedRecordLayout>,
    record: &Record,
) -> Result<()> {
    debug!(fields = layout.len(), "serialize fixed root");
    let mut ctx = SerializeContext::new(w);
    ctx.push(SerFrame::fixed(Arc::clone(layout), record));
    ctx.run()?;
    debug!(max_depth = ctx.max_depth(), "serialized fixed root");
    Ok(())
}

/// Writes `record` as a member count followed by name/value pairs.
///
/// Only the fields present in `record` are written. A key that `layout` does
/// not declare is an `UnknownField` error.
pub fn serialize_named<W: ByteWriter>(
    w: &mut W,
    layout: &Arc<NamedRecordLayout>,
    record: &Record,
) -> Result<()> {
    debug!(fields = layout.len(), members = record.len(), "serialize named root");
    let mut ctx = SerializeContext::new(w);
    let root = enter_named(ctx.writer(), Arc::clone(layout), record)?;
    ctx.push(root);
    ctx.run()?;
    debug!(max_depth = ctx.max_depth(), "serialized named root");
    Ok(())
}

pub fn to_bytes_fixed(layout: &Arc<FixedRecordLayout>, record: &Record) -> Result<Vec<u8>> {
    let mut w = IoWriter::new(vec![]);
    serialize_fixed(&mut w, layout, record)?;
    Ok(w.into_inner())
}

pub fn to_bytes_named(layout: &Arc<NamedRecordLayout>, record: &Record) -> Result<Vec<u8>> {
    let mut w = IoWriter::new(vec![]);
    serialize_named(&mut w, layout, record)?;
    Ok(w.into_inner())
}
