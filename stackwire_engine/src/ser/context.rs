use super::frame::SerFrame;
use stackwire_types::error::{CodecError, Result};
use stackwire_types::io::ByteWriter;
use stackwire_types::layout::{DataType, NamedRecordLayout, PrimitiveKind};
use stackwire_types::range;
use stackwire_types::value::{Record, Value};
use std::sync::Arc;
use tracing::trace;

/// What the loop does after advancing the top frame.
enum Next<'v> {
    Continue,
    Push(SerFrame<'v>),
    Pop,
}

/// The per-call state: the frame stack and the writer. Discarded when the call returns.
pub(super) struct SerializeContext<'v, 'w, W> {
    frames: Vec<SerFrame<'v>>,
    writer: &'w mut W,
    max_depth: usize,
}

impl<'v, 'w, W: ByteWriter> SerializeContext<'v, 'w, W> {
    pub fn new(writer: &'w mut W) -> Self {
        Self {
            frames: vec![],
            writer,
            max_depth: 0,
        }
    }

    pub fn writer(&mut self) -> &mut W {
        self.writer
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn push(&mut self, frame: SerFrame<'v>) {
        trace!(depth = self.frames.len() + 1, "push {}", frame.variant_name());
        self.frames.push(frame);
        self.max_depth = self.max_depth.max(self.frames.len());
    }

    fn pop(&mut self) {
        if let Some(frame) = self.frames.pop() {
            trace!(depth = self.frames.len(), "pop {}", frame.variant_name());
        }
    }

    /// Runs until every pushed frame has been fully written.
    pub fn run(&mut self) -> Result<()> {
        while let Some(top) = self.frames.last_mut() {
            // Each index is advanced before its value is encoded: encoding may
            // push a frame above this one, and this frame resumes at the next member.
            let next = match top {
                SerFrame::FixedMember {
                    layout,
                    record,
                    member_idx,
                } => match layout.fields().get(*member_idx) {
                    None => Next::Pop,
                    Some(field) => {
                        *member_idx += 1;
                        let record: &'v Record = *record;
                        encode_value(self.writer, &field.data_type, record.get(&field.name))?
                    }
                },
                SerFrame::NamedMember {
                    layout,
                    record,
                    member_idx,
                } => {
                    let record: &'v Record = *record;
                    let mut present = None;
                    while let Some(field) = layout.fields().get(*member_idx) {
                        *member_idx += 1;
                        if let Some(value) = record.get(&field.name) {
                            present = Some((field, value));
                            break;
                        }
                    }
                    match present {
                        None => Next::Pop,
                        Some((field, value)) => {
                            encode_str(self.writer, &field.name)?;
                            encode_value(self.writer, &field.data_type, Some(value))?
                        }
                    }
                }
                SerFrame::ArrayMember {
                    elem_type,
                    elems,
                    elem_idx,
                } => {
                    let elems: &'v [Value] = *elems;
                    match elems.get(*elem_idx) {
                        None => Next::Pop,
                        Some(elem) => {
                            *elem_idx += 1;
                            encode_value(self.writer, elem_type, Some(elem))?
                        }
                    }
                }
            };

            match next {
                Next::Continue => {}
                Next::Push(frame) => self.push(frame),
                Next::Pop => self.pop(),
            }
        }
        Ok(())
    }
}

/// Validates a named record against its layout and writes its member count.
/// Used for roots and for nested named records alike.
pub(super) fn enter_named<'v, W: ByteWriter>(
    writer: &mut W,
    layout: Arc<NamedRecordLayout>,
    record: &'v Record,
) -> Result<SerFrame<'v>> {
    if let Some(name) = record.keys().find(|name| layout.index_of(name).is_none()) {
        return Err(CodecError::unknown_field(name.as_str()));
    }
    // Every key is a layout field, so the key count is the member count.
    writer.write_u64(range::len_prefix(record.len())?)?;
    Ok(SerFrame::named(layout, record))
}

/// Writes a leaf in place, or the header of a composite and the frame that will write its members.
fn encode_value<'v, W: ByteWriter>(
    writer: &mut W,
    data_type: &DataType,
    value: Option<&'v Value>,
) -> Result<Next<'v>> {
    match data_type {
        DataType::Primitive(kind) => {
            let value = value.ok_or_else(|| CodecError::mismatch(kind, "nothing"))?;
            encode_leaf(writer, *kind, value)?;
            Ok(Next::Continue)
        }
        DataType::FixedRecord(layout) => match value {
            None | Some(Value::Null) => {
                writer.write_bool(false)?;
                Ok(Next::Continue)
            }
            Some(Value::Record(record)) => {
                let layout = layout.resolve()?;
                writer.write_bool(true)?;
                Ok(Next::Push(SerFrame::fixed(layout, record)))
            }
            Some(other) => Err(CodecError::mismatch(data_type, other.kind_name())),
        },
        DataType::NamedRecord(layout) => match value {
            None | Some(Value::Null) => {
                writer.write_bool(false)?;
                Ok(Next::Continue)
            }
            Some(Value::Record(record)) => {
                let layout = layout.resolve()?;
                writer.write_bool(true)?;
                Ok(Next::Push(enter_named(writer, layout, record)?))
            }
            Some(other) => Err(CodecError::mismatch(data_type, other.kind_name())),
        },
        // A null array is indistinguishable from an empty one on the wire.
        DataType::Array(elem_type) => match value {
            None | Some(Value::Null) => {
                writer.write_u64(0)?;
                Ok(Next::Continue)
            }
            Some(Value::Array(elems)) => {
                writer.write_u64(range::len_prefix(elems.len())?)?;
                if elems.is_empty() {
                    Ok(Next::Continue)
                } else {
                    Ok(Next::Push(SerFrame::array(Arc::clone(elem_type), elems)))
                }
            }
            Some(other) => Err(CodecError::mismatch(data_type, other.kind_name())),
        },
        _ => Err(CodecError::UnsupportedKind {
            kind: data_type.to_string(),
        }),
    }
}

fn encode_leaf<W: ByteWriter>(writer: &mut W, kind: PrimitiveKind, value: &Value) -> Result<()> {
    match (kind, value) {
        (PrimitiveKind::I8, Value::Int(i)) => writer.write_i8(range::narrow(kind, *i)?),
        (PrimitiveKind::I16, Value::Int(i)) => writer.write_i16(range::narrow(kind, *i)?),
        (PrimitiveKind::I32, Value::Int(i)) => writer.write_i32(range::narrow(kind, *i)?),
        (PrimitiveKind::I64, Value::Int(i)) => writer.write_i64(range::narrow(kind, *i)?),
        (PrimitiveKind::U8, Value::Int(i)) => writer.write_u8(range::narrow(kind, *i)?),
        (PrimitiveKind::U16, Value::Int(i)) => writer.write_u16(range::narrow(kind, *i)?),
        (PrimitiveKind::U32, Value::Int(i)) => writer.write_u32(range::narrow(kind, *i)?),
        (PrimitiveKind::U64, Value::Int(i)) => writer.write_u64(range::narrow(kind, *i)?),
        (PrimitiveKind::F32, Value::Float(f)) => writer.write_f32(*f as f32),
        (PrimitiveKind::F64, Value::Float(f)) => writer.write_f64(*f),
        (PrimitiveKind::Bool, Value::Bool(b)) => writer.write_bool(*b),
        (PrimitiveKind::String, Value::Str(s)) => encode_str(writer, s),
        (kind, value) => {
            let is_known = kind.is_integer()
                || kind.is_float()
                || matches!(kind, PrimitiveKind::String | PrimitiveKind::Bool);
            if is_known {
                Err(CodecError::mismatch(kind, value.kind_name()))
            } else {
                Err(CodecError::UnsupportedKind {
                    kind: kind.to_string(),
                })
            }
        }
    }
}

/// `u64` UTF-8 byte length, then the bytes. No terminator.
fn encode_str<W: ByteWriter>(writer: &mut W, s: &str) -> Result<()> {
    writer.write_u64(range::len_prefix(s.len())?)?;
    writer.write_bytes(s.as_bytes())
}
