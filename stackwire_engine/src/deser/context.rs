use super::frame::{DeserFrame, FrameState, Slot};
use crate::config::DecodeLimits;
use stackwire_types::error::{CodecError, Result};
use stackwire_types::io::ByteReader;
use stackwire_types::layout::{DataType, NamedRecordLayout, PrimitiveKind};
use stackwire_types::range;
use stackwire_types::value::{Record, Value};
use std::sync::Arc;
use tracing::trace;

/// A value read in place, or a composite whose members are still to come.
enum Decoded {
    Done(Value),
    Enter(FrameState),
}

enum Next {
    Continue,
    Push(DeserFrame),
    Pop,
}

/// The per-call state: the frame stack and the reader. Discarded when the call returns.
pub(super) struct DeserializeContext<'r, R> {
    frames: Vec<DeserFrame>,
    reader: &'r mut R,
    limits: DecodeLimits,
    max_depth: usize,
}

impl<'r, R: ByteReader> DeserializeContext<'r, R> {
    pub fn new(reader: &'r mut R, limits: DecodeLimits) -> Self {
        Self {
            frames: vec![],
            reader,
            limits,
            max_depth: 0,
        }
    }

    pub fn reader(&mut self) -> &mut R {
        self.reader
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn push(&mut self, frame: DeserFrame) {
        trace!(depth = self.frames.len() + 1, "push {}", frame.state.variant_name());
        self.frames.push(frame);
        self.max_depth = self.max_depth.max(self.frames.len());
    }

    /// Runs until the root frame pops, and returns the root record.
    pub fn run(&mut self) -> Result<Record> {
        while let Some(top) = self.frames.last_mut() {
            let next = match &mut top.state {
                FrameState::FixedMember {
                    layout,
                    record,
                    member_idx,
                } => match layout.fields().get(*member_idx) {
                    None => Next::Pop,
                    Some(field) => {
                        *member_idx += 1;
                        match decode_value(self.reader, &self.limits, &field.data_type)? {
                            Decoded::Done(value) => {
                                record.insert(field.name.clone(), value);
                                Next::Continue
                            }
                            Decoded::Enter(state) => Next::Push(DeserFrame {
                                slot: Slot::Field(field.name.clone()),
                                state,
                            }),
                        }
                    }
                },
                FrameState::NamedMember {
                    layout,
                    record,
                    member_idx,
                    members_ct,
                } => {
                    if *member_idx >= *members_ct {
                        Next::Pop
                    } else {
                        *member_idx += 1;
                        let name = decode_str(self.reader, &self.limits)?;
                        let field = layout
                            .field_by_name(&name)
                            .ok_or_else(|| CodecError::unknown_field(name.as_str()))?;
                        if record.contains_key(&name) {
                            return Err(CodecError::malformed(format!(
                                "Member {name:?} appears twice in one named record."
                            )));
                        }
                        match decode_value(self.reader, &self.limits, &field.data_type)? {
                            Decoded::Done(value) => {
                                record.insert(name, value);
                                Next::Continue
                            }
                            Decoded::Enter(state) => Next::Push(DeserFrame {
                                slot: Slot::Field(name),
                                state,
                            }),
                        }
                    }
                }
                FrameState::ArrayMember {
                    elem_type,
                    elems,
                    elem_idx,
                    elems_ct,
                } => {
                    if *elem_idx >= *elems_ct {
                        Next::Pop
                    } else {
                        *elem_idx += 1;
                        match decode_value(self.reader, &self.limits, elem_type)? {
                            Decoded::Done(value) => {
                                elems.push(value);
                                Next::Continue
                            }
                            Decoded::Enter(state) => Next::Push(DeserFrame {
                                slot: Slot::Elem,
                                state,
                            }),
                        }
                    }
                }
            };

            match next {
                Next::Continue => {}
                Next::Push(frame) => self.push(frame),
                Next::Pop => {
                    if let Some(root) = self.pop()? {
                        return Ok(root);
                    }
                }
            }
        }
        Err(CodecError::invalid_layout("Deserialization ran without a root frame."))
    }

    /// Hands the finished top container to its parent. Returns the root once it is finished.
    fn pop(&mut self) -> Result<Option<Record>> {
        let DeserFrame { slot, state } = match self.frames.pop() {
            Some(frame) => frame,
            None => return Ok(None),
        };
        trace!(depth = self.frames.len(), "pop {}", state.variant_name());

        match (self.frames.last_mut(), slot) {
            (Some(parent), slot) => {
                parent.state.accept(slot, state.into_value())?;
                Ok(None)
            }
            (None, Slot::Root) => state.into_record().map(Some),
            (None, _) => Err(CodecError::invalid_layout(
                "A nested frame outlived the root frame.",
            )),
        }
    }
}

/// Reads the member count of a present named record and checks it against the layout.
/// Used for roots and for nested named records alike.
pub(super) fn enter_named<R: ByteReader>(
    reader: &mut R,
    layout: Arc<NamedRecordLayout>,
) -> Result<FrameState> {
    let members_ct = reader.read_u64()?;
    // Names are unique per instance, so a larger count cannot be honoured.
    if members_ct > layout.len() as u64 {
        return Err(CodecError::malformed(format!(
            "Member count {members_ct} exceeds the {} fields of the layout.",
            layout.len()
        )));
    }
    Ok(FrameState::named(layout, members_ct))
}

fn decode_value<R: ByteReader>(
    reader: &mut R,
    limits: &DecodeLimits,
    data_type: &DataType,
) -> Result<Decoded> {
    match data_type {
        DataType::Primitive(kind) => Ok(Decoded::Done(decode_leaf(reader, limits, *kind)?)),
        DataType::FixedRecord(layout) => {
            if !reader.read_bool()? {
                return Ok(Decoded::Done(Value::Null));
            }
            Ok(Decoded::Enter(FrameState::fixed(layout.resolve()?)))
        }
        DataType::NamedRecord(layout) => {
            if !reader.read_bool()? {
                return Ok(Decoded::Done(Value::Null));
            }
            Ok(Decoded::Enter(enter_named(reader, layout.resolve()?)?))
        }
        // Zero covers both empty and absent; either way the result is an empty array.
        DataType::Array(elem_type) => {
            let elems_ct = reader.read_u64()?;
            if elems_ct == 0 {
                return Ok(Decoded::Done(Value::Array(vec![])));
            }
            Ok(Decoded::Enter(FrameState::array(
                Arc::clone(elem_type),
                elems_ct,
                limits.prealloc(elems_ct),
            )))
        }
        _ => Err(CodecError::UnsupportedKind {
            kind: data_type.to_string(),
        }),
    }
}

fn decode_leaf<R: ByteReader>(
    reader: &mut R,
    limits: &DecodeLimits,
    kind: PrimitiveKind,
) -> Result<Value> {
    let value = match kind {
        PrimitiveKind::I8 => decode_int(kind, reader.read_i8()?.into())?,
        PrimitiveKind::I16 => decode_int(kind, reader.read_i16()?.into())?,
        PrimitiveKind::I32 => decode_int(kind, reader.read_i32()?.into())?,
        PrimitiveKind::I64 => decode_int(kind, reader.read_i64()?.into())?,
        PrimitiveKind::U8 => decode_int(kind, reader.read_u8()?.into())?,
        PrimitiveKind::U16 => decode_int(kind, reader.read_u16()?.into())?,
        PrimitiveKind::U32 => decode_int(kind, reader.read_u32()?.into())?,
        PrimitiveKind::U64 => decode_int(kind, reader.read_u64()?.into())?,
        PrimitiveKind::F32 => Value::Float(reader.read_f32()?.into()),
        PrimitiveKind::F64 => Value::Float(reader.read_f64()?),
        PrimitiveKind::Bool => Value::Bool(reader.read_bool()?),
        PrimitiveKind::String => Value::Str(decode_str(reader, limits)?),
        _ => {
            return Err(CodecError::UnsupportedKind {
                kind: kind.to_string(),
            })
        }
    };
    Ok(value)
}

/// Rejects anything a corrupt or adversarial stream could place outside the declared width.
fn decode_int(kind: PrimitiveKind, v: i128) -> Result<Value> {
    range::ensure_in_range(kind, v)?;
    Ok(Value::Int(v))
}

fn decode_str<R: ByteReader>(reader: &mut R, limits: &DecodeLimits) -> Result<String> {
    let byte_len = reader.read_u64()?;
    if byte_len > limits.max_len {
        return Err(CodecError::malformed(format!(
            "String length {byte_len} exceeds the limit of {}.",
            limits.max_len
        )));
    }
    let buf = reader.read_bytes(byte_len)?;
    String::from_utf8(buf).map_err(|e| CodecError::malformed(format!("Invalid UTF-8: {e}")))
}
