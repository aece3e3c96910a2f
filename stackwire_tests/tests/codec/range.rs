use anyhow::Result;
use stackwire_engine::{serialize_fixed, to_bytes_fixed};
use stackwire_types::error::CodecError;
use stackwire_types::io::IoWriter;
use stackwire_types::layout::{DataType, Field, FixedRecordLayout, PrimitiveKind};
use stackwire_types::value::Record;
use std::sync::Arc;

fn bounds() -> [(PrimitiveKind, i128, i128); 8] {
    [
        (PrimitiveKind::I8, i8::MIN.into(), i8::MAX.into()),
        (PrimitiveKind::I16, i16::MIN.into(), i16::MAX.into()),
        (PrimitiveKind::I32, i32::MIN.into(), i32::MAX.into()),
        (PrimitiveKind::I64, i64::MIN.into(), i64::MAX.into()),
        (PrimitiveKind::U8, 0, u8::MAX.into()),
        (PrimitiveKind::U16, 0, u16::MAX.into()),
        (PrimitiveKind::U32, 0, u32::MAX.into()),
        (PrimitiveKind::U64, 0, u64::MAX.into()),
    ]
}

fn single(kind: PrimitiveKind) -> Arc<FixedRecordLayout> {
    Arc::new(FixedRecordLayout::new(vec![Field::new("v", DataType::from(kind))]))
}

#[test]
fn boundaries_succeed() -> Result<()> {
    for (kind, min, max) in bounds() {
        let layout = single(kind);
        for v in [min, max] {
            let serialized = to_bytes_fixed(&layout, &Record::new().with("v", v))?;
            assert_eq!(Some(serialized.len()), kind.fixed_width(), "{kind} {v}");
        }
    }
    Ok(())
}

#[test]
fn one_past_fails_before_writing() {
    for (kind, min, max) in bounds() {
        let layout = single(kind);
        for v in [min - 1, max + 1] {
            let mut w = IoWriter::new(vec![]);
            let res = serialize_fixed(&mut w, &layout, &Record::new().with("v", v));
            assert!(
                matches!(res, Err(CodecError::Range { kind: k, value }) if k == kind && value == v),
                "{kind} {v}"
            );
            assert_eq!(w.w_len(), 0, "{kind} {v}");
        }
    }
}

#[test]
fn failure_mid_record_aborts() {
    let layout = Arc::new(FixedRecordLayout::new(vec![
        Field::new("ok", DataType::u8()),
        Field::new("bad", DataType::u8()),
        Field::new("never", DataType::u8()),
    ]));
    let record = Record::new().with("ok", 1).with("bad", 256).with("never", 3);

    let mut w = IoWriter::new(vec![]);
    let res = serialize_fixed(&mut w, &layout, &record);
    assert!(matches!(res, Err(CodecError::Range { .. })));
    // Only the prefix before the fault reached the writer.
    assert_eq!(w.into_inner(), vec![1]);
}
