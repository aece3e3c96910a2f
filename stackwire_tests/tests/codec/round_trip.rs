use anyhow::Result;
use stackwire_engine::{from_bytes_fixed, from_bytes_named, to_bytes_fixed, to_bytes_named};
use stackwire_tests::{all_primitives_layout, point_layout, xy_layout};
use stackwire_types::layout::{DataType, Field, FixedRecordLayout, NamedRecordLayout};
use stackwire_types::value::{Record, Value};
use std::sync::Arc;

fn verify_fixed(layout: &Arc<FixedRecordLayout>, pre_serialized: &Record) -> Result<Vec<u8>> {
    let serialized = to_bytes_fixed(layout, pre_serialized)?;
    let deserialized = from_bytes_fixed(&serialized, layout)?;
    assert!(
        &deserialized == pre_serialized,
        "\n{pre_serialized:?}\n{deserialized:?}\n{serialized:?}\n"
    );
    Ok(serialized)
}

#[test]
fn point() -> Result<()> {
    let record = Record::new().with("a", 42).with("b", "hi");
    let serialized = verify_fixed(&point_layout(), &record)?;
    assert_eq!(serialized.len(), 4 + 8 + 2);
    Ok(())
}

#[test]
fn every_primitive() -> Result<()> {
    let layout = all_primitives_layout();
    let gen = |int: fn(i128, i128) -> i128| {
        Record::new()
            .with("i8", int(i8::MIN.into(), i8::MAX.into()))
            .with("i16", int(i16::MIN.into(), i16::MAX.into()))
            .with("i32", int(i32::MIN.into(), i32::MAX.into()))
            .with("i64", int(i64::MIN.into(), i64::MAX.into()))
            .with("u8", int(0, u8::MAX.into()))
            .with("u16", int(0, u16::MAX.into()))
            .with("u32", int(0, u32::MAX.into()))
            .with("u64", int(0, u64::MAX.into()))
            .with("f32", 0.5)
            .with("f64", -1e300)
            .with("string", "")
            .with("bool", false)
    };

    let mins = verify_fixed(&layout, &gen(|min, _max| min))?;
    let maxs = verify_fixed(&layout, &gen(|_min, max| max))?;
    let mids = verify_fixed(&layout, &gen(|_min, _max| 7))?;

    // Fixed widths plus the empty string's prefix and the bool byte.
    let width = 1 + 2 + 4 + 8 + 1 + 2 + 4 + 8 + 4 + 8 + 8 + 1;
    assert_eq!(mins.len(), width);
    assert_eq!(maxs.len(), width);
    assert_eq!(mids.len(), width);
    Ok(())
}

#[test]
fn multibyte_string() -> Result<()> {
    let s = "añ€😀";
    let serialized = verify_fixed(&point_layout(), &Record::new().with("a", 0).with("b", s))?;
    assert_eq!(s.chars().count(), 4);
    assert_eq!(s.len(), 10);
    assert_eq!(&serialized[4..12], &10u64.to_le_bytes());
    assert_eq!(&serialized[12..], s.as_bytes());
    Ok(())
}

#[test]
fn array_of_i32() -> Result<()> {
    let layout = Arc::new(FixedRecordLayout::new(vec![Field::new(
        "xs",
        DataType::array(DataType::i32()),
    )]));
    let xs = vec![Value::from(1), Value::from(2), Value::from(3)];
    let serialized = verify_fixed(&layout, &Record::new().with("xs", xs))?;
    assert_eq!(&serialized[..8], &3u64.to_le_bytes());
    assert_eq!(serialized.len(), 8 + 3 * 4);
    Ok(())
}

/// A null array and an empty array share the zero count; both come back empty.
#[test]
fn null_array_returns_empty() -> Result<()> {
    let layout = Arc::new(FixedRecordLayout::new(vec![Field::new(
        "xs",
        DataType::array(DataType::string()),
    )]));

    let empty = Record::new().with("xs", Value::Array(vec![]));
    verify_fixed(&layout, &empty)?;

    let null = Record::new().with("xs", Value::Null);
    let serialized = to_bytes_fixed(&layout, &null)?;
    let deserialized = from_bytes_fixed(&serialized, &layout)?;
    assert!(deserialized != null);
    assert!(deserialized == empty);
    Ok(())
}

#[test]
fn null_nested_record() -> Result<()> {
    let layout = Arc::new(FixedRecordLayout::new(vec![Field::new(
        "inner",
        DataType::fixed(point_layout()),
    )]));
    let serialized = verify_fixed(&layout, &Record::new().with("inner", Value::Null))?;
    assert_eq!(serialized, vec![0]);
    Ok(())
}

/// An unset composite field of a fixed record is written as null and comes back as an explicit null.
#[test]
fn unset_nested_record_returns_null() -> Result<()> {
    let layout = Arc::new(FixedRecordLayout::new(vec![Field::new(
        "inner",
        DataType::fixed(point_layout()),
    )]));

    let unset = Record::new();
    let serialized = to_bytes_fixed(&layout, &unset)?;
    assert_eq!(serialized, vec![0]);

    let deserialized = from_bytes_fixed(&serialized, &layout)?;
    assert!(deserialized != unset);
    assert!(deserialized == Record::new().with("inner", Value::Null));
    Ok(())
}

/// Fixed inside named inside array inside fixed.
#[test]
fn mixed_nesting() -> Result<()> {
    let entry = Arc::new(NamedRecordLayout::try_new(vec![
        Field::new("label", DataType::string()),
        Field::new("at", DataType::fixed(point_layout())),
        Field::new("flags", DataType::array(DataType::bool())),
        Field::new("inner", DataType::named(xy_layout()?)),
    ])?);
    let layout = Arc::new(FixedRecordLayout::new(vec![
        Field::new("version", DataType::u16()),
        Field::new("entries", DataType::array(DataType::named(entry))),
        Field::new("matrix", DataType::array(DataType::array(DataType::f64()))),
    ]));

    let record = Record::new()
        .with("version", 3)
        .with(
            "entries",
            vec![
                Value::Record(
                    Record::new()
                        .with("label", "first")
                        .with("at", Record::new().with("a", -1).with("b", "there"))
                        .with("flags", vec![Value::from(true), Value::from(false)])
                        .with("inner", Record::new().with("y", true)),
                ),
                Value::Record(Record::new().with("at", Value::Null)),
                Value::Record(Record::new()),
            ],
        )
        .with(
            "matrix",
            vec![
                Value::Array(vec![Value::from(1.0), Value::from(2.5)]),
                Value::Array(vec![]),
                Value::Array(vec![Value::from(-0.125)]),
            ],
        );

    verify_fixed(&layout, &record)?;
    Ok(())
}

#[test]
fn named_root() -> Result<()> {
    let layout = xy_layout()?;
    for record in [
        Record::new().with("x", -5).with("y", true),
        Record::new().with("x", 127),
        Record::new(),
    ] {
        let serialized = to_bytes_named(&layout, &record)?;
        let deserialized = from_bytes_named(&serialized, &layout)?;
        assert!(deserialized == record, "{record:?} {deserialized:?}");
    }
    Ok(())
}
