use anyhow::Result;
use itertools::Itertools;
use rand::seq::SliceRandom;
use stackwire_engine::{from_bytes_named, to_bytes_named, DecodeLimits, Deserializer};
use stackwire_tests::xy_layout;
use stackwire_types::error::CodecError;
use stackwire_types::io::{ByteWriter, IoWriter};
use stackwire_types::layout::{DataType, Field, NamedRecordLayout};
use stackwire_types::value::{Record, Value};
use std::sync::Arc;

#[test]
fn any_subset_of_members() -> Result<()> {
    let layout = xy_layout()?;
    let members = [("x", Value::from(-7i8)), ("y", Value::from(false))];

    for subset in members.iter().powerset() {
        let record: Record = subset
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();

        let serialized = to_bytes_named(&layout, &record)?;
        let deserialized = from_bytes_named(&serialized, &layout)?;
        assert_eq!(deserialized, record);
        assert_eq!(deserialized.len(), subset.len());
    }
    Ok(())
}

#[test]
fn only_y_present() -> Result<()> {
    let layout = xy_layout()?;
    let record = Record::new().with("y", true);

    let serialized = to_bytes_named(&layout, &record)?;
    let mut exp: Vec<u8> = vec![];
    exp.extend(1u64.to_le_bytes());
    exp.extend(1u64.to_le_bytes());
    exp.extend(b"y");
    exp.push(1);
    assert_eq!(serialized, exp);

    let deserialized = from_bytes_named(&serialized, &layout)?;
    assert!(deserialized.get("x").is_none());
    assert_eq!(deserialized.get("y").and_then(Value::as_bool), Some(true));
    Ok(())
}

#[test]
fn members_in_any_wire_order() -> Result<()> {
    let layout = Arc::new(NamedRecordLayout::try_new(vec![
        Field::new("a", DataType::u8()),
        Field::new("b", DataType::u8()),
        Field::new("c", DataType::u8()),
        Field::new("d", DataType::u8()),
    ])?);
    let mut names = vec!["a", "b", "c", "d"];
    let exp: Record = names
        .iter()
        .zip(1u8..)
        .map(|(name, v)| (name.to_string(), Value::from(v)))
        .collect();

    let mut rng = rand::thread_rng();
    for _ in 0..8 {
        names.shuffle(&mut rng);
        let mut w = IoWriter::new(vec![]);
        w.write_u64(names.len() as u64)?;
        for name in names.iter() {
            w.write_u64(name.len() as u64)?;
            w.write_bytes(name.as_bytes())?;
            let v = exp.get(*name).and_then(Value::as_int).unwrap_or_default();
            w.write_u8(v as u8)?;
        }
        let deserialized = from_bytes_named(&w.into_inner(), &layout)?;
        assert_eq!(deserialized, exp);
    }
    Ok(())
}

#[test]
fn unknown_member_on_the_wire() -> Result<()> {
    let layout = xy_layout()?;
    let mut w = IoWriter::new(vec![]);
    w.write_u64(1)?;
    w.write_u64(1)?;
    w.write_bytes(b"q")?;
    w.write_i8(0)?;

    let res = from_bytes_named(&w.into_inner(), &layout);
    assert!(matches!(res, Err(CodecError::UnknownField { name }) if name == "q"));
    Ok(())
}

#[test]
fn unknown_member_in_instance() -> Result<()> {
    let layout = xy_layout()?;
    let record = Record::new().with("x", 1).with("q", 2);

    let res = to_bytes_named(&layout, &record);
    assert!(matches!(res, Err(CodecError::UnknownField { name }) if name == "q"));
    Ok(())
}

#[test]
fn long_member_name_hits_limit() -> Result<()> {
    let layout = xy_layout()?;
    let mut w = IoWriter::new(vec![]);
    w.write_u64(1)?;
    w.write_u64(64)?;
    w.write_bytes(&[b'x'; 64])?;

    let de = Deserializer::with_limits(DecodeLimits {
        max_len: 16,
        ..DecodeLimits::default()
    });
    let res = de.from_bytes_named(&w.into_inner(), &layout);
    assert!(matches!(res, Err(CodecError::MalformedStream { .. })));
    Ok(())
}
