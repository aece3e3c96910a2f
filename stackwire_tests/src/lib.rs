//! Layouts and instances shared by the integration tests.

use anyhow::Result;
use stackwire_types::layout::{DataType, Field, FixedRecordLayout, NamedRecordLayout};
use stackwire_types::value::{Record, Value};
use std::sync::{Arc, Once};
use tracing_subscriber::EnvFilter;

/// Honors `RUST_LOG`, e.g. `RUST_LOG=stackwire_engine=trace`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// `{ a: I32, b: String }`
pub fn point_layout() -> Arc<FixedRecordLayout> {
    Arc::new(FixedRecordLayout::new(vec![
        Field::new("a", DataType::i32()),
        Field::new("b", DataType::string()),
    ]))
}

/// `{ x: I8, y: Bool }`, self-describing.
pub fn xy_layout() -> Result<Arc<NamedRecordLayout>> {
    let layout = NamedRecordLayout::try_new(vec![
        Field::new("x", DataType::i8()),
        Field::new("y", DataType::bool()),
    ])?;
    Ok(Arc::new(layout))
}

/// `{ id: U32, kids: [Self] }`
pub fn tree_layout() -> Arc<FixedRecordLayout> {
    FixedRecordLayout::new_cyclic(|this| {
        vec![
            Field::new("id", DataType::u32()),
            Field::new("kids", DataType::array(this)),
        ]
    })
}

/// A chain of `depth` nodes below the root, each the only kid of its parent.
pub fn gen_chain(depth: u32) -> Record {
    let mut node = Record::new().with("id", depth).with("kids", Value::Array(vec![]));
    for id in (0..depth).rev() {
        node = Record::new()
            .with("id", id)
            .with("kids", vec![Value::Record(node)]);
    }
    node
}

/// Every primitive kind at once, all fields in one fixed record.
pub fn all_primitives_layout() -> Arc<FixedRecordLayout> {
    Arc::new(FixedRecordLayout::new(vec![
        Field::new("i8", DataType::i8()),
        Field::new("i16", DataType::i16()),
        Field::new("i32", DataType::i32()),
        Field::new("i64", DataType::i64()),
        Field::new("u8", DataType::u8()),
        Field::new("u16", DataType::u16()),
        Field::new("u32", DataType::u32()),
        Field::new("u64", DataType::u64()),
        Field::new("f32", DataType::f32()),
        Field::new("f64", DataType::f64()),
        Field::new("string", DataType::string()),
        Field::new("bool", DataType::bool()),
    ]))
}
