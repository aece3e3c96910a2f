use anyhow::Result;
use stackwire_engine::{from_bytes_fixed, from_bytes_named, to_bytes_fixed, to_bytes_named};
use stackwire_tests::{gen_chain, init_tracing, tree_layout};
use stackwire_types::layout::{DataType, Field, NamedRecordLayout};
use stackwire_types::value::{Record, Value};
use std::thread;

const DEPTH: u32 = 20_000;

/// Both engines on a thread with a deliberately small stack.
fn on_small_stack<T: Send + 'static>(f: impl FnOnce() -> Result<T> + Send + 'static) -> Result<T> {
    thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(f)?
        .join()
        .map_err(|_| anyhow::anyhow!("The traversal thread panicked."))?
}

#[test]
fn deep_fixed_chain() -> Result<()> {
    init_tracing();
    on_small_stack(|| {
        let layout = tree_layout();
        let record = gen_chain(DEPTH);

        let serialized = to_bytes_fixed(&layout, &record)?;
        // Per node: id, kids count; the leaf's kids count is zero. Plus one presence flag per nested node.
        let per_node = 4 + 8;
        assert_eq!(serialized.len(), (DEPTH as usize + 1) * per_node + DEPTH as usize);

        let deserialized = from_bytes_fixed(&serialized, &layout)?;
        assert!(deserialized == record);

        let copy = deserialized.clone();
        assert!(copy == record);
        Ok(())
    })
}

#[test]
fn deep_named_chain() -> Result<()> {
    init_tracing();
    on_small_stack(|| {
        let layout = NamedRecordLayout::try_new_cyclic(|this| {
            vec![
                Field::new("depth", DataType::u32()),
                Field::new("next", this),
            ]
        })?;

        let mut record = Record::new().with("depth", DEPTH);
        for depth in (0..DEPTH).rev() {
            record = Record::new().with("depth", depth).with("next", record);
        }

        let serialized = to_bytes_named(&layout, &record)?;
        let deserialized = from_bytes_named(&serialized, &layout)?;
        assert!(deserialized == record);

        let mut node = &deserialized;
        let mut seen = 0;
        while let Some(Value::Record(next)) = node.get("next") {
            node = next;
            seen += 1;
        }
        assert_eq!(seen, DEPTH);
        Ok(())
    })
}
