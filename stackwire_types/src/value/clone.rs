use crate::value::{Record, Value};
use std::collections::btree_map;
use std::mem;
use std::slice;

/* Deep copy over an explicit stack, so depth is not bounded by the host stack. */

impl Clone for Value {
    fn clone(&self) -> Self {
        match copy_or_open(self, None) {
            Copied::Leaf(_, copy) => copy,
            Copied::Open(root) => copy_graph(root),
        }
    }
}

impl Clone for Record {
    fn clone(&self) -> Self {
        let mut copy = copy_graph(Frame::record(self, None));
        match &mut copy {
            Value::Record(record) => mem::take(record),
            _ => Record::new(),
        }
    }
}

/// A container whose members are still being copied.
enum Frame<'a> {
    Record {
        members: btree_map::Iter<'a, String, Value>,
        copy: Record,
        name: Option<String>,
    },
    Array {
        elems: slice::Iter<'a, Value>,
        copy: Vec<Value>,
        name: Option<String>,
    },
}

enum Copied<'a> {
    Leaf(Option<String>, Value),
    Open(Frame<'a>),
}

impl<'a> Frame<'a> {
    fn record(record: &'a Record, name: Option<String>) -> Self {
        Self::Record {
            members: record.iter(),
            copy: Record::new(),
            name,
        }
    }

    fn array(elems: &'a [Value], name: Option<String>) -> Self {
        Self::Array {
            elems: elems.iter(),
            copy: Vec::with_capacity(elems.len()),
            name,
        }
    }

    /// The next source member and the name it is stored under. Array elements have none.
    fn next_member(&mut self) -> Option<(Option<String>, &'a Value)> {
        match self {
            Self::Record { members, .. } => members
                .next()
                .map(|(name, value)| (Some(name.clone()), value)),
            Self::Array { elems, .. } => elems.next().map(|value| (None, value)),
        }
    }

    fn accept(&mut self, name: Option<String>, value: Value) {
        match (self, name) {
            (Self::Record { copy, .. }, Some(name)) => {
                copy.insert(name, value);
            }
            (Self::Array { copy, .. }, _) => copy.push(value),
            (Self::Record { .. }, None) => {}
        }
    }

    fn finish(self) -> (Option<String>, Value) {
        match self {
            Self::Record { copy, name, .. } => (name, Value::Record(copy)),
            Self::Array { copy, name, .. } => (name, Value::Array(copy)),
        }
    }
}

fn copy_or_open(value: &Value, name: Option<String>) -> Copied<'_> {
    let copy = match value {
        Value::Null => Value::Null,
        Value::Int(i) => Value::Int(*i),
        Value::Float(f) => Value::Float(*f),
        Value::Bool(b) => Value::Bool(*b),
        Value::Str(s) => Value::Str(s.clone()),
        Value::Record(record) => return Copied::Open(Frame::record(record, name)),
        Value::Array(elems) => return Copied::Open(Frame::array(elems, name)),
    };
    Copied::Leaf(name, copy)
}

fn copy_graph(root: Frame<'_>) -> Value {
    let mut frames = vec![root];
    while let Some(top) = frames.last_mut() {
        match top.next_member() {
            Some((name, value)) => match copy_or_open(value, name) {
                Copied::Leaf(name, copy) => top.accept(name, copy),
                Copied::Open(frame) => frames.push(frame),
            },
            None => {
                let (name, copy) = match frames.pop() {
                    Some(finished) => finished.finish(),
                    None => break,
                };
                match frames.last_mut() {
                    Some(parent) => parent.accept(name, copy),
                    None => return copy,
                }
            }
        }
    }
    // The root frame returns above when it is popped.
    Value::Null
}
