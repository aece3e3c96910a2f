use crate::value::{Record, Value};

/* Structural equality over an explicit stack, so depth is not bounded by the host stack. */

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        all_pairs_eq(vec![(self, other)])
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![];
        if !push_members(&mut pending, self, other) {
            return false;
        }
        all_pairs_eq(pending)
    }
}

fn push_members<'a>(
    pending: &mut Vec<(&'a Value, &'a Value)>,
    a: &'a Record,
    b: &'a Record,
) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for ((a_name, a_val), (b_name, b_val)) in a.iter().zip(b.iter()) {
        if a_name != b_name {
            return false;
        }
        pending.push((a_val, b_val));
    }
    true
}

fn all_pairs_eq<'a>(mut pending: Vec<(&'a Value, &'a Value)>) -> bool {
    while let Some(pair) = pending.pop() {
        let same = match pair {
            (Value::Null, Value::Null) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => push_members(&mut pending, a, b),
            (Value::Array(a), Value::Array(b)) => {
                if a.len() == b.len() {
                    pending.extend(a.iter().zip(b.iter()));
                    true
                } else {
                    false
                }
            }
            _ => false,
        };
        if !same {
            return false;
        }
    }
    true
}
