use crate::value::Value;
use std::mem;

/* Deeply nested graphs are freed without recursing once per level.
Each container is emptied onto a flat stack before it is dropped. */
impl Drop for Value {
    fn drop(&mut self) {
        let mut pending: Vec<Value> = match self {
            Value::Record(record) if record.values().any(Value::is_composite) => {
                mem::take(&mut **record).into_values().collect()
            }
            Value::Array(elems) if elems.iter().any(Value::is_composite) => mem::take(elems),
            _ => return,
        };
        while let Some(mut value) = pending.pop() {
            match &mut value {
                Value::Record(record) => pending.extend(mem::take(&mut **record).into_values()),
                Value::Array(elems) => pending.append(elems),
                _ => {}
            }
        }
    }
}
