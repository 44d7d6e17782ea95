mod opaque;
mod pairs;
mod procedures;
mod strings;
mod vectors;

pub use opaque::*;
pub use pairs::*;
pub use procedures::*;
pub use strings::*;
pub use vectors::*;

use crate::Value;

#[inline]
fn owns_children(value: &Value) -> bool {
    matches!(value, Value::Pair(_) | Value::Vector(_))
}

// Tears down cells with a work-list instead of one native frame per level.
// Only cells this is the last handle to are unlinked; there are no weak
// handles, so a count of one cannot grow while we hold it.
fn release(mut pending: Vec<Value>) {
    while let Some(value) = pending.pop() {
        match &value {
            Value::Pair(cell) if cell.holders() == 1 => {
                let (first, rest) = cell.write().take_parts();
                pending.push(first);
                pending.push(rest);
            }
            Value::Vector(cell) if cell.holders() == 1 => {
                pending.extend(cell.write().take_elements());
            }
            _ => {}
        }
    }
}
