//! Hashes consistent with the equivalence predicates, so hash maps and sets
//! can be keyed by `equal?` or `eqv?` semantics.
//!
//! Values that are `equal?` always produce the same [`equal_hash`]; values that
//! are `eqv?` (and therefore `eq?`) always produce the same [`eqv_hash`].
//! `NaN` never equals anything, so a `NaN` key is never found again.
//! Hashing a cyclic structure with [`equal_hash`] does not terminate.
use std::{
    collections::{HashMap, HashSet},
    hash::{Hash, Hasher},
};

use crate::{Procedure, Target, Value, is_equal, is_eqv};

pub type EqualMap<V> = HashMap<EqualKey, V, ahash::RandomState>;
pub type EqualSet = HashSet<EqualKey, ahash::RandomState>;
pub type EqvMap<V> = HashMap<EqvKey, V, ahash::RandomState>;

/// Map key compared with `equal?`.
///
/// Mutating a composite while it is used as a key changes its hash; the map
/// will not find it again, as with any interior-mutable key.
#[derive(Debug, Clone)]
pub struct EqualKey(pub Value);

/// Map key compared with `eqv?`.
#[derive(Debug, Clone)]
pub struct EqvKey(pub Value);

pub fn equal_hash<H: Hasher>(value: &Value, state: &mut H) {
    let mut pending = vec![value.clone()];
    while let Some(value) = pending.pop() {
        value.tag().hash(state);
        match &value {
            Value::Pair(cell) => {
                let (first, rest) = cell.read().parts();
                pending.push(rest);
                pending.push(first);
            }
            Value::Vector(cell) => {
                let elements = cell.read().elements().to_vec();
                elements.len().hash(state);
                pending.extend(elements.into_iter().rev());
            }
            Value::BoolVector(cell) => cell.read().bits().hash(state),
            Value::String(cell) => cell.read().as_str().hash(state),
            Value::Nil
            | Value::Unspecified
            | Value::Boolean(_)
            | Value::Number(_)
            | Value::Character(_)
            | Value::Symbol(_)
            | Value::Procedure(_)
            | Value::Opaque(_) => eqv_payload_hash(&value, state),
        }
    }
}

pub fn eqv_hash<H: Hasher>(value: &Value, state: &mut H) {
    value.tag().hash(state);
    eqv_payload_hash(value, state);
}

fn eqv_payload_hash<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Nil | Value::Unspecified => {}
        Value::Boolean(b) => b.hash(state),
        Value::Number(n) => number_bits(*n).hash(state),
        Value::Character(c) => c.hash(state),
        Value::Symbol(symbol) => symbol.hash(state),
        Value::Procedure(procedure) => procedure_hash(procedure, state),
        Value::Pair(cell) => cell.id().hash(state),
        Value::Vector(cell) => cell.id().hash(state),
        Value::BoolVector(cell) => cell.id().hash(state),
        Value::String(cell) => cell.id().hash(state),
        Value::Opaque(cell) => cell.id().hash(state),
    }
}

// +0.0 and -0.0 are eqv? so they have to hash alike
#[inline]
fn number_bits(n: f64) -> u64 {
    if n == 0.0 { 0 } else { n.to_bits() }
}

fn procedure_hash<H: Hasher>(procedure: &Procedure, state: &mut H) {
    match procedure.target() {
        Target::Primitive(index) => {
            0u8.hash(state);
            index.hash(state);
        }
        Target::Compiled(code) => {
            1u8.hash(state);
            code.hash(state);
        }
    }
    match procedure.context() {
        None => false.hash(state),
        Some(context) => {
            true.hash(state);
            eqv_hash(context, state);
        }
    }
}

impl PartialEq for EqualKey {
    fn eq(&self, other: &Self) -> bool {
        is_equal(&self.0, &other.0)
    }
}

impl Eq for EqualKey {}

impl Hash for EqualKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        equal_hash(&self.0, state);
    }
}

impl PartialEq for EqvKey {
    fn eq(&self, other: &Self) -> bool {
        is_eqv(&self.0, &other.0)
    }
}

impl Eq for EqvKey {}

impl Hash for EqvKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        eqv_hash(&self.0, state);
    }
}

impl From<Value> for EqualKey {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Value> for EqvKey {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
