//! The three equivalence predicates: `eq?`, `eqv?` and `equal?`.
//!
//! `eq?` is identity. Symbols compare by interned id, procedures by
//! (target, context), the empty list and unspecified markers are singletons and
//! heap cells compare by [`ObjectId`](crate::ObjectId). Inline atoms have no
//! storage of their own and are treated as interned by bit pattern.
//!
//! `eqv?` widens `eq?` with value comparison for booleans, numbers (IEEE `==`,
//! so `+0.0` equals `-0.0` and `NaN` equals nothing) and characters.
//!
//! `equal?` recurses through pairs, vectors, bool vectors and strings and
//! falls back to `eqv?` everywhere else.
//!
//! # Cyclic structures
//!
//! `equal?` has no depth bound and no cycle detection. Comparing two distinct
//! cyclic structures does not terminate. The walk uses an explicit work-list
//! so deep but finite structures do not exhaust the call stack.
//!
//! None of the predicates mutate the cells they inspect, and no cell lock is
//! held while another cell is read.
use crate::{Procedure, Result, Value, inputs};

pub fn is_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Symbol(a), Value::Symbol(b)) => a == b,
        (Value::Procedure(a), Value::Procedure(b)) => same_procedure(a, b),
        (Value::Nil, Value::Nil) | (Value::Unspecified, Value::Unspecified) => true,
        _ => same_object(left, right),
    }
}

pub fn is_eqv(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Character(a), Value::Character(b)) => a == b,
        _ => is_eq(left, right),
    }
}

pub fn is_equal(left: &Value, right: &Value) -> bool {
    let mut pending = vec![(left.clone(), right.clone())];
    while let Some((left, right)) = pending.pop() {
        if !equal_step(&left, &right, &mut pending) {
            return false;
        }
    }
    true
}

/// `(eq? a b)`
pub fn eq(arguments: &[Value]) -> Result<Value> {
    let [left, right] = inputs::<2>("eq?", arguments)?;
    Ok(Value::Boolean(is_eq(left, right)))
}

/// `(eqv? a b)`
pub fn eqv(arguments: &[Value]) -> Result<Value> {
    let [left, right] = inputs::<2>("eqv?", arguments)?;
    Ok(Value::Boolean(is_eqv(left, right)))
}

/// `(equal? a b)`
pub fn equal(arguments: &[Value]) -> Result<Value> {
    let [left, right] = inputs::<2>("equal?", arguments)?;
    Ok(Value::Boolean(is_equal(left, right)))
}

fn same_procedure(a: &Procedure, b: &Procedure) -> bool {
    if a.target() != b.target() {
        return false;
    }
    match (a.context(), b.context()) {
        (None, None) => true,
        (Some(a), Some(b)) => same_context(a, b),
        _ => false,
    }
}

// Like `eq?` but reflexive for every context: a NaN context is the same
// context as itself, so the procedure holding it stays `eqv?` to itself.
fn same_context(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.to_bits() == b.to_bits(),
        _ => is_eq(a, b),
    }
}

// Matches on `left` without a wildcard arm so a new variant cannot slip
// through unclassified. Mismatched variants are never the same object.
fn same_object(left: &Value, right: &Value) -> bool {
    match left {
        Value::Boolean(a) => matches!(right, Value::Boolean(b) if a == b),
        Value::Number(a) => {
            matches!(right, Value::Number(b) if a.to_bits() == b.to_bits() && a == b)
        }
        Value::Character(a) => matches!(right, Value::Character(b) if a == b),
        Value::Pair(a) => matches!(right, Value::Pair(b) if a.ptr_eq(b)),
        Value::Vector(a) => matches!(right, Value::Vector(b) if a.ptr_eq(b)),
        Value::BoolVector(a) => matches!(right, Value::BoolVector(b) if a.ptr_eq(b)),
        Value::String(a) => matches!(right, Value::String(b) if a.ptr_eq(b)),
        Value::Opaque(a) => matches!(right, Value::Opaque(b) if a.ptr_eq(b)),
        // classified before falling through to here
        Value::Nil | Value::Unspecified | Value::Symbol(_) | Value::Procedure(_) => false,
    }
}

// Compares one pair of values. Composite children are pushed onto `pending`
// instead of being compared here. Returns false as soon as a mismatch is known.
fn equal_step(left: &Value, right: &Value, pending: &mut Vec<(Value, Value)>) -> bool {
    match (left, right) {
        (Value::Pair(a), Value::Pair(b)) => {
            if a.ptr_eq(b) {
                return true;
            }
            let (a_first, a_rest) = a.read().parts();
            let (b_first, b_rest) = b.read().parts();
            // first is popped, and therefore compared, before rest
            pending.push((a_rest, b_rest));
            pending.push((a_first, b_first));
            true
        }
        (Value::Vector(a), Value::Vector(b)) => {
            if a.ptr_eq(b) {
                return true;
            }
            let a_elements = a.read().elements().to_vec();
            let b_elements = b.read().elements().to_vec();
            if a_elements.len() != b_elements.len() {
                return false;
            }
            pending.extend(a_elements.into_iter().zip(b_elements).rev());
            true
        }
        (Value::BoolVector(a), Value::BoolVector(b)) => {
            if a.ptr_eq(b) {
                return true;
            }
            let a_bits = a.read().bits().to_vec();
            a_bits.as_slice() == b.read().bits()
        }
        (Value::String(a), Value::String(b)) => {
            if a.ptr_eq(b) {
                return true;
            }
            let a_text = a.read().as_str().to_owned();
            a_text == b.read().as_str()
        }
        _ => is_eqv(left, right),
    }
}
