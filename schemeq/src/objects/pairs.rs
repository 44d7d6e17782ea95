use std::mem;

use crate::Value;

use super::{owns_children, release};

/// A cons cell. Both fields are mutable and may hold any value,
/// `Value::Nil` marks the end of a proper list.
#[derive(Debug, Clone)]
pub struct Pair {
    first: Value,
    rest: Value,
}

impl Pair {
    pub fn new(first: Value, rest: Value) -> Self {
        Self { first, rest }
    }

    #[inline]
    pub fn first(&self) -> &Value {
        &self.first
    }

    #[inline]
    pub fn rest(&self) -> &Value {
        &self.rest
    }

    pub fn set_first(&mut self, value: Value) {
        self.first = value;
    }

    pub fn set_rest(&mut self, value: Value) {
        self.rest = value;
    }

    /// Clone both fields out so the cell lock can be released
    /// before either field is inspected.
    #[inline]
    pub fn parts(&self) -> (Value, Value) {
        (self.first.clone(), self.rest.clone())
    }

    /// Move both fields out, leaving the cell as `(() . ())`.
    pub(crate) fn take_parts(&mut self) -> (Value, Value) {
        (
            mem::replace(&mut self.first, Value::Nil),
            mem::replace(&mut self.rest, Value::Nil),
        )
    }
}

impl Drop for Pair {
    fn drop(&mut self) {
        if owns_children(&self.first) || owns_children(&self.rest) {
            let (first, rest) = self.take_parts();
            release(vec![first, rest]);
        }
    }
}

/// Walks the spine of a list, yielding each `first`.
/// Stops at the first `rest` that is not a pair; see [`ListIter::tail`].
pub struct ListIter {
    current: Value,
}

impl ListIter {
    pub fn new(list: Value) -> Self {
        Self { current: list }
    }

    /// What is left of the spine: `Nil` for a proper list that was fully
    /// consumed, the dotted tail for an improper one.
    pub fn tail(&self) -> &Value {
        &self.current
    }
}

impl Iterator for ListIter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let (first, rest) = match &self.current {
            Value::Pair(cell) => cell.read().parts(),
            _ => return None,
        };
        self.current = rest;
        Some(first)
    }
}
