use std::mem;

use crate::Value;

use super::{owns_children, release};

/// Fixed length sequence of values. Elements are mutable, the length is not.
#[derive(Debug, Clone)]
pub struct Vector {
    elements: Box<[Value]>,
}

/// Fixed length sequence of booleans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolVector {
    bits: Box<[bool]>,
}

impl Vector {
    pub fn new(elements: Vec<Value>) -> Self {
        Self {
            elements: elements.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    /// Returns false if `index` is out of range; the vector never grows.
    pub fn set(&mut self, index: usize, value: Value) -> bool {
        match self.elements.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    /// Move the elements out, leaving the vector empty.
    pub(crate) fn take_elements(&mut self) -> Vec<Value> {
        mem::take(&mut self.elements).into_vec()
    }
}

impl Drop for Vector {
    fn drop(&mut self) {
        if self.elements.iter().any(owns_children) {
            release(self.take_elements());
        }
    }
}

impl BoolVector {
    pub fn new(bits: Vec<bool>) -> Self {
        Self {
            bits: bits.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn set(&mut self, index: usize, value: bool) -> bool {
        match self.bits.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_set_in_range_replaces_element() {
        let mut v = Vector::new(vec![Value::Number(1.0), Value::Number(2.0)]);
        assert!(v.set(1, Value::Character('z')));
        assert!(matches!(v.get(1), Some(Value::Character('z'))));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn vector_set_out_of_range_does_not_grow() {
        let mut v = Vector::new(vec![Value::Nil]);
        assert!(!v.set(1, Value::Nil));
        assert_eq!(v.len(), 1);
        assert!(v.get(1).is_none());
    }

    #[test]
    fn dropping_deeply_nested_vectors_does_not_recurse() {
        let nested = (0..200_000).fold(Value::Nil, |inner, _| Value::vector(vec![inner]));
        drop(nested);
    }

    #[test]
    fn dropping_a_vector_keeps_shared_elements_intact() {
        let shared = Value::list(vec![Value::Number(1.0), Value::Number(2.0)]);
        drop(Value::vector(vec![shared.clone(), Value::Nil]));
        assert_eq!(shared.to_string(), "(1 2)");
    }

    #[test]
    fn bool_vector_access() {
        let mut v = BoolVector::new(vec![true, false]);
        assert_eq!(v.get(0), Some(true));
        assert!(v.set(0, false));
        assert_eq!(v.bits(), &[false, false]);
        assert!(!v.set(2, true));
        assert!(BoolVector::new(Vec::new()).is_empty());
    }
}
