//! Property-based tests for the equivalence predicates.
//!
//! Tests the following properties:
//! - reflexivity of `eqv?` and `equal?`
//! - symmetry of all three predicates
//! - `eq?` implies `eqv?` implies `equal?`
//! - deep copies are `equal?` but not `eq?`
//! - `equal?` values have equal structural hashes

use std::hash::Hasher;

use proptest::prelude::*;
use schemeq::{
    CodeId, Opaque, Procedure, Value, equal_hash, is_eq, is_equal, is_eqv, primitive_index,
};

// =============================================================================
// Strategies for generating values
// =============================================================================

fn arb_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        (-3i32..3).prop_map(f64::from),
        Just(0.0),
        Just(-0.0),
        Just(f64::NAN),
        Just(0.5),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        Just(Value::Unspecified),
        any::<bool>().prop_map(Value::Boolean),
        arb_number().prop_map(Value::Number),
        prop::char::range('a', 'c').prop_map(Value::Character),
        "[a-c]{1,2}".prop_map(|s| Value::symbol(&s)),
        "[a-c]{0,2}".prop_map(|s| Value::string(&s)),
        arb_procedure(),
        any::<u8>().prop_map(|n| Value::opaque(Opaque::new("port", n))),
    ]
}

fn arb_procedure() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::sample::select(vec!["eq?", "eqv?", "equal?", "member"]).prop_map(|name| {
            let index = primitive_index(name).expect("registered builtin");
            Value::Procedure(Procedure::primitive(index))
        }),
        (0u64..3, prop::option::of(arb_number())).prop_map(|(code, context)| {
            Value::Procedure(Procedure::compiled(
                CodeId::new(code),
                context.map(Value::Number),
            ))
        }),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(first, rest)| Value::cons(first, rest)),
            prop::collection::vec(inner, 0..4).prop_map(Value::vector),
            prop::collection::vec(any::<bool>(), 0..4).prop_map(Value::bool_vector),
        ]
    })
}

// =============================================================================
// Helpers
// =============================================================================

/// Rebuild every composite cell, keeping atoms.
fn deep_copy(value: &Value) -> Value {
    match value {
        Value::Pair(cell) => {
            let (first, rest) = cell.read().parts();
            Value::cons(deep_copy(&first), deep_copy(&rest))
        }
        Value::Vector(cell) => {
            let elements = cell.read().elements().to_vec();
            Value::vector(elements.iter().map(deep_copy).collect())
        }
        Value::BoolVector(cell) => Value::bool_vector(cell.read().bits().to_vec()),
        Value::String(cell) => Value::string(cell.read().as_str()),
        other => other.clone(),
    }
}

fn contains_nan(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_nan(),
        Value::Pair(cell) => {
            let (first, rest) = cell.read().parts();
            contains_nan(&first) || contains_nan(&rest)
        }
        Value::Vector(cell) => cell.read().elements().iter().any(contains_nan),
        _ => false,
    }
}

fn is_composite(value: &Value) -> bool {
    matches!(
        value,
        Value::Pair(_) | Value::Vector(_) | Value::BoolVector(_) | Value::String(_)
    )
}

fn hash_of(value: &Value) -> u64 {
    let mut hasher = ahash::AHasher::default();
    equal_hash(value, &mut hasher);
    hasher.finish()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A value is eqv? and equal? to itself, NaN aside
    #[test]
    fn reflexive(v in arb_value()) {
        prop_assume!(!matches!(v, Value::Number(n) if n.is_nan()));
        prop_assert!(is_eqv(&v, &v), "eqv? not reflexive for {}", v);
        prop_assert!(is_equal(&v, &v), "equal? not reflexive for {}", v);
    }

    /// P(a, b) == P(b, a)
    #[test]
    fn symmetric(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(is_eq(&a, &b), is_eq(&b, &a));
        prop_assert_eq!(is_eqv(&a, &b), is_eqv(&b, &a));
        prop_assert_eq!(is_equal(&a, &b), is_equal(&b, &a));
    }

    /// copies compare in both directions the same way
    #[test]
    fn symmetric_with_copy(v in arb_value()) {
        let copy = deep_copy(&v);
        prop_assert_eq!(is_equal(&v, &copy), is_equal(&copy, &v));
    }

    /// eq? => eqv? => equal?
    #[test]
    fn monotonic(a in arb_value(), b in arb_value()) {
        if is_eq(&a, &b) {
            prop_assert!(is_eqv(&a, &b), "eq? but not eqv?: {} {}", a, b);
        }
        if is_eqv(&a, &b) {
            prop_assert!(is_equal(&a, &b), "eqv? but not equal?: {} {}", a, b);
        }
    }

    /// a deep copy is equal? unless NaN is involved, and never eq? for composites
    #[test]
    fn deep_copy_is_equal_not_identical(v in arb_value()) {
        let copy = deep_copy(&v);
        prop_assert_eq!(is_equal(&v, &copy), !contains_nan(&v), "{}", v);
        if is_composite(&v) {
            prop_assert!(!is_eq(&v, &copy));
            prop_assert!(!is_eqv(&v, &copy));
        }
    }

    /// equal? values hash equal
    #[test]
    fn hash_consistent_with_equal(a in arb_value(), b in arb_value()) {
        if is_equal(&a, &b) {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
        let copy = deep_copy(&a);
        if is_equal(&a, &copy) {
            prop_assert_eq!(hash_of(&a), hash_of(&copy));
        }
    }
}
