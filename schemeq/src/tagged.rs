//! Value: the runtime value of the interpreter, a closed tagged union.
//!
//! Atoms (booleans, numbers, characters) are stored inline.
//! Symbols are interned, procedures are (target, context) pairs.
//! Composites (pairs, vectors, bool vectors, strings, opaque objects) live in
//! shared [`Handle`] cells, so cloning a `Value` aliases rather than copies them.
//!
//! Adding a variant here is a compile error in every equality policy until
//! that policy classifies it.
use crate::{BoolVector, Handle, Opaque, Pair, Procedure, Symbol, Text, Vector};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueTag {
    Nil,
    Unspecified,
    Boolean,
    Number,
    Character,
    Symbol,
    Procedure,
    Pair,
    Vector,
    BoolVector,
    String,
    Opaque,
}

#[derive(Debug, Clone)]
pub enum Value {
    /// The empty list. A singleton: every `Nil` is the same object.
    Nil,
    /// Result of expressions with no useful value. Also a singleton.
    Unspecified,
    Boolean(bool),
    Number(f64),
    Character(char),
    Symbol(Symbol),
    Procedure(Procedure),
    Pair(Handle<Pair>),
    Vector(Handle<Vector>),
    BoolVector(Handle<BoolVector>),
    String(Handle<Text>),
    Opaque(Handle<Opaque>),
}

impl ValueTag {
    pub fn name(self) -> &'static str {
        match self {
            ValueTag::Nil => "empty-list",
            ValueTag::Unspecified => "unspecified",
            ValueTag::Boolean => "boolean",
            ValueTag::Number => "number",
            ValueTag::Character => "character",
            ValueTag::Symbol => "symbol",
            ValueTag::Procedure => "procedure",
            ValueTag::Pair => "pair",
            ValueTag::Vector => "vector",
            ValueTag::BoolVector => "bool-vector",
            ValueTag::String => "string",
            ValueTag::Opaque => "opaque",
        }
    }
}

impl Value {
    pub fn tag(&self) -> ValueTag {
        match self {
            Value::Nil => ValueTag::Nil,
            Value::Unspecified => ValueTag::Unspecified,
            Value::Boolean(_) => ValueTag::Boolean,
            Value::Number(_) => ValueTag::Number,
            Value::Character(_) => ValueTag::Character,
            Value::Symbol(_) => ValueTag::Symbol,
            Value::Procedure(_) => ValueTag::Procedure,
            Value::Pair(_) => ValueTag::Pair,
            Value::Vector(_) => ValueTag::Vector,
            Value::BoolVector(_) => ValueTag::BoolVector,
            Value::String(_) => ValueTag::String,
            Value::Opaque(_) => ValueTag::Opaque,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Opaque(cell) => cell.read().type_name(),
            other => other.tag().name(),
        }
    }

    pub fn symbol(name: &str) -> Self {
        Value::Symbol(Symbol::intern(name))
    }

    pub fn string(value: &str) -> Self {
        Value::String(Handle::new(Text::new(value)))
    }

    pub fn cons(first: Value, rest: Value) -> Self {
        Value::Pair(Handle::new(Pair::new(first, rest)))
    }

    /// Build a proper list, terminated by `Nil`.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(Value::Nil, |rest, first| Value::cons(first, rest))
    }

    pub fn vector(items: Vec<Value>) -> Self {
        Value::Vector(Handle::new(Vector::new(items)))
    }

    pub fn bool_vector(bits: Vec<bool>) -> Self {
        Value::BoolVector(Handle::new(BoolVector::new(bits)))
    }

    pub fn opaque(object: Opaque) -> Self {
        Value::Opaque(Handle::new(object))
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Only `#f` is false, everything else counts as true.
    #[inline]
    pub fn is_true(&self) -> bool {
        !matches!(self, Value::Boolean(false))
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Character(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Procedure> for Value {
    fn from(value: Procedure) -> Self {
        Value::Procedure(value)
    }
}
