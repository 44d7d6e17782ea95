use std::{fmt, io::Write};

use crate::{Error, Result, Value};

mod equivalence;
mod lists;
mod output;

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PrimitiveIndex(usize);

impl PrimitiveIndex {
    pub fn as_usize(self) -> usize {
        self.0
    }
}

pub type PrimitiveFunction = fn(&mut PrimitiveContext) -> Result<Value>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct PrimitiveMessage<'a> {
    pub name: &'a str,
    pub arity: Arity,
    pub ptr: PrimitiveFunction,
}

impl<'a> PrimitiveMessage<'a> {
    pub const fn new(name: &'a str, arity: Arity, ptr: PrimitiveFunction) -> Self {
        Self { name, arity, ptr }
    }
}

pub struct PrimitiveContext<'ex, 'arg> {
    pub output: &'ex mut dyn Write,
    pub arguments: &'arg [Value],
}

impl<'ex, 'arg> PrimitiveContext<'ex, 'arg> {
    pub fn new(output: &'ex mut dyn Write, arguments: &'arg [Value]) -> Self {
        Self { output, arguments }
    }
}

pub const PRIMITIVES: &[PrimitiveMessage] = &[
    PrimitiveMessage::new("eq?", Arity::Exact(2), equivalence::eq),
    PrimitiveMessage::new("eqv?", Arity::Exact(2), equivalence::eqv),
    PrimitiveMessage::new("equal?", Arity::Exact(2), equivalence::equal),
    PrimitiveMessage::new("memq", Arity::Exact(2), lists::memq),
    PrimitiveMessage::new("memv", Arity::Exact(2), lists::memv),
    PrimitiveMessage::new("member", Arity::Exact(2), lists::member),
    PrimitiveMessage::new("assq", Arity::Exact(2), lists::assq),
    PrimitiveMessage::new("assv", Arity::Exact(2), lists::assv),
    PrimitiveMessage::new("assoc", Arity::Exact(2), lists::assoc),
    PrimitiveMessage::new("display", Arity::Exact(1), output::display),
    PrimitiveMessage::new("newline", Arity::Exact(0), output::newline),
];

pub fn primitive_index(name: &str) -> Option<PrimitiveIndex> {
    PRIMITIVES
        .iter()
        .position(|p| p.name == name)
        .map(PrimitiveIndex)
}

pub fn get_primitive(id: PrimitiveIndex) -> PrimitiveMessage<'static> {
    debug_assert!(id.0 < PRIMITIVES.len());
    PRIMITIVES[id.0]
}

/// Borrow exactly `N` arguments, or fail with an arity error naming `name`.
pub fn inputs<'a, const N: usize>(name: &'static str, arguments: &'a [Value]) -> Result<&'a [Value; N]> {
    <&[Value; N]>::try_from(arguments).map_err(|_| Error::Arity {
        name,
        expected: Arity::Exact(N),
        got: arguments.len(),
    })
}
