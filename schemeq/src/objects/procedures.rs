use std::fmt;

use crate::{PrimitiveIndex, Value};

/// Identity of a compiled body, issued by whatever evaluator produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodeId(u64);

impl CodeId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for CodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The callable entry point of a procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Primitive(PrimitiveIndex),
    Compiled(CodeId),
}

/// A callable target plus the context it was bound with
/// (captured environment, receiver). Primitives carry no context.
///
/// Two procedures are the same procedure iff their targets match and their
/// contexts are the same object: `eq?` for cells and symbols, the same bit
/// pattern for numbers.
#[derive(Debug, Clone)]
pub struct Procedure {
    target: Target,
    context: Option<Box<Value>>,
}

impl Procedure {
    pub fn primitive(index: PrimitiveIndex) -> Self {
        Self {
            target: Target::Primitive(index),
            context: None,
        }
    }

    pub fn compiled(code: CodeId, context: Option<Value>) -> Self {
        Self {
            target: Target::Compiled(code),
            context: context.map(Box::new),
        }
    }

    #[inline]
    pub fn target(&self) -> Target {
        self.target
    }

    #[inline]
    pub fn context(&self) -> Option<&Value> {
        self.context.as_deref()
    }
}
