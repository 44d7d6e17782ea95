use std::fmt;

use crate::Arity;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A primitive was called with the wrong number of arguments.
    /// This is the only error the equivalence predicates raise.
    Arity {
        name: &'static str,
        expected: Arity,
        got: usize,
    },
    UnknownPrimitive(String),
    /// The procedure's target cannot be run by the builtin table.
    NotApplicable(String),
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Arity {
                name,
                expected,
                got,
            } => write!(
                f,
                "{name}: wrong number of arguments, expected {expected}, got {got}"
            ),
            Error::UnknownPrimitive(name) => write!(f, "unknown primitive `{name}`"),
            Error::NotApplicable(what) => write!(f, "cannot apply {what}"),
            Error::Io(msg) => write!(f, "i/o error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value.to_string())
    }
}
