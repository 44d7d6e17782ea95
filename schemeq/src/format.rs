use std::fmt::{self, Write};

use crate::{Procedure, Target, Value, get_primitive};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Mode {
    /// machine readable, strings quoted and escaped
    Write,
    /// human readable, strings and characters raw
    Display,
}

/// Adapter printing a value the way the `display` builtin does.
pub struct Displayed<'a>(pub &'a Value);

impl Value {
    pub fn display(&self) -> Displayed<'_> {
        Displayed(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, Mode::Write)
    }
}

impl fmt::Display for Displayed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Nil => f.write_str("'()"),
            value => write_value(f, value, Mode::Display),
        }
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, mode: Mode) -> fmt::Result {
    match value {
        Value::Nil => f.write_str("()"),
        Value::Unspecified => f.write_str("#<unspecified>"),
        Value::Boolean(true) => f.write_str("#t"),
        Value::Boolean(false) => f.write_str("#f"),
        Value::Number(n) => write_number(f, *n),
        Value::Character(c) => match mode {
            Mode::Display => f.write_char(*c),
            Mode::Write => write_character(f, *c),
        },
        Value::Symbol(symbol) => f.write_str(symbol.name()),
        Value::Procedure(procedure) => write_procedure(f, procedure),
        Value::Pair(_) => write_list(f, value, mode),
        Value::Vector(cell) => {
            let elements = cell.read().elements().to_vec();
            f.write_str("#(")?;
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                write_value(f, element, mode)?;
            }
            f.write_char(')')
        }
        Value::BoolVector(cell) => {
            f.write_str("#bool(")?;
            for (i, bit) in cell.read().bits().iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                f.write_str(if *bit { "#t" } else { "#f" })?;
            }
            f.write_char(')')
        }
        Value::String(cell) => match mode {
            Mode::Display => f.write_str(cell.read().as_str()),
            Mode::Write => write_string(f, cell.read().as_str()),
        },
        Value::Opaque(cell) => write!(f, "#<opaque {}>", cell.read().type_name()),
    }
}

// iterative over the spine so long lists print without deep recursion
fn write_list(f: &mut fmt::Formatter<'_>, list: &Value, mode: Mode) -> fmt::Result {
    f.write_char('(')?;
    let mut current = list.clone();
    let mut first = true;
    loop {
        let (element, rest) = match &current {
            Value::Pair(cell) => cell.read().parts(),
            Value::Nil => break,
            tail => {
                f.write_str(" . ")?;
                write_value(f, tail, mode)?;
                break;
            }
        };
        if !first {
            f.write_char(' ')?;
        }
        first = false;
        write_value(f, &element, mode)?;
        current = rest;
    }
    f.write_char(')')
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("+nan.0")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "+inf.0" } else { "-inf.0" })
    } else if n == 0.0 && n.is_sign_negative() {
        f.write_str("-0.0")
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{n}")
    }
}

fn write_character(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    match c {
        ' ' => f.write_str("#\\space"),
        '\n' => f.write_str("#\\newline"),
        '\t' => f.write_str("#\\tab"),
        '\r' => f.write_str("#\\return"),
        '\0' => f.write_str("#\\null"),
        c => write!(f, "#\\{c}"),
    }
}

fn write_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

fn write_procedure(f: &mut fmt::Formatter<'_>, procedure: &Procedure) -> fmt::Result {
    match procedure.target() {
        Target::Primitive(index) => write!(f, "#<procedure {}>", get_primitive(index).name),
        Target::Compiled(code) => write!(f, "#<procedure #{code}>"),
    }
}
