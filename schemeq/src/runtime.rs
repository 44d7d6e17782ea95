use std::io::{self, Write};

use crate::{
    Error, PrimitiveContext, PrimitiveIndex, Procedure, Result, Target, Value, get_primitive,
    primitive_index,
};

/// Where `display` and `newline` write to.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    /// collect output in memory, read it back with [`Runtime::take_output`]
    Buffer,
}

#[derive(Debug, Clone, Default)]
pub struct RuntimeCreateInfo {
    pub output: OutputTarget,
    /// log every primitive call at trace level
    pub trace_calls: bool,
}

enum Output {
    Stdout(io::Stdout),
    Buffer(Vec<u8>),
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(out) => out.write(buf),
            Output::Buffer(out) => out.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(out) => out.flush(),
            Output::Buffer(_) => Ok(()),
        }
    }
}

/// Entry point for evaluator code: looks up builtins and applies them with
/// arity checking done once, before dispatch.
pub struct Runtime {
    output: Output,
    trace_calls: bool,
}

impl Runtime {
    pub fn new(info: &RuntimeCreateInfo) -> Self {
        let output = match info.output {
            OutputTarget::Stdout => Output::Stdout(io::stdout()),
            OutputTarget::Buffer => Output::Buffer(Vec::new()),
        };
        log::debug!(
            "runtime created (output: {:?}, trace_calls: {})",
            info.output,
            info.trace_calls
        );
        Self {
            output,
            trace_calls: info.trace_calls,
        }
    }

    pub fn call(&mut self, name: &str, arguments: &[Value]) -> Result<Value> {
        let index = primitive_index(name).ok_or_else(|| Error::UnknownPrimitive(name.to_owned()))?;
        self.call_primitive(index, arguments)
    }

    pub fn call_primitive(&mut self, index: PrimitiveIndex, arguments: &[Value]) -> Result<Value> {
        let primitive = get_primitive(index);
        if !primitive.arity.accepts(arguments.len()) {
            return Err(Error::Arity {
                name: primitive.name,
                expected: primitive.arity,
                got: arguments.len(),
            });
        }
        let mut ctx = PrimitiveContext::new(&mut self.output, arguments);
        let result = (primitive.ptr)(&mut ctx);
        if self.trace_calls {
            log::trace!(
                "({} {}) => {}",
                primitive.name,
                arguments
                    .iter()
                    .map(|arg| arg.to_string())
                    .collect::<Vec<_>>()
                    .join(" "),
                match &result {
                    Ok(value) => value.to_string(),
                    Err(err) => err.to_string(),
                }
            );
        }
        result
    }

    pub fn apply(&mut self, procedure: &Procedure, arguments: &[Value]) -> Result<Value> {
        match procedure.target() {
            Target::Primitive(index) => self.call_primitive(index, arguments),
            Target::Compiled(code) => Err(Error::NotApplicable(format!(
                "compiled procedure #{code} without an evaluator"
            ))),
        }
    }

    /// The builtin `name` as a first-class procedure value.
    pub fn procedure(&self, name: &str) -> Result<Value> {
        let index = primitive_index(name).ok_or_else(|| Error::UnknownPrimitive(name.to_owned()))?;
        Ok(Value::Procedure(Procedure::primitive(index)))
    }

    /// Drain buffered output. Flushes and returns nothing for stdout.
    pub fn take_output(&mut self) -> Result<String> {
        match &mut self.output {
            Output::Stdout(out) => {
                out.flush()?;
                Ok(String::new())
            }
            Output::Buffer(buf) => {
                let bytes = std::mem::take(buf);
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(&RuntimeCreateInfo::default())
    }
}
