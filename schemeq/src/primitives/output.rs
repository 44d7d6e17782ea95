use crate::{PrimitiveContext, Result, Value, inputs};

/// ( obj -- unspecified )
pub fn display(ctx: &mut PrimitiveContext) -> Result<Value> {
    let [value] = inputs::<1>("display", ctx.arguments)?;
    write!(ctx.output, "{}", value.display())?;
    Ok(Value::Unspecified)
}

/// ( -- unspecified )
pub fn newline(ctx: &mut PrimitiveContext) -> Result<Value> {
    let [] = inputs::<0>("newline", ctx.arguments)?;
    writeln!(ctx.output)?;
    Ok(Value::Unspecified)
}
