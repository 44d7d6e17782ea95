use crate::{PrimitiveContext, Result, Value, equivalence};

/// ( a b -- bool )
pub fn eq(ctx: &mut PrimitiveContext) -> Result<Value> {
    equivalence::eq(ctx.arguments)
}

/// ( a b -- bool )
pub fn eqv(ctx: &mut PrimitiveContext) -> Result<Value> {
    equivalence::eqv(ctx.arguments)
}

/// ( a b -- bool )
pub fn equal(ctx: &mut PrimitiveContext) -> Result<Value> {
    equivalence::equal(ctx.arguments)
}
