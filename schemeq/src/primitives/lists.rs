//! List searches built on the equivalence predicates.
//!
//! An improper tail or a non-list argument simply ends the walk.
//! A cyclic list that does not contain the item is walked forever.
use crate::{PrimitiveContext, Result, Value, inputs, is_eq, is_equal, is_eqv};

type Same = fn(&Value, &Value) -> bool;

fn member_by(ctx: &mut PrimitiveContext, name: &'static str, same: Same) -> Result<Value> {
    let [item, list] = inputs::<2>(name, ctx.arguments)?;
    let mut current = list.clone();
    loop {
        let (first, rest) = match &current {
            Value::Pair(cell) => cell.read().parts(),
            _ => return Ok(Value::Boolean(false)),
        };
        if same(item, &first) {
            return Ok(current);
        }
        current = rest;
    }
}

fn assoc_by(ctx: &mut PrimitiveContext, name: &'static str, same: Same) -> Result<Value> {
    let [key, alist] = inputs::<2>(name, ctx.arguments)?;
    let mut current = alist.clone();
    loop {
        let (entry, rest) = match &current {
            Value::Pair(cell) => cell.read().parts(),
            _ => return Ok(Value::Boolean(false)),
        };
        if let Value::Pair(cell) = &entry {
            let entry_key = cell.read().first().clone();
            if same(key, &entry_key) {
                return Ok(entry);
            }
        }
        current = rest;
    }
}

/// ( item list -- tail/#f )
pub fn memq(ctx: &mut PrimitiveContext) -> Result<Value> {
    member_by(ctx, "memq", is_eq)
}

/// ( item list -- tail/#f )
pub fn memv(ctx: &mut PrimitiveContext) -> Result<Value> {
    member_by(ctx, "memv", is_eqv)
}

/// ( item list -- tail/#f )
pub fn member(ctx: &mut PrimitiveContext) -> Result<Value> {
    member_by(ctx, "member", is_equal)
}

/// ( key alist -- entry/#f )
pub fn assq(ctx: &mut PrimitiveContext) -> Result<Value> {
    assoc_by(ctx, "assq", is_eq)
}

/// ( key alist -- entry/#f )
pub fn assv(ctx: &mut PrimitiveContext) -> Result<Value> {
    assoc_by(ctx, "assv", is_eqv)
}

/// ( key alist -- entry/#f )
pub fn assoc(ctx: &mut PrimitiveContext) -> Result<Value> {
    assoc_by(ctx, "assoc", is_equal)
}
