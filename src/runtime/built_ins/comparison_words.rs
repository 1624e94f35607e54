use std::cmp::Ordering;

use crate::runtime::built_ins::pop_operand;
use crate::runtime::data_structures::value::Value;
use crate::runtime::error::{ self, HexError };
use crate::runtime::interpreter::Context;

fn push_bool(ctx: &mut Context, value: bool) -> error::Result<()>
{
    ctx.stack.push(Value::Integer(if value { 1 } else { 0 }))
}

/// `a b == -> a==b` Structural equality; a type mismatch is simply unequal.
pub fn eq(ctx: &mut Context) -> error::Result<()>
{
    let b = pop_operand(ctx, "==")?;
    let a = pop_operand(ctx, "==")?;
    push_bool(ctx, a == b)
}

pub fn neq(ctx: &mut Context) -> error::Result<()>
{
    let b = pop_operand(ctx, "!=")?;
    let a = pop_operand(ctx, "!=")?;
    push_bool(ctx, a != b)
}

fn ordering(ctx: &mut Context, op: &str) -> error::Result<Ordering>
{
    let b = pop_operand(ctx, op)?;
    let a = pop_operand(ctx, op)?;

    a.partial_cmp(&b).ok_or_else(|| {
        HexError::dispatch(format!("[{}] Cannot order a {} against a {}", op, a.type_name(), b.type_name()))
    })
}

pub fn gt(ctx: &mut Context) -> error::Result<()>
{
    let ordering = ordering(ctx, ">")?;
    push_bool(ctx, ordering == Ordering::Greater)
}

pub fn lt(ctx: &mut Context) -> error::Result<()>
{
    let ordering = ordering(ctx, "<")?;
    push_bool(ctx, ordering == Ordering::Less)
}

pub fn ge(ctx: &mut Context) -> error::Result<()>
{
    let ordering = ordering(ctx, ">=")?;
    push_bool(ctx, ordering != Ordering::Less)
}

pub fn le(ctx: &mut Context) -> error::Result<()>
{
    let ordering = ordering(ctx, "<=")?;
    push_bool(ctx, ordering != Ordering::Greater)
}
