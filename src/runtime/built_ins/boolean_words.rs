use crate::runtime::built_ins::pop_integer;
use crate::runtime::data_structures::value::Value;
use crate::runtime::error;
use crate::runtime::interpreter::Context;

fn push_bool(ctx: &mut Context, value: bool) -> error::Result<()>
{
    ctx.stack.push(Value::Integer(if value { 1 } else { 0 }))
}

/// `a b and -> a&&b` Logical, not bitwise: an integer is truthy iff nonzero.
pub fn and(ctx: &mut Context) -> error::Result<()>
{
    let b = pop_integer(ctx, "and")?;
    let a = pop_integer(ctx, "and")?;
    push_bool(ctx, a != 0 && b != 0)
}

pub fn or(ctx: &mut Context) -> error::Result<()>
{
    let b = pop_integer(ctx, "or")?;
    let a = pop_integer(ctx, "or")?;
    push_bool(ctx, a != 0 || b != 0)
}

/// `a b xor -> a^b` Bitwise, same operation as `^`.
pub fn xor(ctx: &mut Context) -> error::Result<()>
{
    let b = pop_integer(ctx, "xor")?;
    let a = pop_integer(ctx, "xor")?;
    ctx.stack.push(Value::Integer(a ^ b))
}

/// `a not -> !a` An integer is truthy iff nonzero.
pub fn not(ctx: &mut Context) -> error::Result<()>
{
    let a = pop_integer(ctx, "not")?;
    push_bool(ctx, a == 0)
}
