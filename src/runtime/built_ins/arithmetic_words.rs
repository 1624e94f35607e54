use crate::runtime::built_ins::pop_integer;
use crate::runtime::data_structures::value::Value;
use crate::runtime::error::{ self, HexError };
use crate::runtime::interpreter::Context;

fn binary(ctx: &mut Context, op: &str, f: impl FnOnce(i32, i32) -> error::Result<i32>) -> error::Result<()>
{
    let b = pop_integer(ctx, op)?;
    let a = pop_integer(ctx, op)?;
    let result = f(a, b)?;
    ctx.stack.push(Value::Integer(result))
}

/// `a b + -> a+b` (wrapping, matching the source's 32-bit arithmetic)
pub fn add(ctx: &mut Context) -> error::Result<()>
{
    binary(ctx, "+", |a, b| Ok(a.wrapping_add(b)))
}

pub fn sub(ctx: &mut Context) -> error::Result<()>
{
    binary(ctx, "-", |a, b| Ok(a.wrapping_sub(b)))
}

pub fn mul(ctx: &mut Context) -> error::Result<()>
{
    binary(ctx, "*", |a, b| Ok(a.wrapping_mul(b)))
}

pub fn div(ctx: &mut Context) -> error::Result<()>
{
    binary(ctx, "/", |a, b| {
        if b == 0
        {
            Err(HexError::arithmetic("[/] Division by zero"))
        }
        else
        {
            Ok(a.wrapping_div(b))
        }
    })
}

pub fn rem(ctx: &mut Context) -> error::Result<()>
{
    binary(ctx, "%", |a, b| {
        if b == 0
        {
            Err(HexError::arithmetic("[%] Division by zero"))
        }
        else
        {
            Ok(a.wrapping_rem(b))
        }
    })
}

pub fn bitand(ctx: &mut Context) -> error::Result<()>
{
    binary(ctx, "&", |a, b| Ok(a & b))
}

pub fn bitor(ctx: &mut Context) -> error::Result<()>
{
    binary(ctx, "|", |a, b| Ok(a | b))
}

pub fn bitxor(ctx: &mut Context) -> error::Result<()>
{
    binary(ctx, "^", |a, b| Ok(a ^ b))
}

pub fn shl(ctx: &mut Context) -> error::Result<()>
{
    binary(ctx, "<<", |a, b| Ok(a.wrapping_shl(b as u32 & 0x1f)))
}

pub fn shr(ctx: &mut Context) -> error::Result<()>
{
    binary(ctx, ">>", |a, b| Ok(a.wrapping_shr(b as u32 & 0x1f)))
}

/// `a ~ -> ~a`
pub fn bitnot(ctx: &mut Context) -> error::Result<()>
{
    let a = pop_integer(ctx, "~")?;
    ctx.stack.push(Value::Integer(!a))
}
