use crate::runtime::built_ins::pop_operand;
use crate::runtime::data_structures::value::Value;
use crate::runtime::error;
use crate::runtime::interpreter::Context;

/// `a dup -> a a`
pub fn dup(ctx: &mut Context) -> error::Result<()>
{
    let value = pop_operand(ctx, "dup")?;
    ctx.stack.push(value.clone())?;
    ctx.stack.push(value)
}

/// `a pop -> ·`
pub fn pop(ctx: &mut Context) -> error::Result<()>
{
    pop_operand(ctx, "pop")?;
    Ok(())
}

/// `a b swap -> b a`
pub fn swap(ctx: &mut Context) -> error::Result<()>
{
    let b = pop_operand(ctx, "swap")?;
    let a = pop_operand(ctx, "swap")?;
    ctx.stack.push(b)?;
    ctx.stack.push(a)
}

/// `stack -> q` Push a quotation snapshot of the whole stack, bottom to top, leaving it untouched.
pub fn stack_word(ctx: &mut Context) -> error::Result<()>
{
    let snapshot: Vec<Value> = ctx.stack.entries().to_vec();
    ctx.stack.push(Value::quotation(snapshot))
}

/// `clear -> ·` Discard everything currently on the stack.
pub fn clear(ctx: &mut Context) -> error::Result<()>
{
    ctx.stack.clear();
    Ok(())
}
