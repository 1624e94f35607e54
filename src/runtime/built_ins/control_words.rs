use crate::runtime::built_ins::{ pop_operand, pop_quotation };
use crate::runtime::data_structures::value::Value;
use crate::runtime::error::{ self, HexError };
use crate::runtime::interpreter::Context;
use crate::runtime::parser;

fn truthy_result(ctx: &mut Context, op: &str) -> error::Result<bool>
{
    let value = pop_operand(ctx, op)?;

    value.is_truthy().ok_or_else(|| HexError::dispatch(format!("[{}] Expected an integer condition result", op)))
}

/// `cond then else if -> …` Run `cond`; if the integer it leaves behind is greater than zero run
/// `then`, otherwise run `else`.
pub fn if_word(ctx: &mut Context) -> error::Result<()>
{
    let else_q = pop_quotation(ctx, "if")?;
    let then_q = pop_quotation(ctx, "if")?;
    let cond_q = pop_quotation(ctx, "if")?;

    ctx.run(cond_q)?;

    if truthy_result(ctx, "if")?
    {
        ctx.run(then_q)
    }
    else
    {
        ctx.run(else_q)
    }
}

/// `cond then when -> …` Run `cond`; run `then` only if its result is truthy.
pub fn when_word(ctx: &mut Context) -> error::Result<()>
{
    let then_q = pop_quotation(ctx, "when")?;
    let cond_q = pop_quotation(ctx, "when")?;

    ctx.run(cond_q)?;

    if truthy_result(ctx, "when")?
    {
        ctx.run(then_q)
    }
    else
    {
        Ok(())
    }
}

/// `cond body while -> …` Run `cond`; while its result is truthy, run `body` and repeat.
pub fn while_word(ctx: &mut Context) -> error::Result<()>
{
    let body_q = pop_quotation(ctx, "while")?;
    let cond_q = pop_quotation(ctx, "while")?;

    loop
    {
        ctx.run(cond_q.clone())?;

        if !truthy_result(ctx, "while")?
        {
            return Ok(());
        }

        ctx.run(body_q.clone())?;
    }
}

/// `body handler try -> …` Run `body` with error printing suppressed; if it leaves the error slot
/// populated, run `handler` too. The only local-recovery construct -- every other failure
/// propagates to the top level.
pub fn try_word(ctx: &mut Context) -> error::Result<()>
{
    let handler_q = pop_quotation(ctx, "try")?;
    let body_q = pop_quotation(ctx, "try")?;

    let previous_errors_enabled = ctx.settings.errors_enabled;
    ctx.settings.errors_enabled = false;
    ctx.clear_error();

    let _ = ctx.run(body_q);

    ctx.settings.errors_enabled = previous_errors_enabled;

    if ctx.error_slot().is_some()
    {
        ctx.run(handler_q)?;
    }

    Ok(())
}

/// `error -> s` Read and clear the error slot, pushing its contents (or an empty string).
pub fn error_word(ctx: &mut Context) -> error::Result<()>
{
    let message = ctx.take_error().unwrap_or_default();
    ctx.stack.push(Value::String(message))
}

/// `a ' -> (a)` Wrap a single value in a one-element quotation.
pub fn quote(ctx: &mut Context) -> error::Result<()>
{
    let value = pop_operand(ctx, "'")?;
    ctx.stack.push(Value::quotation(vec![value]))
}

/// `q . -> …` Splice a quotation onto the stack, as if re-executing each of its elements in order.
pub fn splice(ctx: &mut Context) -> error::Result<()>
{
    let items = pop_quotation(ctx, ".")?;
    ctx.run(items)
}

/// `v ! -> …` Reinterpret `v` as code: a string is parsed and run as source, a quotation of
/// integers is treated as a bytecode image and run on the VM.
pub fn eval(ctx: &mut Context) -> error::Result<()>
{
    let value = pop_operand(ctx, "!")?;

    match value
    {
        Value::String(source) =>
            {
                let filename = ctx.filename.clone();
                parser::run(ctx, &filename, &source)
            }

        Value::Quotation { items, .. } =>
            {
                let mut bytes = Vec::with_capacity(items.len());

                for item in items
                {
                    let n = item.as_integer()
                        .ok_or_else(|| HexError::dispatch("[!] Expected a quotation of bytes"))?;

                    bytes.push(n as u8);
                }

                crate::runtime::bytecode::vm::execute(ctx, &bytes)
            }

        _ => Err(HexError::dispatch("[!] Expected a string or a quotation of bytes")),
    }
}
