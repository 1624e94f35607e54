use crate::runtime::built_ins::{ pop_operand, pop_string };
use crate::runtime::data_structures::value::Value;
use crate::runtime::error;
use crate::runtime::interpreter::Context;

/// `a s : -> ·` Store `a` under the name `s`. A quotation stored this way is retrieved and pushed
/// as a single value when its name is later pushed.
pub fn bind(ctx: &mut Context) -> error::Result<()>
{
    let name = pop_string(ctx, ":")?;
    let mut value = pop_operand(ctx, ":")?;

    if let Value::Quotation { ref mut immediate, .. } = value
    {
        *immediate = false;
    }

    ctx.registry.set(&name, value)
}

/// `a s :: -> ·` Store `a` under the name `s`, marking a quotation as immediate: its name later
/// splices the quotation's elements onto the stack instead of pushing the quotation itself.
pub fn bind_immediate(ctx: &mut Context) -> error::Result<()>
{
    let name = pop_string(ctx, "::")?;
    let mut value = pop_operand(ctx, "::")?;

    if let Value::Quotation { ref mut immediate, .. } = value
    {
        *immediate = true;
    }

    ctx.registry.set(&name, value)
}

/// `s # -> ·` Delete the user symbol named `s`.
pub fn unbind(ctx: &mut Context) -> error::Result<()>
{
    let name = pop_string(ctx, "#")?;
    ctx.registry.delete(&name)
}
