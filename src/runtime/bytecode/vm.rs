use crate::runtime::bytecode::decode;
use crate::runtime::error;
use crate::runtime::interpreter::Context;

/// Decode and run a bytecode image against `ctx`, one top-level instruction at a time, mutating
/// its stack and registry the same way the interpreter would for equivalent source. Decoding and
/// executing a later instruction never happens until the previous one's effect has already landed,
/// so a truncated or malformed tail never erases the effects of instructions that ran before it.
pub fn execute(ctx: &mut Context, bytes: &[u8]) -> error::Result<()>
{
    let (mut cursor, symbols, end) = decode::decode_header(bytes)?;

    while let Some(value) = decode::decode_one(&mut cursor, &symbols, end)?
    {
        ctx.push_value(value)?;
    }

    Ok(())
}
