use crate::runtime::built_ins::{ pop_integer, pop_operand, pop_string };
use crate::runtime::data_structures::value::{ format_hex_i32, Value };
use crate::runtime::error::{ self, HexError };
use crate::runtime::interpreter::Context;

/// `a type -> s` Push the name of `a`'s kind.
pub fn type_of(ctx: &mut Context) -> error::Result<()>
{
    let value = pop_operand(ctx, "type")?;
    ctx.stack.push(Value::String(value.type_name().to_string()))
}

/// `s int -> n` Parse a hex-string (with or without its `0x`/`0X` prefix) as an integer.
pub fn to_int(ctx: &mut Context) -> error::Result<()>
{
    let text = pop_string(ctx, "int")?;
    let digits = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")).unwrap_or(&text);

    let unsigned = u32::from_str_radix(digits, 16)
        .map_err(|_| HexError::dispatch(format!("[int] Not a hexadecimal string: {}", text)))?;

    ctx.stack.push(Value::Integer(unsigned as i32))
}

/// `n str -> s` Render an integer as a `0x`-prefixed hex-string.
pub fn to_str(ctx: &mut Context) -> error::Result<()>
{
    let n = pop_integer(ctx, "str")?;
    ctx.stack.push(Value::String(format_hex_i32(n)))
}

/// `n dec -> s` Render an integer as a base-10 string.
pub fn to_dec(ctx: &mut Context) -> error::Result<()>
{
    let n = pop_integer(ctx, "dec")?;
    ctx.stack.push(Value::String(n.to_string()))
}

/// `s hex -> n` Parse a base-10 string as an integer.
pub fn to_hex(ctx: &mut Context) -> error::Result<()>
{
    let text = pop_string(ctx, "hex")?;

    let n: i32 = text.parse()
        .map_err(|_| HexError::dispatch(format!("[hex] Not a decimal string: {}", text)))?;

    ctx.stack.push(Value::Integer(n))
}

/// `s ord -> n` The byte value of a one-character string, or -1 if `s` isn't exactly one character.
pub fn ord(ctx: &mut Context) -> error::Result<()>
{
    let text = pop_string(ctx, "ord")?;
    let bytes = text.as_bytes();

    let n = if bytes.len() == 1 { bytes[0] as i32 } else { -1 };
    ctx.stack.push(Value::Integer(n))
}

/// `n chr -> s` The one-character string for an ASCII code point, or `""` if out of range.
pub fn chr(ctx: &mut Context) -> error::Result<()>
{
    let n = pop_integer(ctx, "chr")?;

    let text = if (0..128).contains(&n) { (n as u8 as char).to_string() } else { String::new() };

    ctx.stack.push(Value::String(text))
}
