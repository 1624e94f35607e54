use std::fs;

use crate::runtime::built_ins::{ pop_bytes, pop_string };
use crate::runtime::data_structures::value::{ escape_bytes, Value };
use crate::runtime::error::{ self, HexError };
use crate::runtime::interpreter::Context;

/// 10% of a file's bytes falling outside printable ASCII (plus tab/LF/CR) marks it as binary.
const BINARY_THRESHOLD: f64 = 0.1;

fn is_binary(bytes: &[u8]) -> bool
{
    if bytes.is_empty()
    {
        return false;
    }

    let non_printable = bytes.iter()
        .filter(|&&b| !((32..=126).contains(&b) || b == 9 || b == 10 || b == 13))
        .count();

    (non_printable as f64) / (bytes.len() as f64) > BINARY_THRESHOLD
}

/// `name read -> s|q` Read a whole file, returning a quotation of bytes if its content looks
/// binary, otherwise a string with its control characters escaped into the text itself.
pub fn read(ctx: &mut Context) -> error::Result<()>
{
    let filename = pop_string(ctx, "read")?;

    let bytes = fs::read(&filename)
        .map_err(|_| HexError::resource(format!("[read] Could not open file for reading: {}", filename)))?;

    if is_binary(&bytes)
    {
        let items = bytes.into_iter().map(|b| Value::Integer(b as i32)).collect();
        ctx.stack.push(Value::quotation(items))
    }
    else
    {
        let text = String::from_utf8_lossy(&bytes);
        ctx.stack.push(Value::String(escape_bytes(&text)))
    }
}

/// `data name write -> ·` Overwrite `name` with `data` (a string, written raw, or a quotation of
/// bytes).
pub fn write(ctx: &mut Context) -> error::Result<()>
{
    let filename = pop_string(ctx, "write")?;
    let bytes = pop_bytes(ctx, "write")?;

    fs::write(&filename, bytes)
        .map_err(|_| HexError::resource(format!("[write] Could not open file for writing: {}", filename)))
}

/// `data name append -> ·` Append `data` to `name`, creating it if necessary.
pub fn append(ctx: &mut Context) -> error::Result<()>
{
    use std::io::Write as _;

    let filename = pop_string(ctx, "append")?;
    let bytes = pop_bytes(ctx, "append")?;

    let mut file = fs::OpenOptions::new().create(true).append(true).open(&filename)
        .map_err(|_| HexError::resource(format!("[append] Could not open file for appending: {}", filename)))?;

    file.write_all(&bytes)
        .map_err(|_| HexError::resource(format!("[append] Could not write to file: {}", filename)))
}
