use std::io::{ self, Write };

use crate::runtime::built_ins::pop_operand;
use crate::runtime::data_structures::value::Value;
use crate::runtime::error::{ self, HexError };
use crate::runtime::interpreter::Context;

/// Top-level strings print raw (unescaped); everything else uses the same rendering as source
/// display, so a string nested inside a quotation still shows its escapes.
fn raw_text(value: &Value) -> String
{
    match value
    {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `a puts -> ·` Print `a` to standard output, followed by a newline.
pub fn puts(ctx: &mut Context) -> error::Result<()>
{
    let value = pop_operand(ctx, "puts")?;
    println!("{}", raw_text(&value));
    Ok(())
}

/// `a warn -> ·` Print `a` to standard error, followed by a newline.
pub fn warn(ctx: &mut Context) -> error::Result<()>
{
    let value = pop_operand(ctx, "warn")?;
    eprintln!("{}", raw_text(&value));
    Ok(())
}

/// `a print -> ·` Print `a` to standard output without a trailing newline.
pub fn print(ctx: &mut Context) -> error::Result<()>
{
    let value = pop_operand(ctx, "print")?;
    print!("{}", raw_text(&value));
    io::stdout().flush().map_err(HexError::from)
}

/// `gets -> s` Read one line from standard input, with its trailing newline stripped.
pub fn gets(ctx: &mut Context) -> error::Result<()>
{
    let mut line = String::new();

    io::stdin().read_line(&mut line)
        .map_err(|_| HexError::resource("[gets] Failed to read input"))?;

    let trimmed = line.trim_end_matches(['\n', '\r']).to_string();
    ctx.stack.push(Value::String(trimmed))
}
