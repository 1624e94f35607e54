//! Implementations of the reserved native symbols, grouped by the stack effect they belong to.
//! Each function has the `NativeFn` signature (`fn(&mut Context) -> error::Result<()>`) and is
//! responsible for popping its own operands and pushing its own results.

pub mod arithmetic_words;
pub mod binding_words;
pub mod boolean_words;
pub mod collection_words;
pub mod comparison_words;
pub mod control_words;
pub mod conversion_words;
pub mod docs;
pub mod file_words;
pub mod io_words;
pub mod process_words;
pub mod stack_words;

use crate::runtime::data_structures::value::{ NativeFn, Value };
use crate::runtime::error::{ self, HexError };
use crate::runtime::interpreter::Context;

/// Map a native symbol's name to its handler. `None` only for names outside the reserved set --
/// every name in `tokenizing::NATIVE_SYMBOLS` has an entry here.
pub fn lookup_native(name: &str) -> Option<NativeFn>
{
    use arithmetic_words::*;
    use binding_words::*;
    use boolean_words::*;
    use collection_words::*;
    use comparison_words::*;
    use control_words::*;
    use conversion_words::*;
    use file_words::*;
    use io_words::*;
    use process_words::*;
    use stack_words::*;

    let handler: NativeFn = match name
    {
        ":" => bind,
        "::" => bind_immediate,
        "#" => unbind,
        "type" => type_of,
        "if" => if_word,
        "when" => when_word,
        "while" => while_word,
        "try" => try_word,
        "error" => error_word,
        "'" => quote,
        "dup" => dup,
        "pop" => pop,
        "swap" => swap,
        "stack" => stack_word,
        "clear" => clear,
        "." => splice,
        "!" => eval,
        "+" => add,
        "-" => sub,
        "*" => mul,
        "/" => div,
        "%" => rem,
        "&" => bitand,
        "|" => bitor,
        "^" => bitxor,
        "<<" => shl,
        ">>" => shr,
        "~" => bitnot,
        "==" => eq,
        "!=" => neq,
        ">" => gt,
        "<" => lt,
        ">=" => ge,
        "<=" => le,
        "and" => and,
        "or" => or,
        "xor" => xor,
        "not" => not,
        "int" => to_int,
        "str" => to_str,
        "dec" => to_dec,
        "hex" => to_hex,
        "ord" => ord,
        "chr" => chr,
        "cat" => cat,
        "len" => len,
        "get" => get,
        "index" => index,
        "join" => join,
        "split" => split,
        "replace" => replace,
        "map" => map,
        "filter" => filter,
        "puts" => puts,
        "warn" => warn,
        "print" => print,
        "gets" => gets,
        "read" => file_words::read,
        "write" => file_words::write,
        "append" => file_words::append,
        "args" => args,
        "exit" => exit,
        "exec" => exec,
        "run" => run,

        _ => return None,
    };

    Some(handler)
}

/// Pop a value, failing with an Arity error naming `op` if the stack is empty.
pub fn pop_operand(ctx: &mut Context, op: &str) -> error::Result<Value>
{
    ctx.stack.pop().map_err(|_| HexError::arity(format!("[{}] Insufficient arguments", op)))
}

pub fn pop_integer(ctx: &mut Context, op: &str) -> error::Result<i32>
{
    let value = pop_operand(ctx, op)?;

    value.as_integer().ok_or_else(|| HexError::dispatch(format!("[{}] Expected an integer operand", op)))
}

pub fn pop_string(ctx: &mut Context, op: &str) -> error::Result<String>
{
    let value = pop_operand(ctx, op)?;

    match value
    {
        Value::String(s) => Ok(s),
        _ => Err(HexError::dispatch(format!("[{}] Expected a string operand", op))),
    }
}

pub fn pop_quotation(ctx: &mut Context, op: &str) -> error::Result<Vec<Value>>
{
    let value = pop_operand(ctx, op)?;

    value.into_quotation().ok_or_else(|| HexError::dispatch(format!("[{}] Expected a quotation operand", op)))
}

/// Bytes backing either a string or a quotation of small integers, as accepted by `write`/`append`.
pub fn pop_bytes(ctx: &mut Context, op: &str) -> error::Result<Vec<u8>>
{
    let value = pop_operand(ctx, op)?;

    match value
    {
        Value::String(s) => Ok(s.into_bytes()),

        Value::Quotation { items, .. } =>
            {
                let mut bytes = Vec::with_capacity(items.len());

                for item in items
                {
                    let n = item.as_integer()
                        .ok_or_else(|| HexError::dispatch(format!("[{}] Expected a quotation of integers", op)))?;

                    bytes.push(n as u8);
                }

                Ok(bytes)
            }

        _ => Err(HexError::dispatch(format!("[{}] Expected a string or quotation of bytes", op))),
    }
}
