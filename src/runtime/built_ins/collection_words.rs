use crate::runtime::built_ins::{ pop_integer, pop_operand, pop_quotation, pop_string };
use crate::runtime::data_structures::value::Value;
use crate::runtime::error::{ self, HexError };
use crate::runtime::interpreter::Context;

/// `a b cat -> ab` Concatenate two quotations or two strings.
pub fn cat(ctx: &mut Context) -> error::Result<()>
{
    let b = pop_operand(ctx, "cat")?;
    let a = pop_operand(ctx, "cat")?;

    match (a, b)
    {
        (Value::Quotation { items: mut a, .. }, Value::Quotation { items: b, .. }) =>
            {
                a.extend(b);
                ctx.stack.push(Value::quotation(a))
            }

        (Value::String(mut a), Value::String(b)) =>
            {
                a.push_str(&b);
                ctx.stack.push(Value::String(a))
            }

        (a, _) => Err(HexError::dispatch(format!("[cat] Two quotations or two strings required, got a {}", a.type_name()))),
    }
}

/// `a len -> n` The number of elements in a quotation, or the byte length of a string.
pub fn len(ctx: &mut Context) -> error::Result<()>
{
    let value = pop_operand(ctx, "len")?;

    let n = match value
    {
        Value::Quotation { items, .. } => items.len() as i32,
        Value::String(s) => s.len() as i32,
        other => return Err(HexError::dispatch(format!("[len] Quotation or string required, got a {}", other.type_name()))),
    };

    ctx.stack.push(Value::Integer(n))
}

/// `c i get -> v` The element at index `i` of a quotation, or the one-character string at byte
/// offset `i` of a string.
pub fn get(ctx: &mut Context) -> error::Result<()>
{
    let index = pop_integer(ctx, "get")?;
    let collection = pop_operand(ctx, "get")?;

    match collection
    {
        Value::Quotation { items, .. } =>
            {
                if index < 0 || index as usize >= items.len()
                {
                    return Err(HexError::bounds("[get] Index out of range"));
                }

                ctx.stack.push(items[index as usize].clone())
            }

        Value::String(s) =>
            {
                let bytes = s.as_bytes();

                if index < 0 || index as usize >= bytes.len()
                {
                    return Err(HexError::bounds("[get] Index out of range"));
                }

                ctx.stack.push(Value::String((bytes[index as usize] as char).to_string()))
            }

        other => Err(HexError::dispatch(format!("[get] Quotation or string required, got a {}", other.type_name()))),
    }
}

/// `c a index -> n` The index of the first occurrence of `a` in `c`, or -1.
pub fn index(ctx: &mut Context) -> error::Result<()>
{
    let item = pop_operand(ctx, "index")?;
    let collection = pop_operand(ctx, "index")?;

    let found = match collection
    {
        Value::Quotation { items, .. } => items.iter().position(|v| *v == item).map(|i| i as i32).unwrap_or(-1),

        Value::String(s) =>
            {
                let needle = item.as_str()
                    .ok_or_else(|| HexError::dispatch("[index] Quotation or string required"))?;

                match s.find(needle)
                {
                    Some(byte_offset) => byte_offset as i32,
                    None => -1,
                }
            }

        other => return Err(HexError::dispatch(format!("[index] Quotation or string required, got a {}", other.type_name()))),
    };

    ctx.stack.push(Value::Integer(found))
}

/// `q s join -> s'` Join a quotation of strings with separator `s`.
pub fn join(ctx: &mut Context) -> error::Result<()>
{
    let separator = pop_string(ctx, "join")?;
    let items = pop_quotation(ctx, "join")?;

    let mut parts = Vec::with_capacity(items.len());

    for item in items
    {
        let s = item.as_str().ok_or_else(|| HexError::dispatch("[join] Quotation must contain only strings"))?;
        parts.push(s.to_string());
    }

    ctx.stack.push(Value::String(parts.join(&separator)))
}

/// `s sep split -> q` Split a string on `sep`; an empty separator splits into single characters.
pub fn split(ctx: &mut Context) -> error::Result<()>
{
    let separator = pop_string(ctx, "split")?;
    let text = pop_string(ctx, "split")?;

    let parts: Vec<Value> = if separator.is_empty()
    {
        text.chars().map(|c| Value::String(c.to_string())).collect()
    }
    else
    {
        text.split(&separator).map(|s| Value::String(s.to_string())).collect()
    };

    ctx.stack.push(Value::quotation(parts))
}

/// `s find repl replace -> s'` Replace the first occurrence of `find` in `s` with `repl`.
pub fn replace(ctx: &mut Context) -> error::Result<()>
{
    let replacement = pop_string(ctx, "replace")?;
    let search = pop_string(ctx, "replace")?;
    let text = pop_string(ctx, "replace")?;

    let replaced = match text.find(&search)
    {
        Some(byte_offset) =>
            {
                let mut result = String::with_capacity(text.len());
                result.push_str(&text[..byte_offset]);
                result.push_str(&replacement);
                result.push_str(&text[byte_offset + search.len()..]);
                result
            }

        None => text,
    };

    ctx.stack.push(Value::String(replaced))
}

/// Run `action`'s items against a context that already has `operand` on top of its stack, leaving
/// exactly one net result behind. Grounds `map`/`filter`'s "push the element, then splice the
/// action" evaluation strategy.
fn apply_action(ctx: &mut Context, operand: Value, action: &[Value]) -> error::Result<Value>
{
    ctx.stack.push(operand)?;

    for item in action
    {
        ctx.push_value(item.clone())?;
    }

    pop_operand(ctx, "map")
}

/// `q action map -> q'` Run `action` against each element of `q` in order, collecting the results.
pub fn map(ctx: &mut Context) -> error::Result<()>
{
    let action = pop_quotation(ctx, "map")?;
    let items = pop_quotation(ctx, "map")?;

    let mut results = Vec::with_capacity(items.len());

    for item in items
    {
        results.push(apply_action(ctx, item, &action)?);
    }

    ctx.stack.push(Value::quotation(results))
}

/// `q pred filter -> q'` Keep only the elements of `q` for which `pred` leaves a positive integer.
pub fn filter(ctx: &mut Context) -> error::Result<()>
{
    let predicate = pop_quotation(ctx, "filter")?;
    let items = pop_quotation(ctx, "filter")?;

    let mut results = Vec::with_capacity(items.len());

    for item in items
    {
        let kept = item.clone();
        let verdict = apply_action(ctx, item, &predicate)?;

        if verdict.is_truthy().unwrap_or(false)
        {
            results.push(kept);
        }
    }

    ctx.stack.push(Value::quotation(results))
}
