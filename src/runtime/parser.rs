use std::iter::Peekable;

use crate::lang::source_buffer::SourceLocation;
use crate::lang::tokenizing::{ self, Token, TokenKind, Tokenizer };
use crate::runtime::built_ins;
use crate::runtime::data_structures::value::Value;
use crate::runtime::error::{ self, HexError };
use crate::runtime::interpreter::Context;

/// Tokenize and parse an entire source file into a flat program: a sequence of values to push onto
/// the stack in order, with nested `(...)` forms collected into `Value::Quotation` values ahead of
/// time. Comments are dropped here; an invalid token anywhere is a parse error.
///
/// This materializes the whole program before returning, so it is only used where that's actually
/// wanted (compiling to bytecode, tests). Top-level execution goes through `run` instead, which
/// parses and executes one form at a time.
pub fn parse_program(filename: &str, source: &str) -> error::Result<Vec<Value>>
{
    let tokens = collect_tokens(filename, source)?;
    let mut stream = tokens.into_iter().peekable();
    let values = parse_values_until(&mut stream, None)?;

    Ok(values)
}

/// Parse and run each top-level form of `source` against `ctx`, one at a time: a form is executed
/// as soon as it is parsed, before the next one is even tokenized. This matches how the language is
/// specified to behave at the top level -- a source file that runs fine for its first stretch but
/// has an invalid token or an unbalanced `)` later on still produces every side effect up to that
/// point, rather than having the parse error erase them retroactively.
///
/// A nested `(...)` quotation is still parsed whole before it becomes usable: it's a single value,
/// not a sequence of top-level steps, so there is nothing to stream inside it.
pub fn run(ctx: &mut Context, filename: &str, source: &str) -> error::Result<()>
{
    let mut tokens = Tokenizer::new(filename, source);

    loop
    {
        match next_form(&mut tokens)?
        {
            Step::Value(value) => ctx.push_value(value)?,
            Step::ClosedQuotation(location) =>
                return Err(HexError::parse(location, "Unbalanced quotation: unexpected ')'")),
            Step::EndOfInput => return Ok(()),
        }
    }
}

/// The result of pulling one top-level form out of a raw token stream.
enum Step
{
    Value(Value),
    ClosedQuotation(SourceLocation),
    EndOfInput,
}

/// Pull the next non-comment token from `tokens` and turn it into a single parsed step, recursing
/// to fully materialize a nested quotation when one is opened.
fn next_form(tokens: &mut Tokenizer) -> error::Result<Step>
{
    loop
    {
        let Some(token) = tokens.next_token() else { return Ok(Step::EndOfInput) };

        return match token.kind
        {
            TokenKind::Comment => continue,

            TokenKind::Invalid =>
                Err(HexError::parse(token.location, format!("Invalid token: {}", token.lexeme))),

            TokenKind::QuotationEnd => Ok(Step::ClosedQuotation(token.location)),

            TokenKind::QuotationStart =>
                {
                    let items = collect_quotation_items(tokens, token.location)?;
                    Ok(Step::Value(Value::quotation(items)))
                }

            TokenKind::Integer =>
                Ok(Step::Value(Value::Integer(tokenizing::parse_integer_lexeme(&token.lexeme)))),

            TokenKind::String => Ok(Step::Value(Value::String(token.lexeme))),

            TokenKind::Symbol => Ok(Step::Value(symbol_value(token))),
        };
    }
}

/// Fully materialize a quotation's elements, from just after its opening `(` (recorded at `opened`
/// for unbalanced-quotation error reporting) up to its matching `)`.
fn collect_quotation_items(tokens: &mut Tokenizer, opened: SourceLocation) -> error::Result<Vec<Value>>
{
    let mut values = Vec::new();

    loop
    {
        match next_form(tokens)?
        {
            Step::Value(value) => values.push(value),
            Step::ClosedQuotation(_) => return Ok(values),
            Step::EndOfInput => return Err(HexError::parse(opened, "Unbalanced quotation: missing ')'")),
        }
    }
}

/// Parse a single quotation body (the tokens between a `(` already consumed and its matching `)`)
/// out of an existing token stream -- used for nested quotations and for decoding source embedded
/// at runtime, e.g. by `!` on a string operand.
pub fn parse_quotation_body(filename: &str, source: &str) -> error::Result<Vec<Value>>
{
    parse_program(filename, source)
}

fn collect_tokens(filename: &str, source: &str) -> error::Result<Vec<Token>>
{
    let mut tokens = Vec::new();

    for token in Tokenizer::new(filename, source)
    {
        match token.kind
        {
            TokenKind::Comment => continue,

            TokenKind::Invalid =>
                return Err(HexError::parse(token.location, format!("Invalid token: {}", token.lexeme))),

            _ => tokens.push(token),
        }
    }

    Ok(tokens)
}

/// Consume values from `stream` until either the stream is exhausted (top level, `closing` is
/// None) or a matching `)` is found (nested, `closing` carries the opening token's location for
/// error reporting). On any parse failure the values collected so far are simply dropped as the
/// `Vec` goes out of scope -- Rust's ownership model gives us the deep free the source has to do
/// by hand.
fn parse_values_until(
    stream: &mut Peekable<std::vec::IntoIter<Token>>,
    closing: Option<SourceLocation>,
) -> error::Result<Vec<Value>>
{
    let mut values = Vec::new();

    loop
    {
        let Some(token) = stream.next() else
        {
            return match closing
            {
                Some(open) => Err(HexError::parse(open, "Unbalanced quotation: missing ')'")),
                None => Ok(values),
            };
        };

        match token.kind
        {
            TokenKind::QuotationEnd =>
                {
                    if closing.is_some()
                    {
                        return Ok(values);
                    }

                    return Err(HexError::parse(token.location, "Unbalanced quotation: unexpected ')'"));
                }

            TokenKind::QuotationStart =>
                {
                    let items = parse_values_until(stream, Some(token.location))?;
                    values.push(Value::quotation(items));
                }

            TokenKind::Integer =>
                values.push(Value::Integer(tokenizing::parse_integer_lexeme(&token.lexeme))),

            TokenKind::String => values.push(Value::String(token.lexeme)),

            TokenKind::Symbol => values.push(symbol_value(token)),

            TokenKind::Comment | TokenKind::Invalid => unreachable!("filtered out during tokenization"),
        }
    }
}

fn symbol_value(token: Token) -> Value
{
    if tokenizing::is_native_symbol(&token.lexeme)
    {
        let handler = built_ins::lookup_native(&token.lexeme)
            .expect("every name in NATIVE_SYMBOLS has a registered handler");

        Value::NativeSymbol { name: token.lexeme.clone(), handler, token }
    }
    else
    {
        Value::UserSymbol { name: token.lexeme.clone(), token }
    }
}
