use std::fmt::{ self, Display, Formatter };

use crate::lang::source_buffer::{ SourceBuffer, SourceLocation };

/// The complete, ordered list of reserved native symbol names.  This ordering is the single source
/// of truth for three things at once: which identifiers the tokenizer accepts as natives, which
/// names the registry refuses to let user code rebind, and the opcode a name is assigned in the
/// bytecode format (native opcode = 0x10 + index into this slice).
pub const NATIVE_SYMBOLS: &[&str] = &[
    ":", "::", "#", "type", "if", "when", "while", "try", "error", "'",
    "dup", "pop", "swap", "stack", "clear", ".", "!",
    "+", "-", "*", "/", "%",
    "&", "|", "^", "<<", ">>", "~",
    "==", "!=", ">", "<", ">=", "<=",
    "and", "or", "xor", "not",
    "int", "str", "dec", "hex", "ord", "chr",
    "cat", "len", "get", "index", "join", "split", "replace",
    "map", "filter",
    "puts", "warn", "print", "gets",
    "read", "write", "append",
    "args", "exit", "exec", "run",
];

/// Is the given name one of the reserved native symbols?
pub fn is_native_symbol(name: &str) -> bool
{
    NATIVE_SYMBOLS.contains(&name)
}

/// Is the given name a syntactically valid user symbol?  Matches `[A-Za-z_][A-Za-z0-9_-]*` and is
/// at most 255 bytes, per spec.
pub fn is_valid_user_symbol(name: &str) -> bool
{
    if name.is_empty() || name.len() > 255
    {
        return false;
    }

    let mut chars = name.chars();
    let first = chars.next().unwrap();

    if !(first.is_ascii_alphabetic() || first == '_')
    {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// The kind of a token, per spec.md §3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind
{
    Integer,
    String,
    Symbol,
    QuotationStart,
    QuotationEnd,
    Comment,
    Invalid,
}

/// A single lexical token: its kind, its raw lexeme, and where it starts in the source.
#[derive(Clone, Debug)]
pub struct Token
{
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: SourceLocation,
}

impl Display for Token
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.lexeme)
    }
}

impl Token
{
    pub fn new(kind: TokenKind, lexeme: String, location: SourceLocation) -> Token
    {
        Token { kind, lexeme, location }
    }
}

fn is_whitespace(c: char) -> bool
{
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

/// Consume and discard whitespace characters.
fn skip_whitespace(buffer: &mut SourceBuffer)
{
    while let Some(next) = buffer.peek_next()
    {
        if !is_whitespace(next)
        {
            break;
        }

        let _ = buffer.next_char();
    }
}

/// Read a line comment starting at `;` up to (but not including) the newline.
fn read_line_comment(buffer: &mut SourceBuffer) -> String
{
    let mut text = String::new();

    while let Some(next) = buffer.peek_next()
    {
        if next == '\n'
        {
            break;
        }

        text.push(buffer.next_char().unwrap());
    }

    text
}

/// Read a `#| ... |#` block comment.  Returns None if the closing `|#` is never found.
fn read_block_comment(buffer: &mut SourceBuffer) -> Option<String>
{
    let mut text = String::new();

    text.push(buffer.next_char().unwrap()); // '#'
    text.push(buffer.next_char().unwrap()); // '|'

    loop
    {
        match (buffer.peek_next(), buffer.peek_second())
        {
            (Some('|'), Some('#')) =>
                {
                    text.push(buffer.next_char().unwrap());
                    text.push(buffer.next_char().unwrap());
                    return Some(text);
                }

            (Some(next), _) =>
                {
                    text.push(next);
                    let _ = buffer.next_char();
                }

            (None, _) => return None,
        }
    }
}

/// Read a `"..."` string literal, un-escaping `\\` and `\"` as it goes.  Returns None if a literal
/// newline or end of input is hit before the closing quote.
fn read_string(buffer: &mut SourceBuffer) -> Option<String>
{
    let _ = buffer.next_char(); // opening '"'
    let mut text = String::new();

    loop
    {
        match buffer.peek_next()
        {
            Some('"') =>
                {
                    let _ = buffer.next_char();
                    return Some(text);
                }

            Some('\n') => return None,

            Some('\\') =>
                {
                    let _ = buffer.next_char();

                    match buffer.peek_next()
                    {
                        Some('\\') =>
                            {
                                text.push('\\');
                                let _ = buffer.next_char();
                            }

                        Some('"') =>
                            {
                                text.push('"');
                                let _ = buffer.next_char();
                            }

                        Some(other) =>
                            {
                                text.push('\\');
                                text.push(other);
                                let _ = buffer.next_char();
                            }

                        None => return None,
                    }
                }

            Some(other) =>
                {
                    text.push(other);
                    let _ = buffer.next_char();
                }

            None => return None,
        }
    }
}

/// Read a `0x`/`0X` prefixed hexadecimal integer literal, including the prefix.
fn read_integer(buffer: &mut SourceBuffer) -> String
{
    let mut text = String::new();

    text.push(buffer.next_char().unwrap()); // '0'
    text.push(buffer.next_char().unwrap()); // 'x' or 'X'

    while let Some(next) = buffer.peek_next()
    {
        if !next.is_ascii_hexdigit()
        {
            break;
        }

        text.push(buffer.next_char().unwrap());
    }

    text
}

/// Read a run of non-whitespace, non-delimiter characters as a symbol candidate.
fn read_symbol(buffer: &mut SourceBuffer) -> String
{
    let mut text = String::new();

    while let Some(next) = buffer.peek_next()
    {
        if is_whitespace(next) || next == ';' || next == '(' || next == ')' || next == '"'
        {
            break;
        }

        text.push(buffer.next_char().unwrap());
    }

    text
}

/// A lazy tokenizer over a SourceBuffer.  Each call to `next_token` produces one token, or `None`
/// once the input is exhausted.
pub struct Tokenizer<'a>
{
    buffer: SourceBuffer<'a>,
}

impl<'a> Tokenizer<'a>
{
    pub fn new(filename: &str, source: &'a str) -> Tokenizer<'a>
    {
        Tokenizer { buffer: SourceBuffer::new(filename, source) }
    }

    /// Produce the next token, or None at end of input.  Column/line in the returned token always
    /// reflect the start of the token, not where the cursor ends up after reading it.
    pub fn next_token(&mut self) -> Option<Token>
    {
        skip_whitespace(&mut self.buffer);

        let next = self.buffer.peek_next()?;
        let location = self.buffer.location().clone();

        if next == ';'
        {
            let text = read_line_comment(&mut self.buffer);
            return Some(Token::new(TokenKind::Comment, text, location));
        }

        if next == '#' && self.buffer.peek_second() == Some('|')
        {
            return match read_block_comment(&mut self.buffer)
            {
                Some(text) => Some(Token::new(TokenKind::Comment, text, location)),
                None => Some(Token::new(TokenKind::Invalid, "unterminated block comment".to_string(), location)),
            };
        }

        if next == '"'
        {
            return match read_string(&mut self.buffer)
            {
                Some(text) => Some(Token::new(TokenKind::String, text, location)),
                None => Some(Token::new(TokenKind::Invalid, "unterminated string".to_string(), location)),
            };
        }

        if next == '0' && matches!(self.buffer.peek_second(), Some('x') | Some('X'))
        {
            let text = read_integer(&mut self.buffer);
            return Some(Token::new(TokenKind::Integer, text, location));
        }

        if next == '('
        {
            let _ = self.buffer.next_char();
            return Some(Token::new(TokenKind::QuotationStart, "(".to_string(), location));
        }

        if next == ')'
        {
            let _ = self.buffer.next_char();
            return Some(Token::new(TokenKind::QuotationEnd, ")".to_string(), location));
        }

        let text = read_symbol(&mut self.buffer);

        if is_native_symbol(&text) || is_valid_user_symbol(&text)
        {
            Some(Token::new(TokenKind::Symbol, text, location))
        }
        else
        {
            Some(Token::new(TokenKind::Invalid, text, location))
        }
    }
}

impl<'a> Iterator for Tokenizer<'a>
{
    type Item = Token;

    fn next(&mut self) -> Option<Token>
    {
        self.next_token()
    }
}

/// Parse a `0[xX][0-9a-fA-F]+` lexeme (prefix included) as an unsigned 32-bit value reinterpreted
/// as signed, matching spec.md's pinned integer-literal semantics.
pub fn parse_integer_lexeme(lexeme: &str) -> i32
{
    let digits = &lexeme[2..];
    let unsigned = u32::from_str_radix(digits, 16).unwrap_or(0);

    unsigned as i32
}
