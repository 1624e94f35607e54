use std::cmp::Ordering;
use std::fmt::{ self, Display, Formatter };

use crate::lang::tokenizing::Token;

/// A native symbol's handler: a function from the running context to success/failure.  Defined
/// here (rather than in `interpreter`) so that `Value` does not need to depend on the interpreter
/// module.
pub type NativeFn = fn(&mut crate::runtime::interpreter::Context) -> crate::runtime::error::Result<()>;

/// The core tagged value of the language, per spec.md §3.  Every value is a tree: Quotation owns
/// its elements outright, so Clone is always a full deep copy and there is no possibility of two
/// containers sharing a subtree.
#[derive(Clone)]
pub enum Value
{
    /// A 32-bit signed integer, displayed and parsed as hexadecimal.
    Integer(i32),

    /// An owned byte sequence, printable-ASCII escaped on display.
    String(String),

    /// An ordered, finite, arbitrarily nested sequence of values.  `immediate` is set by `::` and
    /// means pushing the name this quotation is bound to splices its elements rather than pushing
    /// the quotation itself.
    Quotation { items: Vec<Value>, immediate: bool },

    /// An identifier bound to an engine-provided function, plus the token it was parsed from.
    NativeSymbol { name: String, handler: NativeFn, token: Token },

    /// An identifier resolved against the registry each time it is pushed, plus its token.
    UserSymbol { name: String, token: Token },
}

impl Value
{
    /// Construct a plain (non-immediate) quotation.
    pub fn quotation(items: Vec<Value>) -> Value
    {
        Value::Quotation { items, immediate: false }
    }

    /// The name used by the `type` native symbol and in diagnostics.
    pub fn type_name(&self) -> &'static str
    {
        match self
        {
            Value::Integer(_) => "integer",
            Value::String(_) => "string",
            Value::Quotation { .. } => "quotation",
            Value::NativeSymbol { .. } => "native-symbol",
            Value::UserSymbol { .. } => "user-symbol",
        }
    }

    pub fn as_integer(&self) -> Option<i32>
    {
        match self
        {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str>
    {
        match self
        {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_quotation(&self) -> Option<&[Value]>
    {
        match self
        {
            Value::Quotation { items, .. } => Some(items),
            _ => None,
        }
    }

    pub fn into_quotation(self) -> Option<Vec<Value>>
    {
        match self
        {
            Value::Quotation { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Is this value's integer truthy, i.e. greater than zero?  Used by `if`/`when`/`while`.
    pub fn is_truthy(&self) -> Option<bool>
    {
        self.as_integer().map(|v| v > 0)
    }

    /// Symbol identifier comparison, ignoring the attached token -- per spec.md, "Symbols compare
    /// equal iff their identifiers match."
    fn symbol_name(&self) -> Option<&str>
    {
        match self
        {
            Value::NativeSymbol { name, .. } => Some(name),
            Value::UserSymbol { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Structural equality.  Mismatched types are simply unequal rather than an error -- this is what
/// lets `==`/`!=` treat any pair of operands without failing.
impl PartialEq for Value
{
    fn eq(&self, other: &Value) -> bool
    {
        match (self, other)
        {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Quotation { items: a, .. }, Value::Quotation { items: b, .. }) => a == b,
            (a, b) if a.symbol_name().is_some() && b.symbol_name().is_some() =>
                a.symbol_name() == b.symbol_name(),

            _ => false,
        }
    }
}

/// Ordering: integer-wise on integers, lexicographic on strings, lexicographic-then-length on
/// quotations.  Mismatched types have no ordering (callers surface that as a type error).
impl PartialOrd for Value
{
    fn partial_cmp(&self, other: &Value) -> Option<Ordering>
    {
        match (self, other)
        {
            (Value::Integer(a), Value::Integer(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),

            (Value::Quotation { items: a, .. }, Value::Quotation { items: b, .. }) =>
                {
                    for (item_a, item_b) in a.iter().zip(b.iter())
                    {
                        match item_a.partial_cmp(item_b)
                        {
                            Some(Ordering::Equal) => continue,
                            other => return other,
                        }
                    }

                    a.len().partial_cmp(&b.len())
                }

            _ => None,
        }
    }
}

/// Back-slash escape a string's bytes: the inverse of the input escapes plus `\xNN` for any byte
/// outside `[32,126]` that isn't `\t`/`\r`/`\n`. No surrounding quotes; used both for display
/// (wrapped in quotes by `escape_string`) and to bake escapes into a value's stored content (as
/// `read` does for a file's text).
pub fn escape_bytes(value: &str) -> String
{
    let mut result = String::with_capacity(value.len());

    for byte in value.bytes()
    {
        match byte
        {
            b'\\' => result.push_str("\\\\"),
            b'"' => result.push_str("\\\""),
            b'\n' => result.push_str("\\n"),
            b'\t' => result.push_str("\\t"),
            b'\r' => result.push_str("\\r"),
            0x08 => result.push_str("\\b"),
            0x0c => result.push_str("\\f"),
            0x0b => result.push_str("\\v"),
            32..=126 => result.push(byte as char),
            other => result.push_str(&format!("\\x{:02X}", other)),
        }
    }

    result
}

/// Escape a string the way values are displayed on output, wrapped in `"`.
pub fn escape_string(value: &str) -> String
{
    let mut result = String::with_capacity(value.len() + 2);
    result.push('"');
    result.push_str(&escape_bytes(value));
    result.push('"');
    result
}

impl Display for Value
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result
    {
        match self
        {
            Value::Integer(v) => write!(f, "{}", format_hex_i32(*v)),
            Value::String(v) => write!(f, "{}", escape_string(v)),

            Value::Quotation { items, .. } =>
                {
                    write!(f, "(")?;

                    for (index, item) in items.iter().enumerate()
                    {
                        if index > 0
                        {
                            write!(f, " ")?;
                        }

                        write!(f, "{}", item)?;
                    }

                    write!(f, ")")
                }

            Value::NativeSymbol { name, .. } => write!(f, "{}", name),
            Value::UserSymbol { name, .. } => write!(f, "{}", name),
        }
    }
}

/// Format a signed 32-bit value the way the language's integer literals are written: the two's
/// complement bit pattern, as an unsigned hex literal with a `0x` prefix.
pub fn format_hex_i32(value: i32) -> String
{
    format!("0x{:x}", value as u32)
}
