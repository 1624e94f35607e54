use std::fmt::{ self, Display, Formatter };
use thiserror::Error;

use crate::lang::source_buffer::SourceLocation;

/// Result alias used throughout the interpreter.
pub type Result<T> = std::result::Result<T, HexError>;

/// Every error the engine can raise, grouped the way spec.md's error-kind table groups them.  Each
/// variant carries a human-readable message naming the responsible symbol, matching what gets
/// copied into the context's error slot.
#[derive(Error, Clone, Debug)]
pub enum HexError
{
    /// Unterminated string/block comment, unbalanced quotation, invalid symbol identifier.
    #[error("{location}: {message}")]
    Parse { location: SourceLocation, message: String },

    /// Unknown symbol, or an attempt to redefine/delete a native symbol.
    #[error("{message}")]
    Dispatch { message: String },

    /// Wrong number or kind of stack operands for an operation.
    #[error("{message}")]
    Arity { message: String },

    /// Divide-by-zero and other arithmetic failures.
    #[error("{message}")]
    Arithmetic { message: String },

    /// Index out of range.
    #[error("{message}")]
    Bounds { message: String },

    /// Stack overflow/underflow, file open failure, and other resource errors.
    #[error("{message}")]
    Resource { message: String },

    /// Malformed opcode, truncated payload, unknown symbol-table index.
    #[error("{message}")]
    Vm { message: String },

    /// Wraps a std::io::Error so file operations can use `?`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HexError
{
    pub fn parse(location: SourceLocation, message: impl Into<String>) -> HexError
    {
        HexError::Parse { location, message: message.into() }
    }

    pub fn dispatch(message: impl Into<String>) -> HexError
    {
        HexError::Dispatch { message: message.into() }
    }

    pub fn arity(message: impl Into<String>) -> HexError
    {
        HexError::Arity { message: message.into() }
    }

    pub fn arithmetic(message: impl Into<String>) -> HexError
    {
        HexError::Arithmetic { message: message.into() }
    }

    pub fn bounds(message: impl Into<String>) -> HexError
    {
        HexError::Bounds { message: message.into() }
    }

    pub fn resource(message: impl Into<String>) -> HexError
    {
        HexError::Resource { message: message.into() }
    }

    pub fn vm(message: impl Into<String>) -> HexError
    {
        HexError::Vm { message: message.into() }
    }

    /// The message as it would be stored in the context's 256-byte error slot, truncated to match.
    pub fn slot_message(&self) -> String
    {
        let full = self.to_string();

        if full.len() <= 256
        {
            full
        }
        else
        {
            full.chars().take(256).collect()
        }
    }
}

/// A single entry in the stack-trace ring buffer: the symbol dispatched and where it was found.
#[derive(Clone)]
pub struct TraceEntry
{
    pub symbol: String,
    pub location: SourceLocation,
}

impl Display for TraceEntry
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result
    {
        write!(f, "{} at {}", self.symbol, self.location)
    }
}
