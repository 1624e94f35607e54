impl Default for SourceLocation
{
    fn default() -> Self
    {
        Self::new()
    }
}

use core::str::Chars;
use std::fmt::{ self,
                Display,
                Formatter };



/// The location in the source code where a token was found.  Used throughout the interpreter for
/// error reporting and for the entries placed in the stack-trace ring buffer.
#[derive(Clone, PartialEq, Eq, PartialOrd)]
pub struct SourceLocation
{
    /// The path to the source file, or a tag such as "\<repl\>" for interactively entered code.
    filename: String,

    /// The 1 based line number in the source code.
    line: usize,

    /// The 1 based column number in the source code.
    column: usize
}


/// Used for error reporting to show where in the source code an error originated.
impl Display for SourceLocation
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result
    {
        write!(formatter, "{} ({},{})", self.filename, self.line, self.column)
    }
}


impl SourceLocation
{
    /// Create a new SourceLocation at the start of a named source.
    pub fn new() -> SourceLocation
    {
        SourceLocation { filename: "<unspecified>".to_string(), line: 1, column: 1 }
    }

    /// Create a new SourceLocation for the start of the given file or tag.
    pub fn new_from_path(filename: &str) -> SourceLocation
    {
        SourceLocation { filename: filename.to_owned(), line: 1, column: 1 }
    }

    /// Create a new SourceLocation with all of the needed information.
    pub fn new_from_info(filename: &str, line: usize, column: usize) -> SourceLocation
    {
        SourceLocation { filename: filename.to_owned(), line, column }
    }

    /// The path to the source code or a meaningful description of it.
    pub fn filename(&self) -> &str
    {
        &self.filename
    }

    /// The 1 based line number in the source code.
    pub fn line(&self) -> usize
    {
        self.line
    }

    /// The 1 based column number in the source code.
    pub fn column(&self) -> usize
    {
        self.column
    }
}



/// A forward-only cursor over the source code being tokenized.  Tracks the cursor's line/column
/// position as characters are consumed so that tokens can be stamped with where they were found.
///
/// Only holds a reference to the source text; the text is expected to outlive the buffer.
pub struct SourceBuffer<'a>
{
    chars: Chars<'a>,
    location: SourceLocation,
    current: Option<char>
}


impl<'a> SourceBuffer<'a>
{
    /// Create a new SourceBuffer over the given source text, tagged with the given filename.
    pub fn new(filename: &str, source: &'a str) -> SourceBuffer<'a>
    {
        SourceBuffer
            {
                chars: source.chars(),
                location: SourceLocation::new_from_path(filename),
                current: None
            }
    }

    /// The location the cursor is currently at.  This is the location of the character that would
    /// be returned by the next call to peek_next/next_char.
    pub fn location(&self) -> &SourceLocation
    {
        &self.location
    }

    /// Peek at the next character without consuming it.
    pub fn peek_next(&mut self) -> Option<char>
    {
        match self.current
        {
            Some(_) => self.current,
            None =>
                {
                    let next = self.chars.next();
                    self.current = next;
                    next
                }
        }
    }

    /// Peek at the character after the next one, without consuming either.
    pub fn peek_second(&mut self) -> Option<char>
    {
        let _ = self.peek_next();
        self.chars.clone().next()
    }

    /// Consume and return the next character.
    pub fn next_char(&mut self) -> Option<char>
    {
        let next = match self.current
        {
            Some(_) =>
                {
                    let next = self.current;
                    self.current = None;
                    next
                },

            None => self.chars.next()
        };

        if let Some(next_char) = next
        {
            self.advance_location(next_char);
        }

        next
    }

    /// Advance the tracked location based on the character just consumed.  A new line resets the
    /// column and bumps the line number; anything else just bumps the column.
    fn advance_location(&mut self, next: char)
    {
        if next == '\n'
        {
            self.location.line += 1;
            self.location.column = 1;
        }
        else
        {
            self.location.column += 1;
        }
    }
}
