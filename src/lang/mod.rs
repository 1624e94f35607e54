/// Module for tracking a cursor position over the original source text.
pub mod source_buffer;

/// Module for turning source text into a stream of tokens for the parser to consume.
pub mod tokenizing;
