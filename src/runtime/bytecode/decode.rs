use crate::lang::source_buffer::SourceLocation;
use crate::lang::tokenizing::{ Token, TokenKind };
use crate::runtime::bytecode::{ self, OPCODE_LOOKUP, OPCODE_PUSHIN, OPCODE_PUSHQT, OPCODE_PUSHST };
use crate::runtime::built_ins;
use crate::runtime::data_structures::value::Value;
use crate::runtime::error::{ self, HexError };

/// A forward-only reader over a bytecode image, bounds-checked at every step.
pub(crate) struct Cursor<'a>
{
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a>
{
    fn new(bytes: &'a [u8]) -> Cursor<'a>
    {
        Cursor { bytes, pos: 0 }
    }

    fn read_u8(&mut self) -> error::Result<u8>
    {
        let byte = *self.bytes.get(self.pos).ok_or_else(|| HexError::vm("[bytecode] Truncated instruction stream"))?;
        self.pos += 1;
        Ok(byte)
    }

    fn read_bytes(&mut self, n: usize) -> error::Result<&'a [u8]>
    {
        let end = self.pos.checked_add(n).ok_or_else(|| HexError::vm("[bytecode] Truncated payload"))?;

        let slice = self.bytes.get(self.pos..end)
            .ok_or_else(|| HexError::vm("[bytecode] Truncated payload"))?;

        self.pos = end;
        Ok(slice)
    }

    /// Read the canonical varint-style length prefix written by `write_length_prefix`.
    fn read_length_prefix(&mut self) -> error::Result<usize>
    {
        let first = self.read_u8()?;

        if first < 0x80
        {
            Ok(first as usize)
        }
        else if first == 0x80
        {
            let bytes = self.read_bytes(2)?;
            Ok(u16::from_be_bytes([bytes[0], bytes[1]]) as usize)
        }
        else if first == 0x81
        {
            let bytes = self.read_bytes(4)?;
            Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize)
        }
        else
        {
            Err(HexError::vm(format!("[bytecode] Invalid length-prefix marker: {:#x}", first)))
        }
    }
}

fn synthetic_token(kind: TokenKind, lexeme: &str) -> Token
{
    Token::new(kind, lexeme.to_string(), SourceLocation::new_from_path("<bytecode>"))
}

/// Validate the header and symbol table of a bytecode image, returning a cursor positioned at the
/// start of the top-level instruction stream, the decoded symbol names, and the offset one past the
/// end of the image.
pub(crate) fn decode_header(bytes: &[u8]) -> error::Result<(Cursor<'_>, Vec<String>, usize)>
{
    let mut cursor = Cursor::new(bytes);

    let magic = cursor.read_bytes(bytecode::MAGIC.len())?;

    if magic != bytecode::MAGIC
    {
        return Err(HexError::vm("[bytecode] Not a hex bytecode image"));
    }

    let symbol_count = u32::from_le_bytes(cursor.read_bytes(4)?.try_into().unwrap()) as usize;
    let mut symbols = Vec::with_capacity(symbol_count);

    for _ in 0..symbol_count
    {
        let len = cursor.read_u8()? as usize;
        let bytes = cursor.read_bytes(len)?;

        let name = String::from_utf8(bytes.to_vec())
            .map_err(|_| HexError::vm("[bytecode] Symbol table entry is not valid UTF-8"))?;

        symbols.push(name);
    }

    let end = bytes.len();
    Ok((cursor, symbols, end))
}

/// Decode a whole bytecode image: header, symbol table, and the top-level instruction stream,
/// fully materialized up front. The VM instead decodes and executes one top-level instruction at a
/// time via `decode_one`.
pub fn decode_program(bytes: &[u8]) -> error::Result<Vec<Value>>
{
    let (mut cursor, symbols, end) = decode_header(bytes)?;
    decode_block(&mut cursor, &symbols, end)
}

/// Decode instructions from the cursor's current position up to (not including) `end`. A
/// quotation's body is always decoded this way -- fully, as one atomic value -- even when the
/// top-level stream around it is being decoded one instruction at a time.
fn decode_block(cursor: &mut Cursor, symbols: &[String], end: usize) -> error::Result<Vec<Value>>
{
    let mut values = Vec::new();

    while cursor.pos < end
    {
        let opcode = cursor.read_u8()?;
        values.push(decode_instruction(cursor, symbols, end, opcode)?);
    }

    if cursor.pos != end
    {
        return Err(HexError::vm("[bytecode] Instruction overran its enclosing block"));
    }

    Ok(values)
}

/// Decode exactly one top-level instruction starting at `cursor`'s current position, or `None` once
/// `cursor` reaches `end`. This is what lets the VM execute each instruction's effect immediately
/// after decoding it, instead of materializing the whole top-level stream before running any of it.
pub(crate) fn decode_one(cursor: &mut Cursor, symbols: &[String], end: usize) -> error::Result<Option<Value>>
{
    if cursor.pos >= end
    {
        return Ok(None);
    }

    let opcode = cursor.read_u8()?;
    Ok(Some(decode_instruction(cursor, symbols, end, opcode)?))
}

/// Decode the payload of a single already-read opcode byte into a value. `end` bounds a nested
/// `PUSHQT` block the same way it bounds the enclosing one.
fn decode_instruction(cursor: &mut Cursor, symbols: &[String], end: usize, opcode: u8) -> error::Result<Value>
{
    match opcode
    {
        OPCODE_LOOKUP =>
            {
                let len = cursor.read_length_prefix()?;
                let payload = cursor.read_bytes(len)?;

                if payload.len() != 4
                {
                    return Err(HexError::vm("[bytecode] LOOKUP payload must be 4 bytes"));
                }

                let index = u32::from_le_bytes(payload.try_into().unwrap()) as usize;

                let name = symbols.get(index)
                    .ok_or_else(|| HexError::vm(format!("[bytecode] Symbol-table index out of range: {}", index)))?;

                Ok(Value::UserSymbol { name: name.clone(), token: synthetic_token(TokenKind::Symbol, name) })
            }

        OPCODE_PUSHIN =>
            {
                let len = cursor.read_length_prefix()?;
                let payload = cursor.read_bytes(len)?;

                if payload.len() != 4
                {
                    return Err(HexError::vm("[bytecode] PUSHIN payload must be 4 bytes"));
                }

                Ok(Value::Integer(i32::from_le_bytes(payload.try_into().unwrap())))
            }

        OPCODE_PUSHST =>
            {
                let len = cursor.read_length_prefix()?;
                let payload = cursor.read_bytes(len)?;

                let text = String::from_utf8(payload.to_vec())
                    .map_err(|_| HexError::vm("[bytecode] PUSHST payload is not valid UTF-8"))?;

                Ok(Value::String(text))
            }

        OPCODE_PUSHQT =>
            {
                let len = cursor.read_length_prefix()?;
                let start = cursor.pos;
                let block_end = start.checked_add(len)
                    .ok_or_else(|| HexError::vm("[bytecode] Truncated quotation payload"))?;

                if block_end > end
                {
                    return Err(HexError::vm("[bytecode] Truncated quotation payload"));
                }

                let items = decode_block(cursor, symbols, block_end)?;
                Ok(Value::quotation(items))
            }

        other =>
            {
                let name = bytecode::native_symbol_for_opcode(other)
                    .ok_or_else(|| HexError::vm(format!("[bytecode] Unknown opcode: {:#x}", other)))?;

                let handler = built_ins::lookup_native(name)
                    .expect("every name assigned a native opcode has a registered handler");

                Ok(Value::NativeSymbol { name: name.to_string(), handler, token: synthetic_token(TokenKind::Symbol, name) })
            }
    }
}
