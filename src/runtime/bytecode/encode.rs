use crate::runtime::bytecode::{
    self,
    OPCODE_LOOKUP,
    OPCODE_PUSHIN,
    OPCODE_PUSHQT,
    OPCODE_PUSHST,
};
use crate::runtime::data_structures::value::Value;
use crate::runtime::error;
use crate::runtime::parser;

/// Compile a whole source file into a bytecode image: header, symbol table, instruction stream.
pub fn compile_program(filename: &str, source: &str) -> error::Result<Vec<u8>>
{
    let program = parser::parse_program(filename, source)?;
    Ok(compile_values(&program))
}

/// Assemble a bytecode image out of an already-parsed value sequence.
pub fn compile_values(values: &[Value]) -> Vec<u8>
{
    let mut symbols: Vec<String> = Vec::new();
    let mut body = Vec::new();

    for value in values
    {
        encode_value(value, &mut symbols, &mut body);
    }

    let mut image = Vec::with_capacity(bytecode::MAGIC.len() + body.len() + 16);
    image.extend_from_slice(&bytecode::MAGIC);
    image.extend_from_slice(&(symbols.len() as u32).to_le_bytes());

    for symbol in &symbols
    {
        image.push(symbol.len() as u8);
        image.extend_from_slice(symbol.as_bytes());
    }

    image.extend_from_slice(&body);
    image
}

fn symbol_index(symbols: &mut Vec<String>, name: &str) -> u32
{
    if let Some(index) = symbols.iter().position(|s| s == name)
    {
        return index as u32;
    }

    symbols.push(name.to_string());
    (symbols.len() - 1) as u32
}

fn emit(out: &mut Vec<u8>, opcode: u8, payload: &[u8])
{
    out.push(opcode);
    bytecode::write_length_prefix(out, payload.len());
    out.extend_from_slice(payload);
}

fn encode_value(value: &Value, symbols: &mut Vec<String>, out: &mut Vec<u8>)
{
    match value
    {
        Value::Integer(n) => emit(out, OPCODE_PUSHIN, &n.to_le_bytes()),

        Value::String(s) => emit(out, OPCODE_PUSHST, s.as_bytes()),

        Value::Quotation { items, .. } =>
            {
                let mut nested = Vec::new();

                for item in items
                {
                    encode_value(item, symbols, &mut nested);
                }

                emit(out, OPCODE_PUSHQT, &nested);
            }

        Value::NativeSymbol { name, .. } =>
            {
                let opcode = bytecode::native_opcode_for(name)
                    .expect("every native symbol name has an assigned opcode");

                out.push(opcode);
            }

        Value::UserSymbol { name, .. } =>
            {
                let index = symbol_index(symbols, name);
                emit(out, OPCODE_LOOKUP, &index.to_le_bytes());
            }
    }
}

