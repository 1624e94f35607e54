use hex::runtime::bytecode::{ encode, vm };
use hex::runtime::interpreter::Context;
use hex::runtime::parser;

fn run_source_ints(source: &str) -> Vec<i32>
{
    let mut ctx = Context::new("<test>", Vec::new());
    parser::run(&mut ctx, "<test>", source).unwrap();

    ctx.stack.entries().iter().map(|v| v.as_integer().unwrap()).collect()
}

fn run_bytecode_ints(source: &str) -> Vec<i32>
{
    let image = encode::compile_program("<test>", source).unwrap();
    let mut ctx = Context::new("<test>", Vec::new());
    vm::execute(&mut ctx, &image).unwrap();

    ctx.stack.entries().iter().map(|v| v.as_integer().unwrap()).collect()
}

#[test]
fn compiled_arithmetic_matches_the_interpreter()
{
    let source = "0x1 0x2 + 0x3 *";
    assert_eq!(run_bytecode_ints(source), run_source_ints(source));
}

#[test]
fn compiled_nested_quotation_round_trips()
{
    let source = "( ( 0x1 0x2 + ) ( 0x3 ) )";
    let image = encode::compile_program("<test>", source).unwrap();
    let mut ctx = Context::new("<test>", Vec::new());
    vm::execute(&mut ctx, &image).unwrap();

    let outer = ctx.stack.peek().unwrap().as_quotation().unwrap();
    assert_eq!(outer.len(), 2);

    let first = outer[0].as_quotation().unwrap();
    assert_eq!(first.len(), 3);
}

#[test]
fn compiled_user_symbol_binding_round_trips()
{
    let source = r#"( 0x1 0x2 + ) "add12" :: add12"#;
    assert_eq!(run_bytecode_ints(source), vec![0x3]);
}

#[test]
fn image_starts_with_the_magic_header()
{
    let image = encode::compile_program("<test>", "0x1").unwrap();
    assert_eq!(&image[..8], &[0x01, 0x48, 0x45, 0x78, 0x01, 0x02, 0x00, 0x00]);
}

#[test]
fn truncated_image_is_a_fatal_vm_error()
{
    let image = encode::compile_program("<test>", "0x1 0x2 +").unwrap();
    let mut ctx = Context::new("<test>", Vec::new());

    assert!(vm::execute(&mut ctx, &image[..image.len() - 1]).is_err());
}

#[test]
fn garbage_is_rejected_for_a_bad_magic()
{
    let mut ctx = Context::new("<test>", Vec::new());
    assert!(vm::execute(&mut ctx, b"not a hex image at all").is_err());
}
