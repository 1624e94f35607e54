//! End-to-end scenarios: a whole source snippet in, the final stack (or a specific error) out.

use hex::runtime::error::Result;
use hex::runtime::interpreter::Context;
use hex::runtime::parser;

fn run(source: &str) -> Result<Context>
{
    let mut ctx = Context::new("<test>", Vec::new());
    parser::run(&mut ctx, "<test>", source)?;
    Ok(ctx)
}

#[test]
fn factorial_of_five_via_recursion_through_the_registry()
{
    let source = r#"
        ( ( dup 0x1 <= ) ( pop 0x1 ) ( dup 0x1 - fact * ) if )
        "fact" ::
        0x5 fact
    "#;

    let ctx = run(source).unwrap();
    assert_eq!(ctx.stack.peek().unwrap().as_integer(), Some(0x78));
}

#[test]
fn while_loop_accumulates_a_running_sum()
{
    let source = r#"
        0x0 "sum" :
        0x1 "i" :
        ( i 0x6 < )
        ( sum i + "sum" : i 0x1 + "i" : )
        while
        sum
    "#;

    let ctx = run(source).unwrap();
    assert_eq!(ctx.stack.peek().unwrap().as_integer(), Some(0xf));
}

#[test]
fn unknown_symbol_is_a_dispatch_error()
{
    assert!(run("this-is-not-bound").is_err());
}

#[test]
fn splice_runs_a_quotations_elements_in_place()
{
    let ctx = run("( 0x1 0x2 + ) .").unwrap();
    assert_eq!(ctx.stack.peek().unwrap().as_integer(), Some(0x3));
}

#[test]
fn quote_wraps_a_single_value_without_running_it()
{
    let ctx = run("0x5 ' 0x0 get").unwrap();
    assert_eq!(ctx.stack.peek().unwrap().as_integer(), Some(0x5));
}

#[test]
fn stored_pair_supports_get_after_dup_and_swap()
{
    let ctx = run("( 0x1 0x2 ) \"pair\" : pair dup 0x0 get swap 0x1 get").unwrap();
    let values: Vec<i32> = ctx.stack.entries().iter().map(|v| v.as_integer().unwrap()).collect();

    assert_eq!(values, vec![0x1, 0x2]);
}

#[test]
fn exit_terminates_the_process_rather_than_returning()
{
    // `exit` calls std::process::exit and never returns control to the interpreter, so it cannot
    // be exercised in-process; this documents that constraint instead of invoking it.
    assert!(hex::runtime::built_ins::lookup_native("exit").is_some());
}

#[test]
fn type_names_match_every_value_kind()
{
    let ctx = run(r#"0x1 type "s" type ( ) type ( + ) 0x0 get type"#).unwrap();
    let names: Vec<&str> = ctx.stack.entries().iter().map(|v| v.as_str().unwrap()).collect();

    assert_eq!(names, vec!["integer", "string", "quotation", "native-symbol"]);
}

#[test]
fn error_slot_is_empty_after_a_successful_try()
{
    let ctx = run("( 0x1 0x1 + ) ( error ) try").unwrap();
    assert!(ctx.error_slot().is_none());
}
