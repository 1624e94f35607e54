use hex::runtime::error::Result;
use hex::runtime::interpreter::Context;
use hex::runtime::parser;
use test_case::test_case;

/// Run a whole program from source and return the final stack's integers, for tests whose
/// result is entirely integers.
fn run_ints(source: &str) -> Result<Vec<i32>>
{
    let mut ctx = Context::new("<test>", Vec::new());
    parser::run(&mut ctx, "<test>", source)?;

    Ok(ctx.stack.entries().iter().map(|v| v.as_integer().expect("expected only integers")).collect())
}

#[test_case("0x1 0x2 +", &[0x3]; "add")]
#[test_case("0x5 0x2 -", &[0x3]; "subtract")]
#[test_case("0x3 0x4 *", &[0xc]; "multiply")]
#[test_case("0xa 0x2 /", &[0x5]; "divide")]
#[test_case("0xa 0x3 %", &[0x1]; "modulo")]
#[test_case("0xf 0x1 &", &[0x1]; "bitand")]
#[test_case("0x1 0x2 |", &[0x3]; "bitor")]
#[test_case("0x1 ~", &[-2]; "bitnot")]
#[test_case("0x1 0x2 ==", &[0]; "integers not equal")]
#[test_case("0x2 0x2 ==", &[1]; "integers equal")]
#[test_case("0x1 0x2 <", &[1]; "less than")]
fn arithmetic(source: &str, expected: &[i32])
{
    assert_eq!(run_ints(source).unwrap(), expected);
}

#[test]
fn dup_pushes_a_copy()
{
    assert_eq!(run_ints("0x7 dup").unwrap(), vec![0x7, 0x7]);
}

#[test]
fn swap_exchanges_the_top_two()
{
    assert_eq!(run_ints("0x1 0x2 swap").unwrap(), vec![0x2, 0x1]);
}

#[test]
fn stored_quotation_pushes_whole()
{
    let mut ctx = Context::new("<test>", Vec::new());
    let program = parser::parse_program("<test>", r#"( 0x1 0x2 + ) "q" : q"#).unwrap();
    ctx.run(program).unwrap();

    assert_eq!(ctx.stack.len(), 1);
    let items = ctx.stack.peek().unwrap().as_quotation().unwrap();
    assert_eq!(items.len(), 3);
}

#[test]
fn immediate_quotation_splices_on_push()
{
    assert_eq!(run_ints(r#"( 0x1 0x2 + ) "add12" :: add12"#).unwrap(), vec![0x3]);
}

#[test]
fn natives_cannot_be_rebound()
{
    let mut ctx = Context::new("<test>", Vec::new());
    let program = parser::parse_program("<test>", r#"( 0x0 ) "+" :"#).unwrap();

    assert!(ctx.run(program).is_err());
}

#[test]
fn try_catches_a_runtime_error_and_reads_its_message()
{
    let mut ctx = Context::new("<test>", Vec::new());
    let program = parser::parse_program("<test>", "( 0x0 0x0 / ) ( error ) try").unwrap();
    ctx.run(program).unwrap();

    assert_eq!(ctx.stack.len(), 1);
    assert!(ctx.stack.peek().unwrap().as_str().unwrap().contains("Division by zero"));
}

#[test]
fn map_runs_its_action_against_each_element()
{
    let mut ctx = Context::new("<test>", Vec::new());
    let program = parser::parse_program("<test>", "( ( 0x1 ) ( 0x2 ) ) ( 0x0 get ) map").unwrap();
    ctx.run(program).unwrap();

    let items = ctx.stack.peek().unwrap().as_quotation().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_integer(), Some(0x1));
    assert_eq!(items[1].as_integer(), Some(0x2));
}

#[test]
fn filter_keeps_only_positive_results()
{
    assert_eq!(
        run_ints("( 0x1 0x0 0x2 ) ( ) filter len").unwrap(),
        vec![2],
    );
}

#[test]
fn while_loops_until_condition_is_falsy()
{
    let source = "0x0 \"i\" : ( i 0x5 < ) ( i 0x1 + \"i\" : ) while i";
    assert_eq!(run_ints(source).unwrap(), vec![0x5]);
}

#[test]
fn stack_underflow_is_a_resource_error()
{
    let mut ctx = Context::new("<test>", Vec::new());
    let program = parser::parse_program("<test>", "dup").unwrap();

    assert!(ctx.run(program).is_err());
    assert!(ctx.error_slot().unwrap().contains("Insufficient"));
}

#[test]
fn join_and_split_round_trip()
{
    let mut ctx = Context::new("<test>", Vec::new());
    let program = parser::parse_program("<test>", r#"( "a" "b" "c" ) "," join "," split len"#).unwrap();
    ctx.run(program).unwrap();

    assert_eq!(ctx.stack.peek().unwrap().as_integer(), Some(3));
}
