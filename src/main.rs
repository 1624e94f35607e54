use std::fs;
use std::io::{ self, Write };
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use hex::runtime::built_ins::docs::WORD_DOCS;
use hex::runtime::bytecode::{ encode, vm };
use hex::runtime::error::HexError;
use hex::runtime::interpreter::Context;
use hex::runtime::parser;

/// A minimalist, concatenative, hexadecimal-native stack language.
#[derive(Parser, Debug)]
#[command(name = "hex", version, about, long_about = None)]
struct Cli
{
    /// Source (or .hbx bytecode) file to run. Starts a REPL if omitted.
    path: Option<String>,

    /// Enable verbose dispatch logging.
    #[arg(short, long)]
    debug: bool,

    /// Compile `path` to a `.hbx` bytecode file instead of running it.
    #[arg(short, long)]
    bytecode: bool,

    /// Print the manual (the reserved native symbols and what they do) and exit.
    #[arg(short, long)]
    manual: bool,
}

fn init_logging(debug: bool)
{
    let level = if debug { log::LevelFilter::Debug } else { log::LevelFilter::Warn };

    env_logger::Builder::new().filter_level(level).format_timestamp(None).init();
}

/// Strip a leading `#!...` hashbang line, if present, so scripts can be made directly executable.
fn strip_hashbang(source: &str) -> &str
{
    if !source.starts_with("#!")
    {
        return source;
    }

    match source.find('\n')
    {
        Some(index) => &source[index + 1..],
        None => "",
    }
}

fn print_manual()
{
    for doc in WORD_DOCS
    {
        println!("{:<8} {:<28} {}", doc.name, doc.signature, doc.description);
    }
}

fn report_fatal(ctx: &Context, err: &HexError)
{
    eprintln!("error: {}", err);

    if ctx.settings.stack_trace_enabled
    {
        ctx.print_trace();
    }
}

fn run_repl() -> ExitCode
{
    let mut ctx = Context::new("<repl>", Vec::new());
    let stdin = io::stdin();

    loop
    {
        print!("hex> ");

        if io::stdout().flush().is_err()
        {
            break;
        }

        let mut line = String::new();

        match stdin.read_line(&mut line)
        {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        if let Err(err) = parser::run(&mut ctx, "<repl>", &line)
        {
            report_fatal(&ctx, &err);
        }
    }

    ExitCode::SUCCESS
}

fn run_file(cli: &Cli, path: &str) -> ExitCode
{
    let raw_source = match fs::read(path)
    {
        Ok(bytes) => bytes,
        Err(err) => { eprintln!("error: could not read '{}': {}", path, err); return ExitCode::FAILURE; }
    };

    let is_bytecode = Path::new(path).extension().map(|ext| ext == "hbx").unwrap_or(false);

    let script_args: Vec<String> = std::env::args().skip(2).collect();
    let mut ctx = Context::new(path.to_string(), script_args);
    ctx.settings.debugging_enabled = cli.debug;

    if is_bytecode
    {
        return match vm::execute(&mut ctx, &raw_source)
        {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => { report_fatal(&ctx, &err); ExitCode::FAILURE }
        };
    }

    let source = String::from_utf8_lossy(&raw_source);
    let source = strip_hashbang(&source);

    if cli.bytecode
    {
        let image = match encode::compile_program(path, source)
        {
            Ok(image) => image,
            Err(err) => { report_fatal(&ctx, &err); return ExitCode::FAILURE; }
        };

        let out_path = format!("{}.hbx", Path::new(path).with_extension("").display());

        return match fs::write(&out_path, image)
        {
            Ok(()) => { println!("wrote {}", out_path); ExitCode::SUCCESS }
            Err(err) => { eprintln!("error: could not write '{}': {}", out_path, err); ExitCode::FAILURE }
        };
    }

    match parser::run(&mut ctx, path, source)
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => { report_fatal(&ctx, &err); ExitCode::FAILURE }
    }
}

fn main() -> ExitCode
{
    let cli = Cli::parse();

    init_logging(cli.debug);

    if cli.manual
    {
        print_manual();
        return ExitCode::SUCCESS;
    }

    match &cli.path
    {
        Some(path) => run_file(&cli, path),
        None => run_repl(),
    }
}
