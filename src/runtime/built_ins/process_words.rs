use std::process::Command;

use crate::runtime::built_ins::{ pop_integer, pop_string };
use crate::runtime::data_structures::value::Value;
use crate::runtime::error::{ self, HexError };
use crate::runtime::interpreter::Context;

/// `args -> q` Push the program's own argument vector as a quotation of strings.
pub fn args(ctx: &mut Context) -> error::Result<()>
{
    let items = ctx.args.iter().cloned().map(Value::String).collect();
    ctx.stack.push(Value::quotation(items))
}

/// `n exit -> !` Terminate the process immediately with exit code `n`.
pub fn exit(ctx: &mut Context) -> error::Result<()>
{
    let code = pop_integer(ctx, "exit")?;
    std::process::exit(code);
}

/// `s exec -> n` Run `s` through the host shell, returning its exit status.
pub fn exec(ctx: &mut Context) -> error::Result<()>
{
    let command = pop_string(ctx, "exec")?;

    let status = Command::new("sh").arg("-c").arg(&command).status()
        .map_err(|e| HexError::resource(format!("[exec] Failed to run command: {}", e)))?;

    ctx.stack.push(Value::Integer(status.code().unwrap_or(-1)))
}

/// `s run -> (status out err)` Run `s` through the host shell, capturing both output streams.
pub fn run(ctx: &mut Context) -> error::Result<()>
{
    let command = pop_string(ctx, "run")?;

    let output = Command::new("sh").arg("-c").arg(&command).output()
        .map_err(|e| HexError::resource(format!("[run] Failed to run command: {}", e)))?;

    let status = Value::Integer(output.status.code().unwrap_or(-1));
    let stdout = Value::String(String::from_utf8_lossy(&output.stdout).into_owned());
    let stderr = Value::String(String::from_utf8_lossy(&output.stderr).into_owned());

    ctx.stack.push(Value::quotation(vec![status, stdout, stderr]))
}
