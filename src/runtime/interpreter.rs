use crate::runtime::data_structures::registry::Registry;
use crate::runtime::data_structures::stack::Stack;
use crate::runtime::data_structures::trace::Trace;
use crate::runtime::data_structures::value::Value;
use crate::runtime::error::{ self, HexError, TraceEntry };

/// The three toggles the source keeps on its context: whether native symbols log their own
/// dispatch, whether failures are echoed to the diagnostic stream as they happen, and whether a
/// fatal error prints the trace buffer on its way out.
#[derive(Clone, Copy, Debug)]
pub struct Settings
{
    pub debugging_enabled: bool,
    pub errors_enabled: bool,
    pub stack_trace_enabled: bool,
}

impl Default for Settings
{
    fn default() -> Settings
    {
        Settings { debugging_enabled: false, errors_enabled: true, stack_trace_enabled: true }
    }
}

/// The mutable state threaded through every native symbol, the interpreter, and the bytecode VM:
/// the data stack, the symbol registry, the dispatch trace, runtime settings, the fixed-size error
/// slot, and the program's own argument vector.
pub struct Context
{
    pub stack: Stack,
    pub registry: Registry,
    pub trace: Trace,
    pub settings: Settings,
    pub filename: String,
    pub args: Vec<String>,
    error_slot: Option<String>,
}

impl Context
{
    pub fn new(filename: impl Into<String>, args: Vec<String>) -> Context
    {
        Context {
            stack: Stack::new(),
            registry: Registry::new(),
            trace: Trace::new(),
            settings: Settings::default(),
            filename: filename.into(),
            args,
            error_slot: None,
        }
    }

    /// Run a whole program (or a quotation's contents) in order, stopping at the first failure.
    pub fn run(&mut self, values: Vec<Value>) -> error::Result<()>
    {
        for value in values
        {
            self.push_value(value)?;
        }

        Ok(())
    }

    /// Push one value, applying the engine's symbol-dispatch rules.
    pub fn push_value(&mut self, value: Value) -> error::Result<()>
    {
        match value
        {
            Value::NativeSymbol { name, handler, token } =>
                {
                    self.trace.push(TraceEntry { symbol: name.clone(), location: token.location.clone() });

                    if self.settings.debugging_enabled
                    {
                        log::debug!("dispatch native '{}' at {}", name, token.location);
                    }

                    self.dispatch(handler)
                }

            Value::UserSymbol { name, token } =>
                {
                    self.trace.push(TraceEntry { symbol: name.clone(), location: token.location.clone() });

                    if self.settings.debugging_enabled
                    {
                        log::debug!("dispatch user '{}' at {}", name, token.location);
                    }

                    self.dispatch_user(&name)
                }

            other => self.stack.push(other),
        }
    }

    fn dispatch(&mut self, handler: crate::runtime::data_structures::value::NativeFn) -> error::Result<()>
    {
        match handler(self)
        {
            Ok(()) => Ok(()),

            Err(err) =>
                {
                    self.record_error(&err);
                    Err(err)
                }
        }
    }

    fn dispatch_user(&mut self, name: &str) -> error::Result<()>
    {
        let resolved = self.registry.get(name)
            .ok_or_else(|| HexError::dispatch(format!("Undefined symbol: {}", name)));

        let resolved = match resolved
        {
            Ok(value) => value,
            Err(err) =>
                {
                    self.record_error(&err);
                    return Err(err);
                }
        };

        let result = match resolved
        {
            Value::Quotation { items, immediate: true } => self.run(items),
            Value::Quotation { items, immediate: false } => self.stack.push(Value::quotation(items)),
            other => self.stack.push(other),
        };

        if let Err(ref err) = result
        {
            self.record_error(err);
        }

        result
    }

    /// Record a failure into the fixed-size error slot, and echo it to the log if enabled. Every
    /// escaping error passes through here exactly once, regardless of whether it originates from a
    /// native symbol, a user symbol's resolution, or the stack itself.
    fn record_error(&mut self, err: &HexError)
    {
        self.error_slot = Some(err.slot_message());

        if self.settings.errors_enabled
        {
            log::error!("{}", err);
        }
    }

    /// Read and clear the error slot, as the `error` native symbol does.
    pub fn take_error(&mut self) -> Option<String>
    {
        self.error_slot.take()
    }

    pub fn error_slot(&self) -> Option<&str>
    {
        self.error_slot.as_deref()
    }

    pub fn clear_error(&mut self)
    {
        self.error_slot = None;
    }

    /// Print the dispatch trace, newest dispatch first, the way a fatal error is reported at the
    /// top level.
    pub fn print_trace(&self)
    {
        for entry in self.trace.newest_first()
        {
            eprintln!("  at {}", entry);
        }
    }
}
