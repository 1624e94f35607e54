//! The `-m/--manual` dictionary: a short description per native symbol, in the same spirit as the
//! teacher's `WordInfo.description` field, but collected as a static table rather than populated at
//! registration time since these symbols are never actually inserted into the registry.

/// One native symbol's signature and description.
pub struct WordDoc
{
    pub name: &'static str,
    pub signature: &'static str,
    pub description: &'static str,
}

pub const WORD_DOCS: &[WordDoc] = &[
    WordDoc { name: ":", signature: "value name :", description: "Bind value to name in the registry." },
    WordDoc { name: "::", signature: "quotation name ::", description: "Bind an immediate (splicing) quotation to name." },
    WordDoc { name: "#", signature: "name #", description: "Remove a user-defined binding from the registry." },
    WordDoc { name: "type", signature: "value type", description: "Push the type name of value as a string." },
    WordDoc { name: "if", signature: "cond then else if", description: "Run then if cond is truthy, else otherwise." },
    WordDoc { name: "when", signature: "cond body when", description: "Run body if cond is truthy." },
    WordDoc { name: "while", signature: "cond body while", description: "Repeat body while cond evaluates truthy." },
    WordDoc { name: "try", signature: "body handler try", description: "Run body with errors suppressed; run handler on failure." },
    WordDoc { name: "error", signature: "error", description: "Push and clear the current error message." },
    WordDoc { name: "'", signature: "quotation '", description: "Quote: push a quotation without evaluating it." },
    WordDoc { name: "dup", signature: "a dup", description: "Duplicate the top of the stack." },
    WordDoc { name: "pop", signature: "a pop", description: "Discard the top of the stack." },
    WordDoc { name: "swap", signature: "a b swap", description: "Exchange the top two stack values." },
    WordDoc { name: "stack", signature: "stack", description: "Push the whole stack as a quotation." },
    WordDoc { name: "clear", signature: "clear", description: "Discard every value on the stack." },
    WordDoc { name: ".", signature: "quotation .", description: "Splice a quotation's elements onto the stack." },
    WordDoc { name: "!", signature: "bytecode !", description: "Evaluate an integer quotation as a bytecode image." },
    WordDoc { name: "+", signature: "a b +", description: "Wrapping integer addition." },
    WordDoc { name: "-", signature: "a b -", description: "Wrapping integer subtraction." },
    WordDoc { name: "*", signature: "a b *", description: "Wrapping integer multiplication." },
    WordDoc { name: "/", signature: "a b /", description: "Integer division, truncating toward zero." },
    WordDoc { name: "%", signature: "a b %", description: "Integer remainder." },
    WordDoc { name: "&", signature: "a b &", description: "Bitwise AND." },
    WordDoc { name: "|", signature: "a b |", description: "Bitwise OR." },
    WordDoc { name: "^", signature: "a b ^", description: "Bitwise XOR." },
    WordDoc { name: "<<", signature: "a b <<", description: "Bitwise shift left, shift amount masked to 5 bits." },
    WordDoc { name: ">>", signature: "a b >>", description: "Bitwise shift right, shift amount masked to 5 bits." },
    WordDoc { name: "~", signature: "a ~", description: "Bitwise NOT." },
    WordDoc { name: "==", signature: "a b ==", description: "Structural equality." },
    WordDoc { name: "!=", signature: "a b !=", description: "Structural inequality." },
    WordDoc { name: ">", signature: "a b >", description: "Ordered greater-than." },
    WordDoc { name: "<", signature: "a b <", description: "Ordered less-than." },
    WordDoc { name: ">=", signature: "a b >=", description: "Ordered greater-than-or-equal." },
    WordDoc { name: "<=", signature: "a b <=", description: "Ordered less-than-or-equal." },
    WordDoc { name: "and", signature: "a b and", description: "Logical AND on truthiness." },
    WordDoc { name: "or", signature: "a b or", description: "Logical OR on truthiness." },
    WordDoc { name: "xor", signature: "a b xor", description: "Bitwise XOR, same as ^." },
    WordDoc { name: "not", signature: "a not", description: "Logical NOT on truthiness." },
    WordDoc { name: "int", signature: "s int", description: "Parse a string as an integer." },
    WordDoc { name: "str", signature: "a str", description: "Render a value as a string." },
    WordDoc { name: "dec", signature: "a dec", description: "Render an integer in decimal." },
    WordDoc { name: "hex", signature: "a hex", description: "Render an integer in hexadecimal." },
    WordDoc { name: "ord", signature: "s ord", description: "Push the byte value of a single-character string." },
    WordDoc { name: "chr", signature: "n chr", description: "Push the single-character string for a byte value." },
    WordDoc { name: "cat", signature: "a b cat", description: "Concatenate two strings or two quotations." },
    WordDoc { name: "len", signature: "a len", description: "Push the length of a string or quotation." },
    WordDoc { name: "get", signature: "list index get", description: "Push the element at index." },
    WordDoc { name: "index", signature: "list item index", description: "Push the first index of item, or -1." },
    WordDoc { name: "join", signature: "list sep join", description: "Join a quotation of strings with a separator." },
    WordDoc { name: "split", signature: "str sep split", description: "Split a string on a separator into a quotation." },
    WordDoc { name: "replace", signature: "str find repl replace", description: "Replace every occurrence of find with repl." },
    WordDoc { name: "map", signature: "list action map", description: "Push a quotation built by running action over each element." },
    WordDoc { name: "filter", signature: "list predicate filter", description: "Keep only the elements for which predicate is truthy." },
    WordDoc { name: "puts", signature: "a puts", description: "Print a value, raw and unescaped at the top level, no newline." },
    WordDoc { name: "warn", signature: "a warn", description: "Print a value to stderr, raw and unescaped at the top level." },
    WordDoc { name: "print", signature: "a print", description: "Print a value followed by a newline, flushing stdout." },
    WordDoc { name: "gets", signature: "gets", description: "Read a line from stdin as a string." },
    WordDoc { name: "read", signature: "path read", description: "Read a file, as text or as a quotation of bytes." },
    WordDoc { name: "write", signature: "data path write", description: "Write data to a file, overwriting it." },
    WordDoc { name: "append", signature: "data path append", description: "Append data to a file, creating it if needed." },
    WordDoc { name: "args", signature: "args", description: "Push the script's command-line arguments as a quotation of strings." },
    WordDoc { name: "exit", signature: "code exit", description: "Terminate the process immediately with code." },
    WordDoc { name: "exec", signature: "command exec", description: "Run a shell command, inheriting stdio; push its exit code." },
    WordDoc { name: "run", signature: "command run", description: "Run a shell command, capturing output; push (code out err)." },
];
