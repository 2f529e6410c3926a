/// One input line split into a command token and its arguments.
#[derive(Debug, PartialEq)]
pub struct CommandLine<'a> {
    /// Lower-cased command token; commands match regardless of case.
    pub name: String,
    pub args: Vec<&'a str>,
}

/// Split `line` on whitespace. Returns `None` for a blank line.
pub fn split_line(line: &str) -> Option<CommandLine<'_>> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?.to_lowercase();
    Some(CommandLine {
        name,
        args: tokens.collect(),
    })
}
