//! The command table and argument validation.
//!
//! Each [`CommandSpec`] is plain data: a name, a usage line, a one-line
//! description and a typed [`Handler`]. The handler variant fixes both the
//! arity and the kind of argument, so validation is driven entirely by the
//! table and adding a command never touches the dispatch loop.

use anyhow::Result;
use std::io::Write;

use crate::builtin;
use crate::env::Environment;
use crate::error::ExplorerError;

/// Handler taking no arguments.
pub type NullaryFn = fn(&mut Environment, &mut dyn Write) -> Result<()>;
/// Handler taking one non-negative integer.
pub type CountFn = fn(&mut Environment, usize, &mut dyn Write) -> Result<()>;
/// Handler taking one free-text token.
pub type TextFn = fn(&mut Environment, &str, &mut dyn Write) -> Result<()>;

#[derive(Clone, Copy)]
pub enum Handler {
    Nullary(NullaryFn),
    Count(CountFn),
    Text(TextFn),
}

pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub about: &'static str,
    pub handler: Handler,
}

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        usage: "help",
        about: "list available commands",
        handler: Handler::Nullary(builtin::help),
    },
    CommandSpec {
        name: "show_countries",
        usage: "show_countries",
        about: "list every flag country, alphabetically",
        handler: Handler::Nullary(builtin::show_countries),
    },
    CommandSpec {
        name: "top_countries",
        usage: "top_countries <num_countries>",
        about: "countries with the most ships",
        handler: Handler::Count(builtin::top_countries),
    },
    CommandSpec {
        name: "ships_by_types",
        usage: "ships_by_types",
        about: "number of ships of each type",
        handler: Handler::Nullary(builtin::ships_by_types),
    },
    CommandSpec {
        name: "search_ship",
        usage: "search_ship <name>",
        about: "ships whose name contains the text, ignoring case",
        handler: Handler::Text(builtin::search_ship),
    },
    CommandSpec {
        name: "speed_histogram",
        usage: "speed_histogram",
        about: "save a histogram of ship speeds",
        handler: Handler::Nullary(builtin::speed_histogram),
    },
    CommandSpec {
        name: "ships_map",
        usage: "ships_map",
        about: "save a map of ship positions",
        handler: Handler::Nullary(builtin::ships_map),
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        about: "leave the explorer",
        handler: Handler::Nullary(builtin::exit),
    },
];

/// Find a command by its (already lower-cased) name.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// A command whose arguments passed validation.
pub struct Invocation<'a> {
    name: &'static str,
    call: Call<'a>,
}

enum Call<'a> {
    Nullary(NullaryFn),
    Count(CountFn, usize),
    Text(TextFn, &'a str),
}

impl CommandSpec {
    pub fn arity(&self) -> usize {
        match self.handler {
            Handler::Nullary(_) => 0,
            Handler::Count(_) | Handler::Text(_) => 1,
        }
    }

    /// Check `args` against this command's arity and argument kind.
    pub fn bind<'a>(&self, args: &[&'a str]) -> Result<Invocation<'a>, ExplorerError> {
        if args.len() != self.arity() {
            return Err(ExplorerError::Usage { usage: self.usage });
        }
        let call = match self.handler {
            Handler::Nullary(f) => Call::Nullary(f),
            Handler::Count(f) => {
                let n = args[0]
                    .parse()
                    .map_err(|_| ExplorerError::InvalidNumber { command: self.name })?;
                Call::Count(f, n)
            }
            Handler::Text(f) => Call::Text(f, args[0]),
        };
        Ok(Invocation {
            name: self.name,
            call,
        })
    }
}

impl Invocation<'_> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn execute(self, env: &mut Environment, out: &mut dyn Write) -> Result<()> {
        match self.call {
            Call::Nullary(f) => f(env, out),
            Call::Count(f, n) => f(env, n, out),
            Call::Text(f, text) => f(env, text, out),
        }
    }
}
