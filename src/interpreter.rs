use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::builtin::FAREWELL;
use crate::command;
use crate::env::Environment;
use crate::error::ExplorerError;
use crate::io_adapters::{EditorSource, LineSource};
use crate::parser;

pub const WELCOME: &str = "Welcome to the Ships CLI! Enter 'help' to view available commands.";
pub const PROMPT: &str = "ships# ";

/// The command loop over a loaded dataset.
///
/// Each line is split, checked against the command table and, if valid,
/// handed to its handler. Bad input is answered with a message and the loop
/// keeps going; only a failure to write output ends it early.
///
/// Example
/// ```
/// use ship_explorer::{Environment, Interpreter, RecordStore, ShipRecord};
/// let store = RecordStore::new(vec![ShipRecord::new("Alpha", "US", "Cargo")]);
/// let mut explorer = Interpreter::new(Environment::new(store, ".", 20));
/// let mut out = Vec::new();
/// explorer.execute_line("show_countries", &mut out).unwrap();
/// assert_eq!(out, b"US\n");
/// ```
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Parse, validate and run one line of input.
    pub fn execute_line(&mut self, line: &str, out: &mut dyn Write) -> Result<()> {
        let Some(line) = parser::split_line(line) else {
            return Ok(());
        };

        let invocation = command::lookup(&line.name)
            .ok_or_else(|| ExplorerError::UnknownCommand(line.name.clone()))
            .and_then(|spec| spec.bind(&line.args));

        match invocation {
            Ok(invocation) => {
                debug!(command = invocation.name(), args = ?line.args, "executing");
                invocation.execute(&mut self.env, out)
            }
            Err(e) => {
                debug!(command = %line.name, error = ?e, "rejected");
                writeln!(out, "{}", e)?;
                Ok(())
            }
        }
    }

    /// Run commands from `source` until `exit` or end of input.
    pub fn run(&mut self, source: &mut dyn LineSource, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", WELCOME)?;
        while !self.env.should_exit {
            out.flush()?;
            match source.next_line(PROMPT)? {
                Some(line) => self.execute_line(&line, out)?,
                None => {
                    writeln!(out, "{}", FAREWELL)?;
                    break;
                }
            }
        }
        Ok(())
    }

    /// Interactive Read-Eval-Print Loop on the terminal.
    pub fn repl(&mut self) -> Result<()> {
        let mut source = EditorSource::new()?;
        self.run(&mut source, &mut std::io::stdout())
    }
}
