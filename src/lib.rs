//! An interactive explorer over an in-memory dataset of ships.
//!
//! The dataset is loaded once into a [`RecordStore`] and never changes after
//! that. The [`query`] module holds the pure aggregation functions
//! (group-and-count, top-N, substring search, distinct values). The
//! [`Interpreter`] is the command loop: it reads a line, validates it against
//! the table in [`command`], runs the matching handler and prints the result.

mod builtin;
pub mod command;
pub mod config;
pub mod env;
pub mod error;
pub mod io_adapters;
mod interpreter;
pub mod loader;
mod parser;
pub mod query;
pub mod record;
pub mod render;

pub use env::Environment;
pub use error::ExplorerError;
pub use interpreter::Interpreter;
pub use record::{Field, GeoPoint, RecordStore, ShipRecord};
