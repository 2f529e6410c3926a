//! Handlers for the commands in [`crate::command::COMMANDS`].
//!
//! Handlers ask the query engine for data and format it onto `out`. None of
//! them touch the record store beyond reading it.

use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

use crate::command::COMMANDS;
use crate::env::Environment;
use crate::query;
use crate::record::Field;
use crate::render::Renderer;

pub const FAREWELL: &str = "Exiting the Ships CLI. Goodbye!";

pub fn help(_env: &mut Environment, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Available commands:")?;
    for spec in COMMANDS {
        writeln!(out, "  {:<32}{}", spec.usage, spec.about)?;
    }
    Ok(())
}

pub fn show_countries(env: &mut Environment, out: &mut dyn Write) -> Result<()> {
    for country in query::distinct_sorted(env.store.records(), Field::Country) {
        writeln!(out, "{}", country)?;
    }
    Ok(())
}

pub fn top_countries(env: &mut Environment, n: usize, out: &mut dyn Write) -> Result<()> {
    let grouped = query::group_count_by(env.store.records(), Field::Country);
    for (country, count) in query::top_n(&grouped, n) {
        writeln!(out, "{}: {}", country, count)?;
    }
    Ok(())
}

pub fn ships_by_types(env: &mut Environment, out: &mut dyn Write) -> Result<()> {
    for (ship_type, count) in query::group_count_by(env.store.records(), Field::TypeSummary) {
        writeln!(out, "{}: {}", ship_type, count)?;
    }
    Ok(())
}

pub fn search_ship(env: &mut Environment, term: &str, out: &mut dyn Write) -> Result<()> {
    let names = query::search_by_substring(env.store.records(), Field::Name, term);
    if names.is_empty() {
        writeln!(out, "No ships found matching '{}'.", term)?;
    }
    for name in names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

pub fn speed_histogram(env: &mut Environment, out: &mut dyn Write) -> Result<()> {
    let speeds = query::speeds(env.store.records());
    let path = env.output_dir.join("speed_histogram.svg");
    plot(env.histogram.as_ref(), &speeds, &path, "speed values", out)
}

pub fn ships_map(env: &mut Environment, out: &mut dyn Write) -> Result<()> {
    let positions = query::positions(env.store.records());
    let path = env.output_dir.join("ships_map.svg");
    plot(env.map.as_ref(), &positions, &path, "ship positions", out)
}

/// Hand present values to a renderer; a failed render is reported, not raised.
fn plot<P>(
    renderer: &dyn Renderer<P>,
    points: &[P],
    path: &Path,
    what: &str,
    out: &mut dyn Write,
) -> Result<()> {
    if points.is_empty() {
        writeln!(out, "No valid {} to plot.", what)?;
        return Ok(());
    }
    match renderer.render(points, path) {
        Ok(()) => {
            info!(path = %path.display(), points = points.len(), "rendered {}", what);
            writeln!(out, "Saved {} {} to {}", points.len(), what, path.display())?;
        }
        Err(e) => {
            warn!(error = %e, "render failed");
            writeln!(out, "Error: {}", e)?;
        }
    }
    Ok(())
}

pub fn exit(env: &mut Environment, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", FAREWELL)?;
    env.should_exit = true;
    Ok(())
}
