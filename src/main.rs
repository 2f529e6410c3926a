use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use tracing_subscriber::EnvFilter;

use ship_explorer::config::Options;
use ship_explorer::io_adapters::ReaderSource;
use ship_explorer::{Environment, Interpreter, loader};

fn main() -> Result<()> {
    let opts: Options = argh::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| opts.default_log_filter().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = loader::load(&opts.data)?;
    if store.is_empty() {
        tracing::warn!(path = %opts.data.display(), "dataset has no records");
    }

    let mut explorer = Interpreter::new(Environment::new(store, &opts.output_dir, opts.bins));
    match &opts.script {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("can't open script {}", path.display()))?;
            explorer.run(&mut ReaderSource::new(BufReader::new(file)), &mut std::io::stdout())
        }
        None => explorer.repl(),
    }
}
