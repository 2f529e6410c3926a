use argh::FromArgs;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Explore a dataset of ships from an interactive prompt.
pub struct Options {
    #[argh(option, default = "PathBuf::from(\"ships.json\")")]
    /// path to the JSON ship dataset
    pub data: PathBuf,

    #[argh(option, default = "PathBuf::from(\".\")")]
    /// directory where speed_histogram and ships_map write their images
    pub output_dir: PathBuf,

    #[argh(option, default = "20")]
    /// number of buckets in the speed histogram
    pub bins: usize,

    #[argh(option)]
    /// read commands from this file instead of the interactive prompt
    pub script: Option<PathBuf>,

    #[argh(switch, short = 'v')]
    /// log debug details to stderr
    pub verbose: bool,
}

impl Options {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
