use std::{
    env,
    fmt::{Debug, Display},
    sync::OnceLock,
};

use clap::Parser;

pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Parser)]
#[command(name = "lhs", version, about = "Longest harmonious subsequence of integer lists")]
pub struct Cli {
    /// Integer lists such as "[1, 3, 2]" or "-1 0 0", sample cases run when none are given
    #[arg(allow_hyphen_values = true)]
    pub inputs: Vec<String>,
}

pub struct Config {
    inner: Box<ConfigInner>,
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

/// Process-wide config, read from the environment and CLI arguments on first access.
///
/// Runs before telemetry is up, so nothing is logged here. Exits the process
/// for `--help`, `--version` and argument errors.
pub fn get() -> &'static Config {
    static CELL: OnceLock<Config> = OnceLock::new();

    CELL.get_or_init(|| Config::new(env::var("RUST_LOG").ok(), Cli::parse().inputs))
}

impl Config {
    pub fn new<I>(log_level: Option<String>, inputs: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let log_level = log_level
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned());

        Self {
            inner: Box::new(ConfigInner {
                log_level,
                inputs: inputs.into_iter().collect(),
            }),
        }
    }

    pub fn get_log_level(&self) -> &str {
        &self.inner.log_level
    }

    /// Sequences passed on the command line, unparsed.
    pub fn get_inputs(&self) -> &[String] {
        &self.inner.inputs
    }
}

#[derive(Debug)]
struct ConfigInner {
    log_level: String,
    inputs: Vec<String>,
}
