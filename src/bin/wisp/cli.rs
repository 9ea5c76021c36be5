//! CLI argument parsing, in the style of the teacher's
//! `src/bin/why/cli.rs`: a `clap`-derived `Cli` struct plus a
//! `LogLevel` enum convertible into `log::Level`.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Source file to run. With no file, starts an interactive prompt.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Log verbosity.
    #[arg(value_enum, long, default_value_t = LogLevel::default())]
    pub verbosity: LogLevel,

    /// Log the parsed program's AST at `debug` level before evaluating.
    #[arg(long)]
    pub dump_ast: bool,
}

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }
}

#[derive(ValueEnum, Clone, Default, Debug)]
pub enum LogLevel {
    #[default]
    #[value(alias("0"))]
    Error,
    #[value(alias("1"))]
    Warn,
    #[value(alias("2"))]
    Info,
    #[value(alias("3"))]
    Debug,
    #[value(alias("4"))]
    Trace,
}

impl From<&LogLevel> for log::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}
