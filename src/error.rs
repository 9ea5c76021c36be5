//! Host-level errors — the (c) category from `spec.md` §7: file I/O
//! and "the program had parse errors", the two ways the CLI can fail
//! before the evaluator ever runs. Modeled after the teacher's
//! `loader::loaderror::FileLoadError`: a plain struct with a
//! hand-written `Display`, no `thiserror`/`anyhow` in the dependency
//! tree because the error surface here is small enough that a derive
//! macro wouldn't buy anything.

use crate::parser::ParseError;
use std::fmt::{self, Display};
use std::path::PathBuf;

#[derive(Debug)]
pub enum WispError {
    FileRead { path: PathBuf, source: std::io::Error },
    Parse(Vec<ParseError>),
}

impl Display for WispError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WispError::FileRead { path, source } => {
                write!(f, "could not read {}: {source}", path.display())
            }
            WispError::Parse(errors) => {
                write!(f, "{} parse error(s)", errors.len())
            }
        }
    }
}

impl std::error::Error for WispError {}
