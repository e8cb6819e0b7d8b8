use std::fmt::{Display, Formatter, Result};
use std::io;
use std::path::PathBuf;

use TranslateError::*;

/// A fatal condition. Every variant aborts the run; there is no retry.
///
/// Unknown tokens and unrecognized mode flags are deliberately *not*
/// represented here: both fall through to default behavior.
#[derive(Debug)]
pub enum TranslateError {
    InputOpen { path: PathBuf, source: io::Error },
    InputRead { path: PathBuf, source: io::Error },
    OutputOpen { path: PathBuf, source: io::Error },
    OutputWrite { path: PathBuf, source: io::Error },
}

impl Display for TranslateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            InputOpen { path, source } => {
                write!(f, "cannot open input file {}: {}", path.display(), source)
            }
            InputRead { path, source } => {
                write!(f, "cannot read input file {}: {}", path.display(), source)
            }
            OutputOpen { path, source } => {
                write!(f, "cannot create output file {}: {}", path.display(), source)
            }
            OutputWrite { path, source } => {
                write!(f, "cannot write output file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputOpen { source, .. }
            | InputRead { source, .. }
            | OutputOpen { source, .. }
            | OutputWrite { source, .. } => Some(source),
        }
    }
}
