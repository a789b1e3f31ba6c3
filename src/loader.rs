//! Hand files.
//!
//! One card per line. Reading stops at end of file or at the first blank
//! line, whichever comes first.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::{CardError, CardList};

/// Failures before a game can start.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("{0}")]
    Usage(String),
    #[error("Could not open file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {source}")]
    InvalidCard {
        line: usize,
        #[source]
        source: CardError,
    },
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),
}

/// Read a hand from any buffered reader.
pub fn read_hand(reader: impl BufRead) -> Result<CardList, SetupError> {
    let mut list = CardList::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        list.append(&line).map_err(|source| SetupError::InvalidCard {
            line: index + 1,
            source,
        })?;
    }

    Ok(list)
}

/// Read a hand from a file.
pub fn load_hand(path: impl AsRef<Path>) -> Result<CardList, SetupError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SetupError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let list = read_hand(BufReader::new(file))?;
    debug!(path = %path.display(), cards = list.size(), "hand loaded");
    Ok(list)
}
