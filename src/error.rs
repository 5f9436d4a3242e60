// src/error.rs

use std::{
    io::{self, Write},
    path::PathBuf,
};
use thiserror::Error;

/// Failure to turn a file on disk into a [`crate::Table`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// File missing or unreadable.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exists but is not valid Parquet.
    #[error("{} is not a readable Parquet file: {source}", .path.display())]
    Parquet {
        path: PathBuf,
        #[source]
        source: parquet::errors::ParquetError,
    },

    /// Record batches could not be decoded or stitched together.
    #[error("failed to decode record batches from {}: {source}", .path.display())]
    Arrow {
        path: PathBuf,
        #[source]
        source: arrow::error::ArrowError,
    },
}

impl LoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Parquet { path, .. }
            | LoadError::Arrow { path, .. } => path,
        }
    }

    /// Remediation hint printed next to the error by the inspection programs.
    pub fn hint(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => {
                "hint: download species.parquet / comnames.parquet into the working directory, or pass the path explicitly"
            }
            LoadError::Parquet { .. } | LoadError::Arrow { .. } => {
                "hint: the file must be a Parquet export of the FishBase tables; re-download it if it was truncated"
            }
        }
    }
}

/// Write a failed run the way the inspection programs report it: the error chain,
/// then a remediation hint when the root cause is a [`LoadError`].
pub fn write_diagnostic<W: Write>(out: &mut W, err: &anyhow::Error) -> io::Result<()> {
    tracing::error!("{:#}", err);
    writeln!(out, "error: {:#}", err)?;
    if let Some(load) = err.downcast_ref::<LoadError>() {
        writeln!(out, "{}", load.hint())?;
    }
    Ok(())
}

/// [`write_diagnostic`] to stdout.
pub fn print_diagnostic(err: &anyhow::Error) {
    // nothing left to report to if stdout itself is gone
    let _ = write_diagnostic(&mut io::stdout().lock(), err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn missing() -> LoadError {
        LoadError::Io {
            path: PathBuf::from("species.parquet"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }
    }

    #[test]
    fn test_message_names_path() {
        let msg = missing().to_string();
        assert!(msg.contains("species.parquet"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_downcast_through_context() {
        let err = Err::<(), _>(missing())
            .context("checking species")
            .unwrap_err();
        let load = err.downcast_ref::<LoadError>().expect("LoadError survives context");
        assert!(load.hint().starts_with("hint:"));
    }

    #[test]
    fn test_diagnostic_carries_hint() -> anyhow::Result<()> {
        let err = Err::<(), _>(missing())
            .context("checking species")
            .unwrap_err();
        let mut out = Vec::new();
        write_diagnostic(&mut out, &err)?;
        let text = String::from_utf8(out)?;
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("error: checking species: cannot read species.parquet"));
        assert!(lines[1].starts_with("hint: download"));

        let mut out = Vec::new();
        write_diagnostic(&mut out, &anyhow::anyhow!("bad config"))?;
        assert_eq!(String::from_utf8(out)?, "error: bad config\n");
        Ok(())
    }
}
