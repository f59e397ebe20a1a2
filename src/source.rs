//! Input source and output sink resolution.
//!
//! Input comes from a named file or standard input. When no file is named
//! and stdin is an interactive terminal there is nothing to read, and the
//! caller prints help instead of blocking.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SourceError;

/// Terminal capability query, injectable for tests.
pub trait TtyProbe {
    fn stdin_is_tty(&self) -> bool;
}

/// Queries the real process streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTty;

impl TtyProbe for SystemTty {
    fn stdin_is_tty(&self) -> bool {
        atty::is(atty::Stream::Stdin)
    }
}

/// Where the HTML comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    /// No file given and stdin is a terminal.
    Terminal,
}

impl InputSource {
    /// Pick the source: a named file wins, then piped stdin.
    pub fn resolve(path: Option<&Path>, tty: &impl TtyProbe) -> Self {
        match path {
            Some(path) => InputSource::File(path.to_path_buf()),
            None if tty.stdin_is_tty() => InputSource::Terminal,
            None => InputSource::Stdin,
        }
    }

    /// Read the whole input. Invalid UTF-8 is replaced rather than rejected.
    pub fn read_from<R: Read>(&self, mut stdin: R) -> Result<String, SourceError> {
        let bytes = match self {
            InputSource::File(path) => fs::read(path).map_err(|source| SourceError::ReadFile {
                path: path.clone(),
                source,
            })?,
            InputSource::Stdin => {
                let mut bytes = Vec::new();
                stdin
                    .read_to_end(&mut bytes)
                    .map_err(SourceError::ReadStdin)?;
                bytes
            }
            InputSource::Terminal => return Err(SourceError::Interactive),
        };
        debug!(source = ?self, bytes = bytes.len(), "read input");
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Where the result goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    File(PathBuf),
    Stdout,
}

impl OutputSink {
    pub fn resolve(path: Option<&Path>) -> Self {
        match path {
            Some(path) => OutputSink::File(path.to_path_buf()),
            None => OutputSink::Stdout,
        }
    }

    /// Write the result. Files are replaced atomically, so a failed run
    /// never leaves partial output behind.
    pub fn write_to<W: Write>(&self, content: &str, mut stdout: W) -> Result<(), SourceError> {
        let written = match self {
            OutputSink::File(path) => {
                atomic_write(path, content).map_err(|source| SourceError::WriteFile {
                    path: path.clone(),
                    source,
                })
            }
            OutputSink::Stdout => stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(SourceError::WriteStdout),
        };
        written?;
        debug!(sink = ?self, bytes = content.len(), "wrote output");
        Ok(())
    }
}

/// Write to a temporary sibling file, then rename over the target.
fn atomic_write(path: &Path, content: &str) -> std::io::Result<()> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let temp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("output")
    ));

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path).map_err(|err| {
        let _ = fs::remove_file(&temp_path);
        err
    })
}
