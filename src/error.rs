//! Error types for document processing and I/O.

use std::path::PathBuf;

/// Errors from turning a parsed tree back into text.
///
/// Parsing itself cannot fail on in-memory input.
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Failed to serialize document")]
    Serialize(#[from] std::io::Error),

    #[error("Serialized document is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Errors reading the input source or writing the output sink.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read input file '{}'", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read standard input")]
    ReadStdin(#[source] std::io::Error),

    #[error("Standard input is an interactive terminal")]
    Interactive,

    #[error("Failed to write output file '{}'", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write standard output")]
    WriteStdout(#[source] std::io::Error),
}
