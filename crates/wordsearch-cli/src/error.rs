use std::{io, path::PathBuf};

/// Failures that abort a `wordsearch` run.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CliError {
    #[display("failed to read {}: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },
    #[display("invalid puzzle definitions in {}: {source}", path.display())]
    ParseInput {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[display("failed to write output: {_0}")]
    Write(#[from] io::Error),
    #[display("failed to encode puzzles: {_0}")]
    Encode(#[from] serde_json::Error),
    #[display("no words given; pass --word or a puzzle definitions file")]
    NoInput,
    #[display("no puzzle could be generated")]
    NothingGenerated,
}
