//! Error types for corpus construction and similarity queries.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::DocId;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures while reading records from an external source.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// The input path could not be opened or walked.
    #[error("cannot open record source {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A CSV row could not be read or does not have the expected shape.
    #[error("malformed record in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    /// More accepted records than document identifiers.
    #[error("record source holds more than {limit} labeled records")]
    TooManyRecords { limit: u64 },

    /// A directory was given but holds no CSV files.
    #[error("no csv files found under {path}")]
    NoInput { path: PathBuf },
}

/// Which side of a comparison was degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Left,
    Right,
    Query,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Query => "query",
        })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    /// Nearest neighbour requested against zero documents.
    #[error("nearest neighbor requested against an empty corpus")]
    EmptyCorpus,

    /// One of the compared vectors has zero magnitude.
    #[error("cosine similarity is undefined: {operand} vector has zero magnitude")]
    UndefinedSimilarity { operand: Operand },

    /// Every candidate in the corpus was disqualified.
    #[error("query could not be compared with any of the {candidates} documents")]
    NoComparableDocument { candidates: usize },

    /// The tf-idf table was built from a different corpus.
    #[error("no tf-idf vector for document {doc_id}")]
    MissingVector { doc_id: DocId },
}
