//! CSV record source.
//!
//! Rows are `index, title, year, artist, category, lyrics`. The leading index
//! column is ignored; identifiers are assigned by the corpus builder.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::de::IgnoredAny;
use serde::Deserialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::corpus::Record;
use crate::error::DataSourceError;

#[derive(Debug, Deserialize)]
struct Row(IgnoredAny, String, i32, String, String, String);

impl From<Row> for Record {
    fn from(row: Row) -> Self {
        let Row(_, title, year, artist, category, lyrics) = row;
        Self { title, year, artist, category, lyrics }
    }
}

/// One CSV file, or every `*.csv` file below a directory in path order.
#[derive(Debug, Clone)]
pub struct CsvSource {
    files: Vec<PathBuf>,
    has_headers: bool,
}

impl CsvSource {
    pub fn open<P: AsRef<Path>>(input: P) -> Result<Self, DataSourceError> {
        let input = input.as_ref();
        let meta = std::fs::metadata(input)
            .map_err(|source| DataSourceError::Open { path: input.to_path_buf(), source })?;

        let mut files = Vec::new();
        if meta.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name() {
                let entry = entry.map_err(|e| DataSourceError::Open {
                    path: e.path().unwrap_or(input).to_path_buf(),
                    source: e.into(),
                })?;
                let p = entry.path();
                if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("csv") {
                    files.push(p.to_path_buf());
                }
            }
            if files.is_empty() {
                return Err(DataSourceError::NoInput { path: input.to_path_buf() });
            }
        } else {
            files.push(input.to_path_buf());
        }
        Ok(Self { files, has_headers: true })
    }

    /// Whether the first row of every file is a header (default: true).
    pub fn has_headers(mut self, yes: bool) -> Self {
        self.has_headers = yes;
        self
    }

    pub fn files(&self) -> &[PathBuf] { &self.files }

    pub fn records(&self) -> Records<'_> {
        Records { source: self, next_file: 0, current: None }
    }
}

/// Streaming iterator over every row of a [`CsvSource`].
pub struct Records<'a> {
    source: &'a CsvSource,
    next_file: usize,
    current: Option<(PathBuf, csv::DeserializeRecordsIntoIter<File, Row>)>,
}

impl Iterator for Records<'_> {
    type Item = Result<Record, DataSourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((path, rows)) = self.current.as_mut() {
                match rows.next() {
                    Some(Ok(row)) => return Some(Ok(row.into())),
                    Some(Err(source)) => {
                        return Some(Err(DataSourceError::Csv { path: path.clone(), source }))
                    }
                    None => self.current = None,
                }
            }

            let path = self.source.files.get(self.next_file)?.clone();
            self.next_file += 1;
            debug!(path = %path.display(), "reading records");
            match csv::ReaderBuilder::new()
                .has_headers(self.source.has_headers)
                .from_path(&path)
            {
                Ok(reader) => self.current = Some((path, reader.into_deserialize())),
                Err(source) => return Some(Err(DataSourceError::Csv { path, source })),
            }
        }
    }
}
