use serde::Serialize;
use tracing::{debug, info};

use crate::error::{DataSourceError, Result};
use crate::tokenizer::{AsciiNormalizer, Normalizer, Tokenizer};
use crate::DocId;

/// Category value the song datasets use for unlabeled rows.
pub const DEFAULT_SENTINEL: &str = "Not Available";

/// One row as produced by a record source, before tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub title: String,
    pub year: i32,
    pub artist: String,
    pub category: String,
    pub lyrics: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    id: DocId,
    title: String,
    year: i32,
    artist: String,
    category: String,
    #[serde(skip)]
    tokens: Vec<String>,
}

impl Document {
    pub fn id(&self) -> DocId { self.id }
    pub fn title(&self) -> &str { &self.title }
    pub fn year(&self) -> i32 { self.year }
    pub fn artist(&self) -> &str { &self.artist }
    pub fn category(&self) -> &str { &self.category }
    pub fn tokens(&self) -> &[String] { &self.tokens }
}

/// Documents in identifier order; `documents()[i].id() == i`.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    skipped: usize,
}

impl Corpus {
    /// Unlabeled documents straight from token sequences, for unit tests.
    #[cfg(test)]
    pub(crate) fn from_tokens<I, T>(docs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        let documents = docs
            .into_iter()
            .enumerate()
            .map(|(i, tokens)| Document {
                id: DocId::try_from(i).expect("test corpus fits in DocId"),
                title: String::new(),
                year: 0,
                artist: String::new(),
                category: String::new(),
                tokens: tokens.into_iter().map(Into::into).collect(),
            })
            .collect();
        Self { documents, skipped: 0 }
    }

    pub fn documents(&self) -> &[Document] { &self.documents }

    pub fn get(&self, id: DocId) -> Option<&Document> {
        self.documents.get(id as usize)
    }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    /// Records dropped because of a sentinel category.
    pub fn skipped(&self) -> usize { self.skipped }
}

#[derive(Debug, Clone)]
pub struct CorpusBuilder<N = AsciiNormalizer> {
    tokenizer: Tokenizer<N>,
    sentinel: String,
}

impl Default for CorpusBuilder<AsciiNormalizer> {
    fn default() -> Self {
        Self::new(Tokenizer::default())
    }
}

impl<N: Normalizer> CorpusBuilder<N> {
    pub fn new(tokenizer: Tokenizer<N>) -> Self {
        Self { tokenizer, sentinel: DEFAULT_SENTINEL.to_string() }
    }

    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    pub fn tokenizer(&self) -> &Tokenizer<N> { &self.tokenizer }

    fn is_unlabeled(&self, category: &str) -> bool {
        category == self.sentinel || category.trim().is_empty()
    }

    /// Tokenize and append `record`, or return false if it is unlabeled.
    fn accept(
        &self,
        documents: &mut Vec<Document>,
        record: Record,
    ) -> std::result::Result<bool, DataSourceError> {
        if self.is_unlabeled(&record.category) {
            debug!(title = %record.title, "skipping record without category");
            return Ok(false);
        }
        let id = next_id(documents.len())?;
        let tokens = self.tokenizer.tokenize(&record.lyrics);
        documents.push(Document {
            id,
            title: record.title,
            year: record.year,
            artist: record.artist,
            category: record.category,
            tokens,
        });
        Ok(true)
    }

    /// Consume a record stream into a corpus.
    ///
    /// Identifiers count accepted records only. The first source error aborts
    /// the build.
    pub fn build<I>(&self, records: I) -> Result<Corpus>
    where
        I: IntoIterator<Item = std::result::Result<Record, DataSourceError>>,
    {
        let mut documents = Vec::new();
        let mut skipped = 0usize;
        for record in records {
            if !self.accept(&mut documents, record?)? {
                skipped += 1;
            }
        }
        info!(num_docs = documents.len(), skipped, "built corpus");
        Ok(Corpus { documents, skipped })
    }

    /// Same as [`build`](Self::build) for records already in memory.
    pub fn build_from<I>(&self, records: I) -> Result<Corpus>
    where
        I: IntoIterator<Item = Record>,
    {
        self.build(records.into_iter().map(Ok))
    }
}

/// Identifier for the document stored at position `len`.
fn next_id(len: usize) -> std::result::Result<DocId, DataSourceError> {
    DocId::try_from(len).map_err(|_| DataSourceError::TooManyRecords {
        limit: u64::from(DocId::MAX) + 1,
    })
}
