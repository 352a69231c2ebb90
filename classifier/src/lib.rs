use anyhow::{Context, Result};
use serde::Serialize;
use songsim_core::{
    CorpusBuilder, CorpusStats, CsvSource, DocId, Document, NormalizerKind, SongIndex, Tokenizer,
    DEFAULT_SENTINEL,
};
use std::path::Path;

/// Settings shared by every entry point.
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// Category value marking a record as unlabeled.
    pub sentinel: String,
    pub has_headers: bool,
    pub normalizer: NormalizerKind,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            has_headers: true,
            normalizer: NormalizerKind::default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub similarity: f64,
    pub title: String,
    pub artist: String,
    pub year: i32,
    pub category: String,
}

impl SearchHit {
    fn new(doc: &Document, similarity: f64) -> Self {
        Self {
            doc_id: doc.id(),
            similarity,
            title: doc.title().to_string(),
            artist: doc.artist().to_string(),
            year: doc.year(),
            category: doc.category().to_string(),
        }
    }
}

/// Read every record under `input` and build the tf-idf tables.
pub fn load_index(input: &Path, opts: &ClassifyOptions) -> Result<SongIndex<NormalizerKind>> {
    let source = CsvSource::open(input)?.has_headers(opts.has_headers);
    tracing::info!(files = source.files().len(), input = %input.display(), "loading corpus");
    let tokenizer = Tokenizer::new(opts.normalizer);
    let corpus = CorpusBuilder::new(tokenizer.clone())
        .with_sentinel(opts.sentinel.as_str())
        .build(source.records())
        .with_context(|| format!("building corpus from {}", input.display()))?;
    Ok(SongIndex::build(corpus, tokenizer))
}

/// Category label of the song closest to `query`.
pub fn classify(input: &Path, query: &str, opts: &ClassifyOptions) -> Result<String> {
    Ok(nearest(input, query, opts)?.category)
}

pub fn nearest(input: &Path, query: &str, opts: &ClassifyOptions) -> Result<SearchHit> {
    let index = load_index(input, opts)?;
    let (doc, n) = index.nearest(query).context("finding nearest neighbor")?;
    tracing::info!(doc_id = doc.id(), similarity = n.similarity, "nearest neighbor");
    Ok(SearchHit::new(doc, n.similarity))
}

pub fn search(input: &Path, query: &str, k: usize, opts: &ClassifyOptions) -> Result<Vec<SearchHit>> {
    let index = load_index(input, opts)?;
    let hits = index.search(query, k).context("ranking corpus")?;
    Ok(hits.into_iter().map(|(doc, n)| SearchHit::new(doc, n.similarity)).collect())
}

pub fn stats(input: &Path, opts: &ClassifyOptions) -> Result<CorpusStats> {
    Ok(load_index(input, opts)?.stats())
}
