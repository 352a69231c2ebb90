use serde::Serialize;
use tracing::info;

use crate::corpus::{Corpus, Document};
use crate::error::Result;
use crate::idf::{compute_idf, IdfTable};
use crate::similarity::{nearest_neighbor_to, rank, Neighbor};
use crate::tfidf::{vectorize, vectorize_corpus, CorpusTfIdf, TfIdfVector};
use crate::tokenizer::{AsciiNormalizer, Normalizer, Tokenizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub num_docs: usize,
    pub skipped: usize,
    pub vocabulary: usize,
    pub total_tokens: usize,
}

/// Corpus plus its idf and tf-idf tables, computed once.
///
/// Queries are tokenized with the same tokenizer the corpus was built with.
#[derive(Debug, Clone)]
pub struct SongIndex<N = AsciiNormalizer> {
    corpus: Corpus,
    idf: IdfTable,
    vectors: CorpusTfIdf,
    tokenizer: Tokenizer<N>,
}

impl<N: Normalizer> SongIndex<N> {
    pub fn build(corpus: Corpus, tokenizer: Tokenizer<N>) -> Self {
        let idf = compute_idf(&corpus);
        let vectors = vectorize_corpus(&corpus, &idf);
        info!(num_docs = corpus.len(), vocabulary = idf.len(), "built tf-idf table");
        Self { corpus, idf, vectors, tokenizer }
    }

    pub fn corpus(&self) -> &Corpus { &self.corpus }
    pub fn idf(&self) -> &IdfTable { &self.idf }
    pub fn vectors(&self) -> &CorpusTfIdf { &self.vectors }

    pub fn vectorize_query(&self, text: &str) -> TfIdfVector {
        vectorize(&self.tokenizer.tokenize(text), &self.idf)
    }

    pub fn nearest(&self, text: &str) -> Result<(&Document, Neighbor)> {
        let query = self.vectorize_query(text);
        nearest_neighbor_to(&query, &self.corpus, &self.vectors)
    }

    /// Top `k` matches paired with their documents.
    pub fn search(&self, text: &str, k: usize) -> Result<Vec<(&Document, Neighbor)>> {
        let query = self.vectorize_query(text);
        let ranked = rank(&query, &self.corpus, &self.vectors, k)?;
        Ok(ranked
            .into_iter()
            .filter_map(|n| self.corpus.get(n.doc_id).map(|doc| (doc, n)))
            .collect())
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            num_docs: self.corpus.len(),
            skipped: self.corpus.skipped(),
            vocabulary: self.idf.len(),
            total_tokens: self.corpus.documents().iter().map(|d| d.tokens().len()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{CorpusBuilder, Record};
    use crate::tokenizer::UnicodeNormalizer;

    fn song(title: &str, genre: &str, lyrics: &str) -> Record {
        Record {
            title: title.into(),
            year: 1999,
            artist: "artist".into(),
            category: genre.into(),
            lyrics: lyrics.into(),
        }
    }

    #[test]
    fn search_and_stats() {
        let corpus = CorpusBuilder::default().build_from(vec![
            song("one", "Rock", "loud guitar loud drums"),
            song("two", "Not Available", "quiet"),
            song("three", "Jazz", "smooth saxophone and drums"),
        ])
        .unwrap();
        let index = SongIndex::build(corpus, Tokenizer::default());

        let (doc, n) = index.nearest("saxophone solo").unwrap();
        assert_eq!(doc.category(), "Jazz");
        assert!(n.similarity > 0.0);

        let hits = index.search("loud drums", 5).unwrap();
        assert_eq!(hits[0].0.title(), "one");
        assert_eq!(hits.len(), 2);

        let stats = index.stats();
        assert_eq!(stats.num_docs, 2);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.total_tokens, 8);
        assert_eq!(stats.vocabulary, 6);
    }

    #[test]
    fn queries_use_the_corpus_tokenizer() {
        let tokenizer = Tokenizer::new(UnicodeNormalizer);
        let corpus = CorpusBuilder::new(tokenizer.clone()).build_from(vec![
            song("a", "Chanson", "café crème"),
            song("b", "Schlager", "straße"),
        ])
        .unwrap();
        let index = SongIndex::build(corpus, tokenizer);
        let (doc, _) = index.nearest("Café!").unwrap();
        assert_eq!(doc.title(), "a");
    }
}
