use serde::Serialize;
use tracing::debug;

use crate::corpus::{Corpus, Document};
use crate::error::{Error, Operand, Result};
use crate::idf::IdfTable;
use crate::tfidf::{vectorize, CorpusTfIdf, TfIdfVector};
use crate::tokenizer::tokenize;
use crate::DocId;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    pub doc_id: DocId,
    pub similarity: f64,
}

/// Cosine of the angle between two tf-idf vectors.
///
/// Fails with [`Error::UndefinedSimilarity`] when either vector has zero
/// magnitude (empty, or all weights zero).
pub fn cosine_similarity(a: &TfIdfVector, b: &TfIdfVector) -> Result<f64> {
    let norm_a = a.norm_squared();
    if norm_a == 0.0 {
        return Err(Error::UndefinedSimilarity { operand: Operand::Left });
    }
    let norm_b = b.norm_squared();
    if norm_b == 0.0 {
        return Err(Error::UndefinedSimilarity { operand: Operand::Right });
    }
    let dot: f64 = a.iter().map(|(token, w)| w * b.get(token)).sum();
    // |a| * |b| == sqrt(|a|^2 * |b|^2); a single sqrt keeps sim(v, v) at exactly 1
    Ok(dot / (norm_a * norm_b).sqrt())
}

/// Similarity of `doc` to `query`, or `None` if the document is disqualified.
fn score(doc: &Document, query: &TfIdfVector, table: &CorpusTfIdf) -> Result<Option<f64>> {
    let vector = table
        .get(&doc.id())
        .ok_or(Error::MissingVector { doc_id: doc.id() })?;
    match cosine_similarity(vector, query) {
        Ok(sim) => Ok(Some(sim)),
        Err(Error::UndefinedSimilarity { .. }) => {
            debug!(doc_id = doc.id(), "document vector has zero magnitude, skipping");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn check_query(query: &TfIdfVector, corpus: &Corpus) -> Result<()> {
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }
    if query.norm_squared() == 0.0 {
        return Err(Error::UndefinedSimilarity { operand: Operand::Query });
    }
    Ok(())
}

/// Scan the corpus in id order and keep the first strict maximum.
///
/// Starts from "no candidate", so a document scoring exactly 0 still wins
/// when nothing beats it.
pub fn nearest_neighbor_to<'c>(
    query: &TfIdfVector,
    corpus: &'c Corpus,
    table: &CorpusTfIdf,
) -> Result<(&'c Document, Neighbor)> {
    check_query(query, corpus)?;
    let mut best: Option<(&Document, Neighbor)> = None;
    for doc in corpus.documents() {
        let Some(similarity) = score(doc, query, table)? else { continue };
        if best.map_or(true, |(_, b)| similarity > b.similarity) {
            best = Some((doc, Neighbor { doc_id: doc.id(), similarity }));
        }
    }
    best.ok_or(Error::NoComparableDocument { candidates: corpus.len() })
}

/// Tokenize and vectorize `query_text`, then return the closest document.
pub fn nearest_neighbor<'c>(
    query_text: &str,
    corpus: &'c Corpus,
    table: &CorpusTfIdf,
    idf: &IdfTable,
) -> Result<&'c Document> {
    let query = vectorize(&tokenize(query_text), idf);
    nearest_neighbor_to(&query, corpus, table).map(|(doc, _)| doc)
}

/// The `k` most similar comparable documents, best first, ties by ascending id.
pub fn rank(
    query: &TfIdfVector,
    corpus: &Corpus,
    table: &CorpusTfIdf,
    k: usize,
) -> Result<Vec<Neighbor>> {
    check_query(query, corpus)?;
    let mut scored = Vec::with_capacity(corpus.len());
    for doc in corpus.documents() {
        if let Some(similarity) = score(doc, query, table)? {
            scored.push(Neighbor { doc_id: doc.id(), similarity });
        }
    }
    // stable: equal scores keep id order
    scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    scored.truncate(k);
    Ok(scored)
}
