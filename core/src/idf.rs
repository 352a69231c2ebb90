use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::info;

use crate::corpus::Corpus;
use crate::DocId;

/// Inverse document frequency per token, `ln(n / df)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    weights: BTreeMap<String, f64>,
    df: BTreeMap<String, u32>,
    num_docs: usize,
}

impl IdfTable {
    pub fn get(&self, token: &str) -> Option<f64> {
        self.weights.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.weights.contains_key(token)
    }

    /// Number of documents containing `token` at least once.
    pub fn doc_freq(&self, token: &str) -> Option<u32> {
        self.df.get(token).copied()
    }

    /// Corpus size the table was computed from.
    pub fn num_docs(&self) -> usize { self.num_docs }

    pub fn len(&self) -> usize { self.weights.len() }

    pub fn is_empty(&self) -> bool { self.weights.is_empty() }

    /// Tokens with their weights, in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(t, w)| (t.as_str(), *w))
    }
}

pub fn compute_idf(corpus: &Corpus) -> IdfTable {
    // token -> documents containing it
    let mut containing: HashMap<&str, BTreeSet<DocId>> = HashMap::new();
    for doc in corpus.documents() {
        for token in doc.tokens() {
            containing.entry(token.as_str()).or_default().insert(doc.id());
        }
    }

    let n = corpus.len() as f64;
    let mut weights = BTreeMap::new();
    let mut df = BTreeMap::new();
    for (token, docs) in containing {
        let count = docs.len() as u32;
        weights.insert(token.to_owned(), (n / f64::from(count)).ln());
        df.insert(token.to_owned(), count);
    }
    info!(num_docs = corpus.len(), vocabulary = weights.len(), "computed idf");
    IdfTable { weights, df, num_docs: corpus.len() }
}
