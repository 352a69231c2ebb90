use std::collections::btree_map::{self, BTreeMap};

use crate::corpus::Corpus;
use crate::idf::IdfTable;
use crate::tf::compute_tf;
use crate::DocId;

/// Sparse token -> weight vector.
///
/// Tokens unknown to the idf table are stored with weight 0. Entries are kept
/// in token order so sums over a vector are reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TfIdfVector {
    weights: BTreeMap<String, f64>,
}

impl TfIdfVector {
    /// Weight of `token`, 0 when absent.
    pub fn get(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize { self.weights.len() }

    pub fn is_empty(&self) -> bool { self.weights.is_empty() }

    pub fn iter(&self) -> btree_map::Iter<'_, String, f64> {
        self.weights.iter()
    }

    /// Sum of squared weights.
    pub fn norm_squared(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum()
    }

    pub fn magnitude(&self) -> f64 {
        self.norm_squared().sqrt()
    }
}

impl FromIterator<(String, f64)> for TfIdfVector {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self { weights: iter.into_iter().collect() }
    }
}

/// Document id -> vector, iterated in ascending id order.
pub type CorpusTfIdf = BTreeMap<DocId, TfIdfVector>;

pub fn vectorize<S: AsRef<str>>(tokens: &[S], idf: &IdfTable) -> TfIdfVector {
    compute_tf(tokens)
        .into_iter()
        .map(|(token, count)| {
            let weight = idf.get(&token).map_or(0.0, |w| f64::from(count) * w);
            (token, weight)
        })
        .collect()
}

pub fn vectorize_corpus(corpus: &Corpus, idf: &IdfTable) -> CorpusTfIdf {
    corpus
        .documents()
        .iter()
        .map(|doc| (doc.id(), vectorize(doc.tokens(), idf)))
        .collect()
}
