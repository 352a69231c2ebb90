//! TF-IDF song similarity: corpus construction, weighting and nearest
//! neighbour search over an in-memory corpus.

pub mod corpus;
pub mod error;
pub mod idf;
pub mod index;
pub mod similarity;
pub mod source;
pub mod tf;
pub mod tfidf;
pub mod tokenizer;

pub type DocId = u32;

pub use corpus::{Corpus, CorpusBuilder, Document, Record, DEFAULT_SENTINEL};
pub use error::{DataSourceError, Error, Operand, Result};
pub use idf::{compute_idf, IdfTable};
pub use index::{CorpusStats, SongIndex};
pub use similarity::{cosine_similarity, nearest_neighbor, nearest_neighbor_to, rank, Neighbor};
pub use source::CsvSource;
pub use tf::{compute_tf, TfTable};
pub use tfidf::{vectorize, vectorize_corpus, CorpusTfIdf, TfIdfVector};
pub use tokenizer::{
    normalize, tokenize, AsciiNormalizer, Normalizer, NormalizerKind, Tokenizer, UnicodeNormalizer,
};
