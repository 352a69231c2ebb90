use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref ASCII_STRIP: Regex = Regex::new(r"[^a-z0-9_]").expect("valid regex");
    static ref UNICODE_STRIP: Regex = Regex::new(r"[^\w]").expect("valid regex");
}

/// Turns a single raw word into a token.
///
/// Implementations may return an empty string; empty tokens are kept in
/// token sequences and counted like any other word.
pub trait Normalizer {
    fn normalize(&self, word: &str) -> String;
}

/// Lowercase, trim, then drop everything outside `[a-z0-9_]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiNormalizer;

impl Normalizer for AsciiNormalizer {
    fn normalize(&self, word: &str) -> String {
        let lowered = word.trim().to_lowercase();
        ASCII_STRIP.replace_all(&lowered, "").into_owned()
    }
}

/// NFKC, lowercase, trim, then keep Unicode word characters only.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeNormalizer;

impl Normalizer for UnicodeNormalizer {
    fn normalize(&self, word: &str) -> String {
        let lowered = word.trim().nfkc().collect::<String>().to_lowercase();
        UNICODE_STRIP.replace_all(&lowered, "").into_owned()
    }
}

/// Normalizer picked at runtime, e.g. from a command line flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NormalizerKind {
    #[default]
    Ascii,
    Unicode,
}

impl Normalizer for NormalizerKind {
    fn normalize(&self, word: &str) -> String {
        match self {
            Self::Ascii => AsciiNormalizer.normalize(word),
            Self::Unicode => UnicodeNormalizer.normalize(word),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tokenizer<N = AsciiNormalizer> {
    normalizer: N,
}

impl Default for Tokenizer<AsciiNormalizer> {
    fn default() -> Self {
        Self::new(AsciiNormalizer)
    }
}

impl<N: Normalizer> Tokenizer<N> {
    pub fn new(normalizer: N) -> Self {
        Self { normalizer }
    }

    pub fn normalize(&self, word: &str) -> String {
        self.normalizer.normalize(word)
    }

    /// Split on single spaces (newlines count as spaces) and normalize each piece.
    ///
    /// Runs of spaces produce empty tokens; order and duplicates are preserved.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.replace('\n', " ")
            .split(' ')
            .map(|piece| self.normalizer.normalize(piece))
            .collect()
    }
}

/// Normalize one word with the default ASCII rules.
pub fn normalize(word: &str) -> String {
    AsciiNormalizer.normalize(word)
}

/// Tokenize text with the default ASCII rules.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}
