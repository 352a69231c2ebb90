use std::collections::BTreeMap;

/// Raw occurrence count per token within one sequence.
pub type TfTable = BTreeMap<String, u32>;

/// Count how often each token occurs. No length normalization.
pub fn compute_tf<S: AsRef<str>>(tokens: &[S]) -> TfTable {
    let mut tf = TfTable::new();
    for token in tokens {
        *tf.entry(token.as_ref().to_owned()).or_default() += 1;
    }
    tf
}
