//! Lempel-Ziv-Welch dictionary size.
//!
//! Greedy parse used by the LZc index:
//!   word ← ∅
//!   for c in seq:
//!       wc ← word + c
//!       if wc ∈ dict:  word ← wc
//!       else:          dict ← dict ∪ {wc};  word ← c
//!   return |dict|
//!
//! Note the reset goes to the current symbol, not to the empty word, and the
//! single-symbol word is not itself inserted.  This is the variant the LZc
//! literature uses and is kept exactly.
use std::collections::HashSet;
use std::hash::Hash;

/// Number of distinct words discovered by the greedy LZW parse of `seq`.
///
/// Works over any symbol alphabet; for bit strings pass `s.as_bytes()`.
/// An empty sequence yields 0.
pub fn lzw_dictionary_size<T: Eq + Hash + Clone>(seq: &[T]) -> usize {
    let mut dict: HashSet<Vec<T>> = HashSet::new();
    let mut word: Vec<T> = Vec::new();
    for c in seq {
        word.push(c.clone());
        if !dict.contains(&word) {
            dict.insert(word.clone());
            word.clear();
            word.push(c.clone());
        }
    }
    dict.len()
}
