//! # Label Vocabulary
//!
//! Insertion-ordered bidirectional ``{ String <-> T }`` label tables,
//! with lock-step occurrence counts and derived frequency statistics.

mod label_vocab;

#[doc(inline)]
pub use label_vocab::*;
