//! # Label Tokenization

mod label_tokenizer;

#[doc(inline)]
pub use label_tokenizer::*;
