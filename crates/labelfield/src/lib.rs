//! # `labelfield` Label Featurization Library
//!
//! Converts raw textual labels into integer-id sequences or one-hot
//! (multi-hot) vectors for model consumption, and tracks label
//! frequency statistics for tasks like class balancing.
//!
//! See:
//! * [`encoder`] to build vocabularies from example collections and
//!   encode labels.
//! * [`vocab`] for the bidirectional label table and its statistics.
//! * [`tokenizer`] for separator-based multilabel splitting.
//!
//! Labels are closed-vocabulary: encoding a label never observed
//! during setup is an error, not a fallback id.
//!
//! ## Example
//!
//! ```rust
//! use labelfield::encoder::{LabelEncoder, LabelEncoderOptions, LabelEncoding};
//!
//! type T = u32;
//!
//! let options = LabelEncoderOptions::default()
//!     .with_multilabel_separator("|".to_string());
//!
//! let mut encoder: LabelEncoder<T> = options.build();
//! encoder.setup(["cat|dog", "cat"]).unwrap();
//! encoder.freeze();
//!
//! assert_eq!(encoder.encode_ids("dog|cat").unwrap(), vec![1, 0]);
//! assert_eq!(encoder.encode_multi_hot("dog").unwrap(), vec![0, 1]);
//! assert_eq!(encoder.label_count(), vec![2, 1]);
//! ```
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which
//! is a performance win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::LFHash{*}`` type alias machinery.
#![warn(missing_docs, unused)]

pub mod encoder;
pub mod errors;
pub mod tokenizer;
pub mod types;
pub mod vocab;
