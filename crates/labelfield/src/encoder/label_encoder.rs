//! # Label Encoder

use crate::encoder::{LabelEncoderOptions, LabelEncoding};
use crate::errors::{LFResult, LabelFieldError};
use crate::tokenizer::LabelTokenizer;
use crate::types::LabelIdType;
use crate::vocab::LabelVocab;

/// Featurizes raw label strings into vocabulary-id encodings.
///
/// The encoder composes a [`LabelTokenizer`] and a [`LabelVocab`]:
/// [`setup`](Self::setup) builds the vocabulary and occurrence counts
/// from example collections, and [`process`](Self::process) encodes a
/// single example against the vocabulary built so far.
///
/// Labels are closed-vocabulary: `process` fails on any label never
/// observed during setup, rather than mapping it to a fallback id.
///
/// Setup is the single logical write phase; interleaving `setup` and
/// `process` across threads on a shared instance requires external
/// synchronization. [`freeze`](Self::freeze) ends the write phase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelEncoder<T: LabelIdType> {
    options: LabelEncoderOptions,
    tokenizer: LabelTokenizer,
    vocab: LabelVocab<T>,
}

impl<T: LabelIdType> LabelEncoder<T> {
    /// Create an empty encoder from options.
    ///
    /// The tokenizer is configured with the options' multilabel
    /// separator; the vocabulary starts empty and unfrozen.
    pub fn new(options: LabelEncoderOptions) -> Self {
        let tokenizer = LabelTokenizer::new(options.multilabel_separator().map(str::to_owned));
        Self {
            options,
            tokenizer,
            vocab: LabelVocab::new(),
        }
    }

    /// Get the encoder options.
    pub fn options(&self) -> &LabelEncoderOptions {
        &self.options
    }

    /// Get the label vocabulary.
    pub fn vocab(&self) -> &LabelVocab<T> {
        &self.vocab
    }

    /// The number of labels in the vocabulary.
    pub fn vocab_len(&self) -> usize {
        self.vocab.len()
    }

    /// Freeze the vocabulary, ending the setup phase.
    pub fn freeze(&mut self) {
        self.vocab.freeze();
    }

    /// Build the vocabulary from one collection of raw examples.
    ///
    /// Each example is tokenized and every token observed: absent
    /// tokens get the next dense id and a count of 1, present tokens
    /// have their count incremented. Repeated calls are additive; ids
    /// continue from the current vocabulary size.
    ///
    /// ## Arguments
    /// * `data` - An ordered collection of raw example strings.
    ///
    /// ## Errors
    /// * [`LabelFieldError::VocabFrozen`] after [`freeze`](Self::freeze).
    /// * [`LabelFieldError::VocabSizeOverflow`] if the vocabulary
    ///   outgrows `T`. State committed before the failure is kept.
    pub fn setup<I>(
        &mut self,
        data: I,
    ) -> LFResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut examples = 0usize;
        for example in data {
            for token in self.tokenizer.tokenize(example.as_ref()) {
                self.vocab.observe(token)?;
            }
            examples += 1;
        }

        log::debug!(
            "label setup pass: {} examples, vocab size {}",
            examples,
            self.vocab.len()
        );

        Ok(())
    }

    /// Build the vocabulary from several optional collections.
    ///
    /// Absent collections are skipped without error; present ones are
    /// flattened in order into one logical [`setup`](Self::setup) pass.
    ///
    /// ## Arguments
    /// * `datasets` - Ordered collections of raw examples, each
    ///   possibly absent.
    pub fn setup_datasets<I, D>(
        &mut self,
        datasets: I,
    ) -> LFResult<()>
    where
        I: IntoIterator<Item = Option<D>>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        for dataset in datasets.into_iter().flatten() {
            self.setup(dataset)?;
        }
        Ok(())
    }

    /// Featurize a single raw example.
    ///
    /// Tokenizes the example and maps every token to its vocabulary id.
    /// With `one_hot` unset the id sequence is returned; with it set,
    /// the multi-hot expansion over the whole vocabulary. Pure; the
    /// vocabulary is not mutated.
    ///
    /// ## Arguments
    /// * `example` - The raw label string.
    ///
    /// ## Errors
    /// * [`LabelFieldError::UnknownLabel`] for any token absent from
    ///   the vocabulary.
    pub fn process(
        &self,
        example: &str,
    ) -> LFResult<LabelEncoding<T>> {
        if self.options.one_hot() {
            Ok(LabelEncoding::MultiHot(self.encode_multi_hot(example)?))
        } else {
            Ok(LabelEncoding::Ids(self.encode_ids(example)?))
        }
    }

    /// Encode an example as an ordered id sequence.
    ///
    /// ## Errors
    /// * [`LabelFieldError::UnknownLabel`] for any token absent from
    ///   the vocabulary.
    pub fn encode_ids(
        &self,
        example: &str,
    ) -> LFResult<Vec<T>> {
        self.tokenizer
            .tokenize(example)
            .map(|token| {
                self.vocab
                    .lookup(token)
                    .ok_or_else(|| LabelFieldError::UnknownLabel {
                        label: token.to_owned(),
                    })
            })
            .collect()
    }

    /// Encode an example as a multi-hot presence vector.
    ///
    /// The vector has length `|vocab|`; position `i` is 1 iff id `i`
    /// appears in the example's id sequence.
    ///
    /// ## Errors
    /// * [`LabelFieldError::UnknownLabel`] for any token absent from
    ///   the vocabulary.
    pub fn encode_multi_hot(
        &self,
        example: &str,
    ) -> LFResult<Vec<u8>> {
        let ids = self.encode_ids(example)?;

        let mut bits = vec![0u8; self.vocab.len()];
        for id in ids {
            // Lookup ids are always in-range for the vocab.
            bits[id.to_usize().unwrap()] = 1;
        }
        Ok(bits)
    }

    /// The raw occurrence count for each vocabulary id, in id order.
    pub fn label_count(&self) -> Vec<u64> {
        self.vocab.counts()
    }

    /// The observed frequency of each label, in id order.
    ///
    /// A categorical probability distribution over labels as observed
    /// during setup.
    pub fn label_freq(&self) -> Vec<f64> {
        self.vocab.frequencies()
    }

    /// The inverse frequency of each label, in id order.
    pub fn label_inv_freq(&self) -> Vec<f64> {
        self.vocab.inverse_frequencies()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_builds_first_seen_vocab() {
        type T = u32;

        let mut encoder = LabelEncoder::<T>::new(LabelEncoderOptions::default());
        encoder.setup(["cat", "dog", "cat"]).unwrap();

        assert_eq!(encoder.vocab_len(), 2);
        assert_eq!(encoder.vocab().lookup("cat"), Some(0));
        assert_eq!(encoder.vocab().lookup("dog"), Some(1));

        assert_eq!(encoder.label_count(), vec![2, 1]);
        assert_eq!(encoder.label_freq(), vec![2.0 / 3.0, 1.0 / 3.0]);
    }

    #[test]
    fn test_setup_is_additive_across_calls() {
        type T = u32;

        let mut encoder = LabelEncoder::<T>::new(LabelEncoderOptions::default());
        encoder.setup(["cat", "dog"]).unwrap();
        encoder.setup(["bird", "dog"]).unwrap();

        // Ids continue from the prior vocabulary size.
        assert_eq!(encoder.vocab().lookup("bird"), Some(2));
        assert_eq!(encoder.label_count(), vec![1, 2, 1]);
    }

    #[test]
    fn test_setup_datasets_skips_absent() {
        type T = u32;

        let mut encoder = LabelEncoder::<T>::new(LabelEncoderOptions::default());
        encoder
            .setup_datasets([
                Some(vec!["cat", "dog"]),
                None,
                Some(vec!["cat", "bird"]),
            ])
            .unwrap();

        assert_eq!(encoder.vocab_len(), 3);
        assert_eq!(encoder.label_count(), vec![2, 1, 1]);
    }

    #[test]
    fn test_process_ids() {
        type T = u32;

        let options = LabelEncoderOptions::default().with_multilabel_separator("|".to_string());
        let mut encoder = LabelEncoder::<T>::new(options);
        encoder.setup(["cat|dog", "bird"]).unwrap();

        let encoding = encoder.process("dog|cat").unwrap();
        assert_eq!(encoding, LabelEncoding::Ids(vec![1, 0]));
    }

    #[test]
    fn test_process_multi_hot() {
        type T = u32;

        let options = LabelEncoderOptions::default()
            .with_one_hot(true)
            .with_multilabel_separator("|".to_string());
        let mut encoder = LabelEncoder::<T>::new(options);
        encoder.setup(["cat|dog"]).unwrap();

        assert_eq!(encoder.label_count(), vec![1, 1]);

        let encoding = encoder.process("cat|dog").unwrap();
        assert_eq!(encoding, LabelEncoding::MultiHot(vec![1, 1]));

        let encoding = encoder.process("dog").unwrap();
        assert_eq!(encoding, LabelEncoding::MultiHot(vec![0, 1]));
    }

    #[test]
    fn test_unknown_label_fails() {
        type T = u32;

        let mut encoder = LabelEncoder::<T>::new(LabelEncoderOptions::default());
        encoder.setup(["cat"]).unwrap();

        let err = encoder.process("dog").unwrap_err();
        assert!(matches!(
            err,
            LabelFieldError::UnknownLabel { label } if label == "dog"
        ));
    }

    #[test]
    fn test_frozen_encoder_rejects_setup() {
        type T = u32;

        let mut encoder = LabelEncoder::<T>::new(LabelEncoderOptions::default());
        encoder.setup(["cat"]).unwrap();
        encoder.freeze();

        assert!(matches!(
            encoder.setup(["dog"]),
            Err(LabelFieldError::VocabFrozen)
        ));

        // Encoding still works after freeze.
        assert_eq!(encoder.encode_ids("cat").unwrap(), vec![0]);
    }
}
