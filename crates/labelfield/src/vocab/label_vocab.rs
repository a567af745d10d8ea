//! # Bidirectional ``{ String <-> T }`` Label Vocabulary

use crate::errors::{LFResult, LabelFieldError};
use crate::types::{LFHashMap, LabelIdType};

/// Label vocabulary as an explicit bidirectional table.
///
/// Ids are dense array indexes in first-seen order: `label_to_id` maps a
/// label to its id, and `id_to_label[id]` recovers the label. The table
/// grows monotonically during the observation phase; ids are never
/// reassigned and entries are never removed.
///
/// Every vocabulary entry carries an occurrence count (same key set,
/// strictly positive), maintained by [`observe`](Self::observe).
///
/// [`freeze`](Self::freeze) is a one-way transition ending the write
/// phase; a frozen vocabulary rejects further observation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelVocab<T: LabelIdType> {
    label_to_id: LFHashMap<String, T>,
    id_to_label: Vec<String>,
    counts: Vec<u64>,
    frozen: bool,
}

impl<T: LabelIdType> LabelVocab<T> {
    /// Create an empty, unfrozen vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of labels in the vocabulary.
    pub fn len(&self) -> usize {
        self.id_to_label.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.id_to_label.is_empty()
    }

    /// Has [`freeze`](Self::freeze) been called?
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// End the observation phase.
    ///
    /// After this, [`observe`](Self::observe) fails with
    /// [`LabelFieldError::VocabFrozen`]. There is no thaw.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Record one occurrence of a label.
    ///
    /// Absent labels are assigned the next dense id and a count of 1;
    /// present labels have their count incremented.
    ///
    /// ## Arguments
    /// * `label` - The label token, taken verbatim.
    ///
    /// ## Returns
    /// The id of the label.
    ///
    /// ## Errors
    /// * [`LabelFieldError::VocabFrozen`] after [`freeze`](Self::freeze).
    /// * [`LabelFieldError::VocabSizeOverflow`] if the next id does not
    ///   fit in `T`.
    pub fn observe(
        &mut self,
        label: &str,
    ) -> LFResult<T> {
        if self.frozen {
            return Err(LabelFieldError::VocabFrozen);
        }

        if let Some(&id) = self.label_to_id.get(label) {
            // Unwrap is fine: counts is kept in lock-step with ids.
            self.counts[id.to_usize().unwrap()] += 1;
            return Ok(id);
        }

        let next = self.id_to_label.len();
        let id = T::from_usize(next).ok_or(LabelFieldError::VocabSizeOverflow { size: next + 1 })?;

        self.label_to_id.insert(label.to_owned(), id);
        self.id_to_label.push(label.to_owned());
        self.counts.push(1);

        Ok(id)
    }

    /// Return the id for a label, if present.
    pub fn lookup(
        &self,
        label: &str,
    ) -> Option<T> {
        self.label_to_id.get(label).copied()
    }

    /// Return the label for an id, if in range.
    pub fn label(
        &self,
        id: T,
    ) -> Option<&str> {
        id.to_usize()
            .and_then(|i| self.id_to_label.get(i))
            .map(String::as_str)
    }

    /// Iterate over `(label, id)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> {
        self.id_to_label
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), T::from_usize(i).unwrap()))
    }

    /// Occurrence counts in id order.
    ///
    /// `sum(counts)` equals the total number of tokens observed.
    pub fn counts(&self) -> Vec<u64> {
        self.counts.clone()
    }

    /// Observed label frequencies in id order.
    ///
    /// ## Returns
    /// A categorical probability distribution over labels; sums to 1.0
    /// (within floating-point tolerance) when the vocabulary is non-empty.
    pub fn frequencies(&self) -> Vec<f64> {
        let total: u64 = self.counts.iter().sum();
        if total == 0 {
            return Vec::new();
        }
        self.counts
            .iter()
            .map(|&c| c as f64 / total as f64)
            .collect()
    }

    /// Reciprocal label frequencies in id order.
    ///
    /// Useful as class-imbalance weights; rare labels get large entries.
    /// Every entry is finite, since every vocabulary entry has a strictly
    /// positive count.
    pub fn inverse_frequencies(&self) -> Vec<f64> {
        self.frequencies().into_iter().map(|f| 1.0 / f).collect()
    }
}
