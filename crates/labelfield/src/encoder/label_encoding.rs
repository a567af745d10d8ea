//! # Encoded Label Outputs

use crate::types::LabelIdType;

/// The output of encoding one raw example.
///
/// The shape is selected by the encoder's `one_hot` option:
/// an ordered id sequence, or a fixed-length binary presence vector
/// over the whole vocabulary (multi-hot; more than one position may
/// be set for multilabel inputs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelEncoding<T: LabelIdType> {
    /// Ordered vocabulary ids, one per token in the example.
    Ids(Vec<T>),

    /// Binary presence vector of length `|vocab|`;
    /// position `i` is 1 iff id `i` appears in the example.
    MultiHot(Vec<u8>),
}

impl<T: LabelIdType> LabelEncoding<T> {
    /// The id sequence, if this is an [`LabelEncoding::Ids`] encoding.
    pub fn as_ids(&self) -> Option<&[T]> {
        match self {
            LabelEncoding::Ids(ids) => Some(ids),
            LabelEncoding::MultiHot(_) => None,
        }
    }

    /// The presence vector, if this is a [`LabelEncoding::MultiHot`] encoding.
    pub fn as_multi_hot(&self) -> Option<&[u8]> {
        match self {
            LabelEncoding::Ids(_) => None,
            LabelEncoding::MultiHot(bits) => Some(bits),
        }
    }
}

impl<T: LabelIdType> From<Vec<T>> for LabelEncoding<T> {
    fn from(ids: Vec<T>) -> Self {
        LabelEncoding::Ids(ids)
    }
}
