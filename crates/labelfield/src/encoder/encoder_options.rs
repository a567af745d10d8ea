//! Label Encoder Options
//!
//! Options for building a [`LabelEncoder`].

use crate::encoder::LabelEncoder;
use crate::types::LabelIdType;

/// Options for configuring a [`LabelEncoder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelEncoderOptions {
    /// Whether `process` produces multi-hot presence vectors
    /// instead of id sequences.
    pub one_hot: bool,

    /// Delimiter splitting one raw field into several independent
    /// label tokens.
    ///
    /// When `None`, each input is one atomic label.
    pub multilabel_separator: Option<String>,
}

impl LabelEncoderOptions {
    /// Gets the configured one-hot value.
    pub fn one_hot(&self) -> bool {
        self.one_hot
    }

    /// Sets the configured one-hot value.
    pub fn set_one_hot(
        &mut self,
        one_hot: bool,
    ) {
        self.one_hot = one_hot;
    }

    /// Sets the configured one-hot value and returns the builder.
    pub fn with_one_hot(
        mut self,
        one_hot: bool,
    ) -> Self {
        self.set_one_hot(one_hot);
        self
    }

    /// Get the configured multilabel separator.
    pub fn multilabel_separator(&self) -> Option<&str> {
        self.multilabel_separator.as_deref()
    }

    /// Set the configured multilabel separator.
    pub fn set_multilabel_separator<S>(
        &mut self,
        separator: S,
    ) where
        S: Into<Option<String>>,
    {
        self.multilabel_separator = separator.into();
    }

    /// Set the configured multilabel separator and return the builder.
    pub fn with_multilabel_separator<S>(
        mut self,
        separator: S,
    ) -> Self
    where
        S: Into<Option<String>>,
    {
        self.set_multilabel_separator(separator);
        self
    }

    /// Build an empty [`LabelEncoder`] from these options.
    pub fn build<T: LabelIdType>(&self) -> LabelEncoder<T> {
        LabelEncoder::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LabelEncoderOptions::default();
        assert!(!options.one_hot());
        assert_eq!(options.multilabel_separator(), None);
    }

    #[test]
    fn test_with_setters() {
        let options = LabelEncoderOptions::default()
            .with_one_hot(true)
            .with_multilabel_separator("|".to_string());

        assert!(options.one_hot());
        assert_eq!(options.multilabel_separator(), Some("|"));

        let options = options.with_multilabel_separator(None);
        assert_eq!(options.multilabel_separator(), None);
    }
}
