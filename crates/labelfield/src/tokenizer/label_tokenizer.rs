//! # Separator-Based Label Tokenizer

/// Splits one raw label string into an ordered sequence of label tokens.
///
/// With a configured separator, the input is split on every occurrence
/// (empty pieces included; labels are exact tokens and are never trimmed
/// or normalized). Without one, the whole string is a single token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTokenizer {
    /// The multilabel separator, if any.
    pub separator: Option<String>,
}

impl LabelTokenizer {
    /// Create a tokenizer with the given optional separator.
    ///
    /// ## Arguments
    /// * `separator` - The multilabel separator, or `None` for atomic labels.
    pub fn new<S>(separator: Option<S>) -> Self
    where
        S: Into<String>,
    {
        Self {
            separator: separator.map(Into::into),
        }
    }

    /// Get the configured separator.
    pub fn separator(&self) -> Option<&str> {
        self.separator.as_deref()
    }

    /// Tokenize a raw example into label tokens, in order.
    ///
    /// ## Arguments
    /// * `example` - The raw label string.
    ///
    /// ## Returns
    /// An iterator over the label tokens of the example.
    pub fn tokenize<'a>(
        &'a self,
        example: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        match self.separator.as_deref() {
            Some(sep) => Splits::Multi(example.split(sep)),
            None => Splits::Atomic(core::iter::once(example)),
        }
    }
}

enum Splits<'a> {
    Atomic(core::iter::Once<&'a str>),
    Multi(core::str::Split<'a, &'a str>),
}

impl<'a> Iterator for Splits<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        match self {
            Splits::Atomic(it) => it.next(),
            Splits::Multi(it) => it.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_labels() {
        let tok = LabelTokenizer::new::<&str>(None);
        assert_eq!(tok.separator(), None);

        let tokens: Vec<&str> = tok.tokenize("cat|dog").collect();
        assert_eq!(tokens, vec!["cat|dog"]);

        let tokens: Vec<&str> = tok.tokenize("").collect();
        assert_eq!(tokens, vec![""]);
    }

    #[test]
    fn test_multilabel_split() {
        let tok = LabelTokenizer::new(Some("|"));
        assert_eq!(tok.separator(), Some("|"));

        let tokens: Vec<&str> = tok.tokenize("cat|dog").collect();
        assert_eq!(tokens, vec!["cat", "dog"]);

        let tokens: Vec<&str> = tok.tokenize("cat").collect();
        assert_eq!(tokens, vec!["cat"]);

        // Exact split semantics; empty pieces are kept.
        let tokens: Vec<&str> = tok.tokenize("cat||dog").collect();
        assert_eq!(tokens, vec!["cat", "", "dog"]);
    }

    #[test]
    fn test_multichar_separator() {
        let tok = LabelTokenizer::new(Some("::"));

        let tokens: Vec<&str> = tok.tokenize("a::b::c").collect();
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }
}
