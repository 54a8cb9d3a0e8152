//! # Token Sequences

use crate::types::TokenType;

/// The result of encoding text.
///
/// `texts`, when present, matches `ids` index-for-index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenSequence<T: TokenType> {
    /// The token ids.
    pub ids: Vec<T>,

    /// The human-readable token fragments, for backends that expose them.
    pub texts: Option<Vec<String>>,
}

impl<T: TokenType> TokenSequence<T> {
    /// Construct a new sequence.
    ///
    /// ## Panics
    /// If `texts` is present and its length differs from `ids`.
    pub fn new(
        ids: Vec<T>,
        texts: Option<Vec<String>>,
    ) -> Self {
        if let Some(texts) = &texts {
            assert_eq!(
                texts.len(),
                ids.len(),
                "token texts must match token ids index-for-index"
            );
        }
        Self { ids, texts }
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Is the sequence empty?
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate `(id, text)` pairs; `text` is `None` for backends without texts.
    ///
    /// A hand-built sequence with fewer texts than ids yields `None`
    /// for the unmatched tail.
    pub fn iter(&self) -> impl Iterator<Item = (T, Option<&str>)> + '_ {
        let mut texts = self.texts.as_deref().map(<[String]>::iter);
        self.ids.iter().map(move |&id| {
            let text = texts.as_mut().and_then(|it| it.next());
            (id, text.map(String::as_str))
        })
    }

    /// Drop the texts, keeping the ids.
    pub fn into_ids(self) -> Vec<T> {
        self.ids
    }
}

impl<T: TokenType> From<Vec<T>> for TokenSequence<T> {
    fn from(ids: Vec<T>) -> Self {
        Self { ids, texts: None }
    }
}
