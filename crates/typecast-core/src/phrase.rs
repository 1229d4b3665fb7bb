//! Phrases segmented into typeable units.
//!
//! One typewriter "character" is one extended grapheme cluster, so emoji
//! sequences and combining marks appear and disappear whole.

use unicode_segmentation::UnicodeSegmentation;

/// A phrase plus the byte offset at the end of every grapheme cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    text: String,
    /// `ends[i]` is the byte length of the first `i` graphemes; `ends[0] == 0`.
    ends: Vec<usize>,
}

impl Phrase {
    /// Segment `text` into grapheme clusters.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut ends = Vec::with_capacity(text.len() + 1);
        ends.push(0);
        ends.extend(
            text.grapheme_indices(true)
                .map(|(offset, grapheme)| offset + grapheme.len()),
        );
        Self { text, ends }
    }

    /// The full phrase.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of typeable units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ends.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first `count` graphemes. `count` is clamped to [`Self::len`].
    #[must_use]
    pub fn prefix(&self, count: usize) -> &str {
        let end = self.ends[count.min(self.len())];
        &self.text[..end]
    }
}

impl From<&str> for Phrase {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
