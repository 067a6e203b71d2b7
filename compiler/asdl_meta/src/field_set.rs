//! Presence bitset keyed by field index.

use smallvec::SmallVec;

const BITS: usize = u64::BITS as usize;

/// Which fields of an instance have been explicitly assigned.
///
/// Records with up to 64 fields stay inline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldSet {
    words: SmallVec<[u64; 1]>,
}

impl FieldSet {
    pub(crate) fn with_len(len: usize) -> Self {
        FieldSet {
            words: SmallVec::from_elem(0, len.div_ceil(BITS)),
        }
    }

    #[inline]
    pub(crate) fn contains(&self, index: usize) -> bool {
        self.words
            .get(index / BITS)
            .is_some_and(|word| word & (1u64 << (index % BITS)) != 0)
    }

    /// Mark `index`; returns false if it was already set.
    #[inline]
    pub(crate) fn insert(&mut self, index: usize) -> bool {
        let word_idx = index / BITS;
        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }
        let mask = 1u64 << (index % BITS);
        let was_set = self.words[word_idx] & mask != 0;
        self.words[word_idx] |= mask;
        !was_set
    }
}
