//! Backing storage array.

use crate::common::Word;

/// The addressable word array of a register file.
///
/// Every word powers up `Unknown`. Callers validate addresses before
/// indexing; [`get`](Self::get) is the checked accessor for debug paths.
#[derive(Clone, Debug)]
pub struct Storage {
    words: Vec<Word>,
}

impl Storage {
    /// Allocates `len` indeterminate words.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![Word::Unknown; len],
        }
    }

    /// Number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the array holds no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reads an in-range word.
    #[inline]
    pub fn read(&self, addr: usize) -> Word {
        self.words[addr]
    }

    /// Overwrites an in-range word.
    #[inline]
    pub fn write(&mut self, addr: usize, value: u64) {
        self.words[addr] = Word::Known(value);
    }

    /// Checked read, `None` if `addr` is out of range.
    pub fn get(&self, addr: usize) -> Option<Word> {
        self.words.get(addr).copied()
    }

    /// Returns every word to the indeterminate state.
    pub fn invalidate(&mut self) {
        self.words.fill(Word::Unknown);
    }

    /// Iterates words in address order.
    pub fn iter(&self) -> impl Iterator<Item = Word> + '_ {
        self.words.iter().copied()
    }
}
