use std::fmt::Display;
use std::fmt::Formatter;

use log::warn;

/// Identifies a word of a [`Vocabulary`]. Ids follow the lexicographic order of the words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(u32);

impl WordId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl Display for WordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// The words that may be placed in the grid.
///
/// Words are kept sorted and without duplicates, so every domain seeded from the vocabulary
/// enumerates its words in the same, reproducible order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Box<str>>,
}

impl Vocabulary {
    pub fn new<Word: AsRef<str>>(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Box<str>> = words.into_iter().map(|word| word.as_ref().into()).collect();
        words.sort();
        words.dedup();

        if words.is_empty() {
            warn!("The vocabulary does not contain any words");
        }

        Vocabulary { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = WordId> + '_ {
        (0..self.words.len()).map(|index| WordId(index as u32))
    }

    pub fn word(&self, id: WordId) -> &str {
        &self.words[id.index()]
    }

    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.words
            .binary_search_by(|probe| (**probe).cmp(word))
            .ok()
            .map(|index| WordId(index as u32))
    }

    /// The number of letters in the word.
    pub fn word_length(&self, id: WordId) -> usize {
        self.words[id.index()].len()
    }

    /// The letter at `offset`. Words are ASCII, so letters are bytes.
    pub fn letter(&self, id: WordId, offset: usize) -> u8 {
        self.words[id.index()].as_bytes()[offset]
    }

    /// The letter at `offset`, or `None` if the word is too short.
    pub fn letter_at(&self, id: WordId, offset: usize) -> Option<u8> {
        self.words[id.index()].as_bytes().get(offset).copied()
    }
}
