use crate::model::Puzzle;
use crate::model::VariableId;
use crate::model::Vocabulary;
use crate::model::WordId;

/// The candidate words of every variable.
///
/// Each domain is kept in vocabulary order; removing words never reorders the remaining ones.
/// Domains only ever shrink.
#[derive(Clone, Debug)]
pub(crate) struct DomainStore {
    domains: Vec<Vec<WordId>>,
}

impl DomainStore {
    /// Seed every variable of the puzzle with the full vocabulary.
    pub(crate) fn new(puzzle: &Puzzle, vocabulary: &Vocabulary) -> Self {
        let full: Vec<WordId> = vocabulary.ids().collect();

        DomainStore {
            domains: vec![full; puzzle.num_variables()],
        }
    }

    pub(crate) fn domain(&self, variable: VariableId) -> &[WordId] {
        &self.domains[variable.index()]
    }

    pub(crate) fn size(&self, variable: VariableId) -> usize {
        self.domains[variable.index()].len()
    }

    pub(crate) fn is_empty(&self, variable: VariableId) -> bool {
        self.domains[variable.index()].is_empty()
    }

    pub(crate) fn contains(&self, variable: VariableId, word: WordId) -> bool {
        self.domains[variable.index()].binary_search(&word).is_ok()
    }

    /// Keep only the words of `variable` for which `keep` holds. Returns the number of removed
    /// words.
    pub(crate) fn retain(
        &mut self,
        variable: VariableId,
        keep: impl FnMut(&WordId) -> bool,
    ) -> usize {
        let domain = &mut self.domains[variable.index()];
        let size_before = domain.len();
        domain.retain(keep);

        size_before - domain.len()
    }

    /// The total number of candidate words over all variables.
    pub(crate) fn total_size(&self) -> usize {
        self.domains.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_helper::puzzle;

    #[test]
    fn every_variable_starts_with_the_full_vocabulary() {
        let puzzle = puzzle(&["___", "_##"]);
        let vocabulary = Vocabulary::new(["AB", "CAT", "DOGS"]);

        let domains = DomainStore::new(&puzzle, &vocabulary);

        for variable in puzzle.variables() {
            assert_eq!(domains.size(variable), 3);
        }
        assert_eq!(domains.total_size(), 6);
    }

    #[test]
    fn retain_preserves_order_and_counts_removals() {
        let puzzle = puzzle(&["___"]);
        let vocabulary = Vocabulary::new(["AB", "CAT", "DOG", "EMU"]);
        let mut domains = DomainStore::new(&puzzle, &vocabulary);
        let variable = puzzle.variables().next().expect("one variable");

        let removed = domains.retain(variable, |&word| vocabulary.word(word) != "DOG");

        assert_eq!(removed, 1);
        let words: Vec<_> = domains
            .domain(variable)
            .iter()
            .map(|&word| vocabulary.word(word))
            .collect();
        assert_eq!(words, vec!["AB", "CAT", "EMU"]);
        assert!(!domains.contains(variable, vocabulary.id_of("DOG").expect("in vocabulary")));
    }
}
