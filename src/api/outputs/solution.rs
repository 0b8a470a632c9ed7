use crate::model::Variable;

/// A complete assignment of words to the variables of a puzzle, in variable order.
///
/// The solution owns its words so that it outlives the [`crate::Solver`] that produced it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    entries: Vec<(Variable, String)>,
}

impl Solution {
    pub(crate) fn new(mut entries: Vec<(Variable, String)>) -> Self {
        entries.sort_by_key(|(variable, _)| *variable);
        Solution { entries }
    }

    /// The word assigned to `variable`, if it is a variable of the solved puzzle.
    pub fn word(&self, variable: &Variable) -> Option<&str> {
        self.entries
            .binary_search_by_key(variable, |(other, _)| *other)
            .ok()
            .map(|index| self.entries[index].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &str)> + '_ {
        self.entries
            .iter()
            .map(|(variable, word)| (variable, word.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Direction;

    #[test]
    fn words_are_found_by_variable() {
        let across = Variable::new(0, 0, Direction::Across, 3);
        let down = Variable::new(0, 0, Direction::Down, 3);
        let solution = Solution::new(vec![
            (down, "COW".to_owned()),
            (across, "CAT".to_owned()),
        ]);

        assert_eq!(solution.word(&across), Some("CAT"));
        assert_eq!(solution.word(&down), Some("COW"));
        assert_eq!(
            solution.word(&Variable::new(1, 0, Direction::Across, 3)),
            None
        );
        assert_eq!(
            solution.iter().map(|(_, word)| word).collect::<Vec<_>>(),
            vec!["CAT", "COW"]
        );
    }
}
