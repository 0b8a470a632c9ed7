use crate::branching::SelectionContext;
use crate::branching::ValueSelector;
use crate::model::VariableId;
use crate::model::WordId;

/// [`ValueSelector`] which orders the words by the number of candidates they rule out for the
/// unassigned neighbours of the variable, fewest first.
///
/// A word rules out every word of a neighbour's domain that has a different letter in the shared
/// cell. Words ruling out equally many candidates keep their domain order.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeastConstrainingValue;

impl ValueSelector for LeastConstrainingValue {
    fn order_values(&mut self, variable: VariableId, context: &SelectionContext) -> Vec<WordId> {
        let vocabulary = context.vocabulary();

        // For every unassigned neighbour: the shared offset in `variable`, the size of the
        // neighbour's domain, and how many of its words have each letter in the shared cell.
        let crossings: Vec<(usize, usize, [usize; 256])> = context
            .neighbors(variable)
            .iter()
            .filter(|&&neighbor| !context.is_assigned(neighbor))
            .filter_map(|&neighbor| {
                let overlap = context.overlap(variable, neighbor)?;
                let domain = context.domain(neighbor);

                let mut letter_counts = [0; 256];
                domain
                    .iter()
                    .filter_map(|&word| vocabulary.letter_at(word, overlap.other_offset))
                    .for_each(|letter| letter_counts[letter as usize] += 1);

                Some((overlap.offset, domain.len(), letter_counts))
            })
            .collect();

        let ruled_out = |word: WordId| -> usize {
            crossings
                .iter()
                .map(|(offset, domain_size, letter_counts)| {
                    let agreeing = vocabulary
                        .letter_at(word, *offset)
                        .map_or(0, |letter| letter_counts[letter as usize]);
                    domain_size - agreeing
                })
                .sum()
        };

        let mut ordered: Vec<(usize, WordId)> = context
            .domain(variable)
            .iter()
            .map(|&word| (ruled_out(word), word))
            .collect();
        ordered.sort_by_key(|&(count, _)| count);

        ordered.into_iter().map(|(_, word)| word).collect()
    }
}
