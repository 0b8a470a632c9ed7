use std::collections::VecDeque;

use log::debug;
use log::trace;

use crate::basic_types::EmptyDomain;
use crate::basic_types::HashSet;
use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::model::Puzzle;
use crate::model::VariableId;
use crate::model::Vocabulary;
use crate::model::WordId;

/// A directed constraint between two crossing variables. Revising the arc removes the words of
/// `x` that have no partner in the domain of `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectedArc {
    pub x: VariableId,
    pub y: VariableId,
}

impl DirectedArc {
    pub fn new(x: VariableId, y: VariableId) -> Self {
        DirectedArc { x, y }
    }

    /// Every arc of the puzzle: for every variable `x`, one arc `(x, y)` per neighbour `y`.
    pub fn all(puzzle: &Puzzle) -> impl Iterator<Item = DirectedArc> + '_ {
        puzzle.variables().flat_map(move |x| {
            puzzle
                .neighbors(x)
                .iter()
                .map(move |&y| DirectedArc::new(x, y))
        })
    }
}

/// The AC-3 algorithm. Arcs are revised in FIFO order; whenever the domain of `x` shrinks, the
/// arcs `(z, x)` for the other neighbours `z` of `x` are revised again.
///
/// Without explicit initial arcs, every arc of the puzzle is processed.
#[derive(Clone, Debug, Default)]
pub(crate) struct ArcConsistency {
    initial_arcs: Option<Vec<DirectedArc>>,
}

impl ArcConsistency {
    pub(crate) fn new(initial_arcs: Option<Vec<DirectedArc>>) -> Self {
        ArcConsistency { initial_arcs }
    }
}

impl Propagator for ArcConsistency {
    fn name(&self) -> &str {
        "ArcConsistency"
    }

    fn propagate(&self, mut context: PropagationContextMut) -> PropagationStatus {
        let mut queue = ArcQueue::default();
        match &self.initial_arcs {
            Some(arcs) => arcs.iter().for_each(|&arc| queue.push(arc)),
            None => DirectedArc::all(context.puzzle()).for_each(|arc| queue.push(arc)),
        }

        while let Some(DirectedArc { x, y }) = queue.pop() {
            if !revise(&mut context, x, y) {
                continue;
            }

            if context.is_empty(x) {
                debug!(
                    "Revising {} against {} emptied its domain",
                    context.puzzle().variable(x),
                    context.puzzle().variable(y)
                );
                return Err(EmptyDomain(x));
            }

            for &z in context.neighbors(x) {
                if z != y {
                    queue.push(DirectedArc::new(z, x));
                }
            }
        }

        Ok(())
    }
}

/// Make `x` arc consistent with `y`: remove every word of `x` whose letter in the shared cell is
/// not matched by a different word of `y`. Returns whether the domain of `x` changed.
///
/// Variables that do not cross are left untouched.
pub(crate) fn revise(context: &mut PropagationContextMut, x: VariableId, y: VariableId) -> bool {
    let Some(overlap) = context.overlap(x, y) else {
        return false;
    };
    context.record_revision();

    let vocabulary = context.vocabulary();
    let support = LetterSupport::new(vocabulary, context.domain(y), overlap.other_offset);

    let changed = context.retain(x, |&word| {
        vocabulary
            .letter_at(word, overlap.offset)
            .is_some_and(|letter| support.supports(word, letter))
    });

    if changed {
        trace!("Revised {x} against {y}");
    }

    changed
}

/// For every letter, the number of words that have it at a fixed offset and one such word.
struct LetterSupport {
    counts: [u32; 256],
    witnesses: [Option<WordId>; 256],
}

impl LetterSupport {
    fn new(vocabulary: &Vocabulary, words: &[WordId], offset: usize) -> Self {
        let mut support = LetterSupport {
            counts: [0; 256],
            witnesses: [None; 256],
        };

        for &word in words {
            if let Some(letter) = vocabulary.letter_at(word, offset) {
                support.counts[letter as usize] += 1;
                let _ = support.witnesses[letter as usize].get_or_insert(word);
            }
        }

        support
    }

    /// Whether `letter` is matched by a word other than `word`; two crossing slots never hold the
    /// same word.
    fn supports(&self, word: WordId, letter: u8) -> bool {
        match self.counts[letter as usize] {
            0 => false,
            1 => self.witnesses[letter as usize] != Some(word),
            _ => true,
        }
    }
}

/// A FIFO queue of arcs in which every arc is present at most once.
#[derive(Debug, Default)]
struct ArcQueue {
    arcs: VecDeque<DirectedArc>,
    queued: HashSet<DirectedArc>,
}

impl ArcQueue {
    fn push(&mut self, arc: DirectedArc) {
        if self.queued.insert(arc) {
            self.arcs.push_back(arc);
        }
    }

    fn pop(&mut self) -> Option<DirectedArc> {
        let arc = self.arcs.pop_front()?;
        let _ = self.queued.remove(&arc);

        Some(arc)
    }
}
