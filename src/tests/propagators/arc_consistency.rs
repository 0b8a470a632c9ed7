#![cfg(test)]

use crate::engine::test_helper::TestSolver;
use crate::engine::Assignment;
use crate::model::Direction;
use crate::model::VariableId;
use crate::model::WordId;
use crate::propagators::ArcConsistency;
use crate::propagators::DirectedArc;

// ___
// _#_
// ___
const RING: [&str; 3] = ["___", "_#_", "___"];
const RING_WORDS: [&str; 10] = [
    "ABC", "AFG", "CDE", "GHE", "AXE", "CAT", "GUE", "ABE", "XYZ", "EGG",
];

#[test]
fn revise_removes_words_without_a_distinct_partner() {
    let mut solver = TestSolver::new(&["___", "_##", "_##"], &["CAT", "COW", "DOG", "EEL"]);
    let across = solver.variable(0, 0, Direction::Across);
    let down = solver.variable(0, 0, Direction::Down);
    solver.set_domain(down, &["COW", "DOG"]);

    assert!(solver.revise(across, down));

    // "COW" and "DOG" are only matched by themselves, "EEL" is not matched at all
    assert_eq!(solver.domain_words(across), vec!["CAT"]);
    assert_eq!(solver.domain_words(down), vec!["COW", "DOG"]);
}

#[test]
fn revise_removes_exactly_the_unsupported_words() {
    let mut solver = TestSolver::new(&RING, &RING_WORDS);
    solver.enforce_node_consistency();
    let top = solver.variable(0, 0, Direction::Across);
    let right = solver.variable(0, 2, Direction::Down);
    solver.set_domain(right, &["CDE", "CAT", "EGG"]);

    let overlap = solver.puzzle.overlap(top, right).expect("the slots cross");
    let before: Vec<WordId> = solver.domains.domain(top).to_vec();
    let expected: Vec<WordId> = before
        .iter()
        .copied()
        .filter(|&word| {
            solver.domains.domain(right).iter().any(|&other| {
                other != word
                    && solver.vocabulary.letter(other, overlap.other_offset)
                        == solver.vocabulary.letter(word, overlap.offset)
            })
        })
        .collect();

    assert!(solver.revise(top, right));

    assert_eq!(solver.domains.domain(top), expected.as_slice());
    // the last letter must start one of "CAT", "CDE" or "EGG"
    assert_eq!(
        solver.domain_words(top),
        vec!["ABC", "ABE", "AXE", "CDE", "GHE", "GUE"]
    );
}

#[test]
fn revising_twice_changes_nothing() {
    let mut solver = TestSolver::new(&RING, &RING_WORDS);
    solver.enforce_node_consistency();
    let top = solver.variable(0, 0, Direction::Across);
    let left = solver.variable(0, 0, Direction::Down);

    assert!(solver.revise(top, left));
    let after_first = solver.domain_words(top).join(",");

    assert!(!solver.revise(top, left));
    assert_eq!(solver.domain_words(top).join(","), after_first);
}

#[test]
fn slots_which_do_not_cross_are_not_revised() {
    let mut solver = TestSolver::new(&["___", "###", "___"], &["CAT", "DOG"]);
    let top = solver.variable(0, 0, Direction::Across);
    let bottom = solver.variable(2, 0, Direction::Across);
    solver.set_domain(bottom, &["DOG"]);

    assert!(!solver.revise(top, bottom));
    assert_eq!(solver.domain_words(top), vec!["CAT", "DOG"]);
    assert_eq!(solver.counters.num_revisions, 0);
}

#[test]
fn ac3_is_idempotent() {
    let mut solver = TestSolver::new(&RING, &RING_WORDS);
    solver.enforce_node_consistency();

    assert_eq!(solver.propagate(&ArcConsistency::new(None)), Ok(()));
    let fixed_point = solver.domains.clone();
    let pruned = solver.counters.num_pruned_values;

    assert_eq!(solver.propagate(&ArcConsistency::new(None)), Ok(()));
    for variable in solver.puzzle.variables() {
        assert_eq!(solver.domains.domain(variable), fixed_point.domain(variable));
    }
    assert_eq!(solver.counters.num_pruned_values, pruned);
}

#[test]
fn ac3_leaves_every_word_with_a_partner() {
    let mut solver = TestSolver::new(&RING, &RING_WORDS);
    solver.enforce_node_consistency();

    assert_eq!(solver.propagate(&ArcConsistency::new(None)), Ok(()));

    let arcs: Vec<DirectedArc> = DirectedArc::all(&solver.puzzle).collect();
    assert_eq!(arcs.len(), 8);
    for DirectedArc { x, y } in arcs {
        assert!(!solver.revise(x, y), "arc ({x}, {y}) is not consistent");
    }
}

#[test]
fn ac3_keeps_every_word_used_by_a_solution() {
    let mut solver = TestSolver::new(&RING, &RING_WORDS);
    solver.enforce_node_consistency();

    let variables: Vec<VariableId> = solver.puzzle.variables().collect();
    let mut solutions = vec![];
    enumerate(
        &solver,
        &variables,
        &mut Assignment::new(variables.len()),
        &mut solutions,
    );
    assert!(!solutions.is_empty());

    assert_eq!(solver.propagate(&ArcConsistency::new(None)), Ok(()));

    for solution in solutions {
        for (variable, word) in solution {
            assert!(solver.domains.contains(variable, word));
        }
    }
}

#[test]
fn ac3_only_follows_the_given_arcs() {
    let mut solver = TestSolver::new(&["___", "_##", "_##"], &["CAT", "COW", "DOG"]);
    let across = solver.variable(0, 0, Direction::Across);
    let down = solver.variable(0, 0, Direction::Down);

    let arcs = vec![DirectedArc::new(across, down)];
    let result = solver.propagate(&ArcConsistency::new(Some(arcs)));

    assert_eq!(result, Ok(()));
    assert_eq!(solver.domain_words(across), vec!["CAT", "COW"]);
    assert_eq!(solver.domain_words(down), vec!["CAT", "COW", "DOG"]);
}

/// Collect every complete, consistent assignment over the current domains.
fn enumerate(
    solver: &TestSolver,
    variables: &[VariableId],
    assignment: &mut Assignment,
    solutions: &mut Vec<Vec<(VariableId, WordId)>>,
) {
    let Some((&variable, rest)) = variables.split_first() else {
        solutions.push(assignment.iter().collect());
        return;
    };

    for &word in solver.domains.domain(variable) {
        assignment.assign(variable, word);
        if assignment.is_consistent_at(variable, &solver.puzzle, &solver.vocabulary) {
            enumerate(solver, rest, assignment, solutions);
        }
        assignment.unassign(variable);
    }
}
