use thiserror::Error;

use super::Direction;
use super::Variable;
use super::VariableId;

/// The cell shared by two crossing variables, given as the offset into each of them. For
/// `overlap(x, y)` the letter of `x` at `offset` must equal the letter of `y` at `other_offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Overlap {
    pub offset: usize,
    pub other_offset: usize,
}

impl Overlap {
    /// The same overlap seen from the other variable.
    pub fn mirrored(self) -> Overlap {
        Overlap {
            offset: self.other_offset,
            other_offset: self.offset,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("expected {expected} rows but the structure has {actual}")]
    HeightMismatch { expected: usize, actual: usize },
    #[error("expected row {row} to have {expected} cells but it has {actual}")]
    WidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// The variables of a crossword grid and the way they cross.
///
/// Everything is derived from the open/blocked matrix when the puzzle is created; the overlap map
/// and the neighbour lists are never recomputed.
#[derive(Clone, Debug)]
pub struct Puzzle {
    height: usize,
    width: usize,
    /// Row-major open/blocked matrix.
    structure: Vec<bool>,
    /// Sorted, so the position of a variable is its [`VariableId`].
    variables: Vec<Variable>,
    /// `variables.len() * variables.len()` entries, indexed `x * n + y`.
    overlaps: Vec<Option<Overlap>>,
    neighbors: Vec<Box<[VariableId]>>,
}

impl Puzzle {
    /// Create a puzzle from the open/blocked matrix, where `structure[row][column]` is true for
    /// an open cell.
    pub fn new(
        height: usize,
        width: usize,
        structure: Vec<Vec<bool>>,
    ) -> Result<Puzzle, PuzzleError> {
        if structure.len() != height {
            return Err(PuzzleError::HeightMismatch {
                expected: height,
                actual: structure.len(),
            });
        }

        if let Some((row, cells)) = structure
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != width)
        {
            return Err(PuzzleError::WidthMismatch {
                row,
                expected: width,
                actual: cells.len(),
            });
        }

        let structure: Vec<bool> = structure.into_iter().flatten().collect();
        let mut variables = find_variables(height, width, &structure);
        variables.sort();

        let n = variables.len();
        let mut overlaps = vec![None; n * n];
        for (x, first) in variables.iter().enumerate() {
            for (y, second) in variables.iter().enumerate().skip(x + 1) {
                if let Some(overlap) = compute_overlap(first, second) {
                    overlaps[x * n + y] = Some(overlap);
                    overlaps[y * n + x] = Some(overlap.mirrored());
                }
            }
        }

        let neighbors = (0..n)
            .map(|x| {
                (0..n)
                    .filter(|&y| overlaps[x * n + y].is_some())
                    .map(VariableId::new)
                    .collect()
            })
            .collect();

        Ok(Puzzle {
            height,
            width,
            structure,
            variables,
            overlaps,
            neighbors,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_open(&self, row: usize, column: usize) -> bool {
        row < self.height && column < self.width && self.structure[row * self.width + column]
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// All variable ids in variable order.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        (0..self.variables.len()).map(VariableId::new)
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id.index()]
    }

    pub fn id_of(&self, variable: &Variable) -> Option<VariableId> {
        self.variables
            .binary_search(variable)
            .ok()
            .map(VariableId::new)
    }

    pub fn overlap(&self, x: VariableId, y: VariableId) -> Option<Overlap> {
        self.overlaps[x.index() * self.variables.len() + y.index()]
    }

    /// The variables crossing `x`, in variable order.
    pub fn neighbors(&self, x: VariableId) -> &[VariableId] {
        &self.neighbors[x.index()]
    }
}

fn find_variables(height: usize, width: usize, structure: &[bool]) -> Vec<Variable> {
    let is_open = |row: usize, column: usize| structure[row * width + column];
    let mut variables = vec![];

    for row in 0..height {
        let mut column = 0;
        while column < width {
            let start = column;
            while column < width && is_open(row, column) {
                column += 1;
            }
            if column - start >= 2 {
                variables.push(Variable::new(row, start, Direction::Across, column - start));
            }
            column += 1;
        }
    }

    for column in 0..width {
        let mut row = 0;
        while row < height {
            let start = row;
            while row < height && is_open(row, column) {
                row += 1;
            }
            if row - start >= 2 {
                variables.push(Variable::new(start, column, Direction::Down, row - start));
            }
            row += 1;
        }
    }

    variables
}

fn compute_overlap(first: &Variable, second: &Variable) -> Option<Overlap> {
    if first.direction == second.direction {
        return None;
    }

    let (across, down) = if first.direction == Direction::Across {
        (first, second)
    } else {
        (second, first)
    };
    let cell = (across.row, down.column);

    let overlap = Overlap {
        offset: across.offset_of(cell)?,
        other_offset: down.offset_of(cell)?,
    };

    if first.direction == Direction::Across {
        Some(overlap)
    } else {
        Some(overlap.mirrored())
    }
}
