use std::fmt::Display;
use std::fmt::Formatter;

/// The orientation of a slot in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A crossword slot: a maximal run of open cells starting at (`row`, `column`) and extending
/// `length` cells in `direction`.
///
/// The derived ordering is row-major on the starting cell, then [`Direction::Across`] before
/// [`Direction::Down`]. The search relies on this order to break ties deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    pub row: usize,
    pub column: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    pub fn new(row: usize, column: usize, direction: Direction, length: usize) -> Self {
        Variable {
            row,
            column,
            direction,
            length,
        }
    }

    /// The grid cell holding the letter at `offset`.
    pub fn cell(&self, offset: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.column + offset),
            Direction::Down => (self.row + offset, self.column),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(|offset| self.cell(offset))
    }

    /// The offset of `cell` within this slot, if the slot covers it.
    pub fn offset_of(&self, (row, column): (usize, usize)) -> Option<usize> {
        let offset = match self.direction {
            Direction::Across if row == self.row && column >= self.column => column - self.column,
            Direction::Down if column == self.column && row >= self.row => row - self.row,
            _ => return None,
        };

        (offset < self.length).then_some(offset)
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.row, self.column, self.direction, self.length
        )
    }
}

/// Identifies a [`Variable`] within a [`crate::model::Puzzle`]. Ids follow the order of the
/// variables they identify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(u32);

impl VariableId {
    pub(crate) fn new(index: usize) -> Self {
        VariableId(index as u32)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_are_ordered_row_major_then_by_direction() {
        let mut variables = vec![
            Variable::new(1, 0, Direction::Across, 3),
            Variable::new(0, 2, Direction::Down, 2),
            Variable::new(0, 0, Direction::Down, 3),
            Variable::new(0, 0, Direction::Across, 4),
        ];
        variables.sort();

        assert_eq!(
            variables,
            vec![
                Variable::new(0, 0, Direction::Across, 4),
                Variable::new(0, 0, Direction::Down, 3),
                Variable::new(0, 2, Direction::Down, 2),
                Variable::new(1, 0, Direction::Across, 3),
            ]
        );
    }

    #[test]
    fn offsets_map_to_cells_and_back() {
        let across = Variable::new(2, 1, Direction::Across, 3);
        let down = Variable::new(0, 2, Direction::Down, 4);

        assert_eq!(across.cells().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(down.cell(2), (2, 2));
        assert_eq!(across.offset_of((2, 2)), Some(1));
        assert_eq!(down.offset_of((2, 2)), Some(2));
        assert_eq!(across.offset_of((2, 4)), None);
        assert_eq!(down.offset_of((4, 2)), None);
        assert_eq!(down.offset_of((1, 1)), None);
    }
}
