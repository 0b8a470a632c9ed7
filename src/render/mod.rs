//! Turns a [`Solution`] back into the grid it fills, for printing in the terminal or exporting as
//! an image.
mod svg;
mod text;

pub use svg::write_svg;

use crate::model::Puzzle;
use crate::results::Solution;

/// The contents of a single cell of a [`LetterGrid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Blocked,
    /// An open cell which no word of the solution covers.
    Empty,
    Letter(char),
}

/// The letters of a (possibly partial) fill, laid out row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterGrid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl LetterGrid {
    /// Write the words of `solution` into the cells of `puzzle`. Variables of the solution that
    /// do not fit the puzzle are ignored.
    pub fn new(puzzle: &Puzzle, solution: &Solution) -> Self {
        let (height, width) = (puzzle.height(), puzzle.width());
        let mut cells: Vec<Cell> = (0..height)
            .flat_map(|row| (0..width).map(move |column| (row, column)))
            .map(|(row, column)| {
                if puzzle.is_open(row, column) {
                    Cell::Empty
                } else {
                    Cell::Blocked
                }
            })
            .collect();

        for (variable, word) in solution.iter() {
            for ((row, column), letter) in variable.cells().zip(word.chars()) {
                if row < height && column < width && cells[row * width + column] != Cell::Blocked
                {
                    cells[row * width + column] = Cell::Letter(letter);
                }
            }
        }

        LetterGrid {
            height,
            width,
            cells,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.width + column]
    }

    /// The cells of every row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }
}
