use std::fmt;

use super::Cell;
use super::LetterGrid;

impl fmt::Display for LetterGrid {
    /// One line per row: blocked cells are drawn as `█`, empty open cells as a space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                match cell {
                    Cell::Blocked => write!(f, "█")?,
                    Cell::Empty => write!(f, " ")?,
                    Cell::Letter(letter) => write!(f, "{letter}")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
