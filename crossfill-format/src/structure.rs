use std::fmt::Display;
use std::fmt::Formatter;

use nom::branch::alt;
use nom::character::complete::char;
use nom::combinator::all_consuming;
use nom::combinator::value;
use nom::multi::many1;
use nom::IResult;

use crate::FormatError;

const OPEN: char = '_';
const BLOCKED: char = '#';

/// The shape of a crossword grid: which cells may hold a letter and which are blocked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Structure {
    height: usize,
    width: usize,
    cells: Vec<Vec<bool>>,
}

impl Structure {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at the given position is open. Positions outside the grid are blocked.
    pub fn is_open(&self, row: usize, column: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(column))
            .copied()
            .unwrap_or(false)
    }

    /// The open/blocked matrix, one `Vec` per row, each exactly [`Structure::width`] long.
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    pub fn into_rows(self) -> Vec<Vec<bool>> {
        self.cells
    }
}

impl Display for Structure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for &open in row {
                write!(f, "{}", if open { OPEN } else { BLOCKED })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Parse a structure file.
///
/// Trailing whitespace on a line and blank lines after the last row are ignored. Rows which are
/// shorter than the widest row are padded with blocked cells.
pub fn parse_structure(source: &str) -> Result<Structure, FormatError> {
    let lines: Vec<&str> = source.lines().map(str::trim_end).collect();
    let num_rows = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(0, |last| last + 1);

    if num_rows == 0 {
        return Err(FormatError::EmptyStructure);
    }

    let mut cells = Vec::with_capacity(num_rows);
    for (idx, line) in lines[..num_rows].iter().enumerate() {
        cells.push(parse_line(line, idx + 1)?);
    }

    let width = cells.iter().map(Vec::len).max().unwrap_or(0);
    for row in cells.iter_mut() {
        row.resize(width, false);
    }

    Ok(Structure {
        height: num_rows,
        width,
        cells,
    })
}

fn parse_line(line: &str, line_number: usize) -> Result<Vec<bool>, FormatError> {
    if line.is_empty() {
        return Err(FormatError::BlankRow { line: line_number });
    }

    match all_consuming(row)(line) {
        Ok((_, cells)) => Ok(cells),
        Err(nom::Err::Error(error)) | Err(nom::Err::Failure(error)) => {
            let column = line.len() - error.input.len() + 1;
            Err(FormatError::InvalidCell {
                line: line_number,
                column,
                found: error.input.chars().next().unwrap_or(' '),
            })
        }
        Err(nom::Err::Incomplete(_)) => unreachable!("complete parsers never report incomplete"),
    }
}

fn row(input: &str) -> IResult<&str, Vec<bool>> {
    many1(cell)(input)
}

fn cell(input: &str) -> IResult<&str, bool> {
    alt((value(true, char(OPEN)), value(false, char(BLOCKED))))(input)
}
