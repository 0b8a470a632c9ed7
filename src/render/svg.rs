use std::io;
use std::io::Write;

use super::Cell;
use super::LetterGrid;

const CELL_SIZE: usize = 100;
const CELL_BORDER: usize = 2;
const FONT_SIZE: usize = 80;

/// Write the grid as an SVG image. Every cell is a square of 100px on a black canvas; open cells
/// are white with a 2px border, and letters are centred in an 80px font.
pub fn write_svg(grid: &LetterGrid, mut writer: impl Write) -> io::Result<()> {
    let width = grid.width() * CELL_SIZE;
    let height = grid.height() * CELL_SIZE;
    let inner = CELL_SIZE - 2 * CELL_BORDER;

    writeln!(
        writer,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    writeln!(
        writer,
        r#"  <rect width="{width}" height="{height}" fill="black"/>"#
    )?;

    for (row, cells) in grid.rows().enumerate() {
        for (column, cell) in cells.iter().enumerate() {
            if *cell == Cell::Blocked {
                continue;
            }

            let x = column * CELL_SIZE;
            let y = row * CELL_SIZE;
            writeln!(
                writer,
                r#"  <rect x="{}" y="{}" width="{inner}" height="{inner}" fill="white"/>"#,
                x + CELL_BORDER,
                y + CELL_BORDER
            )?;

            if let Cell::Letter(letter) = cell {
                writeln!(
                    writer,
                    r#"  <text x="{}" y="{}" font-size="{FONT_SIZE}" font-family="sans-serif" text-anchor="middle" dominant-baseline="central">{letter}</text>"#,
                    x + CELL_SIZE / 2,
                    y + CELL_SIZE / 2
                )?;
            }
        }
    }

    writeln!(writer, "</svg>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_helper::puzzle;
    use crate::model::Direction;
    use crate::model::Variable;
    use crate::results::Solution;

    #[test]
    fn open_cells_are_white_squares_with_letters() {
        let puzzle = puzzle(&["__#"]);
        let solution = Solution::new(vec![(
            Variable::new(0, 0, Direction::Across, 2),
            "AB".to_owned(),
        )]);
        let grid = LetterGrid::new(&puzzle, &solution);

        let mut image = Vec::new();
        write_svg(&grid, &mut image).expect("writing to a vector does not fail");
        let image = String::from_utf8(image).expect("the image is utf-8");

        assert!(image.starts_with("<svg"));
        assert!(image.contains(r#"width="300" height="100""#));
        assert_eq!(image.matches(r#"fill="white""#).count(), 2);
        assert!(image.contains(r#"<rect x="102" y="2" width="96" height="96" fill="white"/>"#));
        assert!(image.contains(">B</text>"));
        assert!(image.trim_end().ends_with("</svg>"));
    }
}
