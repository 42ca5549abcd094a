//! The decoded, rectangular pixel grid.

use std::fmt;
use std::str::FromStr;

use super::color::Color;
use super::parse::{self, FormatError};

/// A `width` x `height` grid of colors stored row-major.
///
/// A grid can only be built through [`PixelGrid::new`] or the parser, both
/// of which guarantee a non-empty rectangle, so renderers never have to deal
/// with ragged rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl PixelGrid {
    /// Build a grid from row-major cells.
    pub fn new(width: usize, height: usize, cells: Vec<Color>) -> Result<Self, FormatError> {
        if width == 0 || height == 0 {
            return Err(FormatError::InvalidDimension {
                width: width as i64,
                height: height as i64,
            });
        }
        let expected = width
            .checked_mul(height)
            .ok_or(FormatError::InvalidDimension {
                width: width as i64,
                height: height as i64,
            })?;
        if cells.len() != expected {
            return Err(FormatError::CellCount {
                width,
                height,
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse a grid from the text format.
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        parse::parse(input)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total pixel count, used as the density measure when choosing a
    /// rendering strategy.
    pub fn dpi(&self) -> usize {
        self.width * self.height
    }

    /// Color at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    /// Row `y`, or `None` past the bottom edge.
    pub fn row(&self, y: usize) -> Option<&[Color]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Serialize back into the text format the parser reads.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.width, self.height)?;
        for row in self.rows() {
            for (i, color) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", color)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for PixelGrid {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> PixelGrid {
        let red = Color::rgb(255, 0, 0);
        PixelGrid::new(
            3,
            2,
            vec![
                red,
                Color::Transparent,
                red,
                Color::Transparent,
                red,
                Color::Transparent,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            PixelGrid::new(0, 2, vec![]),
            Err(FormatError::InvalidDimension { .. })
        ));
        assert!(matches!(
            PixelGrid::new(2, 0, vec![]),
            Err(FormatError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_new_rejects_wrong_cell_count() {
        let result = PixelGrid::new(2, 2, vec![Color::Transparent; 3]);
        assert_eq!(
            result,
            Err(FormatError::CellCount {
                width: 2,
                height: 2,
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_accessors() {
        let grid = checker();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.dpi(), 6);
        assert_eq!(grid.get(0, 0), Some(Color::rgb(255, 0, 0)));
        assert_eq!(grid.get(0, 1), Some(Color::Transparent));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_rows_are_width_long() {
        let grid = checker();
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.len() == 3));
        assert_eq!(grid.row(1), Some(rows[1]));
        assert_eq!(grid.row(2), None);
    }

    #[test]
    fn test_to_text() {
        assert_eq!(
            checker().to_text(),
            "3 2\n255 0 0 -1 -1 -1 255 0 0\n-1 -1 -1 255 0 0 -1 -1 -1\n"
        );
    }

    #[test]
    fn test_text_reparses_to_same_grid() {
        let grid = checker();
        let reparsed: PixelGrid = grid.to_text().parse().unwrap();
        assert_eq!(reparsed, grid);
    }
}
