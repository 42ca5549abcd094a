//! Half-block rendering: two source rows per terminal line.
//!
//! Each cell is an upper half block `▀` whose foreground is the top pixel
//! and whose background is the bottom pixel. An odd final row is paired with
//! a fully transparent one.

use std::io::{self, Write};

use super::escape::{Painter, Pen};
use crate::grid::{Color, PixelGrid};

pub const UPPER_HALF_BLOCK: char = '▀';

/// Glyph and colors for one vertically stacked pixel pair.
pub fn cell(top: Color, bottom: Color) -> (Pen, char) {
    match (top, bottom) {
        (Color::Transparent, Color::Transparent) => (Pen::PLAIN, ' '),
        (Color::Transparent, Color::Opaque(bottom)) => (Pen::new(None, Some(bottom)), ' '),
        (Color::Opaque(top), Color::Transparent) => (Pen::new(Some(top), None), UPPER_HALF_BLOCK),
        (Color::Opaque(top), Color::Opaque(bottom)) => {
            (Pen::new(Some(top), Some(bottom)), UPPER_HALF_BLOCK)
        }
    }
}

/// Render `grid` at one terminal line per two source rows.
pub fn render<W: Write + ?Sized>(grid: &PixelGrid, out: &mut W) -> io::Result<()> {
    let mut painter = Painter::new();
    let mut glyph = [0u8; 4];

    for y in (0..grid.height()).step_by(2) {
        let Some(top) = grid.row(y) else { break };
        let bottom = grid.row(y + 1);
        for (x, &upper) in top.iter().enumerate() {
            let lower = bottom.map_or(Color::Transparent, |row| row[x]);
            let (pen, ch) = cell(upper, lower);
            painter.paint(pen, ch.encode_utf8(&mut glyph));
        }
        painter.finish_line(out)?;
    }
    Ok(())
}
