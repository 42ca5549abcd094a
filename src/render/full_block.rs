//! Full-block rendering: every pixel becomes a solid run of `█` glyphs.
//!
//! Terminal cells are roughly twice as tall as they are wide, so each pixel
//! is drawn two glyphs wide. With a scale of `s` a pixel covers `2 * s`
//! columns and `s` lines.

use std::io::{self, Write};

use super::escape::{Painter, Pen};
use crate::grid::{Color, PixelGrid};

pub const FULL_BLOCK: char = '█';

/// Render `grid` with each pixel enlarged `scale` times (`0` is treated as `1`).
pub fn render<W: Write + ?Sized>(grid: &PixelGrid, scale: u32, out: &mut W) -> io::Result<()> {
    let scale = scale.max(1) as usize;
    let block = FULL_BLOCK.to_string().repeat(2 * scale);
    let blank = " ".repeat(2 * scale);

    let mut painter = Painter::new();
    for row in grid.rows() {
        for _ in 0..scale {
            for color in row {
                match color {
                    Color::Opaque(rgb) => painter.paint(Pen::solid(*rgb), &block),
                    Color::Transparent => painter.paint(Pen::PLAIN, &blank),
                }
            }
            painter.finish_line(out)?;
        }
    }
    Ok(())
}
