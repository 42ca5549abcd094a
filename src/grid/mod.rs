//! Pixel file decoder.
//!
//! Turns a colorscript file into a [`PixelGrid`]:
//!
//! 1. **Read** - the file is read whole and must be UTF-8 text
//! 2. **Header** - first non-blank line gives `width height`
//! 3. **Rows** - one line per row, `width` `r g b` triples each
//! 4. **Validation** - channel ranges, row widths and row count
//!
//! Decoding either yields a complete rectangular grid or an error; callers
//! never see a partially decoded image.

mod color;
mod parse;
mod pixel_grid;

use std::path::Path;

use crate::error::Error;

pub use color::{Color, Rgb, TRANSPARENT_CHANNEL};
pub use parse::{parse, FormatError};
pub use pixel_grid::PixelGrid;

/// Decode the pixel file at `path`.
pub fn decode(path: &Path) -> Result<PixelGrid, Error> {
    if !path.is_file() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let format_error = |source| Error::Format {
        path: path.to_path_buf(),
        source,
    };
    let text = String::from_utf8(bytes).map_err(|_| format_error(FormatError::Encoding))?;
    let grid = PixelGrid::parse(&text).map_err(format_error)?;

    log::debug!(
        "Decoded {} ({}x{}, {} pixels)",
        path.display(),
        grid.width(),
        grid.height(),
        grid.dpi()
    );
    Ok(grid)
}
