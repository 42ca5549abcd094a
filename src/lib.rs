//! mccs library crate.
//!
//! Decodes colorscript pixel files and renders them as 24-bit ANSI colored
//! text. The binary adds argument parsing and art directory handling on top.

pub mod config;
pub mod error;
pub mod grid;
pub mod library;
pub mod render;

use std::io::Write;
use std::path::Path;

pub use error::Error;
pub use grid::{decode, Color, FormatError, PixelGrid, Rgb};
pub use library::ArtLibrary;
pub use render::{render, RenderPlan, Strategy};

/// Decode the file at `path` and render it to `out`.
///
/// Nothing is written unless the whole file decodes.
pub fn show<W: Write + ?Sized>(path: &Path, scale: u32, out: &mut W) -> Result<(), Error> {
    let grid = decode(path)?;
    render(&grid, scale, out)?;
    Ok(())
}
