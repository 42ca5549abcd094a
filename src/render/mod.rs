//! Terminal renderer for decoded pixel grids.
//!
//! Rendering is split in two steps:
//!
//! 1. **Planning** - [`RenderPlan::select`] picks a [`Strategy`] and an
//!    effective scale from the image's pixel count and the requested scale
//! 2. **Emission** - the strategy writes glyphs through the escape
//!    [`Painter`](escape::Painter), one line at a time
//!
//! # Strategies
//!
//! - `FullBlock` - each pixel is a solid `██` pair, enlarged by the scale
//! - `HalfBlock` - two rows per line using `▀`, for larger images

pub mod escape;
pub mod full_block;
pub mod half_block;

use std::io::{self, Write};

use crate::grid::PixelGrid;

pub use escape::{Layer, Painter, Pen, RESET};
pub use full_block::FULL_BLOCK;
pub use half_block::UPPER_HALF_BLOCK;

/// Images up to this many pixels are enlarged 2x at the default scale.
pub const SMALL_DPI: usize = 15;

/// Largest image still drawn with full blocks at the default scale.
pub const FULL_BLOCK_MAX_DPI: usize = 143;

/// Largest accepted scale factor. Larger requests are clamped to it.
pub const MAX_SCALE: u32 = 64;

/// How a grid is turned into glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    FullBlock,
    HalfBlock,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::FullBlock => "full-block",
            Strategy::HalfBlock => "half-block",
        }
    }

    /// Write `grid` to `out`. `scale` only applies to `FullBlock`.
    pub fn render<W: Write + ?Sized>(
        &self,
        grid: &PixelGrid,
        scale: u32,
        out: &mut W,
    ) -> io::Result<()> {
        match self {
            Strategy::FullBlock => full_block::render(grid, scale, out),
            Strategy::HalfBlock => half_block::render(grid, out),
        }
    }
}

/// Strategy and effective scale for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPlan {
    pub strategy: Strategy,
    pub scale: u32,
}

impl RenderPlan {
    /// Choose how to draw an image of `dpi` pixels at the requested `scale`.
    ///
    /// At scale 1 small images are doubled, medium ones drawn as-is and large
    /// ones packed two rows per line. Explicit scales always use full blocks;
    /// images up to [`FULL_BLOCK_MAX_DPI`] get `scale - 1` since full blocks
    /// already draw each pixel two glyphs wide. The requested scale is
    /// clamped to `1..=MAX_SCALE`.
    pub fn select(dpi: usize, scale: u32) -> Self {
        let scale = scale.clamp(1, MAX_SCALE);
        let (strategy, scale) = match (scale, dpi) {
            (1, d) if d <= SMALL_DPI => (Strategy::FullBlock, 2),
            (1, d) if d <= FULL_BLOCK_MAX_DPI => (Strategy::FullBlock, 1),
            (1, _) => (Strategy::HalfBlock, 1),
            (s, d) if d <= FULL_BLOCK_MAX_DPI => (Strategy::FullBlock, s - 1),
            (s, _) => (Strategy::FullBlock, s),
        };
        Self { strategy, scale }
    }

    pub fn for_grid(grid: &PixelGrid, scale: u32) -> Self {
        Self::select(grid.dpi(), scale)
    }

    /// Number of terminal lines this plan produces for `grid`.
    pub fn line_count(&self, grid: &PixelGrid) -> usize {
        match self.strategy {
            Strategy::FullBlock => grid.height() * self.scale as usize,
            Strategy::HalfBlock => grid.height().div_ceil(2),
        }
    }

    /// Number of visible columns per line this plan produces for `grid`.
    pub fn column_count(&self, grid: &PixelGrid) -> usize {
        match self.strategy {
            Strategy::FullBlock => grid.width() * 2 * self.scale as usize,
            Strategy::HalfBlock => grid.width(),
        }
    }
}

/// Render `grid` at the requested `scale` to `out`.
///
/// A write error aborts the render and is returned as-is.
pub fn render<W: Write + ?Sized>(grid: &PixelGrid, scale: u32, out: &mut W) -> io::Result<()> {
    let plan = RenderPlan::for_grid(grid, scale);
    log::debug!(
        "Rendering {}x{} grid (dpi {}) with {} strategy, scale {} (requested {}): {} lines of {} columns",
        grid.width(),
        grid.height(),
        grid.dpi(),
        plan.strategy.name(),
        plan.scale,
        scale,
        plan.line_count(grid),
        plan.column_count(grid)
    );
    plan.strategy.render(grid, plan.scale, out)?;
    out.flush()
}
