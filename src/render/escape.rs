//! ANSI truecolor escapes and the line painter that emits them.
//!
//! The painter tracks which foreground and background colors are active on
//! the terminal and only writes the escapes needed to move from that state
//! to the one the next glyph asks for.

use std::io::{self, Write};

use crate::grid::Rgb;

/// Clears every active color attribute.
pub const RESET: &str = "\x1b[0m";

/// Which half of a character cell a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Foreground,
    Background,
}

impl Layer {
    /// SGR parameter selecting a 24-bit color for this layer.
    pub fn code(self) -> u8 {
        match self {
            Layer::Foreground => 38,
            Layer::Background => 48,
        }
    }
}

/// ESC[38;2;R;G;Bm for foreground, ESC[48;2;R;G;Bm for background.
pub fn color(rgb: Rgb, layer: Layer) -> String {
    format!("\x1b[{};2;{};{};{}m", layer.code(), rgb.r, rgb.g, rgb.b)
}

/// The colors a glyph needs active when it is written. `None` means the
/// terminal default for that layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pen {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
}

impl Pen {
    /// Terminal defaults on both layers.
    pub const PLAIN: Pen = Pen { fg: None, bg: None };

    pub fn new(fg: Option<Rgb>, bg: Option<Rgb>) -> Self {
        Self { fg, bg }
    }

    /// Same color on both layers, so a glyph renders as a solid cell.
    pub fn solid(rgb: Rgb) -> Self {
        Self::new(Some(rgb), Some(rgb))
    }

    /// True if moving from `self` to `next` turns off a layer that is set.
    fn drops_any(&self, next: &Pen) -> bool {
        (self.fg.is_some() && next.fg.is_none()) || (self.bg.is_some() && next.bg.is_none())
    }
}

/// Builds one output line at a time, emitting escape transitions only.
///
/// Every finished line ends with a reset, so no color state carries over
/// into the next line.
#[derive(Debug, Default)]
pub struct Painter {
    line: String,
    active: Pen,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` drawn with `pen`.
    pub fn paint(&mut self, pen: Pen, text: &str) {
        self.set_pen(pen);
        self.line.push_str(text);
    }

    fn set_pen(&mut self, pen: Pen) {
        if pen == self.active {
            return;
        }

        // Turning a layer off goes through a full reset.
        let mut from = self.active;
        if from.drops_any(&pen) {
            self.line.push_str(RESET);
            from = Pen::PLAIN;
        }

        if pen.bg != from.bg {
            if let Some(bg) = pen.bg {
                self.line.push_str(&color(bg, Layer::Background));
            }
        }
        if pen.fg != from.fg {
            if let Some(fg) = pen.fg {
                self.line.push_str(&color(fg, Layer::Foreground));
            }
        }
        self.active = pen;
    }

    /// Terminate the current line with a reset and a newline, then write it.
    pub fn finish_line<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<()> {
        self.line.push_str(RESET);
        self.line.push('\n');
        let result = out.write_all(self.line.as_bytes());
        self.line.clear();
        self.active = Pen::PLAIN;
        result
    }
}
