//! Parser for the whitespace-separated pixel text format.
//!
//! ```text
//! <width> <height>
//! <r g b> <r g b> ...    (width triples, row 0)
//! ...
//! ```
//!
//! Lines holding only whitespace are skipped. `-1 -1 -1` is a transparent
//! pixel; every other channel must be in `0..=255`. Rows past the declared
//! height are ignored.

use super::color::{Color, TRANSPARENT_CHANNEL};
use super::pixel_grid::PixelGrid;

/// Reasons a pixel file is rejected. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("file is empty")]
    Empty,

    #[error("file is not valid UTF-8 text")]
    Encoding,

    #[error("line {line}: header must be `<width> <height>`, found {found} value(s)")]
    BadHeader { line: usize, found: usize },

    #[error("width and height must be positive, got {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },

    #[error("line {line}: `{token}` is not an integer")]
    InvalidToken { line: usize, token: String },

    #[error("line {line}: {tokens} value(s) do not split into r g b triples")]
    IncompleteTriple { line: usize, tokens: usize },

    #[error("line {line}: expected {expected} pixel(s), found {found}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}, pixel {pixel}: channel value {value} is outside 0..=255")]
    ChannelOutOfRange { line: usize, pixel: usize, value: i64 },

    #[error("expected {expected} row(s), found {found}")]
    MissingRows { expected: usize, found: usize },

    #[error("a {width}x{height} grid needs {expected} cells, got {found}")]
    CellCount {
        width: usize,
        height: usize,
        expected: usize,
        found: usize,
    },
}

/// Parse the text format into a [`PixelGrid`].
pub fn parse(input: &str) -> Result<PixelGrid, FormatError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text))
        .filter(|(_, text)| !text.trim().is_empty());

    let (header_line, header) = lines.next().ok_or(FormatError::Empty)?;
    let (width, height) = parse_header(header_line, header)?;

    let mut cells = Vec::new();
    let mut rows = 0;
    while rows < height {
        let Some((line, text)) = lines.next() else {
            break;
        };
        parse_row(line, text, width, &mut cells)?;
        rows += 1;
    }

    if rows < height {
        return Err(FormatError::MissingRows {
            expected: height,
            found: rows,
        });
    }

    let extra = lines.count();
    if extra > 0 {
        log::debug!(
            "Ignoring {} row(s) past the declared height of {}",
            extra,
            height
        );
    }

    PixelGrid::new(width, height, cells)
}

fn parse_header(line: usize, text: &str) -> Result<(usize, usize), FormatError> {
    let values = parse_integers(line, text)?;
    let &[width, height] = values.as_slice() else {
        return Err(FormatError::BadHeader {
            line,
            found: values.len(),
        });
    };
    match (usize::try_from(width), usize::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(FormatError::InvalidDimension { width, height }),
    }
}

fn parse_row(
    line: usize,
    text: &str,
    width: usize,
    cells: &mut Vec<Color>,
) -> Result<(), FormatError> {
    let values = parse_integers(line, text)?;
    if values.len() % 3 != 0 {
        return Err(FormatError::IncompleteTriple {
            line,
            tokens: values.len(),
        });
    }
    let found = values.len() / 3;
    if found != width {
        return Err(FormatError::RowWidth {
            line,
            expected: width,
            found,
        });
    }

    for (i, triple) in values.chunks_exact(3).enumerate() {
        cells.push(parse_triple(line, i + 1, [triple[0], triple[1], triple[2]])?);
    }
    Ok(())
}

fn parse_triple(line: usize, pixel: usize, triple: [i64; 3]) -> Result<Color, FormatError> {
    if triple == [TRANSPARENT_CHANNEL; 3] {
        return Ok(Color::Transparent);
    }
    let channel = |value: i64| {
        u8::try_from(value).map_err(|_| FormatError::ChannelOutOfRange { line, pixel, value })
    };
    let [r, g, b] = triple;
    Ok(Color::rgb(channel(r)?, channel(g)?, channel(b)?))
}

fn parse_integers(line: usize, text: &str) -> Result<Vec<i64>, FormatError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| FormatError::InvalidToken {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}
