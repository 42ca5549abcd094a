//! Decoder conformance tests for the pixel text format.

use mccs::grid::{decode, parse, Color, FormatError, PixelGrid};
use mccs::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use tempfile::TempDir;

/// Seeded random grid, about a quarter of it transparent.
fn generated_grid(width: usize, height: usize, seed: u64) -> PixelGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let cells = (0..width * height)
        .map(|_| {
            if rng.gen_bool(0.25) {
                Color::Transparent
            } else {
                Color::rgb(rng.gen(), rng.gen(), rng.gen())
            }
        })
        .collect();
    PixelGrid::new(width, height, cells).unwrap()
}

#[test]
fn test_serialized_grids_decode_identically() {
    for (i, (width, height)) in [(1, 1), (2, 1), (1, 7), (12, 12), (31, 17)]
        .into_iter()
        .enumerate()
    {
        let grid = generated_grid(width, height, 0x9e37_79b9 + i as u64);
        let text = grid.to_text();
        assert_eq!(parse(&text).unwrap(), grid, "{}x{}", width, height);
    }
}

#[test]
fn test_decoded_grid_is_rectangular() {
    let grid = parse("3 2\n1 1 1 2 2 2 3 3 3\n4 4 4 -1 -1 -1 6 6 6\n").unwrap();
    assert_eq!(grid.rows().count(), grid.height());
    assert!(grid.rows().all(|row| row.len() == grid.width()));
    assert_eq!(grid.get(1, 1), Some(Color::Transparent));
    assert_eq!(grid.get(2, 1), Some(Color::rgb(6, 6, 6)));
}

#[test]
fn test_declared_height_with_too_few_rows() {
    let result = parse("3 2\n0 0 0 0 0 0 0 0 0\n");
    assert!(matches!(
        result,
        Err(FormatError::MissingRows {
            expected: 2,
            found: 1
        })
    ));
}

#[test]
fn test_channel_value_256() {
    let result = parse("1 1\n0 256 0\n");
    assert!(matches!(
        result,
        Err(FormatError::ChannelOutOfRange { value: 256, .. })
    ));
}

#[test]
fn test_header_only_file() {
    assert!(matches!(
        parse("4 4\n"),
        Err(FormatError::MissingRows {
            expected: 4,
            found: 0
        })
    ));
}

#[test]
fn test_errors_name_the_line() {
    let err = parse("2 2\n0 0 0 0 0 0\n0 0 0 0 0 x\n").unwrap_err();
    assert_eq!(err.to_string(), "line 3: `x` is not an integer");

    let err = parse("2 1\n0 0 0 0 0 999\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "line 2, pixel 2: channel value 999 is outside 0..=255"
    );
}

#[test]
fn test_decode_from_disk_matches_parse() {
    let temp_dir = TempDir::new().unwrap();
    let grid = generated_grid(9, 4, 42);
    let path = temp_dir.path().join("gen.txt");
    fs::write(&path, grid.to_text()).unwrap();

    assert_eq!(decode(&path).unwrap(), grid);
}

#[test]
fn test_decode_error_message_includes_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.txt");
    fs::write(&path, "2\n").unwrap();

    let err = decode(&path).unwrap_err();
    assert!(matches!(err, Error::Format { .. }));
    let message = err.to_string();
    assert!(message.contains("broken.txt"));
    assert!(message.contains("header"));
}
