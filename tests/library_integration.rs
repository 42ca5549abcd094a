//! Integration tests for the art directory and config working together.

use mccs::config::Config;
use mccs::{show, ArtLibrary, Error};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

fn art_dir(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(temp_dir.path().join(name), content).unwrap();
    }
    temp_dir
}

#[test]
fn test_config_dir_and_extension_drive_resolution() {
    let art = art_dir(&[("ditto.pix", "1 1\n200 100 200\n")]);
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[library]\ndir = {:?}\nextension = \"pix\"\n",
            art.path().display().to_string()
        ),
    )
    .unwrap();

    let config = Config::load_from_explicit(&config_path).unwrap();
    let library = ArtLibrary::from_config(&config, None);
    let path = library.resolve("ditto").unwrap();
    assert_eq!(path, art.path().join("ditto.pix"));

    let mut out = Vec::new();
    show(&path, config.render.scale, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("38;2;200;100;200"));
}

#[test]
fn test_unknown_name_reports_name() {
    let art = art_dir(&[("onix.txt", "1 1\n0 0 0\n")]);
    let library = ArtLibrary::new(art.path().to_path_buf(), "txt");
    let err = library.resolve("steelix").unwrap_err();
    assert!(matches!(err, Error::ArtNotFound { .. }));
    assert!(err.to_string().contains("'steelix' not found"));
}

#[test]
fn test_random_choice_covers_library() {
    let art = art_dir(&[
        ("a.txt", "1 1\n0 0 0\n"),
        ("b.txt", "1 1\n0 0 0\n"),
        ("c.txt", "1 1\n0 0 0\n"),
    ]);
    let library = ArtLibrary::new(art.path().to_path_buf(), "txt");
    let mut rng = StdRng::seed_from_u64(1234);

    let seen: HashSet<_> = (0..200)
        .map(|_| library.choose(&mut rng).unwrap())
        .collect();
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_random_choice_renders() {
    let art = art_dir(&[("only.txt", "2 1\n255 0 0 -1 -1 -1\n")]);
    let library = ArtLibrary::new(art.path().to_path_buf(), "txt");
    let path = library.choose(&mut StdRng::seed_from_u64(0)).unwrap();

    let mut out = Vec::new();
    show(&path, 1, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
}

#[test]
fn test_empty_library_cannot_choose() {
    let art = art_dir(&[]);
    let library = ArtLibrary::new(art.path().to_path_buf(), "txt");
    assert!(matches!(
        library.choose(&mut StdRng::seed_from_u64(0)),
        Err(Error::EmptyLibrary { .. })
    ));
    assert!(library.names().unwrap().is_empty());
}
