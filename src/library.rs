//! Art directory: listing, name resolution and random selection.

use rand::seq::SliceRandom;
use rand::Rng;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Error;

/// A directory of art files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtLibrary {
    dir: PathBuf,
    extension: String,
}

impl ArtLibrary {
    /// Create a library over `dir`. Names that don't match a file as given
    /// are retried with `.{extension}` appended.
    pub fn new(dir: PathBuf, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        let extension = extension.trim_start_matches('.').to_string();
        Self { dir, extension }
    }

    /// Library described by `config`, with `dir_override` taking precedence
    /// over the configured directory.
    pub fn from_config(config: &Config, dir_override: Option<PathBuf>) -> Self {
        let dir = dir_override.unwrap_or_else(|| config.art_dir());
        Self::new(dir, config.library.extension.as_str())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    fn ensure_exists(&self) -> Result<(), Error> {
        if self.dir.is_dir() {
            Ok(())
        } else {
            Err(Error::MissingDirectory {
                dir: self.dir.clone(),
            })
        }
    }

    /// Every regular file in the directory, sorted by path.
    pub fn files(&self) -> Result<Vec<PathBuf>, Error> {
        self.ensure_exists()?;
        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Display names of the art files: file names without their extension.
    pub fn names(&self) -> Result<Vec<String>, Error> {
        let mut names: Vec<String> = self
            .files()?
            .iter()
            .filter_map(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .collect();
        names.sort();
        Ok(names)
    }

    /// Path of the art file called `name`, trying `name` as given first and
    /// then `name.{extension}`.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, Error> {
        self.ensure_exists()?;

        let exact = self.dir.join(name);
        if exact.is_file() {
            log::info!("Resolved '{}' to {}", name, exact.display());
            return Ok(exact);
        }

        if !self.extension.is_empty() {
            let with_extension = self.dir.join(format!("{}.{}", name, self.extension));
            if with_extension.is_file() {
                log::info!("Resolved '{}' to {}", name, with_extension.display());
                return Ok(with_extension);
            }
        }

        Err(Error::ArtNotFound {
            name: name.to_string(),
            dir: self.dir.clone(),
        })
    }

    /// A uniformly chosen art file.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<PathBuf, Error> {
        let files = self.files()?;
        let choice = files.choose(rng).cloned().ok_or_else(|| Error::EmptyLibrary {
            dir: self.dir.clone(),
        })?;
        log::info!("Randomly selected {}", choice.display());
        Ok(choice)
    }
}
