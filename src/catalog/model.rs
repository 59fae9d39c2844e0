//! Deserializable representation of the movie record file.
//!
//! The file is a JSON array of objects with eight required fields. Loading is
//! all-or-nothing: the raw JSON is checked against the bundled schema, decoded
//! into [`Movie`] values, then checked for the invariants the schema cannot
//! express (unique ids, non-blank titles). Any failure rejects the whole file;
//! missing fields are never filled with defaults.

use crate::catalog::identity::MovieId;
use crate::schema_loader::{bundled_catalog_schema, validate_instance};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const BUNDLED_MOVIES: &str = include_str!("../../data/movies.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One immutable movie entry.
pub struct Movie {
    pub id: MovieId,
    #[serde(rename = "movieName")]
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
    pub description: String,
    /// Running time in minutes.
    pub duration: u32,
    #[serde(rename = "imdbRating")]
    pub rating: f64,
}

/// Where the record file comes from.
#[derive(Clone, Debug)]
pub enum CatalogSource {
    /// The `data/movies.json` file compiled into the crate.
    Bundled,
    /// A JSON file on disk.
    File(PathBuf),
    /// JSON text held in memory, labelled for diagnostics.
    Inline { label: String, json: String },
}

impl CatalogSource {
    /// Use `path` when given, otherwise the bundled records.
    pub fn from_optional_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => CatalogSource::File(path),
            None => CatalogSource::Bundled,
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            CatalogSource::Bundled => Ok(BUNDLED_MOVIES.to_string()),
            CatalogSource::File(path) => {
                if !path.is_file() {
                    bail!("movie catalog not found: {}", path.display());
                }
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
            }
            CatalogSource::Inline { json, .. } => Ok(json.clone()),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Bundled => write!(f, "bundled data/movies.json"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Inline { label, .. } => write!(f, "{label}"),
        }
    }
}

/// Read, validate, and decode every record from `source`.
///
/// Returns records in file order. Fails on unreadable or malformed input, on
/// any record that does not match the schema, and on duplicate ids.
pub fn load_movies(source: &CatalogSource) -> Result<Vec<Movie>> {
    let origin = source.to_string();
    let data = source.read()?;
    parse_movies(&data, &origin).with_context(|| format!("loading {origin}"))
}

/// Startup form of [`load_movies`]: failures are logged and yield no records.
///
/// The service keeps running with an empty catalog instead of refusing to
/// start when the record file is missing or broken.
pub fn load(source: &CatalogSource) -> Vec<Movie> {
    match load_movies(source) {
        Ok(movies) => {
            tracing::info!(source = %source, count = movies.len(), "loaded movie catalog");
            movies
        }
        Err(err) => {
            tracing::error!(source = %source, "Failed to load movie catalog: {err:#}");
            Vec::new()
        }
    }
}

/// Read and decode a record file from disk.
pub fn load_movies_from_path(path: &Path) -> Result<Vec<Movie>> {
    load_movies(&CatalogSource::File(path.to_path_buf()))
}

fn parse_movies(data: &str, origin: &str) -> Result<Vec<Movie>> {
    let value: Value = serde_json::from_str(data).context("parsing movie catalog JSON")?;
    let schema = bundled_catalog_schema()?;
    validate_instance(&schema, &value, origin)?;

    let movies: Vec<Movie> =
        serde_json::from_value(value).context("decoding movie records")?;
    validate_movies(&movies)?;
    Ok(movies)
}

fn validate_movies(movies: &[Movie]) -> Result<()> {
    let mut seen: BTreeSet<MovieId> = BTreeSet::new();
    for (position, movie) in movies.iter().enumerate() {
        if !movie.id.is_positive() {
            bail!("record {position} has non-positive id {}", movie.id);
        }
        if movie.title.trim().is_empty() {
            bail!("movie {} has a blank title", movie.id);
        }
        if !(0.0..=10.0).contains(&movie.rating) {
            bail!(
                "movie {} has rating {} outside 0.0-10.0",
                movie.id,
                movie.rating
            );
        }
        if !seen.insert(movie.id) {
            bail!("duplicate movie id {}", movie.id);
        }
    }
    Ok(())
}
