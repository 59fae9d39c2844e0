#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use reelshelf::{Movie, MovieId, MovieRepository, SearchCriteria};
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

pub fn query_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_reelshelf-query"))
}

/// Run `cmd` and return its output; fails unless the exit code is `expected`.
pub fn run_command(mut cmd: Command, expected: i32) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.code() == Some(expected) {
        Ok(output)
    } else {
        bail!(
            "command {:?} exited with {:?} (expected {expected})\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn stdout_json(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).context("stdout was not JSON")
}

/// Write `value` to a temporary file and keep it alive for the caller.
pub fn write_catalog(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate catalog file")?;
    serde_json::to_writer(&mut file, value)?;
    file.flush()?;
    Ok(file)
}

pub fn movie(id: i64, title: &str, genre: &str) -> Movie {
    Movie {
        id: MovieId(id),
        title: title.to_string(),
        director: "Fixture Director".to_string(),
        year: 2000,
        genre: genre.to_string(),
        description: "fixture".to_string(),
        duration: 100,
        rating: 7.0,
    }
}

/// In-memory stand-in for a catalog; answers by linear scan.
pub struct FakeRepository {
    pub movies: Vec<Movie>,
}

impl MovieRepository for FakeRepository {
    fn all_movies(&self) -> &[Movie] {
        &self.movies
    }

    fn movie_by_id(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id && id.is_positive())
    }

    fn search(&self, criteria: &SearchCriteria) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|m| criteria.selected_id().is_none_or(|id| m.id == id))
            .filter(|m| criteria.matches(m))
            .collect()
    }

    fn all_genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = self.movies.iter().map(|m| m.genre.as_str()).collect();
        genres.sort_unstable();
        genres.dedup();
        genres
    }
}
