//! Read-only movie catalog.
//!
//! The crate loads a fixed set of movie records once at startup and answers
//! four queries over them: all records, one record by id, a name/genre
//! substring search, and the distinct genre list. Loading never aborts the
//! caller; a broken record file yields an empty catalog and an error event.
//! Presentation (routes, templates, message wording) belongs to callers; the
//! `reelshelf-query` binary is one such caller.

use std::path::PathBuf;

pub mod catalog;
pub mod config;
pub mod logging;
mod schema_loader;

pub use catalog::{
    CatalogSource, Movie, MovieId, MovieIdError, MovieIndex, MovieRepository, SearchCriteria,
    SearchOutcome, SearchRequest, load, load_movies, load_movies_from_path, run_search,
};
pub use config::ServiceConfig;
pub use logging::{LogFormat, LoggingConfig, init_logging};
pub use schema_loader::canonical_catalog_schema_path;

/// Path of the bundled record file inside the source tree.
///
/// [`CatalogSource::Bundled`] embeds the same file at compile time; this path
/// is for tooling and tests that want to read it from disk.
pub fn default_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/movies.json")
}
