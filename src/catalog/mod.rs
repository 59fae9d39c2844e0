//! Movie catalog wiring.
//!
//! This module wraps the JSON record file under `data/movies.json` so callers
//! can load a validated snapshot and query it by id, title, and genre. Use
//! `MovieIndex` for lookups, or depend on `MovieRepository` when a fake may
//! stand in for the real catalog.

pub mod identity;
pub mod index;
pub mod model;
pub mod query;
pub mod repository;

pub use identity::{MovieId, MovieIdError};
pub use index::MovieIndex;
pub use model::{CatalogSource, Movie, load, load_movies, load_movies_from_path};
pub use query::{SearchCriteria, SearchOutcome, SearchRequest, run_search};
pub use repository::MovieRepository;
