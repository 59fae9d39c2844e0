//! Read-only lookup capability over a movie catalog.
//!
//! Callers depend on `MovieRepository` rather than a concrete index so tests
//! can substitute in-memory fakes. `MovieIndex` is the production
//! implementation.

use crate::catalog::identity::MovieId;
use crate::catalog::index::MovieIndex;
use crate::catalog::model::Movie;
use crate::catalog::query::SearchCriteria;

/// The four catalog queries. Implementations never mutate and never fail.
pub trait MovieRepository: Send + Sync {
    /// Every record in load order.
    fn all_movies(&self) -> &[Movie];

    /// The record with `id`; `None` for zero, negative, or unknown ids.
    fn movie_by_id(&self, id: MovieId) -> Option<&Movie>;

    /// Records matching `criteria`, in load order.
    fn search(&self, criteria: &SearchCriteria) -> Vec<&Movie>;

    /// Distinct genre strings, sorted ascending.
    fn all_genres(&self) -> Vec<&str>;
}

impl MovieRepository for MovieIndex {
    fn all_movies(&self) -> &[Movie] {
        MovieIndex::all_movies(self)
    }

    fn movie_by_id(&self, id: MovieId) -> Option<&Movie> {
        MovieIndex::movie_by_id(self, id)
    }

    fn search(&self, criteria: &SearchCriteria) -> Vec<&Movie> {
        MovieIndex::search(self, criteria)
    }

    fn all_genres(&self) -> Vec<&str> {
        MovieIndex::all_genres(self)
    }
}
