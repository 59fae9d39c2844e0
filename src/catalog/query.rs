//! Search criteria and the record predicate.
//!
//! `SearchCriteria` is the typed form the index consumes. `SearchRequest`
//! carries raw form-style text and turns it into criteria, keeping the one
//! caller-visible failure (bad id text) separate from "nothing matched".

use crate::catalog::identity::{MovieId, MovieIdError};
use crate::catalog::model::Movie;
use crate::catalog::repository::MovieRepository;
use serde::Serialize;

/// Optional filters for a catalog search. Every axis is independent and the
/// axes combine with logical AND.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Case-insensitive substring of the title.
    pub name: Option<String>,
    /// Narrows the search to a single record when positive.
    pub id: Option<MovieId>,
    /// Case-insensitive substring of the genre string.
    pub genre: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(MovieId(id));
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// The id, if it can select a record.
    pub fn selected_id(&self) -> Option<MovieId> {
        self.id.filter(|id| id.is_positive())
    }

    /// True when no axis would filter anything.
    pub fn is_empty(&self) -> bool {
        self.selected_id().is_none()
            && needle(self.name.as_deref()).is_none()
            && needle(self.genre.as_deref()).is_none()
    }

    /// Name and genre filters. The id axis is applied by the index.
    pub fn matches(&self, movie: &Movie) -> bool {
        contains_needle(&movie.title, self.name.as_deref())
            && contains_needle(&movie.genre, self.genre.as_deref())
    }
}

fn needle(filter: Option<&str>) -> Option<String> {
    filter
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase)
}

fn contains_needle(haystack: &str, filter: Option<&str>) -> bool {
    match needle(filter) {
        Some(needle) => haystack.to_lowercase().contains(&needle),
        None => true,
    }
}

/// Search parameters exactly as a form or command line supplies them.
#[derive(Clone, Debug, Default)]
pub struct SearchRequest {
    pub name: Option<String>,
    pub id: Option<String>,
    pub genre: Option<String>,
}

impl SearchRequest {
    /// Trim the text fields and parse the id text.
    pub fn parse(&self) -> Result<SearchCriteria, MovieIdError> {
        Ok(SearchCriteria {
            name: trimmed(self.name.as_deref()),
            id: MovieId::parse_optional(self.id.as_deref())?,
            genre: trimmed(self.genre.as_deref()),
        })
    }
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// What a caller should present after handling a [`SearchRequest`].
///
/// Carries data only; wording is left to the caller.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome<'a> {
    /// Search ran; `movies` may be empty.
    Matches { movies: Vec<&'a Movie> },
    /// Nothing to search for; the whole catalog is returned.
    NoCriteria { movies: Vec<&'a Movie> },
    /// The id text was unusable; the whole catalog is returned.
    InvalidId {
        #[serde(serialize_with = "serialize_id_error")]
        error: MovieIdError,
        movies: Vec<&'a Movie>,
    },
}

impl<'a> SearchOutcome<'a> {
    pub fn movies(&self) -> &[&'a Movie] {
        match self {
            SearchOutcome::Matches { movies }
            | SearchOutcome::NoCriteria { movies }
            | SearchOutcome::InvalidId { movies, .. } => movies,
        }
    }

    /// A search ran and found nothing.
    pub fn is_empty_match(&self) -> bool {
        matches!(self, SearchOutcome::Matches { movies } if movies.is_empty())
    }
}

fn serialize_id_error<S>(error: &MovieIdError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeStruct;
    let mut state = serializer.serialize_struct("MovieIdError", 2)?;
    state.serialize_field("kind", error.kind())?;
    match error {
        MovieIdError::NotANumber(text) => state.serialize_field("input", text)?,
        MovieIdError::NotPositive(value) => state.serialize_field("input", &value.to_string())?,
    }
    state.end()
}

/// Handle a raw request against any repository.
pub fn run_search<'a, R>(repo: &'a R, request: &SearchRequest) -> SearchOutcome<'a>
where
    R: MovieRepository + ?Sized,
{
    let criteria = match request.parse() {
        Ok(criteria) => criteria,
        Err(error) => {
            tracing::warn!(input = ?request.id, "invalid movie id in search request: {error}");
            return SearchOutcome::InvalidId {
                error,
                movies: repo.all_movies().iter().collect(),
            };
        }
    };

    if criteria.is_empty() {
        return SearchOutcome::NoCriteria {
            movies: repo.all_movies().iter().collect(),
        };
    }

    SearchOutcome::Matches {
        movies: repo.search(&criteria),
    }
}
