use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Numeric identifier of a movie record.
///
/// Catalog files only carry positive ids, but caller-supplied ids are not
/// checked on construction: zero and negative values are representable and
/// simply never resolve.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub i64);

impl MovieId {
    /// True for ids that can name a record (strictly greater than zero).
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Parse raw id text as supplied by a form or command line.
    ///
    /// Surrounding whitespace is ignored and blank input yields `Ok(None)`.
    /// Text that is not an integer, or an integer below one, is reported as a
    /// [`MovieIdError`] so callers can tell it apart from an empty result.
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, MovieIdError> {
        let Some(text) = raw.map(str::trim).filter(|text| !text.is_empty()) else {
            return Ok(None);
        };
        let value: i64 = text
            .parse()
            .map_err(|_| MovieIdError::NotANumber(text.to_string()))?;
        if value <= 0 {
            return Err(MovieIdError::NotPositive(value));
        }
        Ok(Some(MovieId(value)))
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MovieId {
    fn from(value: i64) -> Self {
        MovieId(value)
    }
}

/// Raw id text that could not be turned into a usable [`MovieId`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MovieIdError {
    #[error("movie id '{0}' is not a number")]
    NotANumber(String),
    #[error("movie id {0} must be a positive number")]
    NotPositive(i64),
}

impl MovieIdError {
    /// Stable machine-readable label for structured output.
    pub fn kind(&self) -> &'static str {
        match self {
            MovieIdError::NotANumber(_) => "not_a_number",
            MovieIdError::NotPositive(_) => "not_positive",
        }
    }
}
