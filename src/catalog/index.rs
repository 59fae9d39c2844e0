//! Indexed, read-only view of the movie catalog.
//!
//! The index keeps records in file order and adds an id lookup table built in
//! one pass. Nothing mutates it after construction, so one instance can be
//! shared across threads without locking.

use crate::catalog::identity::MovieId;
use crate::catalog::model::{CatalogSource, Movie, load};
use crate::catalog::query::SearchCriteria;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Default)]
/// Movie records plus a derived index keyed by id.
pub struct MovieIndex {
    movies: Vec<Movie>,
    by_id: HashMap<MovieId, usize>,
}

impl MovieIndex {
    /// Index `movies`, keeping their order.
    ///
    /// The loader rejects duplicate ids; if a caller passes them anyway, the
    /// first record with a given id is the one `movie_by_id` returns.
    pub fn new(movies: Vec<Movie>) -> Self {
        let mut by_id = HashMap::with_capacity(movies.len());
        for (position, movie) in movies.iter().enumerate() {
            if by_id.contains_key(&movie.id) {
                tracing::warn!(id = %movie.id, position, "duplicate movie id; keeping first");
                continue;
            }
            by_id.insert(movie.id, position);
        }
        Self { movies, by_id }
    }

    /// Load `source` and index it. Load failures leave the index empty.
    pub fn load(source: &CatalogSource) -> Self {
        Self::new(load(source))
    }

    /// Every record in load order.
    pub fn all_movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Resolve a record by id.
    ///
    /// Zero, negative, and unknown ids all return `None`.
    pub fn movie_by_id(&self, id: MovieId) -> Option<&Movie> {
        if !id.is_positive() {
            return None;
        }
        self.by_id.get(&id).map(|&position| &self.movies[position])
    }

    /// Records matching `criteria`, in load order.
    ///
    /// A positive id narrows the candidates to that one record, which must
    /// still pass the name and genre filters.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&Movie> {
        tracing::debug!(
            name = ?criteria.name,
            id = ?criteria.id,
            genre = ?criteria.genre,
            "searching movie catalog"
        );

        let results: Vec<&Movie> = match criteria.selected_id() {
            Some(id) => self
                .movie_by_id(id)
                .filter(|movie| criteria.matches(movie))
                .into_iter()
                .collect(),
            None => self
                .movies
                .iter()
                .filter(|movie| criteria.matches(movie))
                .collect(),
        };

        tracing::debug!(count = results.len(), "movie search finished");
        results
    }

    /// Distinct genre strings in ascending ordinal order.
    ///
    /// Composite values such as `Crime/Drama` are kept whole.
    pub fn all_genres(&self) -> Vec<&str> {
        self.movies
            .iter()
            .map(|movie| movie.genre.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str, genre: &str) -> Movie {
        Movie {
            id: MovieId(id),
            title: title.to_string(),
            director: "Fixture".to_string(),
            year: 1999,
            genre: genre.to_string(),
            description: String::new(),
            duration: 120,
            rating: 8.0,
        }
    }

    fn sample_index() -> MovieIndex {
        MovieIndex::new(vec![
            movie(3, "The Prison Escape", "Drama"),
            movie(1, "Dream Heist", "Action/Sci-Fi"),
            movie(2, "The Family Boss", "Crime/Drama"),
            movie(7, "Space Wars", "Adventure/Sci-Fi"),
        ])
    }

    #[test]
    fn all_movies_keeps_input_order() {
        let index = sample_index();
        let ids: Vec<i64> = index.all_movies().iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2, 7]);
    }

    #[test]
    fn movie_by_id_rejects_non_positive_and_unknown() {
        let index = sample_index();
        assert!(index.movie_by_id(MovieId(0)).is_none());
        assert!(index.movie_by_id(MovieId(-1)).is_none());
        assert!(index.movie_by_id(MovieId(999)).is_none());
        assert_eq!(
            index.movie_by_id(MovieId(2)).map(|m| m.title.as_str()),
            Some("The Family Boss")
        );
    }

    #[test]
    fn duplicate_ids_keep_first_for_lookup() {
        let index = MovieIndex::new(vec![
            movie(5, "First", "Drama"),
            movie(5, "Second", "Drama"),
        ]);
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.movie_by_id(MovieId(5)).map(|m| m.title.as_str()),
            Some("First")
        );
    }

    #[test]
    fn search_without_criteria_returns_everything_in_order() {
        let index = sample_index();
        let results = index.search(&SearchCriteria::new());
        let ids: Vec<i64> = results.iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2, 7]);
    }

    #[test]
    fn search_by_id_still_applies_filters() {
        let index = sample_index();
        let hit = index.search(&SearchCriteria::new().id(3).name("prison"));
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].id, MovieId(3));

        assert!(index
            .search(&SearchCriteria::new().id(3).name("nonexistentmovie"))
            .is_empty());
        assert!(index
            .search(&SearchCriteria::new().id(3).genre("sci"))
            .is_empty());
        assert!(index.search(&SearchCriteria::new().id(999)).is_empty());
    }

    #[test]
    fn search_with_non_positive_id_scans_catalog() {
        let index = sample_index();
        let results = index.search(&SearchCriteria::new().id(-1).genre("drama"));
        let ids: Vec<i64> = results.iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn search_by_genre_keeps_load_order() {
        let index = sample_index();
        let results = index.search(&SearchCriteria::new().genre("SCI"));
        let ids: Vec<i64> = results.iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![1, 7]);
    }

    #[test]
    fn genres_are_distinct_exact_and_sorted() {
        let index = sample_index();
        assert_eq!(
            index.all_genres(),
            vec!["Action/Sci-Fi", "Adventure/Sci-Fi", "Crime/Drama", "Drama"]
        );
    }

    #[test]
    fn genre_sort_is_ordinal() {
        let index = MovieIndex::new(vec![
            movie(1, "a", "drama"),
            movie(2, "b", "Drama"),
            movie(3, "c", "Zombie"),
        ]);
        assert_eq!(index.all_genres(), vec!["Drama", "Zombie", "drama"]);
    }

    #[test]
    fn empty_index_answers_every_query() {
        let index = MovieIndex::default();
        assert!(index.is_empty());
        assert!(index.all_movies().is_empty());
        assert!(index.movie_by_id(MovieId(1)).is_none());
        assert!(index.search(&SearchCriteria::new().name("x")).is_empty());
        assert!(index.all_genres().is_empty());
    }

    #[test]
    fn load_falls_back_to_empty_index() {
        let source = CatalogSource::Inline {
            label: "broken".to_string(),
            json: "{ not json".to_string(),
        };
        assert!(MovieIndex::load(&source).is_empty());
    }
}
