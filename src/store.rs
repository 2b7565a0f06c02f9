//! Movie Store
//! Mission: Own the catalog behind a read/write lock; CRUD is the only way in

use crate::models::{Movie, MovieInput};
use parking_lot::RwLock;

struct Catalog {
    movies: Vec<Movie>,
    next_id: i64,
}

/// In-memory catalog shared by all request tasks.
///
/// Every read takes the shared lock and every mutation the exclusive one, so
/// two requests racing on the same id never lose an update.
pub struct MovieStore {
    inner: RwLock<Catalog>,
}

impl MovieStore {
    pub fn new(movies: Vec<Movie>) -> Self {
        let next_id = movies.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Catalog { movies, next_id }),
        }
    }

    /// Store pre-filled with the two demo entries
    pub fn seeded() -> Self {
        Self::new(vec![
            Movie {
                id: 1,
                title: "Inception".to_string(),
                director: "Christopher Nolan".to_string(),
                year: 2010,
            },
            Movie {
                id: 2,
                title: "BlacKkKlansman".to_string(),
                director: "Spike Lee".to_string(),
                year: 2018,
            },
        ])
    }

    pub fn list(&self) -> Vec<Movie> {
        self.inner.read().movies.clone()
    }

    pub fn get(&self, id: i64) -> Option<Movie> {
        self.inner.read().movies.iter().find(|m| m.id == id).cloned()
    }

    /// Insert with the next free id. Ids are never reused, even after delete.
    pub fn create(&self, input: MovieInput) -> Movie {
        let mut catalog = self.inner.write();
        let movie = input.into_movie(catalog.next_id);
        catalog.next_id += 1;
        catalog.movies.push(movie.clone());
        movie
    }

    /// Replace title, director and year; the id stays
    pub fn update(&self, id: i64, input: MovieInput) -> Option<Movie> {
        let mut catalog = self.inner.write();
        let movie = catalog.movies.iter_mut().find(|m| m.id == id)?;
        movie.title = input.title;
        movie.director = input.director;
        movie.year = input.year;
        Some(movie.clone())
    }

    /// Returns false when nothing had that id
    pub fn delete(&self, id: i64) -> bool {
        let mut catalog = self.inner.write();
        match catalog.movies.iter().position(|m| m.id == id) {
            Some(index) => {
                catalog.movies.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
