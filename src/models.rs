//! Catalog data types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub year: i32,
}

/// Body of create and update requests. Any `id` in the body is ignored;
/// ids are assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieInput {
    pub title: String,
    pub director: String,
    pub year: i32,
}

impl MovieInput {
    pub fn into_movie(self, id: i64) -> Movie {
        Movie {
            id,
            title: self.title,
            director: self.director,
            year: self.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_ignores_client_id() {
        let input: MovieInput = serde_json::from_str(
            r#"{"id": 99, "title": "Heat", "director": "Michael Mann", "year": 1995}"#,
        )
        .unwrap();

        let movie = input.into_movie(3);
        assert_eq!(movie.id, 3);
        assert_eq!(movie.title, "Heat");
    }

    #[test]
    fn test_input_requires_all_fields() {
        let result = serde_json::from_str::<MovieInput>(r#"{"title": "Heat"}"#);
        assert!(result.is_err());
    }
}
