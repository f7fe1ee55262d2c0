use common::Validate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MAX_RATING: f64 = 5.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub genres: Vec<String>,
}

/// Ratings out of 5 keyed by movie title. BTreeMap keeps iteration order
/// stable so recommendations are deterministic.
pub type Ratings = BTreeMap<String, f64>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingProfile {
    pub user: String,
    pub ratings: Ratings,
}

/// The immutable movie database plus the sample raters used for user-based
/// collaborative filtering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub movies: Vec<Movie>,
    pub sample_ratings: Vec<RatingProfile>,
}

impl Catalog {
    pub fn movie_by_title(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.title == title)
    }

    /// All genres across the catalog, sorted and deduplicated.
    pub fn all_genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = self
            .movies
            .iter()
            .flat_map(|movie| movie.genres.iter().cloned())
            .collect();
        genres.sort();
        genres.dedup();
        genres
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<(), String> {
        if self.movies.is_empty() {
            return Err("Catalog must contain at least one movie".to_string());
        }

        for movie in &self.movies {
            if movie.title.trim().is_empty() {
                return Err(format!("Movie {} has an empty title", movie.id));
            }
            if movie.genres.is_empty() {
                return Err(format!("Movie '{}' has no genres", movie.title));
            }
            let duplicates = self
                .movies
                .iter()
                .filter(|other| other.title == movie.title)
                .count();
            if duplicates > 1 {
                return Err(format!("Movie title '{}' is duplicated", movie.title));
            }
        }

        for profile in &self.sample_ratings {
            for (title, rating) in &profile.ratings {
                if self.movie_by_title(title).is_none() {
                    return Err(format!(
                        "User '{}' rates unknown movie '{}'",
                        profile.user, title
                    ));
                }
                if !(0.0..=MAX_RATING).contains(rating) {
                    return Err(format!(
                        "User '{}' rates '{}' outside 0-{}",
                        profile.user, title, MAX_RATING
                    ));
                }
            }
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        fn movie(id: u32, title: &str, genres: &[&str]) -> Movie {
            Movie {
                id,
                title: title.to_string(),
                genres: genres.iter().map(|g| g.to_string()).collect(),
            }
        }

        fn profile(user: &str, ratings: &[(&str, f64)]) -> RatingProfile {
            RatingProfile {
                user: user.to_string(),
                ratings: ratings
                    .iter()
                    .map(|(title, rating)| (title.to_string(), *rating))
                    .collect(),
            }
        }

        Self {
            movies: vec![
                movie(1, "The Matrix", &["Action", "Sci-Fi"]),
                movie(2, "Inception", &["Action", "Sci-Fi", "Thriller"]),
                movie(3, "Titanic", &["Romance", "Drama"]),
                movie(4, "The Notebook", &["Romance", "Drama"]),
                movie(5, "John Wick", &["Action", "Thriller"]),
                movie(6, "Interstellar", &["Sci-Fi", "Drama"]),
                movie(7, "Avengers: Endgame", &["Action", "Sci-Fi", "Adventure"]),
                movie(8, "La La Land", &["Romance", "Drama", "Music"]),
                movie(9, "The Conjuring", &["Horror", "Thriller"]),
                movie(10, "The Shawshank Redemption", &["Drama"]),
            ],
            sample_ratings: vec![
                profile(
                    "User1",
                    &[
                        ("The Matrix", 5.0),
                        ("Inception", 4.0),
                        ("Titanic", 1.0),
                        ("John Wick", 5.0),
                        ("Interstellar", 5.0),
                        ("Avengers: Endgame", 4.0),
                    ],
                ),
                profile(
                    "User2",
                    &[
                        ("Titanic", 5.0),
                        ("The Notebook", 4.0),
                        ("La La Land", 5.0),
                        ("The Shawshank Redemption", 5.0),
                    ],
                ),
                profile(
                    "User3",
                    &[
                        ("The Matrix", 4.0),
                        ("Inception", 5.0),
                        ("Avengers: Endgame", 5.0),
                        ("The Conjuring", 3.0),
                    ],
                ),
                profile(
                    "User4",
                    &[
                        ("John Wick", 4.0),
                        ("The Conjuring", 4.0),
                        ("Inception", 4.0),
                        ("Interstellar", 4.0),
                    ],
                ),
            ],
        }
    }
}
