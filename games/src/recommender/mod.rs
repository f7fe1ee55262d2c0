mod catalog;
mod collab;
mod content;

pub use catalog::{Catalog, MAX_RATING, Movie, RatingProfile, Ratings};
pub use collab::cosine_similarity;

use collab::recommend_by_ratings;
use content::recommend_by_genres;

/// Recommender over an immutable catalog passed in at construction.
pub struct Recommender {
    catalog: Catalog,
}

impl Recommender {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Content-based: movies sharing liked genres, best overlap first.
    pub fn by_genres(&self, liked_genres: &[String], top_n: usize) -> Vec<(&Movie, usize)> {
        recommend_by_genres(&self.catalog, liked_genres, top_n)
    }

    /// Collaborative: predicted ratings for unseen titles, best first.
    pub fn by_ratings(&self, user_ratings: &Ratings, top_n: usize) -> Vec<(&Movie, f64)> {
        recommend_by_ratings(&self.catalog, user_ratings, top_n)
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}
