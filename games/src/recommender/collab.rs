use std::collections::BTreeMap;

use super::catalog::{Catalog, Movie, Ratings};

/// Cosine similarity over the titles both raters scored. No co-rated title
/// or a zero norm yields 0.0.
pub fn cosine_similarity(a: &Ratings, b: &Ratings) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (title, rating_a) in a {
        if let Some(rating_b) = b.get(title) {
            dot += rating_a * rating_b;
            norm_a += rating_a * rating_a;
            norm_b += rating_b * rating_b;
        }
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// User-based collaborative filtering: each sample rater is weighted by
/// cosine similarity to `user_ratings`, and every title the user has not
/// rated gets the similarity-weighted mean of the sample scores. Titles
/// accumulate in a BTreeMap, so equal predictions order alphabetically.
pub fn recommend_by_ratings<'a>(
    catalog: &'a Catalog,
    user_ratings: &Ratings,
    top_n: usize,
) -> Vec<(&'a Movie, f64)> {
    let similarities: Vec<(&Ratings, f64)> = catalog
        .sample_ratings
        .iter()
        .map(|profile| (&profile.ratings, cosine_similarity(user_ratings, &profile.ratings)))
        .filter(|(_, similarity)| *similarity > 0.0)
        .collect();

    if similarities.is_empty() {
        return Vec::new();
    }

    // title -> (weighted rating sum, similarity mass)
    let mut accumulated: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for (ratings, similarity) in &similarities {
        for (title, rating) in ratings.iter() {
            if user_ratings.contains_key(title) {
                continue;
            }
            let entry = accumulated.entry(title.as_str()).or_insert((0.0, 0.0));
            entry.0 += similarity * rating;
            entry.1 += similarity;
        }
    }

    let mut predictions: Vec<(&Movie, f64)> = accumulated
        .into_iter()
        .filter(|(_, (_, mass))| *mass > 0.0)
        .filter_map(|(title, (total, mass))| {
            catalog.movie_by_title(title).map(|movie| (movie, total / mass))
        })
        .collect();

    predictions.sort_by(|a, b| b.1.total_cmp(&a.1));
    predictions.truncate(top_n);
    predictions
}
