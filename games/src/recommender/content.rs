use super::catalog::{Catalog, Movie};

/// Number of liked genres the movie shares.
pub fn genre_match_score(movie: &Movie, liked_genres: &[String]) -> usize {
    movie
        .genres
        .iter()
        .filter(|genre| liked_genres.contains(genre))
        .count()
}

/// Content-based filtering: movies sharing at least one liked genre, best
/// overlap first. The sort is stable, so catalog order breaks ties.
pub fn recommend_by_genres<'a>(
    catalog: &'a Catalog,
    liked_genres: &[String],
    top_n: usize,
) -> Vec<(&'a Movie, usize)> {
    let mut scored: Vec<(&Movie, usize)> = catalog
        .movies
        .iter()
        .map(|movie| (movie, genre_match_score(movie, liked_genres)))
        .filter(|(_, score)| *score > 0)
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(top_n);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn liked(genres: &[&str]) -> Vec<String> {
        genres.iter().map(|g| g.to_string()).collect()
    }

    #[test]
    fn test_score_counts_genre_overlap() {
        let catalog = Catalog::default();
        let inception = catalog.movie_by_title("Inception").unwrap();
        assert_eq!(genre_match_score(inception, &liked(&["Action", "Sci-Fi"])), 2);
        assert_eq!(genre_match_score(inception, &liked(&["Horror"])), 0);
    }

    #[test]
    fn test_recommendations_are_ordered_by_overlap() {
        let catalog = Catalog::default();
        let results = recommend_by_genres(&catalog, &liked(&["Action", "Sci-Fi", "Thriller"]), 5);

        // Inception carries all three genres and must come first.
        assert_eq!(results[0].0.title, "Inception");
        assert_eq!(results[0].1, 3);
        for pair in results.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn test_movies_without_overlap_are_excluded() {
        let catalog = Catalog::default();
        let results = recommend_by_genres(&catalog, &liked(&["Horror"]), 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0.title, "The Conjuring");
    }

    #[test]
    fn test_top_n_truncates_the_list() {
        let catalog = Catalog::default();
        let results = recommend_by_genres(&catalog, &liked(&["Drama"]), 2);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::default();
        let results = recommend_by_genres(&catalog, &liked(&["Romance"]), 5);
        let titles: Vec<&str> = results.iter().map(|(m, _)| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Titanic", "The Notebook", "La La Land"]);
    }
}
