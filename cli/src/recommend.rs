use games::recommender::{Catalog, MAX_RATING, Ratings, Recommender};

/// Prints either content-based picks (when genres are given) or
/// collaborative predictions (when ratings are given).
pub fn run(
    catalog: Catalog,
    genres: Vec<String>,
    rate_args: Vec<String>,
    top_n: usize,
) -> Result<(), String> {
    let recommender = Recommender::new(catalog);

    if genres.is_empty() && rate_args.is_empty() {
        println!("Pass --genre to get content-based picks or --rate to get predictions.");
        println!(
            "Known genres: {}",
            recommender.catalog().all_genres().join(", ")
        );
        return Ok(());
    }

    if !genres.is_empty() {
        let results = recommender.by_genres(&genres, top_n);
        if results.is_empty() {
            println!("No movie matches those genres.");
        } else {
            println!("Because you like {}:", genres.join(", "));
            for (movie, score) in results {
                println!(
                    "  {} ({} matching genre{})",
                    movie.title,
                    score,
                    if score == 1 { "" } else { "s" }
                );
            }
        }
    }

    if !rate_args.is_empty() {
        let user_ratings = parse_ratings(&rate_args)?;
        let results = recommender.by_ratings(&user_ratings, top_n);
        if results.is_empty() {
            println!("Not enough overlap with other raters to predict anything.");
        } else {
            println!("Predicted for you:");
            for (movie, prediction) in results {
                println!("  {} (predicted rating {:.1})", movie.title, prediction);
            }
        }
    }

    Ok(())
}

/// Parses repeated `--rate "Title=4"` arguments.
fn parse_ratings(rate_args: &[String]) -> Result<Ratings, String> {
    let mut ratings = Ratings::new();
    for arg in rate_args {
        let (title, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("Expected TITLE=RATING, got '{}'", arg))?;

        let title = title.trim();
        if title.is_empty() {
            return Err(format!("Missing movie title in '{}'", arg));
        }

        let rating: f64 = value
            .trim()
            .parse()
            .map_err(|_| format!("Rating in '{}' is not a number", arg))?;
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(format!("Rating in '{}' must be between 0 and {}", arg, MAX_RATING));
        }

        ratings.insert(title.to_string(), rating);
    }
    Ok(ratings)
}
