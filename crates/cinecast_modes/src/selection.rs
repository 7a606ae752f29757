//! Pure selection steps over candidate lists.

use cinecast_core::Movie;
use rand::Rng;
use rand::seq::SliceRandom;
use std::cmp::Ordering;
use tracing::debug;

/// Rating-count threshold used when a mode does not set its own.
pub const DEFAULT_MIN_VOTES: u64 = 50;

/// Ranking order: average rating, then popularity, both ascending.
///
/// The best candidate is the maximum under this order.
pub fn rank_order(a: &Movie, b: &Movie) -> Ordering {
    a.vote_average
        .total_cmp(&b.vote_average)
        .then_with(|| a.popularity.total_cmp(&b.popularity))
}

/// Deterministic best-of: the highest-ranked qualifying movie.
///
/// Qualifying means a poster plus at least `min_votes` ratings. When nothing
/// qualifies the pool widens to movies with a poster, then to every movie.
/// Ties keep the earlier movie.
///
/// # Examples
///
/// ```
/// use cinecast_core::Movie;
/// use cinecast_modes::pick_best;
///
/// let movies = vec![
///     Movie { id: 1, vote_average: 9.0, vote_count: 3, poster_path: Some("/a.jpg".into()), ..Default::default() },
///     Movie { id: 2, vote_average: 7.0, vote_count: 900, poster_path: Some("/b.jpg".into()), ..Default::default() },
/// ];
/// assert_eq!(pick_best(&movies, 50).map(|m| m.id), Some(2));
/// ```
pub fn pick_best(results: &[Movie], min_votes: u64) -> Option<&Movie> {
    let qualified: Vec<&Movie> = results
        .iter()
        .filter(|m| m.has_poster() && m.vote_count >= min_votes)
        .collect();

    let pool = if !qualified.is_empty() {
        qualified
    } else {
        let with_poster: Vec<&Movie> = results.iter().filter(|m| m.has_poster()).collect();
        if !with_poster.is_empty() {
            debug!(min_votes, "No movie meets the vote threshold, ranking all with posters");
            with_poster
        } else {
            debug!("No movie has a poster, ranking the unfiltered list");
            results.iter().collect()
        }
    };

    pool.into_iter().reduce(|best, candidate| {
        if rank_order(candidate, best) == Ordering::Greater {
            candidate
        } else {
            best
        }
    })
}

/// Number of pages worth sampling: `total_pages` capped at `max_pages`, never below 1.
pub fn clamp_page_count(total_pages: u32, max_pages: u32) -> u32 {
    total_pages.min(max_pages).max(1)
}

/// Uniformly random page in `1..=clamp_page_count(total_pages, max_pages)`.
pub fn random_page<R: Rng + ?Sized>(total_pages: u32, max_pages: u32, rng: &mut R) -> u32 {
    rng.gen_range(1..=clamp_page_count(total_pages, max_pages))
}

/// Uniformly random movie, `None` for an empty list.
pub fn pick_random<'a, R: Rng + ?Sized>(results: &'a [Movie], rng: &mut R) -> Option<&'a Movie> {
    results.choose(rng)
}
