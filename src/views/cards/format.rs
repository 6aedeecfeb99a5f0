//! Display values derived from a [`MovieCardInput`](crate::types::MovieCardInput).
//! Everything here is pure and total.

use crate::types::RatingColor;
use crate::ui_constants::{POSTER_BASE_URL, POSTER_PLACEHOLDER_URL, YEAR_PLACEHOLDER};

/// Year segment of a `YYYY-MM-DD` date: text before the first `-`.
/// A string without `-` (including an empty one) is returned whole; only a
/// missing date gives the placeholder glyph.
pub fn derive_year(release_date: Option<&str>) -> String {
    release_date
        .map(|date| date.split('-').next().unwrap_or(date).to_string())
        .unwrap_or_else(|| YEAR_PLACEHOLDER.to_string())
}

/// Rating rounded to one decimal.
///
/// Rounds half away from zero (`f64::round`), which over the valid
/// [0, 10] range is round-half-up. Non-finite averages display as 0.
pub fn derive_rating(vote_average: f64) -> f64 {
    if !vote_average.is_finite() {
        return 0.0;
    }
    (vote_average * 10.0).round() / 10.0
}

/// Inclusive lower bounds: 8.0 and up is high, 6.0 and up is medium.
pub fn derive_rating_color(vote_average: f64) -> RatingColor {
    if vote_average >= 8.0 {
        RatingColor::High
    } else if vote_average >= 6.0 {
        RatingColor::Medium
    } else {
        RatingColor::Low
    }
}

pub fn rating_label(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Counts strictly above 1000 are shown in thousands with one decimal
/// (`2500` -> `2.5K`); 1000 and below are printed as-is.
///
/// Tenths are rounded on the binary value of `count / 1000`, so `1150`
/// (stored just below 1.15) is `1.1K`. Exact ties such as `1250` round up.
pub fn derive_vote_count_label(vote_count: u64) -> String {
    if vote_count <= 1000 {
        return vote_count.to_string();
    }
    // x.x25 and x.x75 are exact in binary; `{:.1}` would round those to even.
    if vote_count % 500 == 250 {
        let tenths = vote_count / 100 + 1;
        return format!("{}.{}K", tenths / 10, tenths % 10);
    }
    format!("{:.1}K", vote_count as f64 / 1000.0)
}

/// Image URI for the poster. The path is appended without validation;
/// a malformed path is the image loader's problem.
pub fn poster_uri(poster_path: Option<&str>) -> String {
    match poster_path {
        Some(path) if !path.is_empty() => format!("{POSTER_BASE_URL}{path}"),
        _ => POSTER_PLACEHOLDER_URL.to_string(),
    }
}
