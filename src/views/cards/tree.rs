use crate::routes::Route;
use crate::types::{Icon, MovieCardInput, RatingColor};
use crate::ui_constants::ADULT_LABEL;

use super::format::{
    derive_rating, derive_rating_color, derive_vote_count_label, derive_year, poster_uri,
    rating_label,
};

/// Everything the renderer draws for one card, resolved to plain values.
/// Building it twice from the same input gives equal trees.
#[derive(Debug, Clone, PartialEq)]
pub struct CardTree {
    /// Where a tap on the card leads.
    pub target: Route,
    pub poster: PosterNode,
    pub rating_badge: RatingBadge,
    pub adult_badge: Option<AdultBadge>,
    pub title: TitleNode,
    pub year: YearNode,
    pub votes: Option<VotesNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PosterNode {
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingBadge {
    pub icon: Icon,
    pub text: String,
    pub color: RatingColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdultBadge {
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleNode {
    pub text: String,
    pub max_lines: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearNode {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VotesNode {
    pub icon: Icon,
    pub label: String,
}

pub fn build_card_tree(movie: &MovieCardInput) -> CardTree {
    let rating = derive_rating(movie.vote_average);

    CardTree {
        target: Route::movie(movie.id),
        poster: PosterNode {
            uri: poster_uri(movie.poster_path.as_deref()),
        },
        rating_badge: RatingBadge {
            icon: Icon::Star,
            text: rating_label(rating),
            color: derive_rating_color(movie.vote_average),
        },
        adult_badge: movie
            .adult
            .unwrap_or(false)
            .then_some(AdultBadge { label: ADULT_LABEL }),
        title: TitleNode {
            text: movie.title.clone(),
            max_lines: 1,
        },
        year: YearNode {
            text: derive_year(movie.release_date.as_deref()),
        },
        votes: (movie.vote_count > 0).then(|| VotesNode {
            icon: Icon::Star,
            label: derive_vote_count_label(movie.vote_count),
        }),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_movie() -> MovieCardInput {
        MovieCardInput {
            id: 550,
            poster_path: Some("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg".to_string()),
            title: "Fight Club".to_string(),
            vote_average: 8.433,
            vote_count: 30157,
            release_date: Some("1999-10-15".to_string()),
            popularity: Some(61.4),
            adult: Some(false),
        }
    }

    #[test]
    fn full_movie_tree() {
        let tree = build_card_tree(&sample_movie());
        assert_eq!(tree.target, Route::movie(550));
        assert_eq!(tree.target.path(), "/movies/550");
        assert_eq!(
            tree.poster.uri,
            "https://image.tmdb.org/t/p/w500/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg"
        );
        assert_eq!(tree.rating_badge.text, "8.4");
        assert_eq!(tree.rating_badge.color, RatingColor::High);
        assert_eq!(tree.rating_badge.icon, Icon::Star);
        assert_eq!(tree.title.text, "Fight Club");
        assert_eq!(tree.title.max_lines, 1);
        assert_eq!(tree.year.text, "1999");
        assert_eq!(
            tree.votes,
            Some(VotesNode {
                icon: Icon::Star,
                label: "30.2K".to_string()
            })
        );
        assert!(tree.adult_badge.is_none());
    }

    #[test]
    fn adult_badge_only_when_flagged() {
        let mut movie = sample_movie();
        movie.adult = Some(true);
        assert_eq!(
            build_card_tree(&movie).adult_badge,
            Some(AdultBadge { label: "18+" })
        );

        movie.adult = Some(false);
        assert!(build_card_tree(&movie).adult_badge.is_none());

        movie.adult = None;
        assert!(build_card_tree(&movie).adult_badge.is_none());
    }

    #[test]
    fn votes_hidden_for_zero_count() {
        let mut movie = sample_movie();
        movie.vote_count = 0;
        assert!(build_card_tree(&movie).votes.is_none());

        movie.vote_count = 1000;
        assert_eq!(build_card_tree(&movie).votes.unwrap().label, "1000");
    }

    #[test]
    fn sparse_movie_uses_fallbacks() {
        let movie = MovieCardInput {
            id: 1,
            poster_path: None,
            title: "Untitled".to_string(),
            vote_average: 0.0,
            vote_count: 0,
            release_date: None,
            popularity: None,
            adult: None,
        };
        let tree = build_card_tree(&movie);
        assert_eq!(
            tree.poster.uri,
            "https://placehold.co/500x750/1a1a1a/ffffff.png"
        );
        assert_eq!(tree.year.text, "—");
        assert_eq!(tree.rating_badge.text, "0.0");
        assert_eq!(tree.rating_badge.color, RatingColor::Low);
        assert!(tree.votes.is_none());
        assert!(tree.adult_badge.is_none());
    }

    #[test]
    fn rating_badge_always_present_with_bucket() {
        let mut movie = sample_movie();
        movie.vote_average = 6.0;
        assert_eq!(build_card_tree(&movie).rating_badge.color, RatingColor::Medium);
        movie.vote_average = 5.999;
        let tree = build_card_tree(&movie);
        assert_eq!(tree.rating_badge.color, RatingColor::Low);
        assert_eq!(tree.rating_badge.text, "6.0");
    }

    #[test]
    fn building_twice_is_identical() {
        let movie = sample_movie();
        assert_eq!(build_card_tree(&movie), build_card_tree(&movie));
    }

    #[test]
    fn popularity_does_not_affect_tree() {
        let mut a = sample_movie();
        let mut b = sample_movie();
        a.popularity = None;
        b.popularity = Some(9000.0);
        assert_eq!(build_card_tree(&a), build_card_tree(&b));
    }
}
