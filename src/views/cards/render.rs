// Render facade for cards: re-export the implementation from views::cards::items
// so the app keeps using views::cards::{movie_card, card_height}.

pub use crate::views::cards::items::{card_height, movie_card};
