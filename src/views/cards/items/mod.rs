// Building blocks of the movie card. render.rs re-exports the entry points.
pub mod card;
mod badges;
mod meta_row;
mod poster;
pub use badges::bucket_color;
pub use card::{card_height, movie_card};

use eframe::egui::Color32;

// Pressed cards are painted with every color scaled by the same factor.
fn fade(color: Color32, opacity: f32) -> Color32 {
    if opacity >= 1.0 {
        color
    } else {
        color.gamma_multiply(opacity)
    }
}
