pub mod format;
pub mod items;
pub mod ports;
pub mod render;
pub mod tree;

pub use ports::{ImageResolver, Navigator};
pub use render::{card_height, movie_card};
