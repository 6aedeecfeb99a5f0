// Default image resolver for the cards: URI -> texture, fetched over HTTP
// on the background runtime and cached on disk.
mod cache;
mod error;
mod image_data;
mod provider;

pub use cache::PosterCache;
pub use error::PosterError;
pub use image_data::ImageData;
pub use provider::{CachingProvider, NetworkProvider, PosterProvider};
