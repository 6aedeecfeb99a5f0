// Capabilities the card consumes. The card never reaches for globals:
// images and navigation come in through these traits.

use eframe::egui;

use crate::routes::Route;

/// Turns an image URI into a drawable texture.
///
/// Returns `None` while the image is not ready (or failed); an
/// implementation is expected to start loading on the first miss.
pub trait ImageResolver {
    fn texture(&mut self, uri: &str) -> Option<egui::TextureHandle>;
}

/// Performs a screen transition.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}
