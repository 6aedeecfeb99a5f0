use eframe::egui::{self, pos2, Color32, Mesh, Rect, Rounding, Shape};

use crate::ui_constants::card::POSTER_ROUNDING;
use crate::ui_constants::color::POSTER_FALLBACK;

use super::fade;

/// Poster image (or a dark fill while it is missing), the bottom shade,
/// and a faint white wash while the card is pressed.
pub fn draw_poster(
    ui: &egui::Ui,
    rect: Rect,
    texture: Option<&egui::TextureHandle>,
    pressed: bool,
    opacity: f32,
) {
    let rounding = Rounding::same(POSTER_ROUNDING);
    let painter = ui.painter();

    match texture {
        Some(tex) => {
            egui::Image::new(tex)
                .rounding(rounding)
                .tint(fade(Color32::WHITE, opacity))
                .paint_at(ui, rect);
        }
        None => {
            painter.rect_filled(rect, rounding, fade(POSTER_FALLBACK, opacity));
        }
    }

    painter.add(bottom_shade(rect, opacity));

    if let Some(wash) = press_highlight(pressed) {
        painter.rect_filled(rect, rounding, wash);
    }
}

/// White at 5% over the poster, only while pressed.
fn press_highlight(pressed: bool) -> Option<Color32> {
    pressed.then(|| Color32::from_white_alpha(13))
}

// Transparent through the upper half, black at 40% on the bottom edge.
fn bottom_shade(rect: Rect, opacity: f32) -> Shape {
    let top = rect.center().y;
    let bottom = rect.bottom() - POSTER_ROUNDING / 2.0;
    let clear = Color32::TRANSPARENT;
    let dark = Color32::from_black_alpha((102.0 * opacity) as u8);

    let mut mesh = Mesh::default();
    mesh.colored_vertex(pos2(rect.left(), top), clear);
    mesh.colored_vertex(pos2(rect.right(), top), clear);
    mesh.colored_vertex(pos2(rect.left(), bottom), dark);
    mesh.colored_vertex(pos2(rect.right(), bottom), dark);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    Shape::mesh(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_follows_press_not_hover() {
        assert_eq!(press_highlight(false), None);
        assert_eq!(press_highlight(true), Some(Color32::from_white_alpha(13)));
    }
}
