use eframe::egui::{self, pos2, vec2, FontId, Rect, Sense};
use eframe::egui::text::{LayoutJob, TextWrapping};

use crate::types::MovieCardInput;
use crate::ui_constants::card::{
    INFO_GAP, POSTER_ASPECT, PRESSED_OPACITY, ROW_GAP, ROW_HEIGHT, TITLE_HEIGHT,
};
use crate::ui_constants::{color, font};
use crate::views::cards::ports::{ImageResolver, Navigator};
use crate::views::cards::tree::{build_card_tree, TitleNode};

use super::badges::{draw_adult_badge, draw_rating_badge};
use super::fade;
use super::meta_row::draw_meta_row;
use super::poster::draw_poster;

/// Total card height for a given width. Fixed per width so the grid can
/// virtualize rows without measuring.
pub fn card_height(width: f32) -> f32 {
    width * POSTER_ASPECT + INFO_GAP + TITLE_HEIGHT + ROW_GAP + ROW_HEIGHT
}

/// Movie poster card, exactly `width` wide.
/// - poster with rating badge (always) and "18+" badge (adult only)
/// - one-line title, year and vote count underneath
///
/// A click navigates to the movie's detail route. Nothing is kept between
/// frames: the card is rebuilt from `movie` every time.
pub fn movie_card(
    ui: &mut egui::Ui,
    movie: &MovieCardInput,
    width: f32,
    images: &mut dyn ImageResolver,
    navigator: &mut dyn Navigator,
) -> egui::Response {
    let tree = build_card_tree(movie);

    let (rect, response) =
        ui.allocate_exact_size(vec2(width, card_height(width)), Sense::click());
    let response = response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(tree.title.text.as_str());

    if ui.is_rect_visible(rect) {
        let pressed = response.is_pointer_button_down_on();
        let opacity = if pressed {
            PRESSED_OPACITY
        } else {
            1.0
        };

        let poster_rect = Rect::from_min_size(rect.min, vec2(width, width * POSTER_ASPECT));
        let texture = images.texture(&tree.poster.uri);
        draw_poster(ui, poster_rect, texture.as_ref(), pressed, opacity);
        draw_rating_badge(ui, poster_rect, &tree.rating_badge, opacity);
        if let Some(adult) = &tree.adult_badge {
            draw_adult_badge(ui, poster_rect, adult, opacity);
        }

        let title_top = poster_rect.bottom() + INFO_GAP;
        draw_title(ui, pos2(rect.left(), title_top), width, &tree.title, opacity);

        let row_rect = Rect::from_min_size(
            pos2(rect.left(), title_top + TITLE_HEIGHT + ROW_GAP),
            vec2(width, ROW_HEIGHT),
        );
        draw_meta_row(ui, row_rect, &tree.year, tree.votes.as_ref(), opacity);
    }

    if response.clicked() {
        log::debug!("card tapped: '{}' -> {}", tree.title.text, tree.target);
        navigator.navigate(tree.target);
    }

    response
}

// Truncation (with ellipsis) is left to the text layout via max_rows.
fn draw_title(ui: &egui::Ui, pos: egui::Pos2, width: f32, title: &TitleNode, opacity: f32) {
    let text_color = fade(color::TEXT, opacity);
    let mut job = LayoutJob::simple_singleline(
        title.text.clone(),
        FontId::proportional(font::TITLE),
        text_color,
    );
    job.wrap = TextWrapping {
        max_rows: title.max_lines,
        ..TextWrapping::truncate_at_width(width)
    };
    let galley = ui.fonts(|f| f.layout_job(job));
    let y = pos.y + (TITLE_HEIGHT - galley.size().y).max(0.0) / 2.0;
    ui.painter().galley(pos2(pos.x, y), galley, text_color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;
    use crate::views::cards::tree::tests::sample_movie;

    #[derive(Default)]
    struct RecordingImages {
        requested: Vec<String>,
    }

    impl ImageResolver for RecordingImages {
        fn texture(&mut self, uri: &str) -> Option<egui::TextureHandle> {
            self.requested.push(uri.to_string());
            None
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        routes: Vec<Route>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, route: Route) {
            self.routes.push(route);
        }
    }

    fn frame_input(time: f64, events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(Rect::from_min_size(egui::Pos2::ZERO, vec2(800.0, 600.0))),
            time: Some(time),
            events,
            ..Default::default()
        }
    }

    fn pointer_button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    fn run_frame(
        ctx: &egui::Context,
        input: egui::RawInput,
        images: &mut RecordingImages,
        nav: &mut RecordingNavigator,
    ) {
        let movie = sample_movie();
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                movie_card(ui, &movie, 200.0, images, nav);
            });
        });
    }

    #[test]
    fn height_grows_with_width() {
        assert_eq!(card_height(100.0), 150.0 + 12.0 + 20.0 + 8.0 + 16.0);
        assert!(card_height(200.0) > card_height(100.0));
    }

    #[test]
    fn renders_without_navigating() {
        let ctx = egui::Context::default();
        let mut images = RecordingImages::default();
        let mut nav = RecordingNavigator::default();

        run_frame(&ctx, frame_input(0.0, vec![]), &mut images, &mut nav);

        assert!(nav.routes.is_empty());
        assert_eq!(
            images.requested,
            vec!["https://image.tmdb.org/t/p/w500/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg".to_string()]
        );
    }

    #[test]
    fn click_navigates_to_movie() {
        let ctx = egui::Context::default();
        let mut images = RecordingImages::default();
        let mut nav = RecordingNavigator::default();
        let inside = pos2(100.0, 100.0);

        run_frame(&ctx, frame_input(0.0, vec![]), &mut images, &mut nav);
        run_frame(
            &ctx,
            frame_input(0.1, vec![egui::Event::PointerMoved(inside)]),
            &mut images,
            &mut nav,
        );
        run_frame(
            &ctx,
            frame_input(0.2, vec![pointer_button(inside, true)]),
            &mut images,
            &mut nav,
        );
        run_frame(
            &ctx,
            frame_input(0.3, vec![pointer_button(inside, false)]),
            &mut images,
            &mut nav,
        );

        assert_eq!(nav.routes, vec![Route::movie(550)]);
    }
}
