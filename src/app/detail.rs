use eframe::egui::{self, RichText};

use crate::views::cards::format::{
    derive_rating, derive_rating_color, derive_vote_count_label, derive_year, poster_uri,
    rating_label,
};
use crate::views::cards::items::bucket_color;
use crate::ui_constants::card::{POSTER_ASPECT, POSTER_ROUNDING};
use crate::ui_constants::{color, ADULT_LABEL};
use crate::views::cards::ImageResolver;

const DETAIL_POSTER_WIDTH: f32 = 260.0;

/// Target screen of `/movies/{id}`: a larger poster and the same derived
/// values the card shows.
impl super::MovieCardsApp {
    pub(super) fn draw_detail(&mut self, ui: &mut egui::Ui, id: u64) {
        if ui.button("← Back").clicked() {
            self.router.back();
            return;
        }
        ui.add_space(8.0);

        let Some(movie) = self.movies.iter().find(|m| m.id == id) else {
            ui.label(format!("Movie {id} is not in the catalog."));
            return;
        };

        ui.horizontal_top(|ui| {
            let uri = poster_uri(movie.poster_path.as_deref());
            let size = egui::vec2(DETAIL_POSTER_WIDTH, DETAIL_POSTER_WIDTH * POSTER_ASPECT);
            let rounding = egui::Rounding::same(POSTER_ROUNDING);
            match self.posters.texture(&uri) {
                Some(tex) => {
                    ui.add(egui::Image::new(&tex).fit_to_exact_size(size).rounding(rounding));
                }
                None => {
                    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                    ui.painter().rect_filled(rect, rounding, color::POSTER_FALLBACK);
                    if self.posters.is_loading(&uri) {
                        ui.put(rect, egui::Spinner::new());
                    } else if self.posters.has_failed(&uri) {
                        ui.put(rect, egui::Label::new(RichText::new("Poster unavailable").weak()));
                    }
                }
            }

            ui.add_space(16.0);
            ui.vertical(|ui| {
                ui.heading(RichText::new(&movie.title).strong());
                ui.add_space(8.0);
                ui.label(derive_year(movie.release_date.as_deref()));

                let rating = derive_rating(movie.vote_average);
                ui.label(
                    RichText::new(format!("⭐ {}", rating_label(rating)))
                        .color(bucket_color(derive_rating_color(movie.vote_average))),
                );
                if movie.vote_count > 0 {
                    ui.label(format!(
                        "{} votes",
                        derive_vote_count_label(movie.vote_count)
                    ));
                }
                if movie.adult.unwrap_or(false) {
                    ui.label(RichText::new(ADULT_LABEL).color(color::ADULT));
                }
                ui.add_space(8.0);
                ui.label(
                    RichText::new(crate::routes::Route::movie(id).path())
                        .small()
                        .weak(),
                );
            });
        });
    }
}
