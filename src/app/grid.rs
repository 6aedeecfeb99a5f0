use eframe::egui;

use crate::ui_constants::{CARD_GAP, MIN_CARD_WIDTH, ROW_FILL};
use crate::views::cards::{card_height, movie_card};

/// Card width and horizontal gap for `cols` columns in `available` width.
pub fn grid_metrics(available: f32, cols: usize) -> (f32, f32) {
    let cols = cols.max(1);
    let card_w = (available * ROW_FILL / cols as f32).max(MIN_CARD_WIDTH);
    let gap = if cols > 1 {
        ((available - card_w * cols as f32) / (cols - 1) as f32).max(0.0)
    } else {
        0.0
    };
    (card_w, gap)
}

impl super::MovieCardsApp {
    /// Virtualized grid: only rows intersecting the viewport are drawn, so
    /// posters are requested for visible cards only.
    pub(super) fn draw_movie_grid(&mut self, ui: &mut egui::Ui) {
        let total_items = self.movies.len();
        let cols = self.columns.max(1);
        if total_items == 0 {
            return;
        }

        ui.spacing_mut().item_spacing.y = 0.0;
        let (card_w, gap) = grid_metrics(ui.available_width(), cols);
        let total_rows = total_items.div_ceil(cols);
        let row_h = card_height(card_w) + CARD_GAP;

        let start_y = ui.cursor().min.y;
        let clip = ui.clip_rect();

        // Overscan a bit for smoothness
        let overscan: isize = 1;
        let first_row = (((clip.top() - start_y) / row_h).floor() as isize - overscan).max(0);
        let last_row =
            (((clip.bottom() - start_y) / row_h).ceil() as isize + overscan).min(total_rows as isize);
        let start_row = first_row as usize;
        let end_row = (last_row.max(first_row)) as usize;

        let top_skip = start_row as f32 * row_h;
        if top_skip > 0.0 {
            ui.add_space(top_skip);
        }

        let Self {
            movies,
            posters,
            router,
            ..
        } = self;

        for r in start_row..end_row {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for c in 0..cols {
                    let Some(movie) = movies.get(r * cols + c) else {
                        break;
                    };
                    if c > 0 {
                        ui.add_space(gap);
                    }
                    movie_card(ui, movie, card_w, posters, router);
                }
            });
            ui.add_space(CARD_GAP);
        }

        // Keep the full scroll height for rows below the visible range
        let used_h = end_row as f32 * row_h;
        let bottom_skip = (total_rows as f32 * row_h - used_h).max(0.0);
        if bottom_skip > 0.0 {
            ui.add_space(bottom_skip);
        }
    }
}
