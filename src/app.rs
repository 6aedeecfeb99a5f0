// Host application: loads the catalog, owns the poster cache and the router,
// and shows either the card grid or the detail screen of the current route.

use eframe::{egui, App};
use std::sync::Arc;

use crate::routes::Route;
use crate::types::MovieCardInput;

pub mod catalog;
pub mod config;
mod detail;
mod grid;
mod logs_ui;
pub mod navigation;
pub mod posters;
mod runtime;

pub use runtime::rt;

use navigation::Router;
use posters::{CachingProvider, NetworkProvider, PosterCache};

pub struct MovieCardsApp {
    movies: Vec<MovieCardInput>,
    load_error: Option<String>,
    posters: PosterCache,
    router: Router,
    columns: usize,
    logs_open: bool,
}

impl MovieCardsApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let cfg = config::current();
        let provider = CachingProvider::new(NetworkProvider::new(), cfg.cache_dir.clone());
        log::info!("poster provider: {:?}", provider);

        let (movies, load_error) = match catalog::load_catalog(&cfg.catalog_path) {
            Ok(movies) => (movies, None),
            Err(e) => {
                log::error!("{e}");
                (Vec::new(), Some(e.to_string()))
            }
        };

        Self {
            movies,
            load_error,
            posters: PosterCache::new(Arc::new(provider)),
            router: Router::default(),
            columns: cfg.columns.max(1),
            logs_open: false,
        }
    }

    fn draw_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Movies");
                ui.label(
                    egui::RichText::new(format!("{} titles", self.movies.len()))
                        .small()
                        .weak(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.toggle_value(&mut self.logs_open, "Logs");
                });
            });
        });
    }
}

impl App for MovieCardsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.posters.poll(ctx);
        self.draw_top_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.router.current() {
            Route::Home => {
                if let Some(err) = &self.load_error {
                    ui.colored_label(crate::ui_constants::color::LOW, err);
                }
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.draw_movie_grid(ui));
            }
            Route::Movie { id } => self.draw_detail(ui, id),
        });

        logs_ui::draw_logs_window(ctx, &mut self.logs_open);
    }
}
