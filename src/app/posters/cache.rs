use eframe::egui;
use std::collections::{HashMap, HashSet};
use std::sync::mpsc;
use std::sync::Arc;

use super::{ImageData, PosterProvider};
use crate::views::cards::ImageResolver;

enum PosterMsg {
    Ok { uri: String, data: ImageData },
    Err { uri: String },
}

/// Texture cache keyed by image URI.
///
/// A miss schedules one background fetch per URI; results come back over a
/// channel and become textures in [`PosterCache::poll`]. A URI that failed
/// stays failed for the session and the card keeps its fallback fill.
pub struct PosterCache {
    provider: Arc<dyn PosterProvider>,
    textures: HashMap<String, egui::TextureHandle>,
    loading: HashSet<String>,
    failed: HashSet<String>,
    tx: mpsc::Sender<PosterMsg>,
    rx: mpsc::Receiver<PosterMsg>,
    repaint: Option<egui::Context>,
}

impl PosterCache {
    pub fn new(provider: Arc<dyn PosterProvider>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            provider,
            textures: HashMap::new(),
            loading: HashSet::new(),
            failed: HashSet::new(),
            tx,
            rx,
            repaint: None,
        }
    }

    pub fn is_loading(&self, uri: &str) -> bool {
        self.loading.contains(uri)
    }

    pub fn has_failed(&self, uri: &str) -> bool {
        self.failed.contains(uri)
    }

    fn schedule(&mut self, uri: &str) {
        if self.textures.contains_key(uri) || self.loading.contains(uri) || self.failed.contains(uri)
        {
            return;
        }

        self.loading.insert(uri.to_string());
        let provider = self.provider.clone();
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        let uri = uri.to_string();

        crate::app::rt().spawn(async move {
            let msg = match provider.fetch(&uri).await {
                Ok(data) => {
                    log::info!("poster ok: {}x{} {}", data.width, data.height, uri);
                    PosterMsg::Ok { uri, data }
                }
                Err(e) => {
                    log::warn!("poster fetch failed: {} err={}", uri, e);
                    PosterMsg::Err { uri }
                }
            };
            let _ = tx.send(msg);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    /// Turns finished fetches into textures. Call once per frame.
    pub fn poll(&mut self, ctx: &egui::Context) {
        if self.repaint.is_none() {
            self.repaint = Some(ctx.clone());
        }
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                PosterMsg::Ok { uri, data } => {
                    self.loading.remove(&uri);
                    let image = egui::ColorImage::from_rgba_unmultiplied(
                        [data.width as usize, data.height as usize],
                        &data.rgba,
                    );
                    let tex = ctx.load_texture(
                        format!("poster:{uri}"),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.textures.insert(uri, tex);
                }
                PosterMsg::Err { uri } => {
                    self.loading.remove(&uri);
                    self.failed.insert(uri);
                }
            }
            ctx.request_repaint();
        }
    }
}

impl ImageResolver for PosterCache {
    fn texture(&mut self, uri: &str) -> Option<egui::TextureHandle> {
        if let Some(tex) = self.textures.get(uri) {
            return Some(tex.clone());
        }
        self.schedule(uri);
        None
    }
}
