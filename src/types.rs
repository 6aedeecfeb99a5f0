use serde::Deserialize;

/// One movie as delivered by the metadata source (TMDB list shape).
/// Immutable for the duration of a render pass.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieCardInput {
    pub id: u64,
    #[serde(default)]
    pub poster_path: Option<String>,
    pub title: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub release_date: Option<String>,
    // Accepted and carried, never rendered.
    #[allow(dead_code)]
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub adult: Option<bool>,
}

/// Badge color bucket for a rating.
#[derive(strum::EnumCount, strum::EnumIter, strum::Display, PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum RatingColor {
    High,
    Medium,
    Low,
}

/// Icons the card draws. Rendered as glyphs from egui's bundled emoji font.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Icon {
    Star,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Star => "⭐",
        }
    }
}
