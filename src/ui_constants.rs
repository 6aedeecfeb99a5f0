// Layout numbers and external URIs used by the card and the grid.

/// Poster host template prefix; the poster path is appended verbatim.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Shown when a movie has no poster path.
pub const POSTER_PLACEHOLDER_URL: &str = "https://placehold.co/500x750/1a1a1a/ffffff.png";

/// Shown instead of the year when the release date is missing.
pub const YEAR_PLACEHOLDER: &str = "—";

/// Label of the adult-content badge.
pub const ADULT_LABEL: &str = "18+";

/// Share of the row width taken by the cards together; the rest is spread
/// between them. With three columns each card is 30% of the row.
pub const ROW_FILL: f32 = 0.9;

/// Minimum card width so titles stay readable on narrow windows.
pub const MIN_CARD_WIDTH: f32 = 120.0;

/// Vertical gap between grid rows.
pub const CARD_GAP: f32 = 16.0;

/// Card-specific layout constants
pub mod card {
    /// Poster height / width (500x750 artwork)
    pub const POSTER_ASPECT: f32 = 1.5;

    pub const POSTER_ROUNDING: f32 = 16.0;

    /// Badge distance from the poster edges
    pub const BADGE_INSET: f32 = 12.0;

    pub const BADGE_ROUNDING: f32 = 8.0;

    pub const RATING_PAD_X: f32 = 12.0;
    pub const RATING_PAD_Y: f32 = 8.0;

    pub const ADULT_PAD_X: f32 = 10.0;
    pub const ADULT_PAD_Y: f32 = 6.0;

    /// Gap between poster and title
    pub const INFO_GAP: f32 = 12.0;

    /// Title line height
    pub const TITLE_HEIGHT: f32 = 20.0;

    /// Gap between title and the year/votes row
    pub const ROW_GAP: f32 = 8.0;

    pub const ROW_HEIGHT: f32 = 16.0;

    /// Opacity of the whole card while pressed
    pub const PRESSED_OPACITY: f32 = 0.75;
}

pub mod font {
    pub const TITLE: f32 = 14.0;
    pub const SMALL: f32 = 12.0;
    pub const BADGE: f32 = 11.0;
}

pub mod color {
    use eframe::egui::Color32;

    pub const HIGH: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
    pub const MEDIUM: Color32 = Color32::from_rgb(0xf5, 0x9e, 0x0b);
    pub const LOW: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
    pub const ADULT: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26);
    pub const POSTER_FALLBACK: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1a);
    pub const MUTED: Color32 = Color32::from_rgb(0xa8, 0xb5, 0xdb);
    pub const TEXT: Color32 = Color32::WHITE;
}
