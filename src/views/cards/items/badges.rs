use eframe::egui::{self, pos2, vec2, Color32, FontId, Rect, Rounding, Shadow};

use crate::types::RatingColor;
use crate::ui_constants::card::{
    ADULT_PAD_X, ADULT_PAD_Y, BADGE_INSET, BADGE_ROUNDING, RATING_PAD_X, RATING_PAD_Y,
};
use crate::ui_constants::{color, font};
use crate::views::cards::tree::{AdultBadge, RatingBadge};

use super::fade;

pub fn bucket_color(bucket: RatingColor) -> Color32 {
    match bucket {
        RatingColor::High => color::HIGH,
        RatingColor::Medium => color::MEDIUM,
        RatingColor::Low => color::LOW,
    }
}

/// Rating badge pinned to the poster's top-right corner: star + rating,
/// background and glow in the bucket color.
pub fn draw_rating_badge(ui: &egui::Ui, poster: Rect, badge: &RatingBadge, opacity: f32) {
    let painter = ui.painter();
    let fill = fade(bucket_color(badge.color), opacity);
    let text_color = fade(color::TEXT, opacity);

    let icon = painter.layout_no_wrap(
        badge.icon.glyph().to_string(),
        FontId::proportional(font::SMALL),
        text_color,
    );
    let text = painter.layout_no_wrap(
        badge.text.clone(),
        FontId::proportional(font::SMALL),
        text_color,
    );

    let gap = 4.0;
    let content = vec2(
        icon.size().x + gap + text.size().x,
        icon.size().y.max(text.size().y),
    );
    let size = content + vec2(RATING_PAD_X, RATING_PAD_Y) * 2.0;
    let rect = Rect::from_min_size(
        pos2(poster.right() - BADGE_INSET - size.x, poster.top() + BADGE_INSET),
        size,
    );

    paint_badge(
        painter,
        rect,
        fill,
        Shadow {
            offset: vec2(0.0, 4.0),
            blur: 8.0,
            spread: 0.0,
            color: fill.gamma_multiply(0.4),
        },
    );

    let cy = rect.center().y;
    let icon_x = rect.left() + RATING_PAD_X;
    let text_x = icon_x + icon.size().x + gap;
    let icon_y = cy - icon.size().y / 2.0;
    let text_y = cy - text.size().y / 2.0;
    painter.galley(pos2(icon_x, icon_y), icon, text_color);
    painter.galley(pos2(text_x, text_y), text, text_color);
}

/// "18+" badge in the poster's top-left corner.
pub fn draw_adult_badge(ui: &egui::Ui, poster: Rect, badge: &AdultBadge, opacity: f32) {
    let painter = ui.painter();
    let fill = fade(color::ADULT, opacity);
    let text_color = fade(color::TEXT, opacity);

    let label = painter.layout_no_wrap(
        badge.label.to_string(),
        FontId::proportional(font::BADGE),
        text_color,
    );
    let size = label.size() + vec2(ADULT_PAD_X, ADULT_PAD_Y) * 2.0;
    let rect = Rect::from_min_size(
        pos2(poster.left() + BADGE_INSET, poster.top() + BADGE_INSET),
        size,
    );

    paint_badge(
        painter,
        rect,
        fill,
        Shadow {
            offset: vec2(0.0, 2.0),
            blur: 4.0,
            spread: 0.0,
            color: fill.gamma_multiply(0.3),
        },
    );
    painter.galley(
        pos2(rect.left() + ADULT_PAD_X, rect.top() + ADULT_PAD_Y),
        label,
        text_color,
    );
}

fn paint_badge(painter: &egui::Painter, rect: Rect, fill: Color32, shadow: Shadow) {
    let rounding = Rounding::same(BADGE_ROUNDING);
    painter.add(shadow.as_shape(rect, rounding));
    painter.rect_filled(rect, rounding, fill);
}
