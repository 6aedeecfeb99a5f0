use eframe::egui::{self, pos2, Align2, FontId, Rect};

use crate::ui_constants::{color, font};
use crate::views::cards::tree::{VotesNode, YearNode};

use super::fade;

/// Single line under the title: dot + year on the left, star + vote
/// count on the right (only when there are votes).
pub fn draw_meta_row(
    ui: &egui::Ui,
    row: Rect,
    year: &YearNode,
    votes: Option<&VotesNode>,
    opacity: f32,
) {
    let painter = ui.painter();
    let small = FontId::proportional(font::SMALL);
    let cy = row.center().y;

    painter.circle_filled(pos2(row.left() + 2.0, cy), 2.0, fade(color::MUTED, opacity));
    painter.text(
        pos2(row.left() + 8.0, cy),
        Align2::LEFT_CENTER,
        &year.text,
        small.clone(),
        fade(color::TEXT, opacity),
    );

    if let Some(votes) = votes {
        let label = painter.text(
            pos2(row.right(), cy),
            Align2::RIGHT_CENTER,
            &votes.label,
            small,
            fade(color::MUTED, opacity),
        );
        painter.text(
            pos2(label.left() - 4.0, cy),
            Align2::RIGHT_CENTER,
            votes.icon.glyph(),
            FontId::proportional(font::BADGE),
            fade(color::TEXT, opacity),
        );
    }
}
