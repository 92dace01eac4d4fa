// src/gui/components/stats_bar.rs
//
// Per-category record totals.

use eframe::egui::{self, Align, Layout, RichText};

use crate::gui::app::{App, Phase};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Phase::Ready(c) = &app.phase else { return };

    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        ui.spacing_mut().item_spacing.x = 16.0;
        for (category, n) in c.counts() {
            ui.label(RichText::new(format!("{}: {}", category.label(), n)).monospace());
        }
    });
}
