// src/gui/components/results.rs
//
// Draws whatever the controller last rendered into its SlotRenderer.
// Purely a view; loading and failure states come from App::phase.

use eframe::egui::{self, Align, Layout, RichText};

use crate::{
    config::consts::{TXT_LOADING, TXT_RELOAD, TXT_RESULTS_COUNT},
    core::sanitize::dialable,
    gui::app::{App, Phase},
    render::{Card, Slot},
};

const CARD_WIDTH: f32 = 320.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut reload = false;

    match &app.phase {
        Phase::Loading(_) => {
            ui.centered_and_justified(|ui| {
                ui.add(egui::Spinner::new());
                ui.label(TXT_LOADING);
            });
        }
        Phase::Failed(msg) => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new(msg).color(ui.visuals().error_fg_color).size(16.0));
                ui.add_space(8.0);
                reload = ui.button(TXT_RELOAD).clicked();
            });
        }
        Phase::Ready(c) => {
            let slots = &c.renderer().slots;
            let count = c.last_render().map(|s| s.cards + s.placeholders).unwrap_or(0);
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                ui.label(format!("{}: {}", TXT_RESULTS_COUNT, count));
            });
            ui.separator();

            let columns = match app.state.gui.columns {
                0 => ((ui.available_width() / (CARD_WIDTH + 12.0)).floor() as usize).max(1),
                n => n,
            };

            egui::ScrollArea::vertical()
                .id_salt("results_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for row in slots.chunks(columns) {
                        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                            for slot in row {
                                draw_slot(ui, slot);
                            }
                        });
                        ui.add_space(6.0);
                    }
                });
        }
    }

    if reload {
        let ctx = ui.ctx().clone();
        app.reload(&ctx);
    }
}

fn draw_slot(ui: &mut egui::Ui, slot: &Slot) {
    match slot {
        Slot::Card(card) => draw_card(ui, card),
        Slot::Placeholder => {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.weak("-");
            });
        }
        Slot::Empty(msg) => {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new(msg).weak().size(15.0));
            });
        }
        Slot::Error(msg) => {
            ui.label(RichText::new(msg).color(ui.visuals().error_fg_color));
        }
    }
}

fn draw_card(ui: &mut egui::Ui, card: &Card) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.with_layout(Layout::top_down(Align::Max), |ui| {
            ui.label(RichText::new(&card.name).strong().size(16.0));
            if let Some(s) = &card.specialty {
                ui.label(s);
            }
            ui.label(RichText::new(&card.area).weak());
            if let Some(a) = &card.address {
                ui.label(RichText::new(a).small());
            }
            for phone in &card.phones {
                ui.hyperlink_to(format!("☎ {phone}"), format!("tel:{}", dialable(phone)));
            }
        });
    });
}
