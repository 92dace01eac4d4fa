// src/gui/components/filter_bar.rs
//
// Category / specialty / area dropdowns plus the search box. Widgets read
// their options and current value from the controller's controls and report
// user picks back as ControlEvents; the controller does the rest.

use eframe::egui;

use crate::{
    config::consts::{TXT_ALL, TXT_AREA, TXT_CATEGORY, TXT_CHOOSE, TXT_SEARCH, TXT_SPECIALTY},
    controls::{ControlEvent, ListSelect, SelectControl},
    gui::app::App,
    model::Category,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let query_text = &mut app.query_text;
    let Some(controller) = (match &mut app.phase {
        crate::gui::app::Phase::Ready(c) => Some(c.as_mut()),
        _ => None,
    }) else {
        ui.add_enabled_ui(false, |ui| {
            ui.add(egui::TextEdit::singleline(&mut s!()).hint_text(TXT_SEARCH));
        });
        return;
    };

    let mut events: Vec<ControlEvent> = Vec::new();

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let controls = controller.controls();

        if let Some(pick) = dropdown(ui, "category", TXT_CATEGORY, &controls.category, category_label) {
            events.push(ControlEvent::Category(pick.as_deref().and_then(Category::from_key)));
        }
        if let Some(pick) = dropdown(ui, "specialty", TXT_SPECIALTY, &controls.specialty, |s| s!(s)) {
            events.push(ControlEvent::Specialty(pick));
        }
        if let Some(pick) = dropdown(ui, "area", TXT_AREA, &controls.area, |s| s!(s)) {
            events.push(ControlEvent::Area(pick));
        }

        ui.separator();

        let resp = ui.add(
            egui::TextEdit::singleline(query_text)
                .hint_text(TXT_SEARCH)
                .desired_width(260.0),
        );
        if resp.changed() {
            events.push(ControlEvent::Query(query_text.clone()));
        }
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            if let Err(e) = controller.flush_query() {
                loge!("UI: search render failed: {}", e);
            }
        }
    });

    for ev in events {
        logf!("UI: {:?}", ev);
        if let Err(e) = controller.handle(ev) {
            loge!("UI: render failed: {}", e);
        }
    }
}

fn category_label(key: &str) -> String {
    Category::from_key(key).map(|c| s!(c.label())).unwrap_or_else(|| s!(key))
}

/// One combo box. Returns `Some(new_value)` when the user picked something
/// different; `Some(None)` means "all".
fn dropdown(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    control: &ListSelect,
    display: impl Fn(&str) -> String,
) -> Option<Option<String>> {
    let current = control.value().map(String::from);
    let shown = current.as_deref().map(&display).unwrap_or_else(|| s!(TXT_ALL));
    let mut picked: Option<Option<String>> = None;

    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(shown)
        .width(170.0)
        .show_ui(ui, |ui| {
            if ui.selectable_label(current.is_none(), TXT_ALL).clicked() && current.is_some() {
                picked = Some(None);
            }
            if control.options().is_empty() {
                ui.weak(TXT_CHOOSE);
            }
            for opt in control.options() {
                let selected = current.as_deref() == Some(opt.as_str());
                if ui.selectable_label(selected, display(opt)).clicked() && !selected {
                    picked = Some(Some(opt.clone()));
                }
            }
        });

    picked
}
