// src/gui/fonts.rs
//
// egui ships without Arabic glyphs. When a font file is configured it goes in
// front of both families; otherwise text falls back to the bundled fonts.

use std::{fs, path::Path, sync::Arc};

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const FONT_NAME: &str = "directory-arabic";

pub fn install(ctx: &egui::Context, path: &Path) -> std::io::Result<()> {
    let bytes = fs::read(path)?;
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(s!(FONT_NAME), Arc::new(FontData::from_owned(bytes)));

    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts.families.entry(family).or_default().insert(0, s!(FONT_NAME));
    }
    ctx.set_fonts(fonts);
    logf!("UI: font loaded from {}", path.display());
    Ok(())
}
