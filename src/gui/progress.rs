// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::model::Category;
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, failed: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn source_done(&mut self, category: Category, records: usize) {
        self.done += 1;
        self.set_status(format!(
            "{} ({}) ({}/{})",
            category.label(),
            records,
            self.done + self.failed,
            self.total
        ));
    }
    fn source_failed(&mut self, category: Category, _reason: &str) {
        self.failed += 1;
        self.set_status(format!("{} ✗ ({}/{})", category.label(), self.done + self.failed, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("اكتمل التحميل"));
        } else {
            self.set_status(format!("اكتمل التحميل ({}/{}، تعذر {})", self.done, self.total, self.failed));
        }
    }
}
