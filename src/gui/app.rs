// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc, Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    config::{
        consts::{TXT_LOADING, TXT_LOAD_FAILED, TXT_SEARCHING, TXT_TITLE},
        options::AppOptions,
        state::AppState,
    },
    controller::{Controller, Controls},
    controls::ListSelect,
    core::net::SourceFetcher,
    debounce::SystemClock,
    loader::{self, LoadReport},
    render::SlotRenderer,
};

use super::{fonts, progress::GuiProgress};

pub type GuiController = Controller<ListSelect, SlotRenderer, SystemClock>;

pub fn run(native: eframe::NativeOptions, options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        TXT_TITLE,
        native,
        Box::new(|cc| Ok(Box::new(App::new(cc, AppState::new(options))))),
    )?;
    Ok(())
}

/// Where the window is in its lifecycle.
pub enum Phase {
    Loading(mpsc::Receiver<Result<LoadReport, String>>),
    Ready(Box<GuiController>),
    /// Localized message; the user may reload.
    Failed(String),
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub phase: Phase,

    // search box text; the controller only sees it debounced
    pub query_text: String,

    // status line (loader thread writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        if let Some(path) = &state.options.font_path {
            if let Err(e) = fonts::install(&cc.egui_ctx, path) {
                loge!("UI: cannot load font {}: {}", path.display(), e);
            }
        }

        let status = Arc::new(Mutex::new(s!(TXT_LOADING)));
        let phase = start_load(&cc.egui_ctx, &state.options, status.clone());

        logf!("Init: data root={} sources={}", state.options.data.root, state.options.data.sources.len());

        Self { state, phase, query_text: s!(), status }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn controller_mut(&mut self) -> Option<&mut GuiController> {
        match &mut self.phase {
            Phase::Ready(c) => Some(c.as_mut()),
            _ => None,
        }
    }

    pub fn reload(&mut self, ctx: &egui::Context) {
        logf!("UI: reload requested");
        self.query_text.clear();
        self.status(TXT_LOADING);
        self.phase = start_load(ctx, &self.state.options, self.status.clone());
    }

    /// Pick up the loader's result once it arrives.
    fn poll_load(&mut self) {
        let Phase::Loading(rx) = &self.phase else { return };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => Err(s!("loader thread exited")),
        };

        self.phase = match outcome.map(LoadReport::into_providers) {
            Ok(Ok(providers)) => {
                let mut controller = Controller::new(
                    providers,
                    Controls::<ListSelect>::default(),
                    SlotRenderer::new(),
                    SystemClock,
                    self.state.options.debounce,
                );
                if let Err(e) = controller.refresh() {
                    loge!("UI: initial render failed: {}", e);
                }
                Phase::Ready(Box::new(controller))
            }
            Ok(Err(e)) => {
                loge!("Load: {}", e);
                Phase::Failed(s!(TXT_LOAD_FAILED))
            }
            Err(e) => {
                loge!("Load: {}", e);
                Phase::Failed(s!(TXT_LOAD_FAILED))
            }
        };
    }
}

/// Run the loader off the UI thread; the result comes back over a channel.
fn start_load(ctx: &egui::Context, options: &AppOptions, status: Arc<Mutex<String>>) -> Phase {
    let (tx, rx) = mpsc::channel();
    let data = options.data.clone();
    let ctx2 = ctx.clone();

    thread::spawn(move || {
        let outcome = SourceFetcher::new(data.root.clone())
            .map(|fetcher| {
                let mut prog = GuiProgress::new(status, ctx2.clone());
                loader::load_all(&fetcher, &data.sources, Some(&mut prog))
            })
            .map_err(|e| e.to_string());
        let _ = tx.send(outcome);
        ctx2.request_repaint();
    });

    Phase::Loading(rx)
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        // Debounced query: apply when due, otherwise wake up when it will be.
        if let Some(c) = self.controller_mut() {
            if let Err(e) = c.tick() {
                loge!("UI: render after search failed: {}", e);
            }
            if let Some(wait) = c.next_deadline() {
                ctx.request_repaint_after(wait);
            }
        }

        egui::TopBottomPanel::top("filters").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading(TXT_TITLE);
            if self.state.gui.show_stats {
                crate::gui::components::stats_bar::draw(ui, self);
            }
            ui.separator();
            crate::gui::components::filter_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        let searching = matches!(&self.phase, Phase::Ready(c) if c.query_pending());
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            if searching {
                ui.label(TXT_SEARCHING);
            } else {
                ui.label(self.status_text());
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::results::draw(ui, self);
        });
    }
}
