// src/controller.rs
//
// Single owner of the directory state: the loaded providers (read-only after
// construction), the current selection, the three dropdowns, the results
// surface, and the debounced search query. Front ends hold one controller
// and forward every user change to `handle`; the free-text query lands on
// the next `tick` after the debounce window.

use std::time::Duration;

use crate::{
    config::consts::TXT_RENDER_FAILED,
    controls::{category_options, ControlEvent, SelectControl},
    debounce::{Clock, Debouncer},
    filter::{self, Selection},
    model::{Category, Provider},
    render::{self, RenderError, RenderSummary, Renderer},
};

/// The three dropdowns the controller keeps in sync.
#[derive(Clone, Debug, Default)]
pub struct Controls<C> {
    pub category: C,
    pub specialty: C,
    pub area: C,
}

pub struct Controller<C, R, K> {
    providers: Vec<Provider>,
    selection: Selection,
    controls: Controls<C>,
    renderer: R,
    query: Debouncer<String>,
    clock: K,
    last: Option<RenderSummary>,
}

impl<C, R, K> Controller<C, R, K>
where
    C: SelectControl,
    R: Renderer,
    K: Clock,
{
    /// Populate every control from `providers`. Nothing is drawn until
    /// `refresh`.
    pub fn new(
        providers: Vec<Provider>,
        mut controls: Controls<C>,
        renderer: R,
        clock: K,
        debounce: Duration,
    ) -> Self {
        controls.category.set_options(category_options());
        controls.category.set_value(None);
        controls.area.set_options(filter::derive_areas(&providers));
        controls.area.set_value(None);
        controls.specialty.set_options(filter::derive_specialties(&providers, None));
        controls.specialty.set_value(None);

        logf!(
            "Controller: providers={} areas={} specialties={}",
            providers.len(),
            controls.area.options().len(),
            controls.specialty.options().len()
        );

        Self {
            providers,
            selection: Selection::new(),
            controls,
            renderer,
            query: Debouncer::new(debounce),
            clock,
            last: None,
        }
    }

    /* ---------- accessors ---------- */

    pub fn providers(&self) -> &[Provider] { &self.providers }
    pub fn selection(&self) -> &Selection { &self.selection }
    pub fn controls(&self) -> &Controls<C> { &self.controls }
    pub fn controls_mut(&mut self) -> &mut Controls<C> { &mut self.controls }
    pub fn renderer(&self) -> &R { &self.renderer }
    pub fn renderer_mut(&mut self) -> &mut R { &mut self.renderer }
    pub fn last_render(&self) -> Option<RenderSummary> { self.last }

    /// Providers matching the current selection.
    pub fn filtered(&self) -> Vec<&Provider> {
        filter::apply_filters(&self.providers, &self.selection)
    }

    pub fn counts(&self) -> Vec<(Category, usize)> {
        filter::category_counts(&self.providers)
    }

    /// Time until a pending query applies, for scheduling a wake-up.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.query.remaining(self.clock.now())
    }

    pub fn query_pending(&self) -> bool { self.query.is_pending() }

    /* ---------- events ---------- */

    /// Apply one user change. Dropdown changes re-render immediately and
    /// return the summary; a query change is only scheduled.
    pub fn handle(&mut self, event: ControlEvent) -> Result<Option<RenderSummary>, RenderError> {
        logd!("Controller: {:?}", event);
        match event {
            ControlEvent::Category(category) => {
                self.selection.set_category(category);
                self.controls.category.set_value(category.map(Category::key));
                self.sync_specialties();
            }
            ControlEvent::Specialty(specialty) => {
                self.selection.set_specialty(specialty.as_deref());
                self.controls.specialty.set_value(self.selection.specialty());
            }
            ControlEvent::Area(area) => {
                self.selection.set_area(area.as_deref());
                self.controls.area.set_value(self.selection.area());
            }
            ControlEvent::Query(text) => {
                self.query.schedule(text, self.clock.now());
                return Ok(None);
            }
        }
        self.refresh().map(Some)
    }

    /// Apply the pending query once its window has passed.
    pub fn tick(&mut self) -> Result<Option<RenderSummary>, RenderError> {
        match self.query.poll(self.clock.now()) {
            Some(text) => self.apply_query(&text).map(Some),
            None => Ok(None),
        }
    }

    /// Apply the pending query now (e.g. Enter pressed).
    pub fn flush_query(&mut self) -> Result<Option<RenderSummary>, RenderError> {
        match self.query.flush() {
            Some(text) => self.apply_query(&text).map(Some),
            None => Ok(None),
        }
    }

    /// Back to the unfiltered view.
    pub fn reset(&mut self) -> Result<RenderSummary, RenderError> {
        self.query.cancel();
        self.selection.clear();
        self.controls.category.set_value(None);
        self.controls.area.set_value(None);
        self.sync_specialties();
        self.refresh()
    }

    /// Filter and redraw. On a render failure the results area shows the
    /// localized error instead, and the error is returned.
    pub fn refresh(&mut self) -> Result<RenderSummary, RenderError> {
        let result = {
            let filtered = filter::apply_filters(&self.providers, &self.selection);
            render::render_results(&mut self.renderer, &filtered)
        };
        match result {
            Ok(summary) => {
                self.last = Some(summary);
                Ok(summary)
            }
            Err(e) => {
                loge!("Controller: rendering failed: {}", e);
                self.last = None;
                if let Err(e2) = render::render_error(&mut self.renderer, TXT_RENDER_FAILED) {
                    loge!("Controller: error message failed too: {}", e2);
                }
                Err(e)
            }
        }
    }

    fn apply_query(&mut self, text: &str) -> Result<RenderSummary, RenderError> {
        self.selection.set_query(text);
        self.refresh()
    }

    fn sync_specialties(&mut self) {
        let options = filter::derive_specialties(&self.providers, self.selection.category());
        self.controls.specialty.set_options(options);
        self.controls.specialty.set_value(None);
    }
}
