// src/cli.rs
//
// Headless front end: load every source, apply one selection, print the
// results. Filtering goes through the same Controller the GUI drives.

use std::{
    io::{self, Write},
    time::Duration,
};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::{
    config::{
        consts::TXT_LOAD_FAILED,
        options::{AppOptions, SourceSpec},
    },
    controller::{Controller, Controls},
    controls::{ControlEvent, ListSelect},
    core::net::SourceFetcher,
    debounce::SystemClock,
    filter,
    loader,
    log::{self, LogTarget},
    model::{Category, Provider},
    progress::Progress,
    render::{self, html::HtmlRenderer, text::TextRenderer, Renderer, SlotRenderer},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Html,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "provider-directory-cli")]
#[command(about = "Search the healthcare provider directory from the terminal")]
pub struct Args {
    /// Data root: a directory or an http(s) URL prefix
    #[arg(long)]
    pub data: Option<String>,

    /// Override one source, e.g. `labs=https://host/labs.json`
    #[arg(long = "source", value_name = "CATEGORY=LOCATOR", value_parser = parse_source)]
    pub sources: Vec<SourceSpec>,

    /// hospitals, pharmacies, clinics, labs or doctors
    #[arg(long, value_parser = parse_category)]
    pub category: Option<Category>,

    #[arg(long)]
    pub specialty: Option<String>,

    #[arg(long)]
    pub area: Option<String>,

    /// Free text matched against name, specialty and area
    #[arg(long, short)]
    pub query: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Print the area dropdown options and exit
    #[arg(long)]
    pub list_areas: bool,

    /// Print the specialty options (for --category if given) and exit
    #[arg(long)]
    pub list_specialties: bool,

    /// Print per-category record counts and exit
    #[arg(long)]
    pub stats: bool,
}

pub fn run() -> Result<()> {
    log::init(LogTarget::Stderr, Some("warn"));
    let args = Args::parse();
    let options = options_for(&args, AppOptions::from_env());

    let fetcher = SourceFetcher::new(options.data.root.clone())
        .wrap_err("building HTTP client")?;
    let mut prog = CliProgress;
    let report = loader::load_all(&fetcher, &options.data.sources, Some(&mut prog));

    let providers = match report.into_providers() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", TXT_LOAD_FAILED);
            return Err(eyre!(e));
        }
    };

    let mut out = io::stdout().lock();

    if args.stats {
        for (category, n) in filter::category_counts(&providers) {
            writeln!(out, "{}\t{}\t{}", category.key(), category.label(), n)?;
        }
        return Ok(());
    }
    if args.list_areas {
        for area in filter::derive_areas(&providers) {
            writeln!(out, "{}", area)?;
        }
        return Ok(());
    }
    if args.list_specialties {
        for s in filter::derive_specialties(&providers, args.category) {
            writeln!(out, "{}", s)?;
        }
        return Ok(());
    }

    let c = search(providers, &args)?;
    let hits = c.filtered();
    logd!("CLI: {} of {} providers match", hits.len(), c.providers().len());

    match args.format {
        Format::Text => {
            let mut r = TextRenderer::new(&mut out);
            render::render_results(&mut r, &hits)?;
            r.finish()?;
        }
        Format::Html => {
            let mut r = HtmlRenderer::new();
            render::render_results(&mut r, &hits)?;
            writeln!(out, "{}", r.html())?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &hits)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Environment first, then flags on top. A `--source` replaces the locator
/// for its category, or adds one if that category had none.
pub fn options_for(args: &Args, mut options: AppOptions) -> AppOptions {
    if let Some(root) = &args.data {
        options.data.root = root.clone();
    }
    for spec in &args.sources {
        match options.data.sources.iter_mut().find(|s| s.category == spec.category) {
            Some(slot) => slot.locator = spec.locator.clone(),
            None => options.data.sources.push(spec.clone()),
        }
    }
    options
}

/// Feed the flags to a controller as if a user had picked them in order.
/// Category goes first since it resets the specialty. Intermediate renders
/// land in slots; the caller prints the final result set.
fn search(
    providers: Vec<Provider>,
    args: &Args,
) -> Result<Controller<ListSelect, SlotRenderer, SystemClock>> {
    let mut c = Controller::new(
        providers,
        Controls::<ListSelect>::default(),
        SlotRenderer::new(),
        SystemClock,
        Duration::ZERO,
    );

    let mut events = vec![ControlEvent::Category(args.category)];
    if let Some(s) = &args.specialty {
        events.push(ControlEvent::Specialty(Some(s.clone())));
    }
    if let Some(a) = &args.area {
        events.push(ControlEvent::Area(Some(a.clone())));
    }
    if let Some(q) = &args.query {
        events.push(ControlEvent::Query(q.clone()));
    }

    for ev in events {
        c.handle(ev)?;
    }
    c.flush_query()?;
    if c.last_render().is_none() {
        c.refresh()?;
    }

    Ok(c)
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse::<Category>().map_err(|e| e.to_string())
}

fn parse_source(s: &str) -> Result<SourceSpec, String> {
    let (cat, locator) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=LOCATOR, got {s:?}"))?;
    let locator = locator.trim();
    if locator.is_empty() {
        return Err(format!("empty locator in {s:?}"));
    }
    Ok(SourceSpec::new(locator, parse_category(cat.trim())?))
}

/// Load progress on stderr so stdout stays clean for piping.
struct CliProgress;

impl Progress for CliProgress {
    fn source_done(&mut self, category: Category, records: usize) {
        eprintln!("loaded {:<10} {:>5}", category.key(), records);
    }

    fn source_failed(&mut self, category: Category, reason: &str) {
        eprintln!("FAILED {:<10} {}", category.key(), reason);
    }
}
