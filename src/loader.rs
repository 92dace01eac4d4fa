// src/loader.rs
//
// Fetch every source in parallel, stamp records with the source's category,
// and concatenate. A failing source contributes nothing and never aborts the
// others; only "every source failed" is an error for the caller.

use std::{
    sync::{mpsc, atomic::{AtomicUsize, Ordering}},
    thread,
};

use thiserror::Error;

use crate::{
    config::{consts::WORKERS, options::SourceSpec},
    core::net::{Fetch, FetchError},
    model::{Category, Provider, RawRecord},
    progress::Progress,
};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("cannot parse body as a JSON array of records: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("no data sources configured")]
    NoSources,
    #[error("all {0} data sources failed to load")]
    AllSourcesFailed(usize),
    #[error("data sources loaded but held no usable records")]
    NothingLoaded,
}

/// Providers decoded from one source body.
#[derive(Debug, Default)]
pub struct Parsed {
    pub providers: Vec<Provider>,
    /// Array elements that were not usable records.
    pub skipped: usize,
}

#[derive(Debug)]
pub enum SourceStatus {
    Loaded { records: usize, skipped: usize },
    Failed(SourceError),
}

#[derive(Debug)]
pub struct SourceReport {
    pub source: SourceSpec,
    pub status: SourceStatus,
}

impl SourceReport {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, SourceStatus::Failed(_))
    }
}

/// Everything the initial load produced.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Concatenated in source order.
    pub providers: Vec<Provider>,
    pub sources: Vec<SourceReport>,
}

impl LoadReport {
    pub fn failed(&self) -> impl Iterator<Item = &SourceReport> {
        self.sources.iter().filter(|r| r.is_failed())
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    pub fn skipped(&self) -> usize {
        self.sources
            .iter()
            .map(|r| match r.status {
                SourceStatus::Loaded { skipped, .. } => skipped,
                SourceStatus::Failed(_) => 0,
            })
            .sum()
    }

    /// Providers, unless there was nothing to load or nothing came back.
    /// An empty merge is a load failure even when some sources answered,
    /// so it never reads as "no matches".
    pub fn into_providers(self) -> Result<Vec<Provider>, LoadError> {
        if self.sources.is_empty() {
            return Err(LoadError::NoSources);
        }
        if self.sources.iter().all(SourceReport::is_failed) {
            return Err(LoadError::AllSourcesFailed(self.sources.len()));
        }
        if self.providers.is_empty() {
            return Err(LoadError::NothingLoaded);
        }
        Ok(self.providers)
    }
}

/// Decode a source body. The body must be a JSON array; elements that are
/// not usable records are skipped and counted.
pub fn parse_source(body: &str, category: Category) -> Result<Parsed, serde_json::Error> {
    let items: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let mut parsed = Parsed { providers: Vec::with_capacity(items.len()), skipped: 0 };

    for (ix, item) in items.into_iter().enumerate() {
        match RawRecord::from_value(item).and_then(|raw| raw.into_provider(category)) {
            Ok(p) => parsed.providers.push(p),
            Err(reason) => {
                logw!("Load: {} record #{} skipped: {}", category, ix, reason);
                parsed.skipped += 1;
            }
        }
    }
    Ok(parsed)
}

/// Fetch and decode one source.
pub fn load_source<F>(fetcher: &F, source: &SourceSpec) -> Result<Parsed, SourceError>
where
    F: Fetch + ?Sized,
{
    let body = fetcher.fetch(&source.locator)?;
    let parsed = parse_source(&body, source.category)?;
    logd!("Load: {} items from {}", parsed.providers.len(), source.locator);
    Ok(parsed)
}

/// Load every source concurrently and join on all of them.
pub fn load_all<F>(
    fetcher: &F,
    sources: &[SourceSpec],
    mut progress: Option<&mut dyn Progress>,
) -> LoadReport
where
    F: Fetch + ?Sized,
{
    if let Some(p) = progress.as_deref_mut() {
        p.begin(sources.len());
    }
    logf!("Load: fetching {} source(s)", sources.len());

    let mut slots: Vec<Option<Result<Parsed, SourceError>>> =
        (0..sources.len()).map(|_| None).collect();

    if !sources.is_empty() {
        let (res_tx, res_rx) = mpsc::channel::<(usize, Result<Parsed, SourceError>)>();
        let next = AtomicUsize::new(0);
        let workers = WORKERS.min(sources.len()).max(1);

        thread::scope(|scope| {
            for _ in 0..workers {
                let tx = res_tx.clone();
                let next = &next;
                scope.spawn(move || loop {
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    if i >= sources.len() {
                        break;
                    }
                    let _ = tx.send((i, load_source(fetcher, &sources[i])));
                });
            }
            drop(res_tx); // this thread is the sole receiver now

            // Completion order; slots restore source order
            for (i, result) in res_rx.iter() {
                let source = &sources[i];
                match &result {
                    Ok(parsed) => {
                        if let Some(p) = progress.as_deref_mut() {
                            p.source_done(source.category, parsed.providers.len());
                        }
                    }
                    Err(e) => {
                        loge!("Load: error loading {}: {}", source.locator, e);
                        if let Some(p) = progress.as_deref_mut() {
                            p.source_failed(source.category, &e.to_string());
                        }
                    }
                }
                slots[i] = Some(result);
            }
        });
    }

    let mut report = LoadReport::default();
    for (source, slot) in sources.iter().zip(slots) {
        // Every slot is filled once the scope joins; treat a hole as a failed fetch.
        let status = match slot {
            Some(Ok(parsed)) => {
                let status = SourceStatus::Loaded {
                    records: parsed.providers.len(),
                    skipped: parsed.skipped,
                };
                report.providers.extend(parsed.providers);
                status
            }
            Some(Err(e)) => SourceStatus::Failed(e),
            None => SourceStatus::Failed(SourceError::Fetch(FetchError::Io {
                path: source.locator.clone().into(),
                source: std::io::Error::other("loader worker exited early"),
            })),
        };
        report.sources.push(SourceReport { source: source.clone(), status });
    }

    logf!(
        "Load: total providers={} failed_sources={} skipped_records={}",
        report.providers.len(),
        report.failed_count(),
        report.skipped()
    );
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_non_array_body() {
        assert!(parse_source(r#"{"name":"A"}"#, Category::Labs).is_err());
        assert!(parse_source("<html>404</html>", Category::Labs).is_err());
    }

    #[test]
    fn parse_skips_unusable_elements() {
        let body = r#"[
            {"name": "A", "area": "Cairo", "phone": "1"},
            {"name": "", "area": "Cairo"},
            42,
            {"name": "B", "area": "Giza", "phone": "2-3"}
        ]"#;
        let parsed = parse_source(body, Category::Clinics).unwrap();
        assert_eq!(parsed.skipped, 2);
        let names: Vec<&str> = parsed.providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert!(parsed.providers.iter().all(|p| p.category == Category::Clinics));
    }

    #[test]
    fn empty_source_list_is_no_sources() {
        struct Never;
        impl Fetch for Never {
            fn fetch(&self, _: &str) -> Result<String, FetchError> {
                unreachable!()
            }
        }
        let report = load_all(&Never, &[], None);
        assert_eq!(report.into_providers().unwrap_err(), LoadError::NoSources);
    }

    #[test]
    fn empty_sources_alone_are_nothing_loaded() {
        struct Blank;
        impl Fetch for Blank {
            fn fetch(&self, _: &str) -> Result<String, FetchError> {
                Ok(s!("[]"))
            }
        }
        let sources = crate::config::options::default_sources();
        let report = load_all(&Blank, &sources, None);
        assert_eq!(report.failed_count(), 0);
        assert_eq!(report.into_providers().unwrap_err(), LoadError::NothingLoaded);
    }
}
