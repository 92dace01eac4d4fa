// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::model::Category;

/// One data source: where to fetch it and which category it feeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSpec {
    pub locator: String,
    pub category: Category,
}

impl SourceSpec {
    pub fn new(locator: impl Into<String>, category: Category) -> Self {
        Self { locator: locator.into(), category }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataOptions {
    /// Base for relative locators: a directory, or an http(s) URL prefix.
    pub root: String,
    pub sources: Vec<SourceSpec>,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self {
            root: s!(DEFAULT_DATA_ROOT),
            sources: default_sources(),
        }
    }
}

/// The five bundled files, one per category.
pub fn default_sources() -> Vec<SourceSpec> {
    Category::ALL
        .iter()
        .map(|c| SourceSpec::new(c.default_file(), *c))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub data: DataOptions,
    pub debounce: Duration,
    /// Font with Arabic glyphs for the GUI; egui's bundled fonts lack them.
    pub font_path: Option<PathBuf>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            data: DataOptions::default(),
            debounce: Duration::from_millis(DEBOUNCE_MS),
            font_path: None,
        }
    }
}

impl AppOptions {
    /// Defaults, then `.env`, then process environment.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            logd!("Config: loaded {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(root) = lookup(ENV_DATA_ROOT).filter(|v| !v.trim().is_empty()) {
            opts.data.root = root.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_DEBOUNCE_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => opts.debounce = Duration::from_millis(ms),
                Err(e) => logw!("Config: ignoring {}={:?}: {}", ENV_DEBOUNCE_MS, raw, e),
            }
        }

        if let Some(font) = lookup(ENV_FONT).filter(|v| !v.trim().is_empty()) {
            opts.font_path = Some(PathBuf::from(font.trim()));
        }

        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_cover_every_category_once() {
        let opts = AppOptions::default();
        assert_eq!(opts.data.sources.len(), Category::ALL.len());
        assert_eq!(opts.data.sources[3].locator, "labs.json");
        assert_eq!(opts.data.sources[3].category, Category::Labs);
        assert_eq!(opts.debounce, Duration::from_millis(300));
    }

    #[test]
    fn lookup_overrides_and_ignores_garbage() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_DATA_ROOT, " https://example.org/data "),
            (ENV_DEBOUNCE_MS, "not-a-number"),
            (ENV_FONT, "fonts/Amiri.ttf"),
        ]);
        let opts = AppOptions::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(opts.data.root, "https://example.org/data");
        assert_eq!(opts.debounce, Duration::from_millis(DEBOUNCE_MS));
        assert_eq!(opts.font_path, Some(PathBuf::from("fonts/Amiri.ttf")));
    }
}
