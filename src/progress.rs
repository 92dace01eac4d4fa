// src/progress.rs
use crate::model::Category;

/// Lightweight progress reporting for the initial load.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sources.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One source loaded with `records` providers.
    fn source_done(&mut self, _category: Category, _records: usize) {}

    /// One source failed; it contributes nothing.
    fn source_failed(&mut self, _category: Category, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
