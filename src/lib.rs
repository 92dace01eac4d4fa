// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod controller;
pub mod controls;
pub mod core;
pub mod debounce;
pub mod filter;
pub mod gui;
pub mod loader;
pub mod model;
pub mod progress;
pub mod render;

pub use controller::{Controller, Controls};
pub use filter::{apply_filters, derive_areas, derive_specialties, Selection};
pub use loader::{load_all, LoadError, LoadReport};
pub use model::{split_phones, Category, Provider};
