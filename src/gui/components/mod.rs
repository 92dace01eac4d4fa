// src/gui/components/mod.rs
pub mod filter_bar;
pub mod results;
pub mod stats_bar;
