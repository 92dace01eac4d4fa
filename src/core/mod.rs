// src/core/mod.rs

pub mod collate;
pub mod net;
pub mod sanitize;
