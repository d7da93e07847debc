// src/lib.rs
//! Conference talk scraper: rendered list pages + per-talk detail pages → one CSV.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod error;
pub mod file;
pub mod merge;
pub mod progress;
pub mod runner;
pub mod session;
