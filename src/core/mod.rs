// src/core/mod.rs

pub mod html;
pub mod render;
pub mod urls;
