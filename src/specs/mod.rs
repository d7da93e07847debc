// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific readers for the conference site. Each spec covers one page kind
//! and knows *where the data lives in the rendered HTML*.
//!
//! ## What lives here
//! - `selectors` – the selector schema (logical field → CSS query), swappable as a whole.
//! - `talks` – the talks list page: session containers, track badges, LT bundles.
//! - `detail` – one session's detail page: description, thumbnail, speaker block.
//!
//! ## What does **not** live here
//! - **Rendering** – specs take HTML text; the runner decides when to render.
//! - **Merging and room derivation** – see `merge`.
//! - **Export formatting** – see `csv` / `file`.
//!
//! ## Conventions & invariants
//! - Extraction never fails: missing nodes become absent fields or skipped stubs.
//! - Links are absolutized against the explicit `BaseUrl` handed in by the caller.
//! - Specs are testable **offline** against inline HTML fixtures.
pub mod detail;
pub mod selectors;
pub mod talks;
