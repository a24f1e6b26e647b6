//! # Atelier
//!
//! A static site generator for a single artist's portfolio. A catalog of
//! artworks and exhibitions, an optional biography and a folder of images
//! become a self-contained site: Home, About, Portfolio (one page per
//! category tab), one page per artwork, Contact and a not-found page.
//!
//! # Architecture
//!
//! ```text
//! content/config.toml ──▶ SiteConfig ─┐
//! content/catalog.toml ─▶ Catalog ────┼──▶ Site ──▶ Route::all ──▶ render ──▶ dist/
//! content/about.md ───────────────────┘
//! ```
//!
//! The [`Catalog`](catalog::Catalog) is built once and passed by reference to
//! every renderer; nothing mutates it after loading. Page rendering is pure
//! and runs on a rayon pool; file writes are sequential.
//!
//! The interactive parts of the site (reveal on scroll, count-up statistics,
//! custom cursor, magnetic buttons, parallax, the auto-hiding header, the
//! contact form) are modelled in [`motion`] and [`contact`] as small state
//! machines that advance only when fed events. The generated pages carry
//! their parameters as `data-*` attributes and an embedded script runs the
//! same math in the browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Catalog entities: `Artwork`, `Exhibition`, `Category` |
//! | [`catalog`] | Loading, validation and the pure filter/lookup queries |
//! | [`route`] | URL path ↔ page ↔ output file |
//! | [`assets`] | Image URLs and build-time placeholders |
//! | [`generate`] | Renders every page with Maud and writes the site |
//! | [`motion`] | Reveal, count-up, cursor, parallax and header models |
//! | [`contact`] | Contact form state machine and delivery transport |
//! | [`config`] | `config.toml` loading, merging, validation and CSS generation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Static Pages For Filters
//!
//! The portfolio filter is a query parameter in the URL scheme
//! (`/portfolio?category=drawings`) but every tab is also written as its own
//! page (`portfolio/drawings/index.html`), so the site works from any file
//! server with no rewriting rules.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a compile error, template variables are Rust expressions, and all
//! interpolation is escaped.

pub mod assets;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod generate;
pub mod motion;
pub mod output;
pub mod route;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
