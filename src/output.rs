//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (artwork, exhibition, page) is its semantic identity,
//! title and positional index, with file names shown as secondary context on
//! indented lines. This keeps the output readable as a catalog inventory
//! while still letting users trace problems back to specific files.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Artworks
//! 001 Urban Reflections I (3 images)
//!     Category: Paintings
//!     Series: Urban Reflections
//!     Missing: urban-reflections-i-detail.jpg
//!
//! Exhibitions
//! 001 Contemporary Visions (2024)
//!     MoMA PS1, New York
//!
//! Series
//! 001 Urban Reflections (3 works)
//!
//! Content
//!     Catalog: content/catalog.toml
//!     About: content/about.md
//!     Missing images: 1
//! ```
//!
//! ## Build / Routes
//!
//! ```text
//! Home → index.html
//! Portfolio: Drawings → portfolio/drawings/index.html
//! Artwork: Urban Reflections I → artwork/urban-reflections-i/index.html
//!
//! Generated 20 pages, copied 4 images
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::catalog::Catalog;
use crate::generate::{BuildReport, Site};
use crate::route::Route;
use crate::types::Category;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Human name of the page a route renders.
pub fn route_label(route: &Route, catalog: &Catalog) -> String {
    match route {
        Route::Home => "Home".to_string(),
        Route::About => "About".to_string(),
        Route::Contact => "Contact".to_string(),
        Route::NotFound => "Not found".to_string(),
        Route::Portfolio { category, series } => {
            let tab = match category.as_deref() {
                None => "All Works".to_string(),
                Some(id) => Category::from_id(id)
                    .map(|c| c.label().to_string())
                    .unwrap_or_else(|| format!("{id} (unknown category)")),
            };
            match series {
                Some(s) => format!("Portfolio: {tab}, series {s}"),
                None => format!("Portfolio: {tab}"),
            }
        }
        Route::Artwork { id } => match catalog.find_by_id(id) {
            Some(artwork) => format!("Artwork: {}", artwork.title),
            None => format!("Artwork: {id}"),
        },
    }
}

fn route_line(route: &Route, catalog: &Catalog) -> String {
    format!(
        "{} → {}",
        route_label(route, catalog),
        route.output_path().display()
    )
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(site: &Site) -> Vec<String> {
    let catalog = &site.catalog;
    let mut lines = vec!["Artworks".to_string()];
    for (i, artwork) in catalog.artworks().iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            artwork.title,
            plural(artwork.images.len(), "image", "images")
        ));
        lines.push(format!("{}Category: {}", indent(1), artwork.category.label()));
        if let Some(series) = &artwork.series {
            lines.push(format!("{}Series: {}", indent(1), series));
        }
        for file in site.assets.missing(
            crate::assets::ImageKind::Artwork,
            artwork.images.iter().map(String::as_str),
        ) {
            lines.push(format!("{}Missing: {}", indent(1), file));
        }
    }

    lines.push(String::new());
    lines.push("Exhibitions".to_string());
    for (i, exhibition) in catalog.exhibitions().iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            exhibition.title,
            exhibition.year
        ));
        lines.push(format!(
            "{}{}, {}",
            indent(1),
            exhibition.venue,
            exhibition.location
        ));
    }

    let series = catalog.series();
    if !series.is_empty() {
        lines.push(String::new());
        lines.push("Series".to_string());
        for (i, s) in series.iter().enumerate() {
            lines.push(format!(
                "{} {} ({})",
                format_index(i + 1),
                s.name,
                plural(s.count, "work", "works")
            ));
        }
    }

    lines.push(String::new());
    lines.push("Content".to_string());
    lines.push(match &site.catalog_source {
        Some(path) => format!("{}Catalog: {}", indent(1), path.display()),
        None => format!("{}Catalog: bundled sample", indent(1)),
    });
    lines.push(match (&site.about, &site.source) {
        (Some(_), Some(source)) => {
            format!("{}About: {}", indent(1), source.join("about.md").display())
        }
        (Some(_), None) => format!("{}About: custom", indent(1)),
        (None, _) => format!("{}About: stock biography", indent(1)),
    });
    lines.push(format!(
        "{}Missing images: {}",
        indent(1),
        site.missing_images().len()
    ));
    lines
}

pub fn print_check_output(site: &Site) {
    for line in format_check_output(site) {
        println!("{}", line);
    }
}

// ============================================================================
// Routes / Build
// ============================================================================

pub fn format_routes(catalog: &Catalog) -> Vec<String> {
    Route::all(catalog)
        .iter()
        .map(|route| route_line(route, catalog))
        .collect()
}

pub fn print_routes(catalog: &Catalog) {
    for line in format_routes(catalog) {
        println!("{}", line);
    }
}

pub fn format_build_output(site: &Site, report: &BuildReport, output_dir: &Path) -> Vec<String> {
    let mut lines = format_routes(&site.catalog);
    lines.push(String::new());
    lines.push(format!(
        "Generated {}, copied {}",
        plural(report.pages.len(), "page", "pages"),
        plural(report.images_copied, "image", "images")
    ));
    let missing = site.missing_images().len();
    if missing > 0 {
        lines.push(format!(
            "{} rendered as placeholders (run `atelier check` for details)",
            plural(missing, "image", "images")
        ));
    }
    lines.push(format!("Site written to {}", output_dir.display()));
    lines
}

pub fn print_build_output(site: &Site, report: &BuildReport, output_dir: &Path) {
    for line in format_build_output(site, report, output_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Resolve
// ============================================================================

/// Where a URL lands. `requested` is the parsed route before catalog lookup.
pub fn format_resolve(path: &str, requested: &Route, catalog: &Catalog) -> Vec<String> {
    let resolved = requested.clone().resolve(catalog);
    let mut lines = vec![format!("{} → {}", path, route_line(&resolved, catalog))];
    if resolved != *requested {
        lines.push(format!(
            "{}{} is not in the catalog",
            indent(1),
            route_label(requested, catalog)
        ));
    }
    if let Route::Portfolio { category, series } = &resolved {
        let filter = category
            .as_deref()
            .unwrap_or(crate::catalog::ALL_CATEGORIES);
        lines.push(format!(
            "{}Shows {}",
            indent(1),
            plural(catalog.filter_by_category(filter).len(), "artwork", "artworks")
        ));
        if let Some(slug) = series {
            lines.push(format!(
                "{}Series hint: {} ({})",
                indent(1),
                slug,
                plural(catalog.filter_by_series(slug).len(), "work", "works")
            ));
        }
    }
    lines
}

pub fn print_resolve(path: &str, requested: &Route, catalog: &Catalog) {
    for line in format_resolve(path, requested, catalog) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
