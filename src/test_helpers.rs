//! Shared test utilities for the atelier test suite.
//!
//! Builders for catalog entities plus small extractors so assertions can
//! compare id lists instead of whole structs.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let list = vec![
//!     in_series(artwork("a1", Category::Paintings), "S1"),
//!     artwork("a3", Category::Drawings),
//! ];
//! assert_eq!(ids(&find_related(&list, &list[0])), Vec::<&str>::new());
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::catalog::Catalog;
use crate::types::{Artwork, Category, Exhibition, ExhibitionKind};

// =========================================================================
// Entity builders
// =========================================================================

/// A minimal valid artwork: one image, not featured, no series.
pub fn artwork(id: &str, category: Category) -> Artwork {
    Artwork {
        id: id.to_string(),
        title: format!("Title {id}"),
        year: 2023,
        medium: "Oil on Canvas".to_string(),
        dimensions: "40 x 50 in".to_string(),
        category,
        images: vec![format!("{id}.jpg")],
        series: None,
        series_description: None,
        description: None,
        artist_note: None,
        available: true,
        price: None,
        featured: false,
        exhibitions: None,
    }
}

pub fn in_series(mut artwork: Artwork, series: &str) -> Artwork {
    artwork.series = Some(series.to_string());
    artwork
}

pub fn exhibition(title: &str) -> Exhibition {
    Exhibition {
        title: title.to_string(),
        venue: "Gallery".to_string(),
        location: "New York".to_string(),
        year: 2024,
        dates: "June - August 2024".to_string(),
        kind: ExhibitionKind::Group,
        description: format!("About {title}."),
    }
}

/// The bundled sample catalog. Panics if it fails validation.
pub fn sample_catalog() -> Catalog {
    Catalog::bundled().unwrap_or_else(|e| panic!("bundled catalog invalid: {e}"))
}

// =========================================================================
// Extractors
// =========================================================================

/// Artwork ids in order.
pub fn ids<'a>(artworks: &[&'a Artwork]) -> Vec<&'a str> {
    artworks.iter().map(|a| a.id.as_str()).collect()
}

// =========================================================================
// Filesystem fixtures
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_content() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    for entry in walkdir::WalkDir::new(&fixtures) {
        let entry = entry.unwrap();
        let rel = entry.path().strip_prefix(&fixtures).unwrap();
        let dst = tmp.path().join(rel);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dst).unwrap();
        } else {
            std::fs::copy(entry.path(), &dst).unwrap();
        }
    }
    tmp
}
