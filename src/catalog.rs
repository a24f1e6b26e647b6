//! The read-only catalog and every query the pages run against it.
//!
//! A [`Catalog`] is built once (from `catalog.toml`/`catalog.json` in the
//! content root, or from the bundled sample) and then handed by reference to
//! the renderers. Nothing mutates it afterwards, and there is no global
//! instance: tests build their own from [`Catalog::new`].
//!
//! The free functions ([`filter_by_category`], [`find_by_id`],
//! [`find_related`], [`featured_subset`]) are pure and work on any artwork
//! slice; the `Catalog` methods are thin wrappers over them.

use crate::types::{Artwork, Category, Exhibition, slugify};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filter id meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Maximum number of related works shown on a detail page.
pub const RELATED_LIMIT: usize = 3;

const SAMPLE_CATALOG: &str = include_str!("../fixtures/catalog.toml");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Artwork at position {0} has an empty id")]
    EmptyId(usize),
    #[error("Artwork id {0:?} cannot be used as a URL path segment")]
    InvalidId(String),
    #[error("Duplicate artwork id: {0}")]
    DuplicateId(String),
    #[error("Artwork {0} has no images")]
    NoImages(String),
}

/// On-disk shape of a catalog file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CatalogFile {
    artworks: Vec<Artwork>,
    exhibitions: Vec<Exhibition>,
}

/// A series as shown in navigation and the featured-series block.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub count: usize,
}

/// Counters displayed by the portfolio stats block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub artworks: u64,
    pub exhibitions: u64,
    pub collections: u64,
    pub years_of_practice: u64,
}

/// Immutable artwork and exhibition lists, validated at construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    artworks: Vec<Artwork>,
    exhibitions: Vec<Exhibition>,
}

impl Catalog {
    /// Build a catalog, enforcing usable unique ids and non-empty image lists.
    pub fn new(artworks: Vec<Artwork>, exhibitions: Vec<Exhibition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (pos, artwork) in artworks.iter().enumerate() {
            if artwork.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(pos));
            }
            if artwork.id.contains(['/', '\\', '?', '#']) || artwork.id.starts_with('.') {
                return Err(CatalogError::InvalidId(artwork.id.clone()));
            }
            if !seen.insert(artwork.id.as_str()) {
                return Err(CatalogError::DuplicateId(artwork.id.clone()));
            }
            if artwork.images.is_empty() {
                return Err(CatalogError::NoImages(artwork.id.clone()));
            }
        }
        Ok(Self {
            artworks,
            exhibitions,
        })
    }

    /// The sample catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_toml_str(SAMPLE_CATALOG)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.artworks, file.exhibitions)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::new(file.artworks, file.exhibitions)
    }

    /// Load the catalog from a content directory.
    ///
    /// Looks for `catalog.toml`, then `catalog.json`. Returns the bundled
    /// sample (and `None` as the source) when neither exists.
    pub fn load(root: &Path) -> Result<(Self, Option<PathBuf>), CatalogError> {
        let toml_path = root.join("catalog.toml");
        if toml_path.exists() {
            let catalog = Self::from_toml_str(&fs::read_to_string(&toml_path)?)?;
            return Ok((catalog, Some(toml_path)));
        }
        let json_path = root.join("catalog.json");
        if json_path.exists() {
            let catalog = Self::from_json_str(&fs::read_to_string(&json_path)?)?;
            return Ok((catalog, Some(json_path)));
        }
        tracing::info!("no catalog in {}, using bundled sample", root.display());
        Ok((Self::bundled()?, None))
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn exhibitions(&self) -> &[Exhibition] {
        &self.exhibitions
    }

    pub fn filter_by_category(&self, category_id: &str) -> Vec<&Artwork> {
        filter_by_category(&self.artworks, category_id)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Artwork> {
        find_by_id(&self.artworks, id)
    }

    pub fn find_related(&self, artwork: &Artwork) -> Vec<&Artwork> {
        find_related(&self.artworks, artwork)
    }

    pub fn featured_subset(&self, n: usize) -> Vec<&Artwork> {
        featured_subset(&self.artworks, n)
    }

    pub fn filter_by_series(&self, slug: &str) -> Vec<&Artwork> {
        filter_by_series(&self.artworks, slug)
    }

    /// The first `n` exhibitions, newest first as listed in the catalog.
    pub fn recent_exhibitions(&self, n: usize) -> &[Exhibition] {
        &self.exhibitions[..n.min(self.exhibitions.len())]
    }

    /// Exhibitions shown on a detail page: the artwork's own history when it
    /// has one, otherwise the three most recent catalog exhibitions.
    pub fn exhibition_history<'a>(&'a self, artwork: &'a Artwork) -> &'a [Exhibition] {
        match &artwork.exhibitions {
            Some(own) => own,
            None => self.recent_exhibitions(3),
        }
    }

    /// Distinct series in first-appearance order.
    pub fn series(&self) -> Vec<SeriesSummary> {
        let mut out: Vec<SeriesSummary> = Vec::new();
        for artwork in &self.artworks {
            let Some(name) = artwork.series.as_deref() else {
                continue;
            };
            let description = artwork
                .series_description
                .as_ref()
                .filter(|d| !d.trim().is_empty());
            match out.iter_mut().find(|s| s.name == name) {
                Some(existing) => {
                    existing.count += 1;
                    if existing.description.is_none() {
                        existing.description = description.cloned();
                    }
                }
                None => out.push(SeriesSummary {
                    name: name.to_string(),
                    slug: slugify(name),
                    description: description.cloned(),
                    count: 1,
                }),
            }
        }
        out
    }

    pub fn stats(&self, years_of_practice: u64) -> CatalogStats {
        CatalogStats {
            artworks: self.artworks.len() as u64,
            exhibitions: self.exhibitions.len() as u64,
            collections: self.series().len() as u64,
            years_of_practice,
        }
    }

    /// Number of artworks per category, in filter-tab order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.artworks.iter().filter(|a| a.category == c).count()))
            .collect()
    }
}

/// Entries whose category id equals `category_id`, or everything for `"all"`.
///
/// Unknown ids simply match nothing.
pub fn filter_by_category<'a>(list: &'a [Artwork], category_id: &str) -> Vec<&'a Artwork> {
    if category_id == ALL_CATEGORIES {
        return list.iter().collect();
    }
    list.iter()
        .filter(|a| a.category.id() == category_id)
        .collect()
}

pub fn find_by_id<'a>(list: &'a [Artwork], id: &str) -> Option<&'a Artwork> {
    list.iter().find(|a| a.id == id)
}

/// Up to [`RELATED_LIMIT`] works related to `artwork`.
///
/// Same-series works win; same-category works are only consulted when no
/// other work shares the series (or the artwork has none).
pub fn find_related<'a>(list: &'a [Artwork], artwork: &Artwork) -> Vec<&'a Artwork> {
    if let Some(series) = artwork.series.as_deref() {
        let same_series: Vec<&Artwork> = list
            .iter()
            .filter(|a| a.id != artwork.id && a.series.as_deref() == Some(series))
            .take(RELATED_LIMIT)
            .collect();
        if !same_series.is_empty() {
            return same_series;
        }
    }

    list.iter()
        .filter(|a| a.id != artwork.id && a.category == artwork.category)
        .take(RELATED_LIMIT)
        .collect()
}

pub fn featured_subset(list: &[Artwork], n: usize) -> Vec<&Artwork> {
    list.iter().filter(|a| a.featured).take(n).collect()
}

/// Works whose series slugifies to `slug`.
pub fn filter_by_series<'a>(list: &'a [Artwork], slug: &str) -> Vec<&'a Artwork> {
    list.iter()
        .filter(|a| a.series.as_deref().is_some_and(|s| slugify(s) == slug))
        .collect()
}
