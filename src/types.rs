//! Catalog entities shared by the loader, the query layer and the renderers.
//!
//! Everything here is read-only once a [`Catalog`](crate::catalog::Catalog)
//! has been built. Field names match the `catalog.toml` keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Portfolio category an artwork is filed under.
///
/// Serialized with the kebab-case ids used in URLs (`mixed-media`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Paintings,
    Installations,
    Drawings,
    MixedMedia,
    Commissions,
}

impl Category {
    /// Every category, in filter-tab order.
    pub const ALL: [Category; 5] = [
        Category::Paintings,
        Category::Installations,
        Category::Drawings,
        Category::MixedMedia,
        Category::Commissions,
    ];

    /// URL / query-string id.
    pub fn id(self) -> &'static str {
        match self {
            Category::Paintings => "paintings",
            Category::Installations => "installations",
            Category::Drawings => "drawings",
            Category::MixedMedia => "mixed-media",
            Category::Commissions => "commissions",
        }
    }

    /// Filter tab label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Paintings => "Paintings",
            Category::Installations => "Installations",
            Category::Drawings => "Drawings",
            Category::MixedMedia => "Mixed Media",
            Category::Commissions => "Commissions",
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Whether an exhibition showed this artist alone or alongside others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExhibitionKind {
    Solo,
    Group,
}

/// A past exhibition. Exhibitions have no identifier; they are addressed by
/// list position or embedded directly in an [`Artwork`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Exhibition {
    pub title: String,
    pub venue: String,
    pub location: String,
    pub year: u16,
    /// Human-readable date range, e.g. "June - August 2024".
    pub dates: String,
    pub kind: ExhibitionKind,
    pub description: String,
}

/// A single work in the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Artwork {
    /// Unique across the catalog; used in `/artwork/:id`.
    pub id: String,
    pub title: String,
    pub year: u16,
    pub medium: String,
    pub dimensions: String,
    pub category: Category,
    /// Image filenames under the artworks asset directory. The first one is
    /// the cover. Never empty in a loaded catalog.
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_description: Option<String>,
    /// Paragraphs separated by blank lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_note: Option<String>,
    #[serde(default)]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exhibitions: Option<Vec<Exhibition>>,
}

impl Artwork {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Description paragraphs, or a generic sentence built from the medium.
    pub fn description_paragraphs(&self) -> Vec<String> {
        match &self.description {
            Some(text) if !text.trim().is_empty() => text
                .split("\n\n")
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
            _ => vec![format!(
                "This {} piece explores themes of form and color through careful composition and technique.",
                self.medium.to_lowercase()
            )],
        }
    }

    /// Text for the series context block. `None` when not part of a series.
    pub fn series_context(&self) -> Option<String> {
        let series = self.series.as_deref()?;
        Some(match &self.series_description {
            Some(desc) if !desc.trim().is_empty() => desc.clone(),
            _ => format!(
                "This work is part of the \"{series}\" series, an ongoing exploration of related themes and visual concepts."
            ),
        })
    }

    pub fn availability_label(&self) -> &'static str {
        if self.available { "Available" } else { "Sold" }
    }
}

/// Lowercase, dash-separated slug used for series deep links.
///
/// `"Urban Reflections"` → `"urban-reflections"`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::artwork;

    #[test]
    fn category_ids_roundtrip() {
        for c in Category::ALL {
            assert_eq!(Category::from_id(c.id()), Some(c));
        }
        assert_eq!(Category::from_id("all"), None);
        assert_eq!(Category::from_id("sculpture"), None);
    }

    #[test]
    fn category_deserializes_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrap {
            c: Category,
        }
        let w: Wrap = toml::from_str(r#"c = "mixed-media""#).unwrap();
        assert_eq!(w.c, Category::MixedMedia);
    }

    #[test]
    fn description_splits_paragraphs() {
        let mut a = artwork("a1", Category::Paintings);
        a.description = Some("First.\n\nSecond.\n\n".to_string());
        assert_eq!(a.description_paragraphs(), vec!["First.", "Second."]);
    }

    #[test]
    fn description_falls_back_to_medium() {
        let mut a = artwork("a1", Category::Paintings);
        a.medium = "Oil on Canvas".to_string();
        let paragraphs = a.description_paragraphs();
        assert_eq!(paragraphs.len(), 1);
        assert!(paragraphs[0].starts_with("This oil on canvas piece"));
    }

    #[test]
    fn series_context_prefers_description() {
        let mut a = artwork("a1", Category::Paintings);
        assert_eq!(a.series_context(), None);

        a.series = Some("Urban Reflections".to_string());
        assert!(a.series_context().unwrap().contains("\"Urban Reflections\" series"));

        a.series_description = Some("Light on glass.".to_string());
        assert_eq!(a.series_context().as_deref(), Some("Light on glass."));
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Urban Reflections"), "urban-reflections");
        assert_eq!(slugify("  Color & Form "), "color-form");
        assert_eq!(slugify("S1"), "s1");
    }
}
