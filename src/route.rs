//! Route table: URL path ↔ page ↔ output file.
//!
//! | Path | Page | Output |
//! |------|------|--------|
//! | `/` | Home | `index.html` |
//! | `/about` | About | `about/index.html` |
//! | `/portfolio` | Portfolio, all works | `portfolio/index.html` |
//! | `/portfolio?category=drawings` | Portfolio, one tab | `portfolio/drawings/index.html` |
//! | `/artwork/:id` | ArtworkDetail | `artwork/:id/index.html` |
//! | `/contact` | Contact | `contact/index.html` |
//! | anything else | NotFound | `404.html` |
//!
//! Because the site is static, each category tab is its own page, so
//! `/portfolio/drawings/` is accepted as a synonym for the query form. The
//! `series` query parameter is only a hint for the page script, which
//! scrolls to the first work in that series.

use crate::catalog::{ALL_CATEGORIES, Catalog};
use crate::types::Category;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Portfolio {
        /// `None` for the "all" tab.
        category: Option<String>,
        series: Option<String>,
    },
    Artwork {
        id: String,
    },
    Contact,
    NotFound,
}

impl Route {
    /// Parse a site-relative URL such as `/portfolio?category=drawings`.
    ///
    /// Never fails: anything unrecognised is [`Route::NotFound`].
    pub fn parse(path: &str) -> Route {
        let Ok(url) = Url::parse("http://localhost/").and_then(|base| base.join(path)) else {
            return Route::NotFound;
        };
        let segments: Vec<String> = url
            .path_segments()
            .map(|segs| {
                segs.filter(|s| !s.is_empty() && *s != "index.html")
                    .map(percent_decode)
                    .collect()
            })
            .unwrap_or_default();
        let query = |key: &str| {
            url.query_pairs()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.into_owned())
                .filter(|v| !v.is_empty())
        };

        match segments.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["contact"] => Route::Contact,
            ["portfolio"] => Route::portfolio(query("category"), query("series")),
            ["portfolio", category] => {
                Route::portfolio(Some(category.to_string()), query("series"))
            }
            ["artwork", id] => Route::Artwork { id: id.to_string() },
            _ => Route::NotFound,
        }
    }

    fn portfolio(category: Option<String>, series: Option<String>) -> Route {
        Route::Portfolio {
            category: category.filter(|c| c != ALL_CATEGORIES),
            series,
        }
    }

    /// Link target used in generated markup.
    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about/".to_string(),
            Route::Contact => "/contact/".to_string(),
            Route::Portfolio { category, series } => {
                let mut href = match category {
                    Some(c) => format!("/portfolio/{}/", urlencoding::encode(c)),
                    None => "/portfolio/".to_string(),
                };
                if let Some(s) = series {
                    href.push_str("?series=");
                    href.push_str(&urlencoding::encode(s));
                }
                href
            }
            Route::Artwork { id } => format!("/artwork/{}/", urlencoding::encode(id)),
            Route::NotFound => "/404.html".to_string(),
        }
    }

    /// File written for this route, relative to the output directory.
    pub fn output_path(&self) -> PathBuf {
        match self {
            Route::Home => PathBuf::from("index.html"),
            Route::About => PathBuf::from("about/index.html"),
            Route::Contact => PathBuf::from("contact/index.html"),
            Route::Portfolio { category, .. } => match category {
                Some(c) => PathBuf::from("portfolio").join(c).join("index.html"),
                None => PathBuf::from("portfolio/index.html"),
            },
            Route::Artwork { id } => PathBuf::from("artwork").join(id).join("index.html"),
            Route::NotFound => PathBuf::from("404.html"),
        }
    }

    /// Top-level nav entry highlighted for this route.
    pub fn nav_key(&self) -> Option<&'static str> {
        match self {
            Route::Home => Some("home"),
            Route::About => Some("about"),
            Route::Portfolio { .. } | Route::Artwork { .. } => Some("portfolio"),
            Route::Contact => Some("contact"),
            Route::NotFound => None,
        }
    }

    /// Map routes that name something missing from the catalog to
    /// [`Route::NotFound`]. Unknown portfolio categories stay valid: they
    /// render the empty state.
    pub fn resolve(self, catalog: &Catalog) -> Route {
        match self {
            Route::Artwork { ref id } if catalog.find_by_id(id).is_none() => Route::NotFound,
            other => other,
        }
    }

    /// Every page the generator writes, in build order.
    pub fn all(catalog: &Catalog) -> Vec<Route> {
        let mut routes = vec![
            Route::Home,
            Route::About,
            Route::portfolio(None, None),
        ];
        routes.extend(
            Category::ALL
                .into_iter()
                .map(|c| Route::portfolio(Some(c.id().to_string()), None)),
        );
        routes.extend(catalog.artworks().iter().map(|a| Route::Artwork {
            id: a.id.clone(),
        }));
        routes.push(Route::Contact);
        routes.push(Route::NotFound);
        routes
    }
}

/// Path segments keep `+` literal; only `%XX` escapes are decoded.
fn percent_decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
