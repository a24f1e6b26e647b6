//! HTML site generation.
//!
//! Loads the content directory into a [`Site`] and renders every
//! [`Route`] to a static file.
//!
//! ## Generated Pages
//!
//! - **Home** (`/index.html`): hero, selected works, recent exhibitions,
//!   artwork mini-grid, contact block
//! - **About** (`/about/index.html`): biography from `about.md` (or a stock
//!   text), portrait, exhibitions, practice summary
//! - **Portfolio** (`/portfolio/index.html`, `/portfolio/{category}/index.html`):
//!   filter tabs, masonry grid, featured series, animated stats
//! - **Artwork detail** (`/artwork/{id}/index.html`): hero, details table,
//!   gallery with lightbox, series context, related works, exhibition history
//! - **Contact** (`/contact/index.html`): details, form, FAQ
//! - **Not found** (`/404.html`)
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── 404.html
//! ├── about/index.html
//! ├── contact/index.html
//! ├── portfolio/
//! │   ├── index.html             # "All Works" tab
//! │   └── drawings/index.html    # one page per category tab
//! ├── artwork/
//! │   └── urban-reflections-i/index.html
//! └── images/                    # copied from the content directory
//!     ├── artworks/...
//!     └── artist/...
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: base styles (colors injected from config)
//! - `static/site.js`: reveal, count-up, cursor, parallax, header, lightbox,
//!   contact form and image fallback behaviour
//!
//! The script reads its tuning from `data-*` attributes on `<body>`, which
//! come from the `[motion]` and `[contact]` config sections.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::assets::{AssetResolver, ImageKind, render_picture};
use crate::catalog::{Catalog, CatalogError, SeriesSummary};
use crate::config::{self, SiteConfig};
use crate::contact::ContactForm;
use crate::motion::count_up::START_THRESHOLD;
use crate::motion::cursor::CursorFollower;
use crate::motion::header::{HIDE_AFTER, HeaderState, SCROLLED_AFTER};
use crate::route::Route;
use crate::types::{Artwork, Category, Exhibition, ExhibitionKind};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Asset copy error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// Card aspect ratios, cycled through the portfolio masonry grid.
const ASPECT_RATIOS: [&str; 6] = ["4/5", "3/4", "1/1", "4/3", "3/4", "4/5"];

const HOME_INTRO: &str = "As a contemporary visual artist, I explore the intersection of form, \
color, and emotion through diverse mediums. My work reflects a deep engagement with minimalist \
aesthetics and the subtle power of composition. Drawing inspiration from everyday moments and \
urban landscapes, I create pieces that invite contemplation and dialogue.";

const STOCK_BIO: [&str; 3] = [
    "I discovered my passion for visual arts during childhood, spending countless hours sketching \
urban landscapes and abstract compositions. Over the past decade I have developed a visual \
language that merges geometric precision with organic spontaneity.",
    "My creative process begins with observation and contemplation. I spend considerable time \
studying light, shadow, and spatial relationships before touching brush to canvas. Each piece \
evolves through multiple layers, building depth through subtraction as much as addition.",
    "Today I work from my studio, where I continue to explore the boundaries between abstraction \
and representation, color and form, silence and expression.",
];

const QUOTE: &str = "Art is not about filling space. It is about creating space for reflection, \
for silence, for the unspoken conversations between viewer and canvas.";

const FAQ: [(&str, &str); 4] = [
    (
        "Do you accept commissions?",
        "Yes! I'm always open to discussing custom pieces. Share your vision and let's create something unique together.",
    ),
    (
        "What is your typical turnaround time?",
        "Depending on the complexity, most pieces take 4-8 weeks. I'll provide a detailed timeline during our initial consultation.",
    ),
    (
        "Do you ship internationally?",
        "Absolutely. I work with trusted art shippers to ensure your piece arrives safely, anywhere in the world.",
    ),
    (
        "Can I visit your studio?",
        "Studio visits are available by appointment. Reach out to schedule a time to see works in progress.",
    ),
];

/// Everything the renderers read. Built once, shared across threads.
#[derive(Debug)]
pub struct Site {
    pub config: SiteConfig,
    pub catalog: Catalog,
    /// Where the catalog came from; `None` for the bundled sample.
    pub catalog_source: Option<PathBuf>,
    /// Raw markdown of `about.md`, if present.
    pub about: Option<String>,
    pub assets: AssetResolver,
    /// Content directory, when loaded from disk.
    pub source: Option<PathBuf>,
    css: String,
}

impl Site {
    /// A site over an in-memory catalog. Images are not checked on disk.
    pub fn new(config: SiteConfig, catalog: Catalog) -> Self {
        let css = format!("{}\n\n{}", config::generate_color_css(&config.colors), CSS_STATIC);
        Self {
            config,
            catalog,
            catalog_source: None,
            about: None,
            assets: AssetResolver::unchecked(),
            source: None,
            css,
        }
    }

    /// Load catalog, biography and asset index from a content directory.
    pub fn load(source: &Path, config: SiteConfig) -> Result<Self, GenerateError> {
        let (catalog, catalog_source) = Catalog::load(source)?;
        let about_path = source.join("about.md");
        let about = if about_path.is_file() {
            Some(fs::read_to_string(&about_path)?)
        } else {
            None
        };
        Ok(Self {
            catalog_source,
            about,
            assets: AssetResolver::new(source),
            source: Some(source.to_path_buf()),
            ..Self::new(config, catalog)
        })
    }

    /// Artwork image files referenced by the catalog but absent from disk.
    pub fn missing_images(&self) -> Vec<&str> {
        self.assets.missing(
            ImageKind::Artwork,
            self.catalog
                .artworks()
                .iter()
                .flat_map(|a| a.images.iter().map(String::as_str)),
        )
    }
}

/// What a build produced.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Written pages, relative to the output directory, in route order.
    pub pages: Vec<PathBuf>,
    pub images_copied: usize,
}

/// Render every route of `site` into `output_dir` and copy image assets.
pub fn generate(site: &Site, output_dir: &Path) -> Result<BuildReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let routes = Route::all(&site.catalog);
    // Rendering is pure; writes stay sequential.
    let rendered: Vec<(PathBuf, Markup)> = routes
        .par_iter()
        .map(|route| (route.output_path(), render_route(site, route)))
        .collect();

    let mut report = BuildReport::default();
    for (rel, markup) in rendered {
        write_page(output_dir, &rel, markup)?;
        tracing::debug!(path = %rel.display(), "wrote page");
        report.pages.push(rel);
    }

    if let Some(source) = &site.source {
        report.images_copied = copy_images(&source.join("images"), &output_dir.join("images"))?;
    }

    tracing::info!(
        pages = report.pages.len(),
        images = report.images_copied,
        "site generated at {}",
        output_dir.display()
    );
    Ok(report)
}

fn write_page(output_dir: &Path, rel: &Path, markup: Markup) -> std::io::Result<()> {
    let path = output_dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, markup.into_string())
}

/// Copy the content `images/` tree. Returns the number of files copied.
fn copy_images(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Render the page a route points to.
///
/// Artwork routes naming an unknown id render the not-found page.
pub fn render_route(site: &Site, route: &Route) -> Markup {
    match route {
        Route::Home => render_home(site),
        Route::About => render_about(site),
        Route::Portfolio { category, series } => {
            render_portfolio(site, category.as_deref(), series.as_deref())
        }
        Route::Artwork { id } => match site.catalog.find_by_id(id) {
            Some(artwork) => render_artwork(site, artwork),
            None => render_not_found(site),
        },
        Route::Contact => render_contact(site),
        Route::NotFound => render_not_found(site),
    }
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(site: &Site, title: &str, body_class: Option<&str>, content: Markup) -> Markup {
    let motion = &site.config.motion;
    let contact = &site.config.contact;
    let full_title = if title.is_empty() {
        site.config.site.artist_name.clone()
    } else {
        format!("{} | {}", title, site.config.site.artist_name)
    };
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(site.config.site.tagline);
                title { (full_title) }
                style { (PreEscaped(&site.css)) }
            }
            body class=[body_class]
                data-reveal-threshold=(motion.reveal_threshold)
                data-reveal-margin=(motion.reveal_root_margin)
                data-count-duration=(motion.count_up_duration_ms)
                data-count-threshold=(START_THRESHOLD)
                data-cursor-lag=(motion.cursor_lag)
                data-magnetic-strength=(motion.magnetic_strength)
                data-parallax-speed=(motion.parallax_speed)
                data-header-scrolled=(SCROLLED_AFTER)
                data-header-hide=(HIDE_AFTER)
                data-send-delay=(contact.send_delay_ms)
                data-display-delay=(contact.display_delay_ms) {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Page chrome: cursor, header, main, footer.
fn layout(
    site: &Site,
    route: &Route,
    title: &str,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    let body = html! {
        (cursor_markup(site))
        (site_header(site, route))
        main { (content) }
        (site_footer(site))
    };
    base_document(site, title, body_class, body)
}

/// The two cursor elements at rest. The script removes them on touch
/// devices.
fn cursor_markup(site: &Site) -> Markup {
    let follower = CursorFollower::from_config(&site.config.motion, false);
    html! {
        @if let Some(frame) = follower.snapshot() {
            div class=(frame.dot_class()) aria-hidden="true" {}
            div class=(frame.ring_class()) aria-hidden="true" {}
        }
    }
}

fn nav_items() -> [(&'static str, &'static str, Route); 4] {
    [
        ("home", "Home", Route::Home),
        ("about", "About", Route::About),
        (
            "portfolio",
            "Artworks",
            Route::Portfolio {
                category: None,
                series: None,
            },
        ),
        ("contact", "Contact", Route::Contact),
    ]
}

/// Renders the site header with logo, navigation and menu toggle
fn site_header(site: &Site, route: &Route) -> Markup {
    let header = HeaderState::default();
    let active = route.nav_key();
    html! {
        header class=(header.class()) {
            div.header__inner {
                a.header__logo href="/" { (site.config.site.artist_name) }
                nav.header__nav {
                    @for (key, text, target) in nav_items() {
                        @let class = if active == Some(key) { "nav__link nav__link--active" } else { "nav__link" };
                        a class=(class) href=(target.href()) { (text) }
                    }
                }
                button.menu-toggle type="button" aria-label="Toggle menu" aria-expanded="false" {
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}

fn site_footer(site: &Site) -> Markup {
    let info = &site.config.site;
    html! {
        footer.footer {
            div.footer__social {
                a href={ "https://instagram.com/" (info.instagram) } target="_blank" rel="noopener noreferrer" aria-label="Instagram" {
                    "Instagram"
                }
                a href={ "mailto:" (info.email) } aria-label="Email" { "Email" }
            }
            p.footer__copy {
                "© "
                @if let Some(year) = info.copyright_year {
                    (year) " "
                }
                (info.artist_name) ". All Rights Reserved."
            }
        }
    }
}

/// Wrapper revealed by the script once it scrolls into view.
fn reveal(direction: &str, delay_ms: u32, content: Markup) -> Markup {
    html! {
        div class={ "reveal reveal--" (direction) } style={ "transition-delay: " (delay_ms) "ms" } {
            (content)
        }
    }
}

fn label(text: &str) -> Markup {
    html! { span.text-uppercase.text-muted.label { (text) } }
}

fn artwork_card(site: &Site, artwork: &Artwork, aspect: &str) -> Markup {
    let href = Route::Artwork {
        id: artwork.id.clone(),
    }
    .href();
    let picture = match artwork.cover_image() {
        Some(file) => site.assets.resolve(ImageKind::Artwork, file, &artwork.title),
        None => crate::assets::Picture::Placeholder {
            label: artwork.title.clone(),
        },
    };
    let series_slug = artwork.series.as_deref().map(crate::types::slugify);
    html! {
        a.card href=(href) data-series=[series_slug] {
            div.card__image style={ "aspect-ratio: " (aspect) } {
                (render_picture(&picture, "card__img"))
            }
            div.card__content {
                h3.card__title { (artwork.title) }
                p.card__meta { (artwork.year) " • " (artwork.medium) }
            }
        }
    }
}

fn exhibition_line(exhibition: &Exhibition) -> Markup {
    html! {
        div.exhibition-item {
            h4 { (exhibition.title) }
            p.text-muted.text-sm { (exhibition.venue) ", " (exhibition.location) }
            p.text-muted.text-xs { (exhibition.dates) }
        }
    }
}

fn cta(title: &str, text: &str, link_label: &str) -> Markup {
    html! {
        section.cta {
            div.container.container--narrow {
                h2.cta__title { (title) }
                p.cta__text { (text) }
                a.btn.magnetic href="/#contact" { (link_label) }
            }
        }
    }
}

/// The contact form in its initial state.
fn contact_form(site: &Site) -> Markup {
    let form = ContactForm::new();
    let status = form.status();
    let fields = form.fields();
    let endpoint = site.config.contact.endpoint.as_deref();
    html! {
        form.contact-form data-status=(status.as_str()) action=[endpoint] method=[endpoint.map(|_| "post")] {
            div.form-group {
                label.form-label for="name" { "Name" }
                input.form-input type="text" id="name" name="name" value=(fields.name) required;
            }
            div.form-group {
                label.form-label for="email" { "Email" }
                input.form-input type="email" id="email" name="email" value=(fields.email) required;
            }
            div.form-group {
                label.form-label for="message" { "Message" }
                textarea.form-textarea id="message" name="message" required { (fields.message) }
            }
            div.form-actions {
                button.btn.magnetic type="submit" disabled[!form.can_submit()] { (status.button_label()) }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

fn render_home(site: &Site) -> Markup {
    let info = &site.config.site;
    let catalog = &site.catalog;
    let featured_show = catalog
        .exhibitions()
        .iter()
        .find(|e| e.kind == ExhibitionKind::Solo);

    let content = html! {
        section.hero {
            div.hero__bg data-parallax {}
            h1.hero__title.fade-up { (info.artist_name.to_uppercase()) }
            p.hero__subtitle.fade-up { (info.tagline) }
            a.btn.magnetic.fade-up href=(Route::Portfolio { category: None, series: None }.href()) { "View Works" }
        }

        section.section {
            div.container.home-about {
                (label("About"))
                p.lead { (HOME_INTRO) }
            }
        }

        section.section.section--sm {
            div.container {
                div.section-header.section-header--left {
                    span.section-header__label { "Selected Works" }
                }
                div.grid.grid-3.stagger {
                    @for artwork in catalog.featured_subset(3) {
                        (reveal("up", 0, artwork_card(site, artwork, "4/5")))
                    }
                }
            }
        }

        section.section {
            div.container.home-exhibitions {
                div {
                    (label("Exhibitions"))
                    @for exhibition in catalog.recent_exhibitions(4) {
                        (exhibition_line(exhibition))
                    }
                    a.text-uppercase.link-underline href="/about/#exhibitions" { "View All Past Exhibitions" }
                }
                @if let Some(show) = featured_show {
                    div.featured-exhibition {
                        h4 { (show.title) }
                        p.text-muted.text-sm { (show.dates) br; (show.venue) ", " (show.location) }
                        p.text-sm { (show.description) }
                        a.btn.btn--sm href="/about/#exhibitions" { "Learn More" }
                    }
                }
            }
        }

        section.section.section--sm {
            div.container.artwork-mini-grid {
                @for artwork in catalog.artworks().iter().take(6) {
                    @let href = Route::Artwork { id: artwork.id.clone() }.href();
                    a href=(href) {
                        @if let Some(file) = artwork.cover_image() {
                            (render_picture(&site.assets.resolve(ImageKind::Artwork, file, &artwork.title), "mini-grid__img"))
                        }
                    }
                }
            }
        }

        section.section id="contact" {
            div.container.container--narrow {
                div.section-header {
                    h2.section-header__title { "Get In Touch" }
                }
                div.contact-summary {
                    p.text-muted { (info.email) }
                    p.text-muted { "@" (info.instagram) }
                    p.text-muted { (info.location) }
                }
                (contact_form(site))
            }
        }
    };
    layout(site, &Route::Home, "", None, content)
}

/// Biography HTML: `about.md` when present, otherwise the stock paragraphs.
fn biography(site: &Site) -> Markup {
    match &site.about {
        Some(markdown) => {
            let mut body_html = String::new();
            md_html::push_html(&mut body_html, Parser::new(markdown));
            PreEscaped(body_html)
        }
        None => html! {
            @for paragraph in STOCK_BIO {
                p { (paragraph) }
            }
        },
    }
}

fn render_about(site: &Site) -> Markup {
    let catalog = &site.catalog;
    let portrait = site.assets.resolve(ImageKind::Artist, "portrait.jpg", "Artist Photo");
    let studio = site.assets.resolve(ImageKind::Artist, "studio.jpg", "My Studio");

    let mut mediums: Vec<&str> = Vec::new();
    for artwork in catalog.artworks() {
        if !mediums.contains(&artwork.medium.as_str()) {
            mediums.push(&artwork.medium);
        }
    }

    let content = html! {
        section.section.section--lg.page-header {
            div.container {
                h1.fade-up { "ABOUT" }
                p.text-muted.fade-up { "Getting to Know the Artist" }
            }
        }

        section.section {
            div.container.about-grid {
                div.about-photo { (render_picture(&portrait, "about-photo__img")) }
                div {
                    (label("Biography"))
                    div.about-content { (biography(site)) }

                    div.about-exhibitions id="exhibitions" {
                        (label("Exhibitions & Recognition"))
                        @for exhibition in catalog.recent_exhibitions(5) {
                            div.exhibition-row {
                                span.text-muted.text-sm { (exhibition.year) }
                                div {
                                    span.exhibition-row__title { (exhibition.title) }
                                    span.text-muted { (exhibition.venue) ", " (exhibition.location) }
                                }
                            }
                        }
                    }
                }
            }
        }

        section.section.section--alt {
            div.container {
                blockquote.quote { "\"" (QUOTE) "\"" }
            }
        }

        section.section {
            div.container.skills-grid {
                div {
                    (label("Mediums"))
                    ul {
                        @for medium in &mediums {
                            li { (medium) }
                        }
                    }
                }
                div {
                    (label("Practice"))
                    ul {
                        @for (category, count) in catalog.category_counts() {
                            @if count > 0 {
                                li { (category.label()) " (" (count) ")" }
                            }
                        }
                    }
                }
                div {
                    (label("Based In"))
                    ul { li { (site.config.site.location) } }
                }
            }
        }

        section.section.section--flush {
            (render_picture(&studio, "studio-image"))
        }

        (cta(
            "LET'S CREATE TOGETHER",
            "I am always open to collaborations, commissions, and creative partnerships. Whether you are a collector, curator, or fellow artist, I would love to hear from you and explore how we can work together.",
            "Contact Me",
        ))
    };
    layout(site, &Route::About, "About", None, content)
}

/// Filter tabs as links; one static page per tab.
fn filter_tabs(active: Option<&str>) -> Markup {
    let all = Route::Portfolio {
        category: None,
        series: None,
    };
    html! {
        nav.filter-tabs {
            a class=(tab_class(active.is_none())) href=(all.href()) { "All Works" }
            @for category in Category::ALL {
                @let route = Route::Portfolio { category: Some(category.id().to_string()), series: None };
                a class=(tab_class(active == Some(category.id()))) href=(route.href()) { (category.label()) }
            }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "filter-tab filter-tab--active"
    } else {
        "filter-tab"
    }
}

fn featured_series(series: &SeriesSummary) -> Markup {
    let route = Route::Portfolio {
        category: None,
        series: Some(series.slug.clone()),
    };
    html! {
        section.featured-series {
            div.container.featured-series__content {
                h2 { (series.name) " Series" }
                @if let Some(description) = &series.description {
                    p { (description) }
                }
                table.featured-series__table {
                    tbody {
                        tr { td { "Works" } td { (series.count) } }
                    }
                }
                a.text-uppercase.link-underline href=(route.href()) { "View Project →" }
            }
        }
    }
}

fn render_portfolio(site: &Site, category: Option<&str>, series: Option<&str>) -> Markup {
    let catalog = &site.catalog;
    let artworks = catalog.filter_by_category(category.unwrap_or(crate::catalog::ALL_CATEGORIES));
    let stats = catalog.stats(site.config.site.years_of_practice);
    let duration = site.config.motion.count_up_duration_ms;
    let all_series = catalog.series();
    let spotlight = series
        .and_then(|slug| all_series.iter().find(|s| s.slug == slug))
        .or_else(|| all_series.first());
    let title = match category.and_then(Category::from_id) {
        Some(c) => format!("Portfolio: {}", c.label()),
        None => "Portfolio".to_string(),
    };

    let content = html! {
        section.portfolio-header.section {
            div.container {
                h1.fade-up { "PORTFOLIO" }
                p.text-muted.fade-up { "A Collection of Visual Explorations" }
            }
        }

        section.filter-section {
            div.container { (filter_tabs(category)) }
        }

        section.section.section--sm {
            div.container.container--wide data-portfolio=(category.unwrap_or(crate::catalog::ALL_CATEGORIES)) data-series-hint=[series] {
                div.masonry {
                    @for (index, artwork) in artworks.iter().enumerate() {
                        div.masonry__item {
                            (artwork_card(site, artwork, ASPECT_RATIOS[index % ASPECT_RATIOS.len()]))
                        }
                    }
                }
                @if artworks.is_empty() {
                    p.text-muted.text-center.empty-state { "No artworks found in this category." }
                }
            }
        }

        @if let Some(series) = spotlight {
            (featured_series(series))
        }

        section.section {
            div.container.stats {
                @for (value, name) in [
                    (stats.artworks, "Artworks Created"),
                    (stats.exhibitions, "Exhibitions"),
                    (stats.collections, "Collections"),
                    (stats.years_of_practice, "Years Practice"),
                ] {
                    div.stat {
                        div.stat__number data-count-end=(value) data-count-duration=(duration) { (value) }
                        div.stat__label { (name) }
                    }
                }
            }
        }

        (cta(
            "COMMISSION A PIECE",
            "I welcome commissions for custom artworks tailored to your vision and space. Whether you are seeking a statement piece for your home, office, or public installation, I work closely with clients to create meaningful works that resonate with their unique aesthetic and conceptual goals.",
            "Start a Conversation",
        ))
    };
    let route = Route::Portfolio {
        category: category.map(str::to_string),
        series: series.map(str::to_string),
    };
    layout(site, &route, &title, None, content)
}

fn render_artwork(site: &Site, artwork: &Artwork) -> Markup {
    let catalog = &site.catalog;
    let related = catalog.find_related(artwork);
    let same_series = artwork.series.is_some()
        && related.iter().all(|r| r.series == artwork.series);
    let hero = match artwork.cover_image() {
        Some(file) => site.assets.resolve(ImageKind::Artwork, file, &artwork.title),
        None => crate::assets::Picture::Placeholder {
            label: artwork.title.clone(),
        },
    };
    let (cta_text, cta_link) = if artwork.available {
        (
            "This piece is currently available for acquisition. I welcome inquiries from collectors and art enthusiasts. Whether you are interested in purchasing this work, commissioning a similar piece, or simply learning more about my practice, I would be delighted to hear from you.",
            "Inquire About Availability",
        )
    } else {
        (
            "This piece has been acquired and is now part of a private collection. If you are interested in commissioning a similar work or exploring other available pieces, I would be happy to discuss options with you.",
            "Inquire About Commissions",
        )
    };

    let content = html! {
        section.artwork-hero { (render_picture(&hero, "artwork-hero__img")) }

        section.artwork-title {
            div.container {
                h1 { (artwork.title) }
                p.text-muted { (artwork.year) " • " (artwork.medium) " • " (artwork.dimensions) }
            }
        }

        section.section.section--sm {
            div.container.artwork-info {
                div {
                    (label("About This Work"))
                    div.artwork-description {
                        @for paragraph in artwork.description_paragraphs() {
                            p { (paragraph) }
                        }
                    }
                }
                div {
                    (label("Details"))
                    table.artwork-details {
                        tbody {
                            tr { td { "Dimensions" } td { (artwork.dimensions) } }
                            tr { td { "Year" } td { (artwork.year) } }
                            @if let Some(series) = &artwork.series {
                                tr { td { "Series" } td { (series) } }
                            }
                            tr { td { "Medium" } td { (artwork.medium) } }
                            tr { td { "Availability" } td { (artwork.availability_label()) } }
                            @if let Some(price) = &artwork.price {
                                tr { td { "Price" } td { (price) } }
                            }
                        }
                    }
                    @if let Some(note) = &artwork.artist_note {
                        div.artist-note {
                            span.artist-note__label { "Artist's Note" }
                            p { "\"" (note) "\"" }
                        }
                    }
                }
            }
        }

        @if artwork.images.len() > 1 {
            section.section {
                div.container {
                    div.section-header.section-header--left {
                        span.section-header__label { "Views & Details" }
                    }
                    div.artwork-gallery {
                        @for (index, file) in artwork.images.iter().enumerate() {
                            @let view = format!("{} - View {}", artwork.title, index + 1);
                            @let picture = site.assets.resolve(ImageKind::Artwork, file, &view);
                            @let class = if index == 0 { "artwork-gallery__item artwork-gallery__item--large" } else { "artwork-gallery__item" };
                            div class=(class) data-lightbox=[(!picture.is_placeholder()).then(|| ImageKind::Artwork.url(file))] {
                                (render_picture(&picture, "artwork-gallery__img"))
                            }
                        }
                    }
                }
            }
        }

        @if let Some(context) = artwork.series_context() {
            section.section.section--alt {
                div.container.container--narrow {
                    (label("Series Context"))
                    p.lead { (context) }
                }
            }
        }

        @if !related.is_empty() {
            section.section {
                div.container {
                    div.section-header.section-header--left {
                        span.section-header__label {
                            @if same_series { "From the Same Series" } @else { "Related Works" }
                        }
                    }
                    div.related-works {
                        @for work in &related {
                            (artwork_card(site, work, "4/5"))
                        }
                    }
                }
            }
        }

        section.section.section--sm {
            div.container.container--narrow {
                (label("Exhibition History"))
                div.exhibition-timeline {
                    @for exhibition in catalog.exhibition_history(artwork) {
                        div.exhibition-timeline__item {
                            h4 { (exhibition.title) }
                            p.text-muted.text-sm {
                                (exhibition.venue) ", " (exhibition.location) ", " (exhibition.year)
                            }
                        }
                    }
                }
            }
        }

        (cta("INTERESTED IN THIS WORK?", cta_text, cta_link))

        div.lightbox role="dialog" aria-modal="true" {
            button.lightbox__close type="button" aria-label="Close" { "×" }
            img.lightbox__image alt="Artwork view";
        }
    };
    let route = Route::Artwork {
        id: artwork.id.clone(),
    };
    layout(site, &route, &artwork.title, Some("artwork-page"), content)
}

fn contact_detail(icon: &str, name: &str, value: Markup) -> Markup {
    html! {
        div.contact-main__detail {
            div.contact-main__detail-icon { span { (icon) } }
            div.contact-main__detail-content {
                span.contact-main__detail-label { (name) }
                (value)
            }
        }
    }
}

fn render_contact(site: &Site) -> Markup {
    let info = &site.config.site;
    let email = html! { a href={ "mailto:" (info.email) } { (info.email) } };
    let instagram = html! {
        a href={ "https://instagram.com/" (info.instagram) } target="_blank" rel="noopener noreferrer" {
            "@" (info.instagram)
        }
    };
    let location = html! { span { (info.location) } };

    let content = html! {
        div.page-bg aria-hidden="true" {
            div.page-bg__grid {}
            div.page-bg__noise {}
        }

        section.contact-hero {
            div.container.contact-hero__content {
                span.contact-hero__label { span.contact-hero__label-icon { "◈" } "Get in Touch" }
                h1.contact-hero__title {
                    span.contact-hero__title-line { "Let's Start a" }
                    span.contact-hero__title-line.contact-hero__title-line--accent { "Conversation" }
                }
                p.contact-hero__subtitle {
                    "Whether you're interested in a commission, collaboration, or simply want to connect"
                }
            }
        }

        section.contact-main {
            div.container.contact-main__grid {
                div.contact-main__info {
                    (reveal("up", 0, html! {
                        h2.contact-main__title { "Ready to Create " span.highlight { "Something Beautiful?" } }
                    }))
                    (reveal("up", 100, html! {
                        p.contact-main__text {
                            "I'm always excited to discuss new projects, creative ideas, or opportunities to collaborate. Feel free to reach out through the form or contact me directly."
                        }
                    }))
                    div.contact-main__details {
                        (reveal("up", 200, contact_detail("✉", "Email", email)))
                        (reveal("up", 250, contact_detail("◎", "Instagram", instagram)))
                        (reveal("up", 300, contact_detail("⬡", "Studio Location", location)))
                    }
                    (reveal("up", 350, html! {
                        div.contact-main__cta {
                            p.contact-main__cta-text { "Want to see my work first?" }
                            a.contact-main__link href=(Route::Portfolio { category: None, series: None }.href()) {
                                span { "View Portfolio" }
                                span.contact-main__link-arrow { "→" }
                            }
                        }
                    }))
                }
                (reveal("right", 200, html! {
                    div.contact-main__form-wrapper {
                        div.contact-main__form-accent {}
                        (contact_form(site))
                    }
                }))
            }
        }

        section.contact-faq {
            div.container {
                (reveal("up", 0, html! { h2.contact-faq__title { "Frequently Asked" } }))
                div.contact-faq__grid {
                    @for (index, (question, answer)) in FAQ.iter().enumerate() {
                        (reveal("up", 100 + 50 * index as u32, html! {
                            div.contact-faq__item {
                                h3 { (question) }
                                p { (answer) }
                            }
                        }))
                    }
                }
            }
        }
    };
    layout(site, &Route::Contact, "Contact", Some("contact-page"), content)
}

fn render_not_found(site: &Site) -> Markup {
    let portfolio = Route::Portfolio {
        category: None,
        series: None,
    };
    let content = html! {
        section.section.not-found {
            div.container {
                h1 { "Page Not Found" }
                p.text-muted { "The page you are looking for does not exist or has been moved." }
                a.btn.magnetic href=(portfolio.href()) { "View Portfolio" }
            }
        }
    };
    layout(site, &Route::NotFound, "Not Found", None, content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn sample_site() -> Site {
        Site::new(SiteConfig::default(), sample_catalog())
    }

    fn page(site: &Site, path: &str) -> String {
        render_route(site, &Route::parse(path)).into_string()
    }

    // =========================================================================
    // Layout
    // =========================================================================

    #[test]
    fn document_has_doctype_and_title() {
        let html = page(&sample_site(), "/about");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>About | Artist Name</title>"));
    }

    #[test]
    fn body_carries_motion_parameters() {
        let mut config = SiteConfig::default();
        config.motion.cursor_lag = 0.25;
        config.contact.send_delay_ms = 1500;
        let site = Site::new(config, sample_catalog());
        let html = page(&site, "/");
        assert!(html.contains(r#"data-cursor-lag="0.25""#));
        assert!(html.contains(r#"data-send-delay="1500""#));
        assert!(html.contains(r#"data-reveal-margin="0px 0px -50px 0px""#));
        assert!(html.contains(r#"data-count-threshold="0.5""#));
        assert!(html.contains(r#"data-header-hide="300""#));
    }

    #[test]
    fn nav_marks_active_section() {
        let site = sample_site();
        let html = page(&site, "/artwork/threshold");
        assert!(html.contains(r#"<a class="nav__link nav__link--active" href="/portfolio/">Artworks</a>"#));
        let html = page(&site, "/contact");
        assert!(html.contains(r#"<a class="nav__link nav__link--active" href="/contact/">Contact</a>"#));
    }

    #[test]
    fn cursor_and_header_start_in_resting_state() {
        let html = page(&sample_site(), "/");
        assert!(html.contains(r#"<div class="cursor-dot" aria-hidden="true">"#));
        assert!(html.contains(r#"<div class="cursor" aria-hidden="true">"#));
        assert!(html.contains(r#"<header class="header">"#));
    }

    #[test]
    fn footer_copyright_uses_configured_year() {
        let mut config = SiteConfig::default();
        config.site.copyright_year = Some(2025);
        let html = page(&Site::new(config, sample_catalog()), "/");
        assert!(html.contains("© 2025 Artist Name. All Rights Reserved."));
    }

    #[test]
    fn colors_are_injected() {
        let html = page(&sample_site(), "/");
        assert!(html.contains("--color-bg:"));
    }

    // =========================================================================
    // Pages
    // =========================================================================

    #[test]
    fn home_shows_featured_and_contact() {
        let site = sample_site();
        let html = page(&site, "/");
        for artwork in site.catalog.featured_subset(3) {
            assert!(html.contains(&artwork.title));
        }
        assert!(html.contains("Selected Works"));
        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains(r#"data-status="idle""#));
        assert!(html.contains(">Submit</button>"));
    }

    #[test]
    fn about_uses_markdown_when_present() {
        let mut site = sample_site();
        site.about = Some("I paint **harbors** at dawn.".to_string());
        let html = page(&site, "/about");
        assert!(html.contains("<strong>harbors</strong>"));
        assert!(html.contains(r#"id="exhibitions""#));
    }

    #[test]
    fn about_falls_back_to_stock_bio() {
        let html = page(&sample_site(), "/about");
        assert!(html.contains("My creative process begins with observation"));
    }

    #[test]
    fn portfolio_all_lists_every_artwork() {
        let site = sample_site();
        let html = page(&site, "/portfolio");
        assert_eq!(html.matches(r#"class="masonry__item""#).count(), site.catalog.artworks().len());
        assert!(html.contains(r#"<a class="filter-tab filter-tab--active" href="/portfolio/">All Works</a>"#));
    }

    #[test]
    fn portfolio_category_tab_filters() {
        let site = sample_site();
        let html = page(&site, "/portfolio?category=drawings");
        let expected = site.catalog.filter_by_category("drawings").len();
        assert_eq!(html.matches(r#"class="masonry__item""#).count(), expected);
        assert!(html.contains(r#"<a class="filter-tab filter-tab--active" href="/portfolio/drawings/">Drawings</a>"#));
        assert!(!html.contains("No artworks found"));
    }

    #[test]
    fn portfolio_unknown_category_shows_empty_state() {
        let html = page(&sample_site(), "/portfolio?category=sculpture");
        assert!(html.contains("No artworks found in this category."));
        assert!(!html.contains(r#"class="masonry__item""#));
    }

    #[test]
    fn portfolio_stats_count_up_from_catalog() {
        let site = sample_site();
        let html = page(&site, "/portfolio");
        let count = site.catalog.artworks().len();
        assert!(html.contains(&format!(r#"data-count-end="{count}" data-count-duration="2000""#)));
        assert!(html.contains(r#"data-count-end="12""#));
    }

    #[test]
    fn portfolio_grid_names_its_tab_for_query_links() {
        let site = sample_site();
        let all = page(&site, "/portfolio");
        assert!(all.contains(r#"data-portfolio="all""#));
        let drawings = page(&site, "/portfolio/drawings/");
        assert!(drawings.contains(r#"data-portfolio="drawings""#));
        // The served page resolves ?category= and ?series= in the browser.
        assert!(JS.contains("URLSearchParams(location.search)"));
        assert!(JS.contains("params.get(\"category\")"));
        assert!(JS.contains("params.get(\"series\")"));
    }

    #[test]
    fn portfolio_series_hint_is_exposed() {
        let html = page(&sample_site(), "/portfolio?series=color-studies");
        assert!(html.contains(r#"data-series-hint="color-studies""#));
        assert!(html.contains("Color Studies Series"));
    }

    #[test]
    fn artwork_detail_sections() {
        let site = sample_site();
        let html = page(&site, "/artwork/urban-reflections-i");
        assert!(html.contains("<h1>Urban Reflections I</h1>"));
        assert!(html.contains("Views &amp; Details"));
        assert!(html.contains("From the Same Series"));
        assert!(html.contains("Urban Reflections II"));
        assert!(html.contains(r#"class="lightbox""#));
        assert!(html.contains(r#"data-lightbox="/images/artworks/urban-reflections-i-detail.jpg""#));
    }

    #[test]
    fn artwork_without_series_uses_category_relations() {
        let catalog = Catalog::new(
            vec![
                artwork("a1", Category::Drawings),
                artwork("a2", Category::Drawings),
                artwork("a3", Category::Paintings),
            ],
            vec![exhibition("Show")],
        )
        .unwrap();
        let site = Site::new(SiteConfig::default(), catalog);
        let html = page(&site, "/artwork/a1");
        assert!(html.contains("Related Works"));
        assert!(html.contains("Title a2"));
        assert!(!html.contains("Title a3"));
        assert!(!html.contains("Series Context"));
        assert!(!html.contains("Views &amp; Details"));
        assert!(html.contains("This oil on canvas piece explores themes"));
    }

    #[test]
    fn sold_artwork_offers_commissions() {
        let mut sold = artwork("s1", Category::Paintings);
        sold.available = false;
        let site = Site::new(SiteConfig::default(), Catalog::new(vec![sold], vec![]).unwrap());
        let html = page(&site, "/artwork/s1");
        assert!(html.contains("Inquire About Commissions"));
        assert!(html.contains("<td>Sold</td>"));
    }

    #[test]
    fn unknown_artwork_renders_not_found() {
        let html = page(&sample_site(), "/artwork/zz");
        assert!(html.contains("Page Not Found"));
        assert!(html.contains(r#"href="/portfolio/""#));
    }

    #[test]
    fn not_found_wording_fits_any_path() {
        let html = page(&sample_site(), "/shop");
        assert!(html.contains("Page Not Found"));
        assert!(!html.contains("artwork may have been"));
    }

    #[test]
    fn contact_page_has_reveals_and_faq() {
        let html = page(&sample_site(), "/contact");
        assert!(html.contains(r#"class="reveal reveal--right" style="transition-delay: 200ms""#));
        assert!(html.contains(r#"<body class="contact-page""#));
        assert!(html.contains("Frequently Asked"));
        assert!(html.contains("Do you ship internationally?"));
    }

    #[test]
    fn contact_form_posts_to_configured_endpoint() {
        let mut config = SiteConfig::default();
        config.contact.endpoint = Some("https://forms.example.com/f/abc".to_string());
        let html = page(&Site::new(config, sample_catalog()), "/contact");
        assert!(html.contains(r#"action="https://forms.example.com/f/abc" method="post""#));
    }

    #[test]
    fn catalog_text_is_escaped() {
        let mut evil = artwork("x1", Category::Paintings);
        evil.title = "<script>alert('xss')</script>".to_string();
        let site = Site::new(SiteConfig::default(), Catalog::new(vec![evil], vec![]).unwrap());
        let html = page(&site, "/artwork/x1");
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    // =========================================================================
    // Build
    // =========================================================================

    #[test]
    fn generate_writes_every_route() {
        let content = setup_content();
        let out = tempfile::TempDir::new().unwrap();
        let site = Site::load(content.path(), SiteConfig::default()).unwrap();
        let report = generate(&site, out.path()).unwrap();

        let routes = Route::all(&site.catalog);
        assert_eq!(report.pages.len(), routes.len());
        for route in &routes {
            assert!(out.path().join(route.output_path()).is_file(), "{:?}", route);
        }
        assert!(report.images_copied > 0);
        assert!(out.path().join("images/artworks").is_dir());
    }

    #[test]
    fn missing_images_become_placeholders() {
        let content = setup_content();
        let site = Site::load(content.path(), SiteConfig::default()).unwrap();
        let missing = site.missing_images();
        let Some(absent) = missing.first() else {
            panic!("fixture should reference at least one missing image");
        };
        let owner = site
            .catalog
            .artworks()
            .iter()
            .find(|a| a.cover_image() == Some(*absent))
            .unwrap();
        let html = page(&site, &format!("/artwork/{}", owner.id));
        assert!(html.contains("artwork-hero__img img-placeholder"));
    }
}
