//! Image URL resolution and placeholders.
//!
//! Catalog entries name images by file name only. This module turns those
//! names into site URLs and decides, per image, whether to emit an `<img>`
//! or a placeholder. When the resolver knows the content directory, a file
//! missing from it becomes a placeholder at build time. Images that exist
//! still carry a `data-fallback` label; the page script swaps in the same
//! placeholder if the browser fails to load them.

use maud::{Markup, html};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Artwork,
    Artist,
}

impl ImageKind {
    /// Directory under the content root and the output root.
    pub fn dir(self) -> &'static str {
        match self {
            ImageKind::Artwork => "images/artworks",
            ImageKind::Artist => "images/artist",
        }
    }

    pub fn url(self, file: &str) -> String {
        format!("/{}/{}", self.dir(), file.trim_start_matches('/'))
    }
}

/// What gets drawn in an image slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Picture {
    Image { src: String, label: String },
    Placeholder { label: String },
}

impl Picture {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Picture::Placeholder { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct AssetResolver {
    root: Option<PathBuf>,
}

impl AssetResolver {
    /// Resolve against files under `root` (the content directory).
    pub fn new(root: &Path) -> Self {
        Self {
            root: Some(root.to_path_buf()),
        }
    }

    /// Resolve without checking the filesystem; every image is assumed present.
    pub fn unchecked() -> Self {
        Self { root: None }
    }

    pub fn exists(&self, kind: ImageKind, file: &str) -> bool {
        match &self.root {
            Some(root) => root.join(kind.dir()).join(file).is_file(),
            None => true,
        }
    }

    /// `label` is shown in the placeholder, normally the artwork title.
    pub fn resolve(&self, kind: ImageKind, file: &str, label: &str) -> Picture {
        if self.exists(kind, file) {
            Picture::Image {
                src: kind.url(file),
                label: label.to_string(),
            }
        } else {
            tracing::warn!(file, "missing {} image, using placeholder", kind.dir());
            Picture::Placeholder {
                label: label.to_string(),
            }
        }
    }

    /// Files from `files` that are not on disk, in order, without duplicates.
    pub fn missing<'a>(&self, kind: ImageKind, files: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        let mut missing: Vec<&str> = Vec::new();
        for file in files {
            if !self.exists(kind, file) && !missing.contains(&file) {
                missing.push(file);
            }
        }
        missing
    }
}

/// Markup for one image slot. `class` goes on the `<img>` or the placeholder.
pub fn render_picture(picture: &Picture, class: &str) -> Markup {
    match picture {
        Picture::Image { src, label } => html! {
            img class=(class) src=(src) alt=(label) loading="lazy" data-fallback=(label);
        },
        Picture::Placeholder { label } => placeholder(label, class),
    }
}

fn placeholder(label: &str, class: &str) -> Markup {
    html! {
        div class={ (class) " img-placeholder" } role="img" aria-label=(label) {
            span.img-placeholder__label { (label) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn content_with(files: &[&str]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        for file in files {
            let path = tmp.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"img").unwrap();
        }
        tmp
    }

    #[test]
    fn urls_by_kind() {
        assert_eq!(ImageKind::Artwork.url("a.jpg"), "/images/artworks/a.jpg");
        assert_eq!(ImageKind::Artist.url("me.jpg"), "/images/artist/me.jpg");
    }

    #[test]
    fn existing_file_resolves_to_image() {
        let tmp = content_with(&["images/artworks/a.jpg"]);
        let resolver = AssetResolver::new(tmp.path());
        assert_eq!(
            resolver.resolve(ImageKind::Artwork, "a.jpg", "Dawn"),
            Picture::Image {
                src: "/images/artworks/a.jpg".to_string(),
                label: "Dawn".to_string()
            }
        );
    }

    #[test]
    fn missing_file_resolves_to_placeholder() {
        let tmp = content_with(&["images/artworks/a.jpg"]);
        let resolver = AssetResolver::new(tmp.path());
        let picture = resolver.resolve(ImageKind::Artwork, "b.jpg", "Dusk");
        assert!(picture.is_placeholder());
        // Same file name under the other kind does not count.
        assert!(resolver.resolve(ImageKind::Artist, "a.jpg", "Me").is_placeholder());
    }

    #[test]
    fn unchecked_resolver_trusts_everything() {
        let resolver = AssetResolver::unchecked();
        assert!(!resolver.resolve(ImageKind::Artwork, "nope.jpg", "X").is_placeholder());
    }

    #[test]
    fn missing_lists_each_file_once() {
        let tmp = content_with(&["images/artworks/a.jpg"]);
        let resolver = AssetResolver::new(tmp.path());
        let missing = resolver.missing(ImageKind::Artwork, ["a.jpg", "b.jpg", "c.jpg", "b.jpg"]);
        assert_eq!(missing, vec!["b.jpg", "c.jpg"]);
    }

    #[test]
    fn image_markup_carries_fallback_hook() {
        let html = render_picture(
            &Picture::Image {
                src: "/images/artworks/a.jpg".to_string(),
                label: "Dawn".to_string(),
            },
            "card__img",
        )
        .into_string();
        assert!(html.contains(r#"src="/images/artworks/a.jpg""#));
        assert!(html.contains(r#"data-fallback="Dawn""#));
        assert!(html.contains(r#"loading="lazy""#));
    }

    #[test]
    fn placeholder_markup_shows_label_escaped() {
        let html = render_picture(
            &Picture::Placeholder {
                label: "<Untitled>".to_string(),
            },
            "hero__img",
        )
        .into_string();
        assert!(html.contains("hero__img img-placeholder"));
        assert!(html.contains("&lt;Untitled&gt;"));
        assert!(!html.contains("<img"));
    }
}
