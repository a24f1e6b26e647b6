//! Scroll-linked drift for hero backgrounds.

/// Vertical translation in pixels for a layer at `scroll_y`.
///
/// Layers move against the scroll direction at a tenth of `speed`, so the
/// default speed of 0.5 drifts 5 px per 100 px scrolled.
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed * -0.1
}

/// The CSS `transform` the page script writes for that offset.
pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y, speed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_opposes_scroll() {
        assert_eq!(parallax_offset(0.0, 0.5), 0.0);
        assert_eq!(parallax_offset(100.0, 0.5), -5.0);
        assert_eq!(parallax_offset(1000.0, 1.0), -100.0);
    }

    #[test]
    fn transform_string() {
        assert_eq!(parallax_transform(200.0, 0.5), "translateY(-10px)");
    }
}
