//! Site header behaviour: shadow once scrolled, hide while scrolling down
//! past the hero, and the mobile menu toggle.

/// Scroll offset after which the header gets its shadow.
pub const SCROLLED_AFTER: f64 = 10.0;

/// Scroll offset after which scrolling down hides the header.
pub const HIDE_AFTER: f64 = 300.0;

#[derive(Debug, Clone, Default)]
pub struct HeaderState {
    last_y: f64,
    scrolled: bool,
    hidden: bool,
    menu_open: bool,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Body scrolling is locked while the mobile menu covers the page.
    pub fn locks_scroll(&self) -> bool {
        self.menu_open
    }

    pub fn on_scroll(&mut self, y: f64) {
        self.scrolled = y > SCROLLED_AFTER;
        self.hidden = y > HIDE_AFTER && y > self.last_y;
        self.last_y = y;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following any nav link closes the menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Class list for the `<header>` element.
    pub fn class(&self) -> String {
        let mut class = String::from("header");
        if self.scrolled {
            class.push_str(" header--scrolled");
        }
        if self.hidden {
            class.push_str(" header--hidden");
        }
        class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_after_small_scroll() {
        let mut header = HeaderState::new();
        header.on_scroll(5.0);
        assert!(!header.is_scrolled());
        header.on_scroll(11.0);
        assert!(header.is_scrolled());
        assert_eq!(header.class(), "header header--scrolled");
    }

    #[test]
    fn hides_only_when_scrolling_down_past_threshold() {
        let mut header = HeaderState::new();
        header.on_scroll(200.0);
        header.on_scroll(280.0);
        assert!(!header.is_hidden());

        header.on_scroll(400.0);
        assert!(header.is_hidden());

        header.on_scroll(350.0);
        assert!(!header.is_hidden());

        header.on_scroll(500.0);
        assert!(header.is_hidden());
        assert_eq!(header.class(), "header header--scrolled header--hidden");

        header.on_scroll(100.0);
        assert!(!header.is_hidden());
    }

    #[test]
    fn menu_toggle_locks_scroll() {
        let mut header = HeaderState::new();
        header.toggle_menu();
        assert!(header.is_menu_open());
        assert!(header.locks_scroll());
        header.close_menu();
        assert!(!header.locks_scroll());
        header.toggle_menu();
        header.toggle_menu();
        assert!(!header.is_menu_open());
    }
}
