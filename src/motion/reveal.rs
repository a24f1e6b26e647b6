//! Reveal-on-scroll: a one-shot visibility trigger.
//!
//! ```text
//!   Unarmed ──arm()──▶ Armed ──observe(ratio ≥ threshold)──▶ Triggered
//!      ▲                 │
//!      └────disarm()─────┘
//! ```
//!
//! `Triggered` is terminal. Entering it is the moment the host stops
//! observing the region, signalled by [`Transition::Triggered`]. Later
//! entries, including ones reporting the region has scrolled away, are
//! ignored, so a revealed section never hides again.

use super::Rect;
use crate::config::MotionConfig;

/// Per-edge viewport adjustment in pixels, CSS `margin` order
/// (top, right, bottom, left). Negative values shrink the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    /// Parse 1–4 space-separated pixel lengths using CSS shorthand rules.
    ///
    /// `"0px 0px -50px 0px"`, `"10px"`, `"0 5px"` are accepted; a bare `0`
    /// needs no unit. Percentages and other units are rejected.
    pub fn parse(text: &str) -> Option<RootMargin> {
        let values: Vec<f64> = text
            .split_whitespace()
            .map(parse_px)
            .collect::<Option<_>>()?;
        let (top, right, bottom, left) = match values.as_slice() {
            [all] => (*all, *all, *all, *all),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            _ => return None,
        };
        Some(RootMargin {
            top,
            right,
            bottom,
            left,
        })
    }

    /// Grow (or shrink, for negative values) a viewport rectangle.
    pub fn apply(&self, viewport: &Rect) -> Rect {
        Rect::new(
            viewport.x - self.left,
            viewport.y - self.top,
            viewport.width + self.left + self.right,
            viewport.height + self.top + self.bottom,
        )
    }
}

fn parse_px(token: &str) -> Option<f64> {
    let number = token.strip_suffix("px").unwrap_or_else(|| {
        // Unitless lengths are only valid for zero.
        if token.parse::<f64>().ok() == Some(0.0) { token } else { "" }
    });
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// What the observer saw on one callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// Visible fraction of the region, 0–1.
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }
}

/// Visible fraction of `region` inside `viewport` after applying `margin`.
///
/// Zero-area regions count as fully visible when they sit inside the
/// adjusted viewport, matching how browsers report empty elements.
pub fn intersection_ratio(region: &Rect, viewport: &Rect, margin: &RootMargin) -> f64 {
    let root = margin.apply(viewport);
    let Some(overlap) = region.intersection(&root) else {
        return 0.0;
    };
    let area = region.area();
    if area == 0.0 {
        return 1.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl RevealConfig {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin: RootMargin::default(),
        }
    }

    pub fn with_root_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::from(&MotionConfig::default())
    }
}

impl From<&MotionConfig> for RevealConfig {
    fn from(motion: &MotionConfig) -> Self {
        RevealConfig::new(motion.reveal_threshold)
            .with_root_margin(RootMargin::parse(&motion.reveal_root_margin).unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Region not mounted; nothing is being observed.
    Unarmed,
    /// Observing, not yet visible enough.
    Armed,
    /// Revealed. Observation has stopped for good.
    Triggered,
}

/// Result of feeding an event to the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Unchanged,
    /// The region just became visible; the host should stop observing it.
    Triggered,
}

#[derive(Debug, Clone)]
pub struct VisibilityTrigger {
    config: RevealConfig,
    state: RevealState,
}

impl VisibilityTrigger {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            state: RevealState::Unarmed,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Triggered
    }

    /// Whether the host should currently be observing the region.
    pub fn is_observing(&self) -> bool {
        self.state == RevealState::Armed
    }

    /// The region mounted; start observing.
    pub fn arm(&mut self) {
        if self.state == RevealState::Unarmed {
            self.state = RevealState::Armed;
        }
    }

    /// The region unmounted before it was revealed.
    pub fn disarm(&mut self) {
        if self.state == RevealState::Armed {
            self.state = RevealState::Unarmed;
        }
    }

    pub fn observe(&mut self, entry: IntersectionEntry) -> Transition {
        if self.state != RevealState::Armed {
            return Transition::Unchanged;
        }
        if entry.is_intersecting && entry.ratio >= self.config.threshold {
            self.state = RevealState::Triggered;
            Transition::Triggered
        } else {
            Transition::Unchanged
        }
    }

    /// Compute the entry from geometry and feed it.
    pub fn observe_geometry(&mut self, region: &Rect, viewport: &Rect) -> Transition {
        let ratio = intersection_ratio(region, viewport, &self.config.root_margin);
        self.observe(IntersectionEntry::new(ratio))
    }
}
