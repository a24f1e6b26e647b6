//! Custom cursor: a dot pinned to the pointer and a ring that trails it.
//!
//! Every animation frame the ring covers a fixed fraction of the remaining
//! distance ([`ease_toward`]). The follower also tracks whether the pointer
//! is over something clickable (the ring grows) and whether it has left the
//! window (both elements fade out). On touch devices it is inert: no frames
//! and no markup.

use super::Point;
use crate::config::MotionConfig;

/// Move `current` toward `target` by `factor` of the gap.
pub fn ease_toward(current: Point, target: Point, factor: f64) -> Point {
    current + (target - current) * factor
}

/// How far a magnetic element shifts toward the pointer.
///
/// Zero while the pointer is outside `bounds`.
pub fn magnetic_offset(pointer: Point, bounds: &super::Rect, strength: f64) -> Point {
    if !bounds.contains(pointer) {
        return Point::default();
    }
    (pointer - bounds.center()) * strength
}

/// The bits of an element the hover test looks at.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementInfo {
    /// Lowercase tag name, e.g. `"a"`, `"button"`, `"div"`.
    pub tag: String,
    pub classes: Vec<String>,
}

impl ElementInfo {
    pub fn new(tag: &str, classes: &[&str]) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn is_link_or_button(&self) -> bool {
        self.tag == "a" || self.tag == "button"
    }
}

/// Whether the cursor should switch to its hover style.
///
/// `path` is the event target followed by its ancestors, innermost first.
/// Links, buttons and cards count anywhere in the path; the `magnetic`
/// marker only counts on the target itself.
pub fn is_interactive(path: &[ElementInfo]) -> bool {
    let Some(target) = path.first() else {
        return false;
    };
    target.has_class("magnetic")
        || path
            .iter()
            .any(|el| el.is_link_or_button() || el.has_class("card"))
}

/// What the host paints for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFrame {
    pub dot: Point,
    pub ring: Point,
    pub hovering: bool,
    pub hidden: bool,
}

impl CursorFrame {
    /// Class list for the ring element.
    pub fn ring_class(&self) -> String {
        let mut class = String::from("cursor");
        if self.hovering {
            class.push_str(" cursor--hover");
        }
        if self.hidden {
            class.push_str(" cursor--hidden");
        }
        class
    }

    /// Class list for the dot element.
    pub fn dot_class(&self) -> String {
        if self.hidden {
            "cursor-dot cursor--hidden".to_string()
        } else {
            "cursor-dot".to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    /// Touch device: never renders.
    Disabled,
    Running,
    /// Frame loop cancelled; no further frames.
    Unmounted,
}

#[derive(Debug, Clone)]
pub struct CursorFollower {
    lag: f64,
    pointer: Point,
    ring: Point,
    hovering: bool,
    hidden: bool,
    lifecycle: Lifecycle,
}

impl CursorFollower {
    /// Both elements start at the origin, like the page script.
    pub fn new(lag: f64, touch_device: bool) -> Self {
        Self {
            lag: lag.clamp(f64::EPSILON, 1.0),
            pointer: Point::default(),
            ring: Point::default(),
            hovering: false,
            hidden: false,
            lifecycle: if touch_device {
                Lifecycle::Disabled
            } else {
                Lifecycle::Running
            },
        }
    }

    pub fn from_config(motion: &MotionConfig, touch_device: bool) -> Self {
        Self::new(motion.cursor_lag, touch_device)
    }

    pub fn is_enabled(&self) -> bool {
        self.lifecycle != Lifecycle::Disabled
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn pointer_moved(&mut self, to: Point) {
        self.pointer = to;
    }

    /// `mouseover`: `path` is the target and its ancestors.
    pub fn pointer_over(&mut self, path: &[ElementInfo]) {
        if is_interactive(path) {
            self.hovering = true;
        }
    }

    /// `mouseout`: any element left clears the hover style.
    pub fn pointer_out(&mut self) {
        self.hovering = false;
    }

    pub fn pointer_left_document(&mut self) {
        self.hidden = true;
    }

    pub fn pointer_entered_document(&mut self) {
        self.hidden = false;
    }

    /// Advance the ring one step and report what to draw. `None` once the
    /// loop is cancelled or on touch devices.
    pub fn frame(&mut self) -> Option<CursorFrame> {
        if !self.is_running() {
            return None;
        }
        self.ring = ease_toward(self.ring, self.pointer, self.lag);
        Some(CursorFrame {
            dot: self.pointer,
            ring: self.ring,
            hovering: self.hovering,
            hidden: self.hidden,
        })
    }

    /// Current positions without advancing the ring. `None` when no frame
    /// would be drawn.
    pub fn snapshot(&self) -> Option<CursorFrame> {
        self.is_running().then_some(CursorFrame {
            dot: self.pointer,
            ring: self.ring,
            hovering: self.hovering,
            hidden: self.hidden,
        })
    }

    /// Cancel the frame loop. Idempotent.
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::Running {
            self.lifecycle = Lifecycle::Unmounted;
        }
    }
}
