//! Scroll and pointer driven effects, modelled as plain state machines.
//!
//! None of these types touch a DOM or a clock. The host feeds them events
//! (an intersection entry, a pointer position, a frame timestamp, a scroll
//! offset) and paints whatever they return. The generated pages run the same
//! math in `static/site.js`, configured from the values in
//! [`MotionConfig`](crate::config::MotionConfig).
//!
//! | Module | Effect |
//! |--------|--------|
//! | [`reveal`] | One-shot "became visible" trigger and intersection geometry |
//! | [`count_up`] | Eased integer counter, optionally gated on visibility |
//! | [`cursor`] | Custom cursor: snapping dot, lagging ring, hover state, magnetic offset |
//! | [`parallax`] | Scroll-linked vertical drift |
//! | [`header`] | Auto-hiding site header and mobile menu |

pub mod count_up;
pub mod cursor;
pub mod header;
pub mod parallax;
pub mod reveal;

use std::ops::{Add, Mul, Sub};

/// A position in CSS pixels, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// An axis-aligned rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Overlapping region, or `None` when the rectangles don't touch.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        (right >= left && bottom >= top).then(|| Rect::new(left, top, right - left, bottom - top))
    }
}
