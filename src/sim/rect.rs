//! Axis-aligned rectangle geometry for every entity
//!
//! A rect is a top-left corner plus a size, in whole screen pixels.
//! Edges follow the half-open convention: `right = x + w` is the first
//! column *outside* the rect, `bottom = y + h` the first row below it.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An integer axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height (both non-negative)
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    /// Build a rect of `size` whose center lands on `center`
    ///
    /// Odd sizes round the corner toward the top-left (floor division).
    pub fn from_center(center: IVec2, size: IVec2) -> Self {
        Self {
            pos: center - size.div_euclid(IVec2::splat(2)),
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Center point (floor)
    pub fn center(&self) -> IVec2 {
        self.pos + self.size.div_euclid(IVec2::splat(2))
    }

    /// Shift the rect by `delta` pixels
    #[inline]
    pub fn translate(&mut self, delta: IVec2) {
        self.pos += delta;
    }

    /// Check whether two rects overlap
    ///
    /// Rects that only abut (`a.right() == b.left()`) do not overlap; rects
    /// that share a single row or column of pixels do.
    pub fn colliderect(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Check if a point lies inside the rect
    pub fn contains_point(&self, point: IVec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}
