//! Axis-aligned rectangle geometry for barriers and the player body
//!
//! A quad is defined by its four edges in world space:
//! - left/right: horizontal extent (scroll axis)
//! - bottom/top: vertical extent (y grows upward)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Quad {
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Build a quad centred on `center` with the given half extents
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self::new(
            center.x - half_extents.x,
            center.x + half_extents.x,
            center.y - half_extents.y,
            center.y + half_extents.y,
        )
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }

    /// Separating-axis overlap test. Shared edges count as overlap.
    pub fn overlaps(&self, other: &Quad) -> bool {
        !(self.right < other.left
            || self.left > other.right
            || self.top < other.bottom
            || self.bottom > other.top)
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.bottom && point.y <= self.top
    }

    /// Shift horizontally (world scroll to camera space)
    pub fn translated_x(&self, dx: f32) -> Self {
        Self::new(self.left + dx, self.right + dx, self.bottom, self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_from_center() {
        let q = Quad::from_center(Vec2::new(10.0, 5.0), Vec2::new(1.0, 0.5));
        assert_eq!(q, Quad::new(9.0, 11.0, 4.5, 5.5));
        assert!((q.width() - 2.0).abs() < f32::EPSILON);
        assert!((q.height() - 1.0).abs() < f32::EPSILON);
        assert_eq!(q.center(), Vec2::new(10.0, 5.0));
    }

    #[test]
    fn test_overlaps_each_separating_axis() {
        let a = Quad::new(0.0, 2.0, 0.0, 2.0);
        // Entirely left, right, below, above
        assert!(!a.overlaps(&Quad::new(-5.0, -1.0, 0.0, 2.0)));
        assert!(!a.overlaps(&Quad::new(3.0, 5.0, 0.0, 2.0)));
        assert!(!a.overlaps(&Quad::new(0.0, 2.0, -5.0, -0.5)));
        assert!(!a.overlaps(&Quad::new(0.0, 2.0, 2.5, 4.0)));
        // Partial and full containment
        assert!(a.overlaps(&Quad::new(1.0, 3.0, 1.0, 3.0)));
        assert!(a.overlaps(&Quad::new(0.5, 1.5, 0.5, 1.5)));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Quad::new(0.0, 2.0, 0.0, 2.0);
        assert!(a.overlaps(&Quad::new(2.0, 4.0, 0.0, 2.0)));
        assert!(a.overlaps(&Quad::new(0.0, 2.0, 2.0, 4.0)));
    }

    #[test]
    fn test_contains_point_and_translate() {
        let q = Quad::new(0.0, 4.0, 0.0, 1.0).translated_x(-2.0);
        assert!(q.contains_point(Vec2::new(-2.0, 0.5)));
        assert!(!q.contains_point(Vec2::new(2.5, 0.5)));
    }
}
