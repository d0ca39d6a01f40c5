//! Axis-aligned bounding box in screen space (y grows downward)

/// A box defined by its top-left corner and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Move so the bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.y = y - self.h;
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// True when the interiors intersect. Boxes that only share an edge
    /// do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlaps() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Aabb::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&Aabb::new(2.0, 2.0, 2.0, 2.0)));
        assert!(!a.overlaps(&Aabb::new(20.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Aabb::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_contains() {
        let r = Aabb::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(50.0, 40.0));
        assert!(!r.contains(5.0, 40.0));
        assert!(!r.contains(50.0, 100.0));
    }

    #[test]
    fn test_set_bottom() {
        let mut r = Aabb::new(0.0, 0.0, 4.0, 30.0);
        r.set_bottom(500.0);
        assert_eq!(r.y, 470.0);
        assert_eq!(r.bottom(), 500.0);
    }
}
