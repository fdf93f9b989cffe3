//! Rect - Rectangle regions in pixel coordinates

/// A rectangle region
///
/// Unsigned because every rectangle the scaler handles lies inside a grid.
/// A small `Copy` type since it is frequently passed around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Check if the rectangle is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Clip to a `width` x `height` image.
    ///
    /// Returns `None` if nothing of the rectangle remains.
    pub fn clip(&self, width: u32, height: u32) -> Option<Rect> {
        if self.x >= width || self.y >= height {
            return None;
        }
        let w = self.w.min(width - self.x);
        let h = self.h.min(height - self.y);
        let r = Rect::new(self.x, self.y, w, h);
        if r.is_empty() { None } else { Some(r) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(2, 3, 4, 5);
        assert_eq!(r.right(), 6);
        assert_eq!(r.bottom(), 8);
        assert_eq!(r.area(), 20);
        assert!(r.contains_point(2, 3));
        assert!(!r.contains_point(6, 3));
    }

    #[test]
    fn test_rect_clip() {
        let r = Rect::new(8, 8, 5, 5);
        assert_eq!(r.clip(10, 12), Some(Rect::new(8, 8, 2, 4)));
        assert_eq!(r.clip(8, 20), None);
        assert_eq!(Rect::new(0, 0, 0, 3).clip(10, 10), None);
    }
}
