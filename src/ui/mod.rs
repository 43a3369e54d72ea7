//! Immediate-mode UI: layout rects, mouse tracking and a few widgets

mod input;
mod widgets;

pub use input::*;
pub use widgets::*;

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Split off a strip from the top, returning (strip, rest)
    pub fn split_top(&self, h: f32) -> (Rect, Rect) {
        let h = h.min(self.h);
        (
            Rect::new(self.x, self.y, self.w, h),
            Rect::new(self.x, self.y + h, self.w, self.h - h),
        )
    }

    /// Split off a strip from the bottom, returning (rest, strip)
    pub fn split_bottom(&self, h: f32) -> (Rect, Rect) {
        let h = h.min(self.h);
        (
            Rect::new(self.x, self.y, self.w, self.h - h),
            Rect::new(self.x, self.bottom() - h, self.w, h),
        )
    }

    /// Split off a strip from the right, returning (rest, strip)
    pub fn split_right(&self, w: f32) -> (Rect, Rect) {
        let w = w.min(self.w);
        (
            Rect::new(self.x, self.y, self.w - w, self.h),
            Rect::new(self.right() - w, self.y, w, self.h),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_partition() {
        let r = Rect::new(0.0, 0.0, 400.0, 300.0);
        let (top, rest) = r.split_top(30.0);
        let (rest, bottom) = rest.split_bottom(50.0);
        let (center, right) = rest.split_right(28.0);
        assert_eq!(top, Rect::new(0.0, 0.0, 400.0, 30.0));
        assert_eq!(bottom, Rect::new(0.0, 250.0, 400.0, 50.0));
        assert_eq!(right, Rect::new(372.0, 30.0, 28.0, 220.0));
        assert_eq!(center, Rect::new(0.0, 30.0, 372.0, 220.0));
    }

    #[test]
    fn test_contains_half_open() {
        let r = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(r.contains(10.0, 14.9));
        assert!(!r.contains(15.0, 12.0));
    }

    #[test]
    fn test_split_larger_than_rect() {
        let (strip, rest) = Rect::new(0.0, 0.0, 10.0, 10.0).split_top(20.0);
        assert_eq!(strip.h, 10.0);
        assert_eq!(rest.h, 0.0);
    }
}
