//! Normalized panel rectangles
//!
//! All coordinates live in the unit square with the origin at the top-left of
//! the viewport. A normalized rect is always fully on-screen and never smaller
//! than `MIN_SIZE` nor larger than `MAX_SIZE` along either axis.

/// Smallest allowed panel width/height (fraction of the viewport)
pub const MIN_SIZE: f32 = 0.1;

/// Largest allowed panel width/height (fraction of the viewport)
pub const MAX_SIZE: f32 = 1.0;

/// A rectangle in normalized `[0, 1]` screen space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole viewport
    pub const fn full() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Point-in-rect test, inclusive on every edge
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Clamp width and height into `[MIN_SIZE, MAX_SIZE]`
    pub fn clamp_size(&mut self) {
        self.width = self.width.clamp(MIN_SIZE, MAX_SIZE);
        self.height = self.height.clamp(MIN_SIZE, MAX_SIZE);
    }

    /// Clamp the origin so the rect stays inside the unit square.
    ///
    /// The far edge is compared directly so a rect already flush with the
    /// right/bottom edge keeps its exact origin. An oversized rect is pinned
    /// to the origin.
    pub fn clamp_position(&mut self) {
        if self.right() > MAX_SIZE {
            self.x = MAX_SIZE - self.width;
        }
        if self.bottom() > MAX_SIZE {
            self.y = MAX_SIZE - self.height;
        }
        self.x = self.x.max(0.0);
        self.y = self.y.max(0.0);
    }

    /// Size clamp followed by position clamp
    pub fn normalized(mut self) -> Self {
        self.clamp_size();
        self.clamp_position();
        self
    }

    /// Move by a delta, keeping the size, then clamp the origin on-screen
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
        self.clamp_position();
    }

    /// Convert to pixel space for a viewport of the given size
    pub fn to_pixels(&self, width_px: u32, height_px: u32) -> PixelRect {
        let w = width_px as f32;
        let h = height_px as f32;
        let x0 = (self.x * w).round().max(0.0) as usize;
        let y0 = (self.y * h).round().max(0.0) as usize;
        let x1 = (self.right() * w).round().max(0.0) as usize;
        let y1 = (self.bottom() * h).round().max(0.0) as usize;
        PixelRect {
            x: x0,
            y: y0,
            width: x1.saturating_sub(x0),
            height: y1.saturating_sub(y0),
        }
    }
}

/// A rectangle in window pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}
