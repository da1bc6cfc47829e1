//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use crate::panel::PixelRect;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color
/// with full opacity.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to
    /// what the buffer can hold.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 && buffer.len() < width * height {
            buffer.len() / width
        } else {
            height
        };
        Self {
            buffer,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get a single pixel (returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle specified by pixel coordinates
    pub fn fill_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let x1 = x.saturating_add(w).min(self.width);
        let y1 = y.saturating_add(h).min(self.height);

        for py in y.min(self.height)..y1 {
            let row_start = py * self.width;
            self.buffer[row_start + x.min(x1)..row_start + x1].fill(color);
        }
    }

    pub fn fill_rect(&mut self, rect: PixelRect, color: u32) {
        self.fill_rect_px(rect.x, rect.y, rect.width, rect.height, color);
    }

    /// Fill a rectangle with alpha blending (ARGB, alpha in the high byte)
    pub fn blend_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect_px(x, y, w, h, color);
        }

        let x1 = x.saturating_add(w).min(self.width);
        let y1 = y.saturating_add(h).min(self.height);
        for py in y.min(self.height)..y1 {
            let row_start = py * self.width;
            for px in x.min(x1)..x1 {
                let idx = row_start + px;
                self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
            }
        }
    }

    /// Draw a rectangle outline of the given thickness
    pub fn stroke_rect(&mut self, rect: PixelRect, thickness: usize, color: u32) {
        let PixelRect {
            x,
            y,
            width: w,
            height: h,
        } = rect;
        let t = thickness.min(w).min(h);
        self.fill_rect_px(x, y, w, t, color);
        self.fill_rect_px(x, y + h.saturating_sub(t), w, t, color);
        self.fill_rect_px(x, y, t, h, color);
        self.fill_rect_px(x + w.saturating_sub(t), y, t, h, color);
    }

    /// Draw a filled rectangle with a 1px opaque border
    pub fn draw_bordered_rect(&mut self, rect: PixelRect, fill_color: u32, border_color: u32) {
        let alpha = (fill_color >> 24) & 0xFF;
        if alpha == 0xFF {
            self.fill_rect(rect, fill_color);
        } else {
            self.blend_rect_px(rect.x, rect.y, rect.width, rect.height, fill_color);
        }
        self.stroke_rect(rect, 1, border_color | 0xFF000000);
    }
}
