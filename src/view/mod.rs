//! View layer - paints the panel layout into a softbuffer surface
//!
//! The 3D scene itself is drawn by the external rendering backend; this layer
//! only draws the panel chrome on top, walking the layout's draw order.

pub mod frame;

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use softbuffer::Surface;
use winit::window::Window;

use crate::layout::LayoutStore;
use crate::model::AppModel;
use crate::panel::{Panel, PixelRect, ResizeEdge};
use crate::panels::panel_color;

pub use frame::Frame;

/// Viewport background behind all panels
pub const BACKGROUND: u32 = 0xFF101418;
/// Border of an idle panel
pub const BORDER: u32 = 0xFF3C4048;
/// Border of the panel grabbed by the current gesture
pub const ACTIVE_BORDER: u32 = 0xFF0080FF;
/// Header strip height in pixels
pub const HEADER_HEIGHT: usize = 18;

const HEADER_TINT: u32 = 0x30FFFFFF;
const EDGE_HIGHLIGHT: u32 = 0xFFFFB000;
const EDGE_THICKNESS: usize = 3;

/// Paint every visible panel in draw order
pub fn paint_layout(frame: &mut Frame, layout: &LayoutStore) {
    let (width, height) = (frame.width() as u32, frame.height() as u32);
    frame.clear(BACKGROUND);

    let active = layout.active_panel();
    for panel in layout.compute_draw_order() {
        let rect = panel.rect.to_pixels(width, height);
        let is_active = active.is_some_and(|a| std::ptr::eq(a, panel));
        paint_panel(frame, panel, rect, is_active);
    }
}

fn paint_panel(frame: &mut Frame, panel: &Panel, rect: PixelRect, is_active: bool) {
    let border = if is_active { ACTIVE_BORDER } else { BORDER };
    frame.draw_bordered_rect(rect, panel_color(panel.category), border);
    frame.blend_rect_px(
        rect.x + 1,
        rect.y + 1,
        rect.width.saturating_sub(2),
        HEADER_HEIGHT.min(rect.height.saturating_sub(2)),
        HEADER_TINT,
    );

    if let Some(edge) = panel.active_edge.filter(|_| panel.resizing) {
        let t = EDGE_THICKNESS;
        let (x, y, w, h) = match edge {
            ResizeEdge::Left => (rect.x, rect.y, t, rect.height),
            ResizeEdge::Right => (rect.x + rect.width.saturating_sub(t), rect.y, t, rect.height),
            ResizeEdge::Top => (rect.x, rect.y, rect.width, t),
            ResizeEdge::Bottom => (rect.x, rect.y + rect.height.saturating_sub(t), rect.width, t),
        };
        frame.fill_rect_px(x, y, w, h, EDGE_HIGHLIGHT);
    }
}

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer doesn't guarantee buffer contents survive between frames,
    /// so we draw into our own buffer and copy on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        resize_surface(&mut surface, width, height)?;

        Ok(Self {
            surface,
            back_buffer: vec![0u32; (width as usize) * (height as usize)],
            width,
            height,
        })
    }

    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (width, height) = (model.window_size.0.max(1), model.window_size.1.max(1));
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.back_buffer
                .resize((width as usize) * (height as usize), 0);
            resize_surface(&mut self.surface, width, height)?;
        }

        let mut frame = Frame::new(&mut self.back_buffer, width as usize, height as usize);
        paint_layout(&mut frame, &model.layout);

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

fn resize_surface(surface: &mut Surface<Rc<Window>, Rc<Window>>, width: u32, height: u32) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        anyhow::bail!("Surface size must be non-zero ({}x{})", width, height);
    };
    surface
        .resize(w, h)
        .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))
}
