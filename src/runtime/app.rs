use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{CursorIcon, Window};

use panelview::commands::Cmd;
use panelview::layout::GestureState;
use panelview::messages::{AppMsg, Msg};
use panelview::model::AppModel;
use panelview::panel::ResizeEdge;
use panelview::update::update;
use panelview::view::Renderer;

use super::input::key_to_msg;

/// Frame clock period for panel updates
const TICK_INTERVAL: Duration = Duration::from_millis(16);

pub struct App {
    model: AppModel,
    title: String,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    last_tick: Instant,
    mouse_position: Option<(f64, f64)>,
    left_mouse_down: bool,
}

impl App {
    pub fn new(model: AppModel, title: String) -> Self {
        Self {
            model,
            title,
            renderer: None,
            window: None,
            context: None,
            last_tick: Instant::now(),
            mouse_position: None,
            left_mouse_down: false,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.model.window_size;
        let window_attributes = Window::default_attributes()
            .with_title(self.title.as_str())
            .with_inner_size(LogicalSize::new(width, height));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create graphics context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        let size = window.inner_size();
        self.model.resize(size.width, size.height);

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => update(
                &mut self.model,
                Msg::App(AppMsg::Resize(size.width, size.height)),
            ),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return None;
                }
                let msg = key_to_msg(&event.logical_key)?;
                update(&mut self.model, msg)
            }

            WindowEvent::CursorMoved { position, .. } => {
                let previous = self.mouse_position.replace((position.x, position.y));
                if !self.left_mouse_down {
                    self.update_cursor_icon(position.x, position.y);
                    return None;
                }
                let (px, py) = previous?;
                let (x0, y0) = self.model.normalize_point(px, py);
                let (x1, y1) = self.model.normalize_point(position.x, position.y);
                update(&mut self.model, Msg::drag(x1 - x0, y1 - y0))
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    self.left_mouse_down = true;
                    let (px, py) = self.mouse_position?;
                    let (x, y) = self.model.normalize_point(px, py);
                    update(&mut self.model, Msg::press(x, y))
                }
                ElementState::Released => {
                    self.left_mouse_down = false;
                    update(&mut self.model, Msg::release())
                }
            },

            WindowEvent::CursorLeft { .. } => {
                self.mouse_position = None;
                None
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {}", e);
                }
                None
            }

            _ => None,
        }
    }

    /// Show a resize cursor over panel borders
    fn update_cursor_icon(&self, x: f64, y: f64) {
        let Some(window) = &self.window else { return };
        let (nx, ny) = self.model.normalize_point(x, y);

        let icon = match self.model.layout.get_panel_at(nx, ny) {
            Some(panel) if panel.visible => match panel.detect_edge(nx, ny) {
                Some(ResizeEdge::Left | ResizeEdge::Right) => CursorIcon::ColResize,
                Some(ResizeEdge::Top | ResizeEdge::Bottom) => CursorIcon::RowResize,
                None => CursorIcon::Default,
            },
            _ => CursorIcon::Default,
        };
        window.set_cursor(icon);
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
    }

    fn tick(&mut self) -> Option<Cmd> {
        update(&mut self.model, Msg::App(AppMsg::Tick))
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to open window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        let Some(window) = &self.window else { return };
        if window_id != window.id() {
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            if cmd.is_quit() {
                event_loop.exit();
            } else if cmd.needs_redraw() {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now.duration_since(self.last_tick) >= TICK_INTERVAL {
            self.last_tick = now;
            if self.tick().is_some_and(|cmd| cmd.needs_redraw()) {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
        }

        // A gesture in flight redraws on every drag event, not on the clock
        if self.model.layout.gesture_state() == GestureState::Idle {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.last_tick + TICK_INTERVAL));
        } else {
            event_loop.set_control_flow(ControlFlow::Poll);
        }
    }
}
