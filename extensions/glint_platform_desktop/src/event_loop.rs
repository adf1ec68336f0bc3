//! Desktop event loop implementation using winit
//!
//! winit delivers events through callbacks. They are converted and pushed
//! into an [`EventQueue`]; on every redraw the frame handler receives the
//! queue and drains it. Redraws are requested continuously, so the frame
//! rate is bounded only by presentation.

use crate::input;
use crate::window::DesktopWindow;
use glint_platform::{
    ControlFlow, Event, EventLoop, EventQueue, InputEvent, LifecycleEvent, MouseEvent,
    PlatformError, Window, WindowConfig, WindowEvent,
};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent as WinitWindowEvent;
use winit::event_loop::{
    ActiveEventLoop, ControlFlow as WinitControlFlow, EventLoop as WinitEventLoop,
};
use winit::window::WindowId;

/// Desktop event loop wrapping winit's event loop
pub struct DesktopEventLoop {
    event_loop: WinitEventLoop<()>,
    window_config: WindowConfig,
}

impl DesktopEventLoop {
    /// Create a new desktop event loop
    pub fn new(config: WindowConfig) -> Result<Self, PlatformError> {
        let event_loop =
            WinitEventLoop::new().map_err(|e| PlatformError::EventLoop(e.to_string()))?;

        Ok(Self {
            event_loop,
            window_config: config,
        })
    }
}

impl EventLoop for DesktopEventLoop {
    type Window = DesktopWindow;

    fn run<F>(self, handler: F) -> Result<(), PlatformError>
    where
        F: FnMut(&mut EventQueue, &Self::Window) -> ControlFlow + 'static,
    {
        let mut app = DesktopApp::new(self.window_config, handler);
        self.event_loop
            .run_app(&mut app)
            .map_err(|e| PlatformError::EventLoop(e.to_string()))?;

        match app.window_error {
            Some(e) => Err(PlatformError::WindowCreation(e)),
            None => Ok(()),
        }
    }
}

/// Internal winit application handler
struct DesktopApp<F>
where
    F: FnMut(&mut EventQueue, &DesktopWindow) -> ControlFlow,
{
    window_config: WindowConfig,
    window: Option<DesktopWindow>,
    handler: F,
    queue: EventQueue,
    mouse_position: (f32, f32),
    should_exit: bool,
    window_error: Option<String>,
}

impl<F> DesktopApp<F>
where
    F: FnMut(&mut EventQueue, &DesktopWindow) -> ControlFlow,
{
    fn new(window_config: WindowConfig, handler: F) -> Self {
        Self {
            window_config,
            window: None,
            handler,
            queue: EventQueue::new(),
            mouse_position: (0.0, 0.0),
            should_exit: false,
            window_error: None,
        }
    }

    fn run_frame(&mut self) {
        if let Some(ref window) = self.window {
            if (self.handler)(&mut self.queue, window) == ControlFlow::Exit {
                self.should_exit = true;
            }
        }
    }
}

impl<F> ApplicationHandler for DesktopApp<F>
where
    F: FnMut(&mut EventQueue, &DesktopWindow) -> ControlFlow,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            self.queue.push(Event::Lifecycle(LifecycleEvent::Resumed));
            return;
        }

        match DesktopWindow::new(event_loop, &self.window_config) {
            Ok(window) => {
                tracing::debug!(
                    "Window created: {:?} at scale {}",
                    window.size(),
                    window.scale_factor()
                );
                event_loop.set_control_flow(WinitControlFlow::Poll);
                window.request_redraw();
                self.window = Some(window);
                self.queue.push(Event::Lifecycle(LifecycleEvent::Resumed));
            }
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                self.window_error = Some(e.to_string());
                event_loop.exit();
            }
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.queue.push(Event::Lifecycle(LifecycleEvent::Suspended));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WinitWindowEvent,
    ) {
        match event {
            WinitWindowEvent::CloseRequested => {
                self.queue.push(Event::Window(WindowEvent::CloseRequested));
                // Run a frame right away so the close is observed even if
                // no further redraw arrives.
                self.run_frame();
            }

            WinitWindowEvent::Resized(size) => {
                self.queue.push(Event::Window(WindowEvent::Resized {
                    width: size.width,
                    height: size.height,
                }));
            }

            WinitWindowEvent::Focused(focused) => {
                self.queue.push(Event::Window(WindowEvent::Focused(focused)));
            }

            WinitWindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.queue
                    .push(Event::Window(WindowEvent::ScaleFactorChanged { scale_factor }));
            }

            WinitWindowEvent::RedrawRequested => {
                self.run_frame();
            }

            WinitWindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = (position.x as f32, position.y as f32);
                let (x, y) = self.mouse_position;
                self.queue.push(Event::Input(InputEvent::mouse_moved(x, y)));
            }

            WinitWindowEvent::MouseInput { state, button, .. } => {
                let (x, y) = self.mouse_position;
                self.queue.push(Event::Input(input::convert_mouse_input(
                    state, button, x, y,
                )));
            }

            WinitWindowEvent::CursorEntered { .. } => {
                self.queue
                    .push(Event::Input(InputEvent::Mouse(MouseEvent::Entered)));
            }

            WinitWindowEvent::CursorLeft { .. } => {
                self.queue.push(Event::Input(InputEvent::Mouse(MouseEvent::Left)));
            }

            _ => {}
        }

        if self.should_exit {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
