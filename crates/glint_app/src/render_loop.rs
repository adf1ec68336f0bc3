//! One frame of the demo: drain events, update widgets, draw

use glint_core::{Color, DrawContext};
use glint_platform::{ControlFlow, EventSource};
use glint_widgets::InputDispatcher;

use crate::scene::DemoScene;

/// Background color every frame starts from
pub const BACKGROUND: Color = Color::WHITE;

/// Drives a [`DemoScene`] frame by frame
#[derive(Debug)]
pub struct RenderLoop {
    scene: DemoScene,
    dispatcher: InputDispatcher,
}

impl RenderLoop {
    pub fn new(scene: DemoScene) -> Self {
        Self {
            scene,
            dispatcher: InputDispatcher::new(),
        }
    }

    pub fn scene(&self) -> &DemoScene {
        &self.scene
    }

    /// Run one frame
    ///
    /// Drains every pending event from `events`, mapping pointer positions
    /// through the scene view for a surface of `surface_size` physical
    /// pixels. On a close request the frame ends with
    /// [`ControlFlow::Exit`] and nothing is drawn; otherwise the scene is
    /// drawn into `ctx` and the caller presents it.
    pub fn frame(
        &mut self,
        events: &mut dyn EventSource,
        surface_size: (u32, u32),
        ctx: &mut dyn DrawContext,
    ) -> ControlFlow {
        let view = self.scene.view();
        let mut flow = ControlFlow::Continue;

        while let Some(event) = events.poll_event() {
            let event_flow =
                self.dispatcher
                    .handle_event(&event, self.scene.widgets_mut(), &view, surface_size);
            if event_flow == ControlFlow::Exit {
                flow = ControlFlow::Exit;
            }
        }

        if flow == ControlFlow::Exit {
            tracing::info!("Close requested, stopping render loop");
            return flow;
        }

        ctx.clear(BACKGROUND);
        self.scene.draw(ctx);
        ControlFlow::Continue
    }
}
