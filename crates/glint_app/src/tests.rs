//! Interaction scenarios driven through the render loop
//!
//! Events are fed through an [`EventQueue`] exactly as the desktop event
//! loop would, and frames are drawn into a [`RecordingContext`].

use crate::render_loop::RenderLoop;
use crate::scene::{DemoScene, STATUS, TITLE};
use glint_core::{Color, DrawCommand, Point, RecordingContext, Size};
use glint_platform::{
    ControlFlow, Event, EventQueue, InputEvent, LifecycleEvent, MouseButton, WindowEvent,
};
use glint_widgets::Checkbox;

/// Surface matching the logical view one to one
const SURFACE: (u32, u32) = (800, 600);

fn left_click(x: f32, y: f32) -> Vec<Event> {
    vec![
        Event::Input(InputEvent::button_pressed(MouseButton::Left, x, y)),
        Event::Input(InputEvent::button_released(MouseButton::Left, x, y)),
    ]
}

fn run_frame(render_loop: &mut RenderLoop, events: Vec<Event>, surface: (u32, u32)) -> ControlFlow {
    let mut queue: EventQueue = events.into_iter().collect();
    let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));
    render_loop.frame(&mut queue, surface, &mut ctx)
}

fn checked(render_loop: &RenderLoop) -> Vec<bool> {
    render_loop
        .scene()
        .widgets()
        .checkboxes
        .iter()
        .map(Checkbox::is_checked)
        .collect()
}

fn radios(render_loop: &RenderLoop) -> Vec<bool> {
    render_loop.scene().widgets().radio_groups[0]
        .iter()
        .map(|b| b.is_selected())
        .collect()
}

#[test]
fn test_radio_scenario() {
    let mut render_loop = RenderLoop::new(DemoScene::default());
    assert_eq!(radios(&render_loop), vec![true, false, false]);

    // Third option, indicator centered on (460, 210)
    run_frame(&mut render_loop, left_click(460.0, 210.0), SURFACE);
    assert_eq!(radios(&render_loop), vec![false, false, true]);

    run_frame(&mut render_loop, left_click(462.0, 212.0), SURFACE);
    assert_eq!(radios(&render_loop), vec![false, false, true]);
}

#[test]
fn test_checkbox_double_click_scenario() {
    let mut render_loop = RenderLoop::new(DemoScene::default());
    assert_eq!(checked(&render_loop), vec![false, false, false]);

    run_frame(&mut render_loop, left_click(75.0, 125.0), SURFACE);
    assert_eq!(checked(&render_loop), vec![true, false, false]);

    run_frame(&mut render_loop, left_click(75.0, 125.0), SURFACE);
    assert_eq!(checked(&render_loop), vec![false, false, false]);
}

#[test]
fn test_both_clicks_in_one_frame() {
    let mut render_loop = RenderLoop::new(DemoScene::default());
    let mut events = left_click(80.0, 210.0);
    events.extend(left_click(460.0, 170.0));

    run_frame(&mut render_loop, events, SURFACE);
    assert_eq!(checked(&render_loop), vec![false, false, true]);
    assert_eq!(radios(&render_loop), vec![false, true, false]);
}

#[test]
fn test_clicks_outside_change_nothing() {
    let mut render_loop = RenderLoop::new(DemoScene::default());
    let before = render_loop.scene().clone();

    let mut events = Vec::new();
    for (x, y) in [(10.0, 10.0), (300.0, 20.0), (401.0, 200.0), (600.0, 400.0)] {
        events.extend(left_click(x, y));
    }
    run_frame(&mut render_loop, events, SURFACE);

    assert_eq!(render_loop.scene(), &before);
}

#[test]
fn test_non_left_events_change_nothing() {
    let mut render_loop = RenderLoop::new(DemoScene::default());
    let before = render_loop.scene().clone();

    let events = vec![
        Event::Lifecycle(LifecycleEvent::Resumed),
        Event::Input(InputEvent::button_pressed(MouseButton::Right, 80.0, 130.0)),
        Event::Input(InputEvent::button_pressed(MouseButton::Middle, 460.0, 210.0)),
        Event::Input(InputEvent::mouse_moved(80.0, 130.0)),
        Event::Window(WindowEvent::Resized {
            width: 1024,
            height: 768,
        }),
        Event::Window(WindowEvent::ScaleFactorChanged { scale_factor: 2.0 }),
    ];
    let flow = run_frame(&mut render_loop, events, SURFACE);

    assert_eq!(flow, ControlFlow::Continue);
    assert_eq!(render_loop.scene(), &before);
}

#[test]
fn test_clicks_on_hidpi_surface() {
    let mut render_loop = RenderLoop::new(DemoScene::default());

    // Physical (920, 340) on a 2x surface is logical (460, 170)
    run_frame(&mut render_loop, left_click(920.0, 340.0), (1600, 1200));
    assert_eq!(radios(&render_loop), vec![false, true, false]);

    // Logical (460, 170) would miss here: it maps to (230, 85)
    run_frame(&mut render_loop, left_click(460.0, 170.0), (1600, 1200));
    assert_eq!(radios(&render_loop), vec![false, true, false]);
    assert_eq!(checked(&render_loop), vec![false, false, false]);
}

#[test]
fn test_close_stops_after_pending_clicks() {
    let mut render_loop = RenderLoop::new(DemoScene::default());
    let mut events = left_click(75.0, 165.0);
    events.push(Event::Window(WindowEvent::CloseRequested));

    assert_eq!(run_frame(&mut render_loop, events, SURFACE), ControlFlow::Exit);
    assert_eq!(checked(&render_loop), vec![false, true, false]);
}

#[test]
fn test_frame_reflects_state() {
    let mut render_loop = RenderLoop::new(DemoScene::default());
    let mut queue: EventQueue = left_click(75.0, 125.0).into_iter().collect();
    let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));
    render_loop.frame(&mut queue, SURFACE, &mut ctx);

    let commands = ctx.commands();
    assert_eq!(commands.first(), Some(&DrawCommand::Clear(Color::WHITE)));

    let texts = ctx.texts();
    assert_eq!(texts.first(), Some(&TITLE));
    assert_eq!(texts.last(), Some(&STATUS));

    // One green check mark for the first box, one blue dot for option 1
    let marks = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillRect { color, .. } if *color == Color::GREEN))
        .count();
    let dots = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillCircle { color, .. } if *color == Color::BLUE))
        .count();
    assert_eq!((marks, dots), (1, 1));

    assert!(commands.iter().any(|c| matches!(
        c,
        DrawCommand::FillRect { rect, color } if *color == Color::GREEN
            && rect.contains(Point::new(80.0, 130.0))
    )));
}
