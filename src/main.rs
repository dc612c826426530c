use anyhow::Result;
use glam::Vec2;
use log::info;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::{GameLoop, FIXED_TIMESTEP};
use engine::input::InputManager;
use game::{GameMode, GameSession};

/// Flat floor with a wall on each side and a raised block to jump at
fn build_level(session: &mut GameSession) {
    session.add_floor(0.0, -10.0, 8000.0, 20.0);
    session.add_wall(-1500.0, 400.0, 40.0, 800.0);
    session.add_wall(1500.0, 400.0, 40.0, 800.0);
    session.add_wall(600.0, 150.0, 200.0, 300.0);
}

fn is_pause_key(event: &KeyEvent) -> bool {
    event.physical_key == PhysicalKey::Code(KeyCode::KeyP)
        && event.state == ElementState::Pressed
        && !event.repeat
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Side Scroller...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Side Scroller")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut session = GameSession::new(GameMode::new(), Vec2::new(0.0, 200.0));
    build_level(&mut session);
    session.begin_play()?;
    info!(
        "Level ready with {} bodies",
        session.physics().body_count()
    );

    let size = window.inner_size();
    session
        .camera_mut()
        .resize(size.width as f32, size.height as f32);

    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();
    let mut cursor = Vec2::ZERO;

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                session
                    .camera_mut()
                    .resize(physical_size.width as f32, physical_size.height as f32);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                if is_pause_key(&event) {
                    game_loop.toggle_pause();
                }
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                cursor = Vec2::new(position.x as f32, position.y as f32);
            }
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => {
                if state == ElementState::Pressed {
                    log::debug!(
                        "{:?} click at world {:?}",
                        button,
                        session.camera().screen_to_world(cursor)
                    );
                }
                input.process_mouse_button(button, state);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let ticks = game_loop.begin_frame();
                for _ in 0..ticks {
                    let events = input.drain_events();
                    session.tick(FIXED_TIMESTEP, &events);
                }

                if let Some(pawn) = session.pawn() {
                    log::trace!(
                        "Frame {} (tick {}): pawn at {:?} moving {:?} facing {:?}, \
                         flipbook {:?} frame {}, ledge search {}, weapon {:?}, camera at {:?}",
                        game_loop.frame_count(),
                        session.tick_count(),
                        pawn.location(),
                        pawn.velocity(),
                        pawn.facing(),
                        pawn.sprite().flipbook().map(|f| f.name.as_str()),
                        pawn.sprite().current_frame(),
                        pawn.is_searching_for_ledge(),
                        session.weapon_transform(),
                        session.camera().position()
                    );
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
