//! Stable free-function surface over the typed handles.
//!
//! Mirrors the engine's historical C-style entry points one-to-one, with
//! opaque pointer aliases replaced by the handle types and function-pointer
//! callbacks replaced by [`EventListener`]. Hosts that prefer methods can
//! use the handle types directly; both routes hit the same code.

use std::path::Path;

use crate::error::Result;
use crate::event::providers::{ConsoleProvider, FileProvider};
use crate::event::{Event, EventKind, EventListener, EventLoop, ProviderHandle};
use crate::geometry::{Dimensions, Position};
use crate::present::{ScreenHandle, TextureId, WindowHandle};
use crate::scene::{ObjectId, SceneHandle};

// ── scene lifecycle ───────────────────────────────────────────────────────

pub fn create_scene(x: u32, y: u32, z: u32) -> Result<SceneHandle> {
    Ok(SceneHandle::new(Dimensions::new(x, y, z)?))
}

/// Deep copy; the clone and the source diverge independently.
pub fn clone_scene(scene: &SceneHandle) -> SceneHandle {
    scene.clone_scene()
}

/// Hard resize: objects outside the new bounds are dropped.
pub fn scene_resize(scene: &SceneHandle, x: u32, y: u32, z: u32) -> Result<()> {
    scene.borrow_mut().resize(Dimensions::new(x, y, z)?);
    Ok(())
}

/// Smart resize: objects outside the new bounds are clamped back in.
pub fn scene_smart_resize(scene: &SceneHandle, x: u32, y: u32, z: u32) -> Result<()> {
    scene.borrow_mut().smart_resize(Dimensions::new(x, y, z)?);
    Ok(())
}

// ── object lifecycle ──────────────────────────────────────────────────────

pub fn create_object(scene: &SceneHandle, x: u32, y: u32, z: u32, kind: i32) -> Result<ObjectId> {
    scene.borrow_mut().create_object(Position::new(x, y, z), kind)
}

pub fn remove_object(scene: &SceneHandle, id: ObjectId) -> Result<()> {
    scene.borrow_mut().remove_object(id)
}

pub fn change_type(scene: &SceneHandle, id: ObjectId, new_kind: i32) -> Result<()> {
    scene.borrow_mut().change_type(id, new_kind)
}

// ── presentation ──────────────────────────────────────────────────────────

pub fn create_window(res_x: u32, res_y: u32) -> WindowHandle {
    WindowHandle::new(res_x, res_y)
}

pub fn create_screen() -> ScreenHandle {
    ScreenHandle::new()
}

pub fn set_view_size(screen: &ScreenHandle, scale: f32) -> Result<()> {
    screen.borrow_mut().set_view_size(scale)
}

pub fn set_view_pos(screen: &ScreenHandle, dx: i32, dy: i32) {
    screen.borrow_mut().set_view_pos(dx, dy)
}

/// Loads a texture through the window's collaborator and registers it
/// with the scene, returning its slot.
pub fn load_texture(
    scene: &SceneHandle,
    window: &WindowHandle,
    path: impl AsRef<Path>,
) -> anyhow::Result<TextureId> {
    let texture = window.borrow_mut().load_texture(path.as_ref())?;
    Ok(scene.borrow_mut().add_texture(texture))
}

// ── event loop ────────────────────────────────────────────────────────────

pub fn create_event_loop(
    scene: SceneHandle,
    window: WindowHandle,
    screen: ScreenHandle,
) -> EventLoop {
    EventLoop::new(scene, window, screen)
}

/// Blocks the calling thread until the loop observes an `Exit` event.
pub fn start_event_loop(event_loop: &mut EventLoop) {
    event_loop.start()
}

pub fn add_event_listener(
    event_loop: &mut EventLoop,
    kind: EventKind,
    listener: impl EventListener + 'static,
) {
    event_loop.add_event_listener(kind, listener)
}

pub fn add_keyboard_listener(
    event_loop: &mut EventLoop,
    key: i32,
    listener: impl EventListener + 'static,
) {
    event_loop.add_keyboard_listener(key, listener)
}

/// Injects an event into the given provider's queue; it is dispatched in
/// a later cycle.
pub fn throw_event(provider: &ProviderHandle, event: Event) {
    provider.throw_event(event)
}

pub fn add_console_input_provider(event_loop: &mut EventLoop) -> anyhow::Result<ProviderHandle> {
    Ok(event_loop.add_provider(ConsoleProvider::spawn()?))
}

pub fn add_file_input_provider(
    event_loop: &mut EventLoop,
    path: impl AsRef<Path>,
) -> anyhow::Result<ProviderHandle> {
    Ok(event_loop.add_provider(FileProvider::watch(path.as_ref())?))
}

// ── diagnostics / utility ─────────────────────────────────────────────────

/// Liveness probe kept from the original surface.
pub fn testing() {
    log::info!("voxen engine alive");
}

pub fn test_string(s: &str) {
    log::info!("test string: {s}");
}

/// Hook for host environments that collect produced files; a plain build
/// only records the request.
pub fn output_file(file_name: &str) {
    log::info!("output file requested: {file_name}");
}
