//! An embeddable OpenGL dock renderer for Wayland compositors.
//!
//! The engine renders a vertical dock of application icons with custom
//! shader effects (3D bevel, shimmer sweep, animated gradient border) into a
//! framebuffer owned by a host compositor, and maps pointer clicks on those
//! icons back to application launches.
//!
//! # Embedding contract
//!
//! The host owns the GL context, the event loop, and the frame clock. It
//! drives the engine through four calls, all on its render/event thread:
//!
//! - [`DockEngine::set_output`] from the output-configuration signal;
//!   recomputes the dock geometry synchronously.
//! - [`DockEngine::render`] once per frame from the overlay hook, with the
//!   target framebuffer's geometry and the current pointer position.
//! - [`DockEngine::pointer_button`] from the pointer-button signal.
//! - [`DockEngine::destroy`] before teardown.
//!
//! The engine treats the context as a *shared* resource: every binding it
//! changes (program, vertex array, textures, blend state) is captured first
//! and restored before control returns to the host, on every exit path. GPU
//! resources are created lazily on the first rendered frame; if shader
//! compilation fails the engine logs it and renders nothing for the rest of
//! its life rather than disturb the host.
//!
//! # Safety
//!
//! Creating textures and drawing requires a valid, current GL context, so
//! [`DockEngine::render`] and [`DockEngine::destroy`] are `unsafe`; the
//! caller guarantees the context. Everything else is safe plain state.

mod clock;
mod engine;
mod geometry;
mod gl;
mod hit;
mod hover;
mod icon;
mod input;
mod render;
mod settings;
mod shaders;

pub use clock::{FixedClock, MonotonicClock, TimeSource};
pub use engine::DockEngine;
pub use geometry::{dock_geometry, Rect};
pub use hit::icon_at;
pub use hover::HOVER_SMOOTHING;
pub use icon::DockIcon;
pub use input::{Button, ButtonState, Launcher, PointerButton};
pub use settings::DockSettings;
