//! Pointer button dispatch.
//!
//! The host forwards every pointer button event; only a left-button release
//! over an icon does anything. Everything else is a silent no-op — the dock
//! never consumes or swallows events, it just watches them go by.

use tracing::debug;

use crate::geometry::Rect;
use crate::hit;
use crate::icon::DockIcon;
use crate::settings::DockSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Middle,
    Right,
    /// Any other button, by its raw host code.
    Other(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// A pointer button event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerButton {
    pub button: Button,
    pub state: ButtonState,
}

/// Seam to the process-launch collaborator.
///
/// Implemented for any `Fn(&str)` so hosts can plug in a spawner (or tests a
/// recorder) without a wrapper type.
pub trait Launcher {
    fn launch(&self, command: &str);
}

impl<F: Fn(&str)> Launcher for F {
    fn launch(&self, command: &str) {
        self(command)
    }
}

/// Resolves a qualifying click to an icon and launches it. Returns the
/// storage index of the launched icon, or `None` when the event did not
/// qualify or hit nothing.
pub(crate) fn dispatch(
    event: PointerButton,
    cursor: (f64, f64),
    dock: Rect,
    settings: &DockSettings,
    icons: &[DockIcon],
    launcher: &dyn Launcher,
) -> Option<usize> {
    if event.button != Button::Left || event.state != ButtonState::Released {
        return None;
    }

    let index = hit::icon_at(cursor.0, cursor.1, dock, settings, icons.len())?;
    let icon = &icons[index];
    debug!(app = %icon.app_id, index, "launching dock icon");
    launcher.launch(&icon.exec);
    Some(index)
}
