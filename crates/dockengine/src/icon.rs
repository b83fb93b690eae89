//! Dock icon records.

use std::path::PathBuf;

/// One pinned application in the dock.
///
/// Icons are created once at engine construction from the configured app
/// list and owned exclusively by the engine. Position in the engine's icon
/// vector is the *storage* index; the render pass draws storage order
/// top-to-bottom, which makes the visual stacking order the reverse (the
/// last configured app occupies the topmost slot).
#[derive(Debug)]
pub struct DockIcon {
    pub app_id: String,
    pub name: String,
    /// Launch command, field codes already stripped by the entry resolver.
    pub exec: String,
    /// Resolved PNG path; `None` when no theme provided the icon.
    pub icon_path: Option<PathBuf>,
    pub(crate) texture: Option<glow::Texture>,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) hover: f32,
    pub(crate) loaded: bool,
}

impl DockIcon {
    pub fn new(
        app_id: impl Into<String>,
        name: impl Into<String>,
        exec: impl Into<String>,
        icon_path: Option<PathBuf>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            name: name.into(),
            exec: exec.into(),
            icon_path,
            texture: None,
            width: 0,
            height: 0,
            hover: 0.0,
            loaded: false,
        }
    }

    /// Whether the icon's texture has been decoded and uploaded. Unloaded
    /// icons keep their layout slot but are never drawn.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Current hover animation value in [0, 1].
    pub fn hover(&self) -> f32 {
        self.hover
    }

    /// Decoded texture dimensions in pixels; zero until loaded.
    pub fn texture_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}
