//! The engine facade the host calls into.

use tracing::debug;

use crate::clock::{MonotonicClock, TimeSource};
use crate::geometry::{dock_geometry, Rect};
use crate::gl::GpuResourcePool;
use crate::hit;
use crate::icon::DockIcon;
use crate::input::{self, Launcher, PointerButton};
use crate::settings::DockSettings;

/// The dock rendering and interaction engine.
///
/// One instance per output. The host owns the GL context and the event loop;
/// it calls [`set_output`](Self::set_output) when the output is configured
/// or resized, [`render`](Self::render) from its per-frame overlay hook,
/// [`pointer_button`](Self::pointer_button) from its pointer signal, and
/// [`destroy`](Self::destroy) before dropping the engine.
pub struct DockEngine {
    pub(crate) settings: DockSettings,
    pub(crate) icons: Vec<DockIcon>,
    output: Rect,
    geometry: Rect,
    pub(crate) pool: GpuResourcePool,
    pub(crate) clock: Box<dyn TimeSource>,
    launcher: Box<dyn Launcher>,
}

impl DockEngine {
    /// Builds an engine for the given settings and resolved icons. The time
    /// origin for all shader animation is captured here.
    pub fn new(settings: DockSettings, icons: Vec<DockIcon>, launcher: Box<dyn Launcher>) -> Self {
        let geometry = dock_geometry(icons.len(), &settings, Rect::default());
        debug!(icons = icons.len(), "dock engine created");
        Self {
            settings,
            icons,
            output: Rect::default(),
            geometry,
            pool: GpuResourcePool::new(),
            clock: Box::new(MonotonicClock::new()),
            launcher,
        }
    }

    /// Replaces the animation clock; deterministic shader time for tests
    /// and still captures.
    pub fn with_clock(mut self, clock: Box<dyn TimeSource>) -> Self {
        self.clock = clock;
        self
    }

    /// Updates the output rectangle and synchronously recomputes the dock
    /// geometry. Call from the host's output-configuration signal.
    pub fn set_output(&mut self, output: Rect) {
        self.output = output;
        self.geometry = dock_geometry(self.icons.len(), &self.settings, output);
        debug!(
            x = self.geometry.x,
            y = self.geometry.y,
            width = self.geometry.width,
            height = self.geometry.height,
            "dock geometry updated"
        );
    }

    /// The dock's current bounding rectangle in output coordinates; the
    /// region the host should damage for animation redraws.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn settings(&self) -> &DockSettings {
        &self.settings
    }

    pub fn icons(&self) -> &[DockIcon] {
        &self.icons
    }

    /// Storage index of the icon under the pointer, if any.
    pub fn icon_at(&self, x: f64, y: f64) -> Option<usize> {
        hit::icon_at(x, y, self.geometry, &self.settings, self.icons.len())
    }

    /// Feeds a pointer button event through the dispatcher. Only a left
    /// button release over an icon launches anything; the launched icon's
    /// storage index is returned for the host's benefit.
    pub fn pointer_button(&self, event: PointerButton, cursor: (f64, f64)) -> Option<usize> {
        input::dispatch(
            event,
            cursor,
            self.geometry,
            &self.settings,
            &self.icons,
            self.launcher.as_ref(),
        )
    }

    /// Releases every GL resource the engine created. Safe to call more
    /// than once.
    ///
    /// # Safety
    ///
    /// The host's GL context must be current, and it must be the context
    /// the engine rendered with.
    pub unsafe fn destroy(&mut self, gl: &glow::Context) {
        self.pool.destroy(gl, &mut self.icons);
        debug!("dock engine resources destroyed");
    }
}
