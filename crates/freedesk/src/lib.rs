//! Freedesktop lookups for the shader dock: desktop-entry resolution, icon
//! theme search, and detached process launch.
//!
//! Everything here is thin, synchronous filesystem plumbing. Failures are
//! ordinary `Result`s (or logged no-ops for launching); callers decide
//! whether a missing entry means "skip this dock icon" or "report to the
//! user".

mod entry;
mod icons;
mod launch;

pub use entry::{resolve_entry, DesktopEntries, EntryError, ResolvedApp};
pub use icons::{find_icon, IconLocator};
pub use launch::launch_detached;
