//! Icon theme lookup.
//!
//! The dock only renders PNG icons, so the search is a fixed ladder of
//! theme directories, size buckets, and categories rather than a full icon
//! theme spec implementation. Largest sizes are probed first; the renderer
//! downscales on the GPU.

use std::path::{Path, PathBuf};

use tracing::debug;

const THEME_DIRS: [&str; 4] = [
    "/usr/share/icons/hicolor",
    "/usr/share/icons/Adwaita",
    "/usr/share/icons/breeze",
    "/usr/share/icons/Papirus",
];

const SIZE_BUCKETS: [&str; 5] = ["256x256", "128x128", "96x96", "64x64", "48x48"];

const CATEGORIES: [&str; 2] = ["apps", "applications"];

const PIXMAP_DIR: &str = "/usr/share/pixmaps";

/// Ordered icon search roots.
#[derive(Debug, Clone)]
pub struct IconLocator {
    theme_dirs: Vec<PathBuf>,
    pixmap_dir: PathBuf,
}

impl IconLocator {
    /// The standard system theme directories and pixmap fallback.
    pub fn system() -> Self {
        Self {
            theme_dirs: THEME_DIRS.iter().map(PathBuf::from).collect(),
            pixmap_dir: PathBuf::from(PIXMAP_DIR),
        }
    }

    /// Restricts the search to explicit roots. Used by tests.
    pub fn with_roots(theme_dirs: Vec<PathBuf>, pixmap_dir: PathBuf) -> Self {
        Self {
            theme_dirs,
            pixmap_dir,
        }
    }

    /// Finds a PNG for `icon_name`, or `None` when no theme provides one.
    ///
    /// An `icon_name` that is already a path to an existing file is returned
    /// unchanged; desktop entries are allowed to carry absolute icon paths.
    pub fn locate(&self, icon_name: &str) -> Option<PathBuf> {
        if icon_name.is_empty() {
            return None;
        }

        if icon_name.contains('/') {
            let direct = Path::new(icon_name);
            if direct.is_file() {
                return Some(direct.to_path_buf());
            }
        }

        let file_name = format!("{icon_name}.png");
        for theme in &self.theme_dirs {
            for size in SIZE_BUCKETS {
                for category in CATEGORIES {
                    let candidate = theme.join(size).join(category).join(&file_name);
                    if candidate.is_file() {
                        debug!(icon = %icon_name, path = %candidate.display(), "found themed icon");
                        return Some(candidate);
                    }
                }
            }
        }

        let pixmap = self.pixmap_dir.join(&file_name);
        if pixmap.is_file() {
            debug!(icon = %icon_name, path = %pixmap.display(), "found pixmap icon");
            return Some(pixmap);
        }

        None
    }
}

/// Locates `icon_name` under the system theme directories.
pub fn find_icon(icon_name: &str) -> Option<PathBuf> {
    IconLocator::system().locate(icon_name)
}
