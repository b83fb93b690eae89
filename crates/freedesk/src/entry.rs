//! Desktop-entry resolution.
//!
//! Looks up `<app_id>.desktop` across the standard application directories
//! and extracts the handful of keys the dock cares about: `Name`, `Exec`
//! (with `%f`/`%u`-style field codes stripped), and `Icon`. Only the
//! `[Desktop Entry]` group is read; actions and localized keys are ignored.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories_next::BaseDirs;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("no desktop entry found for '{0}'")]
    NotFound(String),
    #[error("desktop entry for '{0}' has no Exec key")]
    MissingExec(String),
    #[error("failed to read desktop entry at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// An application resolved from its desktop entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedApp {
    pub app_id: String,
    pub name: String,
    /// Launch command with field codes (`%f`, `%u`, ...) removed.
    pub exec: String,
    /// Raw `Icon` value; a theme name or an absolute path. Empty when the
    /// entry declares no icon.
    pub icon_name: String,
}

/// Ordered search roots for `.desktop` files.
#[derive(Debug, Clone)]
pub struct DesktopEntries {
    search_dirs: Vec<PathBuf>,
}

impl DesktopEntries {
    /// System directories plus the user's `~/.local/share/applications`.
    pub fn system() -> Self {
        let mut search_dirs = vec![
            PathBuf::from("/usr/share/applications"),
            PathBuf::from("/usr/local/share/applications"),
        ];
        if let Some(base) = BaseDirs::new() {
            search_dirs.push(base.home_dir().join(".local/share/applications"));
        }
        Self { search_dirs }
    }

    /// Restricts the search to explicit directories. Used by tests and by
    /// sandboxed deployments.
    pub fn with_dirs(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// Resolves `app_id` to its desktop entry, first match wins.
    pub fn resolve(&self, app_id: &str) -> Result<ResolvedApp, EntryError> {
        let file_name = format!("{app_id}.desktop");
        let path = self
            .search_dirs
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| EntryError::NotFound(app_id.to_string()))?;

        debug!(app = %app_id, path = %path.display(), "resolving desktop entry");
        let contents = fs::read_to_string(&path).map_err(|source| EntryError::Io {
            path: path.clone(),
            source,
        })?;
        parse_desktop_entry(app_id, &contents)
    }
}

/// Resolves `app_id` against the system search directories.
pub fn resolve_entry(app_id: &str) -> Result<ResolvedApp, EntryError> {
    DesktopEntries::system().resolve(app_id)
}

fn parse_desktop_entry(app_id: &str, contents: &str) -> Result<ResolvedApp, EntryError> {
    let mut name = String::new();
    let mut exec = String::new();
    let mut icon_name = String::new();
    let mut in_entry_group = false;

    for raw_line in contents.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') {
            in_entry_group = line == "[Desktop Entry]";
            continue;
        }
        if !in_entry_group {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim_end();
        let value = value.trim_start();

        match key {
            "Name" => name = value.to_string(),
            "Exec" => exec = strip_field_codes(value),
            "Icon" => icon_name = value.to_string(),
            _ => {}
        }
    }

    if exec.is_empty() {
        return Err(EntryError::MissingExec(app_id.to_string()));
    }

    Ok(ResolvedApp {
        app_id: app_id.to_string(),
        name,
        exec,
        icon_name,
    })
}

/// Removes `%X` field codes from an Exec line and collapses the whitespace
/// they leave behind. `%%` is the escape for a literal percent sign.
fn strip_field_codes(exec: &str) -> String {
    let mut output = String::with_capacity(exec.len());
    let mut chars = exec.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            output.push(ch);
            continue;
        }
        match chars.next() {
            Some('%') => output.push('%'),
            Some(_) | None => {}
        }
    }
    output.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_entry(dir: &Path, app_id: &str, contents: &str) {
        fs::write(dir.join(format!("{app_id}.desktop")), contents).expect("write desktop entry");
    }

    const FIREFOX: &str = r#"
[Desktop Entry]
Name=Firefox
Exec=firefox %u
Icon=firefox
Type=Application

[Desktop Action new-window]
Name=New Window
Exec=firefox --new-window %u
"#;

    #[test]
    fn resolves_basic_entry() {
        let dir = TempDir::new().unwrap();
        write_entry(dir.path(), "firefox", FIREFOX);

        let entries = DesktopEntries::with_dirs(vec![dir.path().to_path_buf()]);
        let app = entries.resolve("firefox").unwrap();
        assert_eq!(app.name, "Firefox");
        assert_eq!(app.exec, "firefox");
        assert_eq!(app.icon_name, "firefox");
    }

    #[test]
    fn ignores_keys_outside_desktop_entry_group() {
        let dir = TempDir::new().unwrap();
        write_entry(dir.path(), "firefox", FIREFOX);

        let entries = DesktopEntries::with_dirs(vec![dir.path().to_path_buf()]);
        let app = entries.resolve("firefox").unwrap();
        // The [Desktop Action] Exec must not overwrite the entry's Exec.
        assert_eq!(app.exec, "firefox");
    }

    #[test]
    fn strips_field_codes_from_exec() {
        let dir = TempDir::new().unwrap();
        write_entry(
            dir.path(),
            "viewer",
            "[Desktop Entry]\nName=Viewer\nExec=viewer --open %F --class %c\n",
        );

        let entries = DesktopEntries::with_dirs(vec![dir.path().to_path_buf()]);
        let app = entries.resolve("viewer").unwrap();
        assert_eq!(app.exec, "viewer --open --class");
    }

    #[test]
    fn preserves_escaped_percent() {
        assert_eq!(strip_field_codes("tool --ratio 50%% %u"), "tool --ratio 50%");
    }

    #[test]
    fn missing_exec_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_entry(dir.path(), "broken", "[Desktop Entry]\nName=Broken\n");

        let entries = DesktopEntries::with_dirs(vec![dir.path().to_path_buf()]);
        let err = entries.resolve("broken").unwrap_err();
        assert!(matches!(err, EntryError::MissingExec(_)));
    }

    #[test]
    fn unknown_app_is_not_found() {
        let dir = TempDir::new().unwrap();
        let entries = DesktopEntries::with_dirs(vec![dir.path().to_path_buf()]);
        let err = entries.resolve("ghost").unwrap_err();
        assert!(matches!(err, EntryError::NotFound(_)));
    }

    #[test]
    fn first_matching_directory_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_entry(
            first.path(),
            "term",
            "[Desktop Entry]\nName=First\nExec=first-term\n",
        );
        write_entry(
            second.path(),
            "term",
            "[Desktop Entry]\nName=Second\nExec=second-term\n",
        );

        let entries = DesktopEntries::with_dirs(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        assert_eq!(entries.resolve("term").unwrap().exec, "first-term");
    }
}
