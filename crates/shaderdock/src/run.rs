use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use dockconfig::DockConfig;
use dockengine::{dock_geometry, DockIcon, DockSettings, Rect};
use freedesk::{DesktopEntries, IconLocator};
use tracing_subscriber::EnvFilter;

use crate::cli::CheckArgs;
use crate::paths::AppPaths;

pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Validates the configuration, resolves every configured application, and
/// reports the dock layout the engine would produce.
pub fn check(args: CheckArgs) -> Result<()> {
    let paths = AppPaths::discover()?;
    let config = load_config(args.config.as_deref(), &paths)?;
    let (width, height) = parse_output_size(&args.output)?;
    let settings = settings_from_config(&config);

    let entries = DesktopEntries::system();
    let locator = IconLocator::system();

    let mut icons = Vec::new();
    println!("Configured applications:");
    if config.apps.is_empty() {
        println!("  (none)");
    }
    for app in &config.apps {
        match entries.resolve(app) {
            Ok(resolved) => {
                let icon_path = locator.locate(&resolved.icon_name);
                let status = if icon_path.is_some() { "ok" } else { "no-icon" };
                let icon_display = icon_path
                    .as_deref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "(none)".into());
                println!(
                    "  {status:<9} {app:<32} exec='{}' icon={icon_display}",
                    resolved.exec
                );
                if let Some(icon_path) = icon_path {
                    icons.push(DockIcon::new(
                        resolved.app_id,
                        resolved.name,
                        resolved.exec,
                        Some(icon_path),
                    ));
                }
            }
            Err(err) => {
                tracing::debug!(app = %app, error = %err, "application did not resolve");
                println!("  {:<9} {app}", "no-entry");
            }
        }
    }

    let dock = dock_geometry(icons.len(), &settings, Rect::new(0, 0, width, height));
    println!("Dock layout on a {width}x{height} output:");
    println!(
        "  icons:    {} of {} configured",
        icons.len(),
        config.apps.len()
    );
    println!(
        "  geometry: {}x{} at ({}, {})",
        dock.width, dock.height, dock.x, dock.y
    );
    Ok(())
}

/// Prints the resolved configuration locations.
pub fn where_paths() -> Result<()> {
    let paths = AppPaths::discover()?;
    println!("Configuration directory: {}", paths.config_dir().display());
    println!("Configuration file:      {}", paths.config_file().display());
    Ok(())
}

/// Resolves `app_id` the way a dock click would and launches it detached.
pub fn launch(app_id: &str) -> Result<()> {
    let entry = DesktopEntries::system()
        .resolve(app_id)
        .with_context(|| format!("cannot launch '{app_id}'"))?;
    tracing::info!(app = %app_id, exec = %entry.exec, "launching application");
    freedesk::launch_detached(&entry.exec);
    Ok(())
}

fn load_config(explicit: Option<&Path>, paths: &AppPaths) -> Result<DockConfig> {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| paths.config_file());

    if !path.exists() {
        tracing::info!(path = %path.display(), "no configuration file; using defaults");
        return Ok(DockConfig::default());
    }

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read configuration at {}", path.display()))?;
    let config = DockConfig::from_toml_str(&contents)
        .with_context(|| format!("invalid configuration at {}", path.display()))?;
    Ok(config)
}

fn settings_from_config(config: &DockConfig) -> DockSettings {
    DockSettings::clamped(
        config.icon_size,
        config.spacing,
        config.margin,
        config.corner_radius,
        config.bevel_color.to_array(),
        config.background_color.to_array(),
    )
}

fn parse_output_size(value: &str) -> Result<(i32, i32)> {
    let (raw_width, raw_height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("output size '{value}' must look like 1920x1080"))?;
    let width: i32 = raw_width
        .trim()
        .parse()
        .with_context(|| format!("invalid output width in '{value}'"))?;
    let height: i32 = raw_height
        .trim()
        .parse()
        .with_context(|| format!("invalid output height in '{value}'"))?;
    if width <= 0 || height <= 0 {
        anyhow::bail!("output size '{value}' must be positive");
    }
    Ok((width, height))
}
