//! Pointer hit-testing.
//!
//! Maps an output-space coordinate to the *storage* index of the icon under
//! it. Icons are stored in configuration order but rendered top-to-bottom in
//! reverse, so the topmost slot belongs to the last configured icon; the
//! `count - 1 - slot` reversal below is a contract shared with the render
//! pass and must match it exactly.

use crate::geometry::Rect;
use crate::settings::DockSettings;

/// Returns the storage index of the icon at `(x, y)`, or `None` when the
/// point is outside the dock, in the gap between icons, or below the last
/// occupied slot.
pub fn icon_at(
    x: f64,
    y: f64,
    dock: Rect,
    settings: &DockSettings,
    icon_count: usize,
) -> Option<usize> {
    let x = x.floor() as i32;
    let y = y.floor() as i32;
    if !dock.contains(x, y) {
        return None;
    }

    let local_y = y - dock.y - settings.margin;
    if local_y < 0 {
        return None;
    }

    let step = settings.icon_step();
    let slot = (local_y / step) as usize;
    let offset = local_y % step;
    if offset >= settings.icon_size || slot >= icon_count {
        return None;
    }

    Some(icon_count - 1 - slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::dock_geometry;

    const OUTPUT: Rect = Rect::new(0, 0, 1920, 1080);

    fn settings() -> DockSettings {
        DockSettings::clamped(64, 8, 8, 12.0, [0.0; 4], [0.0; 4])
    }

    /// Center of the rendered rectangle for the icon at `storage_index`.
    fn icon_center(storage_index: usize, count: usize, settings: &DockSettings) -> (f64, f64) {
        let dock = dock_geometry(count, settings, OUTPUT);
        let slot = count - 1 - storage_index;
        let x = dock.x + settings.margin + settings.icon_size / 2;
        let y = dock.y + settings.margin + slot as i32 * settings.icon_step()
            + settings.icon_size / 2;
        (f64::from(x), f64::from(y))
    }

    #[test]
    fn hit_test_inverts_layout_for_every_icon() {
        let settings = settings();
        for count in 1..=8usize {
            let dock = dock_geometry(count, &settings, OUTPUT);
            for index in 0..count {
                let (x, y) = icon_center(index, count, &settings);
                assert_eq!(
                    icon_at(x, y, dock, &settings, count),
                    Some(index),
                    "count {count} index {index}"
                );
            }
        }
    }

    #[test]
    fn top_slot_resolves_to_last_configured_icon() {
        let settings = settings();
        let dock = dock_geometry(3, &settings, OUTPUT);
        // First pixel row of the topmost icon.
        let x = f64::from(dock.x + settings.margin);
        let y = f64::from(dock.y + settings.margin);
        assert_eq!(icon_at(x, y, dock, &settings, 3), Some(2));
    }

    #[test]
    fn coordinates_outside_dock_miss() {
        let settings = settings();
        let dock = dock_geometry(3, &settings, OUTPUT);
        let inside_y = f64::from(dock.y + dock.height / 2);
        assert_eq!(
            icon_at(f64::from(dock.x - 1), inside_y, dock, &settings, 3),
            None
        );
        assert_eq!(
            icon_at(f64::from(dock.x + dock.width), inside_y, dock, &settings, 3),
            None
        );
        assert_eq!(
            icon_at(f64::from(dock.x), f64::from(dock.y - 1), dock, &settings, 3),
            None
        );
    }

    #[test]
    fn gaps_between_icons_miss() {
        let settings = settings();
        for count in 2..=5usize {
            let dock = dock_geometry(count, &settings, OUTPUT);
            let x = f64::from(dock.x + dock.width / 2);
            for slot in 0..count - 1 {
                // First pixel row past the icon, inside the spacing band.
                let y = dock.y
                    + settings.margin
                    + slot as i32 * settings.icon_step()
                    + settings.icon_size;
                assert_eq!(
                    icon_at(x, f64::from(y), dock, &settings, count),
                    None,
                    "count {count} slot {slot}"
                );
            }
        }
    }

    #[test]
    fn top_margin_band_misses() {
        let settings = settings();
        let dock = dock_geometry(3, &settings, OUTPUT);
        let x = f64::from(dock.x + dock.width / 2);
        for dy in 0..settings.margin {
            assert_eq!(icon_at(x, f64::from(dock.y + dy), dock, &settings, 3), None);
        }
    }

    #[test]
    fn empty_dock_never_hits() {
        let settings = settings();
        let dock = dock_geometry(0, &settings, OUTPUT);
        let x = f64::from(dock.x + dock.width / 2);
        let y = f64::from(dock.y + dock.height / 2);
        assert_eq!(icon_at(x, y, dock, &settings, 0), None);
    }
}
