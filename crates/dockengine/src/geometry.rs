//! Dock layout.
//!
//! The dock is a single vertical column anchored to the output's left edge
//! and centered vertically. Geometry is a pure function of the icon count,
//! the settings, and the output rectangle; callers recompute it whenever
//! either input changes so layout never lags configuration.

use crate::settings::DockSettings;

/// Axis-aligned rectangle in output coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Computes the dock's bounding rectangle for `icon_count` icons on the
/// given output. An empty dock is laid out as if it held one icon so the
/// rectangle never degenerates.
pub fn dock_geometry(icon_count: usize, settings: &DockSettings, output: Rect) -> Rect {
    let count = icon_count.max(1) as i32;
    let width = settings.icon_size + settings.margin * 2;
    let height =
        count * settings.icon_size + (count - 1) * settings.spacing + settings.margin * 2;
    Rect {
        x: output.x + settings.margin,
        y: output.y + (output.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTPUT: Rect = Rect::new(0, 0, 1920, 1080);

    fn settings() -> DockSettings {
        DockSettings::clamped(64, 8, 8, 12.0, [0.0; 4], [0.0; 4])
    }

    #[test]
    fn three_icons_match_expected_size() {
        let dock = dock_geometry(3, &settings(), OUTPUT);
        assert_eq!(dock.width, 80);
        assert_eq!(dock.height, 3 * 64 + 2 * 8 + 16);
        assert_eq!(dock.height, 224);
    }

    #[test]
    fn size_formula_holds_for_all_counts() {
        let settings = settings();
        for count in 0..12usize {
            let dock = dock_geometry(count, &settings, OUTPUT);
            let n = count.max(1) as i32;
            assert_eq!(dock.width, settings.icon_size + 2 * settings.margin);
            assert_eq!(
                dock.height,
                n * settings.icon_size + (n - 1) * settings.spacing + 2 * settings.margin
            );
        }
    }

    #[test]
    fn vertically_centered_on_output() {
        let settings = settings();
        for count in [1usize, 2, 5, 9] {
            let dock = dock_geometry(count, &settings, OUTPUT);
            // Integer division may leave the center off by one half-pixel.
            let dock_center = dock.y + dock.height / 2;
            let output_center = OUTPUT.y + OUTPUT.height / 2;
            assert!((dock_center - output_center).abs() <= 1, "count {count}");
        }
    }

    #[test]
    fn anchored_to_left_edge_with_margin() {
        let output = Rect::new(200, 100, 1280, 720);
        let dock = dock_geometry(4, &settings(), output);
        assert_eq!(dock.x, output.x + 8);
        assert!(dock.y > output.y);
    }

    #[test]
    fn empty_dock_is_laid_out_as_one_icon() {
        let settings = settings();
        assert_eq!(
            dock_geometry(0, &settings, OUTPUT),
            dock_geometry(1, &settings, OUTPUT)
        );
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(10, 10, 20, 20);
        assert!(rect.contains(10, 10));
        assert!(rect.contains(29, 29));
        assert!(!rect.contains(30, 10));
        assert!(!rect.contains(10, 30));
        assert!(!rect.contains(9, 15));
    }
}
