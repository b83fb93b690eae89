/// Validated dock appearance settings.
///
/// The configuration loader hands these over as plain scalars; construction
/// through [`DockSettings::clamped`] guarantees the values the layout and
/// renderer see are usable even when the config file carried nonsense.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockSettings {
    /// Icon edge length in output pixels.
    pub icon_size: i32,
    /// Vertical gap between adjacent icons.
    pub spacing: i32,
    /// Padding between the dock edge and its icons, and between the dock and
    /// the output edge.
    pub margin: i32,
    /// Rounded-corner radius used by both shader passes.
    pub corner_radius: f32,
    /// RGBA bevel tint for the icon shader.
    pub bevel_color: [f32; 4],
    /// RGBA fill for the background shader.
    pub background_color: [f32; 4],
}

impl DockSettings {
    /// Builds settings from raw configured values, replacing invalid sizes
    /// with the stock defaults (icon size 64, spacing/margin 8, radius 12).
    pub fn clamped(
        icon_size: i32,
        spacing: i32,
        margin: i32,
        corner_radius: f32,
        bevel_color: [f32; 4],
        background_color: [f32; 4],
    ) -> Self {
        Self {
            icon_size: if icon_size <= 0 { 64 } else { icon_size },
            spacing: if spacing < 0 { 8 } else { spacing },
            margin: if margin < 0 { 8 } else { margin },
            corner_radius: if corner_radius < 0.0 {
                12.0
            } else {
                corner_radius
            },
            bevel_color,
            background_color,
        }
    }

    /// Distance from one icon's top edge to the next.
    pub fn icon_step(&self) -> i32 {
        self.icon_size + self.spacing
    }
}

impl Default for DockSettings {
    fn default() -> Self {
        Self {
            icon_size: 64,
            spacing: 8,
            margin: 8,
            corner_radius: 12.0,
            bevel_color: [0.8, 0.7, 0.5, 0.6],
            background_color: [0.1, 0.1, 0.1, 0.85],
        }
    }
}
