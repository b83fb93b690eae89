use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// An RGBA color with components in [0, 1].
///
/// Accepted TOML spellings: a hex string (`"#RRGGBB"` or `"#RRGGBBAA"`) or a
/// four-element float array (`[0.1, 0.1, 0.1, 0.85]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// The dock configuration surface.
///
/// Every field has a default matching the shipped dock appearance, so an
/// empty (or missing) config file yields a usable dock with no apps pinned.
/// Values are *structurally* validated here; out-of-range sizes are left for
/// the engine to clamp so that a hand-edited config never hard-fails the
/// dock.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DockConfig {
    #[serde(default = "default_icon_size")]
    pub icon_size: i32,
    #[serde(default = "default_spacing")]
    pub spacing: i32,
    #[serde(default = "default_margin")]
    pub margin: i32,
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f32,
    #[serde(
        default = "default_bevel_color",
        deserialize_with = "deserialize_color",
        serialize_with = "serialize_color"
    )]
    pub bevel_color: Color,
    #[serde(
        default = "default_background_color",
        deserialize_with = "deserialize_color",
        serialize_with = "serialize_color"
    )]
    pub background_color: Color,
    /// Desktop-entry identifiers, in pin order. The last entry renders at
    /// the top of the dock.
    #[serde(default)]
    pub apps: Vec<String>,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            icon_size: default_icon_size(),
            spacing: default_spacing(),
            margin: default_margin(),
            corner_radius: default_corner_radius(),
            bevel_color: default_bevel_color(),
            background_color: default_background_color(),
            apps: Vec::new(),
        }
    }
}

fn default_icon_size() -> i32 {
    64
}

fn default_spacing() -> i32 {
    8
}

fn default_margin() -> i32 {
    8
}

fn default_corner_radius() -> f32 {
    12.0
}

fn default_bevel_color() -> Color {
    Color::new(0.8, 0.7, 0.5, 0.6)
}

fn default_background_color() -> Color {
    Color::new(0.1, 0.1, 0.1, 0.85)
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    struct Visitor;
    impl<'de> de::Visitor<'de> for Visitor {
        type Value = Color;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a '#RRGGBB[AA]' hex string or a [r, g, b, a] float array")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            parse_hex_color(v).map_err(E::custom)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut components = [0.0f32; 4];
            for (index, slot) in components.iter_mut().enumerate() {
                *slot = seq
                    .next_element::<f32>()?
                    .ok_or_else(|| de::Error::custom("color array must have four components"))?;
                if !(0.0..=1.0).contains(slot) {
                    return Err(de::Error::custom(format!(
                        "color component {index} must be within [0, 1], got {slot}"
                    )));
                }
            }
            if seq.next_element::<f32>()?.is_some() {
                return Err(de::Error::custom("color array must have four components"));
            }
            let [r, g, b, a] = components;
            Ok(Color::new(r, g, b, a))
        }
    }

    deserializer.deserialize_any(Visitor)
}

fn serialize_color<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    color.to_array().serialize(serializer)
}

fn parse_hex_color(raw: &str) -> Result<Color, String> {
    let digits = raw
        .strip_prefix('#')
        .ok_or_else(|| format!("hex color '{raw}' must start with '#'"))?;
    if digits.len() != 6 && digits.len() != 8 {
        return Err(format!(
            "hex color '{raw}' must have six or eight digits after '#'"
        ));
    }

    let component = |range: std::ops::Range<usize>| -> Result<f32, String> {
        u8::from_str_radix(&digits[range], 16)
            .map(|value| f32::from(value) / 255.0)
            .map_err(|err| format!("invalid hex color '{raw}': {err}"))
    };

    let r = component(0..2)?;
    let g = component(2..4)?;
    let b = component(4..6)?;
    let a = if digits.len() == 8 {
        component(6..8)?
    } else {
        1.0
    };
    Ok(Color::new(r, g, b, a))
}

impl DockConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let raw: DockConfig = toml::from_str(input)?;
        raw.validate()?;
        Ok(raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for app in &self.apps {
            if app.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "apps must not contain empty identifiers".into(),
                ));
            }
            if app.chars().any(char::is_whitespace) {
                return Err(ConfigError::Invalid(format!(
                    "app identifier '{app}' must not contain whitespace"
                )));
            }
        }

        for (label, color) in [
            ("bevel_color", self.bevel_color),
            ("background_color", self.background_color),
        ] {
            for component in color.to_array() {
                if !(0.0..=1.0).contains(&component) || component.is_nan() {
                    return Err(ConfigError::Invalid(format!(
                        "{label} components must be within [0, 1]"
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
icon_size = 48
spacing = 6
margin = 10
corner_radius = 8.0
bevel_color = "#CCB38099"
background_color = [0.1, 0.1, 0.1, 0.85]
apps = ["firefox", "org.gnome.Nautilus", "kitty"]
"##;

    #[test]
    fn parses_sample_config() {
        let config = DockConfig::from_toml_str(SAMPLE).expect("parse config");
        assert_eq!(config.icon_size, 48);
        assert_eq!(config.spacing, 6);
        assert_eq!(config.margin, 10);
        assert_eq!(config.apps, ["firefox", "org.gnome.Nautilus", "kitty"]);
        assert!((config.bevel_color.r - 0.8).abs() < 0.005);
        assert!((config.bevel_color.a - 0.6).abs() < 0.005);
        assert_eq!(config.background_color.to_array(), [0.1, 0.1, 0.1, 0.85]);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = DockConfig::from_toml_str("").expect("parse empty config");
        assert_eq!(config.icon_size, 64);
        assert_eq!(config.spacing, 8);
        assert_eq!(config.margin, 8);
        assert_eq!(config.corner_radius, 12.0);
        assert!(config.apps.is_empty());
    }

    #[test]
    fn six_digit_hex_gets_opaque_alpha() {
        let config = DockConfig::from_toml_str(r##"bevel_color = "#FF0000""##).unwrap();
        assert_eq!(config.bevel_color.a, 1.0);
        assert_eq!(config.bevel_color.r, 1.0);
    }

    #[test]
    fn rejects_malformed_hex_color() {
        let err = DockConfig::from_toml_str(r##"bevel_color = "CCB380""##).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = DockConfig::from_toml_str(r##"bevel_color = "#CCB3""##).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_out_of_range_color_array() {
        let err = DockConfig::from_toml_str("background_color = [0.1, 0.1, 1.5, 1.0]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_wrong_arity_color_array() {
        let err = DockConfig::from_toml_str("background_color = [0.1, 0.1, 0.1]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_empty_app_identifier() {
        let err = DockConfig::from_toml_str(r#"apps = ["firefox", " "]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_app_identifier_with_whitespace() {
        let err = DockConfig::from_toml_str(r#"apps = ["two words"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn negative_sizes_survive_parsing_for_engine_clamping() {
        let config = DockConfig::from_toml_str("icon_size = -3\nspacing = -1").unwrap();
        assert_eq!(config.icon_size, -3);
        assert_eq!(config.spacing, -1);
    }
}
