//! Color value normalization.
//!
//! Design-tool exports encode the same color half a dozen ways: hex strings
//! (`#657e79`, `#fff`, `#657e79cc`), CSS function strings (`rgb()`,
//! `rgba()`, `hsl()`, `hsla()`), 0–255 integer channel objects, Figma's
//! normalized 0–1 float channels, and bare `[r, g, b]` tuples. This module
//! converts all of them to one canonical [`ColorValue`].
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use tokenloom::color::{convert_color, rgb_to_hex};
//!
//! // Figma float convention: channels ≤ 1 are normalized sRGB
//! let color = convert_color(&json!({ "r": 0.5, "g": 0.5, "b": 0.5, "a": 0.8 })).unwrap();
//! assert_eq!(color.hex, "#808080");
//! assert_eq!(color.opacity, 0.8);
//!
//! assert_eq!(rgb_to_hex(255, 255, 255), "#ffffff");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Integer RGB channels, always 0–255 regardless of source encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbChannels {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Canonical color payload: lowercase hex, integer channels, opacity in
/// `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    pub hex: String,
    pub rgb: RgbChannels,
    pub opacity: f64,
}

impl ColorValue {
    /// Builds a color from 0–255 channels, deriving the hex form.
    pub fn from_rgb8(r: u8, g: u8, b: u8, opacity: f64) -> Self {
        ColorValue {
            hex: rgb_to_hex(r, g, b),
            rgb: RgbChannels { r, g, b },
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    /// Sentinel for a color leaf whose value could not be resolved.
    ///
    /// The empty hex lets editors render "no value defined" while keeping
    /// the token in the result for manual repair.
    pub fn unset() -> Self {
        ColorValue {
            hex: String::new(),
            rgb: RgbChannels { r: 0, g: 0, b: 0 },
            opacity: 1.0,
        }
    }

    /// True for the [`ColorValue::unset`] sentinel.
    pub fn is_unset(&self) -> bool {
        self.hex.is_empty()
    }
}

/// Converts 0–255 channels to a lowercase `#rrggbb` string, zero-padding
/// each channel to two digits.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Normalizes any recognized color value shape to a [`ColorValue`].
///
/// Accepted shapes, in resolution order:
///
/// - strings: hex (`#rgb`/`#rrggbb`/`#rrggbbaa`), `rgb()`/`rgba()`,
///   `hsl()`/`hsla()`
/// - objects with a literal `hex` field (the explicit hex always wins)
///   over derived channel values
/// - `{r, g, b, a?}` objects: any channel > 1 means 0–255 integers, all
///   channels ≤ 1 means normalized sRGB floats (Figma convention)
/// - `{components: [r, g, b, a?]}` objects, same channel convention
/// - `[r, g, b]` / `[r, g, b, a]` tuples
///
/// Anything else is an `Err` with a human-readable reason; the parser
/// records it as a warning and keeps the leaf with the unset sentinel.
pub fn convert_color(value: &Value) -> Result<ColorValue, String> {
    match value {
        Value::String(s) => parse_color_string(s),
        Value::Object(map) => convert_color_object(map),
        Value::Array(seq) => convert_channel_list(seq, None),
        other => Err(format!("unrecognized color value: {}", other)),
    }
}

/// Parses a color from its string form.
fn parse_color_string(s: &str) -> Result<ColorValue, String> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(inner) = function_args(s, "rgba").or_else(|| function_args(s, "rgb")) {
        return parse_rgb_function(inner);
    }
    if let Some(inner) = function_args(s, "hsla").or_else(|| function_args(s, "hsl")) {
        return parse_hsl_function(inner);
    }

    Err(format!("unrecognized color string: '{}'", s))
}

/// Extracts the argument list of `name(...)`, or `None` when `s` is not
/// that function call.
fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Parses a hex color code (without the `#` prefix).
///
/// 3-digit codes expand per CSS shorthand rules; 8-digit codes carry the
/// alpha channel in the last two digits.
fn parse_hex(hex: &str) -> Result<ColorValue, String> {
    // Byte slicing below requires single-byte characters.
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: #{}", hex));
    }
    let channel = |range: &str| -> Result<u8, String> {
        u8::from_str_radix(range, 16).map_err(|_| format!("invalid hex color: #{}", hex))
    };

    match hex.len() {
        // #rgb -> #rrggbb
        3 => {
            let r = channel(&hex[0..1])? * 17;
            let g = channel(&hex[1..2])? * 17;
            let b = channel(&hex[2..3])? * 17;
            Ok(ColorValue::from_rgb8(r, g, b, 1.0))
        }
        // #rrggbb
        6 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            Ok(ColorValue::from_rgb8(r, g, b, 1.0))
        }
        // #rrggbbaa
        8 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            let a = channel(&hex[6..8])? as f64 / 255.0;
            Ok(ColorValue::from_rgb8(r, g, b, a))
        }
        _ => Err(format!(
            "invalid hex color: #{} (must be 3, 6, or 8 digits)",
            hex
        )),
    }
}

/// Parses the arguments of an `rgb()`/`rgba()` function string.
///
/// Channels follow CSS semantics (0–255, `%` allowed); a fourth argument
/// is the alpha in `[0, 1]`.
fn parse_rgb_function(inner: &str) -> Result<ColorValue, String> {
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(format!(
            "rgb() requires 3 or 4 components, got {}",
            parts.len()
        ));
    }

    let mut channels = [0u8; 3];
    for (i, part) in parts.iter().take(3).enumerate() {
        let value = if let Some(pct) = part.strip_suffix('%') {
            parse_component(pct)? / 100.0 * 255.0
        } else {
            parse_component(part)?
        };
        channels[i] = value.round().clamp(0.0, 255.0) as u8;
    }

    let opacity = match parts.get(3) {
        Some(part) => parse_alpha(part)?,
        None => 1.0,
    };
    Ok(ColorValue::from_rgb8(
        channels[0],
        channels[1],
        channels[2],
        opacity,
    ))
}

/// Parses the arguments of an `hsl()`/`hsla()` function string and
/// converts to RGB.
fn parse_hsl_function(inner: &str) -> Result<ColorValue, String> {
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(format!(
            "hsl() requires 3 or 4 components, got {}",
            parts.len()
        ));
    }

    let hue = parse_component(parts[0].strip_suffix("deg").unwrap_or(parts[0]))?;
    let saturation = parse_component(parts[1].strip_suffix('%').unwrap_or(parts[1]))? / 100.0;
    let lightness = parse_component(parts[2].strip_suffix('%').unwrap_or(parts[2]))? / 100.0;

    let opacity = match parts.get(3) {
        Some(part) => parse_alpha(part)?,
        None => 1.0,
    };

    let (r, g, b) = hsl_to_rgb(hue, saturation.clamp(0.0, 1.0), lightness.clamp(0.0, 1.0));
    Ok(ColorValue::from_rgb8(r, g, b, opacity))
}

fn parse_component(s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid color component '{}': expected a number", s))
}

fn parse_alpha(s: &str) -> Result<f64, String> {
    let value = if let Some(pct) = s.strip_suffix('%') {
        parse_component(pct)? / 100.0
    } else {
        parse_component(s)?
    };
    Ok(value.clamp(0.0, 1.0))
}

/// Standard HSL → RGB conversion. Hue in degrees (wrapped into 0–360),
/// saturation and lightness as fractions.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_channel(r1), to_channel(g1), to_channel(b1))
}

/// Converts an object-shaped color value.
fn convert_color_object(map: &Map<String, Value>) -> Result<ColorValue, String> {
    // An explicit hex field always wins over derived channel values.
    if let Some(hex) = map.get("hex").and_then(Value::as_str) {
        let mut color = parse_hex(hex.trim().trim_start_matches('#'))?;
        if let Some(alpha) = alpha_field(map) {
            color.opacity = alpha.clamp(0.0, 1.0);
        }
        return Ok(color);
    }

    if let (Some(r), Some(g), Some(b)) = (
        number_field(map, "r"),
        number_field(map, "g"),
        number_field(map, "b"),
    ) {
        let alpha = alpha_field(map).unwrap_or(1.0);
        return Ok(from_channels(r, g, b, alpha));
    }

    if let Some(components) = map.get("components").and_then(Value::as_array) {
        return convert_channel_list(components, alpha_field(map));
    }

    Err("unrecognized color shape".to_string())
}

/// Converts a `[r, g, b]` or `[r, g, b, a]` numeric list.
fn convert_channel_list(seq: &[Value], alpha: Option<f64>) -> Result<ColorValue, String> {
    if seq.len() != 3 && seq.len() != 4 {
        return Err(format!(
            "color component list must have 3 or 4 values, got {}",
            seq.len()
        ));
    }
    let mut channels = [0.0f64; 3];
    for (i, value) in seq.iter().take(3).enumerate() {
        channels[i] = value
            .as_f64()
            .ok_or_else(|| format!("color component {} is not a number", i))?;
    }
    let alpha = seq
        .get(3)
        .and_then(Value::as_f64)
        .or(alpha)
        .unwrap_or(1.0);
    Ok(from_channels(channels[0], channels[1], channels[2], alpha))
}

/// Applies the channel-range convention: any channel > 1 means 0–255
/// integers, all channels ≤ 1 means normalized sRGB floats (Figma).
fn from_channels(r: f64, g: f64, b: f64, alpha: f64) -> ColorValue {
    let (r, g, b) = if r > 1.0 || g > 1.0 || b > 1.0 {
        (clamp_channel(r), clamp_channel(g), clamp_channel(b))
    } else {
        (
            clamp_channel(r * 255.0),
            clamp_channel(g * 255.0),
            clamp_channel(b * 255.0),
        )
    };
    ColorValue::from_rgb8(r, g, b, alpha.clamp(0.0, 1.0))
}

fn clamp_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn number_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key).and_then(Value::as_f64)
}

/// Reads the opacity from any of the conventional alpha field names.
fn alpha_field(map: &Map<String, Value>) -> Option<f64> {
    ["a", "alpha", "opacity"]
        .iter()
        .find_map(|key| number_field(map, key))
}
