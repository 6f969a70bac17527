use palette::{FromColor, Hsl, Srgb};

/// An opaque 8-bit sRGB color.
pub type Rgb = Srgb<u8>;

/// Navy blue, substituted whenever a hex string cannot be parsed.
pub const FALLBACK_RGB: Rgb = Srgb::new(44, 82, 130);

/// A color in HSL space with the hue in degrees `[0, 360)` and saturation and
/// lightness as percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

/// Parses `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` into an RGB triple.
///
/// Shorthand values are expanded by digit duplication, so `#F0A` and `#FF00AA`
/// parse to the same color. Anything else returns `None`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        3 | 6 => digits.parse::<Rgb>().ok(),
        _ => None,
    }
}

/// Like `hex_to_rgb`, but falls back to navy blue for unparsable input.
pub fn rgb_or_default(hex: &str) -> Rgb {
    hex_to_rgb(hex).unwrap_or(FALLBACK_RGB)
}

/// Canonical `#RRGGBB` (uppercase) form of a hex color.
pub fn normalize_hex(hex: &str) -> Option<String> {
    hex_to_rgb(hex).map(to_hex)
}

pub fn to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
}

/// Formats floating point channels as `#RRGGBB`, clamping each channel into
/// `[0, 255]` and rounding to the nearest integer.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    to_hex(Srgb::new(clamp_channel(r), clamp_channel(g), clamp_channel(b)))
}

fn clamp_channel(c: f64) -> u8 {
    if c.is_nan() {
        return 0;
    }

    c.round().clamp(0.0, 255.0) as u8
}

pub fn rgb_to_hsl(rgb: Rgb) -> HslColor {
    let hsl: Hsl = Hsl::from_color(rgb.into_format::<f32>());

    HslColor {
        hue: hsl.hue.into_positive_degrees() % 360.0,
        saturation: hsl.saturation * 100.0,
        lightness: hsl.lightness * 100.0,
    }
}

pub fn hsl_to_rgb(hsl: HslColor) -> Rgb {
    let hsl: Hsl = Hsl::new(
        hsl.hue.rem_euclid(360.0),
        (hsl.saturation / 100.0).clamp(0.0, 1.0),
        (hsl.lightness / 100.0).clamp(0.0, 1.0),
    );
    let srgb: Srgb = Srgb::from_color(hsl);

    Srgb::new(
        clamp_channel(srgb.red as f64 * 255.0),
        clamp_channel(srgb.green as f64 * 255.0),
        clamp_channel(srgb.blue as f64 * 255.0),
    )
}

pub fn hex_to_hsl(hex: &str) -> HslColor {
    rgb_to_hsl(rgb_or_default(hex))
}

pub fn hsl_to_hex(hsl: HslColor) -> String {
    to_hex(hsl_to_rgb(hsl))
}

/// WCAG 2.x relative luminance, in `[0, 1]`.
pub fn relative_luminance(hex: &str) -> f64 {
    let rgb = rgb_or_default(hex);

    let linearize = |c: u8| -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };

    0.2126 * linearize(rgb.red) + 0.7152 * linearize(rgb.green) + 0.0722 * linearize(rgb.blue)
}

/// Lightens (positive `percent`) or darkens (negative `percent`) a color by
/// blending every channel toward white or black.
pub fn adjust_brightness(hex: &str, percent: f64) -> String {
    let rgb = rgb_or_default(hex);
    let factor = percent.clamp(-100.0, 100.0) / 100.0;

    let adjust = |c: u8| -> f64 {
        let c = c as f64;
        if factor >= 0.0 {
            c + (255.0 - c) * factor
        } else {
            c * (1.0 + factor)
        }
    };

    rgb_to_hex(adjust(rgb.red), adjust(rgb.green), adjust(rgb.blue))
}

/// Shifts the HSL saturation by `delta` percentage points.
pub fn adjust_saturation(hex: &str, delta: f32) -> String {
    let mut hsl = hex_to_hsl(hex);
    hsl.saturation = (hsl.saturation + delta).clamp(0.0, 100.0);

    hsl_to_hex(hsl)
}

/// Blends `from` toward `to`. A factor of `0.0` returns `from`, `1.0` returns `to`.
pub fn mix(from: &str, to: &str, factor: f64) -> String {
    let a = rgb_or_default(from);
    let b = rgb_or_default(to);
    let t = factor.clamp(0.0, 1.0);

    let blend = |x: u8, y: u8| x as f64 + (y as f64 - x as f64) * t;

    rgb_to_hex(
        blend(a.red, b.red),
        blend(a.green, b.green),
        blend(a.blue, b.blue),
    )
}

/// Adds a per-channel offset, clamping the result into `[0, 255]`.
pub fn shift_channels(hex: &str, dr: i32, dg: i32, db: i32) -> String {
    let rgb = rgb_or_default(hex);

    rgb_to_hex(
        (rgb.red as i32 + dr) as f64,
        (rgb.green as i32 + dg) as f64,
        (rgb.blue as i32 + db) as f64,
    )
}
