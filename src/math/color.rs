use thiserror::Error;

/// Error returned when a color string is not a `#rgb` / `#rrggbb` hex value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),
    #[error("color {0:?} must have 3 or 6 hex digits")]
    InvalidLength(String),
    #[error("color {0:?} contains a non-hex digit")]
    InvalidDigit(String),
}

/// RGB color in linear space
///
/// Hex values and 8-bit channels are treated as sRGB and converted on the way
/// in and out, so shaders always receive linear components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` sRGB value
    pub fn from_hex(hex: u32) -> Self {
        Self::from_srgb_u8([
            ((hex >> 16) & 0xff) as u8,
            ((hex >> 8) & 0xff) as u8,
            (hex & 0xff) as u8,
        ])
    }

    pub fn from_srgb_u8(rgb: [u8; 3]) -> Self {
        Self::new(
            srgb_to_linear(rgb[0] as f32 / 255.0),
            srgb_to_linear(rgb[1] as f32 / 255.0),
            srgb_to_linear(rgb[2] as f32 / 255.0),
        )
    }

    /// Parse a `#rrggbb` or `#rgb` string
    pub fn parse_hex(value: &str) -> Result<Self, ColorParseError> {
        let digits = value
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(value.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(value.to_string()));
        }

        let packed = match digits.len() {
            6 => u32::from_str_radix(digits, 16)
                .map_err(|_| ColorParseError::InvalidDigit(value.to_string()))?,
            3 => digits
                .chars()
                .filter_map(|c| c.to_digit(16))
                .fold(0u32, |acc, d| (acc << 8) | (d * 17)),
            _ => return Err(ColorParseError::InvalidLength(value.to_string())),
        };

        Ok(Self::from_hex(packed))
    }

    pub fn to_srgb_u8(&self) -> [u8; 3] {
        [
            channel_to_u8(linear_to_srgb(self.r)),
            channel_to_u8(linear_to_srgb(self.g)),
            channel_to_u8(linear_to_srgb(self.b)),
        ]
    }

    /// Format as lowercase `#rrggbb`
    pub fn to_hex_string(&self) -> String {
        let [r, g, b] = self.to_srgb_u8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c * 0.077_399_38
    } else {
        (c * 0.947_867_3 + 0.052_132_7).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c < 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(0.416_666_66) - 0.055
    }
}

fn channel_to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_parse_red() {
        let red = Color::parse_hex("#ff0000").unwrap();
        assert!(approx(red.r, 1.0));
        assert!(approx(red.g, 0.0));
        assert!(approx(red.b, 0.0));
    }

    #[test]
    fn test_parse_short_form() {
        let short = Color::parse_hex("#0f0").unwrap();
        let long = Color::parse_hex("#00ff00").unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            Color::parse_hex("#B80019").unwrap(),
            Color::parse_hex("#b80019").unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Color::parse_hex("ff0000"),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            Color::parse_hex("#ff00"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Color::parse_hex("#gg0000"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_hex_string_survives_linear_conversion() {
        for hex in ["#0099ff", "#ffffff", "#b80019", "#000000", "#7f7f7f"] {
            assert_eq!(Color::parse_hex(hex).unwrap().to_hex_string(), hex);
        }
    }

    #[test]
    fn test_mid_grey_is_darker_in_linear_space() {
        let grey = Color::from_hex(0x808080);
        assert!(grey.r < 0.25 && grey.r > 0.2);
    }

    #[test]
    fn test_packed_hex_matches_string() {
        assert_eq!(Color::from_hex(0x0099ff), Color::parse_hex("#0099ff").unwrap());
    }
}
