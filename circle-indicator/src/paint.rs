//! Paint descriptors for the indicator's strokes and label.
//!
//! ## Usage
//!
//! Hold resolved style values and turn them into draw-command parameters.
use tessera_ui::{Color, Dp};

/// Stroke cap applied to arc ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArcStrokeCap {
    /// Flat stroke ends, cut exactly at the arc endpoint.
    #[default]
    Butt,
    /// Rounded stroke ends.
    Round,
    /// Square stroke ends, extended past the arc endpoint by half the
    /// stroke width.
    Square,
}

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    /// The string does not start with `#`.
    #[error("color string must start with '#', got {0:?}")]
    MissingHash(String),
    /// The string does not contain 6 or 8 hex digits after the `#`.
    #[error("color string must contain 6 or 8 hex digits, got {0:?}")]
    InvalidLength(String),
    /// A character after the `#` is not a hex digit.
    #[error("invalid hex digit in color string {0:?}")]
    InvalidDigit(String),
}

/// Parses a `#RRGGBB` or `#AARRGGBB` color string.
///
/// The alpha channel is accepted but callers that feed paints normalize it
/// away again via [`opaque`].
pub fn parse_hex_color(input: &str) -> Result<Color, ParseColorError> {
    let digits = input
        .strip_prefix('#')
        .ok_or_else(|| ParseColorError::MissingHash(input.to_string()))?;
    if digits.len() != 6 && digits.len() != 8 {
        return Err(ParseColorError::InvalidLength(input.to_string()));
    }
    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| ParseColorError::InvalidDigit(input.to_string()))?;
    let [a, r, g, b] = value.to_be_bytes();
    if digits.len() == 6 {
        Ok(Color::from_rgb_u8(r, g, b))
    } else {
        Ok(Color::from_rgba_u8(r, g, b, a))
    }
}

/// Strips the alpha channel, forcing the color fully opaque.
pub fn opaque(color: Color) -> Color {
    color.with_alpha(1.0)
}

/// Stroke paint for an arc.
///
/// The stroke width is kept in density-independent pixels; density scaling
/// happens when the paint is turned into a draw command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcPaint {
    color: Color,
    stroke_width: Dp,
    cap: ArcStrokeCap,
}

impl ArcPaint {
    /// Creates a stroke paint. The color is normalized to opaque.
    pub fn stroke(color: Color, stroke_width: Dp, cap: ArcStrokeCap) -> Self {
        Self {
            color: opaque(color),
            stroke_width,
            cap,
        }
    }

    /// Current stroke color (always opaque).
    pub fn color(&self) -> Color {
        self.color
    }

    /// Replaces the stroke color in place, normalizing it to opaque.
    pub fn set_color(&mut self, color: Color) {
        self.color = opaque(color);
    }

    /// Replaces the stroke color from a `#RRGGBB` / `#AARRGGBB` string.
    pub fn set_color_hex(&mut self, hex: &str) -> Result<(), ParseColorError> {
        self.set_color(parse_hex_color(hex)?);
        Ok(())
    }

    /// Stroke width in density-independent pixels.
    pub fn stroke_width(&self) -> Dp {
        self.stroke_width
    }

    /// Replaces the stroke width in place.
    pub fn set_stroke_width(&mut self, stroke_width: Dp) {
        self.stroke_width = stroke_width;
    }

    /// Stroke width in physical pixels at the current display density.
    pub fn stroke_width_px(&self) -> f32 {
        self.stroke_width.to_pixels_f32()
    }

    /// Stroke cap for the arc ends.
    pub fn cap(&self) -> ArcStrokeCap {
        self.cap
    }

    /// Replaces the stroke cap in place.
    pub fn set_cap(&mut self, cap: ArcStrokeCap) {
        self.cap = cap;
    }
}

/// Fill paint for the centered label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPaint {
    color: Color,
    size: Dp,
}

impl TextPaint {
    /// Creates a text paint. The color is normalized to opaque.
    pub fn fill(color: Color, size: Dp) -> Self {
        Self {
            color: opaque(color),
            size,
        }
    }

    /// Current text color (always opaque).
    pub fn color(&self) -> Color {
        self.color
    }

    /// Replaces the text color in place, normalizing it to opaque.
    pub fn set_color(&mut self, color: Color) {
        self.color = opaque(color);
    }

    /// Replaces the text color from a `#RRGGBB` / `#AARRGGBB` string.
    pub fn set_color_hex(&mut self, hex: &str) -> Result<(), ParseColorError> {
        self.set_color(parse_hex_color(hex)?);
        Ok(())
    }

    /// Font size in density-independent pixels.
    pub fn size(&self) -> Dp {
        self.size
    }

    /// Replaces the font size in place.
    pub fn set_size(&mut self, size: Dp) {
        self.size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_hex() {
        let color = parse_hex_color("#FF8000").expect("valid hex color");
        assert_eq!(color, Color::from_rgb_u8(255, 128, 0));
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn parses_argb_hex() {
        let color = parse_hex_color("#80FF0000").expect("valid hex color");
        assert_eq!(color, Color::from_rgba_u8(255, 0, 0, 128));
    }

    #[test]
    fn rejects_missing_hash() {
        assert_eq!(
            parse_hex_color("FF8000"),
            Err(ParseColorError::MissingHash("FF8000".to_string()))
        );
    }

    #[test]
    fn rejects_bad_length() {
        assert_eq!(
            parse_hex_color("#FFF"),
            Err(ParseColorError::InvalidLength("#FFF".to_string()))
        );
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert_eq!(
            parse_hex_color("#GG0000"),
            Err(ParseColorError::InvalidDigit("#GG0000".to_string()))
        );
    }

    #[test]
    fn paints_force_opaque_colors() {
        let mut paint = ArcPaint::stroke(
            Color::new(0.2, 0.4, 0.6, 0.25),
            Dp(10.0),
            ArcStrokeCap::Butt,
        );
        assert_eq!(paint.color().a, 1.0);

        paint.set_color(Color::new(0.1, 0.1, 0.1, 0.0));
        assert_eq!(paint.color().a, 1.0);

        paint.set_color_hex("#80112233").expect("valid hex color");
        assert_eq!(paint.color(), Color::from_rgb_u8(0x11, 0x22, 0x33));

        let mut text = TextPaint::fill(Color::new(0.0, 0.0, 0.0, 0.5), Dp(18.0));
        assert_eq!(text.color().a, 1.0);
        text.set_color_hex("#FF00FF").expect("valid hex color");
        assert_eq!(text.color(), Color::from_rgb_u8(0xFF, 0x00, 0xFF));
    }

    #[test]
    fn hex_setter_propagates_parse_failure() {
        let mut paint = ArcPaint::stroke(Color::BLUE, Dp(10.0), ArcStrokeCap::Round);
        let before = paint.color();
        assert!(paint.set_color_hex("not-a-color").is_err());
        assert_eq!(paint.color(), before);
    }
}
