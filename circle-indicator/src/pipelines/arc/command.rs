use tessera_ui::{Color, DrawCommand};

/// Stroke cap encoding used by the arc shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcCap {
    /// Flat stroke ends.
    Butt,
    /// Rounded stroke ends.
    Round,
    /// Square stroke ends extended past the endpoint.
    Square,
}

/// Draw command for a circular arc stroke inside the node's bounds.
///
/// The arc centerline is a circle fitted to the node's bounding box after
/// shrinking it by `inset_px` on every side; the stroke straddles that
/// centerline. A sweep of 360° or more renders a full ring, which makes the
/// same command serve both the background ring and the partial progress arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCommand {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in physical pixels.
    pub stroke_width_px: f32,
    /// Inset from the node's bounds to the arc bounding box, in physical
    /// pixels.
    pub inset_px: f32,
    /// Start angle in degrees, where 0° is at 3 o'clock.
    pub start_angle_degrees: f32,
    /// Sweep angle in degrees, in the clockwise direction. Not clamped;
    /// values past 360° overlap the full ring.
    pub sweep_angle_degrees: f32,
    /// Stroke cap applied to the arc ends.
    pub cap: ArcCap,
}

impl DrawCommand for ArcCommand {
    fn apply_opacity(&mut self, opacity: f32) {
        self.color = self
            .color
            .with_alpha(self.color.a * opacity.clamp(0.0, 1.0));
    }
}
