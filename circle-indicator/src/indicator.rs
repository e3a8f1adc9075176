//! A circular progress indicator with a centered text label.
//!
//! ## Usage
//!
//! Use to show the completion of a task as a ring, optionally with a value
//! label (for example `"$42%"` from prefix, text, and suffix) in the middle.
use derive_setters::Setters;
use tessera_components::{
    modifier::{ModifierExt as _, SemanticsArgs},
    text::{TextArgs, text},
};
use tessera_ui::{
    Color, ComputedData, Constraint, DimensionValue, Dp, MeasurementError, Modifier, Px,
    PxPosition, RenderInput, State,
    accesskit::Role,
    layout::{LayoutInput, LayoutOutput, LayoutSpec},
    remember, tessera,
};

use crate::{
    paint::{ArcPaint, ArcStrokeCap, ParseColorError, TextPaint},
    pipelines::arc::command::{ArcCap, ArcCommand},
};

/// Default style values for [`circle_indicator`].
pub struct CircleIndicatorDefaults;

impl CircleIndicatorDefaults {
    /// Default color of the progress arc.
    pub const PROGRESS_COLOR: Color = Color::BLUE;
    /// Default color of the background ring.
    pub const BACKGROUND_COLOR: Color = Color::new(0.5, 0.5, 0.5, 1.0);
    /// Default stroke width of the progress arc.
    pub const STROKE_WIDTH: Dp = Dp(10.0);
    /// Default stroke width of the background ring.
    pub const BACKGROUND_WIDTH: Dp = Dp(10.0);
    /// Default maximum value mapped to a full turn.
    pub const MAX_VALUE: f32 = 100.0;
    /// Default color of the label.
    pub const TEXT_COLOR: Color = Color::BLACK;
    /// Default font size of the label.
    pub const TEXT_SIZE: Dp = Dp(18.0);
    /// Diameter used when the parent imposes no size bound at all.
    pub const DIAMETER: Dp = Dp(120.0);
}

/// Sweep angle in degrees for a value within a range.
///
/// Deliberately unclamped: values past `max_value` sweep past a full turn,
/// and a zero `max_value` yields a non-finite result.
fn sweep_degrees(value: f32, max_value: f32) -> f32 {
    value / max_value * 360.0
}

fn resolve_requested(dimension: DimensionValue, fallback: Px) -> Px {
    match dimension {
        DimensionValue::Fixed(px) => px,
        DimensionValue::Wrap { max, .. } | DimensionValue::Fill { max, .. } => {
            max.unwrap_or(fallback)
        }
    }
}

/// Forces the indicator square: the side is the smaller of the two requested
/// dimensions.
fn resolve_square_side(width: DimensionValue, height: DimensionValue, fallback: Px) -> Px {
    resolve_requested(width, fallback).min(resolve_requested(height, fallback))
}

fn compose_label(prefix: Option<&str>, text: Option<&str>, suffix: Option<&str>) -> String {
    let mut label = String::new();
    label.push_str(prefix.unwrap_or(""));
    label.push_str(text.unwrap_or(""));
    label.push_str(suffix.unwrap_or(""));
    label
}

fn arc_cap(cap: ArcStrokeCap) -> ArcCap {
    match cap {
        ArcStrokeCap::Butt => ArcCap::Butt,
        ArcStrokeCap::Round => ArcCap::Round,
        ArcStrokeCap::Square => ArcCap::Square,
    }
}

fn arc_command(paint: &ArcPaint, inset_px: f32, start: f32, sweep: f32) -> ArcCommand {
    ArcCommand {
        color: paint.color(),
        stroke_width_px: paint.stroke_width_px(),
        inset_px,
        start_angle_degrees: start,
        sweep_angle_degrees: sweep,
        cap: arc_cap(paint.cap()),
    }
}

/// Arguments for configuring a [`circle_indicator`].
#[derive(Clone, Setters)]
pub struct CircleIndicatorArgs {
    /// Current progress value. Not clamped to `max_value`.
    pub value: f32,

    /// Value mapped to a full 360° turn.
    pub max_value: f32,

    /// Color of the progress arc. Normalized to opaque.
    pub progress_color: Color,

    /// Color of the background ring. Normalized to opaque.
    pub background_color: Color,

    /// Stroke width of the progress arc.
    pub stroke_width: Dp,

    /// Stroke width of the background ring.
    pub background_width: Dp,

    /// Whether the progress arc ends are rounded instead of flat.
    pub rounded_corners: bool,

    /// Color of the label. Normalized to opaque.
    pub text_color: Color,

    /// Font size of the label.
    pub text_size: Dp,

    /// Label text. The label is only drawn when this is non-empty.
    #[setters(strip_option, into)]
    pub text: Option<String>,

    /// Fragment prepended to the label text.
    #[setters(strip_option, into)]
    pub prefix: Option<String>,

    /// Fragment appended to the label text.
    #[setters(strip_option, into)]
    pub suffix: Option<String>,

    /// Modifier chain applied to the indicator subtree.
    pub modifier: Modifier,

    /// Optional accessibility label read by assistive technologies.
    #[setters(strip_option, into)]
    pub accessibility_label: Option<String>,

    /// Optional accessibility description.
    #[setters(strip_option, into)]
    pub accessibility_description: Option<String>,

    /// Optional external controller for the indicator state.
    ///
    /// When this is `None`, `circle_indicator` creates and owns an internal
    /// controller seeded from these args.
    #[setters(skip)]
    pub controller: Option<State<CircleIndicatorController>>,
}

impl CircleIndicatorArgs {
    /// Sets an external indicator controller.
    pub fn controller(mut self, controller: State<CircleIndicatorController>) -> Self {
        self.controller = Some(controller);
        self
    }
}

impl Default for CircleIndicatorArgs {
    fn default() -> Self {
        Self {
            value: 0.0,
            max_value: CircleIndicatorDefaults::MAX_VALUE,
            progress_color: CircleIndicatorDefaults::PROGRESS_COLOR,
            background_color: CircleIndicatorDefaults::BACKGROUND_COLOR,
            stroke_width: CircleIndicatorDefaults::STROKE_WIDTH,
            background_width: CircleIndicatorDefaults::BACKGROUND_WIDTH,
            rounded_corners: false,
            text_color: CircleIndicatorDefaults::TEXT_COLOR,
            text_size: CircleIndicatorDefaults::TEXT_SIZE,
            text: None,
            prefix: None,
            suffix: None,
            modifier: Modifier::new(),
            accessibility_label: None,
            accessibility_description: None,
            controller: None,
        }
    }
}

/// Mutable indicator state: the progress value, value range, label
/// fragments, and the three paints.
///
/// The controller is the programmatic surface of the widget. Seed it from
/// args once (or create one with [`CircleIndicatorController::new`] and hand
/// it to the component), then mutate it through its methods; the next frame
/// picks the new state up, so the last write before a draw wins.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleIndicatorController {
    value: f32,
    max_value: f32,
    progress_paint: ArcPaint,
    background_paint: ArcPaint,
    text_paint: TextPaint,
    text: Option<String>,
    prefix: Option<String>,
    suffix: Option<String>,
}

impl CircleIndicatorController {
    /// Creates a controller with the default style.
    pub fn new() -> Self {
        Self::from_args(&CircleIndicatorArgs::default())
    }

    /// Resolves args into concrete state and paints.
    ///
    /// This is the one-time attribute resolution step; every style field
    /// falls back to its [`CircleIndicatorDefaults`] value through
    /// [`CircleIndicatorArgs::default`].
    pub fn from_args(args: &CircleIndicatorArgs) -> Self {
        let progress_cap = if args.rounded_corners {
            ArcStrokeCap::Round
        } else {
            ArcStrokeCap::Butt
        };
        Self {
            value: args.value,
            max_value: args.max_value,
            progress_paint: ArcPaint::stroke(args.progress_color, args.stroke_width, progress_cap),
            background_paint: ArcPaint::stroke(
                args.background_color,
                args.background_width,
                ArcStrokeCap::Square,
            ),
            text_paint: TextPaint::fill(args.text_color, args.text_size),
            text: args.text.clone(),
            prefix: args.prefix.clone(),
            suffix: args.suffix.clone(),
        }
    }

    /// Current progress value.
    pub fn progress(&self) -> f32 {
        self.value
    }

    /// Sets the progress value. Not clamped to the maximum.
    pub fn set_progress(&mut self, value: f32) {
        self.value = value;
    }

    /// Progress as a percentage of the maximum.
    ///
    /// The division is unguarded: a zero `max_value` propagates an infinite
    /// or NaN result to the caller.
    pub fn progress_percentage(&self) -> f32 {
        self.value / self.max_value * 100.0
    }

    /// Value mapped to a full turn.
    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    /// Sets the value mapped to a full turn.
    pub fn set_max_value(&mut self, max_value: f32) {
        self.max_value = max_value;
    }

    /// Stroke width of the progress arc.
    pub fn stroke_width(&self) -> Dp {
        self.progress_paint.stroke_width()
    }

    /// Sets the stroke width of the progress arc.
    pub fn set_stroke_width(&mut self, width: Dp) {
        self.progress_paint.set_stroke_width(width);
    }

    /// Stroke width of the background ring.
    pub fn background_width(&self) -> Dp {
        self.background_paint.stroke_width()
    }

    /// Sets the stroke width of the background ring.
    pub fn set_background_width(&mut self, width: Dp) {
        self.background_paint.set_stroke_width(width);
    }

    /// Color of the progress arc.
    pub fn progress_color(&self) -> Color {
        self.progress_paint.color()
    }

    /// Sets the color of the progress arc, normalized to opaque.
    pub fn set_progress_color(&mut self, color: Color) {
        self.progress_paint.set_color(color);
    }

    /// Sets the progress arc color from a `#RRGGBB` / `#AARRGGBB` string.
    pub fn set_progress_color_hex(&mut self, hex: &str) -> Result<(), ParseColorError> {
        self.progress_paint.set_color_hex(hex)
    }

    /// Color of the background ring.
    pub fn background_color(&self) -> Color {
        self.background_paint.color()
    }

    /// Sets the color of the background ring, normalized to opaque.
    pub fn set_background_color(&mut self, color: Color) {
        self.background_paint.set_color(color);
    }

    /// Sets the background ring color from a `#RRGGBB` / `#AARRGGBB` string.
    pub fn set_background_color_hex(&mut self, hex: &str) -> Result<(), ParseColorError> {
        self.background_paint.set_color_hex(hex)
    }

    /// Color of the label.
    pub fn text_color(&self) -> Color {
        self.text_paint.color()
    }

    /// Sets the color of the label, normalized to opaque.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_paint.set_color(color);
    }

    /// Sets the label color from a `#RRGGBB` / `#AARRGGBB` string.
    pub fn set_text_color_hex(&mut self, hex: &str) -> Result<(), ParseColorError> {
        self.text_paint.set_color_hex(hex)
    }

    /// Label text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Sets the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Label prefix, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Sets the label prefix.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = Some(prefix.into());
    }

    /// Label suffix, if any.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Sets the label suffix.
    pub fn set_suffix(&mut self, suffix: impl Into<String>) {
        self.suffix = Some(suffix.into());
    }

    /// The composed label: `prefix + text + suffix`, with absent fragments
    /// treated as empty.
    pub fn label(&self) -> String {
        compose_label(
            self.prefix.as_deref(),
            self.text.as_deref(),
            self.suffix.as_deref(),
        )
    }

    fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|text| !text.is_empty())
    }
}

impl Default for CircleIndicatorController {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, PartialEq)]
struct CircleIndicatorLayout {
    value: f32,
    max_value: f32,
    progress_paint: ArcPaint,
    background_paint: ArcPaint,
    fallback_diameter: Px,
}

impl LayoutSpec for CircleIndicatorLayout {
    fn measure(
        &self,
        input: &LayoutInput<'_>,
        output: &mut LayoutOutput<'_>,
    ) -> Result<ComputedData, MeasurementError> {
        let side = resolve_square_side(
            input.parent_constraint().width(),
            input.parent_constraint().height(),
            self.fallback_diameter,
        );

        if let Some(&label_id) = input.children_ids().first() {
            let constraint = Constraint::new(
                DimensionValue::Wrap {
                    min: None,
                    max: Some(side),
                },
                DimensionValue::Wrap {
                    min: None,
                    max: Some(side),
                },
            );
            let label_size = input.measure_child(label_id, &constraint)?;
            output.place_child(
                label_id,
                PxPosition::new(
                    Px((side.0 - label_size.width.0) / 2),
                    Px((side.0 - label_size.height.0) / 2),
                ),
            );
        }

        Ok(ComputedData {
            width: side,
            height: side,
        })
    }

    fn record(&self, input: &RenderInput<'_>) {
        let mut metadata = input.metadata_mut();
        let size = metadata
            .computed_data
            .expect("indicator must be measured before record");
        let radius = size.width.min(size.height).to_f32() / 2.0;
        let inset = radius / 3.0;

        metadata.push_draw_command(arc_command(&self.background_paint, inset, 0.0, 360.0));

        let sweep = sweep_degrees(self.value, self.max_value);
        if !sweep.is_finite() {
            tracing::warn!(
                value = self.value,
                max_value = self.max_value,
                "skipping progress arc with a non-finite sweep angle"
            );
            return;
        }
        if sweep > 0.0 {
            metadata.push_draw_command(arc_command(&self.progress_paint, inset, 270.0, sweep));
        }
    }
}

/// # circle_indicator
///
/// Renders a circular progress indicator: a full background ring, a
/// foreground arc sweeping `value / max_value` of a turn clockwise from the
/// top, and an optional centered label composed as `prefix + text + suffix`.
///
/// ## Usage
///
/// Display a value in a range, such as a download percentage or an amount
/// toward a goal. The indicator is forced square, sized by the smaller of
/// the two dimensions offered by the parent.
///
/// ## Parameters
///
/// - `args` — configures value, styling, and label; see
///   [`CircleIndicatorArgs`]. Pass an external
///   [`CircleIndicatorController`] to mutate the indicator after
///   construction.
///
/// ## Examples
///
/// ```
/// # use tessera_ui::tessera;
/// # #[tessera]
/// # fn component() {
/// use circle_indicator::indicator::{CircleIndicatorArgs, circle_indicator};
///
/// circle_indicator(
///     &CircleIndicatorArgs::default()
///         .value(42.0)
///         .text("42")
///         .suffix("%")
///         .rounded_corners(true),
/// );
/// # }
/// ```
#[tessera]
pub fn circle_indicator(args: &CircleIndicatorArgs) {
    let mut args = args.clone();
    let controller = args.controller.unwrap_or_else(|| {
        let seed = args.clone();
        remember(move || CircleIndicatorController::from_args(&seed))
    });
    args.controller = Some(controller);

    let modifier = args.modifier.clone();
    modifier.run(move || circle_indicator_inner_node(&args));
}

#[tessera]
fn circle_indicator_inner_node(args: &CircleIndicatorArgs) {
    let controller = args
        .controller
        .expect("circle_indicator_inner_node requires controller to be set");
    let state = controller.get();

    let mut semantics = SemanticsArgs::new().role(Role::ProgressIndicator);
    if let Some(label) = args.accessibility_label.clone() {
        semantics = semantics.label(label);
    }
    if let Some(description) = args.accessibility_description.clone() {
        semantics = semantics.description(description);
    }
    if state.max_value.is_finite() && state.max_value > 0.0 {
        semantics = semantics
            .numeric_range(0.0, state.max_value as f64)
            .numeric_value(state.value as f64);
    }

    Modifier::new().semantics(semantics).run(move || {
        if state.has_text() {
            text(
                &TextArgs::default()
                    .text(state.label())
                    .color(state.text_paint.color())
                    .size(state.text_paint.size()),
            );
        }

        layout(CircleIndicatorLayout {
            value: state.value,
            max_value: state.max_value,
            progress_paint: state.progress_paint,
            background_paint: state.background_paint,
            fallback_diameter: CircleIndicatorDefaults::DIAMETER.to_px(),
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_is_proportional_to_value() {
        assert_eq!(sweep_degrees(25.0, 100.0), 90.0);
        assert_eq!(sweep_degrees(100.0, 100.0), 360.0);
        assert_eq!(sweep_degrees(0.0, 100.0), 0.0);
    }

    #[test]
    fn sweep_is_not_clamped() {
        assert_eq!(sweep_degrees(150.0, 100.0), 540.0);
        assert_eq!(sweep_degrees(-25.0, 100.0), -90.0);
        assert!(sweep_degrees(50.0, 0.0).is_infinite());
    }

    #[test]
    fn percentage_divides_by_max() {
        let mut controller = CircleIndicatorController::new();
        controller.set_progress(50.0);
        controller.set_max_value(200.0);
        assert_eq!(controller.progress_percentage(), 25.0);
    }

    #[test]
    fn label_concatenates_prefix_text_suffix() {
        let mut controller = CircleIndicatorController::new();
        assert_eq!(controller.label(), "");

        controller.set_text("42");
        assert_eq!(controller.label(), "42");

        controller.set_prefix("$");
        controller.set_suffix("%");
        assert_eq!(controller.label(), "$42%");
    }

    #[test]
    fn label_is_only_drawn_for_non_empty_text() {
        let mut controller = CircleIndicatorController::new();
        assert!(!controller.has_text());

        controller.set_prefix("$");
        assert!(!controller.has_text());

        controller.set_text("");
        assert!(!controller.has_text());

        controller.set_text("42");
        assert!(controller.has_text());
    }

    #[test]
    fn square_layout_takes_the_smaller_dimension() {
        let fallback = CircleIndicatorDefaults::DIAMETER.to_px();
        let side = resolve_square_side(
            DimensionValue::Fixed(Px(300)),
            DimensionValue::Fixed(Px(200)),
            fallback,
        );
        assert_eq!(side, Px(200));
    }

    #[test]
    fn unbounded_layout_falls_back_to_the_default_diameter() {
        let fallback = CircleIndicatorDefaults::DIAMETER.to_px();
        let side = resolve_square_side(
            DimensionValue::Wrap {
                min: None,
                max: None,
            },
            DimensionValue::Fill {
                min: None,
                max: Some(Px(500)),
            },
            fallback,
        );
        assert_eq!(side, fallback.min(Px(500)));
    }

    #[test]
    fn setters_round_trip() {
        let mut controller = CircleIndicatorController::new();

        controller.set_progress(37.5);
        assert_eq!(controller.progress(), 37.5);

        controller.set_max_value(50.0);
        assert_eq!(controller.max_value(), 50.0);

        controller.set_stroke_width(Dp(4.0));
        assert_eq!(controller.stroke_width(), Dp(4.0));

        controller.set_background_width(Dp(6.0));
        assert_eq!(controller.background_width(), Dp(6.0));

        controller.set_text("42");
        assert_eq!(controller.text(), Some("42"));

        controller.set_prefix("$");
        assert_eq!(controller.prefix(), Some("$"));

        controller.set_suffix("%");
        assert_eq!(controller.suffix(), Some("%"));
    }

    #[test]
    fn resolved_colors_are_forced_opaque() {
        let args = CircleIndicatorArgs::default()
            .progress_color(Color::new(0.0, 0.0, 1.0, 0.25))
            .background_color(Color::new(0.5, 0.5, 0.5, 0.0))
            .text_color(Color::new(0.0, 0.0, 0.0, 0.5));
        let controller = CircleIndicatorController::from_args(&args);

        assert_eq!(controller.progress_color().a, 1.0);
        assert_eq!(controller.background_color().a, 1.0);
        assert_eq!(controller.text_color().a, 1.0);
    }

    #[test]
    fn hex_setters_mutate_paints_and_propagate_failures() {
        let mut controller = CircleIndicatorController::new();

        controller
            .set_progress_color_hex("#FF8000")
            .expect("valid hex color");
        assert_eq!(controller.progress_color(), Color::from_rgb_u8(255, 128, 0));

        controller
            .set_background_color_hex("#80FFFFFF")
            .expect("valid hex color");
        assert_eq!(controller.background_color().a, 1.0);

        controller
            .set_text_color_hex("#112233")
            .expect("valid hex color");
        assert_eq!(
            controller.text_color(),
            Color::from_rgb_u8(0x11, 0x22, 0x33)
        );

        assert!(controller.set_text_color_hex("oops").is_err());
    }

    #[test]
    fn attribute_resolution_uses_documented_defaults() {
        let controller = CircleIndicatorController::new();

        assert_eq!(controller.progress(), 0.0);
        assert_eq!(controller.max_value(), CircleIndicatorDefaults::MAX_VALUE);
        assert_eq!(
            controller.progress_color(),
            CircleIndicatorDefaults::PROGRESS_COLOR
        );
        assert_eq!(
            controller.background_color(),
            CircleIndicatorDefaults::BACKGROUND_COLOR
        );
        assert_eq!(
            controller.stroke_width(),
            CircleIndicatorDefaults::STROKE_WIDTH
        );
        assert_eq!(
            controller.background_width(),
            CircleIndicatorDefaults::BACKGROUND_WIDTH
        );
        assert_eq!(controller.text_color(), CircleIndicatorDefaults::TEXT_COLOR);
        assert_eq!(controller.text(), None);
        assert_eq!(controller.prefix(), None);
        assert_eq!(controller.suffix(), None);
    }

    #[test]
    fn background_command_is_a_full_square_capped_ring() {
        let controller = CircleIndicatorController::new();
        let command = arc_command(&controller.background_paint, 25.0, 0.0, 360.0);

        assert_eq!(command.start_angle_degrees, 0.0);
        assert_eq!(command.sweep_angle_degrees, 360.0);
        assert_eq!(command.cap, ArcCap::Square);
        assert_eq!(command.inset_px, 25.0);
    }

    #[test]
    fn progress_cap_follows_rounded_corners() {
        let flat = CircleIndicatorController::from_args(&CircleIndicatorArgs::default());
        assert_eq!(flat.progress_paint.cap(), ArcStrokeCap::Butt);

        let rounded = CircleIndicatorController::from_args(
            &CircleIndicatorArgs::default().rounded_corners(true),
        );
        assert_eq!(rounded.progress_paint.cap(), ArcStrokeCap::Round);
    }
}
