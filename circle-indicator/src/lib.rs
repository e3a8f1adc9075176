//! Circular progress indicator component for the Tessera UI framework.
//!
//! The indicator renders a full background ring, a foreground arc
//! proportional to `value / max_value` sweeping clockwise from the top, and
//! an optional centered label composed as `prefix + text + suffix`.
//!
//! # Usage
//!
//! Register the pipelines of this crate (and of `tessera-components`, which
//! renders the label) at the entry point.
//!
//! ```no_run
//! use circle_indicator::CircleIndicatorPackage;
//! use tessera_ui::EntryPoint;
//!
//! fn app() {
//!     // Your app code here
//! }
//!
//! #[tessera_ui::entry]
//! fn run() -> EntryPoint {
//!     EntryPoint::new(app)
//!         .package(tessera_components::ComponentsPackage)
//!         .package(CircleIndicatorPackage)
//! }
//! ```
//!
//! Then render the component in your UI.
//!
//! ```
//! # use tessera_ui::tessera;
//! # #[tessera]
//! # fn component() {
//! use circle_indicator::{CircleIndicatorArgs, circle_indicator};
//!
//! circle_indicator(&CircleIndicatorArgs::default().value(25.0).text("25").suffix("%"));
//! # }
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod indicator;
pub mod paint;
pub mod pipelines;

use tessera_ui::{EntryRegistry, PipelineContext, RenderModule, TesseraPackage};

pub use indicator::{
    CircleIndicatorArgs, CircleIndicatorController, CircleIndicatorDefaults, circle_indicator,
};
pub use paint::{ArcPaint, ArcStrokeCap, ParseColorError, TextPaint};

/// Registers the pipeline provided by this crate with the renderer.
pub fn init(context: &mut PipelineContext<'_>) {
    pipelines::register_pipelines(context);
}

struct CircleIndicatorModule;

impl RenderModule for CircleIndicatorModule {
    fn register_pipelines(&self, context: &mut PipelineContext<'_>) {
        pipelines::register_pipelines(context);
    }
}

/// Entry package registering the render pipeline of this crate.
pub struct CircleIndicatorPackage;

impl TesseraPackage for CircleIndicatorPackage {
    fn register(self, registry: &mut EntryRegistry) {
        registry.add_module(CircleIndicatorModule);
    }
}
