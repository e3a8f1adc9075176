//! Render pipeline backing the circle indicator component.
//!
//! Register this pipeline once during renderer initialization before
//! rendering the component.

pub(crate) mod arc;

use tessera_ui::PipelineContext;

use crate::pipelines::arc::pipeline::ArcPipeline;

/// Register the draw pipeline required by this crate.
pub fn register_pipelines(context: &mut PipelineContext<'_>) {
    let resources = context.resources();
    let pipeline = ArcPipeline::new(
        resources.device,
        resources.surface_config,
        resources.pipeline_cache,
        resources.sample_count,
    );
    context.register_draw_pipeline(pipeline);
}
