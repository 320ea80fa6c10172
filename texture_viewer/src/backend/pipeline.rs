/// Pipeline trait and pipeline descriptor

use super::ShaderVariation;

/// Descriptor for one of the fixed full-screen pipelines
///
/// The shader source is compiled by the backend with `variation.define()`
/// set, so one pipeline exists per texture shape the viewer can display.
#[derive(Debug, Clone)]
pub struct PipelineDesc {
    /// Texture shape this pipeline samples
    pub variation: ShaderVariation,
    /// Number of 32-bit root/push constants
    pub constant_count: u32,
    /// Whether alpha blending over the background is enabled
    pub alpha_blend: bool,
}

impl PipelineDesc {
    pub fn for_variation(variation: ShaderVariation) -> Self {
        Self {
            variation,
            constant_count: 16,
            alpha_blend: true,
        }
    }
}

/// Graphics pipeline resource trait
pub trait Pipeline: Send + Sync {
    /// Variation this pipeline was built for
    fn variation(&self) -> ShaderVariation;
}
