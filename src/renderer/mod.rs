//! Wave renderer
//!
//! Composes the wave layers, the optional mirror layer, gradient definitions,
//! flip transform and animations into a single SVG document.

pub mod config;
pub mod svg;

use std::f64::consts::PI;

use tracing::debug;

use crate::layer::{base_fill, Layers};
use crate::params::{RenderParams, WaveType};
use crate::path::{PathBuilder, PathSpec};

pub use config::SvgConfig;
pub use svg::{Animation, SvgBuilder};

/// Opacity of the mirror layer relative to the base opacity
const MIRROR_OPACITY: f64 = 0.4;

/// Every wave is centred vertically
const MIDLINE: f64 = 0.5;

/// Turns [`RenderParams`] into SVG markup
#[derive(Debug, Clone, Default)]
pub struct WaveRenderer {
    config: SvgConfig,
}

impl WaveRenderer {
    pub fn new(config: SvgConfig) -> Self {
        Self { config }
    }

    /// Render a divider. Out-of-range parameters are clamped silently.
    pub fn render(&self, params: &RenderParams) -> String {
        let params = params.clamped();
        debug!(
            wave_type = %params.wave_type,
            width = params.width,
            height = params.height,
            layers = params.layers,
            mirror = params.mirror,
            animate = params.animate,
            "rendering wave divider"
        );

        let mut builder = SvgBuilder::new(self.config.clone());

        if params.gradient {
            builder.add_linear_gradient(
                &params.color_top.to_string(),
                &params.color_bottom.to_string(),
            );
        }

        let fill = base_fill(&params, &self.config.gradient_id);
        let fill_bottom = !params.flip;
        let width = f64::from(params.width);

        let layer_builder = self
            .path_builder(params.wave_type)
            .with_inverted(params.flip);
        for layer in Layers::new(&params, &fill) {
            let spec = PathSpec::new(
                params.width,
                params.height,
                params.amplitude * layer.amplitude_scale,
                params.frequency,
            )
            .with_phase(layer.phase)
            .with_fill_bottom(fill_bottom)
            .with_y_offset(MIDLINE);

            let animation = params.animate.then(|| {
                let i = f64::from(layer.index);
                Animation::new(-(width * (0.02 + i * 0.01)), params.speed + i * 1.1)
            });

            builder.add_path(&layer_builder.build(&spec), &layer.fill, layer.opacity, animation);
        }

        if params.mirror {
            let mirror_type = match params.wave_type {
                WaveType::Sine => WaveType::Sine,
                _ => WaveType::Smooth,
            };
            let spec = PathSpec::new(params.width, params.height, params.amplitude, params.frequency)
                .with_phase(PI)
                .with_fill_bottom(fill_bottom)
                .with_y_offset(MIDLINE);
            let animation = params
                .animate
                .then(|| Animation::new(width * 0.03, params.speed + 1.5));

            builder.add_path(
                &self.path_builder(mirror_type).build(&spec),
                &fill,
                params.opacity * MIRROR_OPACITY,
                animation,
            );
        }

        if params.flip {
            builder.flip_vertically(params.height);
        }

        builder.build(params.width, params.height)
    }

    fn path_builder(&self, wave_type: WaveType) -> PathBuilder {
        PathBuilder::new(wave_type)
            .with_sample_counts(self.config.sine_points, self.config.smooth_points)
    }
}
