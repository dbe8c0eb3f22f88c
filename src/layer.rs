//! Per-layer derived values
//!
//! Layers are a pure function of `(index, layers, params)`; [`Layers`] yields them
//! lazily and can be cloned to restart the sequence.

use std::f64::consts::PI;

use crate::color::{escape_xml, lerp_color};
use crate::params::RenderParams;

/// Fraction of the amplitude and opacity each deeper layer gives up
const DEPTH_FALLOFF: f64 = 0.35;

/// Phase spread across the layer stack, as a fraction of pi
const PHASE_SPREAD: f64 = 0.8;

/// One independently parameterized wave within the divider
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub index: u32,
    /// `index / layers`
    pub frac: f64,
    pub phase: f64,
    pub amplitude_scale: f64,
    /// Final fill-opacity for this layer
    pub opacity: f64,
    /// SVG paint value for the `fill` attribute
    pub fill: String,
}

/// Iterator over the layers of a (clamped) render
#[derive(Debug, Clone)]
pub struct Layers<'a> {
    params: &'a RenderParams,
    base_fill: &'a str,
    next: u32,
}

impl<'a> Layers<'a> {
    /// `base_fill` is used for every layer under a gradient and for a single layer
    pub fn new(params: &'a RenderParams, base_fill: &'a str) -> Self {
        Self {
            params,
            base_fill,
            next: 0,
        }
    }

    fn layer(&self, index: u32) -> Layer {
        let count = self.params.layers.max(1);
        let frac = f64::from(index) / f64::from(count);
        let scale = 1.0 - frac * DEPTH_FALLOFF;
        let opacity = if count > 1 {
            self.params.opacity * scale
        } else {
            self.params.opacity
        };

        let fill = if count > 1 && !self.params.gradient {
            let t = f64::from(index) / f64::from(count - 1);
            lerp_color(self.params.color_top.rgb(), self.params.color_bottom.rgb(), t).to_css()
        } else {
            self.base_fill.to_string()
        };

        Layer {
            index,
            frac,
            phase: frac * PI * PHASE_SPREAD,
            amplitude_scale: scale,
            opacity,
            fill,
        }
    }
}

impl Iterator for Layers<'_> {
    type Item = Layer;

    fn next(&mut self) -> Option<Layer> {
        if self.next >= self.params.layers.max(1) {
            return None;
        }
        let layer = self.layer(self.next);
        self.next += 1;
        Some(layer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.params.layers.max(1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Layers<'_> {}

/// Fill used by a single layer, every gradient layer, and the mirror layer
pub fn base_fill(params: &RenderParams, gradient_id: &str) -> String {
    if params.gradient {
        format!("url(#{})", escape_xml(gradient_id))
    } else {
        escape_xml(&params.color_bottom.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use pretty_assertions::assert_eq;

    fn colors() -> (HexColor, HexColor) {
        ("000000".parse().unwrap(), "ffffff".parse().unwrap())
    }

    #[test]
    fn test_single_layer_uses_base_fill_unscaled() {
        let params = RenderParams::new().with_opacity(0.8);
        let layers: Vec<Layer> = Layers::new(&params, "#161b22").collect();
        assert_eq!(
            layers,
            vec![Layer {
                index: 0,
                frac: 0.0,
                phase: 0.0,
                amplitude_scale: 1.0,
                opacity: 0.8,
                fill: "#161b22".to_string(),
            }]
        );
    }

    #[test]
    fn test_three_layers_interpolate_top_to_bottom() {
        let (top, bottom) = colors();
        let params = RenderParams::new().with_layers(3).with_colors(top, bottom);
        let fills: Vec<String> = Layers::new(&params, "unused").map(|l| l.fill).collect();
        assert_eq!(fills, vec!["rgb(0,0,0)", "rgb(128,128,128)", "rgb(255,255,255)"]);
    }

    #[test]
    fn test_layer_depth_scaling() {
        let params = RenderParams::new().with_layers(2).with_opacity(1.0);
        let second = Layers::new(&params, "x").nth(1).unwrap();
        assert_eq!(second.frac, 0.5);
        assert!((second.phase - 0.4 * PI).abs() < 1e-12);
        assert!((second.amplitude_scale - 0.825).abs() < 1e-12);
        assert!((second.opacity - 0.825).abs() < 1e-12);
    }

    #[test]
    fn test_gradient_layers_share_base_fill() {
        let params = RenderParams::new().with_layers(3).with_gradient(true);
        let fill = base_fill(&params, "wg");
        assert_eq!(fill, "url(#wg)");
        assert!(Layers::new(&params, &fill).all(|l| l.fill == "url(#wg)"));
    }

    #[test]
    fn test_layers_restart_from_clone() {
        let params = RenderParams::new().with_layers(3);
        let layers = Layers::new(&params, "x");
        assert_eq!(layers.len(), 3);
        let first: Vec<Layer> = layers.clone().collect();
        let second: Vec<Layer> = layers.collect();
        assert_eq!(first, second);
    }
}
