//! Wave Divider - decorative SVG section separators
//!
//! This library turns a small parameter set (wave shape, size, amplitude,
//! frequency, layering, mirroring, animation and colors) into a self-contained
//! SVG document.
//!
//! # Example
//!
//! ```rust
//! use wave_divider::{render, RenderParams, WaveType};
//!
//! let params = RenderParams::new()
//!     .with_wave_type(WaveType::Sine)
//!     .with_layers(2)
//!     .with_mirror(true);
//!
//! let svg = render(&params);
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg.matches("<path ").count(), 3);
//! ```

pub mod color;
pub mod error;
pub mod layer;
pub mod params;
pub mod path;
pub mod preset;
pub mod renderer;
pub mod request;

pub use color::{escape_xml, hex_to_rgb, lerp_color, HexColor, Rgb};
pub use error::{ColorError, PresetError, RequestError};
pub use layer::{Layer, Layers};
pub use params::{RenderParams, WaveType};
pub use path::{PathBuilder, PathSpec};
pub use preset::Preset;
pub use renderer::{SvgConfig, WaveRenderer};
pub use request::Response;

/// Render a wave divider with the default SVG configuration
///
/// Out-of-range parameters are clamped; the same parameters always produce
/// byte-identical output.
///
/// # Example
///
/// ```rust
/// use wave_divider::{render, RenderParams};
///
/// let svg = render(&RenderParams::new().with_gradient(true));
/// assert!(svg.contains("<linearGradient"));
/// ```
pub fn render(params: &RenderParams) -> String {
    WaveRenderer::default().render(params)
}

/// Render a wave divider with a custom SVG configuration
///
/// # Example
///
/// ```rust
/// use wave_divider::{render_with_config, RenderParams, SvgConfig};
///
/// let config = SvgConfig::new().with_pretty_print(false).with_standalone(true);
/// let svg = render_with_config(&RenderParams::default(), config);
/// assert!(svg.starts_with("<?xml"));
/// assert!(!svg.contains('\n'));
/// ```
pub fn render_with_config(params: &RenderParams, config: SvgConfig) -> String {
    WaveRenderer::new(config).render(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default() {
        let svg = render(&RenderParams::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 1200 80""#));
        assert!(svg.contains(r#"preserveAspectRatio="none""#));
        assert!(svg.contains(r#"role="img" aria-label="Wave divider""#));
    }

    #[test]
    fn test_render_is_deterministic() {
        let params = RenderParams::new()
            .with_layers(3)
            .with_mirror(true)
            .with_animation(true, 4.0);
        assert_eq!(render(&params), render(&params));
    }

    #[test]
    fn test_render_without_gradient_has_no_defs() {
        let svg = render(&RenderParams::default());
        assert!(!svg.contains("<defs>"));
    }
}
