//! Render parameters and their documented ranges

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::color::{HexColor, Rgb};

pub const WIDTH_RANGE: (u32, u32) = (200, 2400);
pub const HEIGHT_RANGE: (u32, u32) = (20, 200);
pub const FREQUENCY_RANGE: (f64, f64) = (0.5, 8.0);
pub const LAYERS_RANGE: (u32, u32) = (1, 3);
pub const OPACITY_RANGE: (f64, f64) = (0.1, 1.0);
pub const SPEED_RANGE: (f64, f64) = (1.0, 20.0);

/// Upper bound the request layer applies to amplitude before render-time clamping
pub const MAX_REQUEST_AMPLITUDE: f64 = 100.0;

/// Largest amplitude, as a fraction of the height, a render will use
pub const AMPLITUDE_HEIGHT_RATIO: f64 = 0.45;

pub const DEFAULT_COLOR_TOP: HexColor = HexColor::from_rgb(Rgb::new(0x0d, 0x11, 0x17));
pub const DEFAULT_COLOR_BOTTOM: HexColor = HexColor::from_rgb(Rgb::new(0x16, 0x1b, 0x22));

/// Shape of the wave edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum WaveType {
    Sine,
    #[default]
    Smooth,
    Zigzag,
    Bump,
    Triangle,
}

impl WaveType {
    pub const ALL: [WaveType; 5] = [
        WaveType::Sine,
        WaveType::Smooth,
        WaveType::Zigzag,
        WaveType::Bump,
        WaveType::Triangle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WaveType::Sine => "sine",
            WaveType::Smooth => "smooth",
            WaveType::Zigzag => "zigzag",
            WaveType::Bump => "bump",
            WaveType::Triangle => "triangle",
        }
    }

    /// Resolve a wave name; unknown names fall back to `Smooth`
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "sine" => WaveType::Sine,
            "zigzag" => WaveType::Zigzag,
            "bump" => WaveType::Bump,
            "triangle" => WaveType::Triangle,
            _ => WaveType::Smooth,
        }
    }
}

impl FromStr for WaveType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for WaveType {
    fn from(s: String) -> Self {
        Self::from_name(&s)
    }
}

impl fmt::Display for WaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to draw one wave divider
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    pub wave_type: WaveType,
    pub width: u32,
    pub height: u32,
    pub color_top: HexColor,
    pub color_bottom: HexColor,
    pub amplitude: f64,
    pub frequency: f64,
    pub layers: u32,
    pub flip: bool,
    pub gradient: bool,
    pub mirror: bool,
    pub animate: bool,
    pub opacity: f64,
    /// Baseline animation cycle, in seconds
    pub speed: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            wave_type: WaveType::Smooth,
            width: 1200,
            height: 80,
            color_top: DEFAULT_COLOR_TOP,
            color_bottom: DEFAULT_COLOR_BOTTOM,
            amplitude: 20.0,
            frequency: 1.0,
            layers: 1,
            flip: false,
            gradient: false,
            mirror: false,
            animate: false,
            opacity: 1.0,
            speed: 6.0,
        }
    }
}

impl RenderParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wave_type(mut self, wave_type: WaveType) -> Self {
        self.wave_type = wave_type;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_colors(mut self, top: HexColor, bottom: HexColor) -> Self {
        self.color_top = top;
        self.color_bottom = bottom;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_layers(mut self, layers: u32) -> Self {
        self.layers = layers;
        self
    }

    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    pub fn with_gradient(mut self, gradient: bool) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn with_animation(mut self, animate: bool, speed: f64) -> Self {
        self.animate = animate;
        self.speed = speed;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Clamp every field into its documented range.
    ///
    /// Amplitude is bounded by `height * 0.45` of the already-clamped height.
    /// NaN inputs collapse to the lower bound.
    pub fn clamped(&self) -> Self {
        let height = self.height.clamp(HEIGHT_RANGE.0, HEIGHT_RANGE.1);
        let max_amplitude = f64::from(height) * AMPLITUDE_HEIGHT_RATIO;
        Self {
            wave_type: self.wave_type,
            width: self.width.clamp(WIDTH_RANGE.0, WIDTH_RANGE.1),
            height,
            color_top: self.color_top,
            color_bottom: self.color_bottom,
            amplitude: clamp_f64(self.amplitude, 1.0, max_amplitude),
            frequency: clamp_f64(self.frequency, FREQUENCY_RANGE.0, FREQUENCY_RANGE.1),
            layers: self.layers.clamp(LAYERS_RANGE.0, LAYERS_RANGE.1),
            flip: self.flip,
            gradient: self.gradient,
            mirror: self.mirror,
            animate: self.animate,
            opacity: clamp_f64(self.opacity, OPACITY_RANGE.0, OPACITY_RANGE.1),
            speed: clamp_f64(self.speed, SPEED_RANGE.0, SPEED_RANGE.1),
        }
    }
}

/// `min(max(v, lo), hi)`, mapping NaN to `lo`
pub(crate) fn clamp_f64(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() {
        lo
    } else {
        v.max(lo).min(hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_wave_type_falls_back_to_smooth() {
        assert_eq!(WaveType::from_name("square"), WaveType::Smooth);
        assert_eq!(WaveType::from_name(""), WaveType::Smooth);
        assert_eq!(WaveType::from_name("SINE"), WaveType::Sine);
        for wave in WaveType::ALL {
            assert_eq!(WaveType::from_name(wave.as_str()), wave);
        }
    }

    #[test]
    fn test_clamp_boundaries() {
        let params = RenderParams::new()
            .with_size(1200, 80)
            .with_amplitude(1000.0)
            .with_frequency(100.0)
            .with_layers(5)
            .clamped();
        assert_eq!(params.amplitude, 36.0);
        assert_eq!(params.frequency, 8.0);
        assert_eq!(params.layers, 3);
    }

    #[test]
    fn test_clamp_lower_bounds() {
        let params = RenderParams::new()
            .with_size(10, 1)
            .with_amplitude(0.0)
            .with_frequency(0.0)
            .with_layers(0)
            .with_opacity(f64::NAN)
            .with_animation(true, 0.0)
            .clamped();
        assert_eq!((params.width, params.height), (200, 20));
        assert_eq!(params.amplitude, 1.0);
        assert_eq!(params.frequency, 0.5);
        assert_eq!(params.layers, 1);
        assert_eq!(params.opacity, 0.1);
        assert_eq!(params.speed, 1.0);
    }

    #[test]
    fn test_clamp_is_identity_in_range() {
        let params = RenderParams::default();
        assert_eq!(params.clamped(), params);
    }
}
