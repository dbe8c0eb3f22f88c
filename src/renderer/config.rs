//! Configuration for SVG rendering

use crate::path::{SINE_POINTS, SMOOTH_POINTS};

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Whether to include an XML declaration before the root element
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// `id` of the gradient definition referenced by gradient fills
    pub gradient_id: String,

    /// Accessible label on the root element
    pub aria_label: String,

    /// Samples across the width for sine paths
    pub sine_points: usize,

    /// Samples across the width for smooth paths
    pub smooth_points: usize,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            pretty_print: true,
            gradient_id: "wg".to_string(),
            aria_label: "Wave divider".to_string(),
            sine_points: SINE_POINTS,
            smooth_points: SMOOTH_POINTS,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the gradient definition id
    pub fn with_gradient_id(mut self, id: impl Into<String>) -> Self {
        self.gradient_id = id.into();
        self
    }

    /// Set the accessible label
    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = label.into();
        self
    }

    /// Set the sample counts used by the sine and smooth builders
    pub fn with_sample_counts(mut self, sine_points: usize, smooth_points: usize) -> Self {
        self.sine_points = sine_points;
        self.smooth_points = smooth_points;
        self
    }
}
