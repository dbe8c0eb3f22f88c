//! Wave path builders
//!
//! Each builder samples one wave edge across the full width and closes it against
//! the bottom (or top) edge of the canvas, producing the `d` attribute of a filled
//! SVG path. Coordinates are written with two decimals so output stays byte-stable.

use std::f64::consts::PI;

use crate::params::WaveType;

/// Default sample count for the straight-line sine builder
pub const SINE_POINTS: usize = 100;

/// Default sample count for the bezier-smoothed builder
pub const SMOOTH_POINTS: usize = 60;

/// A point in SVG user space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Geometry shared by every builder for a single path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSpec {
    pub width: u32,
    pub height: u32,
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
    /// Close against the bottom edge; the top edge otherwise
    pub fill_bottom: bool,
    /// Vertical position of the wave midline as a fraction of the height
    pub y_offset: f64,
}

impl PathSpec {
    pub fn new(width: u32, height: u32, amplitude: f64, frequency: f64) -> Self {
        Self {
            width,
            height,
            amplitude,
            frequency,
            phase: 0.0,
            fill_bottom: true,
            y_offset: 0.5,
        }
    }

    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_fill_bottom(mut self, fill_bottom: bool) -> Self {
        self.fill_bottom = fill_bottom;
        self
    }

    pub fn with_y_offset(mut self, y_offset: f64) -> Self {
        self.y_offset = y_offset;
        self
    }

    fn mid_y(&self) -> f64 {
        f64::from(self.height) * self.y_offset
    }

    /// Height of the sine edge at `t` in `[0, 1]` across the width
    fn sine_y(&self, t: f64) -> f64 {
        self.mid_y() + self.amplitude * (2.0 * PI * self.frequency * t + self.phase).sin()
    }
}

/// Incremental writer for path data; tokens are separated by single spaces
#[derive(Debug, Default)]
struct PathData {
    parts: Vec<String>,
}

impl PathData {
    fn move_to(&mut self, p: Point) {
        self.parts.push(format!("M {:.2} {:.2}", p.x, p.y));
    }

    /// Move to the left edge, keeping `x = 0` unformatted
    fn move_to_left_edge(&mut self, y: f64) {
        self.parts.push(format!("M 0 {:.2}", y));
    }

    fn line_to(&mut self, p: Point) {
        self.parts.push(format!("L {:.2} {:.2}", p.x, p.y));
    }

    fn curve_to(&mut self, c1: Point, c2: Point, end: Point) {
        self.parts.push(format!(
            "C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
            c1.x, c1.y, c2.x, c2.y, end.x, end.y
        ));
    }

    /// Close the region against the bottom or top edge of the canvas
    fn close_region(&mut self, spec: &PathSpec) {
        let (w, h) = (spec.width, spec.height);
        if spec.fill_bottom {
            self.parts.push(format!("L {w} {h} L 0 {h} Z"));
        } else {
            self.parts.push(format!("L {w} 0 L 0 0 Z"));
        }
    }

    fn finish(self) -> String {
        self.parts.join(" ")
    }
}

/// Straight-line sine wave through `points + 1` samples
pub fn sine_path(spec: &PathSpec, points: usize) -> String {
    let points = points.max(1);
    let width = f64::from(spec.width);
    let samples: Vec<Point> = (0..=points)
        .map(|i| {
            let t = i as f64 / points as f64;
            Point::new(t * width, spec.sine_y(t))
        })
        .collect();

    let mut d = PathData::default();
    d.move_to(samples[0]);
    for &p in &samples[1..] {
        d.line_to(p);
    }
    d.close_region(spec);
    d.finish()
}

/// Sine samples joined by cubic curves whose control points sit at each segment's
/// horizontal midpoint, at the heights of the two endpoints
pub fn smooth_path(spec: &PathSpec, points: usize) -> String {
    let points = points.max(1);
    let step = f64::from(spec.width) / points as f64;
    let samples: Vec<Point> = (0..=points)
        .map(|i| Point::new(i as f64 * step, spec.sine_y(i as f64 / points as f64)))
        .collect();

    let mut d = PathData::default();
    d.move_to(samples[0]);
    for pair in samples.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let cx = (p0.x + p1.x) / 2.0;
        d.curve_to(Point::new(cx, p0.y), Point::new(cx, p1.y), p1);
    }
    d.close_region(spec);
    d.finish()
}

/// Alternating peaks at `±amplitude`, starting below the midline. Phase is ignored.
pub fn zigzag_path(spec: &PathSpec) -> String {
    let mid_y = spec.mid_y();
    let peaks = ((spec.frequency * 12.0).floor() as usize).max(2);
    let step = f64::from(spec.width) / peaks as f64;

    let mut d = PathData::default();
    for i in 0..=peaks {
        let offset = if i % 2 == 0 { spec.amplitude } else { -spec.amplitude };
        let p = Point::new(i as f64 * step, mid_y + offset);
        if i == 0 {
            d.move_to(p);
        } else {
            d.line_to(p);
        }
    }
    d.close_region(spec);
    d.finish()
}

/// A row of rounded humps rising from the midline. Phase is ignored.
///
/// Crests point up (toward smaller y) unless `inverted`.
pub fn bump_path(spec: &PathSpec, inverted: bool) -> String {
    let mid_y = spec.mid_y();
    let bumps = ((spec.frequency * 6.0).floor() as usize).max(1);
    let bw = f64::from(spec.width) / bumps as f64;
    let crest = if inverted {
        mid_y + spec.amplitude
    } else {
        mid_y - spec.amplitude
    };

    let mut d = PathData::default();
    d.move_to_left_edge(mid_y);
    for i in 0..bumps {
        let x0 = i as f64 * bw;
        let x1 = x0 + bw / 2.0;
        let x2 = x0 + bw;
        d.curve_to(
            Point::new(x0, mid_y),
            Point::new(x1 - bw * 0.1, crest),
            Point::new(x1, crest),
        );
        d.curve_to(
            Point::new(x1 + bw * 0.1, crest),
            Point::new(x2, mid_y),
            Point::new(x2, mid_y),
        );
    }
    d.close_region(spec);
    d.finish()
}

/// A lower-frequency zigzag: exactly `zigzag_path` at `frequency * 0.7`
pub fn triangle_path(spec: &PathSpec) -> String {
    let slowed = PathSpec {
        frequency: spec.frequency * 0.7,
        ..*spec
    };
    zigzag_path(&slowed)
}

/// Enum-dispatched path construction for one wave layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathBuilder {
    pub wave_type: WaveType,
    pub sine_points: usize,
    pub smooth_points: usize,
    /// Flip bump crests below the midline
    pub inverted: bool,
}

impl PathBuilder {
    pub fn new(wave_type: WaveType) -> Self {
        Self {
            wave_type,
            sine_points: SINE_POINTS,
            smooth_points: SMOOTH_POINTS,
            inverted: false,
        }
    }

    pub fn with_sample_counts(mut self, sine_points: usize, smooth_points: usize) -> Self {
        self.sine_points = sine_points;
        self.smooth_points = smooth_points;
        self
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn build(&self, spec: &PathSpec) -> String {
        match self.wave_type {
            WaveType::Sine => sine_path(spec, self.sine_points),
            WaveType::Smooth => smooth_path(spec, self.smooth_points),
            WaveType::Zigzag => zigzag_path(spec),
            WaveType::Bump => bump_path(spec, self.inverted),
            WaveType::Triangle => triangle_path(spec),
        }
    }
}
