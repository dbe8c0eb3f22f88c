//! Wave Divider CLI
//!
//! Usage:
//!   wave-divider [OPTIONS]
//!
//! Parameters are layered: defaults, then `--preset`, then `--query`, then the
//! individual flags.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use wave_divider::{render_with_config, HexColor, Preset, RenderParams, SvgConfig, WaveType};

#[derive(Parser)]
#[command(name = "wave-divider")]
#[command(about = "Render decorative SVG wave dividers")]
struct Cli {
    /// Preset file (TOML format)
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Query string in the `/wave` route format, e.g. "type=bump&layers=3"
    #[arg(short, long)]
    query: Option<String>,

    /// Wave shape: sine, smooth, zigzag, bump or triangle
    #[arg(short = 't', long = "type")]
    wave_type: Option<WaveType>,

    /// Width in pixels (200-2400)
    #[arg(long)]
    width: Option<u32>,

    /// Height in pixels (20-200)
    #[arg(long)]
    height: Option<u32>,

    /// Top color, hex with or without '#'
    #[arg(long)]
    color_top: Option<HexColor>,

    /// Bottom color, hex with or without '#'
    #[arg(long)]
    color_bottom: Option<HexColor>,

    /// Wave amplitude in pixels (at most 45% of the height)
    #[arg(short, long)]
    amplitude: Option<f64>,

    /// Wave cycles across the width (0.5-8)
    #[arg(short, long)]
    frequency: Option<f64>,

    /// Number of stacked layers (1-3)
    #[arg(short, long)]
    layers: Option<u32>,

    /// Fill opacity (0.1-1)
    #[arg(long)]
    opacity: Option<f64>,

    /// Animation cycle in seconds (1-20)
    #[arg(long)]
    speed: Option<f64>,

    /// Flip the wave to hang from the top edge
    #[arg(long)]
    flip: bool,

    /// Fill with a horizontal gradient from top to bottom color
    #[arg(short, long)]
    gradient: bool,

    /// Add a half-phase ghost layer
    #[arg(short, long)]
    mirror: bool,

    /// Animate each layer with a looping horizontal drift
    #[arg(long)]
    animate: bool,

    /// Include an XML declaration
    #[arg(long)]
    standalone: bool,

    /// Emit the document on a single line
    #[arg(long)]
    compact: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log render details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn params(&self) -> Result<RenderParams, String> {
        let mut params = match &self.preset {
            Some(path) => Preset::from_file(path)
                .map_err(|e| format!("Error loading preset '{}': {}", path.display(), e))?
                .params,
            None => RenderParams::default(),
        };

        if let Some(query) = &self.query {
            let from_query = RenderParams::from_query_str(query)
                .map_err(|e| format!("Error in query: {}", e))?;
            params = merge_query(params, from_query, query);
        }

        if let Some(wave_type) = self.wave_type {
            params.wave_type = wave_type;
        }
        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(color) = self.color_top {
            params.color_top = color;
        }
        if let Some(color) = self.color_bottom {
            params.color_bottom = color;
        }
        if let Some(amplitude) = self.amplitude {
            params.amplitude = amplitude;
        }
        if let Some(frequency) = self.frequency {
            params.frequency = frequency;
        }
        if let Some(layers) = self.layers {
            params.layers = layers;
        }
        if let Some(opacity) = self.opacity {
            params.opacity = opacity;
        }
        if let Some(speed) = self.speed {
            params.speed = speed;
        }
        params.flip |= self.flip;
        params.gradient |= self.gradient;
        params.mirror |= self.mirror;
        params.animate |= self.animate;

        Ok(params)
    }
}

/// Take from `query` only the keys the query string actually sets
fn merge_query(mut base: RenderParams, query: RenderParams, raw: &str) -> RenderParams {
    let keys: Vec<String> = wave_divider::request::parse_query_str(raw)
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    let has = |key: &str| keys.iter().any(|k| k == key);

    if has("type") {
        base.wave_type = query.wave_type;
    }
    if has("width") {
        base.width = query.width;
    }
    if has("height") {
        base.height = query.height;
    }
    if has("color_top") {
        base.color_top = query.color_top;
    }
    if has("color_bottom") {
        base.color_bottom = query.color_bottom;
    }
    if has("amplitude") {
        base.amplitude = query.amplitude;
    }
    if has("frequency") {
        base.frequency = query.frequency;
    }
    if has("layers") {
        base.layers = query.layers;
    }
    if has("flip") {
        base.flip = query.flip;
    }
    if has("gradient") {
        base.gradient = query.gradient;
    }
    if has("mirror") {
        base.mirror = query.mirror;
    }
    if has("animate") {
        base.animate = query.animate;
    }
    if has("opacity") {
        base.opacity = query.opacity;
    }
    if has("speed") {
        base.speed = query.speed;
    }
    base
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let params = match cli.params() {
        Ok(params) => params,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let config = SvgConfig::new()
        .with_standalone(cli.standalone)
        .with_pretty_print(!cli.compact);
    let svg = render_with_config(&params, config);

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, format!("{}\n", svg)) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            info!(path = %path.display(), bytes = svg.len(), "wrote wave divider");
        }
        None => println!("{}", svg),
    }
}
