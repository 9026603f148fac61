//! raster-demo - render a fixed scene exercising every kernel operation.
//!
//! Run: `raster-demo --fill-mode seed-border --antialiasing -o demo.png`

use anyhow::{Context, Result};
use clap::Parser;
use raster_kernel::logging::{init_logging, LoggingConfig};
use raster_kernel::prelude::*;
use std::path::PathBuf;

/// Render the demonstration scene to a PNG.
#[derive(Parser, Debug)]
#[command(name = "raster-demo")]
#[command(version)]
#[command(about = "Render lines, clipped polygons and fills to a PNG", long_about = None)]
struct Cli {
    /// YAML render settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value = "640")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "480")]
    height: u32,

    /// Output PNG path
    #[arg(short, long, default_value = "raster-demo.png")]
    output: PathBuf,

    /// Force antialiased lines
    #[arg(long)]
    antialiasing: bool,

    /// Force checkerboard fills
    #[arg(long)]
    pattern: bool,

    /// Fill mode: scanline, seed-background or seed-border
    #[arg(long)]
    fill_mode: Option<FillMode>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// File settings (or defaults) with command-line overrides applied.
    fn settings(&self) -> Result<RenderSettings> {
        let mut settings = match &self.config {
            Some(path) => RenderSettings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => RenderSettings::default(),
        };

        settings.antialiasing |= self.antialiasing;
        settings.pattern_enabled |= self.pattern;
        if let Some(mode) = self.fill_mode {
            settings.fill_mode = mode;
        }
        Ok(settings)
    }
}

fn polygon(coords: &[(i32, i32)]) -> Polygon {
    coords.iter().copied().map(Point::from).collect()
}

fn demo_scene(settings: &RenderSettings) -> Scene {
    let mut scene = Scene::new();

    // Gradient fan covering shallow, diagonal and steep slopes
    let origin = Point::new(20, 20);
    for i in 0..9 {
        let end = if i < 5 {
            Point::new(260, 20 + i * 45)
        } else {
            Point::new(260 - (i - 4) * 45, 200)
        };
        scene.add_line(Line::new(origin, end, Rgba::RED, Rgba::BLUE));
    }
    scene.add_line(Line::solid(Point::new(20, 230), Point::new(20, 230), Rgba::GREEN));

    // Tilted rectangle and a triangle to fill
    scene.add_rectangle(Point::new(300, 60), Point::new(450, 30), Point::new(330, 170));
    let triangle = polygon(&[(480, 60), (620, 60), (550, 210)]);
    scene.add_polygon(triangle.clone());

    if settings.fill_mode.is_seed() {
        scene.seed_fill_at(Point::new(380, 100), settings);
        scene.seed_fill_at(Point::new(550, 100), settings);
    } else {
        scene.add_scanline_fill(triangle, settings.fill_color, settings.pattern_enabled);
    }

    // Hexagon clipped by a square window
    let window = polygon(&[(140, 260), (380, 260), (380, 440), (140, 440)]).oriented_for_clipping();
    scene.set_clip_boundary(window);
    scene.set_clip_subject(polygon(&[
        (260, 230),
        (420, 300),
        (420, 420),
        (260, 470),
        (100, 420),
        (100, 300),
    ]));
    match scene.apply_clip(settings) {
        Some(clipped) => log::info!("clipped subject to {} vertices", clipped.len()),
        None => log::warn!("clipped subject has no visible area"),
    }

    // Unclipped subject left pending so its outline shows
    scene.set_clip_subject(polygon(&[(420, 250), (620, 250), (620, 460), (420, 460)]));

    scene
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::from_verbosity(cli.verbose));

    let settings = cli.settings()?;
    log::debug!("settings: {settings:?}");

    let mut fb = Framebuffer::new(cli.width, cli.height)?;
    demo_scene(&settings).render(&mut fb, &settings);

    PngEncoder::write_to_file(&fb, &cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    Ok(())
}
