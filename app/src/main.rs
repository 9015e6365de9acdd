use std::env;
use std::path::{Path, PathBuf};
use std::process::exit;
use std::time::Instant;

use image::{GrayImage, Luma};
use log::{LevelFilter, error, info, warn};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use tilenoise::{
    GradientNoiseConfig, GradientNoiseField, NoiseField, PointGenAlgorithm,
    PointSelectionCriteria, Vector2, WorleyConfig, WorleyField,
};

const DEFAULT_SEED: &str = "defaultseed";
const DEFAULT_SIZE: u32 = 512;

fn init_logger() {
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("[{d(%H:%M:%S)} {l}]: {m}\n")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console)))
        .build(Root::builder().appender("console").build(LevelFilter::Info))
        .unwrap();
    log4rs::init_config(config).unwrap();
}

// Sample `field` over one tile at `size`×`size` pixels, normalize to the
// observed min/max and save as grayscale
fn render_tile(field: &dyn NoiseField, size: u32, path: &Path) {
    let start = Instant::now();
    let mut data = vec![0.0f64; (size * size) as usize];
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for y in 0..size {
        for x in 0..size {
            let p = Vector2::new(x as f64 / size as f64, y as f64 / size as f64);
            let v = match field.sample(p) {
                Ok(v) => v,
                Err(e) => {
                    error!("sample ({}, {}) failed: {e}", p.x, p.y);
                    exit(1);
                }
            };
            data[(y * size + x) as usize] = v;
            min = min.min(v);
            max = max.max(v);
        }
    }

    let mut img = GrayImage::new(size, size);
    for y in 0..size {
        for x in 0..size {
            let v = data[(y * size + x) as usize];
            let norm = if (max - min).abs() < f64::EPSILON {
                0.5
            } else {
                (v - min) / (max - min)
            };
            img.put_pixel(x, y, Luma([(norm * 255.0).round() as u8]));
        }
    }
    if let Err(e) = img.save(path) {
        error!("could not save {}: {e}", path.display());
        exit(1);
    }
    info!(
        "rendered {} in {} ms",
        path.display(),
        start.elapsed().as_millis()
    );
}

// Tile size argument; a malformed value is reported instead of being
// swallowed, then falls back to the default
fn parse_size(arg: Option<&str>) -> u32 {
    match arg {
        None => DEFAULT_SIZE,
        Some(s) => s.parse().unwrap_or_else(|_| {
            warn!("tile size {s:?} is not a number, using {DEFAULT_SIZE}");
            DEFAULT_SIZE
        }),
    }
}

// Usage: app [seed] [size] [outdir]
fn main() {
    init_logger();

    let args: Vec<String> = env::args().skip(1).collect();
    let seed = args.first().map(String::as_str).unwrap_or(DEFAULT_SEED);
    let size = parse_size(args.get(1).map(String::as_str));
    let outdir = PathBuf::from(args.get(2).map(String::as_str).unwrap_or("."));

    info!("seed {seed:?}, tile size {size}, output {}", outdir.display());

    let gradient = GradientNoiseField::new(GradientNoiseConfig {
        seed: Some(seed.to_string()),
        ..GradientNoiseConfig::default()
    })
    .unwrap();
    render_tile(&gradient, size, &outdir.join("gradient.png"));

    let worley = WorleyField::new(WorleyConfig {
        seed: seed.to_string(),
        ..WorleyConfig::default()
    })
    .unwrap();
    render_tile(&worley, size, &outdir.join("worley_closest.png"));

    // SecondMinusClosest over an even Hammersley spread renders the sharpest
    // cell ridges
    let ridge = WorleyField::new(WorleyConfig {
        seed: seed.to_string(),
        point_gen_algorithm: PointGenAlgorithm::Hammersley,
        point_selection_criteria: PointSelectionCriteria::SecondMinusClosest,
        ..WorleyConfig::default()
    })
    .unwrap();
    render_tile(&ridge, size, &outdir.join("worley_ridge.png"));
}
