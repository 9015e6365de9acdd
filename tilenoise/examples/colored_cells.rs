// Colorizes a worley ridge field through a palette gradient: cell
// interiors glow, boundaries (where second - closest hits zero) stay dark.

use std::path::Path;

use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};
use tilenoise::{
    PointGenAlgorithm, PointSelectionCriteria, Vector2, WorleyConfig, WorleyField,
};

fn main() {
    let size = 512;

    let field = WorleyField::new(WorleyConfig {
        seed: "cells".to_string(),
        num_points: 64,
        point_gen_algorithm: PointGenAlgorithm::Halton,
        point_selection_criteria: PointSelectionCriteria::SecondMinusClosest,
    })
    .unwrap();

    // Sample the ridge values and note the observed range
    let mut data = vec![vec![0.0f64; size]; size];
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for y in 0..size {
        for x in 0..size {
            let v = field
                .at(Vector2::new(x as f64 / size as f64, y as f64 / size as f64))
                .unwrap();
            data[y][x] = v;
            min = min.min(v);
            max = max.max(v);
        }
    }

    // Dark boundary -> ember -> bright interior
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.05, 0.02, 0.10)), // boundary
        (0.35, LinSrgb::new(0.55, 0.10, 0.15)), // ember
        (0.70, LinSrgb::new(0.95, 0.60, 0.15)), // glow
        (1.00, LinSrgb::new(1.00, 0.95, 0.75)), // core
    ]);

    let mut img = RgbImage::new(size as u32, size as u32);
    for y in 0..size {
        for x in 0..size {
            let norm = if (max - min).abs() < f64::EPSILON {
                0.5
            } else {
                (data[y][x] - min) / (max - min)
            };
            let col: LinSrgb = gradient.get(norm as f32);
            let rgb = col.into_format::<u8>();
            img.put_pixel(x as u32, y as u32, Rgb([rgb.red, rgb.green, rgb.blue]));
        }
    }

    let path = Path::new("colored_cells.png");
    img.save(path).unwrap();
    println!("Saved colored cell image to {:?}", path);
}
