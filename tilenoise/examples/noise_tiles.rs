// Saves one grayscale tile per engine variant:
// gradient noise (default octave stack)
// worley closest / second-closest / ridge

use std::path::Path;

use image::{GrayImage, Luma};
use tilenoise::{
    GradientNoiseConfig, GradientNoiseField, NoiseField, PointSelectionCriteria, Vector2,
    WorleyConfig, WorleyField,
};

fn save_grayscale(field: &dyn NoiseField, size: usize, filename: &str) {
    let mut data = vec![vec![0.0f64; size]; size];
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    // Sample noise
    for y in 0..size {
        for x in 0..size {
            let v = field
                .sample(Vector2::new(x as f64 / size as f64, y as f64 / size as f64))
                .unwrap();
            data[y][x] = v;
            min = min.min(v);
            max = max.max(v);
        }
    }

    // Write image
    let mut img = GrayImage::new(size as u32, size as u32);
    for y in 0..size {
        for x in 0..size {
            let v = data[y][x];
            let norm = if (max - min).abs() < f64::EPSILON {
                0.5
            } else {
                (v - min) / (max - min)
            };
            let gray = (norm * 255.0).round() as u8;
            img.put_pixel(x as u32, y as u32, Luma([gray]));
        }
    }
    img.save(Path::new(filename)).unwrap();
    println!("Saved {}", filename);
}

fn main() {
    let size = 512;
    let seed = "tiles";

    let gradient = GradientNoiseField::new(GradientNoiseConfig {
        seed: Some(seed.to_string()),
        ..GradientNoiseConfig::default()
    })
    .unwrap();
    save_grayscale(&gradient, size, "gradient2d.png");

    for (criteria, filename) in [
        (PointSelectionCriteria::Closest, "worley_closest.png"),
        (PointSelectionCriteria::SecondClosest, "worley_second.png"),
        (PointSelectionCriteria::SecondMinusClosest, "worley_ridge.png"),
    ] {
        let worley = WorleyField::new(WorleyConfig {
            seed: seed.to_string(),
            point_selection_criteria: criteria,
            ..WorleyConfig::default()
        })
        .unwrap();
        save_grayscale(&worley, size, filename);
    }
}
