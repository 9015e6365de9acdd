use tilenoise::{
    GradientNoiseConfig, GradientNoiseField, Vector2, WorleyConfig, WorleyField,
};

fn main() {
    // Default gradient field with a fixed seed
    let gradient = GradientNoiseField::new(GradientNoiseConfig {
        seed: Some("2025".to_string()),
        ..GradientNoiseConfig::default()
    })
    .unwrap();

    // Default worley field: 100 random points, closest distance
    let worley = WorleyField::new(WorleyConfig::default()).unwrap();

    // Print the top-left 8×8 corner of each field, sampled on a 64-step grid
    println!("gradient:");
    for y in 0..8 {
        for x in 0..8 {
            let p = Vector2::new(x as f64 / 64.0, y as f64 / 64.0);
            print!("{:>6.3} ", gradient.at(p));
        }
        println!();
    }

    println!("worley:");
    for y in 0..8 {
        for x in 0..8 {
            let p = Vector2::new(x as f64 / 64.0, y as f64 / 64.0);
            print!("{:>6.3} ", worley.at(p).unwrap());
        }
        println!();
    }
}
