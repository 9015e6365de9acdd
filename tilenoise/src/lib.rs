// tilenoise holds the seeded, seamlessly tiling 2D noise fields
pub mod error;
pub mod perlin;
pub mod permutation;
pub mod rng;
pub mod sequence;
pub mod vector;
pub mod worley;

pub use error::NoiseError;
pub use perlin::{GradientNoiseConfig, GradientNoiseField};
pub use permutation::PermutationTable;
pub use rng::Alea;
pub use sequence::{halton, hammersley};
pub use vector::Vector2;
pub use worley::{PointGenAlgorithm, PointSelectionCriteria, WorleyConfig, WorleyField};

// A sampled 2D field: coordinate in, scalar out.
// Thin consumers (renderers, exporters) dispatch through this seam instead
// of naming a concrete engine; construction stays engine-specific.
pub trait NoiseField {
    fn sample(&self, position: Vector2) -> Result<f64, NoiseError>;
}
