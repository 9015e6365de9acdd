use log::debug;
use serde::{Deserialize, Serialize};

use crate::NoiseField;
use crate::error::NoiseError;
use crate::permutation::PermutationTable;
use crate::vector::Vector2;

const DEFAULT_STARTING_OCTAVE_INDEX: u32 = 4;
const DEFAULT_OCTAVE_WEIGHTS: [f64; 5] = [1.0, 0.5, 0.25, 0.125, 0.0625];
// Tuning value with no principled derivation; kept because every rendered
// output depends on it
const OCTAVE_CONTRAST: f64 = 1.2;

// 16 unit gradient directions, one per 22.5° step around the circle
const GRADIENTS: [Vector2; 16] = [
    Vector2::new(1.0, 0.0),
    Vector2::new(0.9238795325112867, 0.3826834323650898),
    Vector2::new(0.7071067811865476, 0.7071067811865476),
    Vector2::new(0.3826834323650898, 0.9238795325112867),
    Vector2::new(0.0, 1.0),
    Vector2::new(-0.3826834323650898, 0.9238795325112867),
    Vector2::new(-0.7071067811865476, 0.7071067811865476),
    Vector2::new(-0.9238795325112867, 0.3826834323650898),
    Vector2::new(-1.0, 0.0),
    Vector2::new(-0.9238795325112867, -0.3826834323650898),
    Vector2::new(-0.7071067811865476, -0.7071067811865476),
    Vector2::new(-0.3826834323650898, -0.9238795325112867),
    Vector2::new(0.0, -1.0),
    Vector2::new(0.3826834323650898, -0.9238795325112867),
    Vector2::new(0.7071067811865476, -0.7071067811865476),
    Vector2::new(0.9238795325112867, -0.3826834323650898),
];

// Parameters for a gradient noise field. Octave `i` of the list samples a
// grid of 2^(starting_octave_index + i + 1) cells per unit, so the default
// index of 4 starts at a 32-cell grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientNoiseConfig {
    pub starting_octave_index: u32,
    // raw weights, normalized to sum 1 at construction
    pub octave_weights: Vec<f64>,
    // None keeps the canonical permutation
    pub seed: Option<String>,
    // stretches the octave grids per axis; non-integer values break seamless
    // tiling along that axis
    pub scale: Vector2,
}

impl Default for GradientNoiseConfig {
    fn default() -> Self {
        Self {
            starting_octave_index: DEFAULT_STARTING_OCTAVE_INDEX,
            octave_weights: DEFAULT_OCTAVE_WEIGHTS.to_vec(),
            seed: None,
            scale: Vector2::new(1.0, 1.0),
        }
    }
}

impl GradientNoiseConfig {
    // Weight list 1/2^(i+1): the usual halving-amplitude octave stack.
    // After normalization it matches the default weights octave for octave.
    pub fn geometric_weights(octaves: usize) -> Vec<f64> {
        (0..octaves).map(|i| 1.0 / 2f64.powi(i as i32 + 1)).collect()
    }
}

// Multi-octave tiling gradient noise over the unit square
#[derive(Debug)]
pub struct GradientNoiseField {
    starting_octave_index: u32,
    octave_weights: Vec<f64>, // normalized
    permutation: PermutationTable,
    scale: Vector2,
}

impl GradientNoiseField {
    pub fn new(config: GradientNoiseConfig) -> Result<Self, NoiseError> {
        let octave_weights = normalize_weights(&config.octave_weights)?;
        let scale_ok = config.scale.x.is_finite()
            && config.scale.y.is_finite()
            && config.scale.x > 0.0
            && config.scale.y > 0.0;
        if !scale_ok {
            return Err(NoiseError::NonPositiveScale {
                x: config.scale.x,
                y: config.scale.y,
            });
        }

        let permutation = PermutationTable::new(config.seed.as_deref());
        debug!(
            "gradient noise field ready: {} octaves from index {}, seeded: {}",
            octave_weights.len(),
            config.starting_octave_index,
            config.seed.is_some()
        );

        Ok(Self {
            starting_octave_index: config.starting_octave_index,
            octave_weights,
            permutation,
            scale: config.scale,
        })
    }

    // Sample the field. Positions in [0, 1) per axis cover one tile;
    // anything outside wraps toroidally. Each octave contributes its
    // interpolated value × weight × OCTAVE_CONTRAST, clamped to [-1, 1];
    // the summed result is remapped from [-1, 1] to [0, 1] and NOT clamped
    // again, so exotic weights can poke slightly outside the unit interval.
    pub fn at(&self, position: Vector2) -> f64 {
        let mut total = 0.0;
        for (i, &weight) in self.octave_weights.iter().enumerate() {
            if weight == 0.0 {
                // a zero weight skips the whole octave
                continue;
            }
            let octave_index = self.starting_octave_index + i as u32;
            let value = self.octave_value(octave_index, position);
            total += (value * weight * OCTAVE_CONTRAST).clamp(-1.0, 1.0);
        }
        (total + 1.0) * 0.5
    }

    // One octave of gradient noise on a 2^(octave_index+1) grid stretched
    // by the configured scale
    fn octave_value(&self, octave_index: u32, position: Vector2) -> f64 {
        let grid_size = 2f64.powi(octave_index as i32 + 1);
        let width = (grid_size * self.scale.x).ceil() as i64;
        let height = (grid_size * self.scale.y).ceil() as i64;
        let in_grid = Vector2::new(
            position.x * grid_size * self.scale.x,
            position.y * grid_size * self.scale.y,
        );

        // cell corner below the sample and fractional offsets within it
        let x0 = in_grid.x.floor() as i64;
        let y0 = in_grid.y.floor() as i64;
        let sx = in_grid.x - x0 as f64;
        let sy = in_grid.y - y0 as f64;

        let n00 = self.corner_dot(x0, y0, in_grid, width, height);
        let n10 = self.corner_dot(x0 + 1, y0, in_grid, width, height);
        let n01 = self.corner_dot(x0, y0 + 1, in_grid, width, height);
        let n11 = self.corner_dot(x0 + 1, y0 + 1, in_grid, width, height);

        let u = fade(sx);
        let v = fade(sy);
        let bottom = lerp(n00, n10, u);
        let top = lerp(n01, n11, u);
        lerp(bottom, top, v)
    }

    // Gradient-dot-offset for one lattice corner. The hash wraps the corner
    // into the scaled grid (which is what makes opposite tile edges agree);
    // the offset keeps the unwrapped corner so distances stay local.
    fn corner_dot(&self, cx: i64, cy: i64, in_grid: Vector2, width: i64, height: i64) -> f64 {
        let hash = self.permutation.hash(cx.rem_euclid(width), cy.rem_euclid(height));
        let gradient = GRADIENTS[(hash & 0x0F) as usize];
        let offset = in_grid - Vector2::new(cx as f64, cy as f64);
        gradient.dot(offset)
    }
}

impl NoiseField for GradientNoiseField {
    // gradient noise itself cannot fail once constructed
    fn sample(&self, position: Vector2) -> Result<f64, NoiseError> {
        Ok(self.at(position))
    }
}

// Validate raw octave weights and normalize them to sum to 1
fn normalize_weights(weights: &[f64]) -> Result<Vec<f64>, NoiseError> {
    if weights.is_empty() {
        return Err(NoiseError::EmptyOctaveWeights);
    }
    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(NoiseError::InvalidOctaveWeight { index, weight });
        }
    }
    let sum: f64 = weights.iter().sum();
    if sum == 0.0 {
        return Err(NoiseError::ZeroWeightSum);
    }
    Ok(weights.iter().map(|w| w / sum).collect())
}

// Ken Perlin's quintic fade 6t^5 - 15t^4 + 10t^3; first and second
// derivatives vanish at t=0 and t=1, which hides cell boundaries
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
