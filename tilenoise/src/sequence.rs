use crate::vector::Vector2;

// Halton low-discrepancy sequence: the base-`base` digits of `index`
// mirrored into the unit interval. halton(0, b) is 0 for every base.
pub fn halton(index: usize, base: u32) -> f64 {
    assert!(base >= 2, "halton base must be at least 2");
    let base = base as usize;
    let mut fraction = 1.0;
    let mut result = 0.0;
    let mut i = index;
    while i > 0 {
        fraction /= base as f64;
        result += fraction * (i % base) as f64;
        i /= base;
    }
    result
}

// Hammersley point set: evenly spaced first coordinate, base-2 Halton
// second. Covers the unit square more uniformly than random draws when
// the total count is known up front.
pub fn hammersley(index: usize, total_count: usize) -> Vector2 {
    Vector2::new(index as f64 / total_count as f64, halton(index, 2))
}
