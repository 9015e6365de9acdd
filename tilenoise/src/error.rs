use thiserror::Error;

// Everything that can go wrong while building or sampling a noise field.
// Configuration problems surface from `new`, never as silent defaults.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoiseError {
    #[error("octave weight list is empty")]
    EmptyOctaveWeights,

    #[error("octave weight {weight} at index {index} must be finite and non-negative")]
    InvalidOctaveWeight { index: usize, weight: f64 },

    #[error("octave weights sum to zero, nothing to normalize")]
    ZeroWeightSum,

    #[error("scale ({x}, {y}) must be positive on both axes")]
    NonPositiveScale { x: f64, y: f64 },

    #[error("a cell point field needs at least one point")]
    ZeroPoints,

    #[error("neighborhood search found {found} feature points but the selection needs {needed}")]
    InsufficientNeighbors { found: usize, needed: usize },
}
