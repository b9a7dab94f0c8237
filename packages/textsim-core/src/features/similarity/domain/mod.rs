//! Similarity Domain
//!
//! Pure algorithms with no I/O and no shared state.
//!
//! ```text
//! domain/
//! ├── edit_distance.rs   # Damerau-Levenshtein (OSA) distance
//! └── similarity.rs      # Normalized [0, 1] score
//! ```

pub mod edit_distance;
pub mod similarity;

pub use edit_distance::{damerau_levenshtein, edit_distance, DistanceMatrix};
pub use similarity::{sequence_similarity, similarity};
pub(crate) use similarity::scored_distance;
