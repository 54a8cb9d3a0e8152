//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel batch calls.

mod rayon_backend;

pub use rayon_backend::ParallelRayonBackend;
