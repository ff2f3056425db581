//! Procedural terrain noise-map generator.
//!
//! Builds fractal height fields by layering octaves of coherent noise over a
//! 2D grid, classifies the heights into terrain bands and exports the result
//! as PNG or JSON.

pub mod export;
pub mod noise_map;
pub mod terrain;

pub use export::ExportError;
pub use noise_map::{NoiseMap, NoiseMapConfig};
pub use terrain::Terrain;
