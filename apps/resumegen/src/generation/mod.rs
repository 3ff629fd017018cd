// Resume generation: record variants, story layout, and the parse → render pipeline.
// Everything here is synchronous; one run reads one file and writes one PDF per variant.

pub mod generator;
pub mod story;
pub mod variants;

pub use generator::{generate_for_locations, GenerationOptions};
