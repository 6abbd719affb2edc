pub mod randomizer;
pub use randomizer::{generate_seed, seeded_rng};
