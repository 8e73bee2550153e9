pub mod config;
pub mod distribution;
pub mod error;
pub mod estimate;
pub mod math;
pub mod simulation;

pub use self::{
    config::ClimbConfig,
    error::{ClimbError, Result},
    estimate::{estimate, estimate_with_rng, GameDistributions},
};
