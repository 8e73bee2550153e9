use std::time::Instant;

use itertools::izip;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::ClimbConfig;
use crate::distribution::{summarize, to_cumulative, Summary};
use crate::error::Result;
use crate::math::{bayes_pmf, first_passage_pmf};
use crate::simulation::{
    simulate_pdf, simulate_pdf_bayes, simulate_pdf_streams, StreamPlan, WinRatePrior,
};

pub const MODEL_NAMES: [&str; 4] = ["simulated", "simulated_bayes", "analytical", "analytical_bayes"];

/// The four models of the game count, aligned on the same game index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameDistributions {
    /// Seed the simulated columns were drawn with; `None` when the caller
    /// supplied the generator.
    pub seed: Option<u64>,
    pub simulated: Vec<f64>,
    pub simulated_bayes: Vec<f64>,
    pub analytical: Vec<f64>,
    pub analytical_bayes: Vec<f64>,
}

impl GameDistributions {
    pub fn len(&self) -> usize { self.simulated.len() }

    pub fn is_empty(&self) -> bool { self.simulated.is_empty() }

    /// Same models as cumulative distributions.
    pub fn cumulative(&self) -> Self {
        Self {
            seed: self.seed,
            simulated: to_cumulative(&self.simulated),
            simulated_bayes: to_cumulative(&self.simulated_bayes),
            analytical: to_cumulative(&self.analytical),
            analytical_bayes: to_cumulative(&self.analytical_bayes),
        }
    }

    pub fn columns(&self) -> [&[f64]; 4] {
        [&self.simulated, &self.simulated_bayes, &self.analytical, &self.analytical_bayes]
    }

    /// `(games, simulated, simulated_bayes, analytical, analytical_bayes)`
    pub fn rows(&self) -> impl Iterator<Item = (usize, f64, f64, f64, f64)> + '_ {
        izip!(&self.simulated, &self.simulated_bayes, &self.analytical, &self.analytical_bayes)
            .enumerate()
            .map(|(games, (&s, &sb, &a, &ab))| (games, s, sb, a, ab))
    }

    /// Treats the columns as probability masses.
    pub fn summaries(&self) -> Vec<(&'static str, Summary)> {
        MODEL_NAMES.iter().copied().zip(self.columns().map(summarize)).collect()
    }
}

/// Validates `config`, resolves the seed and produces all four models.
pub fn estimate(config: &ClimbConfig) -> Result<GameDistributions> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, streams = config.streams, "seeding simulation");

    if config.streams == 1 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut distributions = estimate_with_rng(config, &mut rng)?;
        distributions.seed = Some(seed);
        return Ok(distributions);
    }

    let ladder = config.ladder();
    let t_sim = Instant::now();
    let plan = StreamPlan { seed, first_stream: 0, streams: config.streams };
    let simulated = simulate_pdf_streams(
        &WinRatePrior::Fixed(config.win_rate),
        config.stars_needed,
        config.trials,
        &ladder,
        &plan,
    )?;
    let bayes_plan = StreamPlan { first_stream: config.streams as u64, ..plan };
    let simulated_bayes = simulate_pdf_streams(
        &WinRatePrior::gaussian(config.win_rate, config.win_rate_error)?,
        config.stars_needed,
        config.trials,
        &ladder,
        &bayes_plan,
    )?;
    debug!(elapsed_s = t_sim.elapsed().as_secs_f64(), "parallel simulation done");

    let (analytical, analytical_bayes) = analytical_models(config);
    Ok(GameDistributions {
        seed: Some(seed),
        simulated,
        simulated_bayes,
        analytical,
        analytical_bayes,
    })
}

/// Sequential run on a caller-owned generator. Both simulators draw from the
/// same stream, the fixed-rate one first. `seed` in the result is `None`.
pub fn estimate_with_rng<R: Rng + ?Sized>(
    config: &ClimbConfig, rng: &mut R,
) -> Result<GameDistributions> {
    config.validate()?;
    let ladder = config.ladder();

    let t_sim = Instant::now();
    let simulated =
        simulate_pdf(config.win_rate, config.stars_needed, config.trials, &ladder, rng);
    let simulated_bayes = simulate_pdf_bayes(
        config.win_rate,
        config.stars_needed,
        config.trials,
        config.win_rate_error,
        &ladder,
        rng,
    )?;
    debug!(elapsed_s = t_sim.elapsed().as_secs_f64(), "simulation done");

    let (analytical, analytical_bayes) = analytical_models(config);
    Ok(GameDistributions { seed: None, simulated, simulated_bayes, analytical, analytical_bayes })
}

fn analytical_models(config: &ClimbConfig) -> (Vec<f64>, Vec<f64>) {
    let t_calc = Instant::now();
    let analytical = first_passage_pmf(config.win_rate, config.stars_needed, config.game_cap);
    let analytical_bayes = bayes_pmf(
        config.win_rate,
        config.stars_needed,
        config.game_cap,
        config.win_rate_error,
        &config.quadrature,
    );
    debug!(elapsed_s = t_calc.elapsed().as_secs_f64(), "analytical models done");
    (analytical, analytical_bayes)
}
