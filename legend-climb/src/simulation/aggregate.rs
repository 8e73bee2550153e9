use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;

use super::trajectory::{simulate_trajectory, Ladder};
use crate::error::{ClimbError, Result};

/// Where each trajectory's win rate comes from.
#[derive(Debug, Clone, Copy)]
pub enum WinRatePrior {
    Fixed(f64),
    /// A fresh win rate is drawn for every trajectory.
    Gaussian(Normal<f64>),
}

impl WinRatePrior {
    pub fn gaussian(win_rate: f64, win_rate_error: f64) -> Result<Self> {
        Normal::new(win_rate, win_rate_error)
            .map(WinRatePrior::Gaussian)
            .map_err(|_| ClimbError::InvalidWinRateError(win_rate_error))
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            WinRatePrior::Fixed(win_rate) => *win_rate,
            WinRatePrior::Gaussian(normal) => normal.sample(rng),
        }
    }
}

/// Splits the trials of one simulator over independent ChaCha streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamPlan {
    pub seed: u64,
    /// Stream number of the first worker; workers use consecutive streams.
    pub first_stream: u64,
    pub streams: usize,
}

/// Empirical distribution of the game count over `trials` climbs at a fixed
/// win rate. Saturated climbs fall outside `[0, game_cap)` and are dropped.
pub fn simulate_pdf<R: Rng + ?Sized>(
    win_rate: f64, stars: u32, trials: u64, ladder: &Ladder, rng: &mut R,
) -> Vec<f64> {
    let counts = histogram(&WinRatePrior::Fixed(win_rate), stars, trials, ladder, rng);
    normalize(&counts, trials)
}

/// Like [`simulate_pdf`], but every climb first draws its own win rate from
/// `N(win_rate, win_rate_error²)`.
pub fn simulate_pdf_bayes<R: Rng + ?Sized>(
    win_rate: f64, stars: u32, trials: u64, win_rate_error: f64, ladder: &Ladder, rng: &mut R,
) -> Result<Vec<f64>> {
    let prior = WinRatePrior::gaussian(win_rate, win_rate_error)?;
    let counts = histogram(&prior, stars, trials, ladder, rng);
    Ok(normalize(&counts, trials))
}

/// Runs the trials on `plan.streams` generators in parallel and merges the
/// histograms. The result depends only on the prior, the trial count and the
/// plan, not on thread scheduling.
pub fn simulate_pdf_streams(
    prior: &WinRatePrior, stars: u32, trials: u64, ladder: &Ladder, plan: &StreamPlan,
) -> Result<Vec<f64>> {
    if plan.streams == 0 {
        return Err(ClimbError::InvalidStreams);
    }
    let streams = plan.streams as u64;

    let counts = (0..streams)
        .into_par_iter()
        .map(|index| {
            let mut rng = ChaCha8Rng::seed_from_u64(plan.seed);
            rng.set_stream(plan.first_stream + index);
            let share = trials / streams + u64::from(index < trials % streams);
            histogram(prior, stars, share, ladder, &mut rng)
        })
        .reduce(
            || vec![0; ladder.game_cap as usize],
            |mut merged, part| {
                merged.iter_mut().zip(part).for_each(|(total, count)| *total += count);
                merged
            },
        );

    Ok(normalize(&counts, trials))
}

fn histogram<R: Rng + ?Sized>(
    prior: &WinRatePrior, stars: u32, trials: u64, ladder: &Ladder, rng: &mut R,
) -> Vec<u64> {
    let mut counts = vec![0; ladder.game_cap as usize];
    for _ in 0..trials {
        let win_rate = prior.draw(rng);
        let games = simulate_trajectory(win_rate, stars, ladder, rng);
        if let Some(bucket) = counts.get_mut(games as usize) {
            *bucket += 1;
        }
    }
    counts
}

fn normalize(counts: &[u64], trials: u64) -> Vec<f64> {
    if trials == 0 {
        return vec![0.0; counts.len()];
    }
    counts.iter().map(|&count| count as f64 / trials as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::STAR_FLOOR;

    fn ladder(game_cap: u32) -> Ladder { Ladder { star_floor: STAR_FLOOR, game_cap } }

    #[test]
    fn test_certain_wins_fill_one_bucket() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let pdf = simulate_pdf(1.0, 12, 500, &ladder(50), &mut rng);
        assert_eq!(pdf.len(), 50);
        assert_eq!(pdf[12], 1.0);
        assert_eq!(pdf.iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn test_saturated_climbs_are_dropped() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let pdf = simulate_pdf(0.0, 3, 1000, &ladder(40), &mut rng);
        assert!(pdf.iter().all(|&p| p == 0.0));

        // Most of these climbs need more than 40 games.
        let pdf = simulate_pdf(0.5, 6, 10_000, &ladder(40), &mut rng);
        let mass: f64 = pdf.iter().sum();
        assert!(mass > 0.2 && mass < 0.6, "mass={mass}");
    }

    #[test]
    fn test_bayes_rejects_negative_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(
            simulate_pdf_bayes(0.5, 3, 10, -0.1, &ladder(10), &mut rng),
            Err(ClimbError::InvalidWinRateError(-0.1))
        );
    }

    #[test]
    fn test_bayes_zero_error_matches_fixed_rate() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let pdf = simulate_pdf_bayes(1.0, 4, 200, 0.0, &ladder(10), &mut rng).unwrap();
        assert_eq!(pdf[4], 1.0);
    }

    #[test]
    fn test_streams_are_reproducible() {
        let plan = StreamPlan { seed: 99, first_stream: 0, streams: 4 };
        let prior = WinRatePrior::gaussian(0.55, 0.02).unwrap();
        let a = simulate_pdf_streams(&prior, 10, 4_001, &ladder(300), &plan).unwrap();
        let b = simulate_pdf_streams(&prior, 10, 4_001, &ladder(300), &plan).unwrap();
        assert_eq!(a, b);

        let other = StreamPlan { first_stream: 4, ..plan };
        let c = simulate_pdf_streams(&prior, 10, 4_001, &ladder(300), &other).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_streams_split_every_trial() {
        let plan = StreamPlan { seed: 1, first_stream: 0, streams: 3 };
        let pdf =
            simulate_pdf_streams(&WinRatePrior::Fixed(1.0), 2, 10, &ladder(5), &plan).unwrap();
        assert_eq!(pdf[2], 1.0);

        let none = StreamPlan { streams: 0, ..plan };
        assert_eq!(
            simulate_pdf_streams(&WinRatePrior::Fixed(1.0), 2, 10, &ladder(5), &none),
            Err(ClimbError::InvalidStreams)
        );
    }
}
