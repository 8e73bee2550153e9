use std::f64::consts::PI;

use rayon::prelude::*;
use serde::Serialize;

use super::first_passage::first_passage_pdf;
use crate::error::{ClimbError, Result};

/// Numerical settings for integrating over the win-rate prior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quadrature {
    /// Number of equal subintervals of the integration domain.
    pub divisions: u32,
    /// Half width of the integration domain in standard deviations.
    pub sigma_width: f64,
}

impl Default for Quadrature {
    fn default() -> Self { Self { divisions: 1000, sigma_width: 3.0 } }
}

impl Quadrature {
    pub fn validate(&self) -> Result<()> {
        if self.divisions == 0 || !(self.sigma_width.is_finite() && self.sigma_width > 0.0) {
            return Err(ClimbError::InvalidQuadrature {
                divisions: self.divisions,
                sigma_width: self.sigma_width,
            });
        }
        Ok(())
    }
}

/// Expected [`first_passage_pdf`] when the win rate itself is drawn from
/// `N(win_rate, win_rate_error²)`.
///
/// Left-endpoint Riemann sum over `win_rate ± sigma_width·win_rate_error`,
/// taken in standard-normal coordinates `z` so the weights do not depend on
/// how finely f64 resolves samples around `win_rate`. The Gaussian
/// normalization is applied once to the total. A zero `win_rate_error` is
/// the point-mass prior and returns the plain pdf.
pub fn bayes_pdf(
    win_rate: f64, stars: u32, games: u32, win_rate_error: f64, quadrature: &Quadrature,
) -> f64 {
    if win_rate_error == 0.0 {
        return first_passage_pdf(win_rate, stars, games);
    }

    let z_step = 2.0 * quadrature.sigma_width / quadrature.divisions as f64;

    let total: f64 = (0..quadrature.divisions)
        .map(|i| {
            let z = -quadrature.sigma_width + i as f64 * z_step;
            let sample = win_rate + z * win_rate_error;
            z_step * (-0.5 * z * z).exp() * first_passage_pdf(sample, stars, games)
        })
        .sum();

    total / (2.0 * PI).sqrt()
}

/// [`bayes_pdf`] over every game index in `[0, game_cap)`.
pub fn bayes_pmf(
    win_rate: f64, stars: u32, game_cap: u32, win_rate_error: f64, quadrature: &Quadrature,
) -> Vec<f64> {
    (0..game_cap)
        .into_par_iter()
        .map(|games| bayes_pdf(win_rate, stars, games, win_rate_error, quadrature))
        .collect()
}
