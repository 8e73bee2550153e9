use serde::Serialize;

use crate::error::{ClimbError, Result};
use crate::math::Quadrature;
use crate::simulation::{Ladder, DEFAULT_GAME_CAP, STAR_FLOOR};

pub const DEFAULT_TRIALS: u64 = 100_000;
pub const DEFAULT_WIN_RATE: f64 = 0.53;
pub const DEFAULT_WIN_RATE_ERROR: f64 = 0.01;
pub const DEFAULT_STARS_NEEDED: u32 = 20;
/// Largest accepted horizon; every model allocates one bucket per game.
pub const MAX_GAME_CAP: u32 = 1_000_000;

/// Everything one estimation run depends on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimbConfig {
    pub trials: u64,
    pub win_rate: f64,
    /// Standard deviation of the Gaussian prior on `win_rate`.
    pub win_rate_error: f64,
    pub stars_needed: u32,
    pub game_cap: u32,
    pub star_floor: u32,
    pub quadrature: Quadrature,
    /// `None` draws a seed from OS entropy.
    pub seed: Option<u64>,
    /// 1 keeps both simulators on a single shared generator.
    pub streams: usize,
}

impl Default for ClimbConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            win_rate: DEFAULT_WIN_RATE,
            win_rate_error: DEFAULT_WIN_RATE_ERROR,
            stars_needed: DEFAULT_STARS_NEEDED,
            game_cap: DEFAULT_GAME_CAP,
            star_floor: STAR_FLOOR,
            quadrature: Quadrature::default(),
            seed: None,
            streams: 1,
        }
    }
}

impl ClimbConfig {
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(ClimbError::InvalidTrials(self.trials));
        }
        if !(self.win_rate > 0.0 && self.win_rate < 1.0) {
            return Err(ClimbError::InvalidWinRate(self.win_rate));
        }
        if !(self.win_rate_error.is_finite() && self.win_rate_error >= 0.0) {
            return Err(ClimbError::InvalidWinRateError(self.win_rate_error));
        }
        if self.stars_needed == 0 {
            return Err(ClimbError::InvalidStars);
        }
        if self.game_cap == 0 || self.game_cap > MAX_GAME_CAP {
            return Err(ClimbError::InvalidGameCap(self.game_cap));
        }
        if self.star_floor == 0 {
            return Err(ClimbError::InvalidStarFloor);
        }
        if self.streams == 0 {
            return Err(ClimbError::InvalidStreams);
        }
        self.quadrature.validate()
    }

    pub fn ladder(&self) -> Ladder { Ladder { star_floor: self.star_floor, game_cap: self.game_cap } }
}
