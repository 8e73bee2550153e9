use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClimbError {
    #[error("trial count must be positive, got {0}")]
    InvalidTrials(u64),

    #[error("win rate must lie strictly between 0 and 1, got {0}")]
    InvalidWinRate(f64),

    #[error("win rate error must be a finite non-negative number, got {0}")]
    InvalidWinRateError(f64),

    #[error("stars needed must be positive")]
    InvalidStars,

    #[error("game cap must be between 1 and {max}, got {0}", max = crate::config::MAX_GAME_CAP)]
    InvalidGameCap(u32),

    #[error("star floor must be positive")]
    InvalidStarFloor,

    #[error("quadrature needs at least one division and a positive sigma width, got {divisions} divisions and width {sigma_width}")]
    InvalidQuadrature { divisions: u32, sigma_width: f64 },

    #[error("at least one random stream is required")]
    InvalidStreams,
}

pub type Result<T> = std::result::Result<T, ClimbError>;
