use clap::{Parser, ValueEnum};

use legend_climb::config::{
    DEFAULT_STARS_NEEDED, DEFAULT_TRIALS, DEFAULT_WIN_RATE, DEFAULT_WIN_RATE_ERROR,
};
use legend_climb::math::Quadrature;
use legend_climb::simulation::{DEFAULT_GAME_CAP, STAR_FLOOR};
use legend_climb::ClimbConfig;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One fixed-width line per game count
    Lines,
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "sim_legend_run")]
#[command(about = "Estimate how many ranked games it takes to climb to Legend")]
pub struct Args {
    /// Simulated climbs per simulator
    #[arg(short = 'n', long = "trials", default_value_t = DEFAULT_TRIALS)]
    pub trials: u64,

    /// Per-game win probability
    #[arg(long = "win-rate", visible_alias = "wr", default_value_t = DEFAULT_WIN_RATE)]
    pub win_rate: f64,

    /// Gaussian error on the win rate
    #[arg(
        long = "win-rate-error",
        visible_alias = "wr-err",
        default_value_t = DEFAULT_WIN_RATE_ERROR
    )]
    pub win_rate_error: f64,

    /// Stars needed to reach Legend
    #[arg(long = "stars", default_value_t = DEFAULT_STARS_NEEDED)]
    pub stars: u32,

    /// Print the probability mass instead of the cumulative distribution
    #[arg(long = "pdf")]
    pub pdf: bool,

    /// Largest game count considered (exclusive)
    #[arg(long = "game-cap", default_value_t = DEFAULT_GAME_CAP)]
    pub game_cap: u32,

    /// Stars-remaining value above which losses stop costing stars
    #[arg(long = "star-floor", default_value_t = STAR_FLOOR)]
    pub star_floor: u32,

    /// Subintervals of the win-rate integral
    #[arg(long = "divisions", default_value_t = Quadrature::default().divisions)]
    pub divisions: u32,

    /// Half width of the win-rate integral, in standard deviations
    #[arg(long = "sigma-width", default_value_t = Quadrature::default().sigma_width)]
    pub sigma_width: f64,

    /// Generator seed. Drawn from OS entropy when omitted
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Independent generator streams for the simulators (1 = one shared sequential stream)
    #[arg(long = "streams", default_value_t = 1)]
    pub streams: usize,

    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,

    /// Also print mass, mean and percentiles of every model
    #[arg(long = "summary")]
    pub summary: bool,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: tracing::Level,
}

impl Args {
    pub fn to_config(&self) -> ClimbConfig {
        ClimbConfig {
            trials: self.trials,
            win_rate: self.win_rate,
            win_rate_error: self.win_rate_error,
            stars_needed: self.stars,
            game_cap: self.game_cap,
            star_floor: self.star_floor,
            quadrature: Quadrature { divisions: self.divisions, sigma_width: self.sigma_width },
            seed: self.seed,
            streams: self.streams,
        }
    }
}
