mod aggregate;
mod trajectory;

pub use self::{
    aggregate::{simulate_pdf, simulate_pdf_bayes, simulate_pdf_streams, StreamPlan, WinRatePrior},
    trajectory::{simulate_trajectory, Ladder, DEFAULT_GAME_CAP, STAR_FLOOR},
};
