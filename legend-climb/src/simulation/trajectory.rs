use rand::Rng;
use serde::Serialize;

/// Stars-remaining value above which losses stop costing stars.
///
/// Models the rank tier where a player at zero stars cannot drop further;
/// the value comes from the ladder and is kept configurable via [`Ladder`].
pub const STAR_FLOOR: u32 = 26;

pub const DEFAULT_GAME_CAP: u32 = 1000;

/// Shape of the ladder every trajectory is played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ladder {
    /// Reflecting boundary on the stars still needed.
    pub star_floor: u32,
    /// Horizon: distributions cover game counts `[0, game_cap)`.
    pub game_cap: u32,
}

impl Default for Ladder {
    fn default() -> Self { Self { star_floor: STAR_FLOOR, game_cap: DEFAULT_GAME_CAP } }
}

/// Plays one climb and returns the number of games it took, counting the
/// final win. Returns `ladder.game_cap` if the target is not reached within
/// the horizon.
///
/// A win removes one star from the distance still to go; a loss adds one back
/// only while that distance is below the star floor.
pub fn simulate_trajectory<R: Rng + ?Sized>(
    win_rate: f64, stars_needed: u32, ladder: &Ladder, rng: &mut R,
) -> u32 {
    if stars_needed == 0 {
        return 0;
    }

    let mut remaining = stars_needed;
    let mut games = 0;
    while games < ladder.game_cap {
        games += 1;
        if rng.gen::<f64>() < win_rate {
            remaining -= 1;
            if remaining == 0 {
                return games;
            }
        } else if remaining < ladder.star_floor {
            remaining += 1;
        }
    }

    ladder.game_cap
}
