use rayon::prelude::*;

use super::combinatorics::{binomial, ln_binomial, power};

/// Probability that a walk needing `stars` net wins first reaches the target
/// at exactly game `games`, for an unbounded walk with per-game win
/// probability `win_rate`.
///
/// Every loss has to be paid back by a win, so a first passage at game `g`
/// has `(g - stars) / 2` losses and `stars + losses` wins. The unconditional
/// path probability is scaled by the ballot factor `stars / g`.
///
/// The walk has no reflecting floor, unlike the simulator.
pub fn first_passage_pdf(win_rate: f64, stars: u32, games: u32) -> f64 {
    if stars == 0 {
        return if games == 0 { 1.0 } else { 0.0 };
    }
    if games < stars || (games - stars) % 2 != 0 {
        return 0.0;
    }

    let losses = (games - stars) / 2;
    let ballot = stars as f64 / games as f64;

    let direct = binomial(games, losses)
        * power(win_rate * (1.0 - win_rate), i64::from(losses))
        * power(win_rate, i64::from(stars))
        * ballot;

    let value = if direct.is_finite() {
        direct
    } else {
        log_space_pdf(win_rate, stars, losses, ballot)
    };

    // NaN and negative underflow artifacts (win rates sampled outside [0, 1])
    // collapse to zero here.
    value.max(0.0)
}

/// Same product as the direct formula, evaluated through logarithms once the
/// binomial coefficient no longer fits in an f64.
fn log_space_pdf(win_rate: f64, stars: u32, losses: u32, ballot: f64) -> f64 {
    let wins = (stars + losses) as f64;
    let ln_value = ln_binomial(stars + 2 * losses, losses)
        + wins * win_rate.ln()
        + losses as f64 * (1.0 - win_rate).ln()
        + ballot.ln();
    ln_value.exp()
}

/// [`first_passage_pdf`] over every game index in `[0, game_cap)`.
pub fn first_passage_pmf(win_rate: f64, stars: u32, game_cap: u32) -> Vec<f64> {
    (0..game_cap)
        .into_par_iter()
        .map(|games| first_passage_pdf(win_rate, stars, games))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::prec::almost_eq;

    #[test]
    fn test_even_coin_two_stars() {
        let pmf = first_passage_pmf(0.5, 2, 10);
        assert_eq!(pmf.len(), 10);

        for (games, &p) in pmf.iter().enumerate() {
            let reachable = [2, 4, 6, 8].contains(&games);
            assert_eq!(p > 0.0, reachable, "games={games}, p={p}");
        }
        assert!(almost_eq(pmf[2], 0.25, 1e-15));
        // LWWW and WLWW
        assert!(almost_eq(pmf[4], 0.125, 1e-15));
    }

    #[test]
    fn test_infeasible_games_are_zero() {
        for &win_rate in &[0.2, 0.53, 0.9] {
            for stars in [1, 5, 20] {
                for games in 0..200 {
                    if games < stars || (games - stars) % 2 == 1 {
                        assert_eq!(first_passage_pdf(win_rate, stars, games), 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_mass_approaches_one() {
        let total: f64 = first_passage_pmf(0.6, 5, 1000).iter().sum();
        assert!((total - 1.0).abs() < 1e-7, "total={total}");

        // Drift 0.06 leaves a few percent of paths unfinished after 1000 games.
        let total: f64 = first_passage_pmf(0.53, 3, 1000).iter().sum();
        assert!(total > 0.9 && total < 1.0, "total={total}");
    }

    #[test]
    fn test_long_horizon_stays_finite() {
        let pmf = first_passage_pmf(0.55, 20, 3000);
        assert!(pmf.iter().all(|p| p.is_finite() && *p >= 0.0));
        assert!(pmf[1500] > 0.0);

        let total: f64 = pmf.iter().sum();
        assert!((total - 1.0).abs() < 1e-4, "total={total}");
    }

    #[test]
    fn test_certain_win() {
        assert_eq!(first_passage_pdf(1.0, 7, 7), 1.0);
        assert_eq!(first_passage_pdf(1.0, 7, 9), 0.0);
    }

    #[test]
    fn test_huge_counts_keep_positive_exponents() {
        let stars = 3_000_000_000;
        assert_eq!(first_passage_pdf(1.0, stars, stars), 1.0);
        assert_eq!(first_passage_pdf(0.5, stars, stars), 0.0);
    }

    #[test]
    fn test_out_of_range_win_rate_clamps() {
        for games in (3..400).step_by(2) {
            let p = first_passage_pdf(-0.01, 3, games);
            assert!(p >= 0.0 && p.is_finite());
            let p = first_passage_pdf(1.02, 3, games);
            assert!(p >= 0.0 && p.is_finite());
        }
    }
}
