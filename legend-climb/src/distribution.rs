use serde::Serialize;

/// Prefix sums of a probability mass over game counts.
pub fn to_cumulative(pmf: &[f64]) -> Vec<f64> {
    pmf.iter()
        .scan(0.0, |total, &p| {
            *total += p;
            Some(*total)
        })
        .collect()
}

/// Probability of reaching the target within the horizon.
pub fn total_mass(pmf: &[f64]) -> f64 { pmf.iter().sum() }

/// Expected game count, conditional on finishing within the horizon.
pub fn mean_games(pmf: &[f64]) -> Option<f64> {
    let mass = total_mass(pmf);
    if mass <= 0.0 {
        return None;
    }
    let weighted: f64 = pmf.iter().enumerate().map(|(games, p)| games as f64 * p).sum();
    Some(weighted / mass)
}

/// Smallest game count whose cumulative probability reaches `q`.
pub fn quantile_games(cdf: &[f64], q: f64) -> Option<u32> {
    cdf.iter().position(|&c| c >= q).map(|games| games as u32)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub mass: f64,
    pub mean: Option<f64>,
    pub p10: Option<u32>,
    pub p50: Option<u32>,
    pub p90: Option<u32>,
    pub p99: Option<u32>,
}

pub fn summarize(pmf: &[f64]) -> Summary {
    let cdf = to_cumulative(pmf);
    let pick = |q: f64| quantile_games(&cdf, q);

    Summary {
        mass: total_mass(pmf),
        mean: mean_games(pmf),
        p10: pick(0.1),
        p50: pick(0.5),
        p90: pick(0.9),
        p99: pick(0.99),
    }
}
