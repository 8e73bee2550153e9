/// Exact binomial coefficient C(n, m) through the multiplicative recurrence
/// ∏ (n - i) / (m - i), iterating over the smaller of `m` and `n - m`.
pub fn binomial(n: u32, m: u32) -> f64 {
    if m > n {
        return 0.0;
    }
    let m = if m > n / 2 { n - m } else { m };

    let mut value = 1.0;
    for i in 0..m {
        value *= (n - i) as f64;
        value /= (m - i) as f64;
    }
    value
}

/// ln C(n, m), built from the same recurrence so it stays finite where
/// [`binomial`] overflows.
pub fn ln_binomial(n: u32, m: u32) -> f64 {
    if m > n {
        return f64::NEG_INFINITY;
    }
    let m = if m > n / 2 { n - m } else { m };

    (0..m).map(|i| ((n - i) as f64 / (m - i) as f64).ln()).sum()
}

/// Integer exponentiation by squaring. Negative exponents give the reciprocal
/// of the positive power.
pub fn power(base: f64, exponent: i64) -> f64 {
    let mut value = 1.0;
    let mut square = base;
    let mut remaining = exponent.unsigned_abs();

    while remaining > 0 {
        if remaining % 2 == 1 {
            value *= square;
        }
        square *= square;
        remaining /= 2;
    }

    if exponent < 0 {
        1.0 / value
    } else {
        value
    }
}
