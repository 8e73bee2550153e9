use std::io::{self, Write};

use prettytable::{Cell, Row, Table};
use serde::Serialize;

use legend_climb::distribution::Summary;
use legend_climb::estimate::MODEL_NAMES;
use legend_climb::{ClimbConfig, GameDistributions};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Pdf,
    Cdf,
}

/// printf-style `%12.04e`: four decimals, signed exponent of at least two digits.
pub fn scientific(v: f64) -> String {
    if !v.is_finite() {
        return format!("{:>12}", v.to_string().to_lowercase());
    }
    let formatted = format!("{:.4e}", v);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{:>12}", format!("{}e{}{:02}", mantissa, sign, exponent.abs()))
}

pub fn write_lines<W: Write>(out: &mut W, distributions: &GameDistributions) -> io::Result<()> {
    for (games, s, sb, a, ab) in distributions.rows() {
        writeln!(
            out,
            "{:8} {} {} {} {}",
            games,
            scientific(s),
            scientific(sb),
            scientific(a),
            scientific(ab)
        )?;
    }
    Ok(())
}

pub fn build_table(distributions: &GameDistributions) -> Table {
    let mut table = Table::new();
    let mut titles = vec![Cell::new("games")];
    titles.extend(MODEL_NAMES.iter().map(|name| Cell::new(name)));
    table.set_titles(Row::new(titles));

    for (games, s, sb, a, ab) in distributions.rows() {
        table.add_row(Row::new(vec![
            Cell::new(&games.to_string()),
            Cell::new(scientific(s).trim()),
            Cell::new(scientific(sb).trim()),
            Cell::new(scientific(a).trim()),
            Cell::new(scientific(ab).trim()),
        ]));
    }
    table
}

pub fn build_summary_table(pmf: &GameDistributions) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(vec![
        Cell::new("model"),
        Cell::new("Mass"),
        Cell::new("Mean"),
        Cell::new("P10"),
        Cell::new("P50"),
        Cell::new("P90"),
        Cell::new("P99"),
    ]));
    for (name, summary) in pmf.summaries() {
        table.add_row(row_from_summary(name, &summary));
    }
    table
}

fn row_from_summary(name: &str, s: &Summary) -> Row {
    let games = |v: Option<u32>| v.map_or_else(|| "-".to_string(), |g| g.to_string());

    Row::new(vec![
        Cell::new(name),
        Cell::new(&format!("{:.4}", s.mass)),
        Cell::new(&s.mean.map_or_else(|| "-".to_string(), |m| format!("{:.2}", m))),
        Cell::new(&games(s.p10)),
        Cell::new(&games(s.p50)),
        Cell::new(&games(s.p90)),
        Cell::new(&games(s.p99)),
    ])
}

#[derive(Serialize)]
struct JsonReport<'a> {
    config: &'a ClimbConfig,
    mode: Mode,
    distributions: &'a GameDistributions,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<Vec<(&'static str, Summary)>>,
}

pub fn write_json<W: Write>(
    out: &mut W, config: &ClimbConfig, mode: Mode, shown: &GameDistributions,
    summary: Option<&GameDistributions>,
) -> io::Result<()> {
    let report = JsonReport {
        config,
        mode,
        distributions: shown,
        summary: summary.map(GameDistributions::summaries),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}
