use std::path::PathBuf;
use std::process::{Command, Output};

fn bin_path() -> PathBuf { PathBuf::from(env!("CARGO_BIN_EXE_sim_legend_run")) }

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn columns(output: &Output) -> Vec<Vec<f64>> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(|field| field.parse::<f64>().unwrap())
                .collect()
        })
        .collect()
}

#[test]
fn cumulative_lines_by_default() {
    let out = run(&["--seed", "7", "-n", "2000", "--game-cap", "40", "--divisions", "50"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let rows = columns(&out);
    assert_eq!(rows.len(), 40);
    for (games, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), 5);
        assert_eq!(row[0], games as f64);
    }
    for column in 1..5 {
        assert!(rows.windows(2).all(|w| w[0][column] <= w[1][column] + 1e-4));
    }
}

#[test]
fn pdf_flag_and_legacy_aliases() {
    let out = run(&[
        "--seed", "7", "-n", "2000", "--game-cap", "30", "--wr", "0.6", "--wr-err", "0.02",
        "--stars", "2", "--pdf",
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let rows = columns(&out);
    assert_eq!(rows.len(), 30);
    // odd game counts cannot finish a two-star climb
    assert_eq!(rows[3][3], 0.0);
    assert!((rows[2][3] - 0.36).abs() < 1e-4);
}

#[test]
fn invalid_win_rate_fails() {
    let out = run(&["--win-rate", "1.5", "-n", "10"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("win rate"));
}

#[test]
fn json_report_carries_seed_and_summary() {
    let out = run(&[
        "--seed", "11", "-n", "500", "--game-cap", "25", "--divisions", "20", "--format",
        "json", "--summary",
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["mode"], "cdf");
    assert_eq!(v["config"]["seed"], 11);
    assert_eq!(v["distributions"]["seed"], 11);
    assert_eq!(v["distributions"]["analytical"].as_array().unwrap().len(), 25);
    assert_eq!(v["summary"].as_array().unwrap().len(), 4);
}

#[test]
fn same_seed_same_output() {
    let args = ["--seed", "5", "-n", "1000", "--game-cap", "60", "--streams", "2"];
    assert_eq!(run(&args).stdout, run(&args).stdout);
}

#[test]
fn json_config_records_entropy_seed() {
    let out = run(&["-n", "200", "--game-cap", "20", "--divisions", "20", "--format", "json"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(v["config"]["seed"].is_u64(), "config: {}", v["config"]);
    assert_eq!(v["config"]["seed"], v["distributions"]["seed"]);
}

#[test]
fn oversized_horizon_is_rejected() {
    let out = run(&["--game-cap", "4000000000", "-n", "10"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("game cap"));
}
